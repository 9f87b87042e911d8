//! Normal-form line geometry.
//!
//! Lines are lifted to homogeneous coordinates `l = (cos θ, sin θ, -ρ)` so that
//! a point `p = (x, y, 1)` lies on the line iff `l·p = 0`. The intersection of
//! two lines is then the cross product `l₁ × l₂`, whose third component is
//! `sin(θ₂ - θ₁)` and vanishes exactly when the lines are parallel.

use crate::error::GridError;
use crate::types::Line;
use nalgebra::{Point2, Vector3};

/// Intersections with `|sin(Δθ)|` below this are treated as parallel.
const PARALLEL_EPS: f64 = 1e-9;

/// Homogeneous coefficients `(a, b, c)` of `a·x + b·y + c = 0`.
#[inline]
pub fn homogeneous(line: &Line) -> Vector3<f64> {
    let theta = line.theta as f64;
    Vector3::new(theta.cos(), theta.sin(), -(line.rho as f64))
}

/// Intersects two normal-form lines.
///
/// Returns [`GridError::ParallelLines`] instead of infinite or NaN
/// coordinates when the normals coincide.
pub fn intersect(first: &Line, second: &Line) -> Result<Point2<f64>, GridError> {
    let p = homogeneous(first).cross(&homogeneous(second));
    if !p.z.is_finite() || p.z.abs() < PARALLEL_EPS {
        return Err(GridError::ParallelLines {
            first: *first,
            second: *second,
        });
    }
    Ok(Point2::new(p.x / p.z, p.y / p.z))
}

/// Point at parameter `t` on the segment `p0 → p1` (`t = 0` gives `p0`).
#[inline]
pub fn lerp(p0: &Point2<f64>, p1: &Point2<f64>, t: f64) -> Point2<f64> {
    p0 + (p1 - p0) * t
}
