//! Orientation tests on normal-form angles.

use crate::types::Orientation;
use std::f32::consts::FRAC_PI_2;

/// True when the normal angle lies within `tol` of π/2 (a horizontal line).
#[inline]
pub fn is_horizontal(theta: f32, tol: f32) -> bool {
    (theta - FRAC_PI_2).abs() <= tol
}

/// True when the normal angle lies within `tol` of 0 (a vertical line).
#[inline]
pub fn is_vertical(theta: f32, tol: f32) -> bool {
    theta.abs() <= tol
}

/// Classifies a normal angle, checking horizontal first.
///
/// Both windows can only overlap for tolerances of at least π/4, in which
/// case the horizontal family wins.
#[inline]
pub fn axis_orientation(theta: f32, tol: f32) -> Option<Orientation> {
    if is_horizontal(theta, tol) {
        Some(Orientation::Horizontal)
    } else if is_vertical(theta, tol) {
        Some(Orientation::Vertical)
    } else {
        None
    }
}

/// Same as [`is_horizontal`] / [`is_vertical`] selected by orientation.
#[inline]
pub fn is_axis_aligned(theta: f32, orientation: Orientation, tol: f32) -> bool {
    match orientation {
        Orientation::Horizontal => is_horizontal(theta, tol),
        Orientation::Vertical => is_vertical(theta, tol),
    }
}
