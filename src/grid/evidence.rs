//! Randomized pixel-evidence test for candidate grid lines.
//!
//! Instead of rasterizing a whole (possibly off-canvas) line, `try_count`
//! probe points are drawn inside the span delimited by the two extreme lines
//! of the opposite family, and each probe checks a small neighbourhood of the
//! edge mask. A probe hits when any pixel in the neighbourhood is an edge.
//!
//! Three probe modes exist:
//! - axis-aligned horizontal line: random column between the outermost vertical
//!   lines, row fixed at `round(rho)`, scanning a vertical band of rows;
//! - axis-aligned vertical line: symmetric, random row and fixed column;
//! - oblique line: endpoints are the intersections with the two bounding lines
//!   and probes are drawn uniformly along that segment, scanning a square.
//!
//! The acceptance ratio is a plain sum over independent probes, so it does not
//! depend on the order in which probes are evaluated.

use crate::angle::is_axis_aligned;
use crate::error::GridError;
use crate::geometry::{intersect, lerp};
use crate::mask::EdgeMask;
use crate::types::{Line, Orientation};
use nalgebra::Point2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Sampling knobs for a single evidence test.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvidenceParams {
    /// Number of random probes per line.
    pub try_count: usize,
    /// Minimum hit fraction for a line to count as supported.
    pub expectation: f64,
    /// Neighbourhood half-width around each probe (pixels).
    pub radius: usize,
    /// Angular tolerance selecting the axis-aligned fast path (radians).
    pub axis_delta_theta: f32,
}

impl Default for EvidenceParams {
    fn default() -> Self {
        Self {
            try_count: 200,
            expectation: 0.5,
            radius: 1,
            axis_delta_theta: std::f32::consts::PI / 720.0,
        }
    }
}

/// Extremal lines of the opposite family bounding the probe span.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplingBounds {
    pub first: Line,
    pub last: Line,
}

impl SamplingBounds {
    /// Bounds for sampling lines of `target` orientation, taken from the first
    /// and last line of the (sorted) opposite family.
    pub fn from_family(bounding: &[Line], target: Orientation) -> Result<Self, GridError> {
        match (bounding.first(), bounding.last()) {
            (Some(first), Some(last)) => Ok(Self {
                first: *first,
                last: *last,
            }),
            _ => Err(GridError::EmptyBoundingFamily { target }),
        }
    }

    /// Integer `rho` range of the bounds, truncated toward zero.
    fn rho_range(&self) -> (i64, i64) {
        let a = self.first.rho as i64;
        let b = self.last.rho as i64;
        (a.min(b), a.max(b))
    }
}

/// Outcome of sampling one line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Evidence {
    pub hits: usize,
    pub tries: usize,
}

impl Evidence {
    /// Fraction of probes that hit; zero when nothing was sampled.
    pub fn ratio(&self) -> f64 {
        if self.tries == 0 {
            0.0
        } else {
            self.hits as f64 / self.tries as f64
        }
    }

    pub fn supports(&self, expectation: f64) -> bool {
        self.tries > 0 && self.ratio() >= expectation
    }
}

enum ProbePlan {
    AxisHorizontal { y: i64, x_lo: i64, x_hi: i64 },
    AxisVertical { x: i64, y_lo: i64, y_hi: i64 },
    Oblique { p0: Point2<f64>, p1: Point2<f64> },
}

impl ProbePlan {
    fn new(
        line: &Line,
        orientation: Orientation,
        bounds: &SamplingBounds,
        axis_delta_theta: f32,
    ) -> Result<Self, GridError> {
        if is_axis_aligned(line.theta, orientation, axis_delta_theta) {
            let fixed = line.rho.round() as i64;
            let (lo, hi) = bounds.rho_range();
            return Ok(match orientation {
                Orientation::Horizontal => ProbePlan::AxisHorizontal {
                    y: fixed,
                    x_lo: lo,
                    x_hi: hi,
                },
                Orientation::Vertical => ProbePlan::AxisVertical {
                    x: fixed,
                    y_lo: lo,
                    y_hi: hi,
                },
            });
        }
        let p0 = intersect(line, &bounds.first)?;
        let p1 = intersect(line, &bounds.last)?;
        Ok(ProbePlan::Oblique { p0, p1 })
    }

    fn probe<R: Rng + ?Sized>(&self, mask: &EdgeMask<'_>, radius: usize, rng: &mut R) -> bool {
        match *self {
            ProbePlan::AxisHorizontal { y, x_lo, x_hi } => {
                mask.witness_horizontal(rng.gen_range(x_lo..=x_hi), y, radius)
            }
            ProbePlan::AxisVertical { x, y_lo, y_hi } => {
                mask.witness_vertical(x, rng.gen_range(y_lo..=y_hi), radius)
            }
            ProbePlan::Oblique { p0, p1 } => {
                let p = lerp(&p0, &p1, rng.gen::<f64>());
                mask.witness_point(p.x.round() as i64, p.y.round() as i64, radius)
            }
        }
    }
}

/// Draw `params.try_count` probes along `line` and count the hits.
///
/// `orientation` is the family the line was classified into; `bounds` come from
/// the opposite family. Fails only when an oblique line is parallel to one of
/// the bounding lines.
pub fn sample_line<R: Rng + ?Sized>(
    mask: &EdgeMask<'_>,
    line: &Line,
    orientation: Orientation,
    bounds: &SamplingBounds,
    params: &EvidenceParams,
    rng: &mut R,
) -> Result<Evidence, GridError> {
    let plan = ProbePlan::new(line, orientation, bounds, params.axis_delta_theta)?;
    let hits = (0..params.try_count)
        .filter(|_| plan.probe(mask, params.radius, rng))
        .count();
    Ok(Evidence {
        hits,
        tries: params.try_count,
    })
}

/// Convenience wrapper: sample and compare against `params.expectation`.
pub fn is_supported<R: Rng + ?Sized>(
    mask: &EdgeMask<'_>,
    line: &Line,
    orientation: Orientation,
    bounding: &[Line],
    params: &EvidenceParams,
    rng: &mut R,
) -> Result<bool, GridError> {
    let bounds = SamplingBounds::from_family(bounding, orientation)?;
    let evidence = sample_line(mask, line, orientation, &bounds, params, rng)?;
    Ok(evidence.supports(params.expectation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageU8;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::f32::consts::FRAC_PI_2;

    const W: usize = 120;
    const H: usize = 80;

    fn draw_row(data: &mut [u8], y: usize, x0: usize, x1: usize) {
        for x in x0..x1 {
            data[y * W + x] = 255;
        }
    }

    fn draw_col(data: &mut [u8], x: usize, y0: usize, y1: usize) {
        for y in y0..y1 {
            data[y * W + x] = 255;
        }
    }

    fn verticals() -> Vec<Line> {
        vec![Line::new(10.0, 0.0), Line::new(110.0, 0.0)]
    }

    fn horizontals() -> Vec<Line> {
        vec![Line::new(10.0, FRAC_PI_2), Line::new(70.0, FRAC_PI_2)]
    }

    #[test]
    fn drawn_horizontal_line_is_fully_supported() {
        let mut data = vec![0u8; W * H];
        draw_row(&mut data, 40, 0, W);
        let mask = EdgeMask::with_default_threshold(ImageU8::new(W, H, &data));
        let bounds = SamplingBounds::from_family(&verticals(), Orientation::Horizontal).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let params = EvidenceParams::default();
        let ev = sample_line(
            &mask,
            &Line::new(41.0, FRAC_PI_2),
            Orientation::Horizontal,
            &bounds,
            &params,
            &mut rng,
        )
        .unwrap();
        assert_eq!(ev.tries, params.try_count);
        assert_eq!(ev.hits, params.try_count);
    }

    #[test]
    fn blank_mask_rejects_every_line() {
        let data = vec![0u8; W * H];
        let mask = EdgeMask::with_default_threshold(ImageU8::new(W, H, &data));
        let mut rng = StdRng::seed_from_u64(1);
        let params = EvidenceParams::default();
        let ok = is_supported(
            &mask,
            &Line::new(30.0, 0.0),
            Orientation::Vertical,
            &horizontals(),
            &params,
            &mut rng,
        )
        .unwrap();
        assert!(!ok);
    }

    #[test]
    fn half_drawn_vertical_line_is_near_half() {
        let mut data = vec![0u8; W * H];
        draw_col(&mut data, 50, 10, 40);
        let mask = EdgeMask::with_default_threshold(ImageU8::new(W, H, &data));
        let bounds = SamplingBounds::from_family(&horizontals(), Orientation::Vertical).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let params = EvidenceParams {
            try_count: 2000,
            ..Default::default()
        };
        let ev = sample_line(
            &mask,
            &Line::new(50.0, 0.0),
            Orientation::Vertical,
            &bounds,
            &params,
            &mut rng,
        )
        .unwrap();
        let ratio = ev.ratio();
        assert!(ratio > 0.4 && ratio < 0.65, "ratio={ratio}");
    }

    #[test]
    fn oblique_line_uses_segment_between_bounds() {
        // Normal angle slightly off π/2: the line rises across the image.
        let line = Line::new(40.0, FRAC_PI_2 - 0.05);
        let bounds = SamplingBounds::from_family(&verticals(), Orientation::Horizontal).unwrap();
        let p0 = intersect(&line, &bounds.first).unwrap();
        let p1 = intersect(&line, &bounds.last).unwrap();
        let mut data = vec![0u8; W * H];
        for i in 0..=400 {
            let p = lerp(&p0, &p1, i as f64 / 400.0);
            let (x, y) = (p.x.round() as usize, p.y.round() as usize);
            data[y * W + x] = 255;
        }
        let mask = EdgeMask::with_default_threshold(ImageU8::new(W, H, &data));
        let mut rng = StdRng::seed_from_u64(11);
        let ev = sample_line(
            &mask,
            &line,
            Orientation::Horizontal,
            &bounds,
            &EvidenceParams::default(),
            &mut rng,
        )
        .unwrap();
        assert_eq!(ev.hits, ev.tries);
    }

    #[test]
    fn zero_length_oblique_span_samples_one_point() {
        let line = Line::new(30.0, 0.3);
        let vertical = Line::new(20.0, 0.0);
        let bounds = SamplingBounds {
            first: vertical,
            last: vertical,
        };
        let p = intersect(&line, &vertical).unwrap();
        let mut data = vec![0u8; W * H];
        data[p.y.round() as usize * W + p.x.round() as usize] = 255;
        let mask = EdgeMask::with_default_threshold(ImageU8::new(W, H, &data));
        let mut rng = StdRng::seed_from_u64(5);
        let ev = sample_line(
            &mask,
            &line,
            Orientation::Horizontal,
            &bounds,
            &EvidenceParams::default(),
            &mut rng,
        )
        .unwrap();
        assert_eq!(ev.hits, ev.tries);
    }

    #[test]
    fn empty_bounding_family_is_an_error() {
        let data = vec![0u8; W * H];
        let mask = EdgeMask::with_default_threshold(ImageU8::new(W, H, &data));
        let mut rng = StdRng::seed_from_u64(0);
        let res = is_supported(
            &mask,
            &Line::new(30.0, FRAC_PI_2),
            Orientation::Horizontal,
            &[],
            &EvidenceParams::default(),
            &mut rng,
        );
        assert_eq!(
            res,
            Err(GridError::EmptyBoundingFamily {
                target: Orientation::Horizontal
            })
        );
    }

    #[test]
    fn oblique_line_parallel_to_bound_is_reported() {
        let data = vec![0u8; W * H];
        let mask = EdgeMask::with_default_threshold(ImageU8::new(W, H, &data));
        let tilted = 0.2f32;
        let bounds = SamplingBounds {
            first: Line::new(10.0, tilted),
            last: Line::new(90.0, tilted),
        };
        let mut rng = StdRng::seed_from_u64(0);
        let res = sample_line(
            &mask,
            &Line::new(40.0, tilted),
            Orientation::Vertical,
            &bounds,
            &EvidenceParams::default(),
            &mut rng,
        );
        assert!(matches!(res, Err(GridError::ParallelLines { .. })));
    }

    #[test]
    fn zero_tries_never_supports() {
        let ev = Evidence { hits: 0, tries: 0 };
        assert_eq!(ev.ratio(), 0.0);
        assert!(!ev.supports(0.0));
    }
}
