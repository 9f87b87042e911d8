use crate::angle::axis_orientation;
use crate::types::{sort_family, Line, LineFamily, Orientation};
use serde::Serialize;

/// Raw detector lines partitioned into the two axis families.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ClassifiedLines {
    pub horizontal: LineFamily,
    pub vertical: LineFamily,
}

impl ClassifiedLines {
    pub fn family(&self, orientation: Orientation) -> &[Line] {
        match orientation {
            Orientation::Horizontal => &self.horizontal,
            Orientation::Vertical => &self.vertical,
        }
    }

    pub fn total(&self) -> usize {
        self.horizontal.len() + self.vertical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Partition raw lines into horizontal and vertical families.
///
/// A line joins the horizontal family when `|theta - π/2| <= delta_theta` and
/// `0 <= rho < rows`; otherwise it joins the vertical family when
/// `|theta| <= delta_theta` and `0 <= rho < cols`. Anything else is dropped.
/// Both families come back sorted by `(rho, theta)`.
pub fn classify_lines(lines: &[Line], rows: usize, cols: usize, delta_theta: f32) -> ClassifiedLines {
    let mut out = ClassifiedLines::default();
    for line in lines {
        match axis_orientation(line.theta, delta_theta) {
            Some(Orientation::Horizontal) if within_extent(line.rho, rows) => {
                out.horizontal.push(*line)
            }
            // A line in the horizontal window never falls through to the vertical test.
            Some(Orientation::Horizontal) => {}
            Some(Orientation::Vertical) if within_extent(line.rho, cols) => {
                out.vertical.push(*line)
            }
            _ => {}
        }
    }
    sort_family(&mut out.horizontal);
    sort_family(&mut out.vertical);
    out
}

#[inline]
fn within_extent(rho: f32, extent: usize) -> bool {
    rho >= 0.0 && rho < extent as f32
}
