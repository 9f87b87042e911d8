use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Infinite line in normal (Hesse) form: `x·cos(theta) + y·sin(theta) = rho`.
///
/// `rho` is measured in pixels from the image's top-left corner and `theta`
/// is the angle of the normal in radians, conventionally in `[0, π)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub rho: f32,
    pub theta: f32,
}

impl Line {
    pub const fn new(rho: f32, theta: f32) -> Self {
        Self { rho, theta }
    }

    /// Canonical family order: ascending `rho`, ties broken by `theta`.
    pub fn cmp_rho_theta(&self, other: &Line) -> Ordering {
        self.rho
            .partial_cmp(&other.rho)
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                self.theta
                    .partial_cmp(&other.theta)
                    .unwrap_or(Ordering::Equal)
            })
    }
}

impl From<[f32; 2]> for Line {
    fn from(v: [f32; 2]) -> Self {
        Self::new(v[0], v[1])
    }
}

/// Ordered sequence of lines sharing one orientation, sorted by `(rho, theta)`.
pub type LineFamily = Vec<Line>;

/// Orientation of a grid line family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The family whose extremes bound sampling along lines of this orientation.
    pub fn opposite(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Horizontal => f.write_str("horizontal"),
            Orientation::Vertical => f.write_str("vertical"),
        }
    }
}

/// Sorts lines in place into canonical family order.
pub fn sort_family(lines: &mut [Line]) {
    lines.sort_by(Line::cmp_rho_theta);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_family_orders_by_rho_then_theta() {
        let mut lines = vec![
            Line::new(20.0, 1.57),
            Line::new(5.0, 1.58),
            Line::new(5.0, 1.56),
        ];
        sort_family(&mut lines);
        assert_eq!(
            lines,
            vec![
                Line::new(5.0, 1.56),
                Line::new(5.0, 1.58),
                Line::new(20.0, 1.57)
            ]
        );
    }

    #[test]
    fn opposite_is_an_involution() {
        for o in [Orientation::Horizontal, Orientation::Vertical] {
            assert_ne!(o, o.opposite());
            assert_eq!(o, o.opposite().opposite());
        }
    }
}
