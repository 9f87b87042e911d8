//! Error type shared by the reconstruction stages.

use crate::types::{Line, Orientation};

/// Failures surfaced by the line-to-grid reconstruction.
///
/// Empty families are not errors: classification, filtering, clustering and
/// layout all return empty collections for empty input.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GridError {
    /// Evidence sampling needs the extremes of the opposite family to bound
    /// the probe span; that family was empty.
    #[error("cannot sample {target} lines: the bounding {} family is empty", .target.opposite())]
    EmptyBoundingFamily { target: Orientation },
    /// The two lines have (numerically) identical normals and never meet.
    #[error(
        "lines (rho={:.3}, theta={:.5}) and (rho={:.3}, theta={:.5}) are parallel",
        .first.rho, .first.theta, .second.rho, .second.theta
    )]
    ParallelLines { first: Line, second: Line },
    /// A parameter is outside its admissible range.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),
}
