#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod types;

// Stage-level building blocks.
pub mod angle;
pub mod config;
pub mod geometry;
pub mod grid;
pub mod mask;

// --- High-level re-exports -------------------------------------------------

pub use crate::detector::{TableGridDetector, TableParams};
pub use crate::diagnostics::{PipelineTrace, TableReport};
pub use crate::error::GridError;
pub use crate::grid::{CellRect, GridLayout};
pub use crate::types::{Line, LineFamily, Orientation};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use table_grid::prelude::*;
/// use std::f32::consts::FRAC_PI_2;
///
/// # fn main() -> Result<(), GridError> {
/// let (w, h) = (640usize, 480usize);
/// let edges = vec![0u8; w * h];
/// let lines = [Line::new(40.0, FRAC_PI_2), Line::new(12.0, 0.0)];
///
/// let mut det = TableGridDetector::new(TableParams::default());
/// let report = det.process(ImageU8::new(w, h, &edges), &lines)?;
/// println!("cells={} total_ms={:.3}", report.layout.cells.len(), report.trace.timings.total_ms);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::ImageU8;
    pub use crate::{GridError, Line, TableGridDetector, TableParams, TableReport};
}

// --- Stage-level API (for tools & advanced users) --------------------------

pub mod stages {
    pub use crate::grid::{
        classify_lines, cluster_lines, filter_family, is_supported, rho_coordinates, sample_line,
        ClassifiedLines, ClusterStrategy, Evidence, EvidenceParams, FilterOutcome,
        SamplingBounds,
    };
    pub use crate::mask::EdgeMask;
}
