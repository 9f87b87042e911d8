//! Table grid detector orchestrating the line-to-grid reconstruction.
//!
//! Overview
//! - Splits raw Hough lines into horizontal and vertical families by angle
//!   and drops lines whose offset falls outside the image.
//! - Tests every candidate against the edge mask by randomized sampling,
//!   bounded by the outermost lines of the opposite family.
//! - Merges near-duplicate detections with running-average clustering.
//! - Sorts the surviving offsets and forms the cell rectangles.
//!
//! Modules
//! - [`params`] – configuration types used by the detector and CLI.
//! - `pipeline` – the main [`TableGridDetector`] implementation.

pub mod params;
mod pipeline;

pub use params::TableParams;
pub use pipeline::TableGridDetector;
