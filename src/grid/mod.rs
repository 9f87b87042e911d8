//! Line-to-grid reconstruction stages.
//!
//! - [`families`]: split raw Hough lines into horizontal/vertical families.
//! - [`evidence`]: randomized edge-mask sampling along a candidate line.
//! - [`filter`]: keep only lines with enough pixel evidence.
//! - [`cluster`]: merge near-duplicate detections into consensus lines.
//! - [`layout`]: turn the final families into sorted coordinates and cells.

pub mod cluster;
pub mod evidence;
pub mod families;
pub mod filter;
pub mod layout;

pub use cluster::{cluster_lines, ClusterStrategy};
pub use evidence::{is_supported, sample_line, Evidence, EvidenceParams, SamplingBounds};
pub use families::{classify_lines, ClassifiedLines};
pub use filter::{filter_family, FilterOutcome};
pub use layout::{rho_coordinates, CellRect, GridLayout};
