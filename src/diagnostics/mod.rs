//! Diagnostics data model returned alongside the reconstructed grid.
//!
//! `TableReport` is the main entry point returned by the detector; its
//! `PipelineTrace` records per-stage line counts, per-line sampling evidence
//! and timings.

pub mod pipeline;
pub mod stages;
pub mod timing;

pub use pipeline::{InputDescriptor, PipelineTrace, TableReport};
pub use stages::{ClassifyStage, ClusterStage, FamilyCounts, FilterStage, LineEvidenceSample};
pub use timing::{StageTiming, TimingBreakdown};
