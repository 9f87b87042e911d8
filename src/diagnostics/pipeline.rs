use crate::diagnostics::{ClassifyStage, ClusterStage, FilterStage, TimingBreakdown};
use crate::grid::GridLayout;
use crate::types::LineFamily;
use serde::Serialize;

/// Result produced by [`TableGridDetector::process`](crate::TableGridDetector).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableReport {
    /// Final horizontal lines, sorted by `(rho, theta)`.
    pub horizontal: LineFamily,
    /// Final vertical lines, sorted by `(rho, theta)`.
    pub vertical: LineFamily,
    pub layout: GridLayout,
    pub trace: PipelineTrace,
}

/// Per-stage trace of one reconstruction.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    pub classify: ClassifyStage,
    pub filter: FilterStage,
    pub cluster: ClusterStage,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub edge_threshold: u8,
    pub raw_lines: usize,
}
