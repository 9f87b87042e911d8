use crate::grid::{ClusterStrategy, Evidence};
use crate::types::{Line, Orientation};
use serde::Serialize;

/// Line counts per family after a stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyCounts {
    pub horizontal: usize,
    pub vertical: usize,
}

impl FamilyCounts {
    pub fn new(horizontal: usize, vertical: usize) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    pub fn total(&self) -> usize {
        self.horizontal + self.vertical
    }
}

/// Outcome of the angle/extent classification.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyStage {
    pub elapsed_ms: f64,
    pub delta_theta_deg: f32,
    pub input_lines: usize,
    pub counts: FamilyCounts,
    pub dropped: usize,
}

/// Evidence gathered for one candidate line.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineEvidenceSample {
    pub orientation: Orientation,
    pub line: Line,
    pub hits: usize,
    pub tries: usize,
    pub accepted: bool,
}

impl LineEvidenceSample {
    pub fn new(orientation: Orientation, line: Line, evidence: Evidence, expectation: f64) -> Self {
        Self {
            orientation,
            line,
            hits: evidence.hits,
            tries: evidence.tries,
            accepted: evidence.supports(expectation),
        }
    }
}

/// Outcome of the probabilistic evidence filter.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterStage {
    pub elapsed_ms: f64,
    pub try_count: usize,
    pub expectation: f64,
    pub radius: usize,
    pub kept: FamilyCounts,
    pub rejected: FamilyCounts,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub samples: Vec<LineEvidenceSample>,
}

/// Outcome of duplicate merging.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterStage {
    pub elapsed_ms: f64,
    pub delta_rho: f32,
    pub strategy: ClusterStrategy,
    pub counts: FamilyCounts,
}
