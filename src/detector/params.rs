//! Parameter types configuring the reconstruction stages.
//!
//! Defaults reproduce the behaviour tuned for scanned spreadsheets with a
//! 1° Hough angle resolution. For tuning, start with `sample_expectation`
//! and `cluster_delta_rho`.

use crate::error::GridError;
use crate::grid::{ClusterStrategy, EvidenceParams};
use crate::mask::DEFAULT_EDGE_THRESHOLD;
use serde::{Deserialize, Serialize};

/// Parameters controlling classification, evidence filtering and merging.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableParams {
    /// Angular tolerance (radians) for horizontal/vertical classification.
    pub classify_delta_theta: f32,
    /// Random probes drawn per candidate line.
    pub sample_try_count: usize,
    /// Minimum hit fraction to accept a line.
    pub sample_expectation: f64,
    /// Neighbourhood half-width (pixels) around each probe.
    pub sample_radius: usize,
    /// Stricter angular tolerance (radians) below which a line is sampled
    /// along a fixed row/column instead of between intersections.
    pub axis_delta_theta: f32,
    /// Mask intensity above which a pixel is an edge.
    pub edge_threshold: u8,
    /// `rho` distance under which detections merge into one line.
    pub cluster_delta_rho: f32,
    pub cluster_strategy: ClusterStrategy,
    /// Seed of the random source owned by the detector.
    pub seed: u64,
}

impl Default for TableParams {
    fn default() -> Self {
        Self {
            classify_delta_theta: std::f32::consts::PI / 180.0,
            sample_try_count: 200,
            sample_expectation: 0.5,
            sample_radius: 1,
            axis_delta_theta: std::f32::consts::PI / 720.0,
            edge_threshold: DEFAULT_EDGE_THRESHOLD,
            cluster_delta_rho: 10.0,
            cluster_strategy: ClusterStrategy::FirstFit,
            seed: 42,
        }
    }
}

impl TableParams {
    pub fn evidence_params(&self) -> EvidenceParams {
        EvidenceParams {
            try_count: self.sample_try_count,
            expectation: self.sample_expectation,
            radius: self.sample_radius,
            axis_delta_theta: self.axis_delta_theta,
        }
    }

    /// Reject settings the stages cannot work with.
    pub fn validate(&self) -> Result<(), GridError> {
        if !(self.classify_delta_theta.is_finite() && self.classify_delta_theta >= 0.0) {
            return Err(GridError::InvalidParams(format!(
                "classify_delta_theta must be finite and >= 0 (got {})",
                self.classify_delta_theta
            )));
        }
        if !(self.axis_delta_theta.is_finite() && self.axis_delta_theta >= 0.0) {
            return Err(GridError::InvalidParams(format!(
                "axis_delta_theta must be finite and >= 0 (got {})",
                self.axis_delta_theta
            )));
        }
        if self.sample_try_count == 0 {
            return Err(GridError::InvalidParams(
                "sample_try_count must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.sample_expectation) {
            return Err(GridError::InvalidParams(format!(
                "sample_expectation must lie in [0, 1] (got {})",
                self.sample_expectation
            )));
        }
        if !(self.cluster_delta_rho.is_finite() && self.cluster_delta_rho > 0.0) {
            return Err(GridError::InvalidParams(format!(
                "cluster_delta_rho must be finite and > 0 (got {})",
                self.cluster_delta_rho
            )));
        }
        Ok(())
    }
}
