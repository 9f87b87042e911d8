//! Online merging of near-duplicate detections.
//!
//! Lines are visited in the given order. Each one is folded into an existing
//! cluster whose running-average `rho` is strictly closer than `delta_rho`, or
//! opens a new cluster. Clusters keep a running average of `rho` and `theta`
//! and are emitted in creation order, which is not necessarily sorted.

use crate::types::{Line, LineFamily};
use serde::{Deserialize, Serialize};

/// How an incoming line picks among several matching clusters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClusterStrategy {
    /// First cluster in creation order within `delta_rho`.
    #[default]
    FirstFit,
    /// Cluster with the nearest running-average `rho` within `delta_rho`.
    BestFit,
}

#[derive(Clone, Copy, Debug)]
struct Cluster {
    rho: f32,
    theta: f32,
    count: f32,
}

impl Cluster {
    fn seed(line: &Line) -> Self {
        Self {
            rho: line.rho,
            theta: line.theta,
            count: 1.0,
        }
    }

    fn absorb(&mut self, line: &Line) {
        let n = self.count;
        self.rho = (self.rho * n + line.rho) / (n + 1.0);
        self.theta = (self.theta * n + line.theta) / (n + 1.0);
        self.count = n + 1.0;
    }

    fn distance(&self, line: &Line) -> f32 {
        (line.rho - self.rho).abs()
    }
}

/// Collapse lines whose `rho` lies within `delta_rho` of a cluster into one
/// averaged line per cluster.
///
/// Never returns more lines than it was given, and returns at least one line
/// for non-empty input.
pub fn cluster_lines(lines: &[Line], delta_rho: f32, strategy: ClusterStrategy) -> LineFamily {
    let mut clusters: Vec<Cluster> = Vec::new();
    for line in lines {
        let target = match strategy {
            ClusterStrategy::FirstFit => clusters
                .iter()
                .position(|c| c.distance(line) < delta_rho),
            ClusterStrategy::BestFit => clusters
                .iter()
                .enumerate()
                .map(|(i, c)| (i, c.distance(line)))
                .filter(|&(_, d)| d < delta_rho)
                .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
                .map(|(i, _)| i),
        };
        match target {
            Some(i) => clusters[i].absorb(line),
            None => clusters.push(Cluster::seed(line)),
        }
    }
    clusters
        .into_iter()
        .map(|c| Line::new(c.rho, c.theta))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn merges_near_duplicates() {
        let lines = [
            Line::new(50.0, 1.5708),
            Line::new(52.0, 1.5708),
            Line::new(200.0, 1.5708),
        ];
        let out = cluster_lines(&lines, 10.0, ClusterStrategy::FirstFit);
        assert_eq!(out.len(), 2);
        assert!(approx_eq(out[0].rho, 51.0), "rho={}", out[0].rho);
        assert!(approx_eq(out[0].theta, 1.5708));
        assert!(approx_eq(out[1].rho, 200.0));
    }

    #[test]
    fn running_average_weights_all_members() {
        let lines = [
            Line::new(10.0, FRAC_PI_2),
            Line::new(12.0, FRAC_PI_2),
            Line::new(14.0, FRAC_PI_2),
            Line::new(16.0, FRAC_PI_2),
        ];
        let out = cluster_lines(&lines, 10.0, ClusterStrategy::FirstFit);
        assert_eq!(out.len(), 1);
        assert!(approx_eq(out[0].rho, 13.0), "rho={}", out[0].rho);
    }

    #[test]
    fn distance_equal_to_delta_does_not_merge() {
        let lines = [Line::new(0.0, 0.0), Line::new(10.0, 0.0)];
        assert_eq!(cluster_lines(&lines, 10.0, ClusterStrategy::FirstFit).len(), 2);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(cluster_lines(&[], 10.0, ClusterStrategy::FirstFit).is_empty());
        assert!(cluster_lines(&[], 10.0, ClusterStrategy::BestFit).is_empty());
    }

    #[test]
    fn never_grows_and_never_empties() {
        let lines: Vec<Line> = (0..40)
            .map(|i| Line::new(((i * 13) % 97) as f32, FRAC_PI_2))
            .collect();
        for strategy in [ClusterStrategy::FirstFit, ClusterStrategy::BestFit] {
            for delta in [0.5f32, 3.0, 10.0, 1000.0] {
                let out = cluster_lines(&lines, delta, strategy);
                assert!(!out.is_empty() && out.len() <= lines.len());
            }
        }
    }

    #[test]
    fn merging_separated_output_is_idempotent() {
        let lines = [
            Line::new(20.0, FRAC_PI_2),
            Line::new(22.0, FRAC_PI_2),
            Line::new(60.0, FRAC_PI_2),
            Line::new(61.0, FRAC_PI_2),
            Line::new(100.0, FRAC_PI_2),
        ];
        let once = cluster_lines(&lines, 10.0, ClusterStrategy::FirstFit);
        let twice = cluster_lines(&once, 10.0, ClusterStrategy::FirstFit);
        assert_eq!(once, twice);
    }

    #[test]
    fn first_fit_and_best_fit_differ_on_overlapping_clusters() {
        // Clusters at 0 and 12; a line at 8 is within 10 of both but nearer 12.
        let lines = [
            Line::new(0.0, 0.0),
            Line::new(12.0, 0.0),
            Line::new(8.0, 0.0),
        ];
        let first = cluster_lines(&lines, 10.0, ClusterStrategy::FirstFit);
        let best = cluster_lines(&lines, 10.0, ClusterStrategy::BestFit);
        assert!(approx_eq(first[0].rho, 4.0) && approx_eq(first[1].rho, 12.0));
        assert!(approx_eq(best[0].rho, 0.0) && approx_eq(best[1].rho, 10.0));
    }

    #[test]
    fn output_follows_cluster_creation_order() {
        let lines = [Line::new(90.0, 0.0), Line::new(10.0, 0.0), Line::new(88.0, 0.0)];
        let out = cluster_lines(&lines, 5.0, ClusterStrategy::FirstFit);
        assert!(approx_eq(out[0].rho, 89.0));
        assert!(approx_eq(out[1].rho, 10.0));
    }
}
