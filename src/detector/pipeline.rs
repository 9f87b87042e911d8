//! Detector pipeline driving the reconstruction end-to-end.
//!
//! Typical usage:
//! ```no_run
//! use table_grid::{Line, TableGridDetector, TableParams};
//! use table_grid::image::ImageU8;
//!
//! # fn example(edges: ImageU8, lines: &[Line]) -> Result<(), table_grid::GridError> {
//! let mut detector = TableGridDetector::new(TableParams::default());
//! let report = detector.process(edges, lines)?;
//! println!("{} x {} cells", report.layout.rows(), report.layout.cols());
//! # Ok(())
//! # }
//! ```
use super::params::TableParams;
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{
    ClassifyStage, ClusterStage, FamilyCounts, FilterStage, InputDescriptor, LineEvidenceSample,
    PipelineTrace, TableReport, TimingBreakdown,
};
use crate::error::GridError;
use crate::grid::{classify_lines, cluster_lines, filter_family, ClassifiedLines, GridLayout};
use crate::image::ImageU8;
use crate::mask::EdgeMask;
use crate::types::{sort_family, Line, Orientation};
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;

/// Reconstructs a table grid from raw Hough lines and an edge mask.
///
/// The detector owns a single seeded random source that is reused across
/// [`process`](Self::process) calls, so repeated runs draw fresh samples while
/// a freshly constructed detector is fully reproducible.
pub struct TableGridDetector {
    params: TableParams,
    rng: StdRng,
}

impl TableGridDetector {
    /// Create a detector with the supplied parameters.
    pub fn new(params: TableParams) -> Self {
        let rng = StdRng::seed_from_u64(params.seed);
        Self { params, rng }
    }

    pub fn params(&self) -> &TableParams {
        &self.params
    }

    /// Restart the random source from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Run the pipeline on a grayscale edge mask using `params.edge_threshold`.
    pub fn process(&mut self, edges: ImageU8, lines: &[Line]) -> Result<TableReport, GridError> {
        let mask = EdgeMask::new(edges, self.params.edge_threshold);
        self.process_mask(&mask, lines)
    }

    /// Classify, filter, merge and assemble.
    ///
    /// Horizontal candidates are sampled between the outermost *classified*
    /// vertical lines and vice versa, so both filters see the same bounds
    /// regardless of which family is filtered first.
    pub fn process_mask(
        &mut self,
        mask: &EdgeMask<'_>,
        lines: &[Line],
    ) -> Result<TableReport, GridError> {
        self.params.validate()?;
        let params = &self.params;
        debug!(
            "TableGridDetector::process start w={} h={} lines={}",
            mask.width(),
            mask.height(),
            lines.len()
        );
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();

        let start = Instant::now();
        let classified = classify_lines(lines, mask.height(), mask.width(), params.classify_delta_theta);
        let classify_ms = elapsed_ms(start);
        timings.push("classify", classify_ms);
        let classify_stage = ClassifyStage {
            elapsed_ms: classify_ms,
            delta_theta_deg: params.classify_delta_theta.to_degrees(),
            input_lines: lines.len(),
            counts: counts_of(&classified),
            dropped: lines.len() - classified.total(),
        };
        debug!(
            "classify: horizontal={} vertical={} dropped={} ({:.3} ms)",
            classified.horizontal.len(),
            classified.vertical.len(),
            classify_stage.dropped,
            classify_ms
        );

        let start = Instant::now();
        let evidence_params = params.evidence_params();
        let h_out = filter_family(
            &classified.horizontal,
            Orientation::Horizontal,
            &classified.vertical,
            mask,
            &evidence_params,
            &mut self.rng,
        )?;
        let v_out = filter_family(
            &classified.vertical,
            Orientation::Vertical,
            &classified.horizontal,
            mask,
            &evidence_params,
            &mut self.rng,
        )?;
        let filter_ms = elapsed_ms(start);
        timings.push("filter", filter_ms);

        let mut samples = Vec::with_capacity(h_out.evidence.len() + v_out.evidence.len());
        for (orientation, family, evidence) in [
            (Orientation::Horizontal, &classified.horizontal, &h_out.evidence),
            (Orientation::Vertical, &classified.vertical, &v_out.evidence),
        ] {
            samples.extend(family.iter().zip(evidence.iter()).map(|(line, ev)| {
                LineEvidenceSample::new(orientation, *line, *ev, evidence_params.expectation)
            }));
        }
        let filter_stage = FilterStage {
            elapsed_ms: filter_ms,
            try_count: evidence_params.try_count,
            expectation: evidence_params.expectation,
            radius: evidence_params.radius,
            kept: FamilyCounts::new(h_out.kept.len(), v_out.kept.len()),
            rejected: FamilyCounts::new(h_out.rejected(), v_out.rejected()),
            samples,
        };
        debug!(
            "filter: kept horizontal={}/{} vertical={}/{} ({:.3} ms)",
            h_out.kept.len(),
            classified.horizontal.len(),
            v_out.kept.len(),
            classified.vertical.len(),
            filter_ms
        );
        for (orientation, before, after) in [
            (Orientation::Horizontal, classified.horizontal.len(), h_out.kept.len()),
            (Orientation::Vertical, classified.vertical.len(), v_out.kept.len()),
        ] {
            if before > 0 && after == 0 {
                warn!("evidence filter rejected every {orientation} line ({before} candidates)");
            }
        }

        let start = Instant::now();
        let mut horizontal =
            cluster_lines(&h_out.kept, params.cluster_delta_rho, params.cluster_strategy);
        let mut vertical =
            cluster_lines(&v_out.kept, params.cluster_delta_rho, params.cluster_strategy);
        sort_family(&mut horizontal);
        sort_family(&mut vertical);
        let cluster_ms = elapsed_ms(start);
        timings.push("cluster", cluster_ms);
        let cluster_stage = ClusterStage {
            elapsed_ms: cluster_ms,
            delta_rho: params.cluster_delta_rho,
            strategy: params.cluster_strategy,
            counts: FamilyCounts::new(horizontal.len(), vertical.len()),
        };
        debug!(
            "cluster: horizontal={} vertical={} ({:.3} ms)",
            horizontal.len(),
            vertical.len(),
            cluster_ms
        );

        let start = Instant::now();
        let layout = GridLayout::from_families(&horizontal, &vertical);
        timings.push("layout", elapsed_ms(start));
        timings.total_ms = elapsed_ms(total_start);
        debug!(
            "TableGridDetector::process done rows={} cols={} total_ms={:.3}",
            layout.rows(),
            layout.cols(),
            timings.total_ms
        );

        Ok(TableReport {
            horizontal,
            vertical,
            layout,
            trace: PipelineTrace {
                input: InputDescriptor {
                    width: mask.width(),
                    height: mask.height(),
                    edge_threshold: mask.threshold(),
                    raw_lines: lines.len(),
                },
                timings,
                classify: classify_stage,
                filter: filter_stage,
                cluster: cluster_stage,
            },
        })
    }
}

fn counts_of(classified: &ClassifiedLines) -> FamilyCounts {
    FamilyCounts::new(classified.horizontal.len(), classified.vertical.len())
}
