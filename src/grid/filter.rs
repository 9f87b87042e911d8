//! Probabilistic line filter.
//!
//! Every line of a family is tested independently with the evidence sampler,
//! bounded by the extremes of the opposite family. The caller's random source
//! is only used to draw one sub-seed per line (in input order); each line is
//! then sampled with its own generator, which keeps results identical whether
//! or not the `parallel` feature spreads lines across threads.

use super::evidence::{sample_line, Evidence, EvidenceParams, SamplingBounds};
use crate::error::GridError;
use crate::mask::EdgeMask;
use crate::types::{Line, LineFamily, Orientation};
use log::trace;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Lines that passed the filter plus the evidence gathered for every input line.
#[derive(Clone, Debug, Default)]
pub struct FilterOutcome {
    pub kept: LineFamily,
    /// One entry per input line, in input order.
    pub evidence: Vec<Evidence>,
}

impl FilterOutcome {
    pub fn rejected(&self) -> usize {
        self.evidence.len() - self.kept.len()
    }
}

/// Keep the lines of `target` whose hit ratio reaches `params.expectation`.
///
/// `bounding` is the opposite-orientation family; its first and last lines
/// delimit the sampling span. An empty `target` yields an empty outcome; a
/// non-empty `target` with an empty `bounding` family is an error. Input
/// order is preserved.
pub fn filter_family<R: Rng + ?Sized>(
    target: &[Line],
    orientation: Orientation,
    bounding: &[Line],
    mask: &EdgeMask<'_>,
    params: &EvidenceParams,
    rng: &mut R,
) -> Result<FilterOutcome, GridError> {
    if target.is_empty() {
        return Ok(FilterOutcome::default());
    }
    let bounds = SamplingBounds::from_family(bounding, orientation)?;
    let seeds: Vec<u64> = target.iter().map(|_| rng.gen()).collect();

    let evidence = sample_all(target, &seeds, orientation, &bounds, mask, params)?;

    let kept = target
        .iter()
        .zip(evidence.iter())
        .filter(|(line, ev)| {
            let ok = ev.supports(params.expectation);
            trace!(
                "{orientation} line rho={:.2} theta={:.5}: {}/{} hits -> {}",
                line.rho,
                line.theta,
                ev.hits,
                ev.tries,
                if ok { "keep" } else { "drop" }
            );
            ok
        })
        .map(|(line, _)| *line)
        .collect();

    Ok(FilterOutcome { kept, evidence })
}

#[cfg(not(feature = "parallel"))]
fn sample_all(
    target: &[Line],
    seeds: &[u64],
    orientation: Orientation,
    bounds: &SamplingBounds,
    mask: &EdgeMask<'_>,
    params: &EvidenceParams,
) -> Result<Vec<Evidence>, GridError> {
    target
        .iter()
        .zip(seeds)
        .map(|(line, &seed)| {
            let mut rng = StdRng::seed_from_u64(seed);
            sample_line(mask, line, orientation, bounds, params, &mut rng)
        })
        .collect()
}

#[cfg(feature = "parallel")]
fn sample_all(
    target: &[Line],
    seeds: &[u64],
    orientation: Orientation,
    bounds: &SamplingBounds,
    mask: &EdgeMask<'_>,
    params: &EvidenceParams,
) -> Result<Vec<Evidence>, GridError> {
    target
        .par_iter()
        .zip(seeds.par_iter())
        .map(|(line, &seed)| {
            let mut rng = StdRng::seed_from_u64(seed);
            sample_line(mask, line, orientation, bounds, params, &mut rng)
        })
        .collect()
}
