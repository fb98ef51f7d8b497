//! Coverage weighting: the second dampening layer after shrinkage

/// Fraction of eligible tracks that are rated. Zero when nothing is eligible.
pub fn coverage_fraction(rated: usize, eligible: usize) -> f64 {
    if eligible == 0 {
        return 0.0;
    }
    (rated.min(eligible) as f64) / (eligible as f64)
}

/// Blend the shrunk estimate toward the prior by how much of the album is rated
pub fn weight_by_coverage(shrunk: f64, prior: f64, coverage: f64) -> f64 {
    let coverage = coverage.clamp(0.0, 1.0);
    shrunk * coverage + prior * (1.0 - coverage)
}
