//! Bayesian shrinkage of the observed track mean toward the neutral prior

/// `(n·mean + k·prior) / (n + k)`.
///
/// Collapses to `prior` when there are no ratings, which also covers the
/// `k = 0` case where the denominator would be zero.
pub fn shrunk_mean(ratings: &[u8], prior: f64, confidence_weight: f64) -> f64 {
    if ratings.is_empty() {
        return prior;
    }

    let n = ratings.len() as f64;
    let sum: f64 = ratings.iter().map(|&r| f64::from(r)).sum();
    (sum + confidence_weight * prior) / (n + confidence_weight)
}
