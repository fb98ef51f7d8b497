// src/core/quantizer.rs
//
// Asymmetric rounding from the continuous star scale to half-star units.
//
// Below-neutral albums use `rounding_bias_bad` as the round-up threshold,
// at/above-neutral albums use `rounding_bias_good`. With the defaults
// (0.65 / 0.45) a mediocre album needs a larger remainder to earn the next
// half star than a good album needs to keep its score.

use crate::config::EngineConfig;

/// Absorbs representation error so a remainder that is mathematically equal
/// to the bias still rounds up (e.g. 0.45 stored as 0.44999999999999996).
const FRACTION_EPSILON: f64 = 1e-9;

/// Rounding threshold for a score, chosen by its side of the neutral prior
pub fn rounding_bias(final_score: f64, config: &EngineConfig) -> f64 {
    if final_score < config.neutral_rating {
        config.rounding_bias_bad
    } else {
        config.rounding_bias_good
    }
}

/// Map a continuous input-scale score onto the output scale
pub fn quantize(final_score: f64, config: &EngineConfig) -> u8 {
    let scale = config.scale;
    let scaled = final_score * f64::from(scale.factor);
    let base = scaled.floor();
    let frac = scaled - base;

    let bias = rounding_bias(final_score, config);
    let rounded = if frac + FRACTION_EPSILON >= bias {
        base + 1.0
    } else {
        base
    };

    let lo = f64::from(scale.output_min());
    let hi = f64::from(scale.output_max());
    if rounded.is_nan() {
        return scale.output_min();
    }
    rounded.clamp(lo, hi) as u8
}
