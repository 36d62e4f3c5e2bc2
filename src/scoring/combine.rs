//! Weighted combination of normalized scores.

/// Normalized score and effective weight of one contributing provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedSignal {
    pub normalized_score: f64,
    pub effective_weight: f64,
}

/// Result of combining a set of weighted signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combination {
    /// No provider contributed a signal.
    NoSignals,
    /// Signals exist but their weights sum to zero.
    ZeroWeight,
    /// A weight sum or the weighted average left the finite range.
    NonFinite,
    /// Rounded and clamped weighted average.
    Scored(u8),
}

pub const MAX_SCORE: u8 = 100;

/// Combine signals into a single 0-100 score.
///
/// Sums are accumulated over the signals in a canonical order so that the
/// result does not depend on the order the providers were reported in.
pub fn combine(signals: &[WeightedSignal]) -> Combination {
    if signals.is_empty() {
        return Combination::NoSignals;
    }

    let mut ordered = signals.to_vec();
    ordered.sort_by(|a, b| {
        a.normalized_score
            .total_cmp(&b.normalized_score)
            .then(a.effective_weight.total_cmp(&b.effective_weight))
    });

    let sum_weights: f64 = ordered.iter().map(|s| s.effective_weight).sum();
    if sum_weights == 0.0 {
        return Combination::ZeroWeight;
    }
    if !sum_weights.is_finite() {
        return Combination::NonFinite;
    }

    let sum_weighted: f64 = ordered
        .iter()
        .map(|s| s.normalized_score * s.effective_weight)
        .sum();
    let average = sum_weighted / sum_weights;
    if !average.is_finite() {
        return Combination::NonFinite;
    }

    Combination::Scored(round_score(average))
}

/// Round half away from zero, then clamp into `[0, 100]`.
pub fn round_score(raw: f64) -> u8 {
    raw.round().clamp(0.0, f64::from(MAX_SCORE)) as u8
}
