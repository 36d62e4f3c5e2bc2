//! Conflict detection and mapping of the combined score to a final verdict.

use super::combine::MAX_SCORE;
use crate::types::FinalVerdict;

/// Normalized score at or above which a provider counts as a high-threat signal.
pub const HIGH_THREAT_MIN: f64 = 70.0;
/// Normalized score at or below which a provider counts as a low-threat signal.
pub const LOW_THREAT_MAX: f64 = 29.0;

pub const BENIGN_MAX: u8 = 29;
pub const SUSPICIOUS_MIN: u8 = 30;
pub const SUSPICIOUS_MAX: u8 = 69;
pub const MALICIOUS_MIN: u8 = 70;

/// True when at least one high-threat and one low-threat signal are present.
pub fn has_conflicting_signals(normalized_scores: impl IntoIterator<Item = f64>) -> bool {
    let mut high = false;
    let mut low = false;
    for score in normalized_scores {
        high |= score >= HIGH_THREAT_MIN;
        low |= score <= LOW_THREAT_MAX;
    }
    high && low
}

/// Map a clamped score to a verdict.
///
/// Conflicting signals pin a mid-range score to `suspicious`. Under the
/// current thresholds the plain range mapping gives the same answer; the
/// explicit branch keeps that policy if the bands are ever retuned.
pub fn classify(score: u8, has_conflicting_signals: bool) -> FinalVerdict {
    if has_conflicting_signals && (SUSPICIOUS_MIN..=SUSPICIOUS_MAX).contains(&score) {
        return FinalVerdict::Suspicious;
    }

    match score.min(MAX_SCORE) {
        MALICIOUS_MIN.. => FinalVerdict::Malicious,
        SUSPICIOUS_MIN..=SUSPICIOUS_MAX => FinalVerdict::Suspicious,
        0..=BENIGN_MAX => FinalVerdict::Benign,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(0, false), FinalVerdict::Benign);
        assert_eq!(classify(29, false), FinalVerdict::Benign);
        assert_eq!(classify(30, false), FinalVerdict::Suspicious);
        assert_eq!(classify(69, false), FinalVerdict::Suspicious);
        assert_eq!(classify(70, false), FinalVerdict::Malicious);
        assert_eq!(classify(100, false), FinalVerdict::Malicious);
    }

    #[test]
    fn test_ranges_partition_scale() {
        for score in 0..=MAX_SCORE {
            let verdict = classify(score, false);
            assert_ne!(verdict, FinalVerdict::Unknown, "score {score}");
        }
    }

    #[test]
    fn test_conflict_never_escalates_or_demotes() {
        for score in 0..=MAX_SCORE {
            let plain = classify(score, false);
            let conflicted = classify(score, true);
            if (SUSPICIOUS_MIN..=SUSPICIOUS_MAX).contains(&score) {
                assert_eq!(conflicted, FinalVerdict::Suspicious);
            } else {
                assert_eq!(conflicted, plain, "score {score}");
            }
        }
    }

    #[test]
    fn test_conflict_requires_both_extremes() {
        assert!(has_conflicting_signals([100.0, 0.0]));
        assert!(has_conflicting_signals([70.0, 29.0]));
        assert!(!has_conflicting_signals([100.0, 60.0, 30.0]));
        assert!(!has_conflicting_signals([0.0, 30.0]));
        assert!(!has_conflicting_signals([100.0]));
        assert!(!has_conflicting_signals(std::iter::empty::<f64>()));
    }

    #[test]
    fn test_unknown_does_not_count_as_low_threat() {
        // unknown normalizes to 30, just above the low-threat cutoff
        assert!(!has_conflicting_signals([100.0, 30.0]));
    }
}
