//! Top-K ranking over an emotion score map.

use empath_types::EmotionScores;
use serde::{Deserialize, Serialize};

/// Number of top emotions attached to each user turn for display and
/// export.
pub const TOP_EMOTION_COUNT: usize = 3;

/// A single ranked emotion: the label and its score rounded to 4
/// decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEmotion {
    /// The emotion label, as received from the provider.
    pub name: String,
    /// The confidence value, rounded to 4 decimal places.
    pub score: f64,
}

/// Returns the `count` highest-scoring emotions in descending order.
///
/// - Absent or empty input yields an empty vector. This is a recovered
///   condition, not an error.
/// - Non-finite scores (NaN, ±inf) rank and report as `0.0`, so they
///   sort to the bottom instead of poisoning the ordering.
/// - Ties are broken by ascending label byte order. `EmotionScores`
///   iterates labels in that order and the sort is stable, so equal
///   scores keep their label order.
/// - Output length is `min(count, scores.len())`.
///
/// The input map is never mutated; the function is pure and idempotent.
pub fn top_emotions(scores: Option<&EmotionScores>, count: usize) -> Vec<RankedEmotion> {
    let Some(scores) = scores else {
        return Vec::new();
    };

    let mut ranked: Vec<(&str, f64)> = scores
        .iter()
        .map(|(name, score)| (name, if score.is_finite() { score } else { 0.0 }))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    ranked
        .into_iter()
        .take(count)
        .map(|(name, score)| RankedEmotion {
            name: name.to_string(),
            score: round4(score),
        })
        .collect()
}

/// Rounds to 4 decimal places, half away from zero. Matches the
/// decimal formatting the exported artifact has always carried.
fn round4(score: f64) -> f64 {
    (score * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(pairs: &[(&str, f64)]) -> EmotionScores {
        pairs.iter().copied().collect()
    }

    #[test]
    fn absent_input_yields_empty() {
        assert!(top_emotions(None, 3).is_empty());
    }

    #[test]
    fn empty_input_yields_empty() {
        let empty = EmotionScores::new();
        assert!(top_emotions(Some(&empty), 3).is_empty());
    }

    #[test]
    fn count_zero_yields_empty() {
        let s = scores(&[("joy", 0.9)]);
        assert!(top_emotions(Some(&s), 0).is_empty());
    }

    #[test]
    fn output_length_is_min_of_count_and_entries() {
        let s = scores(&[("joy", 0.9), ("anger", 0.05), ("sadness", 0.3)]);
        assert_eq!(top_emotions(Some(&s), 2).len(), 2);
        assert_eq!(top_emotions(Some(&s), 3).len(), 3);
        assert_eq!(top_emotions(Some(&s), 10).len(), 3);
    }

    #[test]
    fn output_is_sorted_descending() {
        let s = scores(&[
            ("calmness", 0.53),
            ("distress", 0.88),
            ("anxiety", 0.83),
            ("boredom", 0.22),
        ]);
        let ranked = top_emotions(Some(&s), 4);
        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        assert_eq!(ranked[0].name, "distress");
    }

    #[test]
    fn ties_break_by_ascending_label() {
        let s = scores(&[("joy", 0.9), ("anger", 0.05), ("sadness", 0.3), ("fear", 0.9)]);
        let ranked = top_emotions(Some(&s), 3);

        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].name, "fear");
        assert_eq!(ranked[1].name, "joy");
        assert_eq!(ranked[2].name, "sadness");
        assert!(ranked.iter().all(|e| e.name != "anger"));
    }

    #[test]
    fn ranking_is_idempotent() {
        let s = scores(&[("joy", 0.123456), ("fear", 0.9), ("doubt", 0.28)]);
        let first = top_emotions(Some(&s), 3);
        let second = top_emotions(Some(&s), 3);
        assert_eq!(first, second);
    }

    #[test]
    fn scores_round_to_four_decimals() {
        let s = scores(&[("joy", 0.123456)]);
        assert_eq!(top_emotions(Some(&s), 1)[0].score, 0.1235);

        let s = scores(&[("joy", 0.1)]);
        assert_eq!(top_emotions(Some(&s), 1)[0].score, 0.1);
    }

    #[test]
    fn non_finite_scores_sink_to_the_bottom_as_zero() {
        let s = scores(&[("joy", f64::NAN), ("awe", f64::INFINITY), ("fear", 0.2)]);
        let ranked = top_emotions(Some(&s), 3);

        assert_eq!(ranked[0].name, "fear");
        assert_eq!(ranked[1], RankedEmotion { name: "awe".to_string(), score: 0.0 });
        assert_eq!(ranked[2], RankedEmotion { name: "joy".to_string(), score: 0.0 });
    }

    #[test]
    fn input_is_not_mutated() {
        let s = scores(&[("joy", 0.123456), ("fear", 0.9)]);
        let before = s.clone();
        let _ = top_emotions(Some(&s), 2);
        assert_eq!(s, before);
    }
}
