//! The emotion score container.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-utterance emotion scores produced by the external inference
/// service: a mapping from emotion label to confidence value.
///
/// Scores are typically in `[0, 1]` but are not guaranteed to be
/// normalized or bounded by this system. The container is immutable once
/// built — consumers read entries, they never update them in place.
///
/// Backed by a `BTreeMap` so label iteration is deterministic
/// (ascending byte order). Ranking relies on this for its tie-break
/// rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmotionScores(BTreeMap<String, f64>);

impl EmotionScores {
    /// Creates an empty score container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the score for a label, if present.
    pub fn get(&self, label: &str) -> Option<f64> {
        self.0.get(label).copied()
    }

    /// Returns the number of scored labels.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no labels are scored.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(label, score)` entries in ascending label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(label, score)| (label.as_str(), *score))
    }
}

impl From<BTreeMap<String, f64>> for EmotionScores {
    fn from(map: BTreeMap<String, f64>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, f64)> for EmotionScores {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<(&'a str, f64)> for EmotionScores {
    fn from_iter<I: IntoIterator<Item = (&'a str, f64)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(label, score)| (label.to_string(), score))
                .collect(),
        )
    }
}
