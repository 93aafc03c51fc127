//! The provider's prosody emotion vocabulary.

/// Emotion labels the provider's prosody model is known to emit.
///
/// The vocabulary is externally defined and versioned by the provider;
/// this list is used for diagnostics only. Unknown labels are never
/// rejected.
pub const EMOTION_VOCABULARY: &[&str] = &[
    "admiration",
    "adoration",
    "aesthetic appreciation",
    "amusement",
    "anger",
    "anxiety",
    "awe",
    "awkwardness",
    "boredom",
    "calmness",
    "concentration",
    "confusion",
    "contempt",
    "contentment",
    "determination",
    "disappointment",
    "disgust",
    "distress",
    "doubt",
    "excitement",
    "fear",
    "joy",
    "sadness",
];

/// Returns `true` if `label` is in the known vocabulary.
///
/// Comparison is ASCII-case-insensitive: the provider has shipped both
/// `"Anger"` and `"anger"` spellings across SDK versions.
pub fn is_known_label(label: &str) -> bool {
    EMOTION_VOCABULARY
        .iter()
        .any(|known| known.eq_ignore_ascii_case(label))
}
