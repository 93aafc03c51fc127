//! Coercion of the untyped SDK score payload into [`EmotionScores`].
//!
//! The voice SDK hands over emotion scores as loosely-typed JSON.
//! Rather than trusting the shape and catching faults mid-iteration,
//! the payload is validated once at this boundary: anything malformed
//! degrades to an empty container with a diagnostic log entry, and the
//! caller never sees an error.

use crate::vocabulary::is_known_label;
use empath_types::EmotionScores;
use serde_json::Value;
use tracing::{debug, warn};

/// Builds an [`EmotionScores`] from an untyped provider payload.
///
/// - A non-object payload (null, array, string, number, bool) yields an
///   empty container and a `warn`-level diagnostic.
/// - Entries with non-numeric values are dropped with a `debug`-level
///   diagnostic.
/// - Labels outside the known vocabulary are kept — the vocabulary is
///   externally defined and may grow — but noted at `debug` level.
pub fn scores_from_payload(payload: &Value) -> EmotionScores {
    let Some(object) = payload.as_object() else {
        warn!(
            payload = %value_kind(payload),
            "emotion score payload is not an object, treating as empty"
        );
        return EmotionScores::new();
    };

    object
        .iter()
        .filter_map(|(label, value)| match value.as_f64() {
            Some(score) => {
                if !is_known_label(label) {
                    debug!(%label, "emotion label outside the known vocabulary");
                }
                Some((label.clone(), score))
            }
            None => {
                debug!(%label, value = %value_kind(value), "dropping non-numeric emotion score");
                None
            }
        })
        .collect()
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
