//! Transcript artifact construction and export.

use crate::error::ExportError;
use crate::sink::ExportSink;
use chrono::{DateTime, SecondsFormat, Utc};
use empath_emotion::{top_emotions, RankedEmotion, TOP_EMOTION_COUNT};
use empath_types::{ConversationTurn, Role};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Fixed prefix of exported transcript filenames.
pub const EXPORT_FILE_PREFIX: &str = "empath_conversation_";

/// Fixed extension of exported transcript filenames.
pub const EXPORT_FILE_EXTENSION: &str = "json";

/// One element of the exported JSON array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    /// ISO-8601 receipt timestamp of the turn, falling back to the
    /// export time when the turn itself was not stamped.
    pub timestamp: String,
    /// Always [`Role::User`]; assistant turns are excluded entirely.
    pub role: Role,
    /// The transcribed text.
    pub text: String,
    /// The turn's three highest-scoring emotions, descending.
    pub top_3_emotions: Vec<RankedEmotion>,
}

/// Builds transcript entries from the conversation log.
///
/// Includes every user turn with non-empty text, in log order. `now`
/// is the fallback timestamp for unstamped turns; injecting it keeps
/// construction deterministic under test.
pub fn build_entries(turns: &[ConversationTurn], now: DateTime<Utc>) -> Vec<TranscriptEntry> {
    turns
        .iter()
        .filter(|turn| turn.role == Role::User && !turn.text.is_empty())
        .map(|turn| TranscriptEntry {
            timestamp: iso8601(turn.received_at.unwrap_or(now)),
            role: Role::User,
            text: turn.text.clone(),
            top_3_emotions: top_emotions(turn.scores.as_ref(), TOP_EMOTION_COUNT),
        })
        .collect()
}

/// Returns the artifact filename for an export happening at `now`.
pub fn export_filename(now: DateTime<Utc>) -> String {
    format!("{EXPORT_FILE_PREFIX}{}.{EXPORT_FILE_EXTENSION}", iso8601(now))
}

/// Exports the conversation log through `sink`.
///
/// Returns `Ok(Some(filename))` when an artifact was delivered, and
/// `Ok(None)` when no turn qualified (empty log, assistant-only, or
/// all-empty text) — the no-op case is part of the contract, not an
/// error.
pub fn export_conversation<S: ExportSink>(
    turns: &[ConversationTurn],
    sink: &S,
) -> Result<Option<String>, ExportError> {
    export_conversation_at(turns, sink, Utc::now())
}

/// [`export_conversation`] with an injected clock.
pub fn export_conversation_at<S: ExportSink>(
    turns: &[ConversationTurn],
    sink: &S,
    now: DateTime<Utc>,
) -> Result<Option<String>, ExportError> {
    let entries = build_entries(turns, now);
    if entries.is_empty() {
        debug!("no user turns with content, skipping export");
        return Ok(None);
    }

    let bytes = serde_json::to_vec_pretty(&entries)?;
    let filename = export_filename(now);
    sink.deliver(&filename, &bytes)?;

    info!(%filename, entries = entries.len(), "conversation transcript exported");
    Ok(Some(filename))
}

/// RFC 3339 with millisecond precision and a `Z` suffix, matching the
/// timestamps the provider stamps on its own messages.
fn iso8601(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
