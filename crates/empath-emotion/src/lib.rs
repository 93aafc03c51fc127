//! Emotion ranking for the Empath voice-chat domain.
//!
//! The external inference service scores each user utterance against a
//! fixed emotion vocabulary. This crate turns those raw score maps into
//! what the rest of the system consumes: the K highest-scoring emotions
//! in descending order, with scores rounded for display and export.
//!
//! Two boundaries are covered:
//!
//! - [`top_emotions`] — the pure ranking function over an
//!   already-typed [`EmotionScores`](empath_types::EmotionScores),
//! - [`scores_from_payload`] — the lossy coercion of the untyped SDK
//!   payload into that typed container. Malformed payloads degrade to
//!   an empty container with a diagnostic log entry; no failure on this
//!   path is ever surfaced to the caller.

mod payload;
mod rank;
mod vocabulary;

pub use payload::scores_from_payload;
pub use rank::{top_emotions, RankedEmotion, TOP_EMOTION_COUNT};
pub use vocabulary::{is_known_label, EMOTION_VOCABULARY};
