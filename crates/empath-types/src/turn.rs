//! Conversation turn types.

use crate::{EmotionScores, Role};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One message exchanged in a conversation.
///
/// Turns are appended to the session's in-memory log by the voice
/// provider as the session progresses. The log is read-only from the
/// consumer's perspective and is discarded when the session ends — the
/// only way a turn outlives the session is the JSON transcript export.
///
/// `scores` is present only for user turns: the provider runs emotion
/// inference on the user's speech, not on the assistant's output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationTurn {
    /// Who authored the turn.
    pub role: Role,
    /// The transcribed (user) or generated (assistant) text.
    pub text: String,
    /// When the turn was received from the provider. Absent when the
    /// provider did not stamp the message.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub received_at: Option<DateTime<Utc>>,
    /// Emotion scores for the utterance, user turns only.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub scores: Option<EmotionScores>,
}

impl ConversationTurn {
    /// Creates a user turn with no timestamp and no scores.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
            received_at: None,
            scores: None,
        }
    }

    /// Creates an assistant turn with no timestamp.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
            received_at: None,
            scores: None,
        }
    }

    /// Attaches emotion scores to this turn.
    pub fn with_scores(mut self, scores: EmotionScores) -> Self {
        self.scores = Some(scores);
        self
    }

    /// Attaches a receipt timestamp to this turn.
    pub fn with_received_at(mut self, received_at: DateTime<Utc>) -> Self {
        self.received_at = Some(received_at);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_turn_defaults() {
        let turn = ConversationTurn::user("hello");
        assert_eq!(turn.role, Role::User);
        assert_eq!(turn.text, "hello");
        assert!(turn.received_at.is_none());
        assert!(turn.scores.is_none());
    }

    #[test]
    fn optional_fields_are_omitted_from_json() {
        let turn = ConversationTurn::assistant("hi there");
        let json = serde_json::to_value(&turn).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({"role": "assistant", "text": "hi there"})
        );
    }

    #[test]
    fn turn_with_scores_round_trips() {
        let scores: EmotionScores = [("joy", 0.5)].into_iter().collect();
        let turn = ConversationTurn::user("hello").with_scores(scores.clone());

        let json = serde_json::to_string(&turn).expect("serialize");
        let restored: ConversationTurn = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored.scores, Some(scores));
    }
}
