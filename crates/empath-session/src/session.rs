//! The voice session state machine.

use crate::capture::CaptureBuffer;
use crate::config::ProviderConfig;
use crate::error::SessionError;
use empath_types::{ConnectionStatus, ConversationTurn};
use tokio::sync::broadcast;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Default capacity for the session event broadcast channel. Lagging
/// receivers miss events rather than blocking the session.
const SESSION_EVENT_CAPACITY: usize = 256;

/// A state change observable from outside the session.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    StatusChanged(ConnectionStatus),
    MuteChanged(bool),
    TurnAppended(ConversationTurn),
}

/// Client-side state of one voice-chat session.
///
/// The session owns the conversation log: the provider appends turns
/// via [`append_turn`](Self::append_turn) and everything else reads
/// them through [`turns`](Self::turns). Status, mute, and the mic FFT
/// frame mirror what the provider reports; transitions that the
/// provider cannot legally report are rejected.
#[derive(Debug)]
pub struct VoiceSession {
    id: Uuid,
    config: ProviderConfig,
    status: ConnectionStatus,
    muted: bool,
    assistant_paused: bool,
    mic_fft: Vec<f32>,
    turns: Vec<ConversationTurn>,
    capture: CaptureBuffer,
    events: broadcast::Sender<SessionEvent>,
}

impl VoiceSession {
    pub fn new(config: ProviderConfig) -> Self {
        let (events, _) = broadcast::channel(SESSION_EVENT_CAPACITY);
        let id = Uuid::new_v4();
        info!(session_id = %id, url = %config.url, "voice session created");

        Self {
            id,
            config,
            status: ConnectionStatus::Disconnected,
            muted: false,
            assistant_paused: false,
            mic_fft: Vec::new(),
            turns: Vec::new(),
            capture: CaptureBuffer::new(),
            events,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    pub fn status(&self) -> ConnectionStatus {
        self.status
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn assistant_paused(&self) -> bool {
        self.assistant_paused
    }

    /// The latest microphone FFT frame, for level visualisation.
    pub fn mic_fft(&self) -> &[f32] {
        &self.mic_fft
    }

    /// The conversation log, oldest first. Read-only.
    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    /// Subscribes to session events. Events sent before the call are
    /// not replayed.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    // ── Connection lifecycle ─────────────────────────────────────────

    /// Starts connecting. Valid from `Disconnected` or `Error`.
    pub fn begin_connect(&mut self) -> Result<(), SessionError> {
        match self.status {
            ConnectionStatus::Disconnected | ConnectionStatus::Error => {
                self.set_status(ConnectionStatus::Connecting);
                Ok(())
            }
            from => Err(SessionError::InvalidTransition {
                from,
                to: ConnectionStatus::Connecting,
            }),
        }
    }

    /// Marks the session live. Valid from `Connecting`.
    ///
    /// The assistant is paused in the same transition: this session is
    /// a listening surface, and the assistant stays quiet until
    /// [`resume_assistant`](Self::resume_assistant) is called.
    pub fn mark_connected(&mut self) -> Result<(), SessionError> {
        match self.status {
            ConnectionStatus::Connecting => {
                self.set_status(ConnectionStatus::Connected);
                self.assistant_paused = true;
                debug!(session_id = %self.id, "assistant paused on connect");
                Ok(())
            }
            from => Err(SessionError::InvalidTransition {
                from,
                to: ConnectionStatus::Connected,
            }),
        }
    }

    /// Records a provider-reported failure. Valid from any state.
    pub fn mark_error(&mut self, reason: &str) {
        warn!(session_id = %self.id, %reason, "voice session error");
        self.set_status(ConnectionStatus::Error);
    }

    /// Ends the session. Valid from any state.
    ///
    /// The FFT frame, mute state, and capture buffer are reset; the
    /// conversation log survives so it can still be exported.
    pub fn disconnect(&mut self) {
        self.mic_fft.clear();
        self.capture.clear();
        if self.muted {
            self.muted = false;
            let _ = self.events.send(SessionEvent::MuteChanged(false));
        }
        self.set_status(ConnectionStatus::Disconnected);
    }

    fn set_status(&mut self, status: ConnectionStatus) {
        if self.status == status {
            return;
        }
        info!(session_id = %self.id, from = %self.status, to = %status, "session status changed");
        self.status = status;
        let _ = self.events.send(SessionEvent::StatusChanged(status));
    }

    // ── Microphone ───────────────────────────────────────────────────

    /// Mutes the microphone. Valid only while connected.
    pub fn mute(&mut self) -> Result<(), SessionError> {
        self.set_muted(true)
    }

    /// Unmutes the microphone. Valid only while connected.
    pub fn unmute(&mut self) -> Result<(), SessionError> {
        self.set_muted(false)
    }

    /// Flips the mute state, returning the new value.
    pub fn toggle_mute(&mut self) -> Result<bool, SessionError> {
        self.set_muted(!self.muted)?;
        Ok(self.muted)
    }

    fn set_muted(&mut self, muted: bool) -> Result<(), SessionError> {
        if self.status != ConnectionStatus::Connected {
            return Err(SessionError::NotConnected);
        }
        if self.muted != muted {
            self.muted = muted;
            let _ = self.events.send(SessionEvent::MuteChanged(muted));
        }
        Ok(())
    }

    /// Replaces the microphone FFT frame with the latest one from the
    /// provider. Valid only while connected.
    pub fn update_mic_fft(&mut self, frame: &[f32]) -> Result<(), SessionError> {
        if self.status != ConnectionStatus::Connected {
            return Err(SessionError::NotConnected);
        }
        self.mic_fft.clear();
        self.mic_fft.extend_from_slice(frame);
        Ok(())
    }

    // ── Assistant control ────────────────────────────────────────────

    pub fn pause_assistant(&mut self) {
        self.assistant_paused = true;
    }

    pub fn resume_assistant(&mut self) {
        self.assistant_paused = false;
    }

    // ── Conversation log ─────────────────────────────────────────────

    /// Appends a turn to the conversation log (provider side).
    pub fn append_turn(&mut self, turn: ConversationTurn) {
        debug!(session_id = %self.id, role = %turn.role, "turn appended");
        self.turns.push(turn.clone());
        let _ = self.events.send(SessionEvent::TurnAppended(turn));
    }

    // ── Audio capture ────────────────────────────────────────────────

    /// Buffers a chunk of captured audio for the current utterance.
    pub fn push_capture_chunk(&mut self, chunk: &[u8]) -> Result<(), SessionError> {
        if self.status != ConnectionStatus::Connected {
            return Err(SessionError::NotConnected);
        }
        self.capture.push_chunk(chunk)
    }

    /// Takes the buffered utterance audio, leaving the buffer empty.
    pub fn finish_capture(&mut self) -> Vec<u8> {
        self.capture.finish()
    }

    /// Bytes currently buffered for the in-flight utterance.
    pub fn capture_len(&self) -> usize {
        self.capture.len()
    }
}
