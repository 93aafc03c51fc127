//! Voice session state for the Empath platform.
//!
//! Models the client-side state of a live voice-chat session: the
//! connection lifecycle, mute state, the latest microphone FFT frame,
//! the ordered conversation log, and per-utterance audio capture
//! buffering ahead of emotion inference. State changes are broadcast as
//! [`SessionEvent`]s so observers (a rendering host, tests) can react
//! without polling.
//!
//! Everything here is an explicit state holder with deterministic
//! transition functions — no timers, no rendering, no ambient globals.
//! The actual audio transport and inference live inside the external
//! provider SDK and are not this crate's concern.

pub mod capture;
pub mod config;
pub mod error;
pub mod session;
pub mod theme;

pub use capture::{CaptureBuffer, MAX_CAPTURE_BYTES};
pub use config::ProviderConfig;
pub use error::SessionError;
pub use session::{SessionEvent, VoiceSession};
pub use theme::{Theme, ThemeState};
