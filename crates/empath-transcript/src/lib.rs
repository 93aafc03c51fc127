//! Transcript export for Empath voice sessions.
//!
//! Turns the in-memory conversation log into a point-in-time JSON
//! artifact: one entry per user turn with non-empty text, each carrying
//! an ISO-8601 timestamp, the transcribed text, and the turn's top-3
//! emotions. Assistant turns never appear in the artifact.
//!
//! Artifact construction ([`build_entries`]) is pure and takes an
//! injected clock; delivery goes through the [`ExportSink`] trait so the
//! host environment's download mechanism stays behind a seam. When no
//! turn qualifies, export is a silent no-op — no artifact, no error.

mod artifact;
mod error;
mod sink;

pub use artifact::{
    build_entries, export_conversation, export_conversation_at, export_filename, TranscriptEntry,
    EXPORT_FILE_EXTENSION, EXPORT_FILE_PREFIX,
};
pub use error::ExportError;
pub use sink::{DirectorySink, ExportSink};
