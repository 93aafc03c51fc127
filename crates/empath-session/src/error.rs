use empath_types::ConnectionStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("invalid transition: {from} -> {to}")]
    InvalidTransition {
        from: ConnectionStatus,
        to: ConnectionStatus,
    },

    #[error("session is not connected")]
    NotConnected,

    #[error("capture buffer overflow: {size} bytes (limit: {limit} bytes)")]
    CaptureOverflow { size: usize, limit: usize },
}
