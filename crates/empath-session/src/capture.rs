//! Per-utterance audio capture buffering.

use crate::error::SessionError;

/// Maximum buffered capture size. The provider's streaming inference
/// endpoint accepts at most ~5 seconds of audio per utterance; at
/// 16 kHz mono 16-bit PCM that is 160 000 bytes.
pub const MAX_CAPTURE_BYTES: usize = 160_000;

/// Accumulates audio chunks for one utterance ahead of emotion
/// inference.
///
/// Chunks arrive from the host's recorder as they are produced;
/// [`finish`](Self::finish) drains the buffer when the utterance ends.
/// The buffer never grows past [`MAX_CAPTURE_BYTES`].
#[derive(Debug, Default)]
pub struct CaptureBuffer {
    data: Vec<u8>,
}

impl CaptureBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a chunk.
    ///
    /// Returns [`SessionError::CaptureOverflow`] if the chunk would
    /// push the buffer past the cap; the buffer is left unchanged in
    /// that case.
    pub fn push_chunk(&mut self, chunk: &[u8]) -> Result<(), SessionError> {
        let size = self.data.len() + chunk.len();
        if size > MAX_CAPTURE_BYTES {
            return Err(SessionError::CaptureOverflow {
                size,
                limit: MAX_CAPTURE_BYTES,
            });
        }
        self.data.extend_from_slice(chunk);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Takes the buffered audio, leaving the buffer empty.
    pub fn finish(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.data)
    }

    /// Discards any buffered audio.
    pub fn clear(&mut self) {
        self.data.clear();
    }
}
