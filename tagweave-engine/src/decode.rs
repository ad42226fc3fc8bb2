//! Incremental UTF-8 decoding
//!
//! Byte chunks may split a multi-byte sequence anywhere; the decoder carries
//! the incomplete tail (at most three bytes) over to the next push so the
//! text handed to the tokenizer is always whole characters.

use crate::error::{EngineError, Result};

/// Incremental byte-to-text decoder with carry-over.
#[derive(Debug, Default)]
pub struct Utf8Decoder {
    carry: Vec<u8>,
}

impl Utf8Decoder {
    /// Create a decoder with no pending bytes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode `bytes`, prepending any tail carried over from the previous
    /// push. An incomplete sequence at the end of the buffer is carried over;
    /// an invalid sequence anywhere is an error.
    pub fn push(&mut self, bytes: &[u8]) -> Result<String> {
        self.carry.extend_from_slice(bytes);
        let buf = std::mem::take(&mut self.carry);

        match std::str::from_utf8(&buf) {
            Ok(_) => String::from_utf8(buf)
                .map_err(|e| EngineError::Encoding(format!("invalid UTF-8: {e}"))),
            Err(e) => {
                let valid = e.valid_up_to();
                if e.error_len().is_some() {
                    return Err(EngineError::Encoding(format!(
                        "invalid UTF-8 sequence after {valid} bytes"
                    )));
                }
                // Incomplete tail: keep it for the next push.
                let mut head = buf;
                self.carry = head.split_off(valid);
                String::from_utf8(head)
                    .map_err(|e| EngineError::Encoding(format!("invalid UTF-8: {e}")))
            }
        }
    }

    /// Number of bytes pending from an incomplete sequence.
    pub fn pending(&self) -> usize {
        self.carry.len()
    }

    /// Whether no partial sequence is pending. A non-empty decoder at end of
    /// stream means the input was truncated mid-character.
    pub fn is_empty(&self) -> bool {
        self.carry.is_empty()
    }
}
