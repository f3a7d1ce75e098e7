//! Decode error type shared by all codecs.

use thiserror::Error;

/// Error returned when a wire value does not match a codec's grammar.
///
/// Encoding never fails; decoding fails only with this type, never with an
/// unrelated error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Malformed {expected}: '{input}' ({reason})")]
    Malformed {
        expected: &'static str,
        input: String,
        reason: String,
    },

    #[error("Expected a {expected} primitive, got {got}")]
    WrongShape {
        expected: &'static str,
        got: &'static str,
    },
}

impl DecodeError {
    /// Creates a malformed-input error.
    pub fn malformed(
        expected: &'static str,
        input: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        DecodeError::Malformed {
            expected,
            input: input.into(),
            reason: reason.to_string(),
        }
    }
}
