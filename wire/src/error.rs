//! Error types for wire stream operations.

use std::fmt;

/// Result type for wire stream operations.
pub type WireResult<T> = Result<T, WireError>;

/// Errors that can occur while reading or writing a wire stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    /// Attempted to read past the end of the buffer.
    EndOfBuffer {
        /// Number of bits requested.
        requested: usize,
        /// Number of bits available.
        available: usize,
    },

    /// Attempted to write past the buffer's fixed capacity.
    BufferOverflow {
        /// Number of bits the operation needed.
        requested: usize,
        /// Number of bits still free.
        available: usize,
    },

    /// A decoded string length field exceeds the caller's cap.
    ///
    /// Raised before any payload allocation takes place.
    StringTooLong {
        /// The declared length in bytes.
        length: usize,
        /// The maximum the caller accepts.
        max: usize,
    },

    /// A string payload is not valid UTF-8.
    InvalidUtf8 {
        /// The declared length in bytes.
        length: usize,
    },

    /// A length cannot be framed as a dword prefix.
    LengthOverflow {
        /// The offending length in bytes.
        length: usize,
    },
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndOfBuffer {
                requested,
                available,
            } => {
                write!(
                    f,
                    "attempted to read {requested} bits but only {available} bits available"
                )
            }
            Self::BufferOverflow {
                requested,
                available,
            } => {
                write!(
                    f,
                    "attempted to write {requested} bits but only {available} bits free"
                )
            }
            Self::StringTooLong { length, max } => {
                write!(f, "declared string length {length} exceeds cap {max}")
            }
            Self::InvalidUtf8 { length } => {
                write!(f, "string payload of {length} bytes is not valid UTF-8")
            }
            Self::LengthOverflow { length } => {
                write!(f, "length {length} does not fit in a dword prefix")
            }
        }
    }
}

impl std::error::Error for WireError {}
