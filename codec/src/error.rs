//! Error types for codec operations.

use std::fmt;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while encoding or decoding update messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Wire stream error.
    Wire(wire::WireError),

    /// A decoded entry count exceeds the configured limits.
    ///
    /// Raised before any entry is read or stored.
    LimitsExceeded {
        kind: LimitKind,
        limit: usize,
        actual: usize,
    },

    /// A mapping has more entries than a dword count can frame.
    LengthOverflow { length: usize },
}

/// Specific limit that was exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitKind {
    ContinuousEntries,
    DiscreteEntries,
}

impl From<wire::WireError> for CodecError {
    fn from(err: wire::WireError) -> Self {
        Self::Wire(err)
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wire(err) => write!(f, "wire stream error: {err}"),
            Self::LimitsExceeded {
                kind,
                limit,
                actual,
            } => {
                write!(f, "{kind} limit exceeded: {actual} > {limit}")
            }
            Self::LengthOverflow { length } => {
                write!(f, "mapping with {length} entries does not fit a dword count")
            }
        }
    }
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ContinuousEntries => "continuous entries",
            Self::DiscreteEntries => "discrete entries",
        };
        write!(f, "{name}")
    }
}

impl std::error::Error for CodecError {}
