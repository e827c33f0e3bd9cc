//! Unified error type for all fallible nanocol operations.

use std::error::Error;
use std::fmt::{self, Display};

/// Errors surfaced by constructors, kernels and indexing.
///
/// Every fallible operation is all-or-nothing: on error no partially built
/// output escapes, the caller's inputs are untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NanocolError {
    /// An array constructor was handed buffers that violate the layout
    /// invariants (offsets, mask length, UTF-8 validity).
    Construction { message: String },
    /// A positional index fell outside `[-len, len)` after sign
    /// normalisation.
    IndexOutOfBounds { index: i64, len: usize },
    /// Two lengths that must agree did not (elementwise ops, boolean masks).
    SizeMismatch { expected: usize, found: usize },
    /// A parameter value is outside its accepted domain.
    InvalidArgument { message: String },
    /// The host handed an indexer shape the engine does not support.
    UnsupportedIndexer { message: String },
}

impl NanocolError {
    pub fn construction(message: impl Into<String>) -> Self {
        NanocolError::Construction {
            message: message.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        NanocolError::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn unsupported_indexer(message: impl Into<String>) -> Self {
        NanocolError::UnsupportedIndexer {
            message: message.into(),
        }
    }
}

impl Display for NanocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NanocolError::Construction { message } => {
                write!(f, "construction error: {message}")
            }
            NanocolError::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            NanocolError::SizeMismatch { expected, found } => {
                write!(f, "size mismatch: expected {expected}, found {found}")
            }
            NanocolError::InvalidArgument { message } => {
                write!(f, "invalid argument: {message}")
            }
            NanocolError::UnsupportedIndexer { message } => {
                write!(f, "unsupported indexer: {message}")
            }
        }
    }
}

impl Error for NanocolError {}
