//! Error types for chart orchestration.

use std::error::Error;
use std::fmt::{Display, Formatter};

use kundali_base::KundaliError;

/// Errors from chart computation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// A birth query parameter failed validation.
    InvalidInput(&'static str),
    /// The ephemeris provider failed; the whole computation is aborted.
    Upstream(String),
    /// An internal invariant was violated.
    Internal(&'static str),
    /// Error from the computation core.
    Core(KundaliError),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::Upstream(msg) => write!(f, "ephemeris provider error: {msg}"),
            Self::Internal(msg) => write!(f, "internal error: {msg}"),
            Self::Core(e) => write!(f, "core error: {e}"),
        }
    }
}

impl Error for ChartError {}

impl From<KundaliError> for ChartError {
    fn from(e: KundaliError) -> Self {
        Self::Core(e)
    }
}
