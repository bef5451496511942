//! Error types for the computation core.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from the pure computation core.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum KundaliError {
    /// A caller-supplied value failed validation.
    InvalidInput(&'static str),
    /// The requested divisional chart order is not one of the 20 supported.
    UnsupportedVarga(u16),
    /// The requested dasha system code is unknown.
    UnknownSystem(u8),
}

impl Display for KundaliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::UnsupportedVarga(n) => write!(f, "unsupported varga: D{n}"),
            Self::UnknownSystem(code) => write!(f, "unknown dasha system code: {code}"),
        }
    }
}

impl Error for KundaliError {}
