//! Gate construction errors

use std::fmt;

/// Reasons a gate cannot be constructed from its configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateError {
    EmptyRoot,
    EmptyPrefix,
    EmptyQueryKey,
}

impl fmt::Display for GateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyRoot => write!(f, "`assets.root` cannot be empty"),
            Self::EmptyPrefix => write!(f, "`assets.prefix` cannot be empty"),
            Self::EmptyQueryKey => {
                write!(f, "`assets.query_key` cannot be empty in query mode")
            }
        }
    }
}

impl std::error::Error for GateError {}
