use std::fmt;

/// Errors raised while configuring the crate. The filtering layer itself has
/// no recoverable errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidVectorLength { bits: usize },
    ParseError(String),
    UnknownCollation(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidVectorLength { bits } => write!(
                f,
                "Invalid vector length: {bits} bits (expected a multiple of 128 in 128..=2048)"
            ),
            ConfigError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            ConfigError::UnknownCollation(id) => write!(f, "Unknown collation id {id}"),
        }
    }
}

impl std::error::Error for ConfigError {}
