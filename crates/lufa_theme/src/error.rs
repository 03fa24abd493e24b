//! Error types for theme parsing and configuration

use thiserror::Error;

/// Fatal parse failure: the theme source could not be read as text at all.
///
/// Malformed individual declarations are never reported through this type;
/// the parser skips them and records a [`ParseWarning`](crate::css::ParseWarning).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input is not valid UTF-8
    #[error("theme source is not valid UTF-8 (line {line}, byte offset {offset})")]
    InvalidUtf8 { line: usize, offset: usize },
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML document could not be deserialized
    #[error("invalid theme config: {0}")]
    Toml(#[from] toml::de::Error),

    /// Token prefix is empty or contains characters not allowed in a custom property name
    #[error("invalid token prefix `{0}` (allowed: [A-Za-z0-9][A-Za-z0-9_-]*, no leading `--`)")]
    InvalidPrefix(String),

    /// A contrast pair names an empty token suffix
    #[error("contrast pair {index} has an empty {side} token")]
    EmptyPairToken { index: usize, side: &'static str },

    /// A required token does not look like a custom property
    #[error("required token `{0}` must start with `--`")]
    InvalidRequiredToken(String),
}

/// Result type for configuration loading
pub type Result<T> = std::result::Result<T, ConfigError>;
