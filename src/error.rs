//! Error types for montecarlo-pi.
//!
//! Every fallible operation returns `Result<T, PiError>` instead of panicking.

use thiserror::Error;

/// Result type alias for montecarlo-pi operations.
pub type PiResult<T> = Result<T, PiError>;

/// Unified error type for sampling, rendering and the command-line tools.
#[derive(Debug, Error)]
pub enum PiError {
    // ===== Input Errors =====
    /// Missing, malformed or otherwise unusable argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Argument parsed fine but lies outside its allowed range.
    #[error("Domain validation error: {0}")]
    DomainValidation(String),

    /// Configuration file could not be parsed.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    // ===== Computation Errors =====
    /// An estimate was requested over zero samples.
    #[error("Division error: {0}")]
    Division(String),

    /// The digit renderer was given a symbol it has no glyph for.
    #[error("Invalid character {0:?}: only digits 0-9 and '.' can be drawn")]
    InvalidCharacter(char),

    /// The event stream broke the per-decile point/checkpoint protocol.
    #[error("Event order violation: expected {expected}, found {found}")]
    EventOrder {
        /// What the consumer was waiting for.
        expected: String,
        /// What the stream actually produced.
        found: String,
    },

    // ===== I/O Errors =====
    /// File write or external tool failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PiError {
    /// Create an invalid argument error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create a domain validation error.
    #[must_use]
    pub fn domain(message: impl Into<String>) -> Self {
        Self::DomainValidation(message.into())
    }

    /// Create a division error.
    #[must_use]
    pub fn division(message: impl Into<String>) -> Self {
        Self::Division(message.into())
    }

    /// Create an event order error.
    #[must_use]
    pub fn event_order(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::EventOrder {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create an I/O error with a message (wraps in `std::io::Error`).
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(std::io::Error::other(message.into()))
    }

    /// Whether the error stems from user input rather than from the run itself.
    ///
    /// These are reported before any computation begins.
    #[must_use]
    pub const fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument(_) | Self::DomainValidation(_) | Self::YamlParse(_)
        )
    }
}
