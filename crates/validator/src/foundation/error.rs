//! Errors raised by misuse of the toolkit.
//!
//! Invalid *input* is never an error here: it is recorded as a message on a
//! [`ValidationResult`]. The variants below cover the cases where the caller
//! did something wrong (handed a non-validator to a list, asked for a result
//! to be error-free when it is not, supplied a malformed configuration).

use crate::foundation::ValidationResult;

/// Error type for all fallible toolkit operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Something that is not a validator was offered to a validation list.
    ///
    /// Carries a description of the offending value: `(<type>) <value>` for
    /// plain values, the class name for objects.
    #[error("Bad request: Bad validator: {0}; must be object that implements Validator")]
    BadValidator(String),

    /// A result that was required to be error-free had errors.
    #[error("Bad request: {0}")]
    ValidationFailed(ValidationResult),

    /// A validator configuration could not be parsed.
    #[error("invalid validator configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl Error {
    /// Convenience constructor for [`Error::BadValidator`].
    pub fn bad_validator(description: impl Into<String>) -> Self {
        Self::BadValidator(description.into())
    }

    /// Returns the failed result, if this is a [`Error::ValidationFailed`].
    #[must_use]
    pub fn validation_result(&self) -> Option<&ValidationResult> {
        match self {
            Self::ValidationFailed(result) => Some(result),
            _ => None,
        }
    }
}

/// Result alias for fallible toolkit operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
