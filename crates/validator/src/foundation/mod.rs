//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the toolkit:
//!
//! - **Values**: [`Value`], the dynamic input, and the [`Object`] capability
//! - **Results**: [`ValidationResult`], the value plus its error messages
//! - **Traits**: [`Validator`], [`ValidatorExt`]
//! - **Errors**: [`Error`], raised only for misuse, never for invalid input
//!
//! # Architecture
//!
//! ## 1. Messages, not exceptions
//!
//! A validator never fails. It records messages on the result it is given,
//! and the caller decides what an invalid result means:
//!
//! ```
//! use tally_validator::prelude::*;
//!
//! let result = MustBeIntegerInRange::new(10, 20).check(5);
//! assert_eq!(result.errors(), ["'5' is not in the range 10 to 20"]);
//!
//! // opt into fail-fast
//! assert!(result.require_no_errors().is_err());
//! ```
//!
//! ## 2. One result per run
//!
//! A result is created once per validation call and threaded through every
//! validator involved, so messages accumulate in one place.
//!
//! ## 3. Templated messages
//!
//! Message templates are plain `&str` constants with `%value%`, `%type%` and
//! validator-specific placeholders, expanded when the message is recorded.

pub mod error;
pub mod result;
pub mod traits;
pub mod value;

pub use error::{Error, Result};
pub use result::ValidationResult;
pub use traits::{Validator, ValidatorExt};
pub use value::{Object, Value};

// ============================================================================
// PRELUDE
// ============================================================================

/// Common imports for working with the validator core.
pub mod prelude {
    pub use super::{Error, Object, ValidationResult, Validator, ValidatorExt, Value};
}

// ============================================================================
// UTILITIES
// ============================================================================

/// Validates a value with every validator, collecting all messages.
///
/// Unlike [`ValidationList`](crate::ValidationList), this does not stop at
/// the first failing validator.
///
/// # Examples
///
/// ```
/// use tally_validator::foundation::{validate_with_all, Validator, Value};
/// use tally_validator::validators::{must_be_integer, must_be_string};
///
/// let checks: [&dyn Validator; 2] = [&must_be_integer(), &must_be_string()];
/// let result = validate_with_all(&Value::Null, &checks);
/// assert_eq!(result.error_count(), 2);
/// ```
pub fn validate_with_all<V>(value: &Value, validators: &[V]) -> ValidationResult
where
    V: Validator,
{
    let mut result = ValidationResult::new(value.clone());
    for validator in validators {
        validator.validate_into(value, &mut result);
    }
    result
}

// ============================================================================
// TESTS
// ============================================================================
