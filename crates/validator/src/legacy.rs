//! LEGACY adapter - stateful `is_valid` / `messages` interface

use crate::foundation::{ValidationResult, Validator, Value};

// ============================================================================
// LEGACY ADAPTER
// ============================================================================

/// Exposes a validator through the older stateful interface.
///
/// Older callers ask a validator `is_valid(value)` and then read its
/// messages back from the validator itself. `Legacy` keeps the last value
/// and its messages; every call to [`is_valid`](Self::is_valid) starts
/// from an empty message list.
///
/// # Examples
///
/// ```
/// use tally_validator::prelude::*;
///
/// let mut validator = MustBeIntegerInRange::new(10, 20).legacy();
/// assert!(!validator.is_valid(1));
/// assert_eq!(validator.messages(), ["'1' is not in the range 10 to 20"]);
///
/// assert!(validator.is_valid(11));
/// assert!(!validator.has_messages());
/// ```
#[derive(Debug, Clone)]
pub struct Legacy<V> {
    inner: V,
    last: Option<ValidationResult>,
}

impl<V> Legacy<V> {
    /// Wraps `inner`.
    pub fn new(inner: V) -> Self {
        Self { inner, last: None }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }

    /// The value most recently checked, if any.
    pub fn value(&self) -> Option<&Value> {
        self.last.as_ref().map(ValidationResult::value)
    }

    /// Messages from the most recent check.
    pub fn messages(&self) -> &[String] {
        self.last
            .as_ref()
            .map(ValidationResult::errors)
            .unwrap_or_default()
    }

    /// True if the most recent check produced messages.
    pub fn has_messages(&self) -> bool {
        !self.messages().is_empty()
    }
}

impl<V: Validator> Legacy<V> {
    /// Checks `value`, replacing the stored value and messages.
    pub fn is_valid(&mut self, value: impl Into<Value>) -> bool {
        let value = value.into();
        let result = self.inner.validate(&value);
        let valid = result.is_valid();
        self.last = Some(result);
        valid
    }
}

impl<V: Validator> Validator for Legacy<V> {
    fn validate_into(&self, value: &Value, result: &mut ValidationResult) {
        self.inner.validate_into(value, result);
    }
}

// ============================================================================
// TESTS
// ============================================================================
