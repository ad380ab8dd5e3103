//! Core traits for the validation system
//!
//! This module defines the capability every check implements.

use std::fmt;
use std::sync::Arc;

use crate::foundation::{ValidationResult, Value};
use crate::legacy::Legacy;
use crate::list::ValidationList;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The capability that all validators implement.
///
/// A validator judges one [`Value`] and records zero or more messages on a
/// [`ValidationResult`]. Invalid input is never reported through `Err`;
/// the result is the only channel.
///
/// Validators record messages against the *result's* value, so when several
/// validators share one result every message names the same input.
///
/// # Examples
///
/// ```
/// use tally_validator::foundation::{ValidationResult, Validator, Value};
///
/// #[derive(Debug)]
/// struct NotNull;
///
/// impl Validator for NotNull {
///     fn validate_into(&self, value: &Value, result: &mut ValidationResult) {
///         if value.is_null() {
///             result.add_error("value must not be %value%");
///         }
///     }
/// }
///
/// let result = NotNull.validate(&Value::Null);
/// assert_eq!(result.errors(), ["value must not be NULL"]);
/// ```
pub trait Validator: fmt::Debug + Send + Sync {
    /// Validates `value`, recording any problems on `result`.
    fn validate_into(&self, value: &Value, result: &mut ValidationResult);

    /// Validates `value` into a fresh result.
    fn validate(&self, value: &Value) -> ValidationResult {
        let mut result = ValidationResult::new(value.clone());
        self.validate_into(value, &mut result);
        result
    }
}

impl<V: Validator + ?Sized> Validator for &V {
    fn validate_into(&self, value: &Value, result: &mut ValidationResult) {
        (**self).validate_into(value, result);
    }
}

impl<V: Validator + ?Sized> Validator for Box<V> {
    fn validate_into(&self, value: &Value, result: &mut ValidationResult) {
        (**self).validate_into(value, result);
    }
}

impl<V: Validator + ?Sized> Validator for Arc<V> {
    fn validate_into(&self, value: &Value, result: &mut ValidationResult) {
        (**self).validate_into(value, result);
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension methods available on every sized validator.
///
/// # Examples
///
/// ```
/// use tally_validator::prelude::*;
///
/// let port = must_be_integer().then(MustBeIntegerInRange::new(1, 65535));
/// assert!(port.check("8080").is_valid());
/// assert!(!port.check("http").is_valid());
/// ```
pub trait ValidatorExt: Validator + Sized {
    /// Validates anything convertible into a [`Value`].
    fn check(&self, value: impl Into<Value>) -> ValidationResult {
        self.validate(&value.into())
    }

    /// Chains `next` after this validator in a short-circuiting list.
    fn then<V>(self, next: V) -> ValidationList
    where
        Self: 'static,
        V: Validator + 'static,
    {
        let mut list = ValidationList::new();
        list.add(self).add(next);
        list
    }

    /// Wraps the validator in the stateful [`Legacy`] interface.
    fn legacy(self) -> Legacy<Self> {
        Legacy::new(self)
    }

    /// Moves the validator behind a shared trait object.
    fn shared(self) -> Arc<dyn Validator>
    where
        Self: 'static,
    {
        Arc::new(self)
    }
}

impl<T: Validator> ValidatorExt for T {}

// ============================================================================
// TESTS
// ============================================================================
