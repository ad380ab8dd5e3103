//! Type and integer range validators

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{ValidationResult, Validator, Value};

/// Message recorded when the input is not an integer.
pub const MSG_NOT_VALID_INTEGER: &str = "'%value%' (of type %type%) is not a valid integer";

/// Message recorded when the input is not a string.
pub const MSG_NOT_VALID_STRING: &str = "'%value%' (of type %type%) is not a valid string";

/// Message recorded when an integer falls outside the allowed range.
pub const MSG_NOT_IN_RANGE: &str = "'%value%' is not in the range %min% to %max%";

static INTEGER_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+$").expect("integer pattern is valid"));

/// Reads an integer from an integer value or an integer-formatted string.
///
/// Strings must be an optional sign followed by digits, with no surrounding
/// whitespace, and must fit in an `i64`.
#[must_use]
pub fn integer_value(value: &Value) -> Option<i64> {
    match value {
        Value::Integer(i) => Some(*i),
        Value::String(s) if INTEGER_FORMAT.is_match(s) => s.parse().ok(),
        _ => None,
    }
}

crate::validator! {
    /// Validates that the input is an integer or an integer-formatted string.
    ///
    /// # Examples
    ///
    /// ```
    /// use tally_validator::prelude::*;
    ///
    /// assert!(must_be_integer().check(-1).is_valid());
    /// assert!(must_be_integer().check("0").is_valid());
    /// assert_eq!(
    ///     must_be_integer().check("fred").errors(),
    ///     ["'fred' (of type string) is not a valid integer"]
    /// );
    /// ```
    pub MustBeInteger;
    rule(input) { integer_value(input).is_some() }
    message MSG_NOT_VALID_INTEGER;
    fn must_be_integer();
}

crate::validator! {
    /// Validates that the input is a string.
    pub MustBeString;
    rule(input) { matches!(input, Value::String(_) | Value::Path(_)) }
    message MSG_NOT_VALID_STRING;
    fn must_be_string();
}

// ============================================================================
// INTEGER IN RANGE
// ============================================================================

/// Validates that the input is an integer within an inclusive range.
///
/// Accepts the same inputs as [`MustBeInteger`]; anything else is reported
/// with [`MSG_NOT_VALID_INTEGER`] before the range is looked at.
///
/// # Examples
///
/// ```
/// use tally_validator::prelude::*;
///
/// let validator = MustBeIntegerInRange::new(10, 20);
/// assert!(validator.check(15).is_valid());
/// assert!(validator.check("20").is_valid());
/// assert_eq!(validator.check(5).errors(), ["'5' is not in the range 10 to 20"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MustBeIntegerInRange {
    min: i64,
    max: i64,
}

impl MustBeIntegerInRange {
    /// Creates a validator accepting `min..=max`.
    ///
    /// A range with `min > max` accepts nothing.
    #[must_use]
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Lower bound (inclusive).
    #[must_use]
    pub const fn min(&self) -> i64 {
        self.min
    }

    /// Upper bound (inclusive).
    #[must_use]
    pub const fn max(&self) -> i64 {
        self.max
    }
}

impl Validator for MustBeIntegerInRange {
    fn validate_into(&self, value: &Value, result: &mut ValidationResult) {
        let Some(number) = integer_value(value) else {
            result.add_error(MSG_NOT_VALID_INTEGER);
            return;
        };

        if !(self.min..=self.max).contains(&number) {
            result.add_error_with(MSG_NOT_IN_RANGE, [("min", self.min), ("max", self.max)]);
        }
    }
}

/// Creates a [`MustBeIntegerInRange`] validator.
#[must_use]
pub const fn must_be_integer_in_range(min: i64, max: i64) -> MustBeIntegerInRange {
    MustBeIntegerInRange::new(min, max)
}

// ============================================================================
// TESTS
// ============================================================================
