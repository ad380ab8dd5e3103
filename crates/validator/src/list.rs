//! Ordered, short-circuiting lists of validators.
//!
//! A [`ValidationList`] runs its validators in insertion order against one
//! value, threading a single [`ValidationResult`] through all of them, and
//! stops as soon as one of them leaves the result invalid. Later checks can
//! therefore assume earlier ones passed: a range check placed after an
//! integer check never sees a non-integer.
//!
//! # Examples
//!
//! ```
//! use tally_validator::prelude::*;
//!
//! let mut list = ValidationList::new();
//! list.add(must_be_integer())
//!     .add(MustBeIntegerInRange::new(10, 20))
//!     .add(must_be_string());
//!
//! let result = list.check(5);
//! // stopped at the range check, the string check never ran
//! assert_eq!(result.errors(), ["'5' is not in the range 10 to 20"]);
//! ```

use std::sync::Arc;

use crate::config::ValidatorConfig;
use crate::foundation::{Error, ValidationResult, Validator, Value};

/// An ordered chain of validators sharing one result.
#[derive(Debug, Clone, Default)]
pub struct ValidationList {
    validators: Vec<Arc<dyn Validator>>,
}

impl ValidationList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a list from already-typed validators.
    #[must_use]
    pub fn with_validators(validators: Vec<Arc<dyn Validator>>) -> Self {
        Self { validators }
    }

    /// Builds a list from validator configurations.
    #[must_use]
    pub fn from_config(configs: &[ValidatorConfig]) -> Self {
        Self::with_validators(configs.iter().map(ValidatorConfig::build).collect())
    }

    /// Builds a list from a JSON array of validator configurations.
    ///
    /// # Examples
    ///
    /// ```
    /// use tally_validator::prelude::*;
    ///
    /// let list = ValidationList::from_json(r#"[
    ///     {"type": "integer"},
    ///     {"type": "integer_in_range", "min": 1, "max": 10}
    /// ]"#)?;
    /// assert!(list.check("7").is_valid());
    /// # Ok::<(), tally_validator::Error>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let configs: Vec<ValidatorConfig> = serde_json::from_str(json)?;
        Ok(Self::from_config(&configs))
    }

    /// Appends a validator.
    pub fn add<V: Validator + 'static>(&mut self, validator: V) -> &mut Self {
        self.validators.push(Arc::new(validator));
        self
    }

    /// Appends a validator that is already shared.
    pub fn add_shared(&mut self, validator: Arc<dyn Validator>) -> &mut Self {
        self.validators.push(validator);
        self
    }

    /// Appends a dynamically supplied validator.
    ///
    /// Fails with [`Error::BadValidator`] if `candidate` is not an object
    /// that is a validator; the list is unchanged in that case.
    pub fn try_add(&mut self, candidate: Value) -> Result<&mut Self, Error> {
        let validator = into_validator(candidate)?;
        self.validators.push(validator);
        Ok(self)
    }

    /// Replaces the whole list with dynamically supplied validators.
    ///
    /// Every candidate is checked before anything is replaced: on the first
    /// candidate that is not a validator this fails with
    /// [`Error::BadValidator`] and the current list is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use tally_validator::prelude::*;
    ///
    /// let mut list = ValidationList::new();
    /// list.add(must_be_string());
    ///
    /// let error = list.set(vec![Value::validator(must_be_integer()), Value::from(1)]).unwrap_err();
    /// assert_eq!(
    ///     error.to_string(),
    ///     "Bad request: Bad validator: (integer) 1; must be object that implements Validator"
    /// );
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn set<I>(&mut self, candidates: I) -> Result<&mut Self, Error>
    where
        I: IntoIterator<Item = Value>,
    {
        let validators = candidates
            .into_iter()
            .map(into_validator)
            .collect::<Result<Vec<_>, _>>()?;
        self.validators = validators;
        Ok(self)
    }

    /// Replaces the whole list with already-typed validators.
    pub fn set_validators(&mut self, validators: Vec<Arc<dyn Validator>>) -> &mut Self {
        self.validators = validators;
        self
    }

    /// The validators, in the order they run.
    #[must_use]
    pub fn validators(&self) -> &[Arc<dyn Validator>] {
        &self.validators
    }

    /// True if the list holds at least one validator.
    #[must_use]
    pub fn has_validators(&self) -> bool {
        !self.validators.is_empty()
    }

    /// Number of validators in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// True if the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Removes every validator.
    pub fn clear(&mut self) {
        self.validators.clear();
    }
}

impl Validator for ValidationList {
    fn validate_into(&self, value: &Value, result: &mut ValidationResult) {
        for (index, validator) in self.validators.iter().enumerate() {
            validator.validate_into(value, result);
            if !result.is_valid() {
                tracing::debug!(
                    index,
                    skipped = self.validators.len() - index - 1,
                    "validation list stopped at first failure"
                );
                return;
            }
        }
    }
}

impl<V: Validator + 'static> Extend<V> for ValidationList {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        for validator in iter {
            self.add(validator);
        }
    }
}

impl FromIterator<Arc<dyn Validator>> for ValidationList {
    fn from_iter<I: IntoIterator<Item = Arc<dyn Validator>>>(iter: I) -> Self {
        Self::with_validators(iter.into_iter().collect())
    }
}

/// Checks that a dynamic value is a validator object.
fn into_validator(candidate: Value) -> Result<Arc<dyn Validator>, Error> {
    let object = match candidate {
        Value::Object(object) => object,
        // callables are objects of class Closure, and never validators
        Value::Callable => {
            tracing::debug!(class = "Closure", "rejected object that is not a validator");
            return Err(Error::bad_validator("Closure"));
        }
        other => {
            let description = format!("({}) {}", other.type_name(), other.render());
            tracing::debug!(%description, "rejected non-object validator");
            return Err(Error::BadValidator(description));
        }
    };

    let class = object.class_name().into_owned();
    object.into_validator().ok_or_else(|| {
        tracing::debug!(%class, "rejected object that is not a validator");
        Error::BadValidator(class)
    })
}

// ============================================================================
// TESTS
// ============================================================================
