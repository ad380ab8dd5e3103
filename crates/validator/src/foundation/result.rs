//! The outcome of one validation run.
//!
//! A [`ValidationResult`] remembers the value under test and collects the
//! messages that validators record against it. It is valid exactly when no
//! message has been recorded.
//!
//! # Message templates
//!
//! Messages are written as templates with `%name%` placeholders:
//!
//! - `%value%`: the value under test, rendered with [`Value::render`]
//! - `%type%`: the value's type label, see [`Value::type_name`]
//! - any extra token passed to [`ValidationResult::add_error_with`]
//!
//! ```
//! use tally_validator::foundation::ValidationResult;
//!
//! let mut result = ValidationResult::new(1);
//! result.add_error_with("'%value%' is not in the range %min%-%max%", [("min", 10), ("max", 20)]);
//!
//! assert!(!result.is_valid());
//! assert_eq!(result.errors(), ["'1' is not in the range 10-20"]);
//! ```

use std::fmt;

use crate::foundation::{Error, Value};

/// Value under test plus the ordered messages produced while validating it.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    value: Value,
    errors: Vec<String>,
}

impl ValidationResult {
    /// Creates a result for `value` with no errors recorded.
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            errors: Vec::new(),
        }
    }

    /// The value under test.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// True when no errors have been recorded.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// True when at least one error has been recorded.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Recorded messages, in the order they were added.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Number of recorded messages.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Consumes the result, returning its messages.
    #[must_use]
    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }

    /// Records a message rendered from `template`.
    pub fn add_error(&mut self, template: &str) {
        self.add_error_with(template, std::iter::empty::<(&str, &str)>());
    }

    /// Records a message rendered from `template` with extra tokens.
    ///
    /// Token keys may be bare (`min`) or already wrapped (`%min%`). Extra
    /// tokens shadow `%value%` and `%type%` when they share a name.
    /// Substituted text is never scanned again, so a value that itself
    /// contains `%type%` is rendered verbatim.
    pub fn add_error_with<I, K, V>(&mut self, template: &str, tokens: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: fmt::Display,
    {
        let tokens: Vec<(String, String)> = tokens
            .into_iter()
            .map(|(k, v)| (token_name(k.as_ref()).to_owned(), v.to_string()))
            .collect();
        let value = self.value.render();
        let type_name = self.value.type_name();

        let message = expand(template, |name| {
            tokens
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_str())
                .or(match name {
                    "value" => Some(value.as_str()),
                    "type" => Some(type_name),
                    _ => None,
                })
        });

        tracing::trace!(%message, "validation error recorded");
        self.errors.push(message);
    }

    /// Fails with [`Error::ValidationFailed`] if any error was recorded.
    pub fn require_no_errors(&self) -> Result<(), Error> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(Error::ValidationFailed(self.clone()))
        }
    }

    /// Consuming variant of [`require_no_errors`](Self::require_no_errors)
    /// that hands back the value on success.
    pub fn into_value(self) -> Result<Value, Error> {
        if self.is_valid() {
            Ok(self.value)
        } else {
            Err(Error::ValidationFailed(self))
        }
    }

    /// Converts the result to a JSON report.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "valid": self.is_valid(),
            "value": self.value.render(),
            "type": self.value.type_name(),
            "errors": self.errors,
        })
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return f.write_str("Data is valid");
        }
        write!(
            f,
            "Validation failed with error(s): {}",
            self.errors.join("\n")
        )
    }
}

// ============================================================================
// TEMPLATE EXPANSION
// ============================================================================

fn token_name(key: &str) -> &str {
    key.strip_prefix('%')
        .and_then(|k| k.strip_suffix('%'))
        .unwrap_or(key)
}

/// Replaces every `%name%` for which `lookup` has a value, in one pass.
fn expand<'a>(template: &str, lookup: impl Fn(&str) -> Option<&'a str>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('%') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let Some(end) = after.find('%') else {
            out.push_str(&rest[start..]);
            return out;
        };
        match lookup(&after[..end]) {
            Some(replacement) => {
                out.push_str(replacement);
                rest = &after[end + 1..];
            }
            None => {
                // the closing '%' may open the next placeholder
                out.push('%');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

// ============================================================================
// TESTS
// ============================================================================
