//! PEAR file role validators
//!
//! A PEAR package manifest tags every file with the role it plays in the
//! installed package. Roles form a fixed vocabulary; a file may carry
//! several roles written as a comma-separated list.

use std::fmt;
use std::str::FromStr;

use crate::foundation::{ValidationResult, Validator, Value};

/// Message recorded when a single role is not recognised.
pub const MSG_NOT_VALID_ROLE: &str = "'%value%' is not a valid PEAR file role";

/// Message recorded when the input is not a string, or a comma-separated
/// list contains an unrecognised role.
pub const MSG_NOT_VALID_ROLE_SET: &str =
    "'%value%' is not a valid comma-separated set of PEAR file roles";

// ============================================================================
// ROLE VOCABULARY
// ============================================================================

/// The role a file plays inside a PEAR package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PearFileRole {
    /// Executable script.
    Bin,
    /// Data file shipped with the package.
    Data,
    /// Documentation.
    Doc,
    /// PHP source.
    Php,
    /// Test suite file.
    Test,
    /// Web-served asset.
    Www,
}

impl PearFileRole {
    /// Every role, in manifest order.
    pub const ALL: [Self; 6] = [
        Self::Bin,
        Self::Data,
        Self::Doc,
        Self::Php,
        Self::Test,
        Self::Www,
    ];

    /// The role's manifest spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bin => "bin",
            Self::Data => "data",
            Self::Doc => "doc",
            Self::Php => "php",
            Self::Test => "test",
            Self::Www => "www",
        }
    }

    /// Parses a comma-separated role list.
    ///
    /// Returns `None` if any entry is not a role. Entries are matched
    /// exactly; surrounding whitespace is not stripped.
    #[must_use]
    pub fn parse_set(input: &str) -> Option<Vec<Self>> {
        input.split(',').map(|role| role.parse().ok()).collect()
    }
}

impl fmt::Display for PearFileRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a PEAR file role.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a valid PEAR file role")]
pub struct UnknownRole(pub String);

impl FromStr for PearFileRole {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_owned()))
    }
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// Validates a PEAR file role, or a comma-separated set of roles.
///
/// # Examples
///
/// ```
/// use tally_validator::prelude::*;
///
/// let validator = must_be_pear_file_role();
/// assert!(validator.check("bin,doc").is_valid());
/// assert_eq!(
///     validator.check("java").errors(),
///     ["'java' is not a valid PEAR file role"]
/// );
/// assert_eq!(
///     validator.check("bin,java").errors(),
///     ["'bin,java' is not a valid comma-separated set of PEAR file roles"]
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MustBePearFileRole;

impl Validator for MustBePearFileRole {
    fn validate_into(&self, value: &Value, result: &mut ValidationResult) {
        let Some(input) = value.as_str() else {
            result.add_error(MSG_NOT_VALID_ROLE_SET);
            return;
        };

        if input.contains(',') {
            if PearFileRole::parse_set(input).is_none() {
                result.add_error(MSG_NOT_VALID_ROLE_SET);
            }
        } else if input.parse::<PearFileRole>().is_err() {
            result.add_error(MSG_NOT_VALID_ROLE);
        }
    }
}

/// Creates a [`MustBePearFileRole`] validator.
#[must_use]
pub const fn must_be_pear_file_role() -> MustBePearFileRole {
    MustBePearFileRole
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidatorExt;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("bin")]
    #[case("data")]
    #[case("doc")]
    #[case("php")]
    #[case("test")]
    #[case("www")]
    #[case("bin,doc")]
    #[case("data,bin,php")]
    #[case("bin,www,data")]
    fn accepts_roles_and_role_sets(#[case] input: &str) {
        assert!(must_be_pear_file_role().check(input).is_valid());
    }

    #[rstest]
    #[case(Value::Sequence(Vec::new()), "'(array)' is not a valid comma-separated set of PEAR file roles")]
    #[case(Value::from(5), "'5' is not a valid comma-separated set of PEAR file roles")]
    #[case(Value::from(5.5), "'5.5' is not a valid comma-separated set of PEAR file roles")]
    #[case(Value::Null, "'NULL' is not a valid comma-separated set of PEAR file roles")]
    fn rejects_non_strings_as_sets(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(must_be_pear_file_role().validate(&value).errors(), [expected]);
    }

    #[test]
    fn single_unknown_role_gets_specific_message() {
        assert_eq!(
            must_be_pear_file_role().check("java").errors(),
            ["'java' is not a valid PEAR file role"]
        );
    }

    #[test]
    fn unknown_role_in_set_gets_one_set_message() {
        assert_eq!(
            must_be_pear_file_role().check("java,bin,cobol").errors(),
            ["'java,bin,cobol' is not a valid comma-separated set of PEAR file roles"]
        );
    }

    #[test]
    fn empty_string_is_an_unknown_role() {
        assert_eq!(
            must_be_pear_file_role().check("").errors(),
            ["'' is not a valid PEAR file role"]
        );
    }

    #[test]
    fn trailing_comma_is_an_invalid_set() {
        assert!(!must_be_pear_file_role().check("bin,").is_valid());
    }

    #[test]
    fn roles_round_trip_through_strings() {
        for role in PearFileRole::ALL {
            assert_eq!(role.as_str().parse::<PearFileRole>(), Ok(role));
        }
        assert_eq!(
            "java".parse::<PearFileRole>(),
            Err(UnknownRole("java".to_owned()))
        );
    }

    #[test]
    fn parse_set_keeps_order() {
        assert_eq!(
            PearFileRole::parse_set("php,doc"),
            Some(vec![PearFileRole::Php, PearFileRole::Doc])
        );
        assert_eq!(PearFileRole::parse_set("php, doc"), None);
    }
}
