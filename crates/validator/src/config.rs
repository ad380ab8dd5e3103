//! Serializable validator descriptions.
//!
//! Tools that read their validation rules from a file describe each
//! validator as a small tagged object:
//!
//! ```json
//! [
//!     { "type": "string" },
//!     { "type": "pear_file_role" }
//! ]
//! ```
//!
//! [`ValidatorConfig::build`] turns a description into a live validator and
//! [`ValidationList::from_json`](crate::ValidationList::from_json) builds a
//! whole list in one go.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::ValidationList;
use crate::foundation::{Validator, ValidatorExt};
use crate::validators::{
    MustBeFileOrHaveValidParent, MustBeInteger, MustBeIntegerInRange, MustBePathWithValidParent,
    MustBePearFileRole, MustBeString, MustBeValidPath,
};

/// Description of one validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ValidatorConfig {
    /// [`MustBeValidPath`].
    ValidPath,
    /// [`MustBePathWithValidParent`].
    PathWithValidParent,
    /// [`MustBeFileOrHaveValidParent`].
    FileOrValidParent,
    /// [`MustBePearFileRole`].
    PearFileRole,
    /// [`MustBeInteger`].
    Integer,
    /// [`MustBeString`].
    String,
    /// [`MustBeIntegerInRange`].
    IntegerInRange {
        /// Lower bound (inclusive).
        min: i64,
        /// Upper bound (inclusive).
        max: i64,
    },
    /// A nested [`ValidationList`].
    List {
        /// Validators in the nested list, in order.
        validators: Vec<ValidatorConfig>,
    },
}

impl ValidatorConfig {
    /// Builds the described validator.
    #[must_use]
    pub fn build(&self) -> Arc<dyn Validator> {
        match self {
            Self::ValidPath => MustBeValidPath.shared(),
            Self::PathWithValidParent => MustBePathWithValidParent.shared(),
            Self::FileOrValidParent => MustBeFileOrHaveValidParent.shared(),
            Self::PearFileRole => MustBePearFileRole.shared(),
            Self::Integer => MustBeInteger.shared(),
            Self::String => MustBeString.shared(),
            Self::IntegerInRange { min, max } => MustBeIntegerInRange::new(*min, *max).shared(),
            Self::List { validators } => {
                tracing::debug!(count = validators.len(), "building nested validation list");
                ValidationList::from_config(validators).shared()
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
