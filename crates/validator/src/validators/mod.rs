//! Built-in validators
//!
//! # Categories
//!
//! - **Path**: existing directory, directory-or-creatable, file-or-creatable
//! - **PEAR**: file role and comma-separated role sets
//! - **Type**: integer, string, integer within an inclusive range
//!
//! Every failure case has its own message template, exported as a `MSG_*`
//! constant next to the validator that records it.
//!
//! # Examples
//!
//! ```
//! use tally_validator::prelude::*;
//!
//! let roles = must_be_string().then(must_be_pear_file_role());
//! assert!(roles.check("php,test").is_valid());
//! ```

pub mod path;
pub mod pear;
pub mod types;

// ============================================================================
// RE-EXPORTS: Path validators
// ============================================================================

pub use path::{
    MustBeFileOrHaveValidParent, MustBePathWithValidParent, MustBeValidPath,
    must_be_file_or_have_valid_parent, must_be_path_with_valid_parent, must_be_valid_path,
};

// ============================================================================
// RE-EXPORTS: PEAR validators
// ============================================================================

pub use pear::{MustBePearFileRole, PearFileRole, UnknownRole, must_be_pear_file_role};

// ============================================================================
// RE-EXPORTS: Type validators
// ============================================================================

pub use types::{
    MustBeInteger, MustBeIntegerInRange, MustBeString, integer_value, must_be_integer,
    must_be_integer_in_range, must_be_string,
};
