//! Prelude module for convenient imports.
//!
//! Provides a single `use tally_validator::prelude::*;` import that brings
//! in the traits, core types, list and built-in validators.
//!
//! # Examples
//!
//! ```rust
//! use tally_validator::prelude::*;
//!
//! let roles = must_be_pear_file_role();
//! let port = must_be_integer().then(MustBeIntegerInRange::new(1, 65535));
//!
//! assert!(roles.check("php").is_valid());
//! assert!(port.check(443).is_valid());
//! ```

// ============================================================================
// FOUNDATION: Core traits, values, results, errors
// ============================================================================

pub use crate::foundation::{
    Error, Object, ValidationResult, Validator, ValidatorExt, Value, validate_with_all,
};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

pub use crate::validators::*;

// ============================================================================
// COMPOSITION
// ============================================================================

pub use crate::config::ValidatorConfig;
pub use crate::legacy::Legacy;
pub use crate::list::ValidationList;
