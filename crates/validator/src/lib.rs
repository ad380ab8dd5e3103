//! # tally-validator
//!
//! A small validation toolkit: independent checks composed through a
//! short-circuiting list and a shared result that accumulates
//! human-readable error messages.
//!
//! ## Quick Start
//!
//! ```rust
//! use tally_validator::prelude::*;
//!
//! let mut list = ValidationList::new();
//! list.add(must_be_integer()).add(MustBeIntegerInRange::new(10, 20));
//!
//! assert!(list.check(15).is_valid());
//!
//! let result = list.check("abc");
//! assert_eq!(result.errors(), ["'abc' (of type string) is not a valid integer"]);
//! ```
//!
//! ## Creating Validators
//!
//! Use the [`validator!`] macro for single-rule validators, or implement
//! [`Validator`](foundation::Validator) manually for anything with more than
//! one failure case.
//!
//! ## Built-in Validators
//!
//! - **Path**: [`MustBeValidPath`](validators::MustBeValidPath),
//!   [`MustBePathWithValidParent`](validators::MustBePathWithValidParent),
//!   [`MustBeFileOrHaveValidParent`](validators::MustBeFileOrHaveValidParent)
//! - **PEAR**: [`MustBePearFileRole`](validators::MustBePearFileRole)
//! - **Type**: [`MustBeInteger`](validators::MustBeInteger),
//!   [`MustBeString`](validators::MustBeString),
//!   [`MustBeIntegerInRange`](validators::MustBeIntegerInRange)

pub mod config;
pub mod foundation;
pub mod json;
pub mod legacy;
pub mod list;
mod macros;
pub mod prelude;
pub mod validators;

pub use config::ValidatorConfig;
pub use foundation::{Error, Result, ValidationResult, Validator, ValidatorExt, Value};
pub use legacy::Legacy;
pub use list::ValidationList;
