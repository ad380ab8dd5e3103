//! Macros for creating validators with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`validator!`]: creates a unit validator (struct + `Validator` impl + factory fn)
//!
//! # Examples
//!
//! ```
//! use tally_validator::validator;
//! use tally_validator::prelude::*;
//!
//! validator! {
//!     /// Rejects null.
//!     pub NotNull;
//!     rule(input) { !input.is_null() }
//!     message "'%value%' must not be null";
//!     fn not_null();
//! }
//!
//! assert!(not_null().check(1).is_valid());
//! assert_eq!(not_null().check(Value::Null).errors(), ["'NULL' must not be null"]);
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a unit validator: struct definition, `Validator` implementation
/// and (optionally) a `const` factory function.
///
/// The rule is a boolean block over the input [`Value`](crate::foundation::Value);
/// when it evaluates to `false` the message template is recorded on the
/// result.
///
/// # Variants
///
/// **With factory**:
/// ```rust,ignore
/// validator! {
///     pub MustBeString;
///     rule(input) { matches!(input, Value::String(_) | Value::Path(_)) }
///     message MSG_NOT_VALID_STRING;
///     fn must_be_string();
/// }
/// ```
///
/// **Without factory**:
/// ```rust,ignore
/// validator! {
///     pub MustBeString;
///     rule(input) { matches!(input, Value::String(_) | Value::Path(_)) }
///     message MSG_NOT_VALID_STRING;
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // ── Variant 1a: Unit validator + factory fn ──────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        rule($inp:ident) $rule:block
        message $msg:expr;
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name;
            rule($inp) $rule
            message $msg;
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Variant 1b: Unit validator, no factory ───────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        rule($inp:ident) $rule:block
        message $msg:expr;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Validator for $name {
            fn validate_into(
                &self,
                $inp: &$crate::foundation::Value,
                result: &mut $crate::foundation::ValidationResult,
            ) {
                if !$rule {
                    result.add_error($msg);
                }
            }
        }
    };
}
