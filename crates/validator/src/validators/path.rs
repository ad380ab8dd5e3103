//! File-system path validators
//!
//! These validators answer "can this path be used as ..." questions before a
//! tool creates or writes anything. Each performs a handful of read-only
//! `stat` calls and nothing else.

use std::path::Path;

use crate::foundation::{ValidationResult, Validator, Value};

/// Message recorded when the input is not a string.
pub const MSG_NOT_VALID_PATH: &str = "'%value%' (of type %type%) is not a valid path";

/// Message recorded when nothing exists at the path.
pub const MSG_PATH_NOT_FOUND: &str = "'%value%' does not exist on disk at all";

/// Message recorded when a directory was expected but a file was found.
pub const MSG_PATH_IS_A_FILE: &str = "'%value%' is a file; expected a directory";

/// Message recorded when the path exists but is neither file nor directory.
pub const MSG_PATH_IS_NOT_A_DIR: &str = "'%value%' exists, but is not a directory";

/// Message recorded when the path's parent directory is missing.
pub const MSG_PARENT_NOT_FOUND: &str = "'%value%'s parent folder does not exist on disk at all";

/// Message recorded when a file was expected but a directory was found.
pub const MSG_CANNOT_BE_FOLDER: &str = "'%value%' is a folder; must be a new or existing file";

/// Extracts the path from a string or path value, recording an error otherwise.
fn path_of<'a>(value: &'a Value, result: &mut ValidationResult) -> Option<&'a Path> {
    let path = value.as_path();
    if path.is_none() {
        result.add_error(MSG_NOT_VALID_PATH);
    }
    path
}

/// The directory a path would be created in.
///
/// A bare relative name lives in `.`; the root is its own parent.
fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if parent.as_os_str().is_empty() => Path::new("."),
        Some(parent) => parent,
        None => path,
    }
}

// ============================================================================
// MUST BE VALID PATH
// ============================================================================

/// Validates that a path names an existing directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MustBeValidPath;

impl Validator for MustBeValidPath {
    fn validate_into(&self, value: &Value, result: &mut ValidationResult) {
        let Some(path) = path_of(value, result) else {
            return;
        };
        tracing::trace!(path = %path.display(), "checking for existing directory");

        if path.is_dir() {
            return;
        }
        if !path.exists() {
            result.add_error(MSG_PATH_NOT_FOUND);
        } else if path.is_file() {
            result.add_error(MSG_PATH_IS_A_FILE);
        } else {
            result.add_error(MSG_PATH_IS_NOT_A_DIR);
        }
    }
}

/// Creates a [`MustBeValidPath`] validator.
#[must_use]
pub const fn must_be_valid_path() -> MustBeValidPath {
    MustBeValidPath
}

// ============================================================================
// MUST BE PATH WITH VALID PARENT
// ============================================================================

/// Validates that a path is an existing directory, or could be created as one.
///
/// Valid when the path is an existing directory, or when nothing exists at
/// the path and its parent is an existing directory. Anything else that
/// exists at the path (regular files, devices, sockets) is reported as a
/// file.
///
/// # Examples
///
/// ```
/// use tally_validator::prelude::*;
///
/// let dir = tempfile::tempdir().unwrap();
/// let validator = must_be_path_with_valid_parent();
///
/// assert!(validator.check(dir.path()).is_valid());
/// assert!(validator.check(dir.path().join("new")).is_valid());
/// assert!(!validator.check(dir.path().join("missing/new")).is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MustBePathWithValidParent;

impl Validator for MustBePathWithValidParent {
    fn validate_into(&self, value: &Value, result: &mut ValidationResult) {
        let Some(path) = path_of(value, result) else {
            return;
        };
        tracing::trace!(path = %path.display(), "checking directory or creatable directory");

        if path.is_dir() {
            return;
        }
        if path.exists() {
            result.add_error(MSG_PATH_IS_A_FILE);
            return;
        }
        if !parent_dir(path).is_dir() {
            result.add_error(MSG_PARENT_NOT_FOUND);
        }
    }
}

/// Creates a [`MustBePathWithValidParent`] validator.
#[must_use]
pub const fn must_be_path_with_valid_parent() -> MustBePathWithValidParent {
    MustBePathWithValidParent
}

// ============================================================================
// MUST BE FILE OR HAVE VALID PARENT
// ============================================================================

/// Validates that a path is an existing file, or could be created as one.
///
/// Directories are rejected outright. A missing path is valid when its
/// parent is an existing directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MustBeFileOrHaveValidParent;

impl Validator for MustBeFileOrHaveValidParent {
    fn validate_into(&self, value: &Value, result: &mut ValidationResult) {
        let Some(path) = path_of(value, result) else {
            return;
        };
        tracing::trace!(path = %path.display(), "checking file or creatable file");

        // directories also "exist", so this has to come first
        if path.is_dir() {
            result.add_error(MSG_CANNOT_BE_FOLDER);
            return;
        }
        if path.exists() {
            return;
        }
        if !parent_dir(path).is_dir() {
            result.add_error(MSG_PARENT_NOT_FOUND);
        }
    }
}

/// Creates a [`MustBeFileOrHaveValidParent`] validator.
#[must_use]
pub const fn must_be_file_or_have_valid_parent() -> MustBeFileOrHaveValidParent {
    MustBeFileOrHaveValidParent
}

// ============================================================================
// TESTS
// ============================================================================
