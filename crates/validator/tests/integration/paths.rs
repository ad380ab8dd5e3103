//! Path validators against a real directory tree.

use std::fs;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use tally_validator::prelude::*;
use tally_validator::validators::path::{
    MSG_CANNOT_BE_FOLDER, MSG_PARENT_NOT_FOUND, MSG_PATH_IS_A_FILE, MSG_PATH_NOT_FOUND,
};
use tempfile::TempDir;

struct Tree {
    _root: TempDir,
    dir: PathBuf,
    file: PathBuf,
    missing: PathBuf,
    orphan: PathBuf,
}

fn tree() -> Tree {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path().join("build");
    fs::create_dir(&dir).unwrap();
    let file = root.path().join("package.xml");
    fs::write(&file, "<package/>").unwrap();

    Tree {
        missing: root.path().join("dist"),
        orphan: root.path().join("no/such/dist"),
        dir,
        file,
        _root: root,
    }
}

fn message(template: &str, path: &Path) -> String {
    template.replace("%value%", &path.display().to_string())
}

#[test]
fn valid_path_wants_an_existing_directory() {
    let t = tree();
    let v = must_be_valid_path();

    assert!(v.check(&t.dir).is_valid());
    assert_eq!(v.check(&t.file).errors(), [message(MSG_PATH_IS_A_FILE, &t.file)]);
    assert_eq!(
        v.check(&t.missing).errors(),
        [message(MSG_PATH_NOT_FOUND, &t.missing)]
    );
}

#[test]
fn path_with_valid_parent_allows_creatable_directories() {
    let t = tree();
    let v = must_be_path_with_valid_parent();

    assert!(v.check(&t.dir).is_valid());
    assert!(v.check(&t.missing).is_valid());
    assert_eq!(v.check(&t.file).errors(), [message(MSG_PATH_IS_A_FILE, &t.file)]);
    assert_eq!(
        v.check(&t.orphan).errors(),
        [message(MSG_PARENT_NOT_FOUND, &t.orphan)]
    );
}

#[test]
fn file_or_valid_parent_allows_creatable_files() {
    let t = tree();
    let v = must_be_file_or_have_valid_parent();

    assert!(v.check(&t.file).is_valid());
    assert!(v.check(&t.missing).is_valid());
    assert_eq!(v.check(&t.dir).errors(), [message(MSG_CANNOT_BE_FOLDER, &t.dir)]);
    assert_eq!(
        v.check(&t.orphan).errors(),
        [message(MSG_PARENT_NOT_FOUND, &t.orphan)]
    );
}

#[test]
fn non_string_paths_are_rejected() {
    for v in [
        must_be_valid_path().shared(),
        must_be_path_with_valid_parent().shared(),
        must_be_file_or_have_valid_parent().shared(),
    ] {
        assert_eq!(
            v.check(42).errors(),
            ["'42' (of type integer) is not a valid path"]
        );
    }
}

#[test]
fn output_directory_rules() {
    let t = tree();
    let rules = must_be_string().then(must_be_path_with_valid_parent());

    assert!(rules.check(t.missing.display().to_string()).is_valid());
    assert_eq!(
        rules.check(Value::Null).errors(),
        ["'NULL' (of type NULL) is not a valid string"]
    );
}
