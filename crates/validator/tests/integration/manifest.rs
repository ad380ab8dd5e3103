//! Validating a package manifest read from JSON.

use pretty_assertions::assert_eq;
use serde_json::json;
use tally_validator::prelude::*;

fn role_rules() -> ValidationList {
    ValidationList::from_json(r#"[{"type": "string"}, {"type": "pear_file_role"}]"#).unwrap()
}

#[test]
fn valid_manifest_entries_pass() {
    let manifest = json!({
        "files": [
            {"name": "src/Tool.php", "role": "php"},
            {"name": "bin/tool", "role": "bin,data"},
        ],
    });

    let rules = role_rules();
    for file in manifest["files"].as_array().unwrap() {
        assert!(rules.check(&file["role"]).is_valid(), "{file}");
    }
}

#[test]
fn bad_roles_are_reported_with_their_input() {
    let rules = role_rules();

    assert_eq!(
        rules.check(json!("script")).errors(),
        ["'script' is not a valid PEAR file role"]
    );
    assert_eq!(
        rules.check(json!(["php"])).errors(),
        ["'(array)' (of type array) is not a valid string"]
    );
}

#[test]
fn port_from_config() {
    let rules = ValidationList::from_config(&[
        ValidatorConfig::Integer,
        ValidatorConfig::IntegerInRange { min: 1, max: 65535 },
    ]);

    assert!(rules.check(json!("8080")).is_valid());
    assert!(rules.check(json!(8080)).is_valid());
    assert_eq!(
        rules.check(json!(70000)).errors(),
        ["'70000' is not in the range 1 to 65535"]
    );
    assert_eq!(
        rules.check(json!(" 80")).errors(),
        ["' 80' (of type string) is not a valid integer"]
    );
}

#[test]
fn failed_result_becomes_an_error() {
    let result = role_rules().check(json!("java"));
    let error = result.require_no_errors().unwrap_err();

    assert_eq!(
        error.to_string(),
        "Bad request: Validation failed with error(s): 'java' is not a valid PEAR file role"
    );
}

#[test]
fn legacy_interface_keeps_last_messages() {
    let mut legacy = must_be_pear_file_role().legacy();

    assert!(!legacy.is_valid("java,php"));
    assert_eq!(
        legacy.messages(),
        ["'java,php' is not a valid comma-separated set of PEAR file roles"]
    );
    assert_eq!(legacy.value(), Some(&Value::from("java,php")));

    assert!(legacy.is_valid("php"));
    assert!(legacy.messages().is_empty());
}
