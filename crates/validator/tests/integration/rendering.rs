//! How values and accumulated messages are rendered.

use pretty_assertions::assert_eq;
use tally_validator::prelude::*;

#[test]
fn values_render_by_kind() {
    let cases = [
        (Value::Null, "NULL", "NULL"),
        (Value::from(true), "TRUE", "boolean"),
        (Value::from(false), "FALSE", "boolean"),
        (Value::from(-3), "-3", "integer"),
        (Value::from(2.5), "2.5", "double"),
        (Value::from("php"), "php", "string"),
        (Value::from(vec!["a", "b"]), "(array)", "array"),
        (Value::unsupported("resource"), "[unsupported]", "resource"),
    ];

    for (value, rendered, type_name) in cases {
        assert_eq!(value.render(), rendered);
        assert_eq!(value.type_name(), type_name);
    }
}

#[test]
fn templated_messages_use_custom_tokens() {
    let mut result = ValidationResult::new("fred");
    result.add_error_with("'%value%' must be at least %min% characters", [("min", 5)]);
    result.add_error_with("%value% is %type%", std::iter::empty::<(&str, &str)>());

    assert_eq!(
        result.errors(),
        ["'fred' must be at least 5 characters", "fred is string"]
    );
}

#[test]
fn unknown_tokens_are_left_alone() {
    let mut result = ValidationResult::new(1);
    result.add_error("%value% costs 100%");
    assert_eq!(result.errors(), ["1 costs 100%"]);
}

#[test]
fn display_joins_messages_with_newlines() {
    let mut result = ValidationResult::new("x");
    assert_eq!(result.to_string(), "Data is valid");

    result.add_error("first");
    result.add_error("second");
    assert_eq!(
        result.to_string(),
        "Validation failed with error(s): first\nsecond"
    );
}

#[test]
fn json_summary_carries_value_and_errors() {
    let result = MustBeIntegerInRange::new(1, 5).check(9);

    assert_eq!(
        result.to_json_value(),
        serde_json::json!({
            "valid": false,
            "value": "9",
            "type": "integer",
            "errors": ["'9' is not in the range 1 to 5"],
        })
    );
}
