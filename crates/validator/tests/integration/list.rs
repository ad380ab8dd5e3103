//! Short-circuiting behaviour of `ValidationList`.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use pretty_assertions::assert_eq;
use tally_validator::prelude::*;

/// Counts how often it is asked to validate, and never fails.
#[derive(Debug, Default)]
struct Probe {
    calls: AtomicUsize,
}

impl Validator for Probe {
    fn validate_into(&self, _value: &Value, _result: &mut ValidationResult) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn integer_then_range() {
    let mut list = ValidationList::new();
    list.add(must_be_integer())
        .add(MustBeIntegerInRange::new(10, 20));

    assert!(list.check(15).is_valid());
    assert!(list.check("15").is_valid());
    assert_eq!(
        list.check(25).errors(),
        ["'25' is not in the range 10 to 20"]
    );
    assert_eq!(
        list.check("abc").errors(),
        ["'abc' (of type string) is not a valid integer"]
    );
}

#[test]
fn later_validators_do_not_run_after_a_failure() {
    let probe = Arc::new(Probe::default());
    let mut list = ValidationList::new();
    list.add(must_be_string()).add_shared(probe.clone());

    let result = list.check(7);
    assert_eq!(result.error_count(), 1);
    assert_eq!(probe.calls.load(Ordering::SeqCst), 0);

    assert!(list.check("seven").is_valid());
    assert_eq!(probe.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn empty_list_accepts_anything() {
    let list = ValidationList::new();
    assert!(!list.has_validators());
    assert!(list.check(Value::Null).is_valid());
    assert!(list.check(vec![1, 2, 3]).is_valid());
}

#[test]
fn lists_nest() {
    let mut inner = ValidationList::new();
    inner.add(must_be_integer());

    let mut outer = ValidationList::new();
    outer.add(inner).add(MustBeIntegerInRange::new(0, 9));

    assert!(outer.check(3).is_valid());
    assert_eq!(
        outer.check(true).errors(),
        ["'TRUE' (of type boolean) is not a valid integer"]
    );
}

#[test]
fn then_builds_the_same_list() {
    let chained = must_be_integer().then(MustBeIntegerInRange::new(1, 65535));
    assert_eq!(chained.len(), 2);
    assert!(chained.check(443).is_valid());
    assert_eq!(
        chained.check(0).errors(),
        ["'0' is not in the range 1 to 65535"]
    );
}

#[test]
fn dynamic_set_rejects_non_validators() {
    let mut list = ValidationList::new();
    list.set(vec![
        Value::validator(must_be_string()),
        Value::validator(must_be_pear_file_role()),
    ])
    .unwrap();
    assert_eq!(list.len(), 2);

    let error = list
        .set(vec![Value::validator(must_be_integer()), Value::from("nope")])
        .unwrap_err();
    assert!(matches!(error, Error::BadValidator(_)));
    assert_eq!(
        error.to_string(),
        "Bad request: Bad validator: (string) nope; must be object that implements Validator"
    );
    // rejected set leaves the previous validators in place
    assert_eq!(list.len(), 2);
    assert!(list.check("php").is_valid());
}

#[test]
fn try_add_accepts_wrapped_validators() {
    let mut list = ValidationList::new();
    list.try_add(Value::validator(must_be_integer())).unwrap();
    assert_eq!(list.len(), 1);

    assert!(list.try_add(Value::Null).is_err());
    assert_eq!(list.len(), 1);
}

#[test]
fn collected_from_shared_validators() {
    let list: ValidationList = [must_be_integer().shared(), MustBeIntegerInRange::new(1, 3).shared()]
        .into_iter()
        .collect();

    assert!(list.check(2).is_valid());
    assert!(!list.check(4).is_valid());
}

#[test]
fn validate_with_all_does_not_short_circuit() {
    let validators = [must_be_string().shared(), must_be_integer().shared()];
    let result = validate_with_all(&Value::from(1.5), &validators);

    assert_eq!(
        result.errors(),
        [
            "'1.5' (of type double) is not a valid string",
            "'1.5' (of type double) is not a valid integer",
        ]
    );
}
