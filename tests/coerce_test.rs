use costcheck::coerce::{RawValue, loose_sum, to_number};
use serde_json::json;

#[test]
fn empty_and_absent_values_are_zero() {
    assert_eq!(to_number(&RawValue::Null), 0.0);
    assert_eq!(to_number(&RawValue::Undefined), 0.0);
    assert_eq!(to_number(""), 0.0);
}

#[test]
fn numbers_pass_through_and_numeric_text_parses() {
    assert_eq!(to_number(&60000.0), 60000.0);
    assert_eq!(to_number(&60000), 60000.0);
    assert_eq!(to_number("60000"), 60000.0);
    assert_eq!(to_number(&"60000".to_string()), 60000.0);
}

#[test]
fn unparseable_text_is_zero() {
    assert_eq!(to_number("abc"), 0.0);
}

#[test]
fn coercion_is_idempotent() {
    for input in [
        RawValue::Number(42.5),
        RawValue::Text("  17 ".into()),
        RawValue::Text("oops".into()),
        RawValue::Null,
        RawValue::Number(f64::NAN),
    ] {
        let once = to_number(&input);
        assert_eq!(to_number(&once), once);
    }
}

#[test]
fn json_form_payload_values() {
    let payload = json!({
        "food_cost": "60000",
        "labor_cost": 50000,
        "rent_cost": null,
        "marketing_cost": "",
        "utility_cost": true
    });
    assert_eq!(to_number(&payload["food_cost"]), 60000.0);
    assert_eq!(to_number(&payload["labor_cost"]), 50000.0);
    assert_eq!(to_number(&payload["rent_cost"]), 0.0);
    assert_eq!(to_number(&payload["marketing_cost"]), 0.0);
    assert_eq!(to_number(&payload["utility_cost"]), 0.0);
    // Missing keys index to null
    assert_eq!(to_number(&payload["missing"]), 0.0);
}

#[test]
fn loose_sum_over_text_concatenates() {
    let out = loose_sum(["60000", "50000", "30000", "10000", "8000"]);
    assert_eq!(out, RawValue::Text("600005000030000100008000".into()));
    assert_eq!(out.type_tag(), "string");

    let out = loose_sum([60000.0, 50000.0, 30000.0, 10000.0, 8000.0]);
    assert_eq!(out, RawValue::Number(158000.0));
    assert_eq!(out.type_tag(), "number");
}

#[test]
fn type_tags() {
    assert_eq!(RawValue::Undefined.type_tag(), "undefined");
    assert_eq!(RawValue::Null.type_tag(), "object");
    assert_eq!(RawValue::Bool(true).type_tag(), "boolean");
}

#[test]
fn infinity_passes_through_nan_does_not() {
    assert_eq!(to_number(&f64::INFINITY), f64::INFINITY);
    assert_eq!(to_number(&to_number(&f64::INFINITY)), f64::INFINITY);
    assert_eq!(to_number("1e400"), f64::INFINITY);
    assert_eq!(to_number(&f64::NAN), 0.0);
    assert_eq!(to_number("NaN"), 0.0);
}

#[test]
fn display_matches_concatenation_text() {
    assert_eq!(RawValue::Number(1e-7).display(), "1e-7");
    assert_eq!(RawValue::Number(1e21).display(), "1e+21");
    assert_eq!(RawValue::Number(8000.0).display(), "8000");
}
