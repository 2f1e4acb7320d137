//! Table-driven tests for the calculator.
//!
//! Each case is a JSON request and the expected answer, with `None` standing
//! for the null sentinel returned on invalid input.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]
#![expect(
    clippy::float_cmp,
    reason = "the tabulated results are exactly representable"
)]

use rstest::rstest;
use serde_json::json;
use simple_calculator::{Action, CalculatorRequest, simple_calculator};

#[rstest]
#[case(r#"{"a": 2, "b": 3, "action": "+"}"#, Some(5.0))]
#[case(r#"{"a": 5, "b": 3, "action": "-"}"#, Some(2.0))]
#[case(r#"{"a": 2, "b": 3, "action": "*"}"#, Some(6.0))]
#[case(r#"{"a": 6, "b": 3, "action": "/"}"#, Some(2.0))]
#[case(r#"{"a": 2, "b": 3, "action": "^"}"#, Some(8.0))]
#[case(r#"{"a": 2, "b": 3, "action": "invalid"}"#, None)]
#[case(r#"{"a": 2, "b": "3", "action": "+"}"#, None)]
#[case(r#"{"a": "2", "b": 3, "action": "+"}"#, None)]
#[case(r#"{"a": null, "b": 3, "action": "*"}"#, None)]
#[case(r#"{"a": 2, "b": 3, "action": null}"#, None)]
#[case(r#"{"a": -4.5, "b": 1.5, "action": "+"}"#, Some(-3.0))]
#[case(r#"{"a": 2, "b": -1, "action": "^"}"#, Some(0.5))]
fn evaluates_json_requests(#[case] json: &str, #[case] expected: Option<f64>) {
    let request = CalculatorRequest::from_json(json).expect("structurally valid request");
    assert_eq!(simple_calculator(&request), expected);
}

#[rstest]
#[case(Action::Add, 7.0)]
#[case(Action::Subtract, 3.0)]
#[case(Action::Multiply, 10.0)]
#[case(Action::Divide, 2.5)]
#[case(Action::Exponentiate, 25.0)]
fn typed_requests_match_action_apply(#[case] action: Action, #[case] expected: f64) {
    let request = CalculatorRequest::new(5.0, 2.0, action);
    assert_eq!(simple_calculator(&request), Some(expected));
    assert_eq!(action.apply(5.0, 2.0), expected);
}

#[rstest]
#[case::infinite_sum(f64::INFINITY, 1.0, Action::Add, f64::INFINITY)]
#[case::negative_infinity(f64::NEG_INFINITY, 2.0, Action::Multiply, f64::NEG_INFINITY)]
#[case::infinite_divisor(1.0, f64::INFINITY, Action::Divide, 0.0)]
#[case::infinite_exponent(2.0, f64::INFINITY, Action::Exponentiate, f64::INFINITY)]
fn non_finite_operands_are_numeric(
    #[case] a: f64,
    #[case] b: f64,
    #[case] action: Action,
    #[case] expected: f64,
) {
    let request = CalculatorRequest::new(a, b, action);
    assert_eq!(simple_calculator(&request), Some(expected));
}

#[rstest]
#[case(Action::Add)]
#[case(Action::Subtract)]
#[case(Action::Multiply)]
#[case(Action::Divide)]
#[case(Action::Exponentiate)]
fn nan_operand_yields_nan(#[case] action: Action) {
    let request = CalculatorRequest::new(f64::NAN, 3.0, action);
    let result = simple_calculator(&request).expect("NaN is numeric");
    assert!(result.is_nan(), "{action} should propagate NaN");
}

#[test]
fn negative_zero_keeps_its_sign() {
    let request = CalculatorRequest::new(-0.0, 5.0, Action::Multiply);
    let product = simple_calculator(&request).expect("numeric result");
    assert!(product.is_sign_negative());

    let request = CalculatorRequest::new(1.0, -0.0, Action::Divide);
    assert_eq!(simple_calculator(&request), Some(f64::NEG_INFINITY));
}

#[rstest]
#[case::above_f64_precision(r#"{"a": 9007199254740993, "b": 0, "action": "+"}"#, 9_007_199_254_740_992.0)]
#[case::u64_max(r#"{"a": 18446744073709551615, "b": 1, "action": "*"}"#, 18_446_744_073_709_551_616.0)]
#[case::i64_min(r#"{"a": -9223372036854775808, "b": 1, "action": "*"}"#, -9_223_372_036_854_775_808.0)]
fn large_json_integers_round_to_nearest_f64(#[case] json: &str, #[case] expected: f64) {
    let request = CalculatorRequest::from_json(json).expect("structurally valid request");
    assert_eq!(simple_calculator(&request), Some(expected));
}

#[test]
fn every_action_is_accepted() {
    for action in Action::ALL {
        let request = CalculatorRequest::from_values(json!(4), json!(2), json!(action));
        assert!(
            simple_calculator(&request).is_some(),
            "action {action} should be accepted"
        );
    }
}
