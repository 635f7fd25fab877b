//! Unit tests for `ResultT<T, E>`.
//!
//! `ResultT` represents a computation that may fail:
//! - `Ok(T)`: Contains a success value of type T
//! - `Err(E)`: Contains an error value of type E

use nullshield::container::{OptionT, ResultT};
use rstest::rstest;
use std::cell::Cell;
use std::rc::Rc;

// =============================================================================
// Channel Extraction
// =============================================================================

#[rstest]
fn ok_map_identity_then_get_ok() {
    let value: ResultT<i32, String> = ResultT::ok(1);
    assert_eq!(value.map(|v| v).get_ok().unwrap(), 1);
}

#[rstest]
fn ok_has_no_error_channel() {
    let value: ResultT<i32, String> = ResultT::ok(1);
    assert!(value.get_err().is_absent());
}

#[rstest]
fn err_exposes_error_channel() {
    let value: ResultT<i32, &str> = ResultT::err("e");
    assert_eq!(value.get_err(), OptionT::present("e"));
    assert_eq!(value.get_ok(), OptionT::absent());
}

// =============================================================================
// Value Extraction
// =============================================================================

#[rstest]
fn err_unwrap_or_returns_fallback() {
    let value: ResultT<i32, &str> = ResultT::err("e");
    assert_eq!(value.unwrap_or(9), 9);
}

#[rstest]
fn err_expect_err_returns_error() {
    let value: ResultT<i32, &str> = ResultT::err("e");
    assert_eq!(value.expect_err("msg"), "e");
}

#[rstest]
#[should_panic(expected = "database unavailable")]
fn expect_on_err_panics_with_message() {
    let value: ResultT<i32, &str> = ResultT::err("e");
    value.expect("database unavailable");
}

#[rstest]
#[should_panic(expected = "on an `Err` value")]
fn unwrap_on_err_panics() {
    let value: ResultT<i32, &str> = ResultT::err("e");
    value.unwrap();
}

#[rstest]
fn try_unwrap_err_on_ok_reports_default_message() {
    let value: ResultT<i32, &str> = ResultT::ok(1);
    let error = value.try_unwrap_err().unwrap_err();
    assert_eq!(error.message(), "called `ResultT::unwrap_err()` on an `Ok` value");
}

#[rstest]
fn try_expect_on_ok_returns_value() {
    let value: ResultT<i32, &str> = ResultT::ok(1);
    assert_eq!(value.try_expect("unused"), Ok(1));
}

#[rstest]
fn unwrap_or_else_receives_error_and_runs_once() {
    let calls = Cell::new(0);
    let value: ResultT<usize, &str> = ResultT::err("four");
    let recovered = value.unwrap_or_else(|error| {
        calls.set(calls.get() + 1);
        error.len()
    });
    assert_eq!(recovered, 4);
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn unwrap_or_else_skipped_for_ok() {
    let calls = Cell::new(0);
    let value: ResultT<usize, &str> = ResultT::ok(1);
    let recovered = value.unwrap_or_else(|_| {
        calls.set(calls.get() + 1);
        0
    });
    assert_eq!(recovered, 1);
    assert_eq!(calls.get(), 0);
}

// =============================================================================
// Mapping and Sequencing
// =============================================================================

#[rstest]
fn ok_flat_map_then_unwrap() {
    let value: ResultT<i32, String> = ResultT::ok(1);
    assert_eq!(value.flat_map(|x| ResultT::ok(x * 2)).unwrap(), 2);
}

#[rstest]
fn flat_map_short_circuits_on_err() {
    let calls = Cell::new(0);
    let value: ResultT<i32, &str> = ResultT::err("boom");
    let result = value.flat_map(|x| {
        calls.set(calls.get() + 1);
        ResultT::ok(x + 1)
    });
    assert_eq!(result, ResultT::err("boom"));
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn map_err_leaves_ok_untouched() {
    let value: ResultT<i32, &str> = ResultT::ok(3);
    assert_eq!(value.map_err(str::len), ResultT::ok(3));
}

#[rstest]
#[case(ResultT::ok(5), 10)]
#[case(ResultT::err("bad"), -3)]
fn map_or_else_selects_one_branch(#[case] value: ResultT<i32, &str>, #[case] expected: i32) {
    let negative_length = |error: &str| -i32::try_from(error.len()).unwrap_or(0);
    assert_eq!(value.map_or_else(negative_length, |x| x * 2), expected);
}

#[rstest]
#[case(ResultT::ok(5), 6)]
#[case(ResultT::err("bad"), 0)]
fn map_or_collapses(#[case] value: ResultT<i32, &str>, #[case] expected: i32) {
    assert_eq!(value.map_or(0, |x| x + 1), expected);
}

#[rstest]
fn or_else_recovers_from_err() {
    let value: ResultT<i32, &str> = ResultT::err("missing");
    let recovered: ResultT<i32, String> = value.or_else(|_| ResultT::ok(0));
    assert_eq!(recovered, ResultT::ok(0));
}

#[rstest]
fn or_else_is_not_called_for_ok() {
    let calls = Cell::new(0);
    let value: ResultT<i32, &str> = ResultT::ok(1);
    let result: ResultT<i32, &str> = value.or_else(|error| {
        calls.set(calls.get() + 1);
        ResultT::err(error)
    });
    assert_eq!(result, ResultT::ok(1));
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn and_and_or_choose_by_variant() {
    let ok: ResultT<i32, &str> = ResultT::ok(1);
    let err: ResultT<i32, &str> = ResultT::err("first");

    assert_eq!(ok.and(ResultT::<&str, &str>::ok("next")), ResultT::ok("next"));
    assert_eq!(err.and(ResultT::<&str, &str>::ok("next")), ResultT::err("first"));
    assert_eq!(ok.or(ResultT::<i32, &str>::err("second")), ResultT::ok(1));
    assert_eq!(err.or(ResultT::<i32, &str>::err("second")), ResultT::err("second"));
}

#[rstest]
fn ap_applies_wrapped_function() {
    let value: ResultT<i32, &str> = ResultT::ok(20);
    assert_eq!(value.ap(ResultT::ok(|x: i32| x + 1)), ResultT::ok(21));
}

#[rstest]
fn ap_reports_value_error_before_function_error() {
    let value: ResultT<i32, &str> = ResultT::err("value");
    let function: ResultT<fn(i32) -> i32, &str> = ResultT::err("function");
    assert_eq!(value.ap(function), ResultT::err("value"));
}

#[rstest]
fn ap_reports_function_error_when_value_is_ok() {
    let value: ResultT<i32, &str> = ResultT::ok(1);
    let function: ResultT<fn(i32) -> i32, &str> = ResultT::err("function");
    assert_eq!(value.ap(function), ResultT::err("function"));
}

// =============================================================================
// Case Analysis and Queries
// =============================================================================

#[rstest]
#[case(ResultT::ok(2), "ok:2")]
#[case(ResultT::err("nope"), "err:nope")]
fn match_with_is_exhaustive(#[case] value: ResultT<i32, &str>, #[case] expected: &str) {
    let rendered = value.match_with(|v| format!("ok:{v}"), |e| format!("err:{e}"));
    assert_eq!(rendered, expected);
}

#[rstest]
#[case(ResultT::ok(4), true)]
#[case(ResultT::ok(5), false)]
#[case(ResultT::err(4), false)]
fn has_value_requires_ok_variant(#[case] value: ResultT<i32, i32>, #[case] expected: bool) {
    assert_eq!(value.has_value(&4), expected);
}

#[rstest]
fn contains_tests_ok_payload_only() {
    let ok: ResultT<i32, i32> = ResultT::ok(4);
    let err: ResultT<i32, i32> = ResultT::err(4);
    assert!(ok.contains(|v| v % 2 == 0));
    assert!(!err.contains(|v| v % 2 == 0));
}

#[rstest]
fn equals_distinguishes_variants_with_equal_payloads() {
    let ok: ResultT<i32, i32> = ResultT::ok(1);
    let err: ResultT<i32, i32> = ResultT::err(1);
    assert!(ok.equals(&ResultT::ok(1)));
    assert!(!ok.equals(&err));
}

#[rstest]
fn equals_compares_nested_payloads_deeply() {
    let left: ResultT<Vec<String>, ()> = ResultT::ok(vec!["a".to_string(), "b".to_string()]);
    let right: ResultT<Vec<String>, ()> = ResultT::ok(vec!["a".to_string(), "b".to_string()]);
    assert!(left.equals(&right));
}

// =============================================================================
// Clone and Display
// =============================================================================

#[rstest]
fn clone_is_shallow_for_shared_payloads() {
    let shared = Rc::new(vec![1, 2, 3]);
    let original: ResultT<Rc<Vec<i32>>, ()> = ResultT::ok(Rc::clone(&shared));
    let copy = original.clone();

    assert_eq!(Rc::strong_count(&shared), 3);
    assert!(Rc::ptr_eq(&original.unwrap(), &copy.unwrap()));
}

#[rstest]
#[case(ResultT::ok(1), "Ok( 1 )")]
#[case(ResultT::err(2), "Err( 2 )")]
fn display_renders_variant_and_payload(#[case] value: ResultT<i32, i32>, #[case] expected: &str) {
    assert_eq!(value.to_string(), expected);
}

#[rstest]
fn question_mark_works_after_into_result() {
    fn parse(text: &str) -> Result<i32, String> {
        let parsed: ResultT<i32, String> =
            ResultT::from(text.parse::<i32>()).map_err(|error| error.to_string());
        let value = parsed.into_result()?;
        Ok(value + 1)
    }

    assert_eq!(parse("41"), Ok(42));
    assert!(parse("forty-one").is_err());
}
