//! Unit tests for the `Optional<T>` type.
//!
//! `Optional` represents a value that is either:
//! - `Present(T)`: a value is held
//! - `Absent`: nothing is held

use std::cell::Cell;

use optfield::error::OptionalError;
use optfield::optional::Optional;
use rstest::rstest;

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn optional_present_is_present() {
    let value = Optional::present(42);
    assert!(value.is_present());
    assert!(!value.is_absent());
}

#[rstest]
fn optional_absent_is_absent() {
    let value: Optional<i32> = Optional::absent();
    assert!(value.is_absent());
    assert!(!value.is_present());
}

#[rstest]
fn optional_try_present_accepts_value() {
    assert_eq!(Optional::try_present(Some("x")), Ok(Optional::present("x")));
}

#[rstest]
fn optional_try_present_rejects_none() {
    let result = Optional::<&str>::try_present(None);
    assert!(matches!(
        result,
        Err(OptionalError::InvalidArgument { .. })
    ));
}

#[rstest]
fn optional_from_option_round_trips() {
    let value: Optional<i32> = Some(5).into();
    let back: Option<i32> = value.into();
    assert_eq!(back, Some(5));
}

// =============================================================================
// Side effects
// =============================================================================

#[rstest]
fn optional_if_present_invokes_consumer_once() {
    let mut received = Vec::new();
    Optional::present("value").if_present(|value| received.push(value));
    assert_eq!(received, vec!["value"]);
}

#[rstest]
fn optional_if_present_skips_absent() {
    Optional::<i32>::absent().if_present(|_| panic!("Should not be here"));
}

#[rstest]
#[case(Optional::present(1), "present")]
#[case(Optional::absent(), "absent")]
fn optional_if_present_or_else_picks_branch(
    #[case] value: Optional<i32>,
    #[case] expected: &str,
) {
    let branch = Cell::new("");
    value.if_present_or_else(|_| branch.set("present"), || branch.set("absent"));
    assert_eq!(branch.get(), expected);
}

// =============================================================================
// Transformation
// =============================================================================

#[rstest]
fn optional_map_absent_stays_absent() {
    let value: Optional<i32> = Optional::absent();
    assert_eq!(value.map(|n| n.to_string()), Optional::absent());
}

#[rstest]
fn optional_flat_map_chains_across_links() {
    let result = Optional::present("42")
        .flat_map(|s| Optional::of_nullable(s.parse::<i32>().ok()))
        .flat_map(|n| if n > 0 { Optional::present(n * 2) } else { Optional::absent() });
    assert_eq!(result, Optional::present(84));
}

#[rstest]
fn optional_flat_map_does_not_call_function_when_absent() {
    let result = Optional::<i32>::absent().flat_map(|_| -> Optional<i32> {
        panic!("Should not be here")
    });
    assert!(result.is_absent());
}

#[rstest]
#[case(Optional::present(4), Optional::present(4))]
#[case(Optional::present(3), Optional::absent())]
#[case(Optional::absent(), Optional::absent())]
fn optional_filter_keeps_matching(#[case] value: Optional<i32>, #[case] expected: Optional<i32>) {
    assert_eq!(value.filter(|n| n % 2 == 0), expected);
}

#[rstest]
fn optional_fallbacks() {
    let absent: Optional<i32> = Optional::absent();
    assert_eq!(absent.or(Optional::present(1)), Optional::present(1));
    assert_eq!(Optional::present(2).or(Optional::present(1)), Optional::present(2));
    assert_eq!(absent.or_else_get(|| Optional::present(3)), Optional::present(3));
    assert_eq!(absent.or_else(7), 7);
    assert_eq!(absent.or_else_with(|| 8), 8);
    assert_eq!(Optional::present(9).or_else(0), 9);
}

// =============================================================================
// Extraction
// =============================================================================

#[rstest]
fn optional_get_absent_is_no_such_element() {
    let value: Optional<String> = Optional::absent();
    assert_eq!(value.get(), Err(OptionalError::NoSuchElement));
    assert_eq!(value.into_result(), Err(OptionalError::NoSuchElement));
}

#[rstest]
fn optional_ok_or_else_present() {
    let value = Optional::present(1);
    assert_eq!(value.ok_or_else(|| "missing"), Ok(1));
}

#[rstest]
fn optional_cloned_from_reference() {
    let text = String::from("abc");
    let borrowed = Optional::present(&text);
    assert_eq!(borrowed.cloned(), Optional::present(String::from("abc")));
}

// =============================================================================
// Display
// =============================================================================

#[rstest]
#[case(Optional::absent(), "Optional.empty")]
#[case(Optional::present(""), "Optional[]")]
#[case(Optional::present("foo@bar.com"), "Optional[foo@bar.com]")]
fn optional_display(#[case] value: Optional<&str>, #[case] expected: &str) {
    assert_eq!(format!("{value}"), expected);
}

#[rstest]
fn optional_display_uses_value_display() {
    assert_eq!(Optional::present(3.5).to_string(), "Optional[3.5]");
}
