//! Unit tests for the shared error type

use codechunk_domain::Error;
use rstest::*;

#[rstest]
#[case::not_found(Error::not_found("user"), "NotFound", "user")]
#[case::invalid_argument(Error::invalid_argument("bad input"), "InvalidArgument", "bad input")]
#[case::io(Error::io("file missing"), "Io", "file missing")]
#[case::config(Error::config("missing key"), "Config", "missing key")]
#[case::internal(Error::internal("assembly failed"), "Internal", "assembly failed")]
fn test_error_variants(
    #[case] error: Error,
    #[case] expected_variant: &str,
    #[case] expected_message: &str,
) {
    let debug_str = format!("{error:?}");
    assert!(
        debug_str.contains(expected_variant),
        "Expected variant {expected_variant} in {debug_str:?}",
    );

    let display_str = format!("{error}");
    assert!(
        display_str.contains(expected_message) || debug_str.contains(expected_message),
        "Expected message '{expected_message}' in error",
    );
}

#[test]
fn error_config_missing_carries_key() {
    let error = Error::config_missing("max_chars");
    assert!(format!("{error}").contains("max_chars"));
}

#[test]
fn error_config_invalid_carries_key_and_reason() {
    let error = Error::config_invalid("coalesce", "must be less than max_chars");
    let display_str = format!("{error}");
    assert!(display_str.contains("coalesce"));
    assert!(display_str.contains("must be less than max_chars"));
}

#[test]
fn error_generic_carries_message() {
    let error = Error::generic("something went wrong");
    assert!(format!("{error}").contains("something went wrong"));
}

#[test]
fn test_error_equality_discrimination() {
    let not_found = Error::not_found("resource");
    let invalid_arg = Error::invalid_argument("bad argument");

    assert!(matches!(not_found, Error::NotFound { .. }));
    assert!(matches!(invalid_arg, Error::InvalidArgument { .. }));
    assert!(!matches!(not_found, Error::InvalidArgument { .. }));
}
