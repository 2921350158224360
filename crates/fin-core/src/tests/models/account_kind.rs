use crate::{AccountKind, CoreError};

use std::str::FromStr;

#[test]
fn given_known_kind_when_parsed_then_round_trips() {
    for value in ["checking", "savings", "investment", "digital", "wallet"] {
        let kind = AccountKind::from_str(value).unwrap();
        assert_eq!(kind.as_str(), value);
    }
}

#[test]
fn given_unknown_kind_when_parsed_then_returns_error() {
    let result = AccountKind::from_str("offshore");

    assert!(matches!(
        result,
        Err(CoreError::InvalidAccountKind { ref value, .. }) if value == "offshore"
    ));
}

#[test]
fn given_uppercase_kind_when_parsed_then_returns_error() {
    // Callers are expected to lowercase before parsing.
    assert!(AccountKind::from_str("Checking").is_err());
}
