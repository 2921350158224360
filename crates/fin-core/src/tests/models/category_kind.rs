use crate::{CategoryKind, CoreError};

use std::str::FromStr;

#[test]
fn given_known_kind_when_parsed_then_round_trips() {
    assert_eq!(CategoryKind::from_str("income").unwrap(), CategoryKind::Income);
    assert_eq!(
        CategoryKind::from_str("expense").unwrap(),
        CategoryKind::Expense
    );
}

#[test]
fn given_unknown_kind_when_parsed_then_returns_error() {
    let result = CategoryKind::from_str("transfer");

    assert!(matches!(
        result,
        Err(CoreError::InvalidCategoryKind { ref value, .. }) if value == "transfer"
    ));
}
