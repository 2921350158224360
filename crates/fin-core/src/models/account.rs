//! Account entity - a place money lives (bank account, wallet, card).

use crate::AccountKind;

use serde::{Deserialize, Serialize};

/// An account belongs to exactly one user; its name is unique within
/// that user's accounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub kind: AccountKind,
    /// Set from the initial balance at creation; not updatable through
    /// the account endpoints.
    pub balance: f64,
}
