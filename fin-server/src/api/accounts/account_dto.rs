use fin_core::Account;

use serde::Serialize;

/// Account DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct AccountDto {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub kind: String,
    pub balance: f64,
}

impl From<Account> for AccountDto {
    fn from(a: Account) -> Self {
        Self {
            id: a.id,
            user_id: a.user_id,
            name: a.name,
            kind: a.kind.as_str().to_string(),
            balance: a.balance,
        }
    }
}
