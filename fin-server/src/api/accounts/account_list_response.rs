use crate::AccountDto;

use serde::Serialize;

/// List of accounts response
#[derive(Debug, Serialize)]
pub struct AccountListResponse {
    pub accounts: Vec<AccountDto>,
}
