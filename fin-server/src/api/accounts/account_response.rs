use crate::AccountDto;

use serde::Serialize;

/// Single account response
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub account: AccountDto,
}
