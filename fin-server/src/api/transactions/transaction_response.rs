use crate::TransactionDto;

use serde::Serialize;

/// Single transaction response
#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    pub transaction: TransactionDto,
}
