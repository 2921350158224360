use crate::TransactionDto;

use serde::Serialize;

/// List of transactions response
#[derive(Debug, Serialize)]
pub struct TransactionListResponse {
    pub transactions: Vec<TransactionDto>,
}
