pub mod error;
pub mod models;

pub use error::error_location::ErrorLocation;
pub use error::{CoreError, Result};
pub use models::account::Account;
pub use models::account_kind::AccountKind;
pub use models::category::Category;
pub use models::category_kind::CategoryKind;
pub use models::transaction::Transaction;
pub use models::transaction_kind::TransactionKind;
pub use models::user::User;

#[cfg(test)]
mod tests;
