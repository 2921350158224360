pub mod error;
pub mod owned;
pub mod repositories;

pub use error::{DbError, Result};
pub use owned::OwnedEntity;
pub use repositories::account_repository::AccountRepository;
pub use repositories::category_repository::CategoryRepository;
pub use repositories::transaction_repository::TransactionRepository;
pub use repositories::user_repository::UserRepository;
