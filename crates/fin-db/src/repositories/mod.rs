pub mod account_repository;
pub mod category_repository;
pub mod transaction_repository;
pub mod user_repository;
