pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

pub use api::{
    accounts::{
        account_dto::AccountDto,
        account_list_response::AccountListResponse,
        account_response::AccountResponse,
        accounts::{create_account, delete_account, get_account, list_accounts, update_account},
        create_account_request::CreateAccountRequest,
        update_account_request::UpdateAccountRequest,
    },
    auth::{auth::login, login_request::LoginRequest, token_response::TokenResponse},
    categories::{
        categories::{
            create_category, delete_category, get_category, list_categories, update_category,
        },
        category_dto::CategoryDto,
        category_list_response::CategoryListResponse,
        category_response::CategoryResponse,
        create_category_request::CreateCategoryRequest,
        update_category_request::UpdateCategoryRequest,
    },
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::current_user::CurrentUser,
    list_query::ListQuery,
    transactions::{
        create_transaction_request::CreateTransactionRequest,
        transaction_dto::TransactionDto,
        transaction_list_response::TransactionListResponse,
        transaction_response::TransactionResponse,
        transactions::{
            create_transaction, delete_transaction, get_transaction, list_transactions,
            update_transaction,
        },
        update_transaction_request::UpdateTransactionRequest,
    },
    users::{
        create_user_request::CreateUserRequest,
        user_dto::UserDto,
        user_response::UserResponse,
        users::{create_user, get_current_user},
    },
};

pub use crate::app_state::AppState;
pub use crate::routes::build_router;
