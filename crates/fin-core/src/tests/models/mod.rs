mod account_kind;
mod category_kind;
