//! Integration tests for the account repository and the generic owned-row
//! access layer behind it.

mod common;

use crate::common::fixtures::{insert_account, insert_user};
use crate::common::test_db::create_test_pool;

use fin_core::AccountKind;
use fin_db::AccountRepository;

#[tokio::test]
async fn test_create_sets_owner_and_returns_row() {
    let pool = create_test_pool().await;
    let user_id = insert_user(&pool, "a@test.local").await;

    let account =
        AccountRepository::create(&pool, user_id, "Wallet", AccountKind::Digital, 50.0)
            .await
            .unwrap();

    assert_eq!(account.user_id, user_id);
    assert_eq!(account.name, "Wallet");
    assert_eq!(account.kind, AccountKind::Digital);
    assert_eq!(account.balance, 50.0);
    assert!(account.id > 0);
}

#[tokio::test]
async fn test_find_by_id_returns_own_row() {
    let pool = create_test_pool().await;
    let user_id = insert_user(&pool, "a@test.local").await;
    let account_id = insert_account(&pool, user_id, "Checking").await;

    let found = AccountRepository::find_by_id(&pool, account_id, user_id)
        .await
        .unwrap();

    assert_eq!(found.unwrap().name, "Checking");
}

#[tokio::test]
async fn test_find_by_id_hides_foreign_row() {
    let pool = create_test_pool().await;
    let owner = insert_user(&pool, "a@test.local").await;
    let other = insert_user(&pool, "b@test.local").await;
    let account_id = insert_account(&pool, owner, "Checking").await;

    let found = AccountRepository::find_by_id(&pool, account_id, other)
        .await
        .unwrap();

    assert!(found.is_none());
}

#[tokio::test]
async fn test_list_is_scoped_and_paginated() {
    let pool = create_test_pool().await;
    let owner = insert_user(&pool, "a@test.local").await;
    let other = insert_user(&pool, "b@test.local").await;
    for name in ["One", "Two", "Three"] {
        insert_account(&pool, owner, name).await;
    }
    insert_account(&pool, other, "Foreign").await;

    let all = AccountRepository::list(&pool, owner, 0, 100).await.unwrap();
    assert_eq!(all.len(), 3);
    assert!(all.iter().all(|a| a.user_id == owner));

    let page = AccountRepository::list(&pool, owner, 1, 1).await.unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].name, "Two");
}

#[tokio::test]
async fn test_find_by_name_is_scoped_to_user() {
    let pool = create_test_pool().await;
    let owner = insert_user(&pool, "a@test.local").await;
    let other = insert_user(&pool, "b@test.local").await;
    insert_account(&pool, owner, "Wallet").await;

    let own = AccountRepository::find_by_name(&pool, owner, "Wallet")
        .await
        .unwrap();
    let foreign = AccountRepository::find_by_name(&pool, other, "Wallet")
        .await
        .unwrap();

    assert!(own.is_some());
    assert!(foreign.is_none());
}

#[tokio::test]
async fn test_update_changes_only_mutable_fields() {
    let pool = create_test_pool().await;
    let user_id = insert_user(&pool, "a@test.local").await;
    let account_id = insert_account(&pool, user_id, "Checking").await;

    let mut account = AccountRepository::find_by_id(&pool, account_id, user_id)
        .await
        .unwrap()
        .unwrap();
    account.name = "Renamed".to_string();
    account.kind = AccountKind::Savings;
    AccountRepository::update(&pool, &account).await.unwrap();

    let reloaded = AccountRepository::find_by_id(&pool, account_id, user_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.name, "Renamed");
    assert_eq!(reloaded.kind, AccountKind::Savings);
    assert_eq!(reloaded.balance, 100.0);
}

#[tokio::test]
async fn test_delete_respects_ownership() {
    let pool = create_test_pool().await;
    let owner = insert_user(&pool, "a@test.local").await;
    let other = insert_user(&pool, "b@test.local").await;
    let account_id = insert_account(&pool, owner, "Checking").await;

    let removed = AccountRepository::delete(&pool, account_id, other)
        .await
        .unwrap();
    assert!(!removed);

    let removed = AccountRepository::delete(&pool, account_id, owner)
        .await
        .unwrap();
    assert!(removed);

    let found = AccountRepository::find_by_id(&pool, account_id, owner)
        .await
        .unwrap();
    assert!(found.is_none());
}
