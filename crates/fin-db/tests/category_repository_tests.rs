mod common;

use crate::common::fixtures::{insert_category, insert_user};
use crate::common::test_db::create_test_pool;

use fin_core::CategoryKind;
use fin_db::CategoryRepository;

#[tokio::test]
async fn test_create_sets_owner_and_returns_row() {
    let pool = create_test_pool().await;
    let user_id = insert_user(&pool, "a@test.local").await;

    let category = CategoryRepository::create(&pool, user_id, "Groceries", CategoryKind::Expense)
        .await
        .unwrap();

    assert_eq!(category.user_id, user_id);
    assert_eq!(category.name, "Groceries");
    assert_eq!(category.kind, CategoryKind::Expense);
    assert!(category.id > 0);
}

#[tokio::test]
async fn test_find_by_id_hides_foreign_row() {
    let pool = create_test_pool().await;
    let owner = insert_user(&pool, "a@test.local").await;
    let other = insert_user(&pool, "b@test.local").await;
    let category_id = insert_category(&pool, owner, "Groceries", "expense").await;

    let own = CategoryRepository::find_by_id(&pool, category_id, owner)
        .await
        .unwrap();
    let foreign = CategoryRepository::find_by_id(&pool, category_id, other)
        .await
        .unwrap();

    assert_eq!(own.unwrap().name, "Groceries");
    assert!(foreign.is_none());
}

#[tokio::test]
async fn test_find_by_name_is_scoped_to_user() {
    let pool = create_test_pool().await;
    let owner = insert_user(&pool, "a@test.local").await;
    let other = insert_user(&pool, "b@test.local").await;
    insert_category(&pool, owner, "Groceries", "expense").await;

    let own = CategoryRepository::find_by_name(&pool, owner, "Groceries")
        .await
        .unwrap();
    let foreign = CategoryRepository::find_by_name(&pool, other, "Groceries")
        .await
        .unwrap();

    assert!(own.is_some());
    assert!(foreign.is_none());
}

#[tokio::test]
async fn test_list_is_scoped_and_paginated() {
    let pool = create_test_pool().await;
    let owner = insert_user(&pool, "a@test.local").await;
    let other = insert_user(&pool, "b@test.local").await;
    for name in ["Groceries", "Rent", "Salary"] {
        insert_category(&pool, owner, name, "expense").await;
    }
    insert_category(&pool, other, "Foreign", "income").await;

    let all = CategoryRepository::list(&pool, owner, 0, 100).await.unwrap();
    assert_eq!(all.len(), 3);
    assert!(all.iter().all(|c| c.user_id == owner));

    let page = CategoryRepository::list(&pool, owner, 1, 1).await.unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].name, "Rent");
}

#[tokio::test]
async fn test_update_persists_new_values() {
    let pool = create_test_pool().await;
    let user_id = insert_user(&pool, "a@test.local").await;
    let category_id = insert_category(&pool, user_id, "Groceries", "expense").await;

    let mut category = CategoryRepository::find_by_id(&pool, category_id, user_id)
        .await
        .unwrap()
        .unwrap();
    category.name = "Food".to_string();
    category.kind = CategoryKind::Income;
    CategoryRepository::update(&pool, &category).await.unwrap();

    let reloaded = CategoryRepository::find_by_id(&pool, category_id, user_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.name, "Food");
    assert_eq!(reloaded.kind, CategoryKind::Income);
}

#[tokio::test]
async fn test_delete_respects_ownership() {
    let pool = create_test_pool().await;
    let owner = insert_user(&pool, "a@test.local").await;
    let other = insert_user(&pool, "b@test.local").await;
    let category_id = insert_category(&pool, owner, "Groceries", "expense").await;

    let removed = CategoryRepository::delete(&pool, category_id, other)
        .await
        .unwrap();
    assert!(!removed);

    let removed = CategoryRepository::delete(&pool, category_id, owner)
        .await
        .unwrap();
    assert!(removed);
}
