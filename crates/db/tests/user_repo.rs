mod common;

use docket_core::types::RecordId;
use docket_db::models::user::CreateUser;
use docket_db::repositories::UserRepo;

fn new_user(email: &str) -> CreateUser {
    CreateUser {
        name: "Test User".to_string(),
        email: email.to_string(),
        password_hash: "$argon2id$fake-hash-for-tests".to_string(),
        is_admin: false,
    }
}

#[tokio::test]
async fn test_create_then_find_by_id() {
    let pool = common::test_pool().await;

    let created = UserRepo::create(&pool, &new_user("alice@example.com"))
        .await
        .expect("create should succeed");
    assert_eq!(created.email, "alice@example.com");
    assert!(!created.is_admin);

    let found = UserRepo::find_by_id(&pool, created.id)
        .await
        .expect("find should succeed")
        .expect("created user should be found");
    assert_eq!(found.id, created.id);
    assert_eq!(found.password_hash, created.password_hash);
}

#[tokio::test]
async fn test_find_by_email_matches_exactly() {
    let pool = common::test_pool().await;

    UserRepo::create(&pool, &new_user("bob@example.com"))
        .await
        .expect("create should succeed");

    let found = UserRepo::find_by_email(&pool, "bob@example.com")
        .await
        .expect("find should succeed");
    assert!(found.is_some());

    let missing = UserRepo::find_by_email(&pool, "carol@example.com")
        .await
        .expect("find should succeed");
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_find_unknown_id_returns_none() {
    let pool = common::test_pool().await;

    let found = UserRepo::find_by_id(&pool, RecordId::new_v4())
        .await
        .expect("find should succeed");
    assert!(found.is_none());
}

#[tokio::test]
async fn test_duplicate_email_violates_unique_index() {
    let pool = common::test_pool().await;

    UserRepo::create(&pool, &new_user("dave@example.com"))
        .await
        .expect("first create should succeed");

    let err = UserRepo::create(&pool, &new_user("dave@example.com"))
        .await
        .expect_err("second create should hit the unique index");
    let db_err = err.as_database_error().expect("should be a database error");
    assert!(db_err.is_unique_violation());
}

#[tokio::test]
async fn test_admin_flag_round_trips() {
    let pool = common::test_pool().await;

    let created = UserRepo::create(
        &pool,
        &CreateUser {
            name: "Admin User".to_string(),
            email: "root@example.com".to_string(),
            password_hash: "$argon2id$fake-hash-for-tests".to_string(),
            is_admin: true,
        },
    )
    .await
    .expect("create should succeed");

    let found = UserRepo::find_by_id(&pool, created.id)
        .await
        .expect("find should succeed")
        .expect("created user should be found");
    assert!(found.is_admin);
}
