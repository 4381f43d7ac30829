//! Tests for SqliteUserRepository.

use crate::db::{
    Database, DbError, Group, GroupRepository, SqliteDatabase, User, UserRepository,
};

async fn setup_db() -> SqliteDatabase {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().await.expect("Migration should succeed");

    for group in ["admins", "users"] {
        db.groups()
            .create(&Group::empty(group))
            .await
            .expect("Group create should succeed");
    }

    db
}

fn bumbleywump(groups: &[&str]) -> User {
    User {
        user_id: "bc".to_string(),
        first_name: "Bumbleywump".to_string(),
        last_name: "Cucumberpatch".to_string(),
        groups: groups.iter().map(|g| g.to_string()).collect(),
    }
}

async fn membership_count(db: &SqliteDatabase, user_id: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM membership WHERE user_id = ?")
        .bind(user_id)
        .fetch_one(db.pool())
        .await
        .expect("Query should succeed")
}

#[tokio::test(flavor = "multi_thread")]
async fn create_user_with_group() {
    let db = setup_db().await;
    let user = bumbleywump(&["users"]);

    let created = db.users().create(&user).await.expect("Create should succeed");

    assert_eq!(created, user);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_user_with_many_groups_keeps_order() {
    let db = setup_db().await;
    let user = bumbleywump(&["users", "admins"]);

    let created = db.users().create(&user).await.expect("Create should succeed");

    assert_eq!(created.groups, vec!["users", "admins"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_user_without_group() {
    let db = setup_db().await;
    let user = bumbleywump(&[]);

    let created = db.users().create(&user).await.expect("Create should succeed");

    assert_eq!(created, user);
    assert!(created.groups.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn get_user_with_group() {
    let db = setup_db().await;
    let user = bumbleywump(&["admins"]);
    db.users().create(&user).await.unwrap();

    let retrieved = db.users().get("bc").await.expect("Get should succeed");

    assert_eq!(retrieved, Some(user));
}

#[tokio::test(flavor = "multi_thread")]
async fn get_user_not_exists() {
    let db = setup_db().await;

    let retrieved = db.users().get("bc").await.expect("Get should succeed");

    assert!(retrieved.is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn create_user_with_unknown_group_persists_nothing() {
    let db = setup_db().await;
    let user = bumbleywump(&["admins", "wookiees"]);

    let result = db.users().create(&user).await;

    assert!(
        matches!(result, Err(DbError::Constraint { .. })),
        "Expected constraint violation, got {result:?}"
    );
    assert!(db.users().get("bc").await.unwrap().is_none());
    assert_eq!(membership_count(&db, "bc").await, 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_duplicate_user_is_already_exists() {
    let db = setup_db().await;
    db.users().create(&bumbleywump(&["admins"])).await.unwrap();

    let mut imposter = bumbleywump(&[]);
    imposter.first_name = "Imposter".to_string();
    let result = db.users().create(&imposter).await;

    assert!(matches!(result, Err(DbError::AlreadyExists { .. })));
    let original = db.users().get("bc").await.unwrap().unwrap();
    assert_eq!(original, bumbleywump(&["admins"]));
}

#[tokio::test(flavor = "multi_thread")]
async fn update_user_replaces_fields_and_groups() {
    let db = setup_db().await;
    db.users().create(&bumbleywump(&["admins"])).await.unwrap();

    let replacement = User {
        user_id: "bc".to_string(),
        first_name: "Benedict".to_string(),
        last_name: "Cumberbatch".to_string(),
        groups: vec!["users".to_string()],
    };
    let updated = db
        .users()
        .update("bc", &replacement)
        .await
        .expect("Update should succeed");

    assert_eq!(updated, replacement);
    assert_eq!(db.users().get("bc").await.unwrap(), Some(replacement));
}

#[tokio::test(flavor = "multi_thread")]
async fn update_user_can_drop_all_groups() {
    let db = setup_db().await;
    db.users()
        .create(&bumbleywump(&["admins", "users"]))
        .await
        .unwrap();

    db.users()
        .update("bc", &bumbleywump(&[]))
        .await
        .expect("Update should succeed");

    let retrieved = db.users().get("bc").await.unwrap().unwrap();
    assert!(retrieved.groups.is_empty());
    assert_eq!(membership_count(&db, "bc").await, 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn failed_update_leaves_original_untouched() {
    let db = setup_db().await;
    db.users().create(&bumbleywump(&["admins"])).await.unwrap();

    let result = db.users().update("bc", &bumbleywump(&["nonexistent"])).await;

    assert!(result.is_err());
    assert_eq!(
        db.users().get("bc").await.unwrap(),
        Some(bumbleywump(&["admins"]))
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_user_cascades_memberships() {
    let db = setup_db().await;
    db.users()
        .create(&bumbleywump(&["admins", "users"]))
        .await
        .unwrap();

    db.users().delete("bc").await.expect("Delete should succeed");

    assert!(db.users().get("bc").await.unwrap().is_none());
    assert_eq!(membership_count(&db, "bc").await, 0);

    let admins = db.groups().get("admins").await.unwrap().unwrap();
    assert!(admins.users.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_nonexistent_user_is_noop() {
    let db = setup_db().await;

    db.users()
        .delete("nobody")
        .await
        .expect("Delete of absent user should succeed");
}
