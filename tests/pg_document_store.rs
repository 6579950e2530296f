//! Runs against a live PostgreSQL (`DATABASE_URL`): `cargo test -- --ignored`.

use serde_json::json;
use sqlx::PgPool;

use travol_db::{Collection, DocumentStore, Fields, Filter, PgDocumentStore, StoreError};

fn fields(value: serde_json::Value) -> Fields {
    match value {
        serde_json::Value::Object(map) => map.into_iter().collect(),
        _ => Fields::new(),
    }
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires PostgreSQL"]
async fn test_insert_and_find(pool: PgPool) {
    let store = PgDocumentStore::new(pool);

    let first = store
        .insert_one(
            Collection::Bookings,
            fields(json!({ "touristEmail": "a@example.com", "status": "Pending" })),
        )
        .await
        .unwrap();
    store
        .insert_one(
            Collection::Bookings,
            fields(json!({ "touristEmail": "b@example.com", "status": "Pending" })),
        )
        .await
        .unwrap();

    let all = store.find(Collection::Bookings, &Filter::all()).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, first.inserted_id);

    let mine = store
        .find(Collection::Bookings, &Filter::eq("touristEmail", "a@example.com"))
        .await
        .unwrap();
    assert_eq!(mine.len(), 1);

    let by_id = store
        .find_one(Collection::Bookings, &Filter::by_id(first.inserted_id))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_id.get_str("touristEmail"), Some("a@example.com"));

    let other_collection = store.find(Collection::Reviews, &Filter::all()).await.unwrap();
    assert!(other_collection.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires PostgreSQL"]
async fn test_update_counts(pool: PgPool) {
    let store = PgDocumentStore::new(pool);
    let id = store
        .insert_one(Collection::Users, fields(json!({ "email": "u@example.com" })))
        .await
        .unwrap()
        .inserted_id;
    let promote = fields(json!({ "role": "Admin" }));

    let first = store
        .update_one(Collection::Users, &Filter::by_id(id), promote.clone())
        .await
        .unwrap();
    let second = store
        .update_one(Collection::Users, &Filter::by_id(id), promote.clone())
        .await
        .unwrap();
    let missing = store
        .update_one(Collection::Users, &Filter::by_id(uuid::Uuid::new_v4()), promote)
        .await
        .unwrap();

    assert_eq!((first.matched_count, first.modified_count), (1, 1));
    assert_eq!((second.matched_count, second.modified_count), (1, 0));
    assert_eq!((missing.matched_count, missing.modified_count), (0, 0));

    let user = store
        .find_one(Collection::Users, &Filter::by_id(id))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(user.get_str("role"), Some("Admin"));
    assert_eq!(user.get_str("email"), Some("u@example.com"));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires PostgreSQL"]
async fn test_delete_one(pool: PgPool) {
    let store = PgDocumentStore::new(pool);
    let id = store
        .insert_one(Collection::Wishlist, fields(json!({ "email": "w@example.com" })))
        .await
        .unwrap()
        .inserted_id;

    let deleted = store
        .delete_one(Collection::Wishlist, &Filter::by_id(id))
        .await
        .unwrap();
    let again = store
        .delete_one(Collection::Wishlist, &Filter::by_id(id))
        .await
        .unwrap();

    assert_eq!(deleted.deleted_count, 1);
    assert_eq!(again.deleted_count, 0);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires PostgreSQL"]
async fn test_duplicate_user_email(pool: PgPool) {
    let store = PgDocumentStore::new(pool);
    let user = fields(json!({ "email": "dup@example.com" }));

    store.insert_one(Collection::Users, user.clone()).await.unwrap();
    let err = store.insert_one(Collection::Users, user).await.unwrap_err();

    assert!(matches!(err, StoreError::Duplicate { .. }));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires PostgreSQL"]
async fn test_update_guarded_by_current_value(pool: PgPool) {
    let store = PgDocumentStore::new(pool);
    let decided = store
        .insert_one(
            Collection::Bookings,
            fields(json!({ "touristEmail": "a@example.com", "status": "Rejected" })),
        )
        .await
        .unwrap()
        .inserted_id;
    let undecided = store
        .insert_one(Collection::Bookings, fields(json!({ "touristEmail": "b@example.com" })))
        .await
        .unwrap()
        .inserted_id;
    let approve = fields(json!({ "status": "Approved" }));

    let stale = store
        .update_one(
            Collection::Bookings,
            &Filter::by_id(decided).and_eq("status", "Pending"),
            approve.clone(),
        )
        .await
        .unwrap();
    let absent = store
        .update_one(
            Collection::Bookings,
            &Filter::by_id(undecided).and_missing("status"),
            approve,
        )
        .await
        .unwrap();

    assert_eq!((stale.matched_count, stale.modified_count), (0, 0));
    assert_eq!((absent.matched_count, absent.modified_count), (1, 1));

    let kept = store
        .find_one(Collection::Bookings, &Filter::by_id(decided))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(kept.get_str("status"), Some("Rejected"));
}
