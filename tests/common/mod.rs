use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use travol::router::init_router;
use travol::state::AppState;
use travol_auth::create_access_token;
use travol_config::{BookingPolicy, CorsConfig, JwtConfig};
use travol_db::{Collection, DocumentStore, Fields, MemoryDocumentStore};
use travol_models::UserRole;

pub const TEST_SECRET: &str = "integration-test-secret";

pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryDocumentStore>,
}

pub fn jwt_config() -> JwtConfig {
    JwtConfig::new(TEST_SECRET)
}

pub fn setup_test_app() -> TestApp {
    setup_test_app_with_policy(BookingPolicy::default())
}

pub fn setup_test_app_with_policy(booking_policy: BookingPolicy) -> TestApp {
    let store = Arc::new(MemoryDocumentStore::new());
    let state = AppState {
        store: store.clone(),
        jwt_config: jwt_config(),
        cors_config: CorsConfig::default(),
        booking_policy,
    };

    TestApp {
        router: init_router(state),
        store,
    }
}

pub fn token_for(email: &str) -> String {
    create_access_token(email, &jwt_config()).unwrap()
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

/// Inserts a document directly, bypassing the API.
pub async fn seed(store: &MemoryDocumentStore, collection: Collection, body: Value) -> Uuid {
    let fields: Fields = match body {
        Value::Object(map) => map.into_iter().collect(),
        other => panic!("seed body must be an object, got {}", other),
    };
    store
        .insert_one(collection, fields)
        .await
        .unwrap()
        .inserted_id
}

pub async fn seed_user(store: &MemoryDocumentStore, email: &str, role: Option<UserRole>) -> Uuid {
    let mut body = serde_json::json!({ "email": email, "name": "Test User" });
    if let Some(role) = role {
        body["role"] = Value::from(role.as_str());
    }
    seed(store, Collection::Users, body).await
}

/// Registers a user with `role` and returns a token for it.
#[allow(dead_code)]
pub async fn user_with_token(store: &MemoryDocumentStore, role: Option<UserRole>) -> (String, String) {
    let email = generate_unique_email();
    seed_user(store, &email, role).await;
    let token = token_for(&email);
    (email, token)
}

/// Sends a request and returns the status and the body as JSON.
///
/// Non-JSON bodies come back as a JSON string, empty bodies as `null`.
pub async fn send(
    router: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    send_request(router, request).await
}

pub async fn send_request(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    (status, body)
}
