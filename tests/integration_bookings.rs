mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

use common::{
    TestApp, generate_unique_email, send, setup_test_app, setup_test_app_with_policy,
    user_with_token,
};
use travol_config::BookingPolicy;
use travol_models::UserRole;

fn booking_for(tourist: &str, guide: &str) -> Value {
    json!({
        "touristEmail": tourist,
        "selectedGuide": guide,
        "packageName": "Sundarbans Explorer",
        "price": 250,
        "tourDate": "2026-11-02"
    })
}

async fn create_booking(app: &TestApp, token: &str, body: Value) -> String {
    let (status, result) = send(&app.router, "POST", "/booking", Some(token), Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["acknowledged"], true);
    result["insertedId"].as_str().unwrap().to_string()
}

async fn bookings_of(app: &TestApp, email: &str, token: &str) -> Vec<Value> {
    let (status, body) = send(
        &app.router,
        "GET",
        &format!("/booking/{}", email),
        Some(token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body.as_array().unwrap().clone()
}

#[tokio::test]
async fn test_new_booking_is_pending() {
    let app = setup_test_app();
    let (tourist, token) = user_with_token(&app.store, None).await;

    let mut body = booking_for(&tourist, "Rafi");
    body["status"] = json!("Approved");
    create_booking(&app, &token, body).await;

    let bookings = bookings_of(&app, &tourist, &token).await;
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0]["status"], "Pending");
    assert_eq!(bookings[0]["packageName"], "Sundarbans Explorer");
}

#[tokio::test]
async fn test_booking_requires_token() {
    let app = setup_test_app();

    let (status, body) = send(
        &app.router,
        "POST",
        "/booking",
        None,
        Some(booking_for(&generate_unique_email(), "Rafi")),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "forbidden request");
}

#[tokio::test]
async fn test_booking_validation() {
    let app = setup_test_app();
    let (_, token) = user_with_token(&app.store, None).await;

    let (status, _) = send(
        &app.router,
        "POST",
        "/booking",
        Some(&token),
        Some(json!({ "touristEmail": "nope", "selectedGuide": "Rafi" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_tourist_cannot_read_other_bookings() {
    let app = setup_test_app();
    let (tourist, token) = user_with_token(&app.store, None).await;
    let (other, other_token) = user_with_token(&app.store, None).await;
    create_booking(&app, &other_token, booking_for(&other, "Rafi")).await;

    let (status, body) = send(
        &app.router,
        "GET",
        &format!("/booking/{}", other),
        Some(&token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "forbidden access");
    assert!(bookings_of(&app, &tourist, &token).await.is_empty());
}

#[tokio::test]
async fn test_all_bookings_admin_only() {
    let app = setup_test_app();
    let (tourist, token) = user_with_token(&app.store, None).await;
    let (_, admin_token) = user_with_token(&app.store, Some(UserRole::Admin)).await;
    create_booking(&app, &token, booking_for(&tourist, "Rafi")).await;
    create_booking(&app, &token, booking_for(&tourist, "Nila")).await;

    let (status, _) = send(&app.router, "GET", "/booking", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = send(&app.router, "GET", "/booking", Some(&admin_token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_any_guide_lists_bookings_by_guide_name() {
    let app = setup_test_app();
    let (tourist, token) = user_with_token(&app.store, None).await;
    let (_, guide_token) = user_with_token(&app.store, Some(UserRole::TourGuide)).await;
    create_booking(&app, &token, booking_for(&tourist, "Rafi")).await;
    create_booking(&app, &token, booking_for(&tourist, "Nila")).await;

    let (status, body) = send(&app.router, "GET", "/booking/new/Rafi", Some(&guide_token), None).await;

    assert_eq!(status, StatusCode::OK);
    let bookings = body.as_array().unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0]["selectedGuide"], "Rafi");
}

#[tokio::test]
async fn test_guide_routes_denied_to_tourists() {
    let app = setup_test_app();
    let (tourist, token) = user_with_token(&app.store, None).await;
    let id = create_booking(&app, &token, booking_for(&tourist, "Rafi")).await;

    let (status, _) = send(&app.router, "GET", "/booking/new/Rafi", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = send(
        &app.router,
        "PATCH",
        &format!("/booking/accept/{}", id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "forbidden access");
}

#[tokio::test]
async fn test_accept_then_reject_when_unrestricted() {
    let app = setup_test_app();
    let (tourist, token) = user_with_token(&app.store, None).await;
    let (_, guide_token) = user_with_token(&app.store, Some(UserRole::TourGuide)).await;
    let id = create_booking(&app, &token, booking_for(&tourist, "Rafi")).await;

    let (status, result) = send(
        &app.router,
        "PATCH",
        &format!("/booking/accept/{}", id),
        Some(&guide_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["modifiedCount"], 1);
    assert_eq!(bookings_of(&app, &tourist, &token).await[0]["status"], "Approved");

    let (status, result) = send(
        &app.router,
        "PATCH",
        &format!("/booking/reject/{}", id),
        Some(&guide_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["modifiedCount"], 1);
    assert_eq!(bookings_of(&app, &tourist, &token).await[0]["status"], "Rejected");
}

#[tokio::test]
async fn test_pending_only_refuses_reversal() {
    let app = setup_test_app_with_policy(BookingPolicy::PendingOnly);
    let (tourist, token) = user_with_token(&app.store, None).await;
    let (_, guide_token) = user_with_token(&app.store, Some(UserRole::TourGuide)).await;
    let id = create_booking(&app, &token, booking_for(&tourist, "Rafi")).await;

    let (status, _) = send(
        &app.router,
        "PATCH",
        &format!("/booking/reject/{}", id),
        Some(&guide_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app.router,
        "PATCH",
        &format!("/booking/accept/{}", id),
        Some(&guide_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        body["message"],
        "Booking is already Rejected; it cannot be changed to Approved"
    );
    assert_eq!(bookings_of(&app, &tourist, &token).await[0]["status"], "Rejected");

    let (status, result) = send(
        &app.router,
        "PATCH",
        &format!("/booking/reject/{}", id),
        Some(&guide_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["modifiedCount"], 0);
}

#[tokio::test]
async fn test_transition_on_missing_booking() {
    for policy in [BookingPolicy::Unrestricted, BookingPolicy::PendingOnly] {
        let app = setup_test_app_with_policy(policy);
        let (_, guide_token) = user_with_token(&app.store, Some(UserRole::TourGuide)).await;

        let (status, result) = send(
            &app.router,
            "PATCH",
            &format!("/booking/accept/{}", uuid::Uuid::new_v4()),
            Some(&guide_token),
            None,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(result["matchedCount"], 0);
        assert_eq!(result["modifiedCount"], 0);
    }
}
