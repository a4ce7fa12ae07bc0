mod helpers;

use helpers::setup_test_app;
use serde_json::json;

#[tokio::test]
async fn health_endpoint_responds() {
    let app = setup_test_app();

    let response = app.client().get("/health").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn booking_without_smtp_is_server_misconfigured() {
    // Captcha is disabled in the test config, so the request reaches the
    // mail step and fails on the missing SMTP configuration.
    let app = setup_test_app();

    let response = app
        .client()
        .post("/api/v0/bookings")
        .json(&json!({
            "name": "Ada",
            "email": "ada@example.com",
            "phone": "555-0100",
            "first_datetime": "2026-09-01 10:00",
            "type": "portrait",
            "comments": "hello",
            "captcha": "tok"
        }))
        .await;

    response.assert_status_internal_server_error();
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "SERVER_MISCONFIGURED");
}

#[tokio::test]
async fn question_without_smtp_is_server_misconfigured() {
    let app = setup_test_app();

    let response = app
        .client()
        .post("/api/v0/questions")
        .json(&json!({
            "name": "Grace",
            "email": "grace@example.com",
            "question": "Do you shoot film?",
            "captcha": "tok"
        }))
        .await;

    response.assert_status_internal_server_error();
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "SERVER_MISCONFIGURED");
}

#[tokio::test]
async fn malformed_booking_json_is_bad_request() {
    let app = setup_test_app();

    let response = app
        .client()
        .post("/api/v0/bookings")
        .bytes("{not json".into())
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "MALFORMED_REQUEST");
}

#[tokio::test]
async fn booking_requires_name_and_email() {
    let app = setup_test_app();

    let response = app
        .client()
        .post("/api/v0/bookings")
        .json(&json!({ "comments": "no identity" }))
        .await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "MALFORMED_REQUEST");
}
