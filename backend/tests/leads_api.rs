//! Contact pipeline and lead administration: honeypot, validation, listing,
//! deletion, CSV export.

mod common;

use axum::http::{header, StatusCode};
use common::*;
use serde_json::json;

#[tokio::test]
async fn contact_submission_is_listed_for_admins() {
    let (app, _tmp) = test_app();

    let response = send_json(
        &app,
        "POST",
        "/api/contact",
        json!({
            "name": "Ada",
            "email": "ada@example.com",
            "phone": "+358 40 123",
            "message": "Interested in a web app."
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send_with_headers(&app, "GET", "/api/admin/leads", &[BASIC_AUTH]).await;
    assert_eq!(response.status(), StatusCode::OK);
    let leads = body_json(response).await;
    let leads = leads.as_array().unwrap();
    assert_eq!(leads.len(), 1);
    assert_eq!(leads[0]["name"], "Ada");
    assert_eq!(leads[0]["email"], "ada@example.com");
    assert_eq!(leads[0]["phone"], "+358 40 123");
}

#[tokio::test]
async fn honeypot_submissions_are_dropped_silently() {
    let (app, _tmp) = test_app();

    let response = send_json(
        &app,
        "POST",
        "/api/contact",
        json!({
            "name": "Bot",
            "email": "bot@example.com",
            "message": "buy now",
            "website": "http://spam.example"
        }),
    )
    .await;
    // Looks like success to the bot
    assert_eq!(response.status(), StatusCode::OK);

    let response = send_with_headers(&app, "GET", "/api/admin/leads", &[BASIC_AUTH]).await;
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn contact_requires_name_email_and_message() {
    let (app, _tmp) = test_app();

    let response = send_json(
        &app,
        "POST",
        "/api/contact",
        json!({"name": "Ada", "email": "", "message": "hello"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send_json(
        &app,
        "POST",
        "/api/contact",
        json!({"name": "Ada", "email": "ada@example.com", "message": "   "}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn leads_can_be_deleted_once() {
    let (app, _tmp) = test_app();

    let response = send_json(
        &app,
        "POST",
        "/api/contact",
        json!({"name": "Ada", "email": "ada@example.com", "message": "hi"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send_with_headers(&app, "GET", "/api/admin/leads", &[BASIC_AUTH]).await;
    let leads = body_json(response).await;
    let id = leads[0]["id"].as_i64().unwrap();

    let uri = format!("/api/admin/leads/{}/delete", id);
    let response = send_with_headers(&app, "POST", &uri, &[BASIC_AUTH]).await;
    assert_eq!(response.status(), StatusCode::OK);

    // Second delete finds nothing
    let response = send_with_headers(&app, "POST", &uri, &[BASIC_AUTH]).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send_with_headers(&app, "GET", "/api/admin/leads", &[BASIC_AUTH]).await;
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn csv_export_quotes_awkward_fields() {
    let (app, _tmp) = test_app();

    let response = send_json(
        &app,
        "POST",
        "/api/contact",
        json!({
            "name": "Quote \"Fan\"",
            "email": "q@example.com",
            "message": "line one\nline two"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send_with_headers(&app, "GET", "/admin/leads.csv", &[BASIC_AUTH]).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/csv"
    );
    assert!(response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap()
        .contains("leads.csv"));

    let csv = body_string(response).await;
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("id,created_at,name,email,phone,message"));
    let row = lines.next().expect("one data row");
    assert!(row.contains("\"Quote \"\"Fan\"\"\""));
    // Newlines flattened so the row stays on one line
    assert!(row.contains("\"line one line two\""));
}

#[tokio::test]
async fn health_and_security_headers() {
    let (app, _tmp) = test_app();

    let response = send_with_headers(&app, "GET", "/api/health", &[]).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("x-content-type-options").unwrap(),
        "nosniff"
    );
    assert_eq!(
        response.headers().get("x-frame-options").unwrap(),
        "SAMEORIGIN"
    );
    assert_eq!(body_string(response).await, "OK");
}
