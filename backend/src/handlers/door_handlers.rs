use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use governor::{Quota, RateLimiter};
use nonzero_ext::nonzero;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use time::OffsetDateTime;
use tower_sessions::{
    session::{Id, Record},
    session_store::SessionStore,
};
use uuid::Uuid;

use crate::handlers::admin_middleware::{admin_session_id, ADMIN_SESSION_COOKIE};
use crate::AppState;

const SESSION_HOURS: i64 = 12;

#[derive(Deserialize)]
pub struct DoorRequest {
    #[serde(default)]
    pub pin: String,
}

fn client_ip(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.split(',').next())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "local".to_string())
}

/// Receives the PIN from the hidden unlock gesture and opens an admin session.
pub async fn admin_door(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(payload): Json<DoorRequest>,
) -> Result<Response, (StatusCode, Json<serde_json::Value>)> {
    // Rate limit: 10 attempts per minute per client IP
    let quota = Quota::per_minute(nonzero!(10u32));
    let limiter_key = client_ip(&headers);

    // The map guard must drop before the session-store await below
    {
        let entry = state
            .door_limiter
            .entry(limiter_key.clone())
            .or_insert_with(|| RateLimiter::keyed(quota));
        let limiter = entry.value();

        if limiter.check_key(&limiter_key).is_err() {
            tracing::warn!("Rate limit exceeded for door attempts from {}", limiter_key);
            return Err((
                StatusCode::TOO_MANY_REQUESTS,
                Json(json!({"error": "Too many attempts, try again shortly"})),
            ));
        }
    }

    let pin = payload.pin.trim();
    if pin.is_empty() || pin != state.config.admin_pin {
        tracing::info!("Rejected admin door attempt from {}", limiter_key);
        return Ok((StatusCode::UNAUTHORIZED, Json(json!({"ok": false}))).into_response());
    }

    let mut record = Record {
        id: Id(Uuid::new_v4().as_u128() as i128),
        data: Default::default(),
        expiry_date: OffsetDateTime::now_utc() + time::Duration::hours(SESSION_HOURS),
    };
    record.data.insert("admin_ok".to_string(), json!(true));

    if let Err(e) = state.session_store.create(&mut record).await {
        tracing::error!("Failed to store admin session record: {}", e);
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "Failed to open admin session"})),
        ));
    }

    let cookie = format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax",
        ADMIN_SESSION_COOKIE, record.id.0
    );
    let cookie = HeaderValue::from_str(&cookie).map_err(|e| {
        tracing::error!("Failed to build session cookie: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "Failed to open admin session"})),
        )
    })?;

    tracing::info!("Admin session opened from {}", limiter_key);
    let mut response = (StatusCode::OK, Json(json!({"ok": true}))).into_response();
    response.headers_mut().insert(header::SET_COOKIE, cookie);
    Ok(response)
}

/// Drops the admin session and sends the browser back to the landing page.
pub async fn admin_logout(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    if let Some(session_id) = admin_session_id(&headers) {
        if let Err(e) = state.session_store.delete(&session_id).await {
            tracing::error!("Failed to delete admin session record: {}", e);
        }
    }

    let mut response = Redirect::to("/").into_response();
    let headers = response.headers_mut();
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    headers.insert(
        header::SET_COOKIE,
        HeaderValue::from_static("admin_session=; Path=/; HttpOnly; Max-Age=0"),
    );
    response
}
