use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, HeaderValue, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde_json::json;
use std::sync::Arc;
use time::OffsetDateTime;
use tower_sessions::{session::Id, session_store::SessionStore};

use crate::{AppState, DoorConfig};

pub const ADMIN_SESSION_COOKIE: &str = "admin_session";

#[derive(Debug)]
pub struct AuthError {
    pub status: StatusCode,
    pub message: String,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message,
        }));

        let mut response = (self.status, body).into_response();
        if self.status == StatusCode::UNAUTHORIZED {
            // Challenge so the Basic Auth fallback works without the frontend
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static("Basic realm=\"Leads\""),
            );
        }
        response
    }
}

/// Admin gate: a session unlocked through the PIN door, or the Basic Auth
/// fallback for when cookies are unavailable (curl, monitoring).
pub async fn require_admin(
    State(state): State<Arc<AppState>>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    if session_is_admin(&state, request.headers()).await
        || basic_auth_ok(request.headers(), &state.config)
    {
        return Ok(next.run(request).await);
    }

    Err(AuthError {
        status: StatusCode::UNAUTHORIZED,
        message: "Authentication required".to_string(),
    })
}

/// Extract the admin session record id from the Cookie header.
pub fn admin_session_id(headers: &HeaderMap) -> Option<Id> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').map(str::trim).find_map(|pair| {
        let value = pair.strip_prefix(ADMIN_SESSION_COOKIE)?.strip_prefix('=')?;
        value.parse::<i128>().ok().map(Id)
    })
}

pub async fn session_is_admin(state: &AppState, headers: &HeaderMap) -> bool {
    let Some(session_id) = admin_session_id(headers) else {
        return false;
    };

    match state.session_store.load(&session_id).await {
        Ok(Some(record)) => {
            record.expiry_date > OffsetDateTime::now_utc()
                && record
                    .data
                    .get("admin_ok")
                    .and_then(|v| v.as_bool())
                    .unwrap_or(false)
        }
        Ok(None) => false,
        Err(e) => {
            tracing::error!("Session store error loading record: {}", e);
            false
        }
    }
}

pub fn basic_auth_ok(headers: &HeaderMap, config: &DoorConfig) -> bool {
    let Some(value) = headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
    else {
        return false;
    };
    let Some(encoded) = value.strip_prefix("Basic ") else {
        return false;
    };
    let Ok(decoded) = BASE64.decode(encoded.trim()) else {
        return false;
    };
    let Ok(credentials) = String::from_utf8(decoded) else {
        return false;
    };

    match credentials.split_once(':') {
        Some((user, pass)) => user == config.basic_auth_user && pass == config.basic_auth_pass,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> DoorConfig {
        DoorConfig {
            admin_pin: "2468".to_string(),
            basic_auth_user: "admin".to_string(),
            basic_auth_pass: "changeme".to_string(),
        }
    }

    fn headers_with_auth(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, value.parse().unwrap());
        headers
    }

    #[test]
    fn basic_auth_accepts_configured_credentials() {
        // "admin:changeme"
        let headers = headers_with_auth("Basic YWRtaW46Y2hhbmdlbWU=");
        assert!(basic_auth_ok(&headers, &config()));
    }

    #[test]
    fn basic_auth_rejects_wrong_password() {
        // "admin:wrong"
        let headers = headers_with_auth("Basic YWRtaW46d3Jvbmc=");
        assert!(!basic_auth_ok(&headers, &config()));
    }

    #[test]
    fn basic_auth_rejects_garbage_header() {
        let headers = headers_with_auth("Bearer not-basic-at-all");
        assert!(!basic_auth_ok(&headers, &config()));
    }

    #[test]
    fn session_cookie_is_found_among_others() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            "theme=dark; admin_session=42; lang=en".parse().unwrap(),
        );
        assert_eq!(admin_session_id(&headers), Some(Id(42)));
    }

    #[test]
    fn missing_session_cookie_yields_none() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, "theme=dark".parse().unwrap());
        assert_eq!(admin_session_id(&headers), None);
        assert_eq!(admin_session_id(&HeaderMap::new()), None);
    }
}
