//! The unlock flow: PIN prompt, door request, redirect or alert.
//!
//! Runs once per completed gesture. Every failure is absorbed at this
//! boundary; nothing propagates past the detector. Overlapping attempts are
//! possible if the gesture completes again while a request is in flight; the
//! last response wins, which is harmless.

use serde::Serialize;
use serde_json::Value;
use wasm_bindgen_futures::spawn_local;

use crate::utils::api::Api;

/// Where a successful unlock lands. Full navigation, not a route change.
pub const ADMIN_LANDING_PATH: &str = "/admin/leads";

const DOOR_PATH: &str = "/admin/door";

#[derive(Serialize)]
pub struct DoorRequest {
    pub pin: String,
}

/// One unlock attempt, reduced to the three outcomes the UI reacts to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum UnlockOutcome {
    Unlocked,
    Rejected,
    TransportError,
}

/// Collapse HTTP status plus parsed body into an outcome. Pure, so the
/// decision table is testable outside the browser. Any well-formed JSON
/// without a true `ok` flag counts as a rejected credential; only a
/// non-success status or an unparseable body is a transport error.
pub fn classify(status_ok: bool, body: Option<Value>) -> UnlockOutcome {
    if !status_ok {
        return UnlockOutcome::TransportError;
    }
    match body {
        Some(value) => {
            if value.get("ok").and_then(Value::as_bool) == Some(true) {
                UnlockOutcome::Unlocked
            } else {
                UnlockOutcome::Rejected
            }
        }
        None => UnlockOutcome::TransportError,
    }
}

pub async fn request_unlock(pin: &str) -> UnlockOutcome {
    let request = match Api::post(DOOR_PATH).json(&DoorRequest {
        pin: pin.to_string(),
    }) {
        Ok(request) => request,
        Err(_) => return UnlockOutcome::TransportError,
    };

    match request.send().await {
        Ok(response) => {
            let status_ok = response.ok();
            let body = if status_ok {
                response.json::<Value>().await.ok()
            } else {
                None
            };
            classify(status_ok, body)
        }
        Err(e) => {
            gloo_console::log!(format!("Door request failed: {}", e));
            UnlockOutcome::TransportError
        }
    }
}

/// Reduce the prompt result to a usable PIN. Cancel, empty input and
/// whitespace-only input all mean abort: no request gets issued.
pub fn sanitize_pin(input: Option<String>) -> Option<String> {
    let pin = input?.trim().to_string();
    if pin.is_empty() {
        None
    } else {
        Some(pin)
    }
}

/// Prompt for the PIN and act on the server's verdict. A cancelled or empty
/// prompt aborts silently with no request.
pub fn run_unlock_flow() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(pin) = sanitize_pin(window.prompt_with_message("Admin PIN:").ok().flatten()) else {
        return;
    };

    spawn_local(async move {
        match request_unlock(&pin).await {
            UnlockOutcome::Unlocked => {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href(ADMIN_LANDING_PATH);
                }
            }
            UnlockOutcome::Rejected => alert("Invalid PIN."),
            UnlockOutcome::TransportError => alert("Error validating PIN."),
        }
    });
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Option<Value> {
        serde_json::from_str(body).ok()
    }

    #[test]
    fn ok_true_unlocks() {
        assert_eq!(
            classify(true, parse(r#"{"ok": true}"#)),
            UnlockOutcome::Unlocked
        );
    }

    #[test]
    fn ok_false_is_rejected() {
        assert_eq!(
            classify(true, parse(r#"{"ok": false}"#)),
            UnlockOutcome::Rejected
        );
    }

    #[test]
    fn other_well_formed_json_is_rejected_not_an_error() {
        // No ok flag at all still counts as a rejected credential
        assert_eq!(
            classify(true, parse(r#"{"status": "nope"}"#)),
            UnlockOutcome::Rejected
        );
        assert_eq!(classify(true, parse("[1, 2]")), UnlockOutcome::Rejected);
    }

    #[test]
    fn non_success_status_is_a_transport_error_regardless_of_body() {
        assert_eq!(classify(false, None), UnlockOutcome::TransportError);
        assert_eq!(
            classify(false, parse(r#"{"ok": true}"#)),
            UnlockOutcome::TransportError
        );
    }

    #[test]
    fn malformed_body_is_a_transport_error() {
        assert_eq!(classify(true, parse("not json")), UnlockOutcome::TransportError);
    }

    #[test]
    fn cancelled_or_empty_prompt_aborts() {
        assert_eq!(sanitize_pin(None), None);
        assert_eq!(sanitize_pin(Some(String::new())), None);
        assert_eq!(sanitize_pin(Some("   ".to_string())), None);
    }

    #[test]
    fn entered_pin_is_trimmed() {
        assert_eq!(sanitize_pin(Some(" 2468 ".to_string())), Some("2468".to_string()));
        assert_eq!(sanitize_pin(Some("2468".to_string())), Some("2468".to_string()));
    }
}
