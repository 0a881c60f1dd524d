use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::models::lead_models::{Lead, NewLead};
use crate::AppState;

#[derive(Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: String,
    // Honeypot field, hidden in the form. Humans leave it empty.
    #[serde(default)]
    pub website: String,
}

pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ContactRequest>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    if !payload.website.trim().is_empty() {
        tracing::info!("Honeypot field filled, dropping contact submission");
        return Ok(Json(json!({"message": "Thanks for reaching out!"})));
    }

    let name = payload.name.trim().to_string();
    let email = payload.email.trim().to_string();
    let phone = payload.phone.trim().to_string();
    let message = payload.message.trim().to_string();

    if name.is_empty() || email.is_empty() || message.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Name, email and message are required"})),
        ));
    }

    let created_at = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("System time before Unix epoch")
        .as_secs() as i32;

    let new_lead = NewLead {
        name,
        email,
        phone: if phone.is_empty() { None } else { Some(phone) },
        message,
        created_at,
    };

    state.leads.create_lead(new_lead).map_err(|e| {
        tracing::error!("Database error while storing lead: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "Database error"})),
        )
    })?;

    tracing::info!("Stored new contact lead");
    Ok(Json(json!({"message": "Thanks for reaching out!"})))
}

pub async fn get_leads(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Lead>>, (StatusCode, Json<serde_json::Value>)> {
    let leads = state.leads.get_all_leads().map_err(|e| {
        tracing::error!("Database error while fetching leads: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "Database error"})),
        )
    })?;

    Ok(Json(leads))
}

pub async fn delete_lead(
    State(state): State<Arc<AppState>>,
    Path(lead_id): Path<i32>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    let deleted = state.leads.delete_lead(lead_id).map_err(|e| {
        tracing::error!("Database error while deleting lead {}: {}", lead_id, e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "Database error"})),
        )
    })?;

    if !deleted {
        return Err((
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Lead not found"})),
        ));
    }

    Ok(Json(json!({"message": "Lead deleted"})))
}

pub async fn export_leads_csv(
    State(state): State<Arc<AppState>>,
) -> Result<Response, (StatusCode, Json<serde_json::Value>)> {
    let leads = state.leads.get_all_leads().map_err(|e| {
        tracing::error!("Database error while exporting leads: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "Database error"})),
        )
    })?;

    let mut csv = String::from("id,created_at,name,email,phone,message\n");
    for lead in &leads {
        let row = [
            lead.id.to_string(),
            format_timestamp(lead.created_at),
            lead.name.clone(),
            lead.email.clone(),
            lead.phone.clone().unwrap_or_default(),
            flatten_message(&lead.message),
        ];
        let quoted: Vec<String> = row.iter().map(|field| csv_field(field)).collect();
        csv.push_str(&quoted.join(","));
        csv.push('\n');
    }

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/csv")
        .header(
            header::CONTENT_DISPOSITION,
            "attachment; filename=leads.csv",
        )
        .body(Body::from(csv))
        .map_err(|e| {
            tracing::error!("Failed to build CSV response: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Failed to build CSV response"})),
            )
        })
}

fn csv_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn flatten_message(message: &str) -> String {
    message.replace(['\r', '\n'], " ").trim().to_string()
}

fn format_timestamp(timestamp: i32) -> String {
    chrono::DateTime::from_timestamp(timestamp as i64, 0)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_default()
}
