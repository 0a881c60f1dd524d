use axum::{
    body::Body,
    http::{HeaderName, HeaderValue, Request},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use dashmap::DashMap;
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use governor::{clock::DefaultClock, state::keyed::DefaultKeyedStateStore, RateLimiter};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tower_sessions::MemoryStore;
use tracing::Level;

pub mod handlers {
    pub mod admin_middleware;
    pub mod door_handlers;
    pub mod lead_handlers;
}
pub mod models {
    pub mod lead_models;
}
pub mod repositories {
    pub mod lead_repository;
}
pub mod schema;

use handlers::{admin_middleware, door_handlers, lead_handlers};
use repositories::lead_repository::LeadRepository;

pub type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

pub struct DoorConfig {
    pub admin_pin: String,
    pub basic_auth_user: String,
    pub basic_auth_pass: String,
}

impl DoorConfig {
    pub fn from_env() -> Self {
        Self {
            admin_pin: std::env::var("ADMIN_PIN").unwrap_or_else(|_| "2468".to_string()),
            basic_auth_user: std::env::var("BASIC_AUTH_USER")
                .unwrap_or_else(|_| "admin".to_string()),
            basic_auth_pass: std::env::var("BASIC_AUTH_PASS")
                .unwrap_or_else(|_| "changeme".to_string()),
        }
    }
}

pub struct AppState {
    pub leads: Arc<LeadRepository>,
    pub session_store: MemoryStore,
    pub door_limiter:
        DashMap<String, RateLimiter<String, DefaultKeyedStateStore<String>, DefaultClock>>,
    pub config: DoorConfig,
}

impl AppState {
    pub fn new(pool: DbPool, config: DoorConfig) -> Self {
        Self {
            leads: Arc::new(LeadRepository::new(pool)),
            session_store: MemoryStore::default(),
            door_limiter: DashMap::new(),
            config,
        }
    }
}

pub fn init_pool(database_url: &str) -> DbPool {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    r2d2::Pool::builder()
        .build(manager)
        .expect("Failed to create pool")
}

pub fn run_migrations(pool: &DbPool) {
    let mut conn = pool.get().expect("Failed to get DB connection");
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Failed to run migrations");
}

async fn health_check() -> &'static str {
    "OK"
}

// setdefault-style: handlers keep the final say on their own headers
async fn security_headers(request: Request<Body>, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    let defaults = [
        ("x-content-type-options", "nosniff"),
        ("x-frame-options", "SAMEORIGIN"),
    ];
    for (name, value) in defaults {
        let name = HeaderName::from_static(name);
        if !headers.contains_key(&name) {
            headers.insert(name, HeaderValue::from_static(value));
        }
    }
    response
}

pub fn app(state: Arc<AppState>) -> Router {
    // Public routes that don't need authentication
    let public_routes = Router::new()
        .route("/api/health", get(health_check))
        .route("/api/contact", post(lead_handlers::submit_contact))
        .route("/admin/door", post(door_handlers::admin_door))
        .route("/admin/logout", get(door_handlers::admin_logout));

    // Admin routes behind the PIN session / Basic Auth gate
    let admin_routes = Router::new()
        .route("/api/admin/leads", get(lead_handlers::get_leads))
        .route(
            "/api/admin/leads/{lead_id}/delete",
            post(lead_handlers::delete_lead),
        )
        .route("/admin/leads.csv", get(lead_handlers::export_leads_csv))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            admin_middleware::require_admin,
        ));

    let dist_dir =
        PathBuf::from(std::env::var("FRONTEND_DIST").unwrap_or_else(|_| "frontend/dist".to_string()));
    let index_file = dist_dir.join("index.html");

    Router::new()
        .merge(public_routes)
        .merge(admin_routes)
        .fallback_service(ServeDir::new(&dist_dir).not_found_service(ServeFile::new(index_file)))
        .layer(middleware::from_fn(security_headers))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(
            CorsLayer::new()
                .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
                .allow_origin(AllowOrigin::exact(
                    std::env::var("FRONTEND_URL")
                        .unwrap_or_else(|_| "http://localhost:8080".to_string())
                        .parse()
                        .expect("Invalid FRONTEND_URL"),
                ))
                .allow_headers([axum::http::header::CONTENT_TYPE])
                .allow_credentials(true),
        )
        .with_state(state)
}
