use backend::{app, init_pool, run_migrations, AppState, DoorConfig};
use dotenvy::dotenv;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    dotenv().ok();
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,backend=debug"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "leads.db".to_string());
    let pool = init_pool(&database_url);
    run_migrations(&pool);

    let state = Arc::new(AppState::new(pool, DoorConfig::from_env()));
    let app = app(state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    tracing::info!("Starting server on port {}", port);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .expect("Failed to bind port");
    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}
