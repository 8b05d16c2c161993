//! Helpdesk Server - School IT Support Portal
//!
//! A Rust REST API server for the school IT support portal.

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use helpdesk_server::{
    api,
    config::AppConfig,
    repository::Repository,
    seed,
    services::Services,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("helpdesk_server={},tower_http=debug", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Helpdesk Server v{}", env!("CARGO_PKG_VERSION"));

    // Create the in-memory stores
    let repository = Repository::new();

    if config.seed.demo {
        seed::seed_demo_data(&repository).await;
    }

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create services
    let services = Services::new(repository);

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        // Authentication
        .route("/auth/login", post(api::auth::login))
        .route("/auth/logout", post(api::auth::logout))
        .route("/auth/me", get(api::auth::me))
        // Support requests
        .route("/requests", get(api::requests::list_requests))
        .route("/requests", post(api::requests::create_request))
        .route("/requests/:id", get(api::requests::get_request))
        .route("/requests/:id/approve", post(api::requests::approve_request))
        .route("/requests/:id/reject", post(api::requests::reject_request))
        // Incident reports
        .route("/incidents", get(api::incidents::list_incidents))
        .route("/incidents", post(api::incidents::create_incident))
        // Inventory (the static /counts route takes precedence over /:bucket)
        .route("/inventory", post(api::inventory::create_item))
        .route("/inventory/counts", get(api::inventory::inventory_counts))
        .route("/inventory/:bucket", get(api::inventory::list_inventory))
        // Messages
        .route("/messages", get(api::messages::list_messages))
        .route("/messages", post(api::messages::send_message))
        // Troubleshooting guides
        .route("/guides", get(api::guides::list_guides))
        // Statistics
        .route("/stats", get(api::stats::get_stats))
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
