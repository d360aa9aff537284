use activity_roster::config::{self, ServerConfig};
use activity_roster::handlers;
use activity_roster::models::RosterConfig;
use activity_roster::storage::create_roster_store;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "activity_roster=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        tracing::error!("Server failed: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let roster_config = match config::load_config_with_fallback() {
        Ok(config) => {
            tracing::info!("✓ Roster configuration loaded successfully");
            config
        }
        Err(e) => {
            tracing::warn!("⚠ {} Using the built-in roster.", e);
            RosterConfig::default()
        }
    };

    let store = create_roster_store(roster_config.into_roster());

    let app = handlers::router(store)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = ServerConfig::from_env().socket_addr()?;
    tracing::info!("🚀 Starting activity roster server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind {}: {}", addr, e))?;
    axum::serve(listener, app)
        .await
        .map_err(|e| format!("Server error: {}", e))
}
