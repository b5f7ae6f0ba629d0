//! AquaEase HTTP Server
//!
//! Axum-based server for the split checkout API and the compiled
//! WASM frontend.

mod config;
mod handlers;
mod state;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use aquaease_payments::{MockProvider, PaymentProvider, SplitCheckout, StripeProvider};

use crate::config::ServerConfig;
use crate::handlers::{client_config, create_subscription, health_check};
use crate::state::AppState;

/// Build the application router
pub fn router(state: AppState, static_dir: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health & info
        .route("/health", get(health_check))
        .route("/api/config", get(client_config))

        // Payments
        .route("/api/stripe/create-subscription", post(create_subscription))

        // Static files (WASM frontend); unknown paths get index.html for client routing
        .fallback_service(
            ServeDir::new(static_dir).fallback(ServeFile::new(format!("{static_dir}/index.html"))),
        )

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Pick the payment provider: mock when asked for, Stripe when a key is set
fn payment_provider(config: &ServerConfig) -> Option<Arc<dyn PaymentProvider>> {
    if config.mock_payments {
        tracing::warn!("⚠ Using mock payment provider - no real charges will be made");
        return Some(Arc::new(MockProvider::new()));
    }

    match StripeProvider::from_env() {
        Ok(stripe) => {
            tracing::info!("✓ Stripe configured");
            Some(Arc::new(stripe))
        }
        Err(e) => {
            tracing::warn!("⚠ Stripe not configured - payments disabled ({})", e);
            tracing::warn!("  Set STRIPE_SECRET_KEY in .env");
            None
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();

    if config.publishable_key.is_none() {
        tracing::warn!("⚠ STRIPE_PUBLISHABLE_KEY not set - the payment form will not load");
    }

    let checkout = payment_provider(&config)
        .map(|provider| Arc::new(SplitCheckout::new(provider, config.server_prices.clone())));

    let state = AppState {
        checkout,
        prices: Arc::new(config.server_prices.clone()),
        client_config: Arc::new(config.client_config()),
    };

    let app = router(state, &config.static_dir);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("💧 AquaEase server running on http://{}", config.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health                         - Health check");
    tracing::info!("  GET  /api/config                     - Client payment config");
    tracing::info!("  POST /api/stripe/create-subscription - Split checkout");
    tracing::info!("  GET  /*                              - Static files from {}", config.static_dir);
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}
