//! HTTP Handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;

use aquaease_core::{ClientConfig, SplitRequest, SplitResponse};
use aquaease_payments::{validate, PaymentError};

use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub payments_configured: bool,
    pub payment_provider: Option<String>,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        payments_configured: state.checkout.is_some(),
        payment_provider: state.checkout.as_ref().map(|c| c.provider_name().to_string()),
    })
}

/// Client-visible configuration for the payment form
pub async fn client_config(State(state): State<AppState>) -> Json<ClientConfig> {
    Json(state.client_config.as_ref().clone())
}

/// Split checkout: one payment intent for the primary, one link per roommate
///
/// Malformed bodies and bad input are rejected with 400 before the
/// provider configuration is consulted.
pub async fn create_subscription(
    State(state): State<AppState>,
    payload: Result<Json<SplitRequest>, JsonRejection>,
) -> Result<Json<SplitResponse>, PaymentError> {
    let Json(payload) = payload.map_err(|rejection| PaymentError::InvalidRequest(rejection.body_text()))?;
    validate(&state.prices, &payload)?;

    let checkout = state.checkout.as_ref().ok_or(PaymentError::NotConfigured)?;

    let outcome = checkout.create(payload).await?;
    Ok(Json(outcome.into_response()))
}
