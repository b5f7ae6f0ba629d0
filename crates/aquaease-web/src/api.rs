//! API Client

use aquaease_core::{ClientConfig, ErrorBody, SplitRequest, SplitResponse};

/// Page origin; reqwest on WASM needs absolute URLs
pub fn origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:3000".into())
}

/// Publishable key and client price table
pub async fn fetch_config() -> Result<ClientConfig, String> {
    let response = reqwest::get(format!("{}/api/config", origin()))
        .await
        .map_err(|e| e.to_string())?;

    if !response.status().is_success() {
        return Err(format!("Config request failed: {}", response.status()));
    }

    response.json().await.map_err(|e| e.to_string())
}

/// Start the split checkout
pub async fn create_subscription(request: &SplitRequest) -> Result<SplitResponse, String> {
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/stripe/create-subscription", origin()))
        .json(request)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.status().is_success() {
        response.json().await.map_err(|e| e.to_string())
    } else {
        let body: Option<ErrorBody> = response.json().await.ok();
        Err(body.map_or_else(|| "Unable to start payment.".to_string(), |b| b.error))
    }
}
