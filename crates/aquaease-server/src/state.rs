//! Application State

use std::sync::Arc;

use aquaease_core::{ClientConfig, PriceTable};
use aquaease_payments::SplitCheckout;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Split checkout orchestrator (None if payments are not configured)
    pub checkout: Option<Arc<SplitCheckout>>,

    /// Server-side allow-list, checked even when payments are not configured
    pub prices: Arc<PriceTable>,

    /// Served as-is from `/api/config`
    pub client_config: Arc<ClientConfig>,
}
