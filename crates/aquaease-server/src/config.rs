//! Server Configuration
//!
//! Read once at startup from the process environment (after `.env`).

use aquaease_core::pricing::{PUBLIC_ENV_PREFIX, SERVER_ENV_PREFIX};
use aquaease_core::{ClientConfig, PriceTable};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub static_dir: String,

    /// Serve checkout requests from the in-memory mock provider
    pub mock_payments: bool,

    pub publishable_key: Option<String>,

    /// Allow-list for incoming split requests
    pub server_prices: PriceTable,

    /// Identifiers handed to the browser
    pub public_prices: PriceTable,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            bind_addr: non_empty("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into()),
            static_dir: non_empty("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.into()),
            mock_payments: non_empty("AQUAEASE_MOCK_PAYMENTS")
                .is_some_and(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")),
            publishable_key: non_empty("STRIPE_PUBLISHABLE_KEY"),
            server_prices: PriceTable::from_lookup(SERVER_ENV_PREFIX, &lookup),
            public_prices: PriceTable::from_lookup(PUBLIC_ENV_PREFIX, &lookup),
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            publishable_key: self.publishable_key.clone(),
            prices: self.public_prices.clone(),
        }
    }
}
