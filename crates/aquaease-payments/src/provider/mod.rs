//! Payment Provider Integration
//!
//! The narrow set of provider capabilities the split checkout needs.

mod mock;
mod stripe;

pub use self::mock::{MockCall, MockProvider, Operation, MAX_RECORDED_CALLS};
pub use self::stripe::StripeProvider;

use async_trait::async_trait;

use crate::error::Result;

/// Customer to create
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewCustomer {
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub checkout_id: String,
}

/// A provider price object
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderPrice {
    pub id: String,

    /// Amount in the smallest currency unit, if the price has a fixed one
    pub unit_amount: Option<i64>,

    /// ISO currency code, lowercase (`usd`)
    pub currency: String,
}

/// Payment intent to create. Card is the only accepted method.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewPaymentIntent {
    pub amount: i64,
    pub currency: String,
    pub customer_id: String,
    pub checkout_id: String,
}

/// A created payment intent
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderPaymentIntent {
    pub id: String,
    pub client_secret: Option<String>,
}

/// Stand-alone one-off price to create
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewPrice {
    pub unit_amount: i64,
    pub currency: String,
    pub product_name: String,
    pub checkout_id: String,
}

/// A created shareable payment link
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderPaymentLink {
    pub id: String,
    pub url: String,
}

/// Payment provider trait (Strategy pattern)
///
/// Implemented by [`StripeProvider`] for production and [`MockProvider`]
/// for tests and local demos.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Create a customer record, returning its id
    async fn create_customer(&self, customer: &NewCustomer) -> Result<String>;

    /// Look up a price by identifier
    async fn retrieve_price(&self, price_id: &str) -> Result<ProviderPrice>;

    /// Create a card payment intent for a customer
    async fn create_payment_intent(&self, intent: &NewPaymentIntent) -> Result<ProviderPaymentIntent>;

    /// Create a one-off price with inline product data
    async fn create_price(&self, price: &NewPrice) -> Result<ProviderPrice>;

    /// Create a shareable link that collects one unit of `price_id`
    async fn create_payment_link(&self, price_id: &str) -> Result<ProviderPaymentLink>;

    /// Provider name
    fn name(&self) -> &str;
}
