//! Stripe Provider
//!
//! [`PaymentProvider`] on top of `async-stripe`.

use std::collections::HashMap;

use async_trait::async_trait;
use stripe::{
    Client, CreateCustomer, CreatePaymentIntent, CreatePaymentLink, CreatePaymentLinkLineItems,
    CreatePrice, CreatePriceProductData, Currency, Customer, CustomerId, PaymentIntent,
    PaymentLink, Price, PriceId, StripeError,
};

use super::{
    NewCustomer, NewPaymentIntent, NewPrice, PaymentProvider, ProviderPaymentIntent,
    ProviderPaymentLink, ProviderPrice,
};
use crate::error::{PaymentError, Result};

/// Stripe client wrapper
pub struct StripeProvider {
    client: Client,
}

impl StripeProvider {
    /// Create a new Stripe provider
    pub fn new(secret_key: &str) -> Self {
        Self {
            client: Client::new(secret_key),
        }
    }

    /// Create from `STRIPE_SECRET_KEY`
    pub fn from_env() -> Result<Self> {
        let secret_key = std::env::var("STRIPE_SECRET_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| PaymentError::Config("STRIPE_SECRET_KEY not set".into()))?;

        Ok(Self::new(&secret_key))
    }
}

fn metadata(checkout_id: &str) -> HashMap<String, String> {
    HashMap::from([("checkout_id".to_string(), checkout_id.to_string())])
}

fn currency(operation: &'static str, code: &str) -> Result<Currency> {
    code.parse()
        .map_err(|_| PaymentError::provider(operation, format!("Unsupported currency: {code}")))
}

/// Keep Stripe's own message when it sent one
fn stripe_error(operation: &'static str) -> impl FnOnce(StripeError) -> PaymentError {
    move |err| {
        let message = match err {
            StripeError::Stripe(request) => request.message,
            other => Some(other.to_string()),
        };
        PaymentError::Provider { operation, message }
    }
}

#[async_trait]
impl PaymentProvider for StripeProvider {
    async fn create_customer(&self, customer: &NewCustomer) -> Result<String> {
        let mut params = CreateCustomer::new();
        params.email = Some(&customer.email);
        params.name = Some(&customer.name);
        params.phone = customer.phone.as_deref();
        params.metadata = Some(metadata(&customer.checkout_id));

        let created = Customer::create(&self.client, params)
            .await
            .map_err(stripe_error("create_customer"))?;

        Ok(created.id.to_string())
    }

    async fn retrieve_price(&self, price_id: &str) -> Result<ProviderPrice> {
        let id: PriceId = price_id
            .parse()
            .map_err(|_| PaymentError::provider("retrieve_price", format!("Invalid price ID: {price_id}")))?;

        let price = Price::retrieve(&self.client, &id, &[])
            .await
            .map_err(stripe_error("retrieve_price"))?;

        Ok(ProviderPrice {
            id: price.id.to_string(),
            unit_amount: price.unit_amount,
            currency: price.currency.map(|c| c.to_string()).unwrap_or_default(),
        })
    }

    async fn create_payment_intent(&self, intent: &NewPaymentIntent) -> Result<ProviderPaymentIntent> {
        let customer: CustomerId = intent.customer_id.parse().map_err(|_| {
            PaymentError::provider(
                "create_payment_intent",
                format!("Invalid customer ID: {}", intent.customer_id),
            )
        })?;

        let mut params =
            CreatePaymentIntent::new(intent.amount, currency("create_payment_intent", &intent.currency)?);
        params.customer = Some(customer);
        params.payment_method_types = Some(vec!["card".to_string()]);
        params.metadata = Some(metadata(&intent.checkout_id));

        let created = PaymentIntent::create(&self.client, params)
            .await
            .map_err(stripe_error("create_payment_intent"))?;

        Ok(ProviderPaymentIntent {
            id: created.id.to_string(),
            client_secret: created.client_secret,
        })
    }

    async fn create_price(&self, price: &NewPrice) -> Result<ProviderPrice> {
        let mut params = CreatePrice::new(currency("create_price", &price.currency)?);
        params.unit_amount = Some(price.unit_amount);
        params.product_data = Some(CreatePriceProductData {
            name: price.product_name.clone(),
            ..Default::default()
        });
        params.metadata = Some(metadata(&price.checkout_id));

        let created = Price::create(&self.client, params)
            .await
            .map_err(stripe_error("create_price"))?;

        Ok(ProviderPrice {
            id: created.id.to_string(),
            unit_amount: created.unit_amount,
            currency: created.currency.map(|c| c.to_string()).unwrap_or_default(),
        })
    }

    async fn create_payment_link(&self, price_id: &str) -> Result<ProviderPaymentLink> {
        let params = CreatePaymentLink::new(vec![CreatePaymentLinkLineItems {
            price: price_id.to_string(),
            quantity: 1,
            ..Default::default()
        }]);

        let link = PaymentLink::create(&self.client, params)
            .await
            .map_err(stripe_error("create_payment_link"))?;

        Ok(ProviderPaymentLink {
            id: link.id.to_string(),
            url: link.url,
        })
    }

    fn name(&self) -> &str {
        "Stripe"
    }
}
