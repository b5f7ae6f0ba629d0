//! # aquaease-payments
//!
//! Roommate cost-splitting checkout for AquaEase.
//!
//! ## Flow
//!
//! One split request turns a plan price, a primary subscriber and zero or
//! more roommates into a single payment intent for the primary plus one
//! shareable payment link per roommate:
//!
//! ```text
//! SplitRequest
//!     │  validate price id (allow-list) + name/email
//!     ▼
//! retrieve_price ──▶ Split::even(unit_amount, roommates)
//!     │
//!     ├─▶ create_customer
//!     ├─▶ create_payment_intent(primary_amount)          ──▶ client secret
//!     └─▶ for each roommate:
//!            create_price(share_amount) ─▶ create_payment_link ──▶ {name, url}
//! ```
//!
//! The payment provider sits behind the [`PaymentProvider`] trait so the
//! orchestrator can run against Stripe in production and against
//! [`MockProvider`] in tests and local demos.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use aquaease_core::{PriceTable, SplitRequest};
//! use aquaease_payments::{SplitCheckout, StripeProvider};
//!
//! let provider = Arc::new(StripeProvider::new("sk_test_xxx"));
//! let checkout = SplitCheckout::new(provider, PriceTable::from_env("STRIPE_PRICE_"));
//!
//! let outcome = checkout.create(request).await?;
//! // Hand outcome.client_secret to the payment element
//! ```
//!
//! Provider calls are neither retried nor rolled back: a failure part-way
//! through leaves earlier objects in place. Every object created by one
//! request carries the same `checkout_id` metadata for reconciliation.

mod checkout;
mod error;
pub mod provider;

pub use checkout::{validate, SplitCheckout, SplitOutcome, ValidRequest, ROOMMATE_PRODUCT_NAME};
pub use error::{PaymentError, Result};
pub use provider::{MockProvider, PaymentProvider, StripeProvider};
