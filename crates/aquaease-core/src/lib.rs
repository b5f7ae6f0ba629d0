//! # aquaease-core
//!
//! Shared domain types for the AquaEase campus water-delivery site.
//!
//! Everything here is target-agnostic: the server links it natively and the
//! browser frontend links it as WASM, so both sides agree on the same plan
//! table, the same roommate rules and the same wire format.
//!
//! ## Flow
//!
//! ```text
//! ┌──────────────┐  CheckoutHandoff   ┌──────────────┐  SplitRequest   ┌──────────────┐
//! │ Plan Builder │───────────────────▶│   Checkout   │────────────────▶│    Server    │
//! │  (FormState) │                    │    (web)     │◀────────────────│ (SplitCheckout)
//! └──────────────┘                    └──────────────┘  SplitResponse  └──────────────┘
//! ```
//!
//! - [`plan`]: terms, jug counts and display prices
//! - [`pricing`]: the canonical term × jug count → price identifier table
//! - [`split`]: integer-cent cost splitting, remainder to the primary
//! - [`builder`]: the three-step plan builder state machine
//! - [`checkout`]: stages of the client checkout form
//! - [`wire`]: JSON bodies exchanged between browser and server

pub mod builder;
pub mod checkout;
pub mod error;
pub mod plan;
pub mod pricing;
pub mod roommate;
pub mod split;
pub mod wire;

pub use builder::{can_advance, CheckoutHandoff, FormState, RoommateField, Step};
pub use checkout::{CheckoutStage, CheckoutState, ContactForm};
pub use error::{PlanError, Result};
pub use plan::{JugCount, SubscriptionPlan, Term};
pub use pricing::{PriceTable, TermPrices};
pub use roommate::{active_roommates, Roommate};
pub use split::Split;
pub use wire::{ClientConfig, ErrorBody, RoommateLink, SplitRequest, SplitResponse};
