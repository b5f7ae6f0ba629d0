//! UI Components

mod checkout_form;
mod layout;
mod plan_builder;

pub use checkout_form::CheckoutForm;
pub use layout::{CardGrid, SiteFooter, SiteHeader};
pub use plan_builder::PlanBuilder;
