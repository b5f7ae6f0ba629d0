//! Price Identifier Table
//!
//! Binds each of the six plans to one payment-provider price identifier.
//! Every identifier can be overridden from the environment; unset or empty
//! overrides fall back to the embedded constants below.

use serde::{Deserialize, Serialize};

use crate::plan::{JugCount, SubscriptionPlan, Term};

/// Prefix for the server-side overrides (`STRIPE_PRICE_SEMESTER_BASE`, ...)
pub const SERVER_ENV_PREFIX: &str = "STRIPE_PRICE_";

/// Prefix for the client-facing overrides (`PUBLIC_STRIPE_PRICE_SEMESTER_BASE`, ...)
pub const PUBLIC_ENV_PREFIX: &str = "PUBLIC_STRIPE_PRICE_";

/// Identifiers for one term, keyed by jug count on the wire
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermPrices {
    #[serde(rename = "2")]
    pub base: String,

    #[serde(rename = "3")]
    pub standard: String,

    #[serde(rename = "4")]
    pub premium: String,
}

impl TermPrices {
    fn get(&self, jugs: JugCount) -> &str {
        match jugs {
            JugCount::Two => &self.base,
            JugCount::Three => &self.standard,
            JugCount::Four => &self.premium,
        }
    }
}

/// Canonical term × jug count → price identifier table
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceTable {
    pub semester: TermPrices,
    pub full_year: TermPrices,
}

impl Default for PriceTable {
    fn default() -> Self {
        Self::fallback()
    }
}

impl PriceTable {
    /// The embedded identifiers used when no override is configured
    pub fn fallback() -> Self {
        Self {
            semester: TermPrices {
                base: "price_1T4vFcJavtxDPv9qACaBc8tv".into(),
                standard: "price_1T4vFdJavtxDPv9qlDxe7AIR".into(),
                premium: "price_1T4vFdJavtxDPv9qtSfzptte".into(),
            },
            full_year: TermPrices {
                base: "price_1T4vFiJavtxDPv9qMGYGuCHu".into(),
                standard: "price_1T4vFcJavtxDPv9q1IFPEu67".into(),
                premium: "price_1T4vFcJavtxDPv9qT6tQTFrG".into(),
            },
        }
    }

    /// Build the table from process environment variables with `prefix`
    pub fn from_env(prefix: &str) -> Self {
        Self::from_lookup(prefix, |key| std::env::var(key).ok())
    }

    /// Build the table from an arbitrary key lookup (used by `from_env`)
    pub fn from_lookup<F>(prefix: &str, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut table = Self::fallback();

        for plan in SubscriptionPlan::all() {
            let key = format!("{prefix}{}", Self::env_suffix(plan));
            if let Some(value) = lookup(&key).filter(|v| !v.trim().is_empty()) {
                tracing::debug!(%key, "Price identifier overridden from environment");
                *table.slot_mut(plan) = value;
            }
        }

        table
    }

    /// Environment variable suffix for a plan (`SEMESTER_BASE`, `YEAR_PREMIUM`, ...)
    pub fn env_suffix(plan: SubscriptionPlan) -> &'static str {
        match (plan.term, plan.jugs) {
            (Term::Semester, JugCount::Two) => "SEMESTER_BASE",
            (Term::Semester, JugCount::Three) => "SEMESTER_STANDARD",
            (Term::Semester, JugCount::Four) => "SEMESTER_PREMIUM",
            (Term::FullYear, JugCount::Two) => "YEAR_BASE",
            (Term::FullYear, JugCount::Three) => "YEAR_STANDARD",
            (Term::FullYear, JugCount::Four) => "YEAR_PREMIUM",
        }
    }

    /// Price identifier for a plan
    pub fn price_id(&self, plan: SubscriptionPlan) -> &str {
        self.term(plan.term).get(plan.jugs)
    }

    /// Resolve raw `term` / `jugs` query values, defaulting to semester / 2.
    ///
    /// Returns `None` when either value is present but not a valid choice.
    pub fn lookup(&self, term: Option<&str>, jugs: Option<&str>) -> Option<&str> {
        let term = term.map_or(Ok(Term::Semester), str::parse).ok()?;
        let jugs = jugs.map_or(Ok(JugCount::Two), str::parse).ok()?;
        Some(self.price_id(SubscriptionPlan::new(term, jugs)))
    }

    /// The allow-list: all six identifiers, semester first
    pub fn allowed(&self) -> Vec<&str> {
        SubscriptionPlan::all().map(|plan| self.price_id(plan)).collect()
    }

    /// Whether `price_id` is one of the six configured identifiers
    pub fn contains(&self, price_id: &str) -> bool {
        SubscriptionPlan::all().any(|plan| self.price_id(plan) == price_id)
    }

    /// Reverse lookup from identifier to plan
    pub fn plan_for(&self, price_id: &str) -> Option<SubscriptionPlan> {
        SubscriptionPlan::all().find(|plan| self.price_id(*plan) == price_id)
    }

    fn term(&self, term: Term) -> &TermPrices {
        match term {
            Term::Semester => &self.semester,
            Term::FullYear => &self.full_year,
        }
    }

    fn slot_mut(&mut self, plan: SubscriptionPlan) -> &mut String {
        let prices = match plan.term {
            Term::Semester => &mut self.semester,
            Term::FullYear => &mut self.full_year,
        };
        match plan.jugs {
            JugCount::Two => &mut prices.base,
            JugCount::Three => &mut prices.standard,
            JugCount::Four => &mut prices.premium,
        }
    }
}
