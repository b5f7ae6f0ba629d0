//! Subscription Plans
//!
//! A plan is a term (semester or full school year) and a monthly jug count.
//! Display prices use `rust_decimal` - never use f64 for money!

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::PlanError;

/// Subscription duration
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Term {
    Semester,
    #[default]
    FullYear,
}

impl Term {
    pub const ALL: [Self; 2] = [Self::Semester, Self::FullYear];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Semester => "semester",
            Self::FullYear => "full-year",
        }
    }

    /// Short label used in summaries ("Semester", "Full year")
    pub const fn label(self) -> &'static str {
        match self {
            Self::Semester => "Semester",
            Self::FullYear => "Full year",
        }
    }

    /// Heading used on the plan cards
    pub const fn long_label(self) -> &'static str {
        match self {
            Self::Semester => "Single semester",
            Self::FullYear => "Full year",
        }
    }
}

impl FromStr for Term {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "semester" => Ok(Self::Semester),
            "full-year" => Ok(Self::FullYear),
            other => Err(PlanError::UnknownTerm(other.to_string())),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Jugs delivered per month
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum JugCount {
    #[default]
    Two,
    Three,
    Four,
}

impl JugCount {
    pub const ALL: [Self; 3] = [Self::Two, Self::Three, Self::Four];

    pub const fn count(self) -> u8 {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
        }
    }

    /// Tier name shown on plan cards
    pub const fn tier(self) -> &'static str {
        match self {
            Self::Two => "Base",
            Self::Three => "Standard",
            Self::Four => "Premium",
        }
    }
}

impl TryFrom<u8> for JugCount {
    type Error = PlanError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            other => Err(PlanError::InvalidJugCount(other.to_string())),
        }
    }
}

impl From<JugCount> for u8 {
    fn from(jugs: JugCount) -> Self {
        jugs.count()
    }
}

impl FromStr for JugCount {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .map_err(|_| PlanError::InvalidJugCount(s.to_string()))
            .and_then(Self::try_from)
    }
}

impl fmt::Display for JugCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count())
    }
}

/// A purchasable offering
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionPlan {
    pub term: Term,

    #[serde(rename = "jugCount")]
    pub jugs: JugCount,
}

impl SubscriptionPlan {
    pub const fn new(term: Term, jugs: JugCount) -> Self {
        Self { term, jugs }
    }

    /// All six plans, semester first
    pub fn all() -> impl Iterator<Item = Self> {
        Term::ALL
            .into_iter()
            .flat_map(|term| JugCount::ALL.into_iter().map(move |jugs| Self::new(term, jugs)))
    }

    /// Advertised price in USD. Informational only: the charged amount always
    /// comes from the payment provider's price object.
    pub fn display_price(self) -> Decimal {
        match (self.term, self.jugs) {
            (Term::FullYear, JugCount::Two) => dec!(329.99),
            (Term::FullYear, JugCount::Three) => dec!(379.99),
            (Term::FullYear, JugCount::Four) => dec!(409.99),
            (Term::Semester, JugCount::Two) => dec!(249.99),
            (Term::Semester, JugCount::Three) => dec!(299.99),
            (Term::Semester, JugCount::Four) => dec!(324.99),
        }
    }

    /// Display price formatted like `$329.99`
    pub fn display_price_label(self) -> String {
        format_usd(self.display_price())
    }

    /// Deep link into the subscribe page with this plan preselected
    pub fn subscribe_href(self) -> String {
        format!("/subscribe?term={}&jugs={}#plan", self.term, self.jugs)
    }
}

/// Even per-person display price, rounded half away from zero to cents.
///
/// `None` when nobody shares the plan.
pub fn per_person_price(total: Decimal, roommates: usize) -> Option<Decimal> {
    if roommates == 0 {
        return None;
    }

    let people = Decimal::from(roommates) + Decimal::ONE;
    Some((total / people).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

/// Format a dollar amount as `$12.34`
pub fn format_usd(amount: Decimal) -> String {
    format!("${:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_parsing() {
        assert_eq!("semester".parse::<Term>().unwrap(), Term::Semester);
        assert_eq!("full-year".parse::<Term>().unwrap(), Term::FullYear);
        assert!("Semester".parse::<Term>().is_err());
        assert!("year".parse::<Term>().is_err());
    }

    #[test]
    fn test_jug_count_parsing() {
        assert_eq!("3".parse::<JugCount>().unwrap(), JugCount::Three);
        assert!("5".parse::<JugCount>().is_err());
        assert!("two".parse::<JugCount>().is_err());
        assert!(JugCount::try_from(1).is_err());
    }

    #[test]
    fn test_jug_count_serializes_as_number() {
        let json = serde_json::to_string(&SubscriptionPlan::new(Term::Semester, JugCount::Four)).unwrap();
        assert_eq!(json, r#"{"term":"semester","jugCount":4}"#);

        let bad: Result<SubscriptionPlan, _> = serde_json::from_str(r#"{"term":"semester","jugCount":7}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_all_plans() {
        let plans: Vec<_> = SubscriptionPlan::all().collect();
        assert_eq!(plans.len(), 6);
        assert_eq!(plans[0], SubscriptionPlan::new(Term::Semester, JugCount::Two));
        assert_eq!(plans[5], SubscriptionPlan::new(Term::FullYear, JugCount::Four));
    }

    #[test]
    fn test_display_prices() {
        let plan = SubscriptionPlan::default();
        assert_eq!(plan.display_price_label(), "$329.99");
        assert_eq!(
            SubscriptionPlan::new(Term::Semester, JugCount::Three).display_price_label(),
            "$299.99"
        );
    }

    #[test]
    fn test_per_person_price() {
        assert_eq!(per_person_price(dec!(329.99), 0), None);
        assert_eq!(per_person_price(dec!(329.99), 2), Some(dec!(110.00)));
        assert_eq!(per_person_price(dec!(249.99), 1), Some(dec!(125.00)));
        assert_eq!(per_person_price(dec!(409.99), 3), Some(dec!(102.50)));
    }

    #[test]
    fn test_subscribe_href() {
        let plan = SubscriptionPlan::new(Term::Semester, JugCount::Three);
        assert_eq!(plan.subscribe_href(), "/subscribe?term=semester&jugs=3#plan");
    }
}
