//! Client Checkout Flow
//!
//! Stage machine behind the checkout form. It holds no browser handles, so
//! the transitions can be tested natively; the web crate drives it.

use crate::builder::CheckoutHandoff;
use crate::pricing::PriceTable;
use crate::roommate::{active_roommates, Roommate};
use crate::wire::{RoommateLink, SplitRequest, SplitResponse};

/// Shown when a failure carries no message of its own
pub const PAYMENT_ERROR_FALLBACK: &str = "Payment error.";

pub const MISSING_PUBLISHABLE_KEY: &str = "Missing Stripe publishable key.";
pub const MISSING_PRICE: &str = "Missing price configuration for this plan.";

/// Where the checkout is in its lifecycle
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CheckoutStage {
    /// Collecting name, email and phone
    #[default]
    Contact,

    /// Split request in flight
    Starting,

    /// Payment element mounted with this client secret
    Payment(String),

    /// Confirmation reported success
    Paid,
}

/// Contact fields on the stand-alone checkout
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Checkout state for one page visit
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckoutState {
    pub stage: CheckoutStage,
    pub price_id: Option<String>,
    pub contact: ContactForm,
    pub building: String,
    pub room: String,
    pub roommates: Vec<Roommate>,

    /// Started from the plan builder; the contact stage is skipped
    pub auto_start: bool,
    pub roommate_links: Vec<RoommateLink>,
    pub error: Option<String>,
}

impl CheckoutState {
    /// Stand-alone checkout priced from `?term=&jugs=` (defaults semester / 2)
    pub fn from_query(prices: &PriceTable, term: Option<&str>, jugs: Option<&str>) -> Self {
        Self {
            price_id: prices.lookup(term, jugs).map(str::to_string),
            ..Self::default()
        }
    }

    /// Checkout entered from the plan builder
    pub fn from_handoff(handoff: CheckoutHandoff) -> Self {
        Self {
            price_id: Some(handoff.price_id).filter(|id| !id.is_empty()),
            contact: ContactForm {
                name: handoff.name,
                email: handoff.email,
                phone: String::new(),
            },
            building: handoff.building,
            room: handoff.room,
            roommates: active_roommates(&handoff.roommates),
            auto_start: true,
            ..Self::default()
        }
    }

    /// Static error that replaces the payment UI, if any
    pub fn blocking_error(&self, publishable_key: Option<&str>) -> Option<&'static str> {
        if self.stage == CheckoutStage::Paid {
            return None;
        }
        if publishable_key.is_none_or(|key| key.trim().is_empty()) {
            return Some(MISSING_PUBLISHABLE_KEY);
        }
        if self.price_id.is_none() {
            return Some(MISSING_PRICE);
        }
        None
    }

    /// "Continue to payment" is enabled
    pub fn can_start(&self) -> bool {
        self.stage == CheckoutStage::Contact
            && !self.contact.name.trim().is_empty()
            && !self.contact.email.trim().is_empty()
            && self.price_id.is_some()
    }

    /// Move to `Starting` and build the request body, or `None` if not ready
    pub fn start(&mut self) -> Option<SplitRequest> {
        if !self.can_start() {
            return None;
        }

        self.stage = CheckoutStage::Starting;
        self.error = None;

        Some(SplitRequest {
            price_id: self.price_id.clone(),
            email: Some(self.contact.email.clone()),
            name: Some(self.contact.name.clone()),
            phone: Some(self.contact.phone.clone()),
            roommates: Some(self.roommates.clone()),
        })
    }

    /// Apply the split response (or its error)
    pub fn started(&mut self, result: Result<SplitResponse, String>) {
        match result {
            Ok(response) => {
                self.roommate_links = response.roommate_payment_links.unwrap_or_default();
                self.stage = CheckoutStage::Payment(response.client_secret);
            }
            Err(message) => {
                self.error = Some(error_message(message));
                self.stage = CheckoutStage::Contact;
            }
        }
    }

    pub fn client_secret(&self) -> Option<&str> {
        match &self.stage {
            CheckoutStage::Payment(secret) => Some(secret),
            _ => None,
        }
    }

    /// Apply the confirmation result. A failure leaves the payment element
    /// in place so the user can retry.
    pub fn confirmed(&mut self, result: Result<(), String>) {
        match result {
            Ok(()) => {
                self.error = None;
                self.stage = CheckoutStage::Paid;
            }
            Err(message) => self.error = Some(error_message(message)),
        }
    }
}

fn error_message(message: String) -> String {
    if message.trim().is_empty() {
        PAYMENT_ERROR_FALLBACK.to_string()
    } else {
        message
    }
}

/// Return URL handed to the payment provider on confirmation
pub fn return_url(origin: &str) -> String {
    format!("{}/checkout?success=1", origin.trim_end_matches('/'))
}

/// Heading above a roommate's link in the paid view
pub fn share_heading(link: &RoommateLink) -> String {
    let name = link.name.trim();
    if name.is_empty() {
        "Send this to your roommate".to_string()
    } else {
        format!("Send this to {name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::{JugCount, SubscriptionPlan, Term};

    fn handoff() -> CheckoutHandoff {
        CheckoutHandoff {
            plan: SubscriptionPlan::new(Term::Semester, JugCount::Three),
            price_id: "price_semester_standard".into(),
            name: "Jordan Rivera".into(),
            email: "jordan@school.edu".into(),
            building: "SoVi".into(),
            room: "B-204".into(),
            roommates: vec![Roommate::new("Sam", ""), Roommate::new(" ", "")],
        }
    }

    #[test]
    fn test_standalone_defaults_to_semester_base() {
        let prices = PriceTable::fallback();
        let state = CheckoutState::from_query(&prices, None, None);
        assert_eq!(
            state.price_id.as_deref(),
            Some(prices.price_id(SubscriptionPlan::new(Term::Semester, JugCount::Two)))
        );
        assert_eq!(state.stage, CheckoutStage::Contact);
        assert!(!state.auto_start);
    }

    #[test]
    fn test_standalone_invalid_query_has_no_price() {
        let state = CheckoutState::from_query(&PriceTable::fallback(), Some("decade"), Some("2"));
        assert_eq!(state.blocking_error(Some("pk_test")), Some(MISSING_PRICE));
    }

    #[test]
    fn test_missing_publishable_key_blocks_first() {
        let state = CheckoutState::from_query(&PriceTable::fallback(), Some("decade"), None);
        assert_eq!(state.blocking_error(None), Some(MISSING_PUBLISHABLE_KEY));
        assert_eq!(state.blocking_error(Some("  ")), Some(MISSING_PUBLISHABLE_KEY));
    }

    #[test]
    fn test_can_start_requires_contact() {
        let mut state = CheckoutState::from_query(&PriceTable::fallback(), None, None);
        assert!(!state.can_start());
        assert!(state.start().is_none());

        state.contact.name = "Jordan".into();
        state.contact.email = "jordan@school.edu".into();
        assert!(state.can_start());
    }

    #[test]
    fn test_handoff_start_request() {
        let mut state = CheckoutState::from_handoff(handoff());
        assert!(state.auto_start);
        assert_eq!(state.roommates.len(), 1);

        let request = state.start().unwrap();
        assert_eq!(state.stage, CheckoutStage::Starting);
        assert_eq!(request.price_id.as_deref(), Some("price_semester_standard"));
        assert_eq!(request.name.as_deref(), Some("Jordan Rivera"));
        assert_eq!(request.phone.as_deref(), Some(""));
        assert_eq!(request.roommates.unwrap(), vec![Roommate::new("Sam", "")]);

        // In flight: a second start is ignored
        assert!(state.start().is_none());
    }

    #[test]
    fn test_split_success_then_paid() {
        let mut state = CheckoutState::from_handoff(handoff());
        state.start();
        state.started(Ok(SplitResponse {
            client_secret: "pi_1_secret".into(),
            roommate_payment_links: Some(vec![RoommateLink {
                name: "Sam".into(),
                url: "https://buy.stripe.com/test_1".into(),
            }]),
        }));
        assert_eq!(state.client_secret(), Some("pi_1_secret"));
        assert_eq!(state.roommate_links.len(), 1);

        state.confirmed(Err("Your card was declined.".into()));
        assert_eq!(state.error.as_deref(), Some("Your card was declined."));
        assert_eq!(state.client_secret(), Some("pi_1_secret"));

        state.confirmed(Ok(()));
        assert_eq!(state.stage, CheckoutStage::Paid);
        assert!(state.error.is_none());
        assert_eq!(state.blocking_error(None), None);
    }

    #[test]
    fn test_split_failure_returns_to_contact() {
        let mut state = CheckoutState::from_handoff(handoff());
        state.start();
        state.started(Err(String::new()));
        assert_eq!(state.stage, CheckoutStage::Contact);
        assert_eq!(state.error.as_deref(), Some(PAYMENT_ERROR_FALLBACK));
        assert!(state.can_start());
    }

    #[test]
    fn test_return_url_and_headings() {
        assert_eq!(return_url("https://aquaease.app/"), "https://aquaease.app/checkout?success=1");

        let named = RoommateLink { name: "Sam".into(), url: String::new() };
        let unnamed = RoommateLink { name: " ".into(), url: String::new() };
        assert_eq!(share_heading(&named), "Send this to Sam");
        assert_eq!(share_heading(&unnamed), "Send this to your roommate");
    }
}
