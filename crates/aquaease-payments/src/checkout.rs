//! Split Checkout
//!
//! Turns one [`SplitRequest`] into a primary payment intent plus one
//! shareable payment link per active roommate.

use std::sync::Arc;

use aquaease_core::{active_roommates, PriceTable, RoommateLink, Split, SplitRequest, SplitResponse};

use crate::error::{PaymentError, Result};
use crate::provider::{NewCustomer, NewPaymentIntent, NewPrice, PaymentProvider};

/// Product name on the per-roommate prices
pub const ROOMMATE_PRODUCT_NAME: &str = "AquaEase – Roommate Share";

/// Checkout orchestrator
pub struct SplitCheckout {
    provider: Arc<dyn PaymentProvider>,
    prices: PriceTable,
}

/// Result of a successful split checkout
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitOutcome {
    /// Correlation id stamped on every provider object of this request
    pub checkout_id: String,
    pub split: Split,
    pub client_secret: String,

    /// One per active roommate, in submission order
    pub roommate_links: Vec<RoommateLink>,
}

impl SplitOutcome {
    /// Response body; the links field is omitted when nobody shares
    pub fn into_response(self) -> SplitResponse {
        SplitResponse {
            client_secret: self.client_secret,
            roommate_payment_links: (!self.roommate_links.is_empty()).then_some(self.roommate_links),
        }
    }
}

/// Whitespace-only values count as missing
fn present(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.trim().is_empty())
}

/// The fields of a request that passed [`validate`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidRequest<'a> {
    pub price_id: &'a str,
    pub name: &'a str,
    pub email: &'a str,
}

/// Check a split request against the allow-list: price first, then contact.
///
/// Needs no provider, so callers can reject bad input even when payments
/// are not configured.
pub fn validate<'a>(prices: &PriceTable, request: &'a SplitRequest) -> Result<ValidRequest<'a>> {
    let price_id = present(request.price_id.as_ref())
        .filter(|id| prices.contains(id))
        .ok_or_else(|| {
            let allowed = prices.allowed();
            tracing::warn!(price_id = ?request.price_id, ?allowed, "Price not on the allow-list");
            PaymentError::InvalidPrice {
                price_id: request.price_id.clone(),
                allowed: allowed.into_iter().map(str::to_string).collect(),
            }
        })?;

    match (present(request.name.as_ref()), present(request.email.as_ref())) {
        (Some(name), Some(email)) => Ok(ValidRequest { price_id, name, email }),
        _ => Err(PaymentError::MissingCustomerFields),
    }
}

impl SplitCheckout {
    pub fn new(provider: Arc<dyn PaymentProvider>, prices: PriceTable) -> Self {
        Self { provider, prices }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Run the split checkout.
    ///
    /// Provider calls are sequential and stop at the first failure; objects
    /// created before it are left in place.
    pub async fn create(&self, request: SplitRequest) -> Result<SplitOutcome> {
        let ValidRequest { price_id, name, email } = validate(&self.prices, &request)?;
        let checkout_id = uuid::Uuid::new_v4().to_string();

        let roommates = active_roommates(request.roommates.as_deref().unwrap_or_default());

        tracing::info!(
            %checkout_id,
            %price_id,
            plan = ?self.prices.plan_for(price_id),
            roommates = roommates.len(),
            provider = self.provider.name(),
            "Starting split checkout"
        );

        let price = self.provider.retrieve_price(price_id).await?;
        let split = price
            .unit_amount
            .and_then(|amount| Split::even(amount, roommates.len()))
            .ok_or(PaymentError::PriceUnavailable)?;

        tracing::debug!(
            %checkout_id,
            unit_amount = split.unit_amount,
            primary_amount = split.primary_amount,
            share_amount = split.share_amount,
            currency = %price.currency,
            "Computed split"
        );

        let customer_id = self
            .provider
            .create_customer(&NewCustomer {
                email: email.to_string(),
                name: name.to_string(),
                phone: present(request.phone.as_ref()).map(str::to_string),
                checkout_id: checkout_id.clone(),
            })
            .await?;

        let intent = self
            .provider
            .create_payment_intent(&NewPaymentIntent {
                amount: split.primary_amount,
                currency: price.currency.clone(),
                customer_id,
                checkout_id: checkout_id.clone(),
            })
            .await?;

        let client_secret = intent.client_secret.ok_or_else(|| {
            PaymentError::provider("create_payment_intent", "Payment intent has no client secret.")
        })?;

        let mut roommate_links = Vec::with_capacity(roommates.len());
        for roommate in &roommates {
            let share_price = self
                .provider
                .create_price(&NewPrice {
                    unit_amount: split.share_amount,
                    currency: price.currency.clone(),
                    product_name: ROOMMATE_PRODUCT_NAME.to_string(),
                    checkout_id: checkout_id.clone(),
                })
                .await
                .inspect_err(|_| {
                    tracing::warn!(
                        %checkout_id,
                        created_links = roommate_links.len(),
                        "Roommate price failed; earlier objects were not rolled back"
                    );
                })?;

            let link = self
                .provider
                .create_payment_link(&share_price.id)
                .await
                .inspect_err(|_| {
                    tracing::warn!(
                        %checkout_id,
                        created_links = roommate_links.len(),
                        "Roommate link failed; earlier objects were not rolled back"
                    );
                })?;

            roommate_links.push(RoommateLink {
                name: roommate.name.clone(),
                url: link.url,
            });
        }

        tracing::info!(
            %checkout_id,
            primary_amount = split.primary_amount,
            links = roommate_links.len(),
            "Split checkout created"
        );

        Ok(SplitOutcome {
            checkout_id,
            split,
            client_secret,
            roommate_links,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{MockCall, MockProvider, Operation};
    use aquaease_core::{JugCount, Roommate, SubscriptionPlan, Term};

    fn request(roommates: Vec<Roommate>) -> SplitRequest {
        let plan = SubscriptionPlan::new(Term::FullYear, JugCount::Two);
        SplitRequest {
            price_id: Some(PriceTable::fallback().price_id(plan).to_string()),
            email: Some("jordan@school.edu".into()),
            name: Some("Jordan Rivera".into()),
            phone: Some("(239) 555-0123".into()),
            roommates: Some(roommates),
        }
    }

    fn checkout(provider: &Arc<MockProvider>) -> SplitCheckout {
        SplitCheckout::new(provider.clone(), PriceTable::fallback())
    }

    #[tokio::test]
    async fn test_two_roommates() {
        let provider = Arc::new(MockProvider::new());
        let outcome = checkout(&provider)
            .create(request(vec![
                Roommate::new("Sam", "sam@school.edu"),
                Roommate::new("", ""),
                Roommate::new("Alex", ""),
            ]))
            .await
            .unwrap();

        assert_eq!(outcome.split.primary_amount, 11001);
        assert_eq!(outcome.split.share_amount, 10999);
        assert_eq!(outcome.client_secret, "pi_mock_1_secret_mock");
        assert_eq!(outcome.roommate_links.len(), 2);
        assert_eq!(outcome.roommate_links[0].name, "Sam");
        assert_eq!(outcome.roommate_links[1].name, "Alex");

        let calls = provider.calls();
        let intent_amount = calls.iter().find_map(|c| match c {
            MockCall::CreatePaymentIntent(i) => Some(i.amount),
            _ => None,
        });
        assert_eq!(intent_amount, Some(11001));

        let share_amounts: Vec<i64> = calls
            .iter()
            .filter_map(|c| match c {
                MockCall::CreatePrice(p) => Some(p.unit_amount),
                _ => None,
            })
            .collect();
        assert_eq!(share_amounts, vec![10999, 10999]);
        assert_eq!(provider.count(Operation::CreatePaymentLink), 2);
    }

    #[tokio::test]
    async fn test_price_currency_carried_to_every_object() {
        let provider = Arc::new(MockProvider::new().with_currency("eur"));
        checkout(&provider)
            .create(request(vec![Roommate::new("Sam", ""), Roommate::new("Alex", "")]))
            .await
            .unwrap();

        let mut seen = 0;
        for call in provider.calls() {
            match call {
                MockCall::CreatePaymentIntent(i) => {
                    assert_eq!(i.currency, "eur");
                    seen += 1;
                }
                MockCall::CreatePrice(p) => {
                    assert_eq!(p.currency, "eur");
                    seen += 1;
                }
                _ => {}
            }
        }
        assert_eq!(seen, 3);
    }

    #[test]
    fn test_validate_without_provider() {
        let prices = PriceTable::fallback();
        let valid = request(vec![]);
        let fields = validate(&prices, &valid).unwrap();
        assert_eq!(fields.name, "Jordan Rivera");
        assert_eq!(fields.email, "jordan@school.edu");

        let mut unknown = request(vec![]);
        unknown.price_id = Some("price_attacker".into());
        assert!(matches!(
            validate(&prices, &unknown),
            Err(PaymentError::InvalidPrice { .. })
        ));
    }

    #[tokio::test]
    async fn test_provider_name() {
        let provider = Arc::new(MockProvider::new());
        assert_eq!(checkout(&provider).provider_name(), "MockProvider");
    }

    #[tokio::test]
    async fn test_every_call_tagged_with_checkout_id() {
        let provider = Arc::new(MockProvider::new());
        let outcome = checkout(&provider)
            .create(request(vec![Roommate::new("Sam", "")]))
            .await
            .unwrap();

        for call in provider.calls() {
            let tagged = match call {
                MockCall::CreateCustomer(c) => Some(c.checkout_id),
                MockCall::CreatePaymentIntent(i) => Some(i.checkout_id),
                MockCall::CreatePrice(p) => Some(p.checkout_id),
                MockCall::RetrievePrice(_) | MockCall::CreatePaymentLink(_) => None,
            };
            if let Some(id) = tagged {
                assert_eq!(id, outcome.checkout_id);
            }
        }
    }

    #[tokio::test]
    async fn test_no_roommates_omits_links() {
        let provider = Arc::new(MockProvider::new());
        let outcome = checkout(&provider)
            .create(request(vec![Roommate::new(" ", "")]))
            .await
            .unwrap();

        assert_eq!(outcome.split.primary_amount, 32999);
        assert_eq!(provider.count(Operation::CreatePrice), 0);

        let response = outcome.into_response();
        assert!(response.roommate_payment_links.is_none());
    }

    #[tokio::test]
    async fn test_unknown_price_never_reaches_provider() {
        let provider = Arc::new(MockProvider::new());
        let mut req = request(vec![]);
        req.price_id = Some("price_attacker_chosen".into());

        let err = checkout(&provider).create(req).await.unwrap_err();
        match err {
            PaymentError::InvalidPrice { price_id, allowed } => {
                assert_eq!(price_id.as_deref(), Some("price_attacker_chosen"));
                assert_eq!(allowed.len(), 6);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn test_missing_price_checked_before_contact() {
        let provider = Arc::new(MockProvider::new());
        let err = checkout(&provider)
            .create(SplitRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, PaymentError::InvalidPrice { price_id: None, .. }));
    }

    #[tokio::test]
    async fn test_whitespace_only_contact_counts_as_missing() {
        let provider = Arc::new(MockProvider::new());
        let mut req = request(vec![]);
        req.email = Some("   ".into());

        let err = checkout(&provider).create(req).await.unwrap_err();
        assert_eq!(err, PaymentError::MissingCustomerFields);
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn test_price_without_amount() {
        let provider = Arc::new(MockProvider::new().with_unit_amount(None));
        let err = checkout(&provider).create(request(vec![])).await.unwrap_err();
        assert_eq!(err, PaymentError::PriceUnavailable);
        assert_eq!(provider.count(Operation::CreateCustomer), 0);

        let provider = Arc::new(MockProvider::new().with_unit_amount(Some(0)));
        let err = checkout(&provider).create(request(vec![])).await.unwrap_err();
        assert_eq!(err, PaymentError::PriceUnavailable);
    }

    #[tokio::test]
    async fn test_mid_loop_failure_keeps_earlier_objects() {
        let provider = Arc::new(
            MockProvider::new().failing_on(Operation::CreatePaymentLink, 2, Some("Link quota exceeded")),
        );
        let err = checkout(&provider)
            .create(request(vec![
                Roommate::new("Sam", ""),
                Roommate::new("Alex", ""),
                Roommate::new("Riley", ""),
            ]))
            .await
            .unwrap_err();

        assert_eq!(err.user_message(), "Link quota exceeded");
        assert_eq!(provider.count(Operation::CreatePaymentIntent), 1);
        assert_eq!(provider.count(Operation::CreatePrice), 2);
        assert_eq!(provider.count(Operation::CreatePaymentLink), 2);
    }

    #[tokio::test]
    async fn test_customer_failure_without_message() {
        let provider = Arc::new(MockProvider::new().failing_on(Operation::CreateCustomer, 1, None));
        let err = checkout(&provider).create(request(vec![])).await.unwrap_err();
        assert_eq!(err.user_message(), crate::error::PROVIDER_FALLBACK_MESSAGE);
        assert_eq!(provider.count(Operation::CreatePaymentIntent), 0);
    }

    #[tokio::test]
    async fn test_repeated_requests_are_not_deduplicated() {
        let provider = Arc::new(MockProvider::new());
        let checkout = checkout(&provider);
        let first = checkout.create(request(vec![])).await.unwrap();
        let second = checkout.create(request(vec![])).await.unwrap();

        assert_ne!(first.checkout_id, second.checkout_id);
        assert_eq!(provider.count(Operation::CreateCustomer), 2);
        assert_eq!(provider.count(Operation::CreatePaymentIntent), 2);
    }
}
