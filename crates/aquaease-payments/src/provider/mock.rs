//! Mock Payment Provider
//!
//! For testing and local demos. Records calls and hands out deterministic
//! ids; can be told to fail the n-th call of an operation.
//!
//! Only the most recent [`MAX_RECORDED_CALLS`] calls are kept so a long-running
//! demo server does not grow without bound. Per-operation counters keep
//! counting past the cap, so ids stay unique.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use super::{
    NewCustomer, NewPaymentIntent, NewPrice, PaymentProvider, ProviderPaymentIntent,
    ProviderPaymentLink, ProviderPrice,
};
use crate::error::{PaymentError, Result};

/// Calls kept in the log; older ones are dropped first
pub const MAX_RECORDED_CALLS: usize = 1024;

const OPERATIONS: usize = 5;

/// Provider operations, for failure injection and call counting
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    CreateCustomer,
    RetrievePrice,
    CreatePaymentIntent,
    CreatePrice,
    CreatePaymentLink,
}

impl Operation {
    const fn name(self) -> &'static str {
        match self {
            Self::CreateCustomer => "create_customer",
            Self::RetrievePrice => "retrieve_price",
            Self::CreatePaymentIntent => "create_payment_intent",
            Self::CreatePrice => "create_price",
            Self::CreatePaymentLink => "create_payment_link",
        }
    }
}

/// A recorded provider call
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MockCall {
    CreateCustomer(NewCustomer),
    RetrievePrice(String),
    CreatePaymentIntent(NewPaymentIntent),
    CreatePrice(NewPrice),
    CreatePaymentLink(String),
}

impl MockCall {
    pub const fn operation(&self) -> Operation {
        match self {
            Self::CreateCustomer(_) => Operation::CreateCustomer,
            Self::RetrievePrice(_) => Operation::RetrievePrice,
            Self::CreatePaymentIntent(_) => Operation::CreatePaymentIntent,
            Self::CreatePrice(_) => Operation::CreatePrice,
            Self::CreatePaymentLink(_) => Operation::CreatePaymentLink,
        }
    }
}

#[derive(Clone, Debug)]
struct Failure {
    operation: Operation,
    nth: usize,
    message: Option<String>,
}

#[derive(Default)]
struct Log {
    calls: VecDeque<MockCall>,
    counts: [usize; OPERATIONS],
}

/// In-memory provider with a single fixed unit amount for every price
pub struct MockProvider {
    unit_amount: Option<i64>,
    currency: String,
    failure: Option<Failure>,
    log: Mutex<Log>,
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockProvider {
    /// Every retrieved price costs $329.99
    pub fn new() -> Self {
        Self {
            unit_amount: Some(32999),
            currency: "usd".into(),
            failure: None,
            log: Mutex::new(Log::default()),
        }
    }

    /// Currency returned by `retrieve_price`
    #[must_use]
    pub fn with_currency(mut self, currency: &str) -> Self {
        self.currency = currency.to_string();
        self
    }

    /// Unit amount returned by `retrieve_price` (`None` = no fixed amount)
    #[must_use]
    pub fn with_unit_amount(mut self, unit_amount: Option<i64>) -> Self {
        self.unit_amount = unit_amount;
        self
    }

    /// Fail the `nth` (1-based) call of `operation`
    #[must_use]
    pub fn failing_on(mut self, operation: Operation, nth: usize, message: Option<&str>) -> Self {
        self.failure = Some(Failure {
            operation,
            nth,
            message: message.map(ToString::to_string),
        });
        self
    }

    /// Recorded calls, oldest first (at most [`MAX_RECORDED_CALLS`])
    pub fn calls(&self) -> Vec<MockCall> {
        self.lock().calls.iter().cloned().collect()
    }

    /// Number of calls made to `operation`, including ones no longer in the log
    pub fn count(&self, operation: Operation) -> usize {
        self.lock().counts[operation as usize]
    }

    fn lock(&self) -> MutexGuard<'_, Log> {
        self.log.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record the call and return its 1-based sequence number for that operation
    fn record(&self, call: MockCall) -> Result<usize> {
        let operation = call.operation();
        let mut log = self.lock();
        if log.calls.len() == MAX_RECORDED_CALLS {
            log.calls.pop_front();
        }
        log.calls.push_back(call);
        log.counts[operation as usize] += 1;
        let nth = log.counts[operation as usize];
        drop(log);

        match &self.failure {
            Some(f) if f.operation == operation && f.nth == nth => Err(PaymentError::Provider {
                operation: operation.name(),
                message: f.message.clone(),
            }),
            _ => Ok(nth),
        }
    }
}

#[async_trait]
impl PaymentProvider for MockProvider {
    async fn create_customer(&self, customer: &NewCustomer) -> Result<String> {
        let n = self.record(MockCall::CreateCustomer(customer.clone()))?;
        Ok(format!("cus_mock_{n}"))
    }

    async fn retrieve_price(&self, price_id: &str) -> Result<ProviderPrice> {
        self.record(MockCall::RetrievePrice(price_id.to_string()))?;
        Ok(ProviderPrice {
            id: price_id.to_string(),
            unit_amount: self.unit_amount,
            currency: self.currency.clone(),
        })
    }

    async fn create_payment_intent(&self, intent: &NewPaymentIntent) -> Result<ProviderPaymentIntent> {
        let n = self.record(MockCall::CreatePaymentIntent(intent.clone()))?;
        Ok(ProviderPaymentIntent {
            id: format!("pi_mock_{n}"),
            client_secret: Some(format!("pi_mock_{n}_secret_mock")),
        })
    }

    async fn create_price(&self, price: &NewPrice) -> Result<ProviderPrice> {
        let n = self.record(MockCall::CreatePrice(price.clone()))?;
        Ok(ProviderPrice {
            id: format!("price_mock_{n}"),
            unit_amount: Some(price.unit_amount),
            currency: price.currency.clone(),
        })
    }

    async fn create_payment_link(&self, price_id: &str) -> Result<ProviderPaymentLink> {
        let n = self.record(MockCall::CreatePaymentLink(price_id.to_string()))?;
        Ok(ProviderPaymentLink {
            id: format!("plink_mock_{n}"),
            url: format!("https://buy.stripe.com/test_mock_{n}"),
        })
    }

    fn name(&self) -> &str {
        "MockProvider"
    }
}
