//! Wire Types
//!
//! JSON bodies shared by the browser and the server. Field names are
//! camelCase on the wire.

use serde::{Deserialize, Serialize};

use crate::pricing::PriceTable;
use crate::roommate::Roommate;

/// `POST /api/stripe/create-subscription` request body.
///
/// Every field is optional at the parsing level so that missing values are
/// reported as validation errors rather than as malformed JSON.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitRequest {
    #[serde(default)]
    pub price_id: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roommates: Option<Vec<Roommate>>,
}

/// A shareable payment link for one roommate
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoommateLink {
    pub name: String,
    pub url: String,
}

/// Successful split response
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitResponse {
    /// Secret the payment element confirms the primary's payment with
    pub client_secret: String,

    /// Present only when at least one active roommate was submitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roommate_payment_links: Option<Vec<RoommateLink>>,
}

/// Error response body
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub error: String,

    /// Echo of the rejected price identifier (invalid price only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_id: Option<String>,

    /// The server allow-list (invalid price only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed: Option<Vec<String>>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            price_id: None,
            allowed: None,
        }
    }
}

/// `GET /api/config`: what the browser needs before it can take payment
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publishable_key: Option<String>,

    #[serde(default)]
    pub prices: PriceTable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_accepts_partial_body() {
        let request: SplitRequest = serde_json::from_str(r#"{"email":"a@b.edu"}"#).unwrap();
        assert_eq!(request.price_id, None);
        assert_eq!(request.email.as_deref(), Some("a@b.edu"));
        assert_eq!(request.roommates, None);
    }

    #[test]
    fn test_request_camel_case() {
        let request: SplitRequest = serde_json::from_str(
            r#"{"priceId":"price_x","name":"Jordan","email":"j@s.edu","roommates":[{"name":"Sam","email":""}]}"#,
        )
        .unwrap();
        assert_eq!(request.price_id.as_deref(), Some("price_x"));
        assert_eq!(request.roommates.unwrap().len(), 1);
    }

    #[test]
    fn test_response_omits_empty_links() {
        let response = SplitResponse {
            client_secret: "pi_123_secret_456".into(),
            roommate_payment_links: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({ "clientSecret": "pi_123_secret_456" }));
    }

    #[test]
    fn test_error_body_shape() {
        let json = serde_json::to_value(ErrorBody::new("Missing required customer fields.")).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "Missing required customer fields." }));
    }
}
