//! Payment Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, PaymentError>;

/// Shown when the provider error carries no message of its own
pub const PROVIDER_FALLBACK_MESSAGE: &str = "Payment provider request failed.";

/// Checkout errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaymentError {
    /// Price identifier missing or not on the allow-list
    #[error("Invalid price selection.")]
    InvalidPrice {
        price_id: Option<String>,
        allowed: Vec<String>,
    },

    /// Request body is not valid JSON of the expected shape
    #[error("Invalid request body: {0}")]
    InvalidRequest(String),

    /// Name or email missing
    #[error("Missing required customer fields.")]
    MissingCustomerFields,

    /// Provider price has no usable unit amount
    #[error("Unable to retrieve price amount.")]
    PriceUnavailable,

    /// A provider call failed
    #[error("{operation} failed: {}", .message.as_deref().unwrap_or(PROVIDER_FALLBACK_MESSAGE))]
    Provider {
        operation: &'static str,
        message: Option<String>,
    },

    /// Server started without provider credentials
    #[error("Payments not configured.")]
    NotConfigured,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PaymentError {
    pub fn provider(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Provider {
            operation,
            message: Some(message.into()),
        }
    }

    /// Validation errors are the caller's fault and must not be retried as-is
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidPrice { .. } | Self::InvalidRequest(_) | Self::MissingCustomerFields
        )
    }

    /// Check if this error is retryable
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Provider { .. } | Self::PriceUnavailable)
    }

    /// Message for the response body
    pub fn user_message(&self) -> String {
        match self {
            Self::Provider { message, .. } => message
                .clone()
                .unwrap_or_else(|| PROVIDER_FALLBACK_MESSAGE.to_string()),
            Self::Config(_) => "Service configuration error.".to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(feature = "axum-handlers")]
mod http {
    use aquaease_core::ErrorBody;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::Json;

    use super::PaymentError;

    impl PaymentError {
        pub const fn status(&self) -> StatusCode {
            match self {
                Self::InvalidPrice { .. } | Self::InvalidRequest(_) | Self::MissingCustomerFields => {
                    StatusCode::BAD_REQUEST
                }
                Self::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
                Self::PriceUnavailable | Self::Provider { .. } | Self::Config(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            }
        }
    }

    impl IntoResponse for PaymentError {
        fn into_response(self) -> Response {
            let status = self.status();

            if self.is_validation() {
                tracing::warn!(%status, error = %self, "Checkout rejected");
            } else {
                tracing::error!(%status, error = %self, retryable = self.is_retryable(), "Checkout failed");
            }

            let mut body = ErrorBody::new(self.user_message());
            if let Self::InvalidPrice { price_id, allowed } = self {
                body.price_id = price_id;
                body.allowed = Some(allowed);
            }

            (status, Json(body)).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_message_passthrough() {
        let err = PaymentError::provider("create_customer", "Your card was declined.");
        assert_eq!(err.user_message(), "Your card was declined.");
        assert!(err.is_retryable());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_provider_fallback_message() {
        let err = PaymentError::Provider {
            operation: "create_payment_link",
            message: None,
        };
        assert_eq!(err.user_message(), PROVIDER_FALLBACK_MESSAGE);
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            PaymentError::MissingCustomerFields.user_message(),
            "Missing required customer fields."
        );
        let invalid = PaymentError::InvalidPrice {
            price_id: None,
            allowed: vec![],
        };
        assert_eq!(invalid.user_message(), "Invalid price selection.");
        assert!(invalid.is_validation());
        assert!(!invalid.is_retryable());
    }

    #[test]
    fn test_invalid_request_is_validation() {
        let err = PaymentError::InvalidRequest("expected value at line 1 column 1".into());
        assert!(err.is_validation());
        assert!(!err.is_retryable());
        assert_eq!(
            err.user_message(),
            "Invalid request body: expected value at line 1 column 1"
        );
    }

    #[cfg(feature = "axum-handlers")]
    #[test]
    fn test_status_codes() {
        use axum::http::StatusCode;

        assert_eq!(
            PaymentError::InvalidRequest(String::new()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(PaymentError::MissingCustomerFields.status(), StatusCode::BAD_REQUEST);
        assert_eq!(PaymentError::NotConfigured.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            PaymentError::PriceUnavailable.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
