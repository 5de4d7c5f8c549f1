//! Gateway checkout rules: building the initiate request and reading the
//! query string the gateway sends the user back with.

use iga_shared::dto::{CoursePaymentRequest, DEFAULT_CURRENCY, PaymentVerificationRequest};

pub const CALLBACK_PATH: &str = "/payment/callback";
pub const WEBHOOK_PATH: &str = "/payment/webhook";

/// Who is paying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerInfo {
    pub email: String,
    pub phone_number: String,
    pub name: String,
}

/// Initiate request for `course_id`, with redirect URLs on `origin`.
pub fn build_payment_request(
    origin: &str,
    course_id: &str,
    amount: f64,
    customer: &CustomerInfo,
) -> CoursePaymentRequest {
    let origin = origin.trim_end_matches('/');
    CoursePaymentRequest {
        course_id: course_id.to_string(),
        amount,
        currency: DEFAULT_CURRENCY.to_string(),
        email: customer.email.clone(),
        phone_number: customer.phone_number.clone(),
        name: customer.name.clone(),
        redirect_url: format!("{origin}{CALLBACK_PATH}"),
        callback_url: Some(format!("{origin}{WEBHOOK_PATH}")),
        description: Some(format!("Payment for course {course_id}")),
    }
}

/// Query parameters of the gateway callback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallbackParams {
    pub transaction_id: Option<String>,
    pub payment_reference: Option<String>,
    pub status: Option<String>,
    pub error: Option<String>,
}

/// What the callback handler should do next.
#[derive(Debug, Clone, PartialEq)]
pub enum CallbackDecision {
    GatewayError(String),
    InvalidParameters,
    Failed(String),
    Verify(PaymentVerificationRequest),
}

impl CallbackParams {
    /// Parse a raw query string, with or without the leading `?`.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs: Vec<(String, String)> = url::form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();

        let first = |keys: &[&str]| {
            keys.iter().find_map(|key| {
                pairs
                    .iter()
                    .find(|(name, value)| name == key && !value.trim().is_empty())
                    .map(|(_, value)| value.clone())
            })
        };

        Self {
            transaction_id: first(&["transaction_id", "tx_ref", "payment_reference"]),
            payment_reference: first(&["payment_reference", "tx_ref", "reference"]),
            status: first(&["status"]),
            error: first(&["error"]),
        }
    }

    pub fn decide(&self) -> CallbackDecision {
        if let Some(error) = &self.error {
            return CallbackDecision::GatewayError(error.clone());
        }

        let (Some(transaction_id), Some(payment_reference)) =
            (&self.transaction_id, &self.payment_reference)
        else {
            return CallbackDecision::InvalidParameters;
        };

        if let Some(status) = &self.status {
            let lowered = status.to_ascii_lowercase();
            if lowered == "failed" || lowered == "cancelled" {
                return CallbackDecision::Failed(lowered);
            }
        }

        CallbackDecision::Verify(PaymentVerificationRequest {
            transaction_id: transaction_id.clone(),
            payment_reference: payment_reference.clone(),
            status: self.status.clone(),
            amount: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer() -> CustomerInfo {
        CustomerInfo {
            email: "ada@example.com".into(),
            phone_number: "+250780000000".into(),
            name: "Ada".into(),
        }
    }

    #[test]
    fn test_payment_request_urls() {
        let req = build_payment_request("https://iga.example/", "c-42", 25000.0, &customer());

        assert_eq!(req.redirect_url, "https://iga.example/payment/callback");
        assert_eq!(req.callback_url.as_deref(), Some("https://iga.example/payment/webhook"));
        assert_eq!(req.currency, "RWF");
        assert_eq!(req.description.as_deref(), Some("Payment for course c-42"));
    }

    #[test]
    fn test_parse_prefers_transaction_id() {
        let params = CallbackParams::parse("?status=successful&tx_ref=ref-1&transaction_id=99");
        assert_eq!(params.transaction_id.as_deref(), Some("99"));
        assert_eq!(params.payment_reference.as_deref(), Some("ref-1"));
        assert_eq!(params.status.as_deref(), Some("successful"));
    }

    #[test]
    fn test_parse_reference_fallbacks() {
        let params = CallbackParams::parse("reference=r9&payment_reference=");
        assert_eq!(params.payment_reference.as_deref(), Some("r9"));
        assert_eq!(params.transaction_id, None);
    }

    #[test]
    fn test_decisions() {
        assert_eq!(
            CallbackParams::parse("error=card%20declined").decide(),
            CallbackDecision::GatewayError("card declined".into())
        );
        assert_eq!(
            CallbackParams::parse("status=successful").decide(),
            CallbackDecision::InvalidParameters
        );
        assert_eq!(
            CallbackParams::parse("status=CANCELLED&transaction_id=1&tx_ref=r").decide(),
            CallbackDecision::Failed("cancelled".into())
        );

        match CallbackParams::parse("status=successful&transaction_id=1&tx_ref=r").decide() {
            CallbackDecision::Verify(req) => {
                assert_eq!(req.transaction_id, "1");
                assert_eq!(req.payment_reference, "r");
                assert_eq!(req.status.as_deref(), Some("successful"));
            }
            other => panic!("expected verify, got {other:?}"),
        }
    }
}
