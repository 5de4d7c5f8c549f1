//! Gateway checkout: initiate and redirect, then verify on return.
//!
//! There are no retries. The callback verifies at most once and that answer
//! is final.

use std::sync::Arc;

use serde::Serialize;

use iga_core::domain::payment::{CallbackDecision, CallbackParams, CustomerInfo, build_payment_request};
use iga_core::ports::{ClientEvent, Navigator};
use iga_shared::dto::{CoursePaymentRequest, PaymentResponse};

use crate::context::ClientContext;
use crate::student::StudentApi;

const INITIATION_FAILED: &str = "Payment initiation failed";

/// How a gateway callback ended.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "camelCase")]
pub enum CallbackOutcome {
    /// The gateway reported an error itself.
    GatewayError(String),
    /// Transaction id or payment reference missing.
    InvalidParameters,
    /// The gateway said failed or cancelled; nothing was verified.
    Failed(String),
    /// Backend confirmed the payment.
    Verified(PaymentResponse),
    VerificationFailed(String),
}

impl CallbackOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CallbackOutcome::Verified(_))
    }
}

#[derive(Clone)]
pub struct CheckoutFlow {
    student: StudentApi,
    navigator: Arc<dyn Navigator>,
}

impl CheckoutFlow {
    pub fn new(ctx: ClientContext) -> Self {
        Self {
            navigator: ctx.navigator.clone(),
            student: StudentApi::new(ctx),
        }
    }

    /// Initiate request with redirect URLs on the navigator's origin.
    pub fn payment_request(
        &self,
        course_id: &str,
        amount: f64,
        customer: &CustomerInfo,
    ) -> CoursePaymentRequest {
        build_payment_request(&self.navigator.origin(), course_id, amount, customer)
    }

    /// Initiate the payment and navigate to the gateway. Failures go to
    /// `on_error`; the link navigated to is returned.
    pub async fn start_checkout(
        &self,
        course_id: &str,
        amount: f64,
        customer: &CustomerInfo,
        on_error: impl FnOnce(String),
    ) -> Option<String> {
        let request = self.payment_request(course_id, amount, customer);

        match self.student.initiate_payment(&request).await {
            Ok(response) => match response.checkout_link() {
                Some(link) => {
                    tracing::info!(course_id, reference = ?response.payment_reference, "Redirecting to payment gateway");
                    self.navigator.navigate(link);
                    Some(link.to_string())
                }
                None => {
                    let message = response
                        .message
                        .filter(|m| !m.trim().is_empty())
                        .unwrap_or_else(|| "Failed to initiate payment".to_string());
                    tracing::warn!(course_id, message = %message, "No payment link returned");
                    on_error(message);
                    None
                }
            },
            Err(e) => {
                tracing::error!(course_id, error = %e, "Payment initiation failed");
                let message = e.to_string();
                on_error(if message.is_empty() {
                    INITIATION_FAILED.to_string()
                } else {
                    message
                });
                None
            }
        }
    }

    /// Handle the gateway's return query string.
    pub async fn handle_callback(&self, query: &str) -> CallbackOutcome {
        let params = CallbackParams::parse(query);

        let request = match params.decide() {
            CallbackDecision::GatewayError(error) => {
                tracing::warn!(error = %error, "Gateway returned an error");
                return CallbackOutcome::GatewayError(error);
            }
            CallbackDecision::InvalidParameters => {
                tracing::warn!(query, "Payment callback missing identifiers");
                return CallbackOutcome::InvalidParameters;
            }
            CallbackDecision::Failed(status) => {
                tracing::info!(status = %status, "Payment not completed");
                return CallbackOutcome::Failed(status);
            }
            CallbackDecision::Verify(request) => request,
        };

        match self.student.verify_payment(&request).await {
            Ok(response) => {
                tracing::info!(
                    transaction_id = %request.transaction_id,
                    enrollment_id = ?response.enrollment_id,
                    "Payment completed"
                );
                self.student
                    .session()
                    .notify(ClientEvent::PaymentCompleted(response.clone()))
                    .await;
                CallbackOutcome::Verified(response)
            }
            Err(e) => {
                tracing::warn!(transaction_id = %request.transaction_id, error = %e, "Payment verification failed");
                CallbackOutcome::VerificationFailed(e.to_string())
            }
        }
    }
}
