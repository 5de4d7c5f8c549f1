use iga_core::ports::HttpRequest;
use iga_core::{ClientError, ErrorContext};
use iga_shared::dto::{
    CoursePaymentRequest, Page, Payment, PaymentHistoryItem, PaymentResponse,
    PaymentVerificationRequest,
};

use super::StudentApi;

const INITIATE: ErrorContext = ErrorContext::new("Failed to initiate payment");
const VERIFY: ErrorContext = ErrorContext::new("Failed to verify payment");
const HISTORY: ErrorContext = ErrorContext::new("Failed to fetch payment history");
const BY_ID: ErrorContext = ErrorContext::new("Failed to fetch payment details").entity("Payment");
const BY_REFERENCE: ErrorContext =
    ErrorContext::new("Failed to fetch payment by reference").entity("Payment");
const CHECK_PAID: ErrorContext = ErrorContext::new("Failed to check course payment status");
const REFUND: ErrorContext = ErrorContext::new("Failed to request payment refund");

/// Payment endpoints answer with a flat body carrying its own `success`.
fn confirmed(response: PaymentResponse, err: &ErrorContext) -> Result<PaymentResponse, ClientError> {
    if response.success {
        Ok(response)
    } else {
        Err(err.rejected(response.message.as_deref()))
    }
}

impl StudentApi {
    pub async fn initiate_payment(
        &self,
        request: &CoursePaymentRequest,
    ) -> Result<PaymentResponse, ClientError> {
        tracing::info!(course_id = %request.course_id, amount = request.amount, "Initiating payment");
        let response = self
            .api
            .value(
                HttpRequest::post("/student/payments/initiate/course").json(request),
                &INITIATE,
            )
            .await?;
        confirmed(response, &INITIATE)
    }

    pub async fn verify_payment(
        &self,
        request: &PaymentVerificationRequest,
    ) -> Result<PaymentResponse, ClientError> {
        tracing::info!(
            transaction_id = %request.transaction_id,
            reference = %request.payment_reference,
            "Verifying payment"
        );
        let response = self
            .api
            .value(
                HttpRequest::post("/student/payments/course/verify").json(request),
                &VERIFY,
            )
            .await?;
        confirmed(response, &VERIFY)
    }

    /// Newest first, zero-based pages.
    pub async fn payment_history(
        &self,
        page: u32,
        size: u32,
    ) -> Result<Page<PaymentHistoryItem>, ClientError> {
        let request = HttpRequest::get("/student/payments/history")
            .query("page", page)
            .query("size", size)
            .query("sort", "paymentDate");
        self.api.value(request, &HISTORY).await
    }

    pub async fn payment_by_id(&self, payment_id: &str) -> Result<Payment, ClientError> {
        self.api
            .value(HttpRequest::get(format!("/student/payments/{payment_id}")), &BY_ID)
            .await
    }

    pub async fn payment_by_reference(&self, reference: &str) -> Result<Payment, ClientError> {
        self.api
            .value(
                HttpRequest::get(format!("/student/payments/reference/{reference}")),
                &BY_REFERENCE,
            )
            .await
    }

    /// Only a literal `true` counts as paid.
    pub async fn has_paid_for_course(&self, course_id: &str) -> Result<bool, ClientError> {
        let paid: serde_json::Value = self
            .api
            .value(
                HttpRequest::get(format!("/student/payments/check/{course_id}")),
                &CHECK_PAID,
            )
            .await?;
        Ok(paid == serde_json::Value::Bool(true))
    }

    pub async fn request_refund(
        &self,
        payment_id: &str,
        reason: &str,
    ) -> Result<PaymentResponse, ClientError> {
        let request =
            HttpRequest::post(format!("/student/payments/refund/{payment_id}")).query("reason", reason);
        let response = self.api.value(request, &REFUND).await?;
        confirmed(response, &REFUND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::Harness;
    use iga_core::ports::Method;
    use serde_json::json;

    #[tokio::test]
    async fn test_history_query_and_page() {
        let h = Harness::new().with_token("abc");
        h.transport.json(
            Method::Get,
            "/student/payments/history",
            200,
            json!({"content": [{"id": "p1", "amount": 25000, "paymentStatus": "COMPLETED"}], "totalElements": 1}),
        );
        let student = StudentApi::new(h.context());

        let page = student.payment_history(0, 5).await.unwrap();

        assert_eq!(page.total_elements, 1);
        assert_eq!(page.content[0].id, "p1");
        let sent = h.transport.last_request().unwrap();
        assert_eq!(
            sent.query,
            vec![
                ("page".to_string(), "0".to_string()),
                ("size".to_string(), "5".to_string()),
                ("sort".to_string(), "paymentDate".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_check_paid_requires_literal_true() {
        let h = Harness::new().with_token("abc");
        h.transport
            .json(Method::Get, "/student/payments/check/c1", 200, json!(true))
            .json(Method::Get, "/student/payments/check/c1", 200, json!({"paid": true}));
        let student = StudentApi::new(h.context());

        assert!(student.has_paid_for_course("c1").await.unwrap());
        assert!(!student.has_paid_for_course("c1").await.unwrap());
    }

    #[tokio::test]
    async fn test_refund_rejected_by_backend() {
        let h = Harness::new().with_token("abc");
        h.transport.json(
            Method::Post,
            "/student/payments/refund/p1",
            400,
            json!({"success": false, "message": "Refund window closed", "errorCode": "REFUND_ERROR"}),
        );
        let student = StudentApi::new(h.context());

        let err = student.request_refund("p1", "changed my mind").await.unwrap_err();
        assert_eq!(err, ClientError::BadRequest("Refund window closed".into()));
        assert_eq!(
            h.transport.last_request().unwrap().query,
            vec![("reason".to_string(), "changed my mind".to_string())]
        );
    }

    #[tokio::test]
    async fn test_payment_lookup_not_found() {
        let h = Harness::new().with_token("abc");
        h.transport
            .json(Method::Get, "/student/payments/reference/ref-9", 404, json!(null));
        let student = StudentApi::new(h.context());

        let err = student.payment_by_reference("ref-9").await.unwrap_err();
        assert_eq!(err.to_string(), "Payment not found.");
    }
}
