//! Instructor payment endpoints. These answer with bare values, not the envelope.

use iga_core::ports::HttpRequest;
use iga_core::{ClientError, ErrorContext};
use iga_shared::dto::{Payment, PaymentAnalytics};

use super::CoachApi;

const EARNINGS: ErrorContext = ErrorContext::new("Failed to fetch earnings");
const COURSE_PAYMENTS: ErrorContext =
    ErrorContext::new("Failed to fetch course payments").entity("Course");
const ALL_PAYMENTS: ErrorContext = ErrorContext::new("Failed to fetch payments");
const COURSE_PAYMENT_ANALYTICS: ErrorContext =
    ErrorContext::new("Failed to fetch course payment analytics").entity("Course");

impl CoachApi {
    pub async fn earnings(&self) -> Result<PaymentAnalytics, ClientError> {
        self.api
            .value(HttpRequest::get("/instructor/payments/earnings"), &EARNINGS)
            .await
    }

    pub async fn course_payments(&self, course_id: &str) -> Result<Vec<Payment>, ClientError> {
        self.api
            .value(
                HttpRequest::get(format!("/instructor/payments/course/{course_id}")),
                &COURSE_PAYMENTS,
            )
            .await
    }

    pub async fn all_payments(&self) -> Result<Vec<Payment>, ClientError> {
        self.api
            .value(HttpRequest::get("/instructor/payments/all"), &ALL_PAYMENTS)
            .await
    }

    pub async fn course_payment_analytics(
        &self,
        course_id: &str,
    ) -> Result<PaymentAnalytics, ClientError> {
        self.api
            .value(
                HttpRequest::get(format!("/instructor/payments/analytics/course/{course_id}")),
                &COURSE_PAYMENT_ANALYTICS,
            )
            .await
    }
}
