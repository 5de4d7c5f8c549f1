use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::course::Course;

pub const DEFAULT_CURRENCY: &str = "RWF";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
    Refunded,
    Cancelled,
}

/// Body of `POST /student/payments/initiate/course`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursePaymentRequest {
    pub course_id: String,
    pub amount: f64,
    pub currency: String,
    pub email: String,
    pub phone_number: String,
    pub name: String,
    pub redirect_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentVerificationRequest {
    pub transaction_id: String,
    pub payment_reference: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}

/// Payment endpoints answer with this flat shape instead of the usual envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentResponse {
    pub success: bool,
    pub message: Option<String>,
    pub error_code: Option<String>,
    pub timestamp: Option<String>,
    pub payment_link: Option<String>,
    pub payment_reference: Option<String>,
    pub payment_id: Option<String>,
    pub transaction_id: Option<String>,
    pub amount: Option<f64>,
    pub currency: Option<String>,
    pub payment_status: Option<String>,
    pub course_id: Option<String>,
    pub course_name: Option<String>,
    pub user_id: Option<String>,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub enrollment_id: Option<String>,
    pub enrollment_status: Option<String>,
    pub enrollment_date: Option<String>,
    pub metadata: Option<Value>,
    pub gateway_response: Option<Value>,
}

impl PaymentResponse {
    /// A usable gateway link, if the backend returned one.
    pub fn checkout_link(&self) -> Option<&str> {
        self.payment_link
            .as_deref()
            .filter(|link| !link.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentHistoryItem {
    pub id: String,
    pub course_name: Option<String>,
    pub course_id: Option<String>,
    pub student_name: Option<String>,
    pub student_id: Option<String>,
    pub amount: f64,
    pub payment_status: Option<String>,
    pub transaction_reference: Option<String>,
    pub payment_method: Option<String>,
    pub payment_date: Option<String>,
}

/// Stored payment record, as returned by the lookup and instructor endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Payment {
    pub id: String,
    pub amount: f64,
    pub payment_status: Option<String>,
    pub transaction_reference: Option<String>,
    pub payment_method: Option<String>,
    pub payment_date: Option<String>,
    pub course: Option<Course>,
    pub student: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentAnalytics {
    pub total_payments: u64,
    pub successful_payments: u64,
    pub pending_payments: u64,
    pub failed_payments: u64,
    pub cancelled_payments: u64,
    pub refunded_payments: u64,
    pub total_revenue: f64,
    pub average_payment_amount: f64,
}
