//! Administrator API: instructor approval and student management.

use serde_json::Value;

use iga_core::ports::HttpRequest;
use iga_core::{ClientError, ErrorContext};
use iga_shared::ApiResponse;
use iga_shared::dto::{LoginRequest, Role, UserProfile};

use crate::api::ApiClient;
use crate::auth::AuthResult;
use crate::context::ClientContext;
use crate::session::SessionManager;

const LOGIN: ErrorContext = ErrorContext::new("Login failed");
const PROFILE: ErrorContext = ErrorContext::new("Failed to fetch admin profile").entity("Profile");
const INSTRUCTORS: ErrorContext = ErrorContext::new("Failed to fetch instructors");
const INSTRUCTOR: ErrorContext =
    ErrorContext::new("Failed to fetch instructor details").entity("Instructor");
const APPROVE: ErrorContext = ErrorContext::new("Failed to approve instructor")
    .entity("Instructor")
    .conflict("Instructor is already approved");
const REJECT: ErrorContext = ErrorContext::new("Failed to reject instructor").entity("Instructor");
const STUDENTS: ErrorContext = ErrorContext::new("Failed to fetch students");
const CHANGE_ROLE: ErrorContext = ErrorContext::new("Failed to change user role")
    .entity("Student")
    .conflict("User is already an admin");

#[derive(Clone)]
pub struct AdminApi {
    api: ApiClient,
}

impl AdminApi {
    pub fn new(ctx: ClientContext) -> Self {
        Self {
            api: ApiClient::new(ctx, Role::Admin),
        }
    }

    pub fn session(&self) -> &SessionManager {
        self.api.session()
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResult, ClientError> {
        let request = HttpRequest::post("/auth/login").json(&LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        });
        tracing::info!(email, "Admin login");
        self.api.staff_login(request, Role::Admin.as_str(), &LOGIN).await
    }

    pub async fn profile(&self) -> Result<UserProfile, ClientError> {
        self.api.data(HttpRequest::get("/admin/profile"), &PROFILE).await
    }

    pub async fn instructors(&self) -> Result<Vec<UserProfile>, ClientError> {
        self.api
            .data_or_default(HttpRequest::get("/admin/instructors"), &INSTRUCTORS)
            .await
    }

    pub async fn instructor(&self, instructor_id: &str) -> Result<UserProfile, ClientError> {
        self.api
            .data(HttpRequest::get(format!("/admin/instructor/{instructor_id}")), &INSTRUCTOR)
            .await
    }

    pub async fn approve_instructor(
        &self,
        instructor_id: &str,
    ) -> Result<ApiResponse<Value>, ClientError> {
        tracing::info!(instructor_id, "Approving instructor");
        self.api
            .ack(
                HttpRequest::put(format!("/admin/instructor/approve/{instructor_id}")),
                &APPROVE,
            )
            .await
    }

    /// Rejection deletes the pending instructor account.
    pub async fn reject_instructor(
        &self,
        instructor_id: &str,
    ) -> Result<ApiResponse<Value>, ClientError> {
        tracing::info!(instructor_id, "Rejecting instructor");
        self.api
            .ack(
                HttpRequest::delete(format!("/admin/instructor/reject/{instructor_id}")),
                &REJECT,
            )
            .await
    }

    pub async fn students(&self) -> Result<Vec<UserProfile>, ClientError> {
        self.api
            .data_or_default(HttpRequest::get("/admin/students"), &STUDENTS)
            .await
    }

    pub async fn promote_to_admin(&self, student_id: &str) -> Result<ApiResponse<Value>, ClientError> {
        tracing::info!(student_id, "Promoting student to admin");
        self.api
            .ack(HttpRequest::put(format!("/admin/change-role/{student_id}")), &CHANGE_ROLE)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::Harness;
    use futures::StreamExt;
    use iga_core::ports::{ClientEvent, EventBus, Method, SessionStore};
    use serde_json::json;

    #[tokio::test]
    async fn test_login_stores_admin_role() {
        let h = Harness::at("/admin/login");
        h.transport.json(
            Method::Post,
            "/auth/login",
            200,
            json!({"success": true, "data": {"accessToken": "adm-1", "email": "root@iga.rw"}}),
        );
        let admin = AdminApi::new(h.context());

        let result = admin.login("root@iga.rw", "pw").await.unwrap();

        assert_eq!(result.role.as_deref(), Some("ADMIN"));
        assert_eq!(h.store.get("authtoken").as_deref(), Some("adm-1"));
        assert_eq!(h.store.get("userRole").as_deref(), Some("ADMIN"));
    }

    #[tokio::test]
    async fn test_bearer_on_wrapped_get() {
        let h = Harness::new().with_token("abc");
        h.transport.json(
            Method::Get,
            "/admin/instructors",
            200,
            json!({"success": true, "data": [{"firstName": "Grace", "instructorData": {"approvalStatus": "PENDING"}}]}),
        );
        let admin = AdminApi::new(h.context());

        let instructors = admin.instructors().await.unwrap();

        assert_eq!(instructors[0].full_name(), "Grace");
        assert_eq!(
            h.transport.last_request().unwrap().header_value("Authorization"),
            Some("Bearer abc")
        );
    }

    #[tokio::test]
    async fn test_401_on_students_tears_down_and_redirects() {
        let h = Harness::at("/admin/dashboard").with_token("abc");
        h.store.set("userRole", "ADMIN").unwrap();
        h.store.set("studentProfile", r#"{"firstName":"Root"}"#).unwrap();
        h.transport.json(Method::Get, "/admin/students", 401, json!({}));
        let admin = AdminApi::new(h.context());
        let mut events = h.events.subscribe();

        let err = admin.students().await.unwrap_err();

        assert!(err.is_unauthorized());
        assert!(h.store.get("authtoken").is_none());
        assert!(h.store.get("userRole").is_none());
        assert!(h.store.get("studentProfile").is_none());
        assert_eq!(h.navigator.history(), vec!["/admin/login".to_string()]);
        assert_eq!(events.next().await, Some(ClientEvent::AuthChanged));
    }

    #[tokio::test]
    async fn test_approve_and_reject_verbs() {
        let h = Harness::new().with_token("abc");
        h.transport
            .json(
                Method::Put,
                "/admin/instructor/approve/i1",
                200,
                json!({"success": true, "message": "Instructor approved"}),
            )
            .json(Method::Delete, "/admin/instructor/reject/i2", 404, json!({}));
        let admin = AdminApi::new(h.context());

        let approved = admin.approve_instructor("i1").await.unwrap();
        let rejected = admin.reject_instructor("i2").await.unwrap_err();

        assert_eq!(approved.message_or(""), "Instructor approved");
        assert_eq!(rejected, ClientError::NotFound("Instructor not found.".into()));
    }

    #[tokio::test]
    async fn test_promote_conflict_prefers_backend_message() {
        let h = Harness::new().with_token("abc");
        h.transport
            .json(Method::Put, "/admin/change-role/s1", 409, json!({"message": "Already ADMIN"}))
            .json(Method::Put, "/admin/change-role/s1", 409, json!({}));
        let admin = AdminApi::new(h.context());

        assert_eq!(admin.promote_to_admin("s1").await.unwrap_err().to_string(), "Already ADMIN");
        assert_eq!(
            admin.promote_to_admin("s1").await.unwrap_err().to_string(),
            "User is already an admin"
        );
    }
}
