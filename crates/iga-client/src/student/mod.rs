//! Student-facing API: account, payments, enrollments, learning content and
//! the aggregated dashboards.

mod dashboard;
mod enrollments;
mod learning;
mod payments;

pub use dashboard::{EnrollmentDashboard, GradingDashboard, PaymentDashboard};

use serde_json::Value;

use iga_core::ports::HttpRequest;
use iga_core::{ClientError, ErrorContext};
use iga_shared::ApiResponse;
use iga_shared::dto::{LoginRequest, Role, StudentSignupRequest, UpdateStudentProfileRequest, UserProfile};

use crate::api::ApiClient;
use crate::auth::AuthResult;
use crate::context::ClientContext;
use crate::session::SessionManager;

const LOGIN: ErrorContext =
    ErrorContext::new("Login failed").conflict("Login conflict - please check credentials");
const REGISTER: ErrorContext = ErrorContext::new("Registration failed");
const FETCH_PROFILE: ErrorContext =
    ErrorContext::new("Failed to fetch student profile").entity("Profile");
const UPDATE_PROFILE: ErrorContext = ErrorContext::new("Failed to update student profile");
const DELETE_PROFILE: ErrorContext = ErrorContext::new("Failed to delete student profile");

#[derive(Clone)]
pub struct StudentApi {
    api: ApiClient,
}

impl StudentApi {
    pub fn new(ctx: ClientContext) -> Self {
        Self {
            api: ApiClient::new(ctx, Role::Student),
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

        tracing::info!(email, "Student login");
        let auth = self.api.auth_call(request, &LOGIN).await?;
        if !auth.success {
            return Err(LOGIN.rejected(auth.message.as_deref()));
        }
        Ok(self.api.persist_credentials(auth).await)
    }

    pub async fn register(&self, signup: &StudentSignupRequest) -> Result<AuthResult, ClientError> {
        let request = HttpRequest::post("/auth/signup/student").json(signup);
        let auth = self.api.auth_call(request, &REGISTER).await?;
        if !auth.success {
            return Err(REGISTER.rejected(auth.message.as_deref()));
        }
        Ok(self.api.persist_credentials(auth).await)
    }

    /// Fetch the profile and refresh the cached copy; a failed fetch drops the cache.
    pub async fn profile(&self) -> Result<UserProfile, ClientError> {
        match self
            .api
            .data::<UserProfile>(HttpRequest::get("/student/profile"), &FETCH_PROFILE)
            .await
        {
            Ok(profile) => {
                self.session().cache_profile(&profile);
                Ok(profile)
            }
            Err(e) => {
                self.session().clear_profile_cache();
                Err(e)
            }
        }
    }

    pub fn cached_profile(&self) -> Option<UserProfile> {
        self.session().cached_profile()
    }

    /// The backend may reissue the token when the email changes.
    pub async fn update_profile(
        &self,
        update: &UpdateStudentProfileRequest,
    ) -> Result<AuthResult, ClientError> {
        let request = HttpRequest::put("/student/update/profile").json(update);
        let auth = self.api.auth_call(request, &UPDATE_PROFILE).await?;
        if !auth.success {
            return Err(UPDATE_PROFILE.rejected(auth.message.as_deref()));
        }
        Ok(self.api.persist_credentials(auth).await)
    }

    /// Delete the account and end the session.
    pub async fn delete_profile(&self) -> Result<ApiResponse<Value>, ClientError> {
        let response = self
            .api
            .ack(HttpRequest::delete("/student/delete/profile"), &DELETE_PROFILE)
            .await?;
        self.session().clear().await;
        Ok(response)
    }
}
