//! Instructor ("coach") API: account and approval, courses, enrollments,
//! content authoring, grading and earnings.

mod content;
mod earnings;
mod grading;

use serde::Serialize;
use serde_json::Value;

use iga_core::ports::HttpRequest;
use iga_core::{ClientError, ErrorContext};
use iga_shared::ApiResponse;
use iga_shared::dto::{
    ApprovalStatus, Course, CourseAnalytics, CourseStudent, Enrollment, EnrollmentStatistics,
    LoginRequest, Page, Role, UserProfile,
};

use crate::api::ApiClient;
use crate::auth::AuthResult;
use crate::context::ClientContext;
use crate::forms::{CourseForm, InstructorForm};
use crate::session::SessionManager;

const LOGIN: ErrorContext = ErrorContext::new("Login failed");
const SIGNUP: ErrorContext = ErrorContext::new("Signup failed")
    .conflict("An account with this email already exists")
    .invalid("Invalid signup data provided");
const FETCH_PROFILE: ErrorContext =
    ErrorContext::new("Failed to fetch instructor profile").entity("Instructor profile");
const UPDATE_PROFILE: ErrorContext =
    ErrorContext::new("Failed to update instructor profile").invalid("Invalid profile data provided");
const APPROVAL: ErrorContext = ErrorContext::new("Failed to check approval status");

const CREATE_COURSE: ErrorContext = ErrorContext::new("Failed to create course")
    .forbidden("Access denied. Only approved instructors can create courses.")
    .invalid("Invalid course data provided");
const MY_COURSES: ErrorContext = ErrorContext::new("Failed to fetch courses");
const UPDATE_COURSE: ErrorContext = ErrorContext::new("Failed to update course")
    .entity("Course")
    .forbidden("Access denied. You can only update your own courses.")
    .invalid("Invalid course data provided");
const DELETE_COURSE: ErrorContext = ErrorContext::new("Failed to delete course")
    .entity("Course")
    .forbidden("Access denied. You can only delete your own courses.");
const COURSE_STUDENTS: ErrorContext =
    ErrorContext::new("Failed to fetch course students").entity("Course");
const COURSE_ANALYTICS: ErrorContext =
    ErrorContext::new("Failed to fetch course analytics").entity("Course");

const ENROLLMENTS: ErrorContext = ErrorContext::new("Failed to fetch enrollments");
const COURSE_ENROLLMENTS: ErrorContext =
    ErrorContext::new("Failed to fetch course enrollments").entity("Course");
const STUDENT_ENROLLMENT: ErrorContext =
    ErrorContext::new("Failed to fetch student enrollment").entity("Enrollment");
const ENROLLMENT_STATS: ErrorContext = ErrorContext::new("Failed to fetch enrollment statistics");
const ENROLLMENT_COUNT: ErrorContext = ErrorContext::new("Failed to fetch enrollment count");

/// Result of an approval check; the status is also persisted to the session.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalCheck {
    pub is_approved: bool,
    pub status: ApprovalStatus,
    pub profile: UserProfile,
}

#[derive(Clone)]
pub struct CoachApi {
    api: ApiClient,
}

impl CoachApi {
    pub fn new(ctx: ClientContext) -> Self {
        Self {
            api: ApiClient::new(ctx, Role::Instructor),
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
        tracing::info!(email, "Instructor login");
        self.api
            .staff_login(request, Role::Instructor.as_str(), &LOGIN)
            .await
    }

    /// New accounts start out pending approval.
    pub async fn signup(&self, form: InstructorForm) -> Result<AuthResult, ClientError> {
        let request = HttpRequest::post("/auth/signup/instructor").multipart(form.into_fields());
        let auth = self.api.auth_call(request, &SIGNUP).await?;
        if !auth.success {
            return Err(SIGNUP.rejected(auth.message.as_deref()));
        }

        let Some(token) = auth.token.clone() else {
            tracing::info!("Instructor signed up without a session token");
            return Ok(auth.into_result(false));
        };

        let session = self.session();
        session.persist_token(&token).await;
        session.persist_role(Role::Instructor.as_str());
        if let Some(data) = &auth.data {
            session.set_user_info(data);
        }
        session.set_approval_status(ApprovalStatus::Pending.as_str());

        let mut result = auth.into_result(true);
        result.role = Some(Role::Instructor.as_str().to_string());
        Ok(result)
    }

    pub async fn profile(&self) -> Result<UserProfile, ClientError> {
        self.api
            .data(HttpRequest::get("/instructor/profile"), &FETCH_PROFILE)
            .await
    }

    /// Refresh the approval status from the profile and persist it.
    pub async fn approval_status(&self) -> Result<ApprovalCheck, ClientError> {
        let profile: UserProfile = self
            .api
            .data(HttpRequest::get("/instructor/profile"), &APPROVAL)
            .await?;

        let status = profile.approval_status();
        self.session().set_approval_status(status.as_str());
        tracing::debug!(status = status.as_str(), "Approval status refreshed");

        Ok(ApprovalCheck {
            is_approved: status == ApprovalStatus::Approved,
            status,
            profile,
        })
    }

    pub async fn update_profile(&self, form: InstructorForm) -> Result<UserProfile, ClientError> {
        let request = HttpRequest::put("/instructor/profile/update").multipart(form.into_fields());
        self.api.data_or_default(request, &UPDATE_PROFILE).await
    }

    // Courses

    pub async fn create_course(&self, form: CourseForm) -> Result<Course, ClientError> {
        tracing::info!(course_name = %form.course_name, "Creating course");
        let request = HttpRequest::post("/courses/create").multipart(form.into_fields());
        self.api.data(request, &CREATE_COURSE).await
    }

    pub async fn my_courses(&self) -> Result<Vec<Course>, ClientError> {
        self.api
            .data_or_default(HttpRequest::get("/courses/instructor/courses"), &MY_COURSES)
            .await
    }

    pub async fn update_course(&self, course_id: &str, form: CourseForm) -> Result<Course, ClientError> {
        let request =
            HttpRequest::put(format!("/courses/update/{course_id}")).multipart(form.into_fields());
        self.api.data(request, &UPDATE_COURSE).await
    }

    pub async fn delete_course(&self, course_id: &str) -> Result<ApiResponse<Value>, ClientError> {
        tracing::info!(course_id, "Deleting course");
        self.api
            .ack(HttpRequest::delete(format!("/courses/delete/{course_id}")), &DELETE_COURSE)
            .await
    }

    pub async fn course_students(&self, course_id: &str) -> Result<Vec<CourseStudent>, ClientError> {
        self.api
            .data_or_default(
                HttpRequest::get(format!("/instructor/courses/{course_id}/students")),
                &COURSE_STUDENTS,
            )
            .await
    }

    pub async fn course_analytics(&self, course_id: &str) -> Result<CourseAnalytics, ClientError> {
        self.api
            .data(
                HttpRequest::get(format!("/instructor/courses/{course_id}/analytics")),
                &COURSE_ANALYTICS,
            )
            .await
    }

    // Enrollments

    pub async fn my_course_enrollments(
        &self,
        page: u32,
        size: u32,
    ) -> Result<Page<Enrollment>, ClientError> {
        let request = HttpRequest::get("/instructor/enrollments/my-courses")
            .query("page", page)
            .query("size", size);
        self.api.data_or_default(request, &ENROLLMENTS).await
    }

    pub async fn course_enrollments(
        &self,
        course_id: &str,
        page: u32,
        size: u32,
    ) -> Result<Page<Enrollment>, ClientError> {
        let request = HttpRequest::get(format!("/instructor/enrollments/course/{course_id}"))
            .query("page", page)
            .query("size", size);
        self.api.data_or_default(request, &COURSE_ENROLLMENTS).await
    }

    pub async fn student_enrollment(
        &self,
        course_id: &str,
        student_id: &str,
    ) -> Result<Enrollment, ClientError> {
        self.api
            .data(
                HttpRequest::get(format!(
                    "/instructor/enrollments/course/{course_id}/student/{student_id}"
                )),
                &STUDENT_ENROLLMENT,
            )
            .await
    }

    pub async fn enrollment_statistics(&self) -> Result<EnrollmentStatistics, ClientError> {
        self.api
            .data_or_default(
                HttpRequest::get("/instructor/enrollments/statistics"),
                &ENROLLMENT_STATS,
            )
            .await
    }

    pub async fn course_enrollment_count(&self, course_id: &str) -> Result<u64, ClientError> {
        self.api
            .data_or_default(
                HttpRequest::get(format!("/instructor/enrollments/course/{course_id}/count")),
                &ENROLLMENT_COUNT,
            )
            .await
    }
}
