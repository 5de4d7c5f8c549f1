use iga_core::ports::HttpRequest;
use iga_core::{ClientError, ErrorContext};
use iga_shared::dto::{EnrolledCourse, Enrollment, Page, Progress};

use super::StudentApi;

const MY_ENROLLMENTS: ErrorContext = ErrorContext::new("Failed to fetch enrollments");
const UPDATE_PROGRESS: ErrorContext =
    ErrorContext::new("Failed to update enrollment progress").entity("Enrollment");
const CHECK_ENROLLED: ErrorContext = ErrorContext::new("Failed to check enrollment status");
const COUNT: ErrorContext = ErrorContext::new("Failed to fetch enrollment count");

/// Enough to cover every enrollment a student realistically has.
const ALL_ENROLLMENTS: u32 = 100;

impl StudentApi {
    pub async fn my_enrollments(&self, page: u32, size: u32) -> Result<Page<Enrollment>, ClientError> {
        let request = HttpRequest::get("/student/enrollments/my-enrollments")
            .query("page", page)
            .query("size", size);
        self.api.data(request, &MY_ENROLLMENTS).await
    }

    /// Enrollments projected into course listings.
    pub async fn enrolled_courses(&self) -> Result<Vec<EnrolledCourse>, ClientError> {
        let page = self.my_enrollments(0, ALL_ENROLLMENTS).await?;
        Ok(page.content.iter().map(EnrolledCourse::from).collect())
    }

    pub async fn update_progress(
        &self,
        enrollment_id: &str,
        progress: Progress,
    ) -> Result<Enrollment, ClientError> {
        let request = HttpRequest::put(format!("/student/enrollments/{enrollment_id}/progress"))
            .query("progress", progress.as_str());
        self.api.data(request, &UPDATE_PROGRESS).await
    }

    pub async fn is_enrolled(&self, course_id: &str) -> Result<bool, ClientError> {
        self.api
            .data_or_default(
                HttpRequest::get(format!("/student/enrollments/check/{course_id}")),
                &CHECK_ENROLLED,
            )
            .await
    }

    pub async fn enrollment_count(&self, course_id: &str) -> Result<u64, ClientError> {
        self.api
            .data_or_default(
                HttpRequest::get(format!("/student/enrollments/course/{course_id}/count")),
                &COUNT,
            )
            .await
    }
}
