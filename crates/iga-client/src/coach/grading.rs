use serde_json::Value;

use iga_core::ports::HttpRequest;
use iga_core::{ClientError, ErrorContext};
use iga_shared::dto::{Grade, GradeRequest, Submission, SubmissionStatistics};

use super::CoachApi;

const ASSIGNMENT_SUBMISSIONS: ErrorContext =
    ErrorContext::new("Failed to fetch assignment submissions").entity("Assignment");
const COURSE_SUBMISSIONS: ErrorContext =
    ErrorContext::new("Failed to fetch course submissions").entity("Course");
const SUBMISSION_STATS: ErrorContext =
    ErrorContext::new("Failed to fetch submission statistics").entity("Assignment");
const UNGRADED: ErrorContext = ErrorContext::new("Failed to fetch ungraded submissions");
const GRADE: ErrorContext = ErrorContext::new("Failed to grade submission")
    .entity("Submission")
    .forbidden("Access denied. You can only grade submissions for your own assignments.")
    .conflict("This submission has already been graded")
    .invalid("Invalid grade data provided");
const UPDATE_GRADE: ErrorContext = ErrorContext::new("Failed to update grade")
    .entity("Grade")
    .forbidden("Access denied. You can only update grades for your own assignments.")
    .invalid("Invalid grade data provided");
const COURSE_GRADES: ErrorContext =
    ErrorContext::new("Failed to fetch course grades").entity("Course");
const STUDENT_GRADES: ErrorContext = ErrorContext::new("Failed to fetch student grades");
const GRADE_SUMMARY: ErrorContext =
    ErrorContext::new("Failed to fetch grade summary").entity("Course");

impl CoachApi {
    pub async fn assignment_submissions(
        &self,
        assignment_id: &str,
    ) -> Result<Vec<Submission>, ClientError> {
        self.api
            .data_or_default(
                HttpRequest::get(format!("/submissions/assignment/{assignment_id}")),
                &ASSIGNMENT_SUBMISSIONS,
            )
            .await
    }

    pub async fn course_submissions(&self, course_id: &str) -> Result<Vec<Submission>, ClientError> {
        self.api
            .data_or_default(
                HttpRequest::get(format!("/submissions/course/{course_id}")),
                &COURSE_SUBMISSIONS,
            )
            .await
    }

    pub async fn submission_statistics(
        &self,
        assignment_id: &str,
    ) -> Result<SubmissionStatistics, ClientError> {
        self.api
            .data_or_default(
                HttpRequest::get(format!("/submissions/statistics/{assignment_id}")),
                &SUBMISSION_STATS,
            )
            .await
    }

    pub async fn ungraded_submissions(&self, course_id: &str) -> Result<Vec<Submission>, ClientError> {
        self.api
            .data_or_default(
                HttpRequest::get(format!("/submissions/ungraded/{course_id}")),
                &UNGRADED,
            )
            .await
    }

    pub async fn grade_submission(&self, grade: &GradeRequest) -> Result<Grade, ClientError> {
        tracing::info!(
            submission_id = %grade.submission_id,
            points = grade.points_awarded,
            "Grading submission"
        );
        self.api
            .data(HttpRequest::post("/submissions/grade").json(grade), &GRADE)
            .await
    }

    pub async fn update_grade(&self, grade_id: &str, grade: &GradeRequest) -> Result<Grade, ClientError> {
        self.api
            .data(
                HttpRequest::put(format!("/submissions/grade/{grade_id}")).json(grade),
                &UPDATE_GRADE,
            )
            .await
    }

    pub async fn course_grades(&self, course_id: &str) -> Result<Vec<Grade>, ClientError> {
        self.api
            .data_or_default(
                HttpRequest::get(format!("/grades/instructor/course/{course_id}")),
                &COURSE_GRADES,
            )
            .await
    }

    pub async fn student_grades(
        &self,
        student_id: &str,
        course_id: &str,
    ) -> Result<Vec<Grade>, ClientError> {
        self.api
            .data_or_default(
                HttpRequest::get(format!(
                    "/grades/instructor/student/{student_id}/course/{course_id}"
                )),
                &STUDENT_GRADES,
            )
            .await
    }

    /// Free-form per-course summary; the backend returns a plain map.
    pub async fn grade_summary(&self, course_id: &str) -> Result<Value, ClientError> {
        self.api
            .data_or_default(
                HttpRequest::get(format!("/grades/instructor/course/{course_id}/summary")),
                &GRADE_SUMMARY,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::Harness;
    use iga_core::ports::{Method, RequestBody};
    use serde_json::json;

    fn grade_request() -> GradeRequest {
        GradeRequest {
            submission_id: "s1".into(),
            points_awarded: 18,
            feedback: String::new(),
        }
    }

    #[tokio::test]
    async fn test_grade_submission() {
        let h = Harness::new().with_token("abc");
        h.transport.json(
            Method::Post,
            "/submissions/grade",
            201,
            json!({"success": true, "data": {"gradeId": "g1", "pointsAwarded": 18, "maxPoints": 20, "percentage": 90.0}}),
        );
        let coach = CoachApi::new(h.context());

        let grade = coach.grade_submission(&grade_request()).await.unwrap();

        assert_eq!(grade.grade_id, "g1");
        assert_eq!(grade.percentage, Some(90.0));
        assert_eq!(
            h.transport.last_request().unwrap().body,
            RequestBody::Json(json!({"submissionId": "s1", "pointsAwarded": 18, "feedback": ""}))
        );
    }

    #[tokio::test]
    async fn test_grade_foreign_submission_is_forbidden() {
        let h = Harness::new().with_token("abc");
        h.transport.json(Method::Post, "/submissions/grade", 403, json!({}));
        let coach = CoachApi::new(h.context());

        let err = coach.grade_submission(&grade_request()).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Access denied. You can only grade submissions for your own assignments."
        );
    }

    #[tokio::test]
    async fn test_update_grade_uses_grade_id() {
        let h = Harness::new().with_token("abc");
        h.transport.json(
            Method::Put,
            "/submissions/grade/g1",
            200,
            json!({"success": true, "data": {"gradeId": "g1", "pointsAwarded": 19}}),
        );
        let coach = CoachApi::new(h.context());

        let grade = coach.update_grade("g1", &grade_request()).await.unwrap();
        assert_eq!(grade.points_awarded, Some(19.0));
    }

    #[tokio::test]
    async fn test_ungraded_and_summary() {
        let h = Harness::new().with_token("abc");
        h.transport
            .json(
                Method::Get,
                "/submissions/ungraded/c1",
                200,
                json!({"success": true, "data": [{"id": "s1", "isGraded": false}, {"id": "s2"}]}),
            )
            .json(
                Method::Get,
                "/grades/instructor/course/c1/summary",
                200,
                json!({"success": true, "data": {"averageGrade": 81.5, "totalGrades": 12}}),
            );
        let coach = CoachApi::new(h.context());

        let ungraded = coach.ungraded_submissions("c1").await.unwrap();
        let summary = coach.grade_summary("c1").await.unwrap();

        assert_eq!(ungraded.len(), 2);
        assert!(ungraded.iter().all(|s| !s.is_graded));
        assert_eq!(summary["averageGrade"], 81.5);
    }
}
