use std::collections::BTreeMap;

use futures::future::join_all;

use iga_core::ports::{FileUpload, FormField, HttpRequest};
use iga_core::{ClientError, ErrorContext};
use iga_shared::dto::{Assignment, Grade, Module, Resource, Submission};

use super::StudentApi;

const MODULES: ErrorContext =
    ErrorContext::new("Failed to fetch course modules").entity("Course modules");
const RESOURCES: ErrorContext =
    ErrorContext::new("Failed to fetch module resources").entity("Module resources");
const ASSIGNMENTS: ErrorContext = ErrorContext::new("Failed to fetch assignments");
const SUBMISSIONS: ErrorContext = ErrorContext::new("Failed to fetch submissions");
const SUBMIT: ErrorContext = ErrorContext::new("Failed to submit assignment");
const UPDATE_SUBMISSION: ErrorContext =
    ErrorContext::new("Failed to update submission").entity("Submission");
const DELETE_SUBMISSION: ErrorContext =
    ErrorContext::new("Failed to delete submission").entity("Submission");
const SUBMISSION: ErrorContext = ErrorContext::new("Failed to fetch submission").entity("Submission");
const COURSE_GRADES: ErrorContext = ErrorContext::new("Failed to fetch course grades");
const OVERALL_GRADES: ErrorContext = ErrorContext::new("Failed to fetch overall grades");
const PERCENTAGES: ErrorContext = ErrorContext::new("Failed to fetch grade percentages");

impl StudentApi {
    pub async fn course_modules(&self, course_id: &str) -> Result<Vec<Module>, ClientError> {
        self.api
            .data_or_default(HttpRequest::get(format!("/modules/course/{course_id}")), &MODULES)
            .await
    }

    pub async fn module_resources(&self, module_id: &str) -> Result<Vec<Resource>, ClientError> {
        self.api
            .data_or_default(
                HttpRequest::get(format!("/resources/module/{module_id}")),
                &RESOURCES,
            )
            .await
    }

    /// Modules with their resources. A module whose resources cannot be
    /// fetched is kept with an empty list.
    pub async fn course_content(&self, course_id: &str) -> Result<Vec<Module>, ClientError> {
        let modules = self.course_modules(course_id).await?;

        let resources = join_all(modules.iter().map(|m| self.module_resources(&m.id))).await;

        Ok(modules
            .into_iter()
            .zip(resources)
            .map(|(mut module, resources)| {
                module.resources = resources.unwrap_or_else(|e| {
                    tracing::warn!(module_id = %module.id, error = %e, "Failed to fetch module resources");
                    Vec::new()
                });
                module
            })
            .collect())
    }

    /// Assignments the student can still submit for this course.
    pub async fn course_assignments(&self, course_id: &str) -> Result<Vec<Assignment>, ClientError> {
        self.api
            .data(
                HttpRequest::get(format!("/submissions/available-assignments/{course_id}")),
                &ASSIGNMENTS,
            )
            .await
    }

    pub async fn my_submissions(&self, course_id: &str) -> Result<Vec<Submission>, ClientError> {
        self.api
            .data_or_default(
                HttpRequest::get(format!("/submissions/my-submissions/{course_id}")),
                &SUBMISSIONS,
            )
            .await
    }

    pub async fn submit_assignment(
        &self,
        assignment_id: &str,
        file: FileUpload,
    ) -> Result<Submission, ClientError> {
        tracing::info!(assignment_id, file = %file.file_name, "Submitting assignment");
        let request = HttpRequest::post("/submissions/submit").multipart(vec![
            FormField::text("assignmentId", assignment_id),
            FormField::file("submissionFile", file),
        ]);
        self.api.data(request, &SUBMIT).await
    }

    pub async fn update_submission(
        &self,
        submission_id: &str,
        file: FileUpload,
    ) -> Result<Submission, ClientError> {
        let request = HttpRequest::put(format!("/submissions/update/{submission_id}"))
            .multipart(vec![FormField::file("submissionFile", file)]);
        self.api.data(request, &UPDATE_SUBMISSION).await
    }

    pub async fn delete_submission(&self, submission_id: &str) -> Result<(), ClientError> {
        self.api
            .ack(
                HttpRequest::delete(format!("/submissions/delete/{submission_id}")),
                &DELETE_SUBMISSION,
            )
            .await?;
        Ok(())
    }

    pub async fn submission(&self, submission_id: &str) -> Result<Submission, ClientError> {
        self.api
            .data(
                HttpRequest::get(format!("/submissions/my-submission/{submission_id}")),
                &SUBMISSION,
            )
            .await
    }

    pub async fn course_grades(&self, course_id: &str) -> Result<Vec<Grade>, ClientError> {
        self.api
            .data_or_default(HttpRequest::get(format!("/grades/course/{course_id}")), &COURSE_GRADES)
            .await
    }

    /// Grades keyed by course id.
    pub async fn overall_grades(&self) -> Result<BTreeMap<String, Vec<Grade>>, ClientError> {
        self.api
            .data_or_default(HttpRequest::get("/grades/overall"), &OVERALL_GRADES)
            .await
    }

    /// Percentage keyed by course id.
    pub async fn grade_percentages(&self) -> Result<BTreeMap<String, f64>, ClientError> {
        self.api
            .data_or_default(HttpRequest::get("/grades/percentages"), &PERCENTAGES)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::Harness;
    use iga_core::ports::{FormValue, Method, RequestBody};
    use serde_json::json;

    #[tokio::test]
    async fn test_course_content_tolerates_resource_failure() {
        let h = Harness::new().with_token("abc");
        h.transport
            .json(
                Method::Get,
                "/modules/course/c1",
                200,
                json!({"success": true, "data": [
                    {"id": "m1", "title": "One", "position": 1},
                    {"id": "m2", "title": "Two", "position": 2}
                ]}),
            )
            .json(
                Method::Get,
                "/resources/module/m1",
                200,
                json!({"success": true, "data": [{"id": "r1", "title": "Intro", "resourceType": "VIDEO"}]}),
            )
            .json(Method::Get, "/resources/module/m2", 500, json!({"message": "db down"}));
        let student = StudentApi::new(h.context());

        let content = student.course_content("c1").await.unwrap();

        assert_eq!(content.len(), 2);
        assert_eq!(content[0].resources.len(), 1);
        assert!(content[1].resources.is_empty());
    }

    #[tokio::test]
    async fn test_submit_assignment_is_multipart() {
        let h = Harness::new().with_token("abc");
        h.transport.json(
            Method::Post,
            "/submissions/submit",
            200,
            json!({"success": true, "data": {"id": "s1", "assignmentId": "a1", "isGraded": false}}),
        );
        let student = StudentApi::new(h.context());

        let submission = student
            .submit_assignment("a1", FileUpload::new("essay.pdf", b"%PDF".to_vec()))
            .await
            .unwrap();

        assert_eq!(submission.id, "s1");
        let RequestBody::Multipart(fields) = h.transport.last_request().unwrap().body else {
            panic!("expected multipart body");
        };
        assert_eq!(fields[0].text_value(), Some("a1"));
        assert!(matches!(&fields[1].value, FormValue::File(f) if f.file_name == "essay.pdf"));
    }

    #[tokio::test]
    async fn test_empty_grade_data_defaults() {
        let h = Harness::new().with_token("abc");
        h.transport
            .json(Method::Get, "/grades/overall", 200, json!({"success": true, "data": null}))
            .json(
                Method::Get,
                "/grades/percentages",
                200,
                json!({"success": true, "data": {"c1": 88.5}}),
            );
        let student = StudentApi::new(h.context());

        assert!(student.overall_grades().await.unwrap().is_empty());
        assert_eq!(student.grade_percentages().await.unwrap().get("c1"), Some(&88.5));
    }

    #[tokio::test]
    async fn test_delete_submission_rejected() {
        let h = Harness::new().with_token("abc");
        h.transport.json(
            Method::Delete,
            "/submissions/delete/s1",
            200,
            json!({"success": false, "message": "Already graded"}),
        );
        let student = StudentApi::new(h.context());

        let err = student.delete_submission("s1").await.unwrap_err();
        assert_eq!(err, ClientError::Rejected("Already graded".into()));
    }
}
