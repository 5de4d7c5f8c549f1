//! Public catalog. A stored token is still attached when present.

use iga_core::ports::HttpRequest;
use iga_core::{ClientError, ErrorContext};
use iga_shared::dto::{Course, Role};

use crate::api::ApiClient;
use crate::context::ClientContext;

const ALL: ErrorContext = ErrorContext::new("Failed to fetch courses");
const ONE: ErrorContext = ErrorContext::new("Failed to fetch course").entity("Course");

#[derive(Clone)]
pub struct CoursesApi {
    api: ApiClient,
}

impl CoursesApi {
    pub fn new(ctx: ClientContext) -> Self {
        Self {
            api: ApiClient::new(ctx, Role::Student),
        }
    }

    pub async fn all(&self) -> Result<Vec<Course>, ClientError> {
        self.api
            .data_or_default(HttpRequest::get("/courses/all"), &ALL)
            .await
    }

    pub async fn get(&self, course_id: &str) -> Result<Course, ClientError> {
        self.api
            .data(HttpRequest::get(format!("/courses/{course_id}")), &ONE)
            .await
    }
}
