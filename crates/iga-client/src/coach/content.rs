use serde_json::Value;

use iga_core::ports::HttpRequest;
use iga_core::{ClientError, ErrorContext};
use iga_shared::ApiResponse;
use iga_shared::dto::{Assignment, Module, ModuleRequest, Resource};

use super::CoachApi;
use crate::forms::{AssignmentForm, ResourceForm};

const CREATE_MODULE: ErrorContext = ErrorContext::new("Failed to create module")
    .forbidden("Access denied. Only instructors can create modules.")
    .invalid("Invalid module data provided");
const COURSE_MODULES: ErrorContext =
    ErrorContext::new("Failed to fetch course modules").entity("Course");
const UPDATE_MODULE: ErrorContext = ErrorContext::new("Failed to update module")
    .entity("Module")
    .forbidden("Access denied. You can only update modules of your own courses.")
    .invalid("Invalid module data provided");
const DELETE_MODULE: ErrorContext = ErrorContext::new("Failed to delete module")
    .entity("Module")
    .forbidden("Access denied. You can only delete modules of your own courses.");

const CREATE_ASSIGNMENT: ErrorContext = ErrorContext::new("Failed to create assignment")
    .forbidden("Access denied. Only instructors can create assignments.")
    .invalid("Invalid assignment data provided");
const MODULE_ASSIGNMENTS: ErrorContext =
    ErrorContext::new("Failed to fetch module assignments").entity("Module");
const UPDATE_ASSIGNMENT: ErrorContext = ErrorContext::new("Failed to update assignment")
    .entity("Assignment")
    .forbidden("Access denied. You can only update your own assignments.")
    .invalid("Invalid assignment data provided");
const DELETE_ASSIGNMENT: ErrorContext = ErrorContext::new("Failed to delete assignment")
    .entity("Assignment")
    .forbidden("Access denied. You can only delete your own assignments.");
const ALL_ASSIGNMENTS: ErrorContext = ErrorContext::new("Failed to fetch assignments");
const ASSIGNMENT: ErrorContext =
    ErrorContext::new("Failed to fetch assignment").entity("Assignment");

const CREATE_RESOURCE: ErrorContext = ErrorContext::new("Failed to create resource")
    .forbidden("Access denied. Only instructors can create resources.")
    .invalid("Invalid resource data provided");
const MODULE_RESOURCES: ErrorContext =
    ErrorContext::new("Failed to fetch module resources").entity("Module");
const UPDATE_RESOURCE: ErrorContext = ErrorContext::new("Failed to update resource")
    .entity("Resource")
    .forbidden("Access denied. You can only update your own resources.")
    .invalid("Invalid resource data provided");
const DELETE_RESOURCE: ErrorContext = ErrorContext::new("Failed to delete resource")
    .entity("Resource")
    .forbidden("Access denied. You can only delete your own resources.");
const ALL_RESOURCES: ErrorContext = ErrorContext::new("Failed to fetch resources");
const RESOURCE: ErrorContext = ErrorContext::new("Failed to fetch resource").entity("Resource");

impl CoachApi {
    // Modules

    pub async fn create_module(&self, module: &ModuleRequest) -> Result<Module, ClientError> {
        tracing::info!(course_id = %module.course_id, title = %module.title, "Creating module");
        self.api
            .data(HttpRequest::post("/modules/create").json(module), &CREATE_MODULE)
            .await
    }

    pub async fn course_modules(&self, course_id: &str) -> Result<Vec<Module>, ClientError> {
        self.api
            .data_or_default(
                HttpRequest::get(format!("/modules/course/{course_id}")),
                &COURSE_MODULES,
            )
            .await
    }

    pub async fn update_module(
        &self,
        module_id: &str,
        module: &ModuleRequest,
    ) -> Result<Module, ClientError> {
        self.api
            .data(
                HttpRequest::put(format!("/modules/update/{module_id}")).json(module),
                &UPDATE_MODULE,
            )
            .await
    }

    pub async fn delete_module(&self, module_id: &str) -> Result<ApiResponse<Value>, ClientError> {
        self.api
            .ack(HttpRequest::delete(format!("/modules/delete/{module_id}")), &DELETE_MODULE)
            .await
    }

    // Assignments

    pub async fn create_assignment(&self, form: AssignmentForm) -> Result<Assignment, ClientError> {
        tracing::info!(module_id = %form.module_id, title = %form.title, "Creating assignment");
        let request = HttpRequest::post("/assignment/create").multipart(form.into_fields());
        self.api.data(request, &CREATE_ASSIGNMENT).await
    }

    pub async fn module_assignments(&self, module_id: &str) -> Result<Vec<Assignment>, ClientError> {
        self.api
            .data_or_default(
                HttpRequest::get(format!("/assignment/module/{module_id}")),
                &MODULE_ASSIGNMENTS,
            )
            .await
    }

    pub async fn update_assignment(
        &self,
        assignment_id: &str,
        form: AssignmentForm,
    ) -> Result<Assignment, ClientError> {
        let request = HttpRequest::put(format!("/assignment/update/{assignment_id}"))
            .multipart(form.into_fields());
        self.api.data(request, &UPDATE_ASSIGNMENT).await
    }

    pub async fn delete_assignment(
        &self,
        assignment_id: &str,
    ) -> Result<ApiResponse<Value>, ClientError> {
        self.api
            .ack(
                HttpRequest::delete(format!("/assignment/delete/{assignment_id}")),
                &DELETE_ASSIGNMENT,
            )
            .await
    }

    pub async fn all_assignments(&self) -> Result<Vec<Assignment>, ClientError> {
        self.api
            .data_or_default(HttpRequest::get("/assignment/all"), &ALL_ASSIGNMENTS)
            .await
    }

    pub async fn assignment(&self, assignment_id: &str) -> Result<Assignment, ClientError> {
        self.api
            .data(HttpRequest::get(format!("/assignment/{assignment_id}")), &ASSIGNMENT)
            .await
    }

    // Resources

    pub async fn create_resource(&self, form: ResourceForm) -> Result<Resource, ClientError> {
        tracing::info!(module_id = %form.module_id, title = %form.title, "Creating resource");
        let request = HttpRequest::post("/resources/create").multipart(form.into_fields());
        self.api.data(request, &CREATE_RESOURCE).await
    }

    pub async fn module_resources(&self, module_id: &str) -> Result<Vec<Resource>, ClientError> {
        self.api
            .data_or_default(
                HttpRequest::get(format!("/resources/module/{module_id}")),
                &MODULE_RESOURCES,
            )
            .await
    }

    pub async fn update_resource(
        &self,
        resource_id: &str,
        form: ResourceForm,
    ) -> Result<Resource, ClientError> {
        let request = HttpRequest::put(format!("/resources/update/{resource_id}"))
            .multipart(form.into_fields());
        self.api.data(request, &UPDATE_RESOURCE).await
    }

    pub async fn delete_resource(&self, resource_id: &str) -> Result<ApiResponse<Value>, ClientError> {
        self.api
            .ack(
                HttpRequest::delete(format!("/resources/delete/{resource_id}")),
                &DELETE_RESOURCE,
            )
            .await
    }

    pub async fn all_resources(&self) -> Result<Vec<Resource>, ClientError> {
        self.api
            .data_or_default(HttpRequest::get("/resources/all"), &ALL_RESOURCES)
            .await
    }

    pub async fn resource(&self, resource_id: &str) -> Result<Resource, ClientError> {
        self.api
            .data(HttpRequest::get(format!("/resources/{resource_id}")), &RESOURCE)
            .await
    }
}
