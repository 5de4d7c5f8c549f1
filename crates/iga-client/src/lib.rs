//! Typed client for the IGA course marketplace.
//!
//! Every role client shares one [`ApiClient`] contract: bearer token from the
//! session store, backend message first on errors, and session teardown plus
//! a redirect to the role's login page on 401. [`IgaClient`] hands out the
//! role clients over a single set of ports.

pub mod admin;
pub mod api;
pub mod auth;
pub mod checkout;
pub mod coach;
pub mod context;
pub mod courses;
pub mod forms;
pub mod session;
pub mod student;

pub use admin::AdminApi;
pub use api::ApiClient;
pub use auth::AuthResult;
pub use checkout::{CallbackOutcome, CheckoutFlow};
pub use coach::{ApprovalCheck, CoachApi};
pub use context::ClientContext;
pub use courses::CoursesApi;
pub use forms::{AssignmentForm, CourseForm, InstructorForm, ResourceForm};
pub use session::{SessionManager, SessionSnapshot};
pub use student::{EnrollmentDashboard, GradingDashboard, PaymentDashboard, StudentApi};

use futures::stream::BoxStream;

use iga_core::ports::ClientEvent;

#[derive(Clone)]
pub struct IgaClient {
    ctx: ClientContext,
}

impl IgaClient {
    pub fn new(ctx: ClientContext) -> Self {
        Self { ctx }
    }

    pub fn student(&self) -> StudentApi {
        StudentApi::new(self.ctx.clone())
    }

    pub fn coach(&self) -> CoachApi {
        CoachApi::new(self.ctx.clone())
    }

    pub fn admin(&self) -> AdminApi {
        AdminApi::new(self.ctx.clone())
    }

    pub fn courses(&self) -> CoursesApi {
        CoursesApi::new(self.ctx.clone())
    }

    pub fn checkout(&self) -> CheckoutFlow {
        CheckoutFlow::new(self.ctx.clone())
    }

    pub fn session(&self) -> SessionManager {
        SessionManager::new(self.ctx.session.clone(), self.ctx.events.clone())
    }

    /// Auth and payment notifications published from here on.
    pub fn events(&self) -> BoxStream<'static, ClientEvent> {
        self.ctx.events.subscribe()
    }

    /// End the session without a redirect.
    pub async fn logout(&self) {
        self.session().clear().await;
    }
}
