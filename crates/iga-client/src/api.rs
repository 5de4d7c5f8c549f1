//! The authenticated request/response contract shared by every role client.
//!
//! Requests carry the stored bearer token. A 401 from anything outside
//! `/auth` tears the session down and sends the user to the client's login
//! page. Failures are mapped to [`ClientError`] with the backend message first.

use serde::de::DeserializeOwned;
use serde_json::Value;

use iga_core::domain::auth::token_preview;
use iga_core::ports::{HttpRequest, HttpResponse};
use iga_core::{ClientError, ErrorContext};
use iga_shared::dto::Role;
use iga_shared::{ApiResponse, ErrorBody};

use crate::context::ClientContext;
use crate::session::SessionManager;

#[derive(Clone)]
pub struct ApiClient {
    ctx: ClientContext,
    session: SessionManager,
    login_path: &'static str,
}

impl ApiClient {
    pub fn new(ctx: ClientContext, role: Role) -> Self {
        Self::with_login_path(ctx, role.login_path())
    }

    pub fn with_login_path(ctx: ClientContext, login_path: &'static str) -> Self {
        let session = SessionManager::new(ctx.session.clone(), ctx.events.clone());
        Self {
            ctx,
            session,
            login_path,
        }
    }

    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    pub fn context(&self) -> &ClientContext {
        &self.ctx
    }

    pub fn login_path(&self) -> &'static str {
        self.login_path
    }

    /// Send `request` and return the 2xx response; every other outcome is an error.
    pub async fn send(
        &self,
        request: HttpRequest,
        err: &ErrorContext,
    ) -> Result<HttpResponse, ClientError> {
        let request = self.authorize(request);
        let path = request.path.clone();
        let method = request.method;

        let response = match self.ctx.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(%method, path = %path, error = %e, "Request failed without a response");
                return Err(err.network());
            }
        };

        if response.is_success() {
            return Ok(response);
        }

        if response.status == 401 {
            self.handle_unauthorized(&path).await;
        }

        let message = ErrorBody::from_bytes(&response.body).into_message();
        let error = err.from_status(response.status, message);
        tracing::warn!(%method, path = %path, status = response.status, error = %error, "Request rejected");
        Err(error)
    }

    /// Decode the `{ success, message, data }` envelope; `success: false` is an error.
    pub async fn envelope<T: DeserializeOwned>(
        &self,
        request: HttpRequest,
        err: &ErrorContext,
    ) -> Result<ApiResponse<T>, ClientError> {
        let response = self.send(request, err).await?;
        let envelope: ApiResponse<T> = decode(&response, err)?;
        if !envelope.success {
            return Err(err.rejected(envelope.message.as_deref()));
        }
        Ok(envelope)
    }

    /// The envelope's `data`, which must be present.
    pub async fn data<T: DeserializeOwned>(
        &self,
        request: HttpRequest,
        err: &ErrorContext,
    ) -> Result<T, ClientError> {
        self.envelope(request, err)
            .await?
            .data
            .ok_or_else(|| err.decode())
    }

    /// The envelope's `data`, defaulting when the backend sent none.
    pub async fn data_or_default<T: DeserializeOwned + Default>(
        &self,
        request: HttpRequest,
        err: &ErrorContext,
    ) -> Result<T, ClientError> {
        Ok(self.envelope(request, err).await?.data.unwrap_or_default())
    }

    /// An envelope whose payload the caller does not need.
    pub async fn ack(
        &self,
        request: HttpRequest,
        err: &ErrorContext,
    ) -> Result<ApiResponse<Value>, ClientError> {
        self.envelope(request, err).await
    }

    /// Endpoints that answer with a bare value instead of an envelope.
    pub async fn value<T: DeserializeOwned>(
        &self,
        request: HttpRequest,
        err: &ErrorContext,
    ) -> Result<T, ClientError> {
        let response = self.send(request, err).await?;
        decode(&response, err)
    }

    fn authorize(&self, request: HttpRequest) -> HttpRequest {
        match self.session.token() {
            Some(token) => {
                tracing::debug!(path = %request.path, token = %token_preview(&token), "Request made with token");
                request.header("Authorization", format!("Bearer {token}"))
            }
            None => {
                tracing::debug!(path = %request.path, "No auth token; sending unauthenticated");
                request
            }
        }
    }

    async fn handle_unauthorized(&self, path: &str) {
        tracing::warn!(path, "401 received");
        if path.contains("/auth") {
            return;
        }

        self.session.clear().await;

        let navigator = &self.ctx.navigator;
        if navigator.current_path() != self.login_path {
            navigator.navigate(self.login_path);
        }
    }
}

pub(crate) fn decode<T: DeserializeOwned>(
    response: &HttpResponse,
    err: &ErrorContext,
) -> Result<T, ClientError> {
    response.decode().map_err(|e| {
        tracing::warn!(error = %e, "Unexpected response format");
        err.decode()
    })
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Arc;

    use iga_infra::{HeadlessNavigator, InMemoryEventBus, InMemorySessionStore, ScriptedTransport};

    use crate::context::ClientContext;

    /// Ports wired to in-memory adapters, kept typed for assertions.
    pub struct Harness {
        pub transport: Arc<ScriptedTransport>,
        pub store: Arc<InMemorySessionStore>,
        pub events: Arc<InMemoryEventBus>,
        pub navigator: Arc<HeadlessNavigator>,
    }

    impl Harness {
        pub fn new() -> Self {
            Self::at("/")
        }

        pub fn at(path: &str) -> Self {
            Self {
                transport: Arc::new(ScriptedTransport::new()),
                store: Arc::new(InMemorySessionStore::new()),
                events: Arc::new(InMemoryEventBus::default()),
                navigator: Arc::new(HeadlessNavigator::new("http://localhost:5173").at(path)),
            }
        }

        pub fn with_token(self, token: &str) -> Self {
            use iga_core::ports::SessionStore;
            let _ = self.store.set("authtoken", token);
            self
        }

        pub fn context(&self) -> ClientContext {
            ClientContext::new(
                self.transport.clone(),
                self.store.clone(),
                self.events.clone(),
                self.navigator.clone(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::Harness;
    use super::*;
    use futures::StreamExt;
    use iga_core::ports::{ClientEvent, EventBus, Method, SessionStore};
    use serde_json::json;

    const FETCH: ErrorContext = ErrorContext::new("Failed to fetch students");

    #[tokio::test]
    async fn test_bearer_header_attached() {
        let h = Harness::new().with_token("abc");
        h.transport
            .json(Method::Get, "/courses/all", 200, json!({"success": true, "data": []}));
        let api = ApiClient::new(h.context(), Role::Student);

        let courses: Vec<Value> = api.data(HttpRequest::get("/courses/all"), &FETCH).await.unwrap();

        assert!(courses.is_empty());
        let sent = h.transport.last_request().unwrap();
        assert_eq!(sent.header_value("Authorization"), Some("Bearer abc"));
    }

    #[tokio::test]
    async fn test_no_token_sends_unauthenticated() {
        let h = Harness::new();
        h.transport
            .json(Method::Get, "/courses/all", 200, json!({"success": true, "data": []}));
        let api = ApiClient::new(h.context(), Role::Student);

        let _: Vec<Value> = api.data(HttpRequest::get("/courses/all"), &FETCH).await.unwrap();
        assert_eq!(h.transport.last_request().unwrap().header_value("Authorization"), None);
    }

    #[tokio::test]
    async fn test_401_tears_down_session_and_redirects_once() {
        let h = Harness::at("/admin/students").with_token("abc");
        h.store.set("userRole", "ADMIN").unwrap();
        h.store.set("studentProfile", "{}").unwrap();
        h.store.set("approvalStatus", "APPROVED").unwrap();
        h.transport
            .json(Method::Get, "/admin/students", 401, json!({"message": "Token expired"}));
        let api = ApiClient::new(h.context(), Role::Admin);
        let mut events = h.events.subscribe();

        let first = api.ack(HttpRequest::get("/admin/students"), &FETCH).await;
        let second = api.ack(HttpRequest::get("/admin/students"), &FETCH).await;

        assert_eq!(first.unwrap_err(), ClientError::Unauthorized("Token expired".into()));
        assert!(second.unwrap_err().is_unauthorized());
        assert!(h.store.keys().is_empty());
        assert_eq!(h.navigator.history(), vec!["/admin/login".to_string()]);
        assert_eq!(events.next().await, Some(ClientEvent::AuthChanged));
    }

    #[tokio::test]
    async fn test_401_on_auth_path_keeps_session() {
        let h = Harness::at("/student/login").with_token("abc");
        h.transport
            .json(Method::Post, "/auth/login", 401, json!({"message": "Bad credentials"}));
        let api = ApiClient::new(h.context(), Role::Student);

        let err = api.ack(HttpRequest::post("/auth/login"), &FETCH).await.unwrap_err();

        assert_eq!(err.to_string(), "Bad credentials");
        assert_eq!(h.store.get("authtoken").as_deref(), Some("abc"));
        assert!(h.navigator.history().is_empty());
    }

    #[tokio::test]
    async fn test_401_on_login_page_does_not_navigate() {
        let h = Harness::at("/student/login").with_token("abc");
        h.transport.json(Method::Get, "/student/profile", 401, json!({}));
        let api = ApiClient::new(h.context(), Role::Student);

        let err = api.ack(HttpRequest::get("/student/profile"), &FETCH).await.unwrap_err();

        assert_eq!(err.to_string(), iga_core::error::SESSION_EXPIRED);
        assert!(h.store.get("authtoken").is_none());
        assert!(h.navigator.history().is_empty());
    }

    #[tokio::test]
    async fn test_network_failure_and_rejection() {
        let h = Harness::new();
        h.transport.fail(Method::Get, "/admin/students");
        h.transport.json(
            Method::Get,
            "/admin/instructors",
            200,
            json!({"success": false, "message": "Nope"}),
        );
        let api = ApiClient::new(h.context(), Role::Admin);

        let net = api.ack(HttpRequest::get("/admin/students"), &FETCH).await.unwrap_err();
        let rejected = api.ack(HttpRequest::get("/admin/instructors"), &FETCH).await.unwrap_err();

        assert_eq!(net.to_string(), iga_core::error::NETWORK_ERROR);
        assert_eq!(rejected, ClientError::Rejected("Nope".into()));
    }

    #[tokio::test]
    async fn test_missing_data_is_decode_error() {
        let h = Harness::new();
        h.transport
            .json(Method::Get, "/admin/profile", 200, json!({"success": true}));
        let api = ApiClient::new(h.context(), Role::Admin);

        let err = api
            .data::<Value>(HttpRequest::get("/admin/profile"), &FETCH)
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }
}
