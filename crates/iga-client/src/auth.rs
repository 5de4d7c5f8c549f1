//! Login and signup responses: locating the token and role, then persisting them.

use serde::Serialize;
use serde_json::Value;

use iga_core::domain::auth::{extract_role, extract_token};
use iga_core::ports::HttpRequest;
use iga_core::{ClientError, ErrorContext};

use crate::api::{ApiClient, decode};

/// Outcome of an auth call, after the session has been updated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResult {
    pub message: Option<String>,
    pub role: Option<String>,
    /// Whether a token was found and stored.
    pub authenticated: bool,
    pub data: Option<Value>,
}

/// Raw auth response with its credentials located but not yet stored.
pub(crate) struct AuthResponse {
    pub success: bool,
    pub message: Option<String>,
    pub token: Option<String>,
    pub role: Option<String>,
    pub data: Option<Value>,
}

impl AuthResponse {
    pub fn into_result(self, authenticated: bool) -> AuthResult {
        AuthResult {
            message: self.message,
            role: self.role,
            authenticated,
            data: self.data,
        }
    }
}

impl ApiClient {
    pub(crate) async fn auth_call(
        &self,
        request: HttpRequest,
        err: &ErrorContext,
    ) -> Result<AuthResponse, ClientError> {
        let response = self.send(request, err).await?;
        let body: Value = decode(&response, err)?;

        Ok(AuthResponse {
            success: body.get("success").and_then(Value::as_bool).unwrap_or(true),
            message: body
                .get("message")
                .and_then(Value::as_str)
                .filter(|m| !m.trim().is_empty())
                .map(str::to_string),
            token: extract_token(&body, response.header("authorization")),
            role: extract_role(&body),
            data: body.get("data").filter(|d| !d.is_null()).cloned(),
        })
    }

    /// Store whatever credentials the response carried.
    pub(crate) async fn persist_credentials(&self, auth: AuthResponse) -> AuthResult {
        let authenticated = match &auth.token {
            Some(token) => {
                self.session().persist_token(token).await;
                true
            }
            None => false,
        };
        if let Some(role) = &auth.role {
            self.session().persist_role(role);
        }
        auth.into_result(authenticated)
    }

    /// Staff logins: a successful response must carry a token. The role is
    /// pinned to `role` and the returned user is kept as `userInfo`.
    pub(crate) async fn staff_login(
        &self,
        request: HttpRequest,
        role: &str,
        err: &ErrorContext,
    ) -> Result<AuthResult, ClientError> {
        let auth = self.auth_call(request, err).await?;
        let Some(token) = auth.token.clone().filter(|_| auth.success) else {
            return Err(err.rejected(auth.message.as_deref()));
        };

        self.session().persist_token(&token).await;
        self.session().persist_role(role);
        if let Some(data) = &auth.data {
            self.session().set_user_info(data);
        }

        let mut result = auth.into_result(true);
        result.role = Some(role.to_string());
        Ok(result)
    }
}
