//! Client-facing error types.
//!
//! Every failure surfaces once as a [`ClientError`] whose `Display` is the
//! message shown to the user. [`ErrorContext`] carries the per-operation
//! fallbacks used when the backend gives no message of its own.

use thiserror::Error;

pub const SESSION_EXPIRED: &str = "Session expired. Please login again.";
pub const ACCESS_DENIED: &str = "Access denied. Please contact admin.";
pub const FILE_TOO_LARGE: &str = "File size too large. Please upload smaller files.";
pub const NETWORK_ERROR: &str = "Network error. Please check your connection.";
pub const INVALID_DATA: &str = "Invalid data provided";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    BadRequest(String),

    /// 2xx answer whose envelope says `success: false`.
    #[error("{0}")]
    Rejected(String),

    /// No response arrived.
    #[error("{0}")]
    Network(String),

    #[error("{0}")]
    Decode(String),

    #[error("{message}")]
    Server { status: u16, message: String },
}

impl ClientError {
    pub fn message(&self) -> &str {
        match self {
            ClientError::Unauthorized(m)
            | ClientError::Forbidden(m)
            | ClientError::NotFound(m)
            | ClientError::PayloadTooLarge(m)
            | ClientError::Conflict(m)
            | ClientError::BadRequest(m)
            | ClientError::Rejected(m)
            | ClientError::Network(m)
            | ClientError::Decode(m) => m,
            ClientError::Server { message, .. } => message,
        }
    }

    /// HTTP status behind this error, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Unauthorized(_) => Some(401),
            ClientError::Forbidden(_) => Some(403),
            ClientError::NotFound(_) => Some(404),
            ClientError::PayloadTooLarge(_) => Some(413),
            ClientError::Conflict(_) => Some(409),
            ClientError::BadRequest(_) => Some(400),
            ClientError::Server { status, .. } => Some(*status),
            ClientError::Rejected(_) | ClientError::Network(_) | ClientError::Decode(_) => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Unauthorized(_))
    }
}

/// Fallback messages for one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorContext {
    failure: &'static str,
    entity: Option<&'static str>,
    forbidden: Option<&'static str>,
    conflict: Option<&'static str>,
    invalid: Option<&'static str>,
}

impl ErrorContext {
    pub const fn new(failure: &'static str) -> Self {
        Self {
            failure,
            entity: None,
            forbidden: None,
            conflict: None,
            invalid: None,
        }
    }

    /// Name used in "<Entity> not found." on 404.
    pub const fn entity(mut self, entity: &'static str) -> Self {
        self.entity = Some(entity);
        self
    }

    pub const fn forbidden(mut self, message: &'static str) -> Self {
        self.forbidden = Some(message);
        self
    }

    pub const fn conflict(mut self, message: &'static str) -> Self {
        self.conflict = Some(message);
        self
    }

    pub const fn invalid(mut self, message: &'static str) -> Self {
        self.invalid = Some(message);
        self
    }

    pub fn failure(&self) -> &'static str {
        self.failure
    }

    /// Classify a non-2xx status. The backend message wins over any fallback.
    pub fn from_status(&self, status: u16, backend_message: Option<String>) -> ClientError {
        let message = |fallback: String| backend_message.clone().unwrap_or(fallback);
        match status {
            400 => ClientError::BadRequest(message(self.invalid.unwrap_or(INVALID_DATA).to_string())),
            401 => ClientError::Unauthorized(message(SESSION_EXPIRED.to_string())),
            403 => ClientError::Forbidden(message(self.forbidden.unwrap_or(ACCESS_DENIED).to_string())),
            404 => ClientError::NotFound(message(match self.entity {
                Some(entity) => format!("{entity} not found."),
                None => self.failure.to_string(),
            })),
            409 => ClientError::Conflict(message(self.conflict.unwrap_or(self.failure).to_string())),
            413 => ClientError::PayloadTooLarge(message(FILE_TOO_LARGE.to_string())),
            _ => ClientError::Server {
                status,
                message: message(self.failure.to_string()),
            },
        }
    }

    pub fn network(&self) -> ClientError {
        ClientError::Network(NETWORK_ERROR.to_string())
    }

    /// A 2xx envelope with `success: false`.
    pub fn rejected(&self, backend_message: Option<&str>) -> ClientError {
        let message = backend_message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(self.failure);
        ClientError::Rejected(message.to_string())
    }

    pub fn decode(&self) -> ClientError {
        ClientError::Decode(format!("{}: unexpected response format", self.failure))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FETCH_COURSE: ErrorContext = ErrorContext::new("Failed to fetch course")
        .entity("Course")
        .forbidden("Access denied. You can only view your own courses.");

    #[test]
    fn test_backend_message_wins() {
        let err = FETCH_COURSE.from_status(404, Some("No course with that id".into()));
        assert_eq!(err, ClientError::NotFound("No course with that id".into()));
    }

    #[test]
    fn test_status_fallbacks() {
        assert_eq!(FETCH_COURSE.from_status(401, None).to_string(), SESSION_EXPIRED);
        assert_eq!(
            FETCH_COURSE.from_status(403, None).to_string(),
            "Access denied. You can only view your own courses."
        );
        assert_eq!(FETCH_COURSE.from_status(404, None).to_string(), "Course not found.");
        assert_eq!(FETCH_COURSE.from_status(413, None).to_string(), FILE_TOO_LARGE);
        assert_eq!(FETCH_COURSE.from_status(400, None).to_string(), INVALID_DATA);
        assert_eq!(
            FETCH_COURSE.from_status(500, None),
            ClientError::Server {
                status: 500,
                message: "Failed to fetch course".into()
            }
        );
    }

    #[test]
    fn test_network_and_rejected() {
        assert_eq!(FETCH_COURSE.network().to_string(), NETWORK_ERROR);
        assert_eq!(FETCH_COURSE.network().status(), None);
        assert_eq!(FETCH_COURSE.rejected(Some("  ")).to_string(), "Failed to fetch course");
        assert_eq!(FETCH_COURSE.rejected(Some("Closed")).to_string(), "Closed");
    }
}
