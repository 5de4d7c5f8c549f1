//! Session bookkeeping on top of the [`SessionStore`] port.
//!
//! Storage failures are logged and swallowed: a session that cannot be
//! written behaves like a logged-out one, it never fails the API call.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use iga_core::domain::auth::token_preview;
use iga_core::domain::session_keys;
use iga_core::ports::{ClientEvent, EventBus, SessionStore};
use iga_shared::dto::{ApprovalStatus, Role, UserProfile};

#[derive(Clone)]
pub struct SessionManager {
    store: Arc<dyn SessionStore>,
    events: Arc<dyn EventBus>,
}

/// What is known about the current session, for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub authenticated: bool,
    pub role: Option<String>,
    pub approval_status: Option<String>,
    pub profile: Option<Value>,
    pub user_info: Option<Value>,
}

impl SessionManager {
    pub fn new(store: Arc<dyn SessionStore>, events: Arc<dyn EventBus>) -> Self {
        Self { store, events }
    }

    pub fn token(&self) -> Option<String> {
        self.store
            .get(session_keys::AUTH_TOKEN)
            .filter(|t| !t.trim().is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.store
            .get(session_keys::USER_ROLE)
            .and_then(|r| Role::parse(&r))
    }

    /// Store a non-blank token and announce the change.
    pub async fn persist_token(&self, token: &str) {
        if token.trim().is_empty() {
            return;
        }
        self.write(session_keys::AUTH_TOKEN, token);
        tracing::debug!(token = %token_preview(token), "Auth token stored");
        self.notify(ClientEvent::AuthChanged).await;
    }

    pub fn persist_role(&self, role: &str) {
        if !role.trim().is_empty() {
            self.write(session_keys::USER_ROLE, role);
        }
    }

    pub fn cache_profile<T: Serialize>(&self, profile: &T) {
        match serde_json::to_string(profile) {
            Ok(raw) => self.write(session_keys::STUDENT_PROFILE, &raw),
            Err(e) => tracing::warn!(error = %e, "Failed to persist profile cache"),
        }
    }

    pub fn cached_profile(&self) -> Option<UserProfile> {
        let raw = self.store.get(session_keys::STUDENT_PROFILE)?;
        serde_json::from_str(&raw)
            .map_err(|e| tracing::warn!(error = %e, "Failed to parse cached profile"))
            .ok()
    }

    pub fn clear_profile_cache(&self) {
        self.delete(session_keys::STUDENT_PROFILE);
    }

    pub fn set_user_info(&self, info: &Value) {
        self.write(session_keys::USER_INFO, &info.to_string());
    }

    pub fn user_info(&self) -> Option<Value> {
        self.store
            .get(session_keys::USER_INFO)
            .and_then(|raw| serde_json::from_str(&raw).ok())
    }

    pub fn set_approval_status(&self, status: &str) {
        self.write(session_keys::APPROVAL_STATUS, status);
    }

    pub fn approval_status(&self) -> Option<ApprovalStatus> {
        self.store
            .get(session_keys::APPROVAL_STATUS)
            .map(|s| ApprovalStatus::parse(&s))
    }

    /// Remove every session key and announce the change once.
    pub async fn clear(&self) {
        for key in session_keys::ALL {
            self.delete(key);
        }
        tracing::info!("Session cleared");
        self.notify(ClientEvent::AuthChanged).await;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            authenticated: self.is_authenticated(),
            role: self.store.get(session_keys::USER_ROLE),
            approval_status: self.store.get(session_keys::APPROVAL_STATUS),
            profile: self
                .store
                .get(session_keys::STUDENT_PROFILE)
                .and_then(|raw| serde_json::from_str(&raw).ok()),
            user_info: self.user_info(),
        }
    }

    pub(crate) async fn notify(&self, event: ClientEvent) {
        if let Err(e) = self.events.publish(event).await {
            tracing::warn!(error = %e, "Failed to publish client event");
        }
    }

    fn write(&self, key: &str, value: &str) {
        if let Err(e) = self.store.set(key, value) {
            tracing::warn!(key, error = %e, "Failed to write session key");
        }
    }

    fn delete(&self, key: &str) {
        if let Err(e) = self.store.remove(key) {
            tracing::warn!(key, error = %e, "Failed to remove session key");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use iga_infra::{InMemoryEventBus, InMemorySessionStore};

    fn manager() -> (SessionManager, Arc<InMemorySessionStore>, Arc<InMemoryEventBus>) {
        let store = Arc::new(InMemorySessionStore::new());
        let events = Arc::new(InMemoryEventBus::default());
        (SessionManager::new(store.clone(), events.clone()), store, events)
    }

    #[tokio::test]
    async fn test_persist_token_announces_change() {
        let (session, _, events) = manager();
        let mut stream = events.subscribe();

        session.persist_token("abc").await;
        assert_eq!(session.token().as_deref(), Some("abc"));
        assert_eq!(stream.next().await, Some(ClientEvent::AuthChanged));
    }

    #[tokio::test]
    async fn test_blank_token_is_ignored() {
        let (session, store, _) = manager();
        session.persist_token("   ").await;
        assert!(store.keys().is_empty());
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_clear_removes_every_key_once() {
        let (session, store, events) = manager();
        session.persist_token("abc").await;
        session.persist_role("INSTRUCTOR");
        session.set_approval_status("PENDING");
        session.set_user_info(&serde_json::json!({"email": "c@x.io"}));
        session.cache_profile(&UserProfile::default());

        let mut stream = events.subscribe();
        session.clear().await;

        assert!(store.keys().is_empty());
        assert_eq!(stream.next().await, Some(ClientEvent::AuthChanged));
        drop(events);
        drop(session);
        assert_eq!(stream.next().await, None);
    }

    #[tokio::test]
    async fn test_role_and_approval() {
        let (session, _, _) = manager();
        session.persist_role("ADMIN");
        session.set_approval_status("APPROVED");
        assert_eq!(session.role(), Some(Role::Admin));
        assert_eq!(session.approval_status(), Some(ApprovalStatus::Approved));
        assert!(session.cached_profile().is_none());
    }
}
