use async_trait::async_trait;
use futures::stream::BoxStream;

use iga_shared::dto::PaymentResponse;

/// Notifications broadcast to the rest of the process.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    /// Auth state was written or cleared.
    AuthChanged,
    /// A checkout was verified by the backend.
    PaymentCompleted(PaymentResponse),
}

impl ClientEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ClientEvent::AuthChanged => "iga:auth-changed",
            ClientEvent::PaymentCompleted(_) => "iga:payment-completed",
        }
    }
}

/// In-process broadcast of [`ClientEvent`]s.
#[async_trait]
pub trait EventBus: Send + Sync {
    /// Broadcast an event. Having no subscribers is not an error.
    async fn publish(&self, event: ClientEvent) -> Result<(), EventError>;

    /// Stream of events published after this call.
    fn subscribe(&self) -> BoxStream<'static, ClientEvent>;
}

#[derive(Debug, thiserror::Error)]
pub enum EventError {
    #[error("Event bus closed")]
    Closed,

    #[error("Publish failed: {0}")]
    Publish(String),
}
