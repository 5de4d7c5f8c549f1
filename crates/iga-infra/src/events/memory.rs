//! In-process event bus on a tokio broadcast channel.

use async_trait::async_trait;
use futures::StreamExt;
use futures::stream::{self, BoxStream};
use tokio::sync::broadcast;

use iga_core::ports::{ClientEvent, EventBus, EventError};

pub struct InMemoryEventBus {
    sender: broadcast::Sender<ClientEvent>,
}

impl InMemoryEventBus {
    pub fn new(buffer_size: usize) -> Self {
        let (sender, _) = broadcast::channel(buffer_size);
        Self { sender }
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for InMemoryEventBus {
    fn default() -> Self {
        Self::new(64)
    }
}

#[async_trait]
impl EventBus for InMemoryEventBus {
    async fn publish(&self, event: ClientEvent) -> Result<(), EventError> {
        let name = event.name();
        match self.sender.send(event) {
            Ok(receivers) => tracing::debug!(event = name, receivers, "Event published"),
            // No subscribers
            Err(_) => tracing::debug!(event = name, "No subscribers for event"),
        }
        Ok(())
    }

    fn subscribe(&self) -> BoxStream<'static, ClientEvent> {
        let receiver = self.sender.subscribe();

        stream::unfold(receiver, |mut receiver| async move {
            loop {
                match receiver.recv().await {
                    Ok(event) => return Some((event, receiver)),
                    Err(broadcast::error::RecvError::Lagged(count)) => {
                        tracing::warn!(lagged = count, "Event subscriber lagged behind");
                    }
                    Err(broadcast::error::RecvError::Closed) => {
                        tracing::debug!("Event bus closed");
                        return None;
                    }
                }
            }
        })
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subscriber_receives_in_order() {
        let bus = InMemoryEventBus::default();
        let mut events = bus.subscribe();

        bus.publish(ClientEvent::AuthChanged).await.unwrap();
        bus.publish(ClientEvent::PaymentCompleted(Default::default()))
            .await
            .unwrap();

        assert_eq!(events.next().await, Some(ClientEvent::AuthChanged));
        assert!(matches!(events.next().await, Some(ClientEvent::PaymentCompleted(_))));
    }

    #[tokio::test]
    async fn test_publish_without_subscribers() {
        let bus = InMemoryEventBus::default();
        assert_eq!(bus.subscriber_count(), 0);
        assert!(bus.publish(ClientEvent::AuthChanged).await.is_ok());
    }

    #[tokio::test]
    async fn test_stream_ends_when_bus_dropped() {
        let bus = InMemoryEventBus::default();
        let mut events = bus.subscribe();
        drop(bus);
        assert_eq!(events.next().await, None);
    }
}
