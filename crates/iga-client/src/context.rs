use std::sync::Arc;

use iga_core::ports::{EventBus, HttpTransport, Navigator, SessionStore};

/// The ports every client shares.
#[derive(Clone)]
pub struct ClientContext {
    pub transport: Arc<dyn HttpTransport>,
    pub session: Arc<dyn SessionStore>,
    pub events: Arc<dyn EventBus>,
    pub navigator: Arc<dyn Navigator>,
}

impl ClientContext {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        session: Arc<dyn SessionStore>,
        events: Arc<dyn EventBus>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            transport,
            session,
            events,
            navigator,
        }
    }
}
