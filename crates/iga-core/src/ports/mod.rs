//! Ports - trait definitions for everything outside the client.
//! Infrastructure adapters implement these; tests swap in scripted ones.

mod event_bus;
mod http;
mod navigator;
mod session_store;

pub use event_bus::{ClientEvent, EventBus, EventError};
pub use http::{
    FileUpload, FormField, FormValue, HttpRequest, HttpResponse, HttpTransport, Method,
    RequestBody, TransportError,
};
pub use navigator::Navigator;
pub use session_store::{SessionStore, StoreError};
