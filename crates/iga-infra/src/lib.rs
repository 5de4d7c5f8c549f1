//! # IGA Infrastructure
//!
//! Concrete implementations of the ports defined in `iga-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - In-memory adapters only
//! - `http` - Real HTTP transport via reqwest
//! - `testing` - Scripted transport for tests

pub mod events;
pub mod http;
pub mod navigator;
pub mod session;

// Re-exports - In-Memory
pub use events::InMemoryEventBus;
pub use navigator::HeadlessNavigator;
pub use session::{FileSessionStore, InMemorySessionStore};

// Re-exports - HTTP
#[cfg(feature = "http")]
pub use http::{HttpConfig, ReqwestTransport};

// Re-exports - Testing
/// Scripted transport for tests; enable the `testing` feature.
#[cfg(any(test, feature = "testing"))]
pub use http::ScriptedTransport;
