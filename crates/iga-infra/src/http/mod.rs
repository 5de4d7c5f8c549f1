//! HTTP transports - reqwest for real traffic, scripted for tests.

#[cfg(any(test, feature = "testing"))]
mod scripted;

#[cfg(feature = "http")]
mod config;
#[cfg(feature = "http")]
mod reqwest_transport;

#[cfg(any(test, feature = "testing"))]
pub use scripted::{Reply, ScriptedTransport};

#[cfg(feature = "http")]
pub use config::HttpConfig;
#[cfg(feature = "http")]
pub use reqwest_transport::ReqwestTransport;
