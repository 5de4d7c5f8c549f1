//! Pure client-side rules.

pub mod auth;
pub mod format;
pub mod payment;
pub mod session_keys;
pub mod stats;
