//! # IGA Shared
//!
//! Wire types mirrored from the marketplace backend's JSON.
//! Field names follow the backend's camelCase; optional fields default when absent.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorBody};
