//! # IGA Core
//!
//! The client-side domain layer of the IGA course marketplace.
//! Ports describe the outside world (HTTP, persisted session, navigation,
//! in-process notifications); domain modules hold pure rules such as error
//! classification and display formatting. No I/O happens in this crate.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{ClientError, ErrorContext};
