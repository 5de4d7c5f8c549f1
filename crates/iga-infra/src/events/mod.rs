//! Event bus implementations.

mod memory;

pub use memory::InMemoryEventBus;
