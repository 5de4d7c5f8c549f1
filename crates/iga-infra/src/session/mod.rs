//! Session store implementations - in-memory and JSON file backed.

mod file;
mod memory;

pub use file::FileSessionStore;
pub use memory::InMemorySessionStore;
