//! Session store implementations

pub mod file;
pub mod memory;

pub use file::{noise_home, FileSessionStore, SESSION_FILE_NAME};
pub use memory::MemorySessionStore;
