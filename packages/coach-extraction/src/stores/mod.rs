//! Storage implementations for coach contacts.
//!
//! Available backends:
//! - `MemoryStore` - In-memory storage for tests, dry runs and the CLI

pub mod memory;

pub use memory::MemoryStore;
