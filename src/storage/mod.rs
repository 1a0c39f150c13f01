// src/storage/mod.rs
//
// Durable substrate
//
// PRINCIPLES:
// - One narrow interface: get/set of strings by key
// - Backends are injected, never reached for globally
// - No hidden file or directory creation outside the store root

pub mod file_store;
pub mod key_value;
pub mod memory_store;

pub use file_store::FileStore;
pub use key_value::KeyValueStore;
pub use memory_store::MemoryStore;
