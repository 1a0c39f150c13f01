// src/storage/key_value.rs

use crate::error::AppResult;

/// Process-wide durable string store.
///
/// The persistence model is deliberately minimal: values survive process
/// restarts on the same machine profile, nothing is shared across
/// machines, and there is no concurrent-access control. Writers race at
/// whole-value granularity; the last write wins.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, or `None` if the key was never
    /// written.
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> AppResult<()>;
}
