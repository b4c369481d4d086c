//! Store Module
//!
//! The external key-value store the cache façade delegates to, and an
//! ephemeral in-process implementation of it.

mod entry;
mod memory;
mod stats;

pub use entry::StoreEntry;
pub use memory::MemoryStore;
pub use stats::StoreStats;

use crate::error::Result;

// == Key-Value Store ==
/// Primitives the façade needs from an external key-value store.
///
/// Each call is a single round trip and is atomic on its own. Nothing here
/// spans more than one key.
pub trait KeyValueStore {
    /// Writes `key → value`, replacing whatever the key held before.
    fn set(&mut self, key: &str, value: Vec<u8>) -> Result<()>;

    /// Reads the bytes stored under `key`, `None` if absent.
    fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Increments the integer stored under `key` and returns the new value.
    /// A missing key counts from 0.
    fn incr(&mut self, key: &str) -> Result<i64>;

    /// Appends `value` to the list under `key`, returning the new length.
    fn rpush(&mut self, key: &str, value: Vec<u8>) -> Result<usize>;

    /// Returns list elements `start..=stop`. Negative indices count from the
    /// tail; a missing key is an empty list.
    fn lrange(&mut self, key: &str, start: isize, stop: isize) -> Result<Vec<Vec<u8>>>;

    /// Removes every key in the namespace this handle addresses.
    fn flush(&mut self) -> Result<()>;
}
