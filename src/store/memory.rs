//! Memory Store Module
//!
//! Ephemeral in-process implementation of [`KeyValueStore`]. Nothing is
//! persisted, evicted or expired.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{CacheError, Result};
use crate::store::entry::resolve_range;
use crate::store::{KeyValueStore, StoreEntry, StoreStats};

// == Memory Store ==
/// HashMap-backed key-value store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Key-value storage
    entries: HashMap<String, StoreEntry>,
    /// Activity statistics
    stats: StoreStats,
}

impl MemoryStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Stats ==
    /// Returns current store statistics.
    pub fn stats(&self) -> StoreStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if `key` holds any value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    fn record_read(&mut self, found: bool) {
        if found {
            self.stats.record_hit();
        } else {
            self.stats.record_miss();
        }
    }

    fn record_write(&mut self) {
        self.stats.record_write();
        self.stats.set_total_entries(self.entries.len());
    }
}

impl KeyValueStore for MemoryStore {
    fn set(&mut self, key: &str, value: Vec<u8>) -> Result<()> {
        self.entries.insert(key.to_string(), StoreEntry::Bytes(value));
        self.record_write();
        Ok(())
    }

    fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>> {
        let value = match self.entries.get(key) {
            Some(entry) => Some(entry.as_bytes(key)?.to_vec()),
            None => None,
        };
        self.record_read(value.is_some());
        Ok(value)
    }

    fn incr(&mut self, key: &str) -> Result<i64> {
        let current = match self.entries.get(key) {
            Some(entry) => {
                let raw = entry.as_bytes(key)?;
                std::str::from_utf8(raw)
                    .ok()
                    .and_then(|text| text.parse::<i64>().ok())
                    .ok_or_else(|| CacheError::NotAnInteger(key.to_string()))?
            }
            None => 0,
        };

        let next = current
            .checked_add(1)
            .ok_or_else(|| CacheError::NotAnInteger(key.to_string()))?;

        self.entries.insert(
            key.to_string(),
            StoreEntry::Bytes(next.to_string().into_bytes()),
        );
        self.record_write();
        Ok(next)
    }

    fn rpush(&mut self, key: &str, value: Vec<u8>) -> Result<usize> {
        let entry = self
            .entries
            .entry(key.to_string())
            .or_insert_with(|| StoreEntry::List(Vec::new()));
        let items = entry.as_list_mut(key)?;
        items.push(value);
        let len = items.len();

        self.record_write();
        Ok(len)
    }

    fn lrange(&mut self, key: &str, start: isize, stop: isize) -> Result<Vec<Vec<u8>>> {
        let found = self.entries.contains_key(key);
        let items = match self.entries.get(key) {
            Some(entry) => {
                let items = entry.as_list(key)?;
                match resolve_range(items.len(), start, stop) {
                    Some((from, to)) => items[from..=to].to_vec(),
                    None => Vec::new(),
                }
            }
            None => Vec::new(),
        };
        self.record_read(found);
        Ok(items)
    }

    fn flush(&mut self) -> Result<()> {
        let removed = self.entries.len();
        self.entries.clear();
        self.stats.set_total_entries(0);
        debug!("Flushed {} keys from memory store", removed);
        Ok(())
    }
}
