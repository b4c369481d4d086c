//! Cache Façade Module
//!
//! Stores values under freshly generated keys and reads them back, delegating
//! every command to a [`KeyValueStore`].

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::cache::{CacheValue, Instrumentation};
use crate::error::{CacheError, Result};
use crate::store::KeyValueStore;

/// Qualified name under which `store` calls are counted and recorded.
pub const STORE_OPERATION: &str = "Cache.store";

// == Cache ==
/// Façade over an external key-value store.
#[derive(Debug)]
pub struct Cache<S: KeyValueStore> {
    /// Store handle, exclusively owned
    store: S,
    /// Stages wrapped around `store`
    instrumentation: Instrumentation,
}

impl<S: KeyValueStore> Cache<S> {
    // == Constructor ==
    /// Creates a cache over `store` with call counting and call history
    /// enabled.
    ///
    /// **Destructive:** the store is flushed unconditionally. Every key in the
    /// namespace the handle addresses is gone once this returns.
    pub fn new(store: S) -> Result<Self> {
        Self::with_instrumentation(store, Instrumentation::default())
    }

    /// Same as [`Cache::new`] with explicit stages. Also flushes the store.
    pub fn with_instrumentation(mut store: S, instrumentation: Instrumentation) -> Result<Self> {
        store.flush()?;
        info!(
            stages = ?instrumentation.stages(),
            "Cache initialized, store namespace flushed"
        );
        Ok(Self {
            store,
            instrumentation,
        })
    }

    // == Store ==
    /// Writes `value` under a new v4 UUID key and returns the key.
    ///
    /// Counter and history updates run around the write; a failure in any of
    /// them fails the whole call.
    pub fn store(&mut self, value: impl Into<CacheValue>) -> Result<String> {
        let value = value.into();
        let args = format!("({},)", value.repr());
        let kind = value.kind();

        let key = self
            .instrumentation
            .run(&mut self.store, STORE_OPERATION, &args, |store| {
                let key = Uuid::new_v4().to_string();
                store.set(&key, value.into_bytes())?;
                Ok(key)
            })?;

        debug!(key = %key, kind, "Stored value");
        Ok(key)
    }

    // == Get ==
    /// Returns the raw bytes under `key`, `None` if absent.
    pub fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>> {
        let value = self.store.get(key)?;
        debug!(key, found = value.is_some(), "Fetched value");
        Ok(value)
    }

    /// Returns `transform` applied to the bytes under `key`.
    ///
    /// An absent key yields `None` and `transform` is never called.
    pub fn get_with<T, F>(&mut self, key: &str, transform: F) -> Result<Option<T>>
    where
        F: FnOnce(Vec<u8>) -> T,
    {
        Ok(self.get(key)?.map(transform))
    }

    // == Typed Getters ==
    /// Decodes the value under `key` as UTF-8.
    ///
    /// Fails with `NotFound` when absent and `Decode` on invalid UTF-8.
    pub fn get_str(&mut self, key: &str) -> Result<String> {
        match self.get_with(key, String::from_utf8)? {
            Some(text) => Ok(text?),
            None => Err(CacheError::NotFound(key.to_string())),
        }
    }

    /// Parses the value under `key` as a base-10 integer.
    ///
    /// Lenient: an absent key, invalid UTF-8 or non-numeric text all return
    /// `Ok(0)`, so a stored zero cannot be told apart from a parse failure.
    /// Store failures still propagate. See [`Cache::try_get_int`] for the
    /// strict variant.
    pub fn get_int(&mut self, key: &str) -> Result<i64> {
        let parsed = self.get_with(key, |raw| parse_int(&raw))?.flatten();
        Ok(parsed.unwrap_or_else(|| {
            warn!(key, "Value missing or not an integer, returning 0");
            0
        }))
    }

    /// Strict integer read: `None` when absent, `NotAnInteger` when the
    /// value does not parse.
    pub fn try_get_int(&mut self, key: &str) -> Result<Option<i64>> {
        match self.get_with(key, |raw| parse_int(&raw))? {
            Some(Some(n)) => Ok(Some(n)),
            Some(None) => Err(CacheError::NotAnInteger(key.to_string())),
            None => Ok(None),
        }
    }

    // == Accessors ==
    /// Direct access to the store handle, e.g. for [`replay`](crate::cache::replay()).
    pub fn store_handle(&mut self) -> &mut S {
        &mut self.store
    }

    /// Shared access to the store handle.
    pub fn store_ref(&self) -> &S {
        &self.store
    }

    pub fn instrumentation(&self) -> &Instrumentation {
        &self.instrumentation
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

fn parse_int(raw: &[u8]) -> Option<i64> {
    std::str::from_utf8(raw).ok()?.trim().parse().ok()
}
