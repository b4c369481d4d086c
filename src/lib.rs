//! KV Cache - an instrumented cache façade over an external key-value store
//!
//! Stores values under generated keys, counts and records `store` calls, and
//! replays the recorded history.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::AppState;
pub use cache::{Cache, CacheValue, Instrumentation, Stage};
pub use config::Config;
pub use error::{CacheError, Result};
pub use store::{KeyValueStore, MemoryStore};
