//! Request DTOs for the cache API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::cache::CacheValue;

/// Maximum accepted size of a serialized value, in bytes
pub const MAX_VALUE_SIZE: usize = 1024 * 1024; // 1 MB

/// Request body for the STORE operation (POST /store)
///
/// Tagged by kind, e.g. `{"type": "int", "value": 42}` or
/// `{"type": "bytes", "value": [99, 97, 102]}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum StoreRequest {
    Text(String),
    Bytes(Vec<u8>),
    Int(i64),
    Float(f64),
}

impl StoreRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        let size = match self {
            StoreRequest::Text(text) => text.len(),
            StoreRequest::Bytes(bytes) => bytes.len(),
            StoreRequest::Int(_) | StoreRequest::Float(_) => 0,
        };
        if size > MAX_VALUE_SIZE {
            return Some(format!(
                "Value exceeds maximum size of {} bytes",
                MAX_VALUE_SIZE
            ));
        }
        None
    }
}

impl From<StoreRequest> for CacheValue {
    fn from(req: StoreRequest) -> Self {
        match req {
            StoreRequest::Text(text) => CacheValue::Text(text),
            StoreRequest::Bytes(bytes) => CacheValue::Bytes(bytes),
            StoreRequest::Int(n) => CacheValue::Int(n),
            StoreRequest::Float(x) => CacheValue::Float(x),
        }
    }
}
