//! API Handlers
//!
//! HTTP request handlers for each cache endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::cache::{Cache, Transcript};
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{HealthResponse, StatsResponse, StoreRequest, StoreResponse, ValueResponse};
use crate::store::MemoryStore;

/// Application state shared across all handlers.
///
/// Contains the cache wrapped in Arc<RwLock<>>; the façade itself adds no
/// synchronization.
#[derive(Clone)]
pub struct AppState {
    /// Shared cache façade
    pub cache: Arc<RwLock<Cache<MemoryStore>>>,
}

impl AppState {
    /// Creates a new AppState around an already constructed cache.
    pub fn new(cache: Cache<MemoryStore>) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    /// Creates a new AppState from configuration, over a fresh memory store.
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache = Cache::with_instrumentation(MemoryStore::new(), config.instrumentation())?;
        Ok(Self::new(cache))
    }
}

/// Handler for POST /store
///
/// Stores a value under a freshly generated key.
pub async fn store_handler(
    State(state): State<AppState>,
    Json(req): Json<StoreRequest>,
) -> Result<Json<StoreResponse>> {
    // Validate request
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let mut cache = state.cache.write().await;
    let key = cache.store(req)?;

    Ok(Json(StoreResponse::new(key)))
}

/// Handler for GET /get/:key
///
/// Returns the raw bytes stored under a key.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<ValueResponse<Vec<u8>>>> {
    // Write lock: reads update store stats
    let mut cache = state.cache.write().await;
    match cache.get(&key)? {
        Some(value) => Ok(Json(ValueResponse::new(key, value))),
        None => Err(CacheError::NotFound(key)),
    }
}

/// Handler for GET /get/:key/str
pub async fn get_str_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<ValueResponse<String>>> {
    let mut cache = state.cache.write().await;
    let value = cache.get_str(&key)?;

    Ok(Json(ValueResponse::new(key, value)))
}

/// Handler for GET /get/:key/int
///
/// Lenient like [`Cache::get_int`]: missing or non-numeric values read as 0.
pub async fn get_int_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<ValueResponse<i64>>> {
    let mut cache = state.cache.write().await;
    let value = cache.get_int(&key)?;

    Ok(Json(ValueResponse::new(key, value)))
}

/// Handler for GET /replay/:name
///
/// Returns the call count and paired history of an instrumented operation.
pub async fn replay_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Transcript>> {
    let mut cache = state.cache.write().await;
    let transcript = Transcript::load(cache.store_handle(), &name)?;

    Ok(Json(transcript))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    Json(StatsResponse::from(cache.store_ref().stats()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
