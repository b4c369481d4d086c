//! API Module
//!
//! HTTP handlers and routing for the cache REST API.
//!
//! # Endpoints
//! - `POST /store` - Store a value under a new key
//! - `GET /get/:key` - Raw bytes of a value
//! - `GET /get/:key/str` - Value decoded as UTF-8
//! - `GET /get/:key/int` - Value parsed as an integer
//! - `GET /replay/:name` - Invocation record of an operation
//! - `GET /stats` - Store statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
