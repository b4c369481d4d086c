//! Cache Module
//!
//! Cache façade over an external key-value store, with optional call
//! counting and call history, and a replay utility for inspecting them.

mod facade;
pub mod instrument;
pub mod replay;
mod value;


// Re-export public types
pub use facade::{Cache, STORE_OPERATION};
pub use instrument::{Instrumentation, Stage};
pub use replay::{replay, ReplayEntry, Transcript};
pub use value::CacheValue;
