//! Store Entry Module
//!
//! Defines the two kinds of value a key can hold.

use crate::error::{CacheError, Result};

// == Store Entry ==
/// A single value held by the store.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEntry {
    /// Plain bytes written by `set` or `incr`
    Bytes(Vec<u8>),
    /// Ordered list built by `rpush`
    List(Vec<Vec<u8>>),
}

impl StoreEntry {
    // == Accessors ==
    /// Returns the bytes, or `WrongType` if the entry is a list.
    pub fn as_bytes(&self, key: &str) -> Result<&[u8]> {
        match self {
            StoreEntry::Bytes(bytes) => Ok(bytes),
            StoreEntry::List(_) => Err(CacheError::WrongType(key.to_string())),
        }
    }

    /// Returns the list, or `WrongType` if the entry holds plain bytes.
    pub fn as_list(&self, key: &str) -> Result<&[Vec<u8>]> {
        match self {
            StoreEntry::List(items) => Ok(items),
            StoreEntry::Bytes(_) => Err(CacheError::WrongType(key.to_string())),
        }
    }

    /// Mutable list access, same rules as [`StoreEntry::as_list`].
    pub fn as_list_mut(&mut self, key: &str) -> Result<&mut Vec<Vec<u8>>> {
        match self {
            StoreEntry::List(items) => Ok(items),
            StoreEntry::Bytes(_) => Err(CacheError::WrongType(key.to_string())),
        }
    }
}

// == Utility Functions ==
/// Resolves an inclusive `start..=stop` range with tail-relative negative
/// indices against a list of `len` elements. Returns `None` when empty.
pub(crate) fn resolve_range(len: usize, start: isize, stop: isize) -> Option<(usize, usize)> {
    let len = len as isize;
    let start = if start < 0 { (len + start).max(0) } else { start };
    let stop = if stop < 0 { len + stop } else { stop.min(len - 1) };

    if len == 0 || start > stop || start >= len {
        None
    } else {
        Some((start as usize, stop as usize))
    }
}
