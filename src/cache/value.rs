//! Cache Value Module
//!
//! The closed set of value kinds the façade accepts, and how each one is
//! written to the store.

use std::fmt::Write as _;

// == Cache Value ==
/// A value accepted by [`Cache::store`](crate::cache::Cache::store).
#[derive(Debug, Clone, PartialEq)]
pub enum CacheValue {
    Text(String),
    Bytes(Vec<u8>),
    Int(i64),
    Float(f64),
}

impl CacheValue {
    // == Serialization ==
    /// Serializes the value to the bytes written to the store.
    ///
    /// Text is UTF-8, bytes pass through, integers are base-10 and floats use
    /// the shortest representation that parses back to the same `f64`, with
    /// a signed two-digit exponent (`1e+20`, `1.5e-07`) and lowercase `nan`,
    /// `inf`, `-inf`.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            CacheValue::Text(text) => text.as_bytes().to_vec(),
            CacheValue::Bytes(bytes) => bytes.clone(),
            CacheValue::Int(n) => n.to_string().into_bytes(),
            CacheValue::Float(x) => format_float(*x).into_bytes(),
        }
    }

    /// Consumes the value, avoiding a copy for text and bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            CacheValue::Text(text) => text.into_bytes(),
            CacheValue::Bytes(bytes) => bytes,
            other => other.to_bytes(),
        }
    }

    // == Repr ==
    /// Renders the value the way it appears in call history: quoted text,
    /// `b'..'` bytes, bare numbers.
    ///
    /// Quotes are single unless the content has a `'` and no `"`. Backslash,
    /// the chosen quote, `\n`, `\r`, `\t` and other control characters are
    /// escaped, so a rendering never spans more than one line.
    pub fn repr(&self) -> String {
        match self {
            CacheValue::Text(text) => {
                let quote = pick_quote(text.contains('\''), text.contains('"'));
                let mut out = String::with_capacity(text.len() + 2);
                out.push(quote);
                for c in text.chars() {
                    match c {
                        '\\' => out.push_str("\\\\"),
                        '\n' => out.push_str("\\n"),
                        '\r' => out.push_str("\\r"),
                        '\t' => out.push_str("\\t"),
                        c if c == quote => {
                            out.push('\\');
                            out.push(c);
                        }
                        c if c.is_control() => {
                            let _ = write!(out, "\\x{:02x}", c as u32);
                        }
                        c => out.push(c),
                    }
                }
                out.push(quote);
                out
            }
            CacheValue::Bytes(bytes) => {
                let quote = pick_quote(bytes.contains(&b'\''), bytes.contains(&b'"'));
                let mut out = String::from("b");
                out.push(quote);
                for &byte in bytes {
                    match byte {
                        b'\\' => out.push_str("\\\\"),
                        b'\n' => out.push_str("\\n"),
                        b'\r' => out.push_str("\\r"),
                        b'\t' => out.push_str("\\t"),
                        _ if byte as char == quote => {
                            out.push('\\');
                            out.push(quote);
                        }
                        0x20..=0x7e => out.push(byte as char),
                        _ => {
                            let _ = write!(out, "\\x{:02x}", byte);
                        }
                    }
                }
                out.push(quote);
                out
            }
            CacheValue::Int(n) => n.to_string(),
            CacheValue::Float(x) => format_float(*x),
        }
    }

    /// Short name of the variant, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            CacheValue::Text(_) => "text",
            CacheValue::Bytes(_) => "bytes",
            CacheValue::Int(_) => "int",
            CacheValue::Float(_) => "float",
        }
    }
}

fn pick_quote(has_single: bool, has_double: bool) -> char {
    if has_single && !has_double {
        '"'
    } else {
        '\''
    }
}

/// Shortest round-trip float text, exponent written as `e+NN` / `e-NN`.
fn format_float(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let shortest = format!("{:?}", x);
    match shortest.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => shortest,
    }
}

// == Conversions ==
impl From<String> for CacheValue {
    fn from(value: String) -> Self {
        CacheValue::Text(value)
    }
}

impl From<&str> for CacheValue {
    fn from(value: &str) -> Self {
        CacheValue::Text(value.to_string())
    }
}

impl From<Vec<u8>> for CacheValue {
    fn from(value: Vec<u8>) -> Self {
        CacheValue::Bytes(value)
    }
}

impl From<&[u8]> for CacheValue {
    fn from(value: &[u8]) -> Self {
        CacheValue::Bytes(value.to_vec())
    }
}

impl From<i64> for CacheValue {
    fn from(value: i64) -> Self {
        CacheValue::Int(value)
    }
}

impl From<i32> for CacheValue {
    fn from(value: i32) -> Self {
        CacheValue::Int(i64::from(value))
    }
}

impl From<f64> for CacheValue {
    fn from(value: f64) -> Self {
        CacheValue::Float(value)
    }
}
