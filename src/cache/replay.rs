//! Replay Module
//!
//! Reads the invocation record of an instrumented operation straight from a
//! store handle and renders it as a transcript.

use std::fmt;
use std::io::Write;

use serde::Serialize;

use crate::cache::instrument::{inputs_key, outputs_key};
use crate::error::Result;
use crate::store::KeyValueStore;

/// One recorded call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayEntry {
    pub input: String,
    pub output: String,
}

// == Transcript ==
/// Counter and paired history of one operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transcript {
    pub name: String,
    pub calls: i64,
    pub entries: Vec<ReplayEntry>,
}

impl Transcript {
    /// Loads the record for `name`.
    ///
    /// A missing or non-numeric counter reads as 0. Inputs and outputs are
    /// paired by position; an entry without a partner is left out.
    pub fn load<S: KeyValueStore>(store: &mut S, name: &str) -> Result<Self> {
        let calls = store
            .get(name)?
            .and_then(|raw| String::from_utf8(raw).ok())
            .and_then(|text| text.trim().parse::<i64>().ok())
            .unwrap_or(0);

        let inputs = store.lrange(&inputs_key(name), 0, -1)?;
        let outputs = store.lrange(&outputs_key(name), 0, -1)?;

        let entries = inputs
            .into_iter()
            .zip(outputs)
            .map(|(input, output)| ReplayEntry {
                input: String::from_utf8_lossy(&input).into_owned(),
                output: String::from_utf8_lossy(&output).into_owned(),
            })
            .collect();

        Ok(Self {
            name: name.to_string(),
            calls,
            entries,
        })
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} was called {} times:", self.name, self.calls)?;
        for entry in &self.entries {
            writeln!(f, "{}(*{}) -> {}", self.name, entry.input, entry.output)?;
        }
        Ok(())
    }
}

// == Replay ==
/// Writes the transcript of `name` to `out`.
pub fn replay<S, W>(store: &mut S, name: &str, out: &mut W) -> Result<()>
where
    S: KeyValueStore,
    W: Write,
{
    let transcript = Transcript::load(store, name)?;
    write!(out, "{}", transcript)?;
    Ok(())
}
