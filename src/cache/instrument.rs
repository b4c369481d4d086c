//! Instrumentation Module
//!
//! Call counting and call history as a small pipeline of stages wrapped
//! around a core store operation.
//!
//! Stages run outermost first. For the default pipeline
//! `[CountCalls, CallHistory]` one call performs, in order:
//! `incr(name)`, `rpush(name:inputs, args)`, the core operation,
//! `rpush(name:outputs, result)`.

use crate::error::Result;
use crate::store::KeyValueStore;

/// Suffix of the list holding recorded argument tuples.
pub const INPUTS_SUFFIX: &str = ":inputs";
/// Suffix of the list holding recorded results.
pub const OUTPUTS_SUFFIX: &str = ":outputs";

/// Key of the argument history list for `name`.
pub fn inputs_key(name: &str) -> String {
    format!("{}{}", name, INPUTS_SUFFIX)
}

/// Key of the result history list for `name`.
pub fn outputs_key(name: &str) -> String {
    format!("{}{}", name, OUTPUTS_SUFFIX)
}

// == Stage ==
/// One instrumentation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Increments the counter stored under the operation name.
    CountCalls,
    /// Appends arguments before and the result after the inner call.
    CallHistory,
}

// == Instrumentation ==
/// Ordered list of distinct stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instrumentation {
    stages: Vec<Stage>,
}

impl Instrumentation {
    /// No stages: calls go straight to the store.
    pub fn none() -> Self {
        Self { stages: Vec::new() }
    }

    /// Appends `stage` as the innermost stage. A stage already present is
    /// left where it is.
    pub fn with(mut self, stage: Stage) -> Self {
        if !self.stages.contains(&stage) {
            self.stages.push(stage);
        }
        self
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn is_enabled(&self, stage: Stage) -> bool {
        self.stages.contains(&stage)
    }

    // == Run ==
    /// Runs `core` wrapped by every stage.
    ///
    /// Any stage failure aborts the call. Effects of stages that already ran
    /// are not undone.
    pub fn run<S, F>(&self, store: &mut S, name: &str, args: &str, core: F) -> Result<String>
    where
        S: KeyValueStore,
        F: FnOnce(&mut S) -> Result<String>,
    {
        run_stages(&self.stages, store, name, args, core)
    }
}

impl Default for Instrumentation {
    fn default() -> Self {
        Self::none()
            .with(Stage::CountCalls)
            .with(Stage::CallHistory)
    }
}

fn run_stages<S, F>(stages: &[Stage], store: &mut S, name: &str, args: &str, core: F) -> Result<String>
where
    S: KeyValueStore,
    F: FnOnce(&mut S) -> Result<String>,
{
    match stages.split_first() {
        None => core(store),
        Some((Stage::CountCalls, rest)) => {
            store.incr(name)?;
            run_stages(rest, store, name, args, core)
        }
        Some((Stage::CallHistory, rest)) => {
            store.rpush(&inputs_key(name), args.as_bytes().to_vec())?;
            let output = run_stages(rest, store, name, args, core)?;
            store.rpush(&outputs_key(name), output.as_bytes().to_vec())?;
            Ok(output)
        }
    }
}
