//! Main preprocessing pipeline module.
//!
//! This module provides the `Pipeline` struct: an append-only, ordered list
//! of named steps that is executed over a copy of the input table.

use crate::error::Result;
use crate::pipeline::StepExecutor;
use crate::pipeline::step::Step;
use crate::types::Value;
use polars::prelude::*;
use std::time::Instant;
use tracing::{debug, info, trace};

/// An ordered sequence of toggleable transformation steps.
///
/// Steps run in insertion order. Column references are only resolved when
/// [`process`](Pipeline::process) runs, so a step that consumes a column
/// must be registered after the step that produces it.
///
/// # Example
///
/// ```rust,ignore
/// use text_processing::{Pipeline, text};
///
/// let mut pipeline = Pipeline::new();
/// pipeline.add_column_step("lowercase_text", "text", "text", text::lowercase_step);
/// pipeline.add_column_step("tokenize", "text", "tokens", |v| text::tokenize_step(v, true));
///
/// let processed = pipeline.process(&df)?;
/// assert_eq!(pipeline.get_active_steps(), vec!["lowercase_text", "tokenize"]);
/// ```
#[derive(Debug, Default)]
pub struct Pipeline {
    steps: Vec<Step>,
    executor: StepExecutor,
}

// Shared pipelines are run from several threads at once.
static_assertions::assert_impl_all!(Pipeline: Send, Sync);

impl Pipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step to the end of the pipeline.
    pub fn add_step(&mut self, step: Step) -> &mut Self {
        debug!(
            "Registered step '{}' (active: {}) at position {}",
            step.name(),
            step.is_active(),
            self.steps.len()
        );
        self.steps.push(step);
        self
    }

    /// Append an active column-mapped step.
    pub fn add_column_step<F>(
        &mut self,
        name: impl Into<String>,
        input: impl Into<String>,
        output: impl Into<String>,
        func: F,
    ) -> &mut Self
    where
        F: Fn(&Value) -> Result<Value> + Send + Sync + 'static,
    {
        self.add_step(Step::column_map(name, input, output, func))
    }

    /// Append an active whole-table step.
    pub fn add_table_step<F>(&mut self, name: impl Into<String>, func: F) -> &mut Self
    where
        F: Fn(DataFrame) -> Result<DataFrame> + Send + Sync + 'static,
    {
        self.add_step(Step::table_transform(name, func))
    }

    /// Run every active step, in order, over a copy of `df`.
    ///
    /// The caller's frame is never modified. The first failing step aborts
    /// the run and its error is returned as-is.
    pub fn process(&self, df: &DataFrame) -> Result<DataFrame> {
        let start_time = Instant::now();
        info!(
            "Processing {} rows through {} steps ({} active)...",
            df.height(),
            self.steps.len(),
            self.steps.iter().filter(|s| s.is_active()).count()
        );

        let mut working = df.clone();
        for step in &self.steps {
            if !step.is_active() {
                trace!("Skipping inactive step '{}'", step.name());
                continue;
            }
            working = self.executor.execute(step, working)?;
        }

        info!(
            "Pipeline completed in {}ms, output shape: {:?}",
            start_time.elapsed().as_millis(),
            (working.height(), working.width())
        );
        Ok(working)
    }

    /// Set the active flag of every step named `name`.
    ///
    /// Unknown names are ignored.
    pub fn set_active(&mut self, name: &str, active: bool) {
        let mut matched = 0;
        for step in self.steps.iter_mut().filter(|s| s.name() == name) {
            step.set_active(active);
            matched += 1;
        }

        if matched == 0 {
            debug!("set_active: no step named '{}'", name);
        } else {
            debug!("set_active: '{}' -> {} ({} steps)", name, active, matched);
        }
    }

    /// Names of the active steps, in pipeline order.
    pub fn get_active_steps(&self) -> Vec<&str> {
        self.steps
            .iter()
            .filter(|s| s.is_active())
            .map(Step::name)
            .collect()
    }

    /// Names of all registered steps, in pipeline order.
    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(Step::name).collect()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
