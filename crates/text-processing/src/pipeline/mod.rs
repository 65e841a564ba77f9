//! Pipeline module.
//!
//! This module provides the step-based preprocessing pipeline and its
//! execution logic.

mod builder;
mod executor;
pub mod step;

pub use builder::Pipeline;
pub use executor::StepExecutor;
pub use step::{ColumnFn, Step, StepKind, TableFn};
