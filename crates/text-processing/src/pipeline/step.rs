//! Step descriptors registered on a [`Pipeline`](super::Pipeline).

use crate::error::Result;
use crate::types::Value;
use polars::prelude::{DataFrame, DataType};
use std::fmt;

/// Per-value transform applied to every row of one column.
pub type ColumnFn = Box<dyn Fn(&Value) -> Result<Value> + Send + Sync>;

/// Transform that receives and returns the whole working table.
pub type TableFn = Box<dyn Fn(DataFrame) -> Result<DataFrame> + Send + Sync>;

/// What a step does when it runs.
pub enum StepKind {
    /// Read `input`, apply `func` to each row, write the results as `output`.
    ///
    /// `output_dtype` is the dtype of an output column that ends up without
    /// any non-null value (e.g. on an empty table); String when unset.
    ColumnMap {
        input: String,
        output: String,
        output_dtype: Option<DataType>,
        func: ColumnFn,
    },
    /// Replace the working table with `func(table)`.
    TableTransform(TableFn),
}

impl fmt::Debug for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepKind::ColumnMap {
                input,
                output,
                output_dtype,
                ..
            } => f
                .debug_struct("ColumnMap")
                .field("input", input)
                .field("output", output)
                .field("output_dtype", output_dtype)
                .finish_non_exhaustive(),
            StepKind::TableTransform(_) => f.debug_tuple("TableTransform").finish(),
        }
    }
}

/// A named, toggleable transformation.
///
/// The name is a tag chosen at registration; it is what
/// [`Pipeline::set_active`](super::Pipeline::set_active) and
/// [`Pipeline::get_active_steps`](super::Pipeline::get_active_steps) see,
/// so closures can be registered and addressed like any other step.
///
/// # Example
///
/// ```rust,ignore
/// use text_processing::{Step, Value};
///
/// let shout = Step::column_map("shout", "text", "loud", |value| match value {
///     Value::Text(s) => Ok(Value::Text(s.to_uppercase())),
///     other => Ok(other.clone()),
/// })
/// .with_active(false);
/// ```
#[derive(Debug)]
pub struct Step {
    name: String,
    kind: StepKind,
    active: bool,
}

impl Step {
    /// Create an active column-mapped step.
    pub fn column_map<F>(
        name: impl Into<String>,
        input: impl Into<String>,
        output: impl Into<String>,
        func: F,
    ) -> Self
    where
        F: Fn(&Value) -> Result<Value> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            kind: StepKind::ColumnMap {
                input: input.into(),
                output: output.into(),
                output_dtype: None,
                func: Box::new(func),
            },
            active: true,
        }
    }

    /// Create an active whole-table step.
    pub fn table_transform<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(DataFrame) -> Result<DataFrame> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            kind: StepKind::TableTransform(Box::new(func)),
            active: true,
        }
    }

    /// Set the initial active flag.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Set the dtype of an all-null or empty output column.
    ///
    /// Has no effect on whole-table steps.
    pub fn with_output_dtype(mut self, dtype: DataType) -> Self {
        if let StepKind::ColumnMap { output_dtype, .. } = &mut self.kind {
            *output_dtype = Some(dtype);
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &StepKind {
        &self.kind
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Input column of a column-mapped step.
    pub fn input_column(&self) -> Option<&str> {
        match &self.kind {
            StepKind::ColumnMap { input, .. } => Some(input),
            StepKind::TableTransform(_) => None,
        }
    }

    /// Output column of a column-mapped step.
    pub fn output_column(&self) -> Option<&str> {
        match &self.kind {
            StepKind::ColumnMap { output, .. } => Some(output),
            StepKind::TableTransform(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_map_defaults() {
        let step = Step::column_map("identity", "text", "copy", |v| Ok(v.clone()));
        assert_eq!(step.name(), "identity");
        assert!(step.is_active());
        assert_eq!(step.input_column(), Some("text"));
        assert_eq!(step.output_column(), Some("copy"));
    }

    #[test]
    fn test_table_transform_has_no_columns() {
        let step = Step::table_transform("noop", Ok).with_active(false);
        assert!(!step.is_active());
        assert!(step.input_column().is_none());
        assert!(step.output_column().is_none());
        assert!(matches!(step.kind(), StepKind::TableTransform(_)));
    }

    #[test]
    fn test_output_dtype_only_applies_to_column_steps() {
        let step = Step::column_map("tokenize", "text", "tokens", |v| Ok(v.clone()))
            .with_output_dtype(DataType::List(Box::new(DataType::String)));
        assert!(matches!(
            step.kind(),
            StepKind::ColumnMap {
                output_dtype: Some(DataType::List(_)),
                ..
            }
        ));

        let step = Step::table_transform("noop", Ok).with_output_dtype(DataType::String);
        assert!(matches!(step.kind(), StepKind::TableTransform(_)));
    }

    #[test]
    fn test_debug_omits_functions() {
        let step = Step::column_map("identity", "text", "copy", |v| Ok(v.clone()));
        let rendered = format!("{:?}", step);
        assert!(rendered.contains("ColumnMap"));
        assert!(rendered.contains("\"copy\""));
    }
}
