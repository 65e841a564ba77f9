//! Step executor module.
//!
//! Contains the logic for applying a single step to the working table.

use crate::error::{PreprocessingError, Result, ResultExt};
use crate::pipeline::step::{Step, StepKind};
use crate::types::Value;
use crate::utils::{column_values, values_to_series};
use polars::prelude::*;
use tracing::{debug, error};

/// Applies steps to a working DataFrame.
#[derive(Debug, Default, Clone, Copy)]
pub struct StepExecutor;

impl StepExecutor {
    /// Run one step against `df` and return the resulting table.
    ///
    /// Inactive steps are not handled here; the caller filters them.
    pub fn execute(&self, step: &Step, df: DataFrame) -> Result<DataFrame> {
        let result = match step.kind() {
            StepKind::ColumnMap {
                input,
                output,
                output_dtype,
                func,
            } => {
                let empty_dtype = output_dtype.as_ref().unwrap_or(&DataType::String);
                self.execute_column_map(step.name(), input, output, empty_dtype, func, df)
            }
            StepKind::TableTransform(func) => self.execute_table_transform(step.name(), func, df),
        };

        if let Err(e) = &result {
            error!("Step '{}' failed: {}", step.name(), e);
        }
        result
    }

    fn execute_column_map(
        &self,
        name: &str,
        input: &str,
        output: &str,
        empty_dtype: &DataType,
        func: &(dyn Fn(&Value) -> Result<Value> + Send + Sync),
        mut df: DataFrame,
    ) -> Result<DataFrame> {
        let values = column_values(&df, name, input)?;

        // The output column is only written once every row succeeded.
        let mapped = values.iter().map(func).collect::<Result<Vec<Value>>>()?;
        let series = values_to_series(output, &mapped, empty_dtype)?;

        df.with_column(series)
            .context(format!("Writing column '{}' for step '{}'", output, name))?;
        debug!(
            "Step '{}' mapped {} rows: '{}' -> '{}'",
            name,
            mapped.len(),
            input,
            output
        );
        Ok(df)
    }

    fn execute_table_transform(
        &self,
        name: &str,
        func: &(dyn Fn(DataFrame) -> Result<DataFrame> + Send + Sync),
        df: DataFrame,
    ) -> Result<DataFrame> {
        let expected = df.height();
        let transformed = func(df)?;

        if transformed.height() != expected {
            return Err(PreprocessingError::RowCountMismatch {
                step: name.to_string(),
                expected,
                actual: transformed.height(),
            });
        }

        debug!(
            "Step '{}' transformed table: {:?}",
            name,
            (transformed.height(), transformed.width())
        );
        Ok(transformed)
    }
}
