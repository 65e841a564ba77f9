//! Custom error types for the text preprocessing pipeline.
//!
//! This module provides the error hierarchy using `thiserror`. Errors raised
//! by a step propagate unchanged to the caller of
//! [`Pipeline::process`](crate::Pipeline::process); the pipeline never
//! retries a step or keeps its partial output.

use thiserror::Error;

/// The main error type for the preprocessing pipeline.
#[derive(Error, Debug)]
pub enum PreprocessingError {
    /// A step read a column that does not exist in the working table.
    #[error("Step '{step}' reads column '{column}', which was not found in the table")]
    ColumnNotFound { step: String, column: String },

    /// A step function received a value of the wrong kind.
    #[error("Type mismatch in '{step}': expected {expected}, found {found}")]
    TypeMismatch {
        step: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A column has a dtype that cannot be handed to a column-mapped step.
    #[error("Column '{column}' has unsupported dtype {dtype}")]
    UnsupportedDtype { column: String, dtype: String },

    /// An integer column holds values that do not fit in `i64`.
    #[error("Column '{column}' ({dtype}) holds values outside the i64 range")]
    ValueOutOfRange { column: String, dtype: String },

    /// A token list holds a null entry.
    #[error("Column '{column}' has a null token in row {row}")]
    NullToken { column: String, row: usize },

    /// A column-mapped step produced values of different kinds.
    #[error("Column '{column}' received mixed value types: {first} and {second}")]
    MixedValueTypes {
        column: String,
        first: &'static str,
        second: &'static str,
    },

    /// A whole-table step changed the number of rows.
    #[error("Step '{step}' changed the row count from {expected} to {actual}")]
    RowCountMismatch {
        step: String,
        expected: usize,
        actual: usize,
    },

    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Input data that cannot be turned into a table.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A caller-supplied step failed for a reason of its own.
    #[error("Step '{step}' failed: {reason}")]
    StepFailed { step: String, reason: String },

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Generic error with context.
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<PreprocessingError>,
    },
}

impl PreprocessingError {
    /// Build a [`PreprocessingError::TypeMismatch`] for `step`.
    pub fn type_mismatch(
        step: impl Into<String>,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        Self::TypeMismatch {
            step: step.into(),
            expected,
            found,
        }
    }

    /// Build a [`PreprocessingError::StepFailed`] for `step`.
    pub fn step_failed(step: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::StepFailed {
            step: step.into(),
            reason: reason.into(),
        }
    }

    /// Add context to an error.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        PreprocessingError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Get a stable error code for programmatic handling.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ColumnNotFound { .. } => "COLUMN_NOT_FOUND",
            Self::TypeMismatch { .. } => "TYPE_MISMATCH",
            Self::UnsupportedDtype { .. } => "UNSUPPORTED_DTYPE",
            Self::ValueOutOfRange { .. } => "VALUE_OUT_OF_RANGE",
            Self::NullToken { .. } => "NULL_TOKEN",
            Self::MixedValueTypes { .. } => "MIXED_VALUE_TYPES",
            Self::RowCountMismatch { .. } => "ROW_COUNT_MISMATCH",
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::StepFailed { .. } => "STEP_FAILED",
            Self::Polars(_) => "POLARS_ERROR",
            Self::WithContext { source, .. } => source.error_code(),
        }
    }

    /// Check if this error is a missing-column lookup failure.
    pub fn is_missing_column(&self) -> bool {
        match self {
            Self::ColumnNotFound { .. } => true,
            Self::WithContext { source, .. } => source.is_missing_column(),
            _ => false,
        }
    }

    /// Check if this error is a contract violation raised by a step function.
    pub fn is_type_mismatch(&self) -> bool {
        match self {
            Self::TypeMismatch { .. } => true,
            Self::WithContext { source, .. } => source.is_type_mismatch(),
            _ => false,
        }
    }
}

/// Result type alias for preprocessing operations.
pub type Result<T> = std::result::Result<T, PreprocessingError>;

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, polars::error::PolarsError> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| PreprocessingError::Polars(e).with_context(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing(column: &str) -> PreprocessingError {
        PreprocessingError::ColumnNotFound {
            step: "remove_stopwords".to_string(),
            column: column.to_string(),
        }
    }

    #[test]
    fn test_error_code() {
        assert_eq!(missing("tokens").error_code(), "COLUMN_NOT_FOUND");
        assert_eq!(
            PreprocessingError::type_mismatch("lowercase_text", "text", "int").error_code(),
            "TYPE_MISMATCH"
        );
        assert_eq!(
            PreprocessingError::step_failed("custom", "boom").error_code(),
            "STEP_FAILED"
        );
    }

    #[test]
    fn test_error_messages() {
        let error = missing("tokens");
        assert!(error.to_string().contains("remove_stopwords"));
        assert!(error.to_string().contains("tokens"));

        let error = PreprocessingError::type_mismatch("tokenize", "text", "null");
        assert_eq!(
            error.to_string(),
            "Type mismatch in 'tokenize': expected text, found null"
        );
    }

    #[test]
    fn test_predicates_see_through_context() {
        let error = missing("tokens").with_context("While running pipeline");
        assert!(error.is_missing_column());
        assert!(!error.is_type_mismatch());

        let error = PreprocessingError::type_mismatch("x", "text", "int").with_context("outer");
        assert!(error.is_type_mismatch());
    }

    #[test]
    fn test_with_context() {
        let error = missing("text").with_context("During tokenization");
        assert!(error.to_string().contains("During tokenization"));
        assert_eq!(error.error_code(), "COLUMN_NOT_FOUND"); // Preserves original code
    }

    #[test]
    fn test_result_ext_on_polars_error() {
        let result: std::result::Result<(), polars::error::PolarsError> = Err(
            polars::error::PolarsError::ColumnNotFound("text".into()),
        );
        let error = result.context("Reading column").unwrap_err();
        assert_eq!(error.error_code(), "POLARS_ERROR");
        assert!(error.to_string().starts_with("Reading column"));
    }
}
