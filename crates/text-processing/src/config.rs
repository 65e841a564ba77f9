//! Configuration types for the text preprocessing pipeline.
//!
//! This module provides the options that decide which steps
//! [`build_pipeline`](crate::build_pipeline) registers, using the builder
//! pattern for ergonomic setup.

use serde::{Deserialize, Serialize};

/// Which preprocessing steps to run, and on which columns.
///
/// Use [`PreprocessOptions::builder()`] to create validated options.
///
/// # Example
///
/// ```rust,ignore
/// use text_processing::config::PreprocessOptions;
///
/// let options = PreprocessOptions::builder()
///     .lowercase(true)
///     .replace_numbers(true)
///     .remove_high_freq_terms(true)
///     .high_freq_threshold(0.4)
///     .build()?;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessOptions {
    /// Lowercase the text column.
    /// Default: false
    pub lowercase: bool,

    /// Replace punctuation runs in the text column with spaces.
    /// Default: false
    pub remove_punctuation: bool,

    /// Replace digit runs in the text column with `<num>`.
    /// Default: false
    pub replace_numbers: bool,

    /// Whether the tokenize step is active.
    /// The step is registered either way so it can be toggled later.
    /// Default: true
    pub tokenize: bool,

    /// Keep punctuation characters as tokens when tokenizing.
    /// Default: false
    pub tokenize_punctuation: bool,

    /// Remove tokens that occur in too many documents.
    /// Default: false
    pub remove_high_freq_terms: bool,

    /// Document-frequency ratio (0.0 - 1.0) above which a token is removed.
    /// Default: 0.5
    pub high_freq_threshold: f64,

    /// Column holding the raw text.
    /// Default: "text"
    pub text_column: String,

    /// Column the token lists are written to.
    /// Default: "tokens"
    pub tokens_column: String,
}

impl Default for PreprocessOptions {
    fn default() -> Self {
        Self {
            lowercase: false,
            remove_punctuation: false,
            replace_numbers: false,
            tokenize: true,
            tokenize_punctuation: false,
            remove_high_freq_terms: false,
            high_freq_threshold: 0.5,
            text_column: "text".to_string(),
            tokens_column: "tokens".to_string(),
        }
    }
}

impl PreprocessOptions {
    /// Create a new options builder.
    pub fn builder() -> PreprocessOptionsBuilder {
        PreprocessOptionsBuilder::default()
    }

    /// Validate the options and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if !(0.0..=1.0).contains(&self.high_freq_threshold) {
            return Err(ConfigValidationError::InvalidThreshold {
                field: "high_freq_threshold".to_string(),
                value: self.high_freq_threshold,
            });
        }

        if self.text_column.is_empty() {
            return Err(ConfigValidationError::EmptyColumnName("text_column".to_string()));
        }

        if self.tokens_column.is_empty() {
            return Err(ConfigValidationError::EmptyColumnName(
                "tokens_column".to_string(),
            ));
        }

        Ok(())
    }
}

/// Errors that can occur during options validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid threshold for '{field}': {value} (must be between 0.0 and 1.0)")]
    InvalidThreshold { field: String, value: f64 },

    #[error("Column name for '{0}' must not be empty")]
    EmptyColumnName(String),
}

impl From<ConfigValidationError> for crate::error::PreprocessingError {
    fn from(e: ConfigValidationError) -> Self {
        crate::error::PreprocessingError::InvalidConfig(e.to_string())
    }
}

/// Builder for [`PreprocessOptions`] with fluent API.
#[derive(Debug, Default)]
pub struct PreprocessOptionsBuilder {
    lowercase: Option<bool>,
    remove_punctuation: Option<bool>,
    replace_numbers: Option<bool>,
    tokenize: Option<bool>,
    tokenize_punctuation: Option<bool>,
    remove_high_freq_terms: Option<bool>,
    high_freq_threshold: Option<f64>,
    text_column: Option<String>,
    tokens_column: Option<String>,
}

impl PreprocessOptionsBuilder {
    /// Enable or disable lowercasing.
    pub fn lowercase(mut self, enable: bool) -> Self {
        self.lowercase = Some(enable);
        self
    }

    /// Enable or disable punctuation removal.
    pub fn remove_punctuation(mut self, enable: bool) -> Self {
        self.remove_punctuation = Some(enable);
        self
    }

    /// Enable or disable number replacement.
    pub fn replace_numbers(mut self, enable: bool) -> Self {
        self.replace_numbers = Some(enable);
        self
    }

    /// Activate or deactivate the tokenize step.
    pub fn tokenize(mut self, enable: bool) -> Self {
        self.tokenize = Some(enable);
        self
    }

    /// Keep punctuation as separate tokens.
    pub fn tokenize_punctuation(mut self, keep: bool) -> Self {
        self.tokenize_punctuation = Some(keep);
        self
    }

    /// Enable or disable high-frequency term removal.
    pub fn remove_high_freq_terms(mut self, enable: bool) -> Self {
        self.remove_high_freq_terms = Some(enable);
        self
    }

    /// Set the document-frequency ratio for high-frequency term removal.
    ///
    /// # Arguments
    /// * `threshold` - Value between 0.0 and 1.0 (e.g., 0.5 = half the rows)
    pub fn high_freq_threshold(mut self, threshold: f64) -> Self {
        self.high_freq_threshold = Some(threshold);
        self
    }

    /// Set the name of the raw text column.
    pub fn text_column(mut self, column: impl Into<String>) -> Self {
        self.text_column = Some(column.into());
        self
    }

    /// Set the name of the output token column.
    pub fn tokens_column(mut self, column: impl Into<String>) -> Self {
        self.tokens_column = Some(column.into());
        self
    }

    /// Build the options.
    ///
    /// Returns validated `PreprocessOptions` or an error if validation fails.
    pub fn build(self) -> Result<PreprocessOptions, ConfigValidationError> {
        let defaults = PreprocessOptions::default();
        let options = PreprocessOptions {
            lowercase: self.lowercase.unwrap_or(defaults.lowercase),
            remove_punctuation: self.remove_punctuation.unwrap_or(defaults.remove_punctuation),
            replace_numbers: self.replace_numbers.unwrap_or(defaults.replace_numbers),
            tokenize: self.tokenize.unwrap_or(defaults.tokenize),
            tokenize_punctuation: self
                .tokenize_punctuation
                .unwrap_or(defaults.tokenize_punctuation),
            remove_high_freq_terms: self
                .remove_high_freq_terms
                .unwrap_or(defaults.remove_high_freq_terms),
            high_freq_threshold: self
                .high_freq_threshold
                .unwrap_or(defaults.high_freq_threshold),
            text_column: self.text_column.unwrap_or(defaults.text_column),
            tokens_column: self.tokens_column.unwrap_or(defaults.tokens_column),
        };

        options.validate()?;
        Ok(options)
    }
}
