//! Text Preprocessing Pipeline Library
//!
//! A small, configurable text preprocessing library built with Rust and Polars.
//!
//! # Overview
//!
//! A [`Pipeline`] is an ordered list of named steps. Each step is either
//!
//! - **column-mapped**: a function applied to every value of one column,
//!   writing another column (or the same one, in place), or
//! - **whole-table**: a function that receives and returns the entire table,
//!   for work that needs the whole corpus (e.g. high-frequency term removal).
//!
//! Steps can be switched on and off by name. [`Pipeline::process`] runs the
//! active steps in registration order over a copy of the input table.
//!
//! The [`text`] module provides the usual normalization steps: lowercasing,
//! punctuation removal, number replacement, tokenization and removal of
//! high-frequency terms.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use text_processing::{PreprocessOptions, load_table, pre_process};
//!
//! let df = load_table(&["Hello World!", "123 apples"], &[4.0, 2.0])?;
//!
//! let options = PreprocessOptions::builder()
//!     .lowercase(true)
//!     .replace_numbers(true)
//!     .build()?;
//!
//! let processed = pre_process(&df, &options)?;
//! // tokens: [["hello", "world"], ["<num>", "apples"]]
//! ```
//!
//! # Custom Steps
//!
//! ```rust,ignore
//! use text_processing::{Pipeline, Step, Value, text};
//!
//! let mut pipeline = Pipeline::new();
//! pipeline
//!     .add_column_step("lowercase_text", "text", "text", text::lowercase_step)
//!     .add_step(
//!         Step::column_map("tokenize", "text", "tokens", |v| text::tokenize_step(v, true))
//!             .with_active(false),
//!     );
//!
//! pipeline.set_active("tokenize", true);
//! let processed = pipeline.process(&df)?;
//! ```

pub mod config;
pub mod error;
pub mod pipeline;
pub mod preprocess;
pub mod text;
pub mod types;
pub mod utils;

// Re-exports for convenient access
pub use config::{ConfigValidationError, PreprocessOptions, PreprocessOptionsBuilder};
pub use error::{PreprocessingError, Result as PreprocessingResult, ResultExt};
pub use pipeline::{ColumnFn, Pipeline, Step, StepExecutor, StepKind, TableFn};
pub use preprocess::{SCORE_COLUMN, TEXT_COLUMN, build_pipeline, load_table, pre_process};
pub use types::Value;
pub use utils::{series_to_values, token_list_dtype, values_to_series};
