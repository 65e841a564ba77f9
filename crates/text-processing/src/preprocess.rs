//! Preprocessing entry points.
//!
//! Builds a [`Pipeline`] from [`PreprocessOptions`] and runs it over a table
//! of texts and scores.

use crate::config::PreprocessOptions;
use crate::error::{PreprocessingError, Result, ResultExt};
use crate::pipeline::{Pipeline, Step};
use crate::text::{
    HIGH_FREQ_STEP, lowercase_step, remove_high_frequency_terms, remove_punctuation_step,
    replace_numbers_step, tokenize_step,
};
use crate::utils::token_list_dtype;
use polars::prelude::*;
use tracing::{debug, info};

/// Name of the raw text column created by [`load_table`].
pub const TEXT_COLUMN: &str = "text";

/// Name of the score column created by [`load_table`].
pub const SCORE_COLUMN: &str = "score";

/// Build a table with a `text` column and a `score` column.
pub fn load_table<S: AsRef<str>>(texts: &[S], scores: &[f64]) -> Result<DataFrame> {
    if texts.len() != scores.len() {
        return Err(PreprocessingError::InvalidInput(format!(
            "{} texts but {} scores",
            texts.len(),
            scores.len()
        )));
    }

    let texts: Vec<&str> = texts.iter().map(|t| t.as_ref()).collect();
    let df = DataFrame::new(vec![
        Series::new(TEXT_COLUMN.into(), texts).into(),
        Series::new(SCORE_COLUMN.into(), scores).into(),
    ])
    .context("Building text/score table")?;

    debug!("Loaded table with {} rows", df.height());
    Ok(df)
}

/// Register the steps requested by `options`, in execution order.
///
/// Text normalizers rewrite the text column in place and are only registered
/// when requested. The tokenize step is always registered (active per
/// `options.tokenize`) so it can be toggled with
/// [`Pipeline::set_active`]. High-frequency term removal runs on the token
/// column after tokenization.
pub fn build_pipeline(options: &PreprocessOptions) -> Pipeline {
    let text = options.text_column.as_str();
    let tokens = options.tokens_column.clone();
    let mut pipeline = Pipeline::new();

    if options.lowercase {
        pipeline.add_column_step("lowercase_text", text, text, lowercase_step);
    }

    if options.remove_punctuation {
        pipeline.add_column_step("remove_punctuation", text, text, remove_punctuation_step);
    }

    if options.replace_numbers {
        pipeline.add_column_step("replace_numbers", text, text, replace_numbers_step);
    }

    let keep_punctuation = options.tokenize_punctuation;
    pipeline.add_step(
        Step::column_map("tokenize", text, tokens.as_str(), move |value| {
            tokenize_step(value, keep_punctuation)
        })
        .with_output_dtype(token_list_dtype())
        .with_active(options.tokenize),
    );

    if options.remove_high_freq_terms {
        let threshold = options.high_freq_threshold;
        pipeline.add_table_step(HIGH_FREQ_STEP, move |df| {
            remove_high_frequency_terms(df, &tokens, threshold)
        });
    }

    pipeline
}

/// Validate `options`, build the pipeline and run it once over `df`.
pub fn pre_process(df: &DataFrame, options: &PreprocessOptions) -> Result<DataFrame> {
    options.validate()?;

    let pipeline = build_pipeline(options);
    info!("Preprocessing with steps: {:?}", pipeline.get_active_steps());
    pipeline.process(df)
}
