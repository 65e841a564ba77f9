//! High-frequency term detection and removal.
//!
//! A term is "high frequency" when it appears in more than `max_freq` of the
//! documents (rows) of a token column. Counting is per document, so repeats
//! inside one row count once.

use crate::error::{PreprocessingError, Result, ResultExt};
use crate::types::Value;
use crate::utils::{column_values, token_list_dtype, values_to_series};
use polars::prelude::*;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Name under which the corpus-wide removal step is registered.
pub const HIGH_FREQ_STEP: &str = "remove_high_frequency_terms";

/// Count, for each token, the number of documents containing it.
pub fn document_frequencies<S: AsRef<str>>(docs: &[Vec<S>]) -> HashMap<String, usize> {
    let mut doc_freq: HashMap<String, usize> = HashMap::new();
    for doc in docs {
        let unique: HashSet<&str> = doc.iter().map(|t| t.as_ref()).collect();
        for token in unique {
            *doc_freq.entry(token.to_string()).or_insert(0) += 1;
        }
    }
    doc_freq
}

/// Tokens whose document frequency is strictly above `max_freq * docs.len()`.
pub fn get_stopwords<S: AsRef<str>>(docs: &[Vec<S>], max_freq: f64) -> HashSet<String> {
    if docs.is_empty() {
        return HashSet::new();
    }

    let cutoff = max_freq * docs.len() as f64;
    document_frequencies(docs)
        .into_iter()
        .filter(|(_, dfreq)| *dfreq as f64 > cutoff)
        .map(|(token, _)| token)
        .collect()
}

/// Drop tokens whose lowercase form is in `stopwords`, keeping order.
///
/// Stopwords found by [`get_stopwords`] keep their original case, so on text
/// that was not lowercased a mixed-case term such as `"The"` is never removed.
pub fn remove_stopwords<S: AsRef<str>>(tokens: &[S], stopwords: &HashSet<String>) -> Vec<String> {
    tokens
        .iter()
        .map(|t| t.as_ref())
        .filter(|token| !stopwords.contains(&token.to_lowercase()))
        .map(str::to_string)
        .collect()
}

/// Column step wrapping [`remove_stopwords`] with a precomputed stopword set.
pub fn remove_stopwords_step(value: &Value, stopwords: &HashSet<String>) -> Result<Value> {
    let tokens = value
        .as_tokens()
        .ok_or_else(|| PreprocessingError::type_mismatch("remove_stopwords", "tokens", value.kind()))?;
    Ok(Value::Tokens(remove_stopwords(tokens, stopwords)))
}

/// Whole-table step: compute the high-frequency terms of `column` over the
/// current table and rewrite the column without them.
pub fn remove_high_frequency_terms(df: DataFrame, column: &str, max_freq: f64) -> Result<DataFrame> {
    let values = column_values(&df, HIGH_FREQ_STEP, column)?;

    let docs = values
        .into_iter()
        .map(|value| match value {
            Value::Tokens(tokens) => Ok(tokens),
            other => Err(PreprocessingError::type_mismatch(
                HIGH_FREQ_STEP,
                "tokens",
                other.kind(),
            )),
        })
        .collect::<Result<Vec<Vec<String>>>>()?;

    let stopwords = get_stopwords(&docs, max_freq);
    debug!(
        "Removing {} high-frequency terms from '{}' ({} documents, max_freq {})",
        stopwords.len(),
        column,
        docs.len(),
        max_freq
    );

    let filtered: Vec<Value> = docs
        .iter()
        .map(|tokens| Value::Tokens(remove_stopwords(tokens, &stopwords)))
        .collect();

    let mut df = df;
    df.with_column(values_to_series(column, &filtered, &token_list_dtype())?)
        .context(format!("Writing filtered tokens to '{}'", column))?;
    Ok(df)
}
