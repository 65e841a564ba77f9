//! String normalization functions applied per cell.

use crate::error::{PreprocessingError, Result};
use crate::types::Value;
use once_cell::sync::Lazy;
use regex::Regex;

/// Placeholder written in place of every run of digits.
pub const NUM_TOKEN: &str = "<num>";

/// ASCII punctuation characters, the same set as C's `ispunct`.
pub const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Escaped punctuation for use inside a regex character class.
pub(crate) static PUNCT_CLASS: Lazy<String> = Lazy::new(|| regex::escape(PUNCTUATION));

static PUNCT_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("[{}]+", *PUNCT_CLASS)).expect("Invalid regex: punctuation run")
});

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("Invalid regex: digits"));

/// Borrow the text inside `value`, or fail with a type mismatch for `step`.
pub(crate) fn expect_text<'a>(step: &str, value: &'a Value) -> Result<&'a str> {
    value
        .as_text()
        .ok_or_else(|| PreprocessingError::type_mismatch(step, "text", value.kind()))
}

/// Lowercase text (Unicode aware).
pub fn lowercase_text(text: &str) -> String {
    text.to_lowercase()
}

/// Replace each run of punctuation with a single space.
pub fn remove_punctuation(text: &str) -> String {
    PUNCT_RUN.replace_all(text, " ").into_owned()
}

/// Replace each run of digits with [`NUM_TOKEN`].
pub fn replace_numbers(text: &str) -> String {
    DIGIT_RUN.replace_all(text, NUM_TOKEN).into_owned()
}

/// Column step wrapping [`lowercase_text`].
pub fn lowercase_step(value: &Value) -> Result<Value> {
    let text = expect_text("lowercase_text", value)?;
    Ok(Value::Text(lowercase_text(text)))
}

/// Column step wrapping [`remove_punctuation`].
pub fn remove_punctuation_step(value: &Value) -> Result<Value> {
    let text = expect_text("remove_punctuation", value)?;
    Ok(Value::Text(remove_punctuation(text)))
}

/// Column step wrapping [`replace_numbers`].
pub fn replace_numbers_step(value: &Value) -> Result<Value> {
    let text = expect_text("replace_numbers", value)?;
    Ok(Value::Text(replace_numbers(text)))
}
