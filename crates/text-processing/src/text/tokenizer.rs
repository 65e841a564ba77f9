//! Regex tokenizer for normalized text.

use crate::error::Result;
use crate::text::normalizers::{PUNCT_CLASS, expect_text};
use crate::types::Value;
use once_cell::sync::Lazy;
use regex::Regex;

// The number placeholder is matched first so it survives as one token.
static WORDS_AND_PUNCT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"<num>|\w+|[{}]", *PUNCT_CLASS))
        .expect("Invalid regex: words and punctuation")
});

static WORDS_ONLY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"<num>|[^\s{}]+", *PUNCT_CLASS)).expect("Invalid regex: words only")
});

/// Split `text` into tokens.
///
/// With `keep_punctuation`, each punctuation character becomes a token of its
/// own and anything that is neither a word character nor punctuation is
/// dropped. Without it, text is split on runs of whitespace and punctuation.
pub fn tokenize(text: &str, keep_punctuation: bool) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let pattern = if keep_punctuation {
        &*WORDS_AND_PUNCT
    } else {
        &*WORDS_ONLY
    };

    pattern
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Column step wrapping [`tokenize`]; turns a text value into a token list.
pub fn tokenize_step(value: &Value, keep_punctuation: bool) -> Result<Value> {
    let text = expect_text("tokenize", value)?;
    Ok(Value::Tokens(tokenize(text, keep_punctuation)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tokenize_keeps_punctuation() {
        assert_eq!(tokenize("hello world!", true), vec!["hello", "world", "!"]);
        assert_eq!(tokenize("wait... what?", true), vec!["wait", ".", ".", ".", "what", "?"]);
    }

    #[test]
    fn test_tokenize_drops_punctuation() {
        assert_eq!(tokenize("hello, world!", false), vec!["hello", "world"]);
        assert_eq!(tokenize("  spaced\tout\n", false), vec!["spaced", "out"]);
        assert_eq!(tokenize("don't", false), vec!["don", "t"]);
    }

    #[test]
    fn test_tokenize_empty_and_blank() {
        assert!(tokenize("", true).is_empty());
        assert!(tokenize("", false).is_empty());
        assert!(tokenize("   ", false).is_empty());
        assert!(tokenize("?!", false).is_empty());
    }

    #[test]
    fn test_number_placeholder_is_one_token() {
        assert_eq!(tokenize("<num> apples", false), vec!["<num>", "apples"]);
        assert_eq!(tokenize("<num> apples", true), vec!["<num>", "apples"]);
        assert_eq!(tokenize("a <b> c", false), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_tokenize_step() {
        let value = tokenize_step(&Value::from("123 apples"), true).unwrap();
        assert_eq!(
            value,
            Value::Tokens(vec!["123".to_string(), "apples".to_string()])
        );
        assert!(tokenize_step(&Value::Null, true).unwrap_err().is_type_mismatch());
    }
}
