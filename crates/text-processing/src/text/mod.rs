//! Text step functions.
//!
//! Stateless string and token transforms, each available as a plain function
//! and as a column step taking a [`Value`](crate::Value).

pub mod normalizers;
pub mod stopwords;
pub mod tokenizer;

pub use normalizers::{
    NUM_TOKEN, PUNCTUATION, lowercase_step, lowercase_text, remove_punctuation,
    remove_punctuation_step, replace_numbers, replace_numbers_step,
};
pub use stopwords::{
    HIGH_FREQ_STEP, document_frequencies, get_stopwords, remove_high_frequency_terms,
    remove_stopwords, remove_stopwords_step,
};
pub use tokenizer::{tokenize, tokenize_step};
