//! Text normalization and tokenization

mod tokenizer;

pub use tokenizer::{NormalizationPolicy, Tokenizer, WordTokenizer};
