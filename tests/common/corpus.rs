//! Random corpora over a small vocabulary, reproducible from a seed

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const VOCABULARY: &[&str] = &[
    "the", "cat", "sat", "on", "mat", "a", "dog", "ran", "to", "park", "and", "then", "home",
];

/// A token list of `len` words drawn from the vocabulary
pub fn random_tokens(seed: u64, len: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| VOCABULARY.choose(&mut rng).map(|w| w.to_string()).unwrap_or_default())
        .collect()
}

/// Random text with mixed case, punctuation and line breaks
pub fn random_text(seed: u64, len: usize) -> String {
    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(1));
    random_tokens(seed, len)
        .into_iter()
        .map(|word| match rng.gen_range(0..6) {
            0 => word.to_uppercase(),
            1 => format!("{},", word),
            2 => format!("{}.\n", word),
            _ => word,
        })
        .collect::<Vec<_>>()
        .join(" ")
}
