//! Text generation by inserting bridge words

use super::bridge::bridge_candidates;
use super::choice::{choose, Chooser};
use crate::graph::WordGraph;
use crate::text::{Tokenizer, WordTokenizer};
use tracing::debug;

/// Rewrites input text, inserting a random bridge word into each gap that has one
#[derive(Debug, Clone, Copy)]
pub struct TextGenerator<'g> {
    graph: &'g WordGraph,
    tokenizer: WordTokenizer,
}

impl<'g> TextGenerator<'g> {
    /// Input is lowercased and split on whitespace; punctuation is kept
    pub fn new(graph: &'g WordGraph) -> Self {
        Self {
            graph,
            tokenizer: WordTokenizer::lowercase(),
        }
    }

    /// Generate new text from `input`.
    ///
    /// Every input word is kept in order. Between each consecutive pair at
    /// most one bridge word is inserted, picked uniformly by `chooser`.
    /// Input with fewer than two words is returned unchanged, without
    /// lowercasing.
    pub fn generate(&self, input: &str, chooser: &mut impl Chooser) -> String {
        let words = self.tokenizer.tokenize(input);
        if words.len() < 2 {
            return input.to_string();
        }

        let mut output: Vec<&str> = Vec::with_capacity(words.len() * 2);
        let mut inserted = 0;
        for pair in words.windows(2) {
            output.push(&pair[0]);
            let candidates = bridge_candidates(self.graph, &pair[0], &pair[1]);
            if let Some(bridge) = choose(&candidates, chooser) {
                output.push(bridge);
                inserted += 1;
            }
        }
        if let Some(last) = words.last() {
            output.push(last);
        }

        debug!(words = words.len(), inserted, "generated text");
        output.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::choice::ScriptedChooser;

    fn create_test_graph() -> WordGraph {
        WordGraph::from_text(
            "To explore strange new worlds, to seek out new life and new civilizations",
        )
    }

    #[test]
    fn test_inserts_bridge_word() {
        let graph = create_test_graph();
        let text = TextGenerator::new(&graph).generate(
            "Seek to explore new and exciting synergies",
            &mut ScriptedChooser::first(),
        );

        // explore -> strange -> new, new -> life -> and
        assert_eq!(text, "seek to explore strange new life and exciting synergies");
    }

    #[test]
    fn test_chooser_picks_among_candidates() {
        // a -> x -> b and a -> y -> b
        let graph = WordGraph::from_text("a x b a y b");

        let first = TextGenerator::new(&graph).generate("a b", &mut ScriptedChooser::new([0]));
        let second = TextGenerator::new(&graph).generate("a b", &mut ScriptedChooser::new([1]));
        assert_eq!(first, "a x b");
        assert_eq!(second, "a y b");
    }

    #[test]
    fn test_unknown_words_pass_through() {
        let graph = create_test_graph();
        let mut chooser = ScriptedChooser::first();
        let text = TextGenerator::new(&graph).generate("Hello there world", &mut chooser);

        assert_eq!(text, "hello there world");
        assert_eq!(chooser.calls(), 0);
    }

    #[test]
    fn test_punctuation_is_not_stripped() {
        let graph = create_test_graph();
        let text =
            TextGenerator::new(&graph).generate("explore, new", &mut ScriptedChooser::first());
        assert_eq!(text, "explore, new");
    }

    #[test]
    fn test_fewer_than_two_words_unchanged() {
        let graph = create_test_graph();
        let generator = TextGenerator::new(&graph);
        let mut chooser = ScriptedChooser::first();

        assert_eq!(generator.generate("", &mut chooser), "");
        assert_eq!(generator.generate("Explore", &mut chooser), "Explore");
        assert_eq!(generator.generate("   ", &mut chooser), "   ");
    }

    #[test]
    fn test_empty_graph() {
        let graph = WordGraph::new();
        let text =
            TextGenerator::new(&graph).generate("one two three", &mut ScriptedChooser::first());
        assert_eq!(text, "one two three");
    }
}
