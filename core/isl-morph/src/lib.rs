use std::collections::HashSet;

use isl_protocol::Lexicon;
use log::trace;
use rust_stemmers::{Algorithm, Stemmer};

/// Reduces surviving leaf words to stems and drops stopwords.
///
/// Words are lowercased before stemming, so the output is always lowercase.
pub struct Normalizer {
    stemmer: Stemmer,
    stopwords: HashSet<String>,
}

impl Normalizer {
    pub fn new(lexicon: &Lexicon) -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
            stopwords: lexicon.stopwords.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    pub fn english() -> Self {
        Self::new(&Lexicon::english())
    }

    pub fn stem(&self, word: &str) -> String {
        self.stemmer.stem(&word.to_lowercase()).into_owned()
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    /// Stem every word, then filter stopwords. Order is kept and duplicates survive.
    pub fn normalize<S: AsRef<str>>(&self, words: &[S]) -> Vec<String> {
        words
            .iter()
            .map(|w| self.stem(w.as_ref()))
            .filter(|stem| {
                let keep = !self.is_stopword(stem);
                if !keep {
                    trace!("dropping stopword '{}'", stem);
                }
                keep
            })
            .collect()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::english()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_stems_and_lowercases() {
        let n = Normalizer::english();
        assert_eq!(n.stem("eating"), "eat");
        assert_eq!(n.stem("Rice"), "rice");
        assert_eq!(n.stem("What"), "what");
        assert_eq!(n.stem("name"), "name");
    }

    #[test]
    fn test_drops_stopwords_keeps_order_and_duplicates() {
        let n = Normalizer::english();
        let out = n.normalize(&["The", "rice", "is", "with", "rice", "what"]);
        assert_eq!(out, vec!["rice", "rice", "what"]);
    }

    #[test]
    fn test_custom_lexicon() {
        let mut lexicon = Lexicon::english();
        lexicon.stopwords = vec!["RICE".to_string()];
        let n = Normalizer::new(&lexicon);
        assert_eq!(n.normalize(&["the", "rice"]), vec!["the"]);
    }

    proptest! {
        #[test]
        fn test_output_never_contains_stopwords(words in prop::collection::vec("[A-Za-z]{1,10}", 0..12)) {
            let n = Normalizer::english();
            let out = n.normalize(&words);
            prop_assert!(out.len() <= words.len());
            for stem in &out {
                prop_assert!(!n.is_stopword(stem));
                prop_assert_eq!(stem.to_lowercase(), stem.clone());
            }
        }

        #[test]
        fn test_normalize_is_filtered_map(words in prop::collection::vec("[a-z]{1,10}", 0..12)) {
            let n = Normalizer::english();
            let expected: Vec<String> = words
                .iter()
                .map(|w| n.stem(w))
                .filter(|s| !n.is_stopword(s))
                .collect();
            prop_assert_eq!(n.normalize(&words), expected);
        }
    }
}
