use isl_protocol::{GlossSequence, Lexicon, Tense};

/// Final ordering pass: question word to the end, then the tense marker.
#[derive(Debug, Clone)]
pub struct GlossAssembler {
    question_words: Vec<String>,
    past_marker: String,
    future_marker: String,
}

impl GlossAssembler {
    pub fn new(lexicon: &Lexicon) -> Self {
        Self {
            question_words: lexicon.question_words.clone(),
            past_marker: lexicon.past_marker.clone(),
            future_marker: lexicon.future_marker.clone(),
        }
    }

    pub fn english() -> Self {
        Self::new(&Lexicon::english())
    }

    fn is_question_word(&self, word: &str) -> bool {
        self.question_words.iter().any(|q| q == word)
    }

    /// `words` are the normalized (stemmed) leaves; question words are
    /// matched against them exactly.
    pub fn assemble(&self, mut words: Vec<String>, tense: Tense) -> GlossSequence {
        if let Some(position) = words.iter().position(|w| self.is_question_word(w)) {
            let question = words.remove(position);
            words.push(question);
        }

        match tense {
            Tense::Past => words.push(self.past_marker.clone()),
            Tense::Future => words.push(self.future_marker.clone()),
            Tense::Present | Tense::Unknown => {}
        }

        GlossSequence::new(words)
    }
}

impl Default for GlossAssembler {
    fn default() -> Self {
        Self::english()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_question_word_moves_to_end() {
        let gloss = GlossAssembler::english().assemble(words(&["what", "name"]), Tense::Present);
        assert_eq!(gloss.to_string(), "name what");
    }

    #[test]
    fn test_only_first_question_word_moves() {
        let gloss = GlossAssembler::english().assemble(words(&["who", "what", "name"]), Tense::Unknown);
        assert_eq!(gloss.to_string(), "what name who");
    }

    #[test]
    fn test_match_is_exact() {
        let gloss = GlossAssembler::english().assemble(words(&["What", "name"]), Tense::Present);
        assert_eq!(gloss.to_string(), "What name");
    }

    #[test]
    fn test_tense_markers() {
        let assembler = GlossAssembler::english();
        assert_eq!(assembler.assemble(words(&["school", "go"]), Tense::Past).to_string(), "school go before");
        assert_eq!(assembler.assemble(words(&["where", "go"]), Tense::Future).to_string(), "go where after");
        assert_eq!(assembler.assemble(words(&["rice"]), Tense::Present).to_string(), "rice");
        assert!(assembler.assemble(Vec::new(), Tense::Unknown).is_empty());
    }

    #[test]
    fn test_markers_come_from_lexicon() {
        let mut lexicon = Lexicon::english();
        lexicon.past_marker = "earlier".to_string();
        let gloss = GlossAssembler::new(&lexicon).assemble(words(&["eat"]), Tense::Past);
        assert_eq!(gloss.to_string(), "eat earlier");
    }

    proptest! {
        #[test]
        fn test_at_most_one_move_and_one_marker(
            input in prop::collection::vec(
                prop::sample::select(vec!["what", "who", "how", "rice", "name", "go"]),
                0..8,
            ),
            tense in prop::sample::select(vec![Tense::Past, Tense::Present, Tense::Future, Tense::Unknown]),
        ) {
            let assembler = GlossAssembler::english();
            let input = words(&input);
            let gloss = assembler.assemble(input.clone(), tense);
            let out = gloss.tokens();

            let added = out.len() - input.len();
            prop_assert!(added <= 1);
            prop_assert_eq!(added == 1, matches!(tense, Tense::Past | Tense::Future));

            // Everything except one relocated word keeps its order
            let body = &out[..input.len()];
            let first_q = input.iter().position(|w| assembler.is_question_word(w));
            let mut expected = input.clone();
            if let Some(i) = first_q {
                let q = expected.remove(i);
                expected.push(q);
            }
            prop_assert_eq!(body.to_vec(), expected);
        }
    }
}
