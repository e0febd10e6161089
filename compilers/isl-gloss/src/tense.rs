use isl_protocol::{TaggedToken, Tense};

/// Classify a sentence's tense from its tagged tokens.
///
/// Each verb tag votes for one tense; the tense with the most votes wins and
/// ties go to the tense voted for first. No verb tags → `Tense::Unknown`.
pub fn classify_tense(tokens: &[TaggedToken]) -> Tense {
    // Vote counts in first-seen order
    let mut votes: Vec<(Tense, usize)> = Vec::new();
    for tense in tokens.iter().filter_map(|t| t.pos().and_then(Tense::from_verb_tag)) {
        match votes.iter_mut().find(|(seen, _)| *seen == tense) {
            Some((_, count)) => *count += 1,
            None => votes.push((tense, 1)),
        }
    }

    let mut best: Option<(Tense, usize)> = None;
    for &(tense, count) in &votes {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((tense, count));
        }
    }
    best.map_or(Tense::Unknown, |(tense, _)| tense)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tagged(pairs: &[(&str, &str)]) -> Vec<TaggedToken> {
        pairs.iter().map(|(w, t)| TaggedToken::new(*w, *t)).collect()
    }

    #[test]
    fn test_single_verbs() {
        assert_eq!(classify_tense(&tagged(&[("He", "PRP"), ("ate", "VBD")])), Tense::Past);
        assert_eq!(classify_tense(&tagged(&[("She", "PRP"), ("runs", "VBZ")])), Tense::Present);
        assert_eq!(
            classify_tense(&tagged(&[("I", "PRP"), ("will", "MD"), ("go", "VB"), ("home", "NN")])),
            // MD and VB tie; MD came first
            Tense::Future
        );
    }

    #[test]
    fn test_non_third_person_present_counts_as_future() {
        let tokens = tagged(&[("I", "PRP"), ("eat", "VBP"), ("rice", "NN")]);
        assert_eq!(classify_tense(&tokens), Tense::Future);
    }

    #[test]
    fn test_majority_and_ties() {
        let majority = tagged(&[("was", "VBD"), ("is", "VBZ"), ("went", "VBD")]);
        assert_eq!(classify_tense(&majority), Tense::Past);

        let present_first = tagged(&[("is", "VBZ"), ("was", "VBD")]);
        assert_eq!(classify_tense(&present_first), Tense::Present);

        let past_first = tagged(&[("was", "VBD"), ("is", "VBZ")]);
        assert_eq!(classify_tense(&past_first), Tense::Past);
    }

    #[test]
    fn test_no_verbs_is_unknown() {
        assert_eq!(classify_tense(&[]), Tense::Unknown);
        let tokens = tagged(&[("rice", "NN"), ("eating", "VBG"), (".", ".")]);
        assert_eq!(classify_tense(&tokens), Tense::Unknown);
    }

    proptest! {
        #[test]
        fn test_classification_is_deterministic(
            tags in prop::collection::vec(
                prop::sample::select(vec!["VB", "VBD", "VBZ", "VBP", "MD", "NN", "PRP", "VBG"]),
                0..10,
            )
        ) {
            let tokens: Vec<TaggedToken> = tags.iter().map(|t| TaggedToken::new("w", *t)).collect();
            prop_assert_eq!(classify_tense(&tokens), classify_tense(&tokens.clone()));
        }
    }
}
