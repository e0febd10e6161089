#![no_std] // Keeps the shared vocabulary usable from the WASM binding

extern crate alloc;

// Enable std if the feature is active (for tests/tools)
#[cfg(feature = "std")]
extern crate std;

pub mod pos;
pub mod tense;

// Re-export core types for convenience
pub use pos::{PosTag, TagSet};
pub use tense::Tense;

pub mod model;
pub use model::*;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;
    use rkyv::to_bytes;

    #[test]
    fn test_lexicon_archive_round_trip() {
        let original = Lexicon::english();

        let bytes = to_bytes::<_, 1024>(&original).expect("Failed to serialize Lexicon");

        // Simulate an unaligned read from disk
        let mut shifted = vec![0u8];
        shifted.extend_from_slice(&bytes);
        let loaded = Lexicon::from_archive_bytes(&shifted[1..]).expect("Failed to load Lexicon");

        assert_eq!(original, loaded);
    }

    #[test]
    fn test_lexicon_rejects_garbage() {
        assert_eq!(Lexicon::from_archive_bytes(&[]), Err(LexiconError::Empty));
        assert!(matches!(
            Lexicon::from_archive_bytes(&[0xff; 3]),
            Err(LexiconError::InvalidArchive(_))
        ));
    }

    #[test]
    fn test_interrogatives_are_not_stopwords() {
        let lexicon = Lexicon::english();
        for word in &lexicon.question_words {
            assert!(!lexicon.stopwords.contains(word), "{} must not be filtered", word);
        }
        assert!(lexicon.stopwords.contains(&"the".to_string()));
    }

    #[test]
    fn test_gloss_text_round_trip() {
        let gloss = GlossSequence::new(vec!["name".to_string(), "what".to_string()]);
        let text = gloss.to_string();
        assert_eq!(text, "name what");

        let parsed: GlossSequence = text.parse().unwrap();
        assert_eq!(parsed, gloss);
        assert_eq!(GlossSequence::empty().to_string(), "");
    }

    #[test]
    fn test_tense_table() {
        assert_eq!(Tense::from_verb_tag(PosTag::VBD), Some(Tense::Past));
        assert_eq!(Tense::from_verb_tag(PosTag::VB), Some(Tense::Present));
        assert_eq!(Tense::from_verb_tag(PosTag::VBZ), Some(Tense::Present));
        assert_eq!(Tense::from_verb_tag(PosTag::MD), Some(Tense::Future));
        assert_eq!(Tense::from_verb_tag(PosTag::VBP), Some(Tense::Future));
        assert_eq!(Tense::from_verb_tag(PosTag::VBG), None);
        assert_eq!(Tense::from_verb_tag(PosTag::NN), None);
    }
}
