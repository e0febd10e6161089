use rkyv::{Archive, Deserialize, Serialize};
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::pos::PosTag;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// A surface token with the tag an external tagger assigned to it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct TaggedToken {
    pub text: String,
    pub tag: String,
}

impl TaggedToken {
    pub fn new(text: impl Into<String>, tag: impl Into<String>) -> Self {
        Self { text: text.into(), tag: tag.into() }
    }

    /// `None` for punctuation and tags outside the Penn word-level set.
    pub fn pos(&self) -> Option<PosTag> {
        PosTag::from_label(&self.tag)
    }
}

/// Final ordered gloss tokens handed to a renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct GlossSequence(Vec<String>);

impl GlossSequence {
    pub fn new(tokens: Vec<String>) -> Self {
        Self(tokens)
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    pub fn into_tokens(self) -> Vec<String> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for GlossSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(token)?;
        }
        Ok(())
    }
}

impl FromStr for GlossSequence {
    type Err = core::convert::Infallible;

    /// Re-tokenize a joined gloss on whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.split_whitespace().map(ToString::to_string).collect()))
    }
}

/// Lexical resources for one source language.
#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Lexicon {
    pub version: u32,
    /// Compared against the lowercased stem.
    pub stopwords: Vec<String>,
    /// Exact, case-sensitive match.
    pub question_words: Vec<String>,
    pub past_marker: String,
    pub future_marker: String,
}

// NLTK English stopword list without the interrogatives, which must survive
// filtering to be relocated.
const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "which", "whom", "this", "that", "that'll", "these",
    "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "all", "any", "both", "each", "few", "more", "most", "other", "some",
    "such", "no", "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s", "t",
    "can", "will", "just", "don", "don't", "should", "should've", "now", "d", "ll", "m", "o",
    "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn", "didn't", "doesn",
    "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn", "isn't", "ma",
    "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't", "shouldn",
    "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn", "wouldn't",
];

const ENGLISH_QUESTION_WORDS: &[&str] = &["what", "when", "where", "why", "who", "how"];

impl Lexicon {
    pub fn english() -> Self {
        Self {
            version: 1,
            stopwords: ENGLISH_STOPWORDS.iter().map(|w| w.to_string()).collect(),
            question_words: ENGLISH_QUESTION_WORDS.iter().map(|w| w.to_string()).collect(),
            past_marker: "before".to_string(),
            future_marker: "after".to_string(),
        }
    }

    /// Validate and load a compiled lexicon archive.
    ///
    /// The bytes are copied into an aligned buffer first, so slices read
    /// straight from disk are accepted.
    pub fn from_archive_bytes(bytes: &[u8]) -> Result<Self, LexiconError> {
        if bytes.is_empty() {
            return Err(LexiconError::Empty);
        }
        let mut aligned = rkyv::AlignedVec::with_capacity(bytes.len());
        aligned.extend_from_slice(bytes);

        let archived = rkyv::check_archived_root::<Lexicon>(&aligned)
            .map_err(|e| LexiconError::InvalidArchive(format!("{}", e)))?;
        let lexicon: Lexicon = match archived.deserialize(&mut rkyv::Infallible) {
            Ok(lexicon) => lexicon,
            Err(never) => match never {},
        };
        Ok(lexicon)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::english()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexiconError {
    Empty,
    InvalidArchive(String),
}

impl fmt::Display for LexiconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexiconError::Empty => write!(f, "lexicon archive is empty"),
            LexiconError::InvalidArchive(reason) => write!(f, "invalid lexicon archive: {}", reason),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LexiconError {}
