//! The subset of CoreNLP's JSON output this client reads.

use isl_gloss::ServiceError;
use isl_protocol::TaggedToken;
use isl_tree::ParseTree;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct Document {
    #[serde(default)]
    sentences: Vec<Sentence>,
}

#[derive(Debug, Deserialize)]
struct Sentence {
    #[serde(default)]
    parse: Option<String>,
    #[serde(default)]
    tokens: Vec<Token>,
}

#[derive(Debug, Deserialize)]
struct Token {
    word: String,
    #[serde(default)]
    pos: Option<String>,
}

impl Document {
    /// One tree per sentence, in order.
    pub(crate) fn trees(&self) -> Result<Vec<ParseTree>, ServiceError> {
        self.sentences
            .iter()
            .enumerate()
            .map(|(index, sentence)| {
                let text = sentence.parse.as_deref().ok_or_else(|| {
                    ServiceError::InvalidResponse(format!("sentence {} has no parse", index))
                })?;
                isl_parser::parse_tree(text).map_err(|e| {
                    ServiceError::InvalidResponse(format!("sentence {} parse: {}", index, e))
                })
            })
            .collect()
    }

    /// Tokens across all sentences; a token without a tag gets an empty one.
    pub(crate) fn tagged_tokens(self) -> Vec<TaggedToken> {
        self.sentences
            .into_iter()
            .flat_map(|sentence| sentence.tokens)
            .map(|token| TaggedToken::new(token.word, token.pos.unwrap_or_default()))
            .collect()
    }
}
