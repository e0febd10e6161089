use std::time::Duration;

use isl_protocol::TaggedToken;
use isl_tree::ParseTree;
use thiserror::Error;

/// Failure talking to an out-of-process language service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("could not reach {endpoint}: {reason}")]
    Unreachable { endpoint: String, reason: String },
    #[error("{endpoint} did not answer within {timeout:?}")]
    Timeout { endpoint: String, timeout: Duration },
    #[error("{endpoint} answered with HTTP status {status}")]
    Status { endpoint: String, status: u16 },
    #[error("unusable response: {0}")]
    InvalidResponse(String),
}

/// Produces constituency trees for a tokenized sentence.
pub trait ConstituencyParser {
    /// Candidate trees, best first. Only the first one is used.
    fn parse(&self, tokens: &[String]) -> Result<Vec<ParseTree>, ServiceError>;
}

/// Assigns Penn Treebank tags to raw text, tokenizing it itself.
pub trait PosTagger {
    fn tag(&self, text: &str) -> Result<Vec<TaggedToken>, ServiceError>;
}

impl<P: ConstituencyParser + ?Sized> ConstituencyParser for &P {
    fn parse(&self, tokens: &[String]) -> Result<Vec<ParseTree>, ServiceError> {
        (**self).parse(tokens)
    }
}

impl<T: PosTagger + ?Sized> PosTagger for &T {
    fn tag(&self, text: &str) -> Result<Vec<TaggedToken>, ServiceError> {
        (**self).tag(text)
    }
}
