use thiserror::Error;

use crate::ports::ServiceError;

/// Failures that abort the conversion of a sentence.
///
/// Empty input is not an error (it yields an empty gloss), and phrase pairs
/// the reorderer cannot resolve are skipped rather than reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("constituency parser unavailable: {0}")]
    ParserUnavailable(#[source] ServiceError),
    #[error("parser returned no candidate tree for a {tokens}-token sentence")]
    NoParseFound { tokens: usize },
}
