//! Sentence → gloss conversion for Indian Sign Language.
//!
//! The raw sentence is tagged for tense, parsed into a constituency tree,
//! reordered and pruned, and the surviving words are stemmed, filtered and
//! assembled into a [`GlossSequence`].

pub mod assembler;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod tense;

pub use assembler::GlossAssembler;
pub use error::ConversionError;
pub use pipeline::{ConversionReport, GlossPipeline, IslConverter};
pub use ports::{ConstituencyParser, PosTagger, ServiceError};
pub use tense::classify_tense;

pub use isl_protocol::{GlossSequence, Lexicon, TaggedToken, Tense};
