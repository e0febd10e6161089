use isl_morph::Normalizer;
use isl_protocol::{GlossSequence, Lexicon, TaggedToken, Tense};
use isl_tree::{PairingStrategy, ParseTree, PhraseReorderer, PosPruner, PositionalPairing, ReorderOutcome};
use log::{debug, warn};

use crate::assembler::GlossAssembler;
use crate::error::ConversionError;
use crate::ports::{ConstituencyParser, PosTagger};
use crate::tense::classify_tense;

/// Intermediate results of one conversion, for front ends that show them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub tense: Tense,
    /// Bracketed rendering after reordering and pruning. Empty when nothing was parsed.
    pub tree: String,
    /// Surviving leaves before normalization.
    pub leaves: Vec<String>,
    pub gloss: GlossSequence,
    pub reorder: ReorderOutcome,
    pub pruned: usize,
}

impl ConversionReport {
    fn empty() -> Self {
        Self {
            tense: Tense::Unknown,
            tree: String::new(),
            leaves: Vec::new(),
            gloss: GlossSequence::empty(),
            reorder: ReorderOutcome::default(),
            pruned: 0,
        }
    }
}

/// The tree stages: reorder, prune, normalize, assemble.
///
/// Needs no services, so it also serves callers that already hold a parse.
pub struct GlossPipeline<S = PositionalPairing> {
    reorderer: PhraseReorderer<S>,
    pruner: PosPruner,
    normalizer: Normalizer,
    assembler: GlossAssembler,
}

impl GlossPipeline<PositionalPairing> {
    pub fn new(lexicon: &Lexicon) -> Self {
        Self::with_strategy(lexicon, PositionalPairing)
    }
}

impl Default for GlossPipeline<PositionalPairing> {
    fn default() -> Self {
        Self::new(&Lexicon::english())
    }
}

impl<S: PairingStrategy> GlossPipeline<S> {
    pub fn with_strategy(lexicon: &Lexicon, strategy: S) -> Self {
        Self {
            reorderer: PhraseReorderer::with_strategy(strategy),
            pruner: PosPruner::default(),
            normalizer: Normalizer::new(lexicon),
            assembler: GlossAssembler::new(lexicon),
        }
    }

    /// Run every tree stage on `tree`, which is edited in place.
    pub fn run(&self, tree: &mut ParseTree, tense: Tense) -> ConversionReport {
        let reorder = self.reorderer.reorder(tree);
        let pruned = self.pruner.prune(tree);
        debug!("pruned {} constituents: {}", pruned, tree);

        let leaves = tree.words();
        let normalized = self.normalizer.normalize(&leaves);
        let gloss = self.assembler.assemble(normalized, tense);

        ConversionReport { tense, tree: tree.to_string(), leaves, gloss, reorder, pruned }
    }

    /// Convenience for pre-tagged input: classify, then run.
    pub fn run_tagged(&self, tree: &mut ParseTree, tags: &[TaggedToken]) -> ConversionReport {
        self.run(tree, classify_tense(tags))
    }
}

/// English sentence → ISL gloss, backed by a parser and a tagger service.
pub struct IslConverter<P, T, S = PositionalPairing> {
    parser: P,
    tagger: T,
    pipeline: GlossPipeline<S>,
}

impl<P: ConstituencyParser, T: PosTagger> IslConverter<P, T> {
    pub fn new(parser: P, tagger: T) -> Self {
        Self::with_lexicon(parser, tagger, &Lexicon::english())
    }

    pub fn with_lexicon(parser: P, tagger: T, lexicon: &Lexicon) -> Self {
        Self { parser, tagger, pipeline: GlossPipeline::new(lexicon) }
    }
}

impl<P: ConstituencyParser, T: PosTagger, S: PairingStrategy> IslConverter<P, T, S> {
    pub fn with_pipeline(parser: P, tagger: T, pipeline: GlossPipeline<S>) -> Self {
        Self { parser, tagger, pipeline }
    }

    /// Tense from an independent tagging pass over the raw sentence.
    /// A tagger failure degrades to `Tense::Unknown`.
    pub fn tense_of(&self, sentence: &str) -> Tense {
        match self.tagger.tag(sentence) {
            Ok(tags) => classify_tense(&tags),
            Err(err) => {
                warn!("tagging failed, tense left unknown: {}", err);
                Tense::Unknown
            }
        }
    }

    pub fn convert(&self, sentence: &str) -> Result<GlossSequence, ConversionError> {
        self.convert_detailed(sentence).map(|report| report.gloss)
    }

    pub fn convert_detailed(&self, sentence: &str) -> Result<ConversionReport, ConversionError> {
        let tokens = isl_parser::words(sentence);
        if tokens.is_empty() {
            debug!("empty input, nothing to parse");
            return Ok(ConversionReport::empty());
        }

        let tense = self.tense_of(sentence);

        let mut tree = self
            .parser
            .parse(&tokens)
            .map_err(ConversionError::ParserUnavailable)?
            .into_iter()
            .next()
            .ok_or(ConversionError::NoParseFound { tokens: tokens.len() })?;
        debug!("parsed: {}", tree);

        Ok(self.pipeline.run(&mut tree, tense))
    }
}
