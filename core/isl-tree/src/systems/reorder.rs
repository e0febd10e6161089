use log::{debug, warn};

use crate::systems::locate::locate_parent_slot;
use crate::{NodeId, ParseTree, TreeAddress};

/// Decides which noun phrase each verb phrase is measured against.
pub trait PairingStrategy {
    fn name(&self) -> &'static str;

    /// `(noun phrase, verb phrase)` pairs, collected before any edit is made.
    fn pair(&self, tree: &ParseTree) -> Vec<(NodeId, NodeId)>;
}

/// Pairs the i-th `NP` with the i-th `VP` in pre-order. Surplus phrases of
/// either kind stay unpaired.
///
/// Nothing checks that the VP is really the predicate of the NP's clause;
/// without a dependency parse this is a structural approximation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalPairing;

impl PairingStrategy for PositionalPairing {
    fn name(&self) -> &'static str {
        "positional"
    }

    fn pair(&self, tree: &ParseTree) -> Vec<(NodeId, NodeId)> {
        let noun_phrases = tree.subtrees(|label| label == "NP");
        let verb_phrases = tree.subtrees(|label| label == "VP");
        noun_phrases.into_iter().zip(verb_phrases).collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReorderOutcome {
    pub pairs: usize,
    pub moved: usize,
    pub skipped: usize,
}

enum PairAction {
    Moved,
    InOrder,
    Skipped,
}

/// Moves verb phrases behind their paired noun phrases.
pub struct PhraseReorderer<S = PositionalPairing> {
    strategy: S,
}

impl PhraseReorderer<PositionalPairing> {
    pub fn new() -> Self {
        Self { strategy: PositionalPairing }
    }
}

impl Default for PhraseReorderer<PositionalPairing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: PairingStrategy> PhraseReorderer<S> {
    pub fn with_strategy(strategy: S) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    pub fn reorder(&self, tree: &mut ParseTree) -> ReorderOutcome {
        let pairs = self.strategy.pair(tree);
        let mut outcome = ReorderOutcome { pairs: pairs.len(), ..Default::default() };

        for (np, vp) in pairs {
            match self.reorder_pair(tree, np, vp) {
                PairAction::Moved => outcome.moved += 1,
                PairAction::InOrder => {}
                PairAction::Skipped => outcome.skipped += 1,
            }
        }

        debug!(
            "{} reordering: {} pairs, {} moved, {} skipped",
            self.strategy.name(),
            outcome.pairs,
            outcome.moved,
            outcome.skipped
        );
        outcome
    }

    fn reorder_pair(&self, tree: &mut ParseTree, np: NodeId, vp: NodeId) -> PairAction {
        // 1. Resolve both slots against the current structure
        let (np_slot, vp_slot) = match (locate_parent_slot(tree, np), locate_parent_slot(tree, vp)) {
            (Some(np_slot), Some(vp_slot)) => (np_slot, vp_slot),
            _ => {
                debug!("skipping NP/VP pair: address not resolvable");
                return PairAction::Skipped;
            }
        };

        // 2. Compare by the trailing index of each slot
        let (np_index, vp_index) = match (np_slot.last(), vp_slot.last()) {
            (Some(np_index), Some(vp_index)) => (np_index, vp_index),
            _ => {
                debug!("skipping NP/VP pair: slot at root ({} / {})", np_slot, vp_slot);
                return PairAction::Skipped;
            }
        };
        if vp_index >= np_index {
            return PairAction::InOrder;
        }

        // A phrase cannot be hung next to its own descendant or ancestor
        if tree.is_ancestor(vp, np) || tree.is_ancestor(np, vp) {
            debug!("skipping NP/VP pair: phrases are nested");
            return PairAction::Skipped;
        }

        // 3. Move. The NP is the anchor by identity, so detaching the VP
        //    cannot shift the insertion point.
        let origin = tree.address_of(vp);
        if let Err(err) = tree.detach(vp) {
            debug!("skipping NP/VP pair: {}", err);
            return PairAction::Skipped;
        }
        match tree.insert_after(np, vp) {
            Ok(()) => {
                debug!("moved VP from {} to follow NP at {}", vp_slot, np_slot);
                PairAction::Moved
            }
            Err(err) => {
                debug!("restoring VP after failed move: {}", err);
                restore(tree, vp, origin.as_ref());
                PairAction::Skipped
            }
        }
    }
}

/// Put a detached VP back where it was. Returns false, leaving the VP
/// detached, when its old slot no longer exists.
fn restore(tree: &mut ParseTree, vp: NodeId, origin: Option<&TreeAddress>) -> bool {
    let Some(origin) = origin else {
        warn!("VP had no address before the move; it stays detached");
        return false;
    };
    match tree.insert_at(origin, vp) {
        Ok(()) => true,
        Err(err) => {
            warn!("could not restore VP to {}: {}; it stays detached", origin, err);
            false
        }
    }
}
