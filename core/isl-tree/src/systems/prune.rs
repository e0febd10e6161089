use isl_protocol::TagSet;
use log::debug;

use crate::ParseTree;

/// Removes every constituent whose label is in a closed tag set.
pub struct PosPruner {
    unwanted: TagSet,
}

impl PosPruner {
    pub fn new(unwanted: TagSet) -> Self {
        Self { unwanted }
    }

    pub fn unwanted(&self) -> TagSet {
        self.unwanted
    }

    /// Returns the number of subtrees removed.
    ///
    /// Candidates are collected first and removed one by one. A candidate
    /// nested in an already removed subtree is gone from the tree by the time
    /// its turn comes and is passed over. The root is never removed.
    pub fn prune(&self, tree: &mut ParseTree) -> usize {
        let root = tree.root();
        let candidates = tree.subtrees(|label| self.unwanted.contains_label(label));

        let mut removed = 0;
        for node in candidates {
            if node == root {
                debug!("root carries an unwanted label; keeping it");
                continue;
            }
            if !tree.is_attached(node) {
                continue;
            }
            match tree.remove(node) {
                Ok(()) => removed += 1,
                Err(err) => debug!("could not prune node: {}", err),
            }
        }
        removed
    }
}

impl Default for PosPruner {
    fn default() -> Self {
        Self::new(TagSet::UNWANTED)
    }
}
