pub mod components;
pub mod systems;

use std::fmt;

use components::{Children, Label, Leaf, Parent};
use hecs::{Entity, World};
use thiserror::Error;

pub use systems::locate::locate_parent_slot;
pub use systems::prune::PosPruner;
pub use systems::reorder::{PairingStrategy, PhraseReorderer, PositionalPairing, ReorderOutcome};

/// Stable handle of a node. Survives every edit until the node is removed.
pub type NodeId = Entity;

/// Child indices from the root down to a node.
///
/// Only valid until the tree is edited at or before that position; recompute
/// with [`ParseTree::address_of`] instead of holding on to one across edits.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TreeAddress(Vec<usize>);

impl TreeAddress {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn last(&self) -> Option<usize> {
        self.0.last().copied()
    }

    /// Address with the trailing index stripped. `None` for the root.
    pub fn parent(&self) -> Option<TreeAddress> {
        let (_, prefix) = self.0.split_last()?;
        Some(TreeAddress(prefix.to_vec()))
    }
}

impl From<Vec<usize>> for TreeAddress {
    fn from(path: Vec<usize>) -> Self {
        Self(path)
    }
}

impl fmt::Display for TreeAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, index) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", index)?;
        }
        f.write_str(")")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("node {0:?} does not exist in this tree")]
    NoSuchNode(NodeId),
    #[error("the root node cannot be moved or removed")]
    RootImmovable,
    #[error("node {0:?} is not attached to a parent")]
    NotAttached(NodeId),
    #[error("node {0:?} already has a parent")]
    AlreadyAttached(NodeId),
    #[error("attaching node {0:?} would create a cycle")]
    Cycle(NodeId),
    #[error("leaf {0:?} cannot hold children")]
    LeafParent(NodeId),
    #[error("no insertion slot at address {0}")]
    InvalidAddress(TreeAddress),
    #[error("child index {index} is past the end of a list of {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// A mutable constituency tree stored as an arena of entities.
///
/// Internal nodes carry a [`Label`] and [`Children`]; leaves carry a [`Leaf`].
/// Every attached node except the root carries a [`Parent`] back-link.
pub struct ParseTree {
    world: World,
    root: NodeId,
}

impl ParseTree {
    pub fn new(root_label: impl Into<String>) -> Self {
        let mut world = World::new();
        let root = world.spawn((Label(root_label.into()), Children::default()));
        Self { world, root }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of live nodes, attached or not.
    pub fn node_count(&self) -> usize {
        self.world.len() as usize
    }

    // --- Construction ---

    /// Spawn an internal node that is not yet part of the tree.
    pub fn create_node(&mut self, label: impl Into<String>) -> NodeId {
        self.world.spawn((Label(label.into()), Children::default()))
    }

    /// Spawn a leaf that is not yet part of the tree.
    pub fn create_leaf(&mut self, text: impl Into<String>) -> NodeId {
        self.world.spawn((Leaf { text: text.into() },))
    }

    /// Append a new internal node as the last child of `parent`.
    pub fn push_node(&mut self, parent: NodeId, label: impl Into<String>) -> Result<NodeId, TreeError> {
        let node = self.create_node(label);
        self.append(parent, node)?;
        Ok(node)
    }

    /// Append a new leaf as the last child of `parent`.
    pub fn push_leaf(&mut self, parent: NodeId, text: impl Into<String>) -> Result<NodeId, TreeError> {
        let leaf = self.create_leaf(text);
        self.append(parent, leaf)?;
        Ok(leaf)
    }

    // --- Inspection ---

    pub fn contains(&self, node: NodeId) -> bool {
        self.world.contains(node)
    }

    pub fn label(&self, node: NodeId) -> Option<String> {
        self.world.get::<&Label>(node).ok().map(|l| l.0.clone())
    }

    pub fn leaf_text(&self, node: NodeId) -> Option<String> {
        self.world.get::<&Leaf>(node).ok().map(|l| l.text.clone())
    }

    pub fn is_leaf(&self, node: NodeId) -> bool {
        self.world.get::<&Leaf>(node).is_ok()
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.world.get::<&Parent>(node).ok().map(|p| p.0)
    }

    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.world
            .get::<&Children>(node)
            .map(|c| c.0.clone())
            .unwrap_or_default()
    }

    /// True when `node` is reachable from the root through parent links.
    pub fn is_attached(&self, node: NodeId) -> bool {
        if !self.world.contains(node) {
            return false;
        }
        let mut current = node;
        loop {
            if current == self.root {
                return true;
            }
            match self.parent(current) {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    /// True when `ancestor` strictly dominates `node`.
    pub fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = self.parent(node);
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            current = self.parent(parent);
        }
        false
    }

    /// Leaves under the root, left to right.
    pub fn leaves(&self) -> Vec<NodeId> {
        self.leaves_under(self.root)
    }

    pub fn leaves_under(&self, node: NodeId) -> Vec<NodeId> {
        let mut leaves = Vec::new();
        let mut stack = vec![node];
        while let Some(current) = stack.pop() {
            if self.is_leaf(current) {
                leaves.push(current);
            } else {
                stack.extend(self.children(current).into_iter().rev());
            }
        }
        leaves
    }

    pub fn first_leaf(&self, node: NodeId) -> Option<NodeId> {
        self.leaves_under(node).first().copied()
    }

    /// Surface words of all attached leaves, in order.
    pub fn words(&self) -> Vec<String> {
        self.words_under(self.root)
    }

    pub fn words_under(&self, node: NodeId) -> Vec<String> {
        self.leaves_under(node)
            .into_iter()
            .filter_map(|leaf| self.leaf_text(leaf))
            .collect()
    }

    /// Internal nodes (root included) whose label satisfies `predicate`, in pre-order.
    pub fn subtrees<F>(&self, predicate: F) -> Vec<NodeId>
    where
        F: Fn(&str) -> bool,
    {
        let mut found = Vec::new();
        let mut stack = vec![self.root];
        while let Some(current) = stack.pop() {
            if let Some(label) = self.label(current) {
                if predicate(&label) {
                    found.push(current);
                }
                stack.extend(self.children(current).into_iter().rev());
            }
        }
        found
    }

    /// Address of an attached node, recomputed from the current structure.
    pub fn address_of(&self, node: NodeId) -> Option<TreeAddress> {
        if !self.world.contains(node) {
            return None;
        }
        let mut path = Vec::new();
        let mut current = node;
        while current != self.root {
            let parent = self.parent(current)?;
            let index = self
                .world
                .get::<&Children>(parent)
                .ok()?
                .0
                .iter()
                .position(|&child| child == current)?;
            path.push(index);
            current = parent;
        }
        path.reverse();
        Some(TreeAddress(path))
    }

    pub fn node_at(&self, address: &TreeAddress) -> Option<NodeId> {
        let mut current = self.root;
        for &index in address.as_slice() {
            current = *self.world.get::<&Children>(current).ok()?.0.get(index)?;
        }
        Some(current)
    }

    // --- Structural edits ---

    /// Unlink `node` from its parent. The node and its subtree stay in the
    /// arena and can be re-inserted.
    pub fn detach(&mut self, node: NodeId) -> Result<(), TreeError> {
        if node == self.root {
            return Err(TreeError::RootImmovable);
        }
        if !self.world.contains(node) {
            return Err(TreeError::NoSuchNode(node));
        }
        let parent = self.parent(node).ok_or(TreeError::NotAttached(node))?;
        if let Ok(mut children) = self.world.get::<&mut Children>(parent) {
            children.0.retain(|&child| child != node);
        }
        self.world
            .remove_one::<Parent>(node)
            .map_err(|_| TreeError::NotAttached(node))?;
        Ok(())
    }

    /// Insert a detached node so that it ends up at `address`.
    pub fn insert_at(&mut self, address: &TreeAddress, node: NodeId) -> Result<(), TreeError> {
        let (parent_address, index) = match (address.parent(), address.last()) {
            (Some(parent_address), Some(index)) => (parent_address, index),
            _ => return Err(TreeError::InvalidAddress(address.clone())),
        };
        let parent = self
            .node_at(&parent_address)
            .ok_or_else(|| TreeError::InvalidAddress(address.clone()))?;
        self.attach(parent, index, node)
    }

    /// Insert a detached node as the next sibling of `anchor`.
    pub fn insert_after(&mut self, anchor: NodeId, node: NodeId) -> Result<(), TreeError> {
        let parent = self.parent(anchor).ok_or(TreeError::NotAttached(anchor))?;
        let index = self
            .world
            .get::<&Children>(parent)
            .ok()
            .and_then(|children| children.0.iter().position(|&child| child == anchor))
            .ok_or(TreeError::NotAttached(anchor))?;
        self.attach(parent, index + 1, node)
    }

    /// Detach `node` and despawn it together with all of its descendants.
    pub fn remove(&mut self, node: NodeId) -> Result<(), TreeError> {
        self.detach(node)?;
        let mut stack = vec![node];
        while let Some(current) = stack.pop() {
            stack.extend(self.children(current));
            let _ = self.world.despawn(current);
        }
        Ok(())
    }

    fn append(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        let len = self
            .world
            .get::<&Children>(parent)
            .map(|children| children.0.len())
            .map_err(|_| self.not_a_parent(parent))?;
        self.attach(parent, len, child)
    }

    fn attach(&mut self, parent: NodeId, index: usize, child: NodeId) -> Result<(), TreeError> {
        if !self.world.contains(child) {
            return Err(TreeError::NoSuchNode(child));
        }
        if child == self.root {
            return Err(TreeError::RootImmovable);
        }
        if self.parent(child).is_some() {
            return Err(TreeError::AlreadyAttached(child));
        }
        // A childless node dominates nothing, so only subtrees need the walk
        let has_children = self
            .world
            .get::<&Children>(child)
            .map_or(false, |children| !children.0.is_empty());
        if child == parent || (has_children && self.is_ancestor(child, parent)) {
            return Err(TreeError::Cycle(child));
        }

        {
            let mut children = self
                .world
                .get::<&mut Children>(parent)
                .map_err(|_| self.not_a_parent(parent))?;
            if index > children.0.len() {
                return Err(TreeError::IndexOutOfRange { index, len: children.0.len() });
            }
            children.0.insert(index, child);
        }

        self.world
            .insert_one(child, Parent(parent))
            .map_err(|_| TreeError::NoSuchNode(child))
    }

    fn not_a_parent(&self, node: NodeId) -> TreeError {
        if self.world.contains(node) {
            TreeError::LeafParent(node)
        } else {
            TreeError::NoSuchNode(node)
        }
    }

    fn fmt_node(&self, node: NodeId, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![Render::Node(node)];
        while let Some(step) = stack.pop() {
            match step {
                Render::Space => f.write_str(" ")?,
                Render::Close => f.write_str(")")?,
                Render::Node(current) => {
                    if let Some(text) = self.leaf_text(current) {
                        f.write_str(&text)?;
                        continue;
                    }
                    write!(f, "({}", self.label(current).unwrap_or_default())?;
                    stack.push(Render::Close);
                    for child in self.children(current).into_iter().rev() {
                        stack.push(Render::Node(child));
                        stack.push(Render::Space);
                    }
                }
            }
        }
        Ok(())
    }
}

enum Render {
    Node(NodeId),
    Space,
    Close,
}

/// Bracketed Penn-style rendering, e.g. `(ROOT (S (NP (NN rice))))`.
impl fmt::Display for ParseTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_node(self.root, f)
    }
}

impl fmt::Debug for ParseTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ParseTree({})", self)
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_leaves_and_rendering() {
        let tree = i_eat_rice();
        assert_eq!(tree.words(), vec!["I", "eat", "rice"]);
        assert_eq!(
            tree.to_string(),
            "(ROOT (S (NP (PRP I)) (VP (VBP eat) (NP (NN rice)))))"
        );
    }

    #[test]
    fn test_subtrees_in_preorder() {
        let tree = i_eat_rice();
        let nps = tree.subtrees(|label| label == "NP");
        assert_eq!(nps.len(), 2);
        assert_eq!(tree.words_under(nps[0]), vec!["I"]);
        assert_eq!(tree.words_under(nps[1]), vec!["rice"]);

        // The root is a candidate too
        assert_eq!(tree.subtrees(|label| label == "ROOT"), vec![tree.root()]);
    }

    #[test]
    fn test_addresses_round_trip() {
        let tree = i_eat_rice();
        for leaf in tree.leaves() {
            let address = tree.address_of(leaf).unwrap();
            assert_eq!(tree.node_at(&address), Some(leaf));
        }
        let rice = tree.leaves()[2];
        assert_eq!(tree.address_of(rice).unwrap().as_slice(), &[0, 1, 1, 0, 0]);
        assert_eq!(tree.address_of(tree.root()), Some(TreeAddress::root()));
        assert_eq!(tree.node_at(&TreeAddress::from(vec![0, 7])), None);
    }

    #[test]
    fn test_detach_and_insert_at() {
        let mut tree = i_eat_rice();
        let vp = tree.subtrees(|l| l == "VP")[0];

        tree.detach(vp).unwrap();
        assert_eq!(tree.words(), vec!["I"]);
        assert!(!tree.is_attached(vp));
        assert_eq!(tree.address_of(vp), None);
        // The detached subtree is intact
        assert_eq!(tree.words_under(vp), vec!["eat", "rice"]);

        tree.insert_at(&TreeAddress::from(vec![0, 0]), vp).unwrap();
        assert_eq!(tree.words(), vec!["eat", "rice", "I"]);
        assert!(tree.is_attached(vp));
    }

    #[test]
    fn test_insert_new_node() {
        let mut tree = i_eat_rice();
        let pre = tree.create_node("NN");
        tree.push_leaf(pre, "today").unwrap();
        tree.insert_at(&TreeAddress::from(vec![0, 2]), pre).unwrap();
        assert_eq!(tree.words(), vec!["I", "eat", "rice", "today"]);
    }

    #[test]
    fn test_remove_despawns_subtree() {
        let mut tree = i_eat_rice();
        let before = tree.node_count();
        let vp = tree.subtrees(|l| l == "VP")[0];
        tree.remove(vp).unwrap();

        // VP, VBP, eat, NP, NN, rice
        assert_eq!(tree.node_count(), before - 6);
        assert!(!tree.contains(vp));
        assert_eq!(tree.remove(vp), Err(TreeError::NoSuchNode(vp)));
    }

    #[test]
    fn test_deep_chain_renders() {
        let depth = 50_000;
        let mut tree = ParseTree::new("ROOT");
        let mut parent = tree.root();
        for _ in 0..depth {
            parent = tree.push_node(parent, "NP").unwrap();
        }
        tree.push_leaf(parent, "x").unwrap();

        let text = tree.to_string();
        assert!(text.starts_with("(ROOT (NP (NP "));
        assert!(text.ends_with(&format!("x{}", ")".repeat(depth + 1))));
        assert_eq!(tree.words(), vec!["x"]);
    }

    #[test]
    fn test_edit_errors() {
        let mut tree = i_eat_rice();
        let root = tree.root();
        assert_eq!(tree.detach(root), Err(TreeError::RootImmovable));

        let s = tree.children(root)[0];
        let np = tree.children(s)[0];
        assert_eq!(tree.insert_after(s, np), Err(TreeError::AlreadyAttached(np)));

        let orphan = tree.create_leaf("x");
        assert_eq!(tree.detach(orphan), Err(TreeError::NotAttached(orphan)));
        assert_eq!(
            tree.insert_at(&TreeAddress::root(), orphan),
            Err(TreeError::InvalidAddress(TreeAddress::root()))
        );
        assert_eq!(
            tree.insert_at(&TreeAddress::from(vec![9]), orphan),
            Err(TreeError::IndexOutOfRange { index: 9, len: 1 })
        );

        let leaf = tree.leaves()[0];
        assert_eq!(tree.push_leaf(leaf, "y"), Err(TreeError::LeafParent(leaf)));

        // A detached subtree cannot be hung below its own descendant
        let vp = tree.subtrees(|l| l == "VP")[0];
        let object = tree.subtrees(|l| l == "NP")[1];
        tree.detach(vp).unwrap();
        assert_eq!(tree.push_node(object, "X").map(|_| ()), Ok(()));
        assert!(matches!(tree.attach(object, 0, vp), Err(TreeError::Cycle(_))));
    }
}
