use crate::{NodeId, ParseTree, TreeAddress};

/// Address of the slot holding the first word of `subtree`.
///
/// This is the address of the subtree's first leaf with the leaf's own index
/// stripped, i.e. the node directly above that leaf. Returns `None` when the
/// subtree has no leaves or its first leaf is no longer part of the tree.
pub fn locate_parent_slot(tree: &ParseTree, subtree: NodeId) -> Option<TreeAddress> {
    let first = tree.first_leaf(subtree)?;
    let leaves = tree.leaves();
    let position = leaves.iter().position(|&leaf| leaf == first)?;
    tree.address_of(leaves[position])?.parent()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::*;

    #[test]
    fn test_slots_of_phrases() {
        let tree = i_eat_rice();
        let nps = tree.subtrees(|l| l == "NP");
        let vp = tree.subtrees(|l| l == "VP")[0];

        assert_eq!(locate_parent_slot(&tree, nps[0]).unwrap().as_slice(), &[0, 0, 0]);
        assert_eq!(locate_parent_slot(&tree, vp).unwrap().as_slice(), &[0, 1, 0]);
        assert_eq!(locate_parent_slot(&tree, nps[1]).unwrap().as_slice(), &[0, 1, 1, 0]);
    }

    #[test]
    fn test_repeated_word_resolves_to_its_own_leaf() {
        // (ROOT (S (NP (DT the) (NN dog)) (VP (VBD saw) (NP (DT the) (NN cat)))))
        let mut tree = ParseTree::new("ROOT");
        let s = tree.push_node(tree.root(), "S").unwrap();
        let subject = tree.push_node(s, "NP").unwrap();
        word(&mut tree, subject, "DT", "the");
        word(&mut tree, subject, "NN", "dog");
        let vp = tree.push_node(s, "VP").unwrap();
        word(&mut tree, vp, "VBD", "saw");
        let object = tree.push_node(vp, "NP").unwrap();
        word(&mut tree, object, "DT", "the");
        word(&mut tree, object, "NN", "cat");

        assert_eq!(locate_parent_slot(&tree, subject).unwrap().as_slice(), &[0, 0, 0]);
        assert_eq!(locate_parent_slot(&tree, object).unwrap().as_slice(), &[0, 1, 1, 0]);
    }

    #[test]
    fn test_detached_subtree_is_not_found() {
        let mut tree = i_eat_rice();
        let vp = tree.subtrees(|l| l == "VP")[0];
        let object = tree.subtrees(|l| l == "NP")[1];
        tree.detach(vp).unwrap();

        assert_eq!(locate_parent_slot(&tree, vp), None);
        assert_eq!(locate_parent_slot(&tree, object), None);
    }

    #[test]
    fn test_subtree_without_leaves() {
        let mut tree = ParseTree::new("ROOT");
        let empty = tree.push_node(tree.root(), "VP").unwrap();
        assert_eq!(locate_parent_slot(&tree, empty), None);
    }

    #[test]
    fn test_leaf_directly_under_root() {
        let mut tree = ParseTree::new("ROOT");
        tree.push_leaf(tree.root(), "hello").unwrap();
        assert_eq!(locate_parent_slot(&tree, tree.root()), Some(TreeAddress::root()));
    }
}
