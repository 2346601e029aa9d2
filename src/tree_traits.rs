use std::fmt::Display;

use termtree::Tree;

use crate::node::AvlNode;
use crate::tree::AvlTree;

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl<T: Display> TreeNodeConvert for AvlTree<T> {
    fn to_tree_string(&self) -> Tree<String> {
        match self.root.as_deref() {
            Some(root) => subtree(root),
            None => Tree::new("Empty tree".to_string()),
        }
    }
}

fn subtree<T: Display>(node: &AvlNode<T>) -> Tree<String> {
    // left child rendered before right, matching traversal order
    let leaves: Vec<_> = [node.left.as_deref(), node.right.as_deref()]
        .into_iter()
        .flatten()
        .map(subtree)
        .collect();

    Tree::new(node.key.to_string()).with_leaves(leaves)
}
