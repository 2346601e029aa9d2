//! The tree owner and its mutating operations.
//!
//! Insert and remove descend recursively and thread a height-change flag
//! back up the call stack, so only the mutated path is retraced. Rotations
//! fire at the first ancestor whose child heights would differ by two.

use std::cmp::Ordering;
use std::mem;

use tracing::instrument;

use crate::errors::{TreeError, TreeResult};
use crate::node::{AvlNode, Balance, Link};
use crate::rebalance::{
    after_left_shrink, after_right_shrink, resolve_left_overflow, resolve_right_overflow,
};

/// Self-balancing binary search tree.
///
/// Keys are unique and totally ordered. After every completed operation the
/// height difference between any node's subtrees is at most one, and an
/// in-order walk yields the keys strictly ascending.
///
/// Not safe for concurrent mutation; callers needing shared access
/// serialize externally.
#[derive(Debug)]
pub struct AvlTree<T> {
    pub(crate) root: Link<T>,
}

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> AvlTree<T> {
    pub fn new() -> Self {
        Self { root: None }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Drops every node. Teardown is post-order by ownership; calling this
    /// on an empty tree is a no-op.
    #[instrument(level = "debug", skip_all)]
    pub fn purge(&mut self) {
        self.root = None;
    }

    /// Number of edges on the longest root-to-leaf path, -1 when empty.
    pub fn height(&self) -> isize {
        height_below(&self.root)
    }
}

impl<T: Ord> AvlTree<T> {
    /// Inserts a new key.
    ///
    /// A key that is already present is rejected with
    /// [`TreeError::DuplicateKey`], which returns the rejected key to the
    /// caller; the tree is left untouched. Rebalancing retraces the
    /// insertion path bottom-up and changes the overall height by at most
    /// one.
    #[instrument(level = "debug", skip_all)]
    pub fn insert(&mut self, key: T) -> TreeResult<(), T> {
        insert_at(&mut self.root, key)?;
        Ok(())
    }

    /// Removes a key and returns it.
    ///
    /// Fails with [`TreeError::EmptyTree`] when there is nothing to remove
    /// and with [`TreeError::KeyNotFound`] (handing the probe key back)
    /// when the key is absent. A node with two children takes its in-order
    /// predecessor's key, and the predecessor is spliced out instead.
    /// Rebalancing retraces only the removal path.
    #[instrument(level = "debug", skip_all)]
    pub fn remove(&mut self, key: T) -> TreeResult<T, T> {
        if self.root.is_none() {
            return Err(TreeError::EmptyTree);
        }
        let (removed, _) = remove_at(&mut self.root, key)?;
        Ok(removed)
    }

    /// Whether the key is present, by iterative descent.
    pub fn contains(&self, key: &T) -> bool {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = match key.cmp(&node.key) {
                Ordering::Equal => return true,
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        false
    }
}

impl<T: Ord + Clone> Clone for AvlTree<T> {
    /// Deep copy by pre-order re-insert, not a structural clone: keys are
    /// visited root-first and inserted into a fresh tree one by one.
    fn clone(&self) -> Self {
        let mut tree = Self::new();
        self.pre_order(|key| {
            // keys in an existing tree are unique, insert cannot fail
            let _ = tree.insert(key.clone());
        });
        tree
    }
}

fn height_below<T>(link: &Link<T>) -> isize {
    match link.as_deref() {
        None => -1,
        Some(node) => 1 + height_below(&node.left).max(height_below(&node.right)),
    }
}

/// Recursive descent insert. The returned flag reports whether the subtree
/// under `link` grew one level taller.
fn insert_at<T: Ord>(link: &mut Link<T>, key: T) -> TreeResult<bool, T> {
    let node = match link {
        None => {
            *link = Some(AvlNode::leaf(key));
            return Ok(true);
        }
        Some(node) => node,
    };
    match key.cmp(&node.key) {
        Ordering::Equal => Err(TreeError::DuplicateKey(key)),
        Ordering::Less => {
            if !insert_at(&mut node.left, key)? {
                return Ok(false);
            }
            match node.balance {
                // the left side absorbed the growth within existing slack
                Balance::RightHeavy => {
                    node.balance = Balance::Even;
                    Ok(false)
                }
                Balance::Even => {
                    node.balance = Balance::LeftHeavy;
                    Ok(true)
                }
                // already left-heavy: rotate, height is back to pre-insert
                Balance::LeftHeavy => {
                    resolve_left_overflow(node)?;
                    Ok(false)
                }
            }
        }
        Ordering::Greater => {
            if !insert_at(&mut node.right, key)? {
                return Ok(false);
            }
            match node.balance {
                Balance::LeftHeavy => {
                    node.balance = Balance::Even;
                    Ok(false)
                }
                Balance::Even => {
                    node.balance = Balance::RightHeavy;
                    Ok(true)
                }
                Balance::RightHeavy => {
                    resolve_right_overflow(node)?;
                    Ok(false)
                }
            }
        }
    }
}

/// Recursive descent remove. Returns the removed key and whether the
/// subtree under `link` lost one level.
fn remove_at<T: Ord>(link: &mut Link<T>, key: T) -> TreeResult<(T, bool), T> {
    let node = match link {
        None => return Err(TreeError::KeyNotFound(key)),
        Some(node) => node,
    };
    match key.cmp(&node.key) {
        Ordering::Less => {
            let (removed, shrank) = remove_at(&mut node.left, key)?;
            let shrank = if shrank { after_left_shrink(node)? } else { false };
            Ok((removed, shrank))
        }
        Ordering::Greater => {
            let (removed, shrank) = remove_at(&mut node.right, key)?;
            let shrank = if shrank { after_right_shrink(node)? } else { false };
            Ok((removed, shrank))
        }
        Ordering::Equal => detach(link),
    }
}

/// Unlinks the node at `link`, which holds the removal target.
fn detach<T>(link: &mut Link<T>) -> TreeResult<(T, bool), T> {
    let node = match link {
        None => return Err(TreeError::StructuralInvariant("detach on an empty link")),
        Some(node) => node,
    };
    match (node.left.is_some(), node.right.is_some()) {
        // two children: the in-order predecessor's key replaces the
        // target's, and the predecessor node is spliced out of the left
        // subtree
        (true, true) => {
            let (predecessor, shrank) = take_rightmost(&mut node.left)?;
            let removed = mem::replace(&mut node.key, predecessor);
            let shrank = if shrank { after_left_shrink(node)? } else { false };
            Ok((removed, shrank))
        }
        (true, false) => {
            let child = node
                .left
                .take()
                .ok_or(TreeError::StructuralInvariant("left child vanished"))?;
            let old = mem::replace(node, child);
            Ok((old.key, true))
        }
        (false, true) => {
            let child = node
                .right
                .take()
                .ok_or(TreeError::StructuralInvariant("right child vanished"))?;
            let old = mem::replace(node, child);
            Ok((old.key, true))
        }
        (false, false) => {
            let leaf = link
                .take()
                .ok_or(TreeError::StructuralInvariant("leaf vanished"))?;
            Ok((leaf.key, true))
        }
    }
}

/// Splices out the right-most node under `link` and returns its key plus
/// whether the subtree lost a level. The right-most node has at most a
/// left child, which moves up into its slot.
fn take_rightmost<T>(link: &mut Link<T>) -> TreeResult<(T, bool), T> {
    let node = match link {
        None => {
            return Err(TreeError::StructuralInvariant(
                "predecessor hunt in an empty subtree",
            ))
        }
        Some(node) => node,
    };
    if node.right.is_some() {
        let (key, shrank) = take_rightmost(&mut node.right)?;
        let shrank = if shrank { after_right_shrink(node)? } else { false };
        Ok((key, shrank))
    } else {
        let rightmost = link
            .take()
            .ok_or(TreeError::StructuralInvariant("right-most node vanished"))?;
        let rightmost = *rightmost;
        *link = rightmost.left;
        Ok((rightmost.key, true))
    }
}
