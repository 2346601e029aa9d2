//! Rotation primitives and balance-tag resolution.
//!
//! A rotation relinks three subtrees around a pivot and must preserve the
//! in-order key sequence. The `resolve_*` functions fix a node whose child
//! heights differ by two, picking a single (LL/RR) or double (LR/RL)
//! rotation from the heavy child's tag. Their boolean result reports
//! whether the subtree ended up one level shorter than it was with the
//! violation in place; callers thread it back up as the insert `taller` /
//! delete `shorter` flag.

use std::mem;

use tracing::trace;

use crate::errors::{TreeError, TreeResult};
use crate::node::{AvlNode, Balance};

/// Single left rotation: the right child becomes the subtree root and the
/// old root becomes its left child. Balance tags are the caller's job.
pub(crate) fn rotate_left<T>(node: &mut Box<AvlNode<T>>) -> TreeResult<(), T> {
    let mut pivot = node.right.take().ok_or(TreeError::StructuralInvariant(
        "left rotation without a right child",
    ))?;
    node.right = pivot.left.take();
    mem::swap(node, &mut pivot);
    node.left = Some(pivot);
    Ok(())
}

/// Single right rotation, mirror of [`rotate_left`].
pub(crate) fn rotate_right<T>(node: &mut Box<AvlNode<T>>) -> TreeResult<(), T> {
    let mut pivot = node.left.take().ok_or(TreeError::StructuralInvariant(
        "right rotation without a left child",
    ))?;
    node.left = pivot.right.take();
    mem::swap(node, &mut pivot);
    node.right = Some(pivot);
    Ok(())
}

/// Child tags below the new subtree root after an LR or RL double rotation,
/// derived from the pivot's tag before the rotation. The mapping is the
/// same for both directions.
fn tags_after_double(pivot: Balance) -> (Balance, Balance) {
    match pivot {
        Balance::Even => (Balance::Even, Balance::Even),
        Balance::LeftHeavy => (Balance::Even, Balance::RightHeavy),
        Balance::RightHeavy => (Balance::LeftHeavy, Balance::Even),
    }
}

/// Fixes a node whose left side has become two levels taller.
pub(crate) fn resolve_left_overflow<T>(node: &mut Box<AvlNode<T>>) -> TreeResult<bool, T> {
    let left_tag = node
        .left
        .as_deref()
        .ok_or(TreeError::StructuralInvariant(
            "left overflow without a left child",
        ))?
        .balance;
    match left_tag {
        // LL: one right rotation settles both nodes
        Balance::LeftHeavy => {
            trace!("LL rotation");
            rotate_right(node)?;
            node.balance = Balance::Even;
            node.right_mut()?.balance = Balance::Even;
            Ok(true)
        }
        // Even left child only occurs on the delete path; the rotation
        // keeps the subtree height.
        Balance::Even => {
            trace!("LL rotation, even child");
            rotate_right(node)?;
            node.balance = Balance::RightHeavy;
            node.right_mut()?.balance = Balance::LeftHeavy;
            Ok(false)
        }
        // LR: rotate the left child left, then this node right
        Balance::RightHeavy => {
            trace!("LR rotation");
            let left = node.left.as_mut().ok_or(TreeError::StructuralInvariant(
                "left overflow without a left child",
            ))?;
            let pivot_tag = left
                .right
                .as_deref()
                .ok_or(TreeError::StructuralInvariant("LR rotation without a pivot"))?
                .balance;
            rotate_left(left)?;
            rotate_right(node)?;
            let (left_tag, right_tag) = tags_after_double(pivot_tag);
            node.balance = Balance::Even;
            node.left_mut()?.balance = left_tag;
            node.right_mut()?.balance = right_tag;
            Ok(true)
        }
    }
}

/// Fixes a node whose right side has become two levels taller, mirror of
/// [`resolve_left_overflow`].
pub(crate) fn resolve_right_overflow<T>(node: &mut Box<AvlNode<T>>) -> TreeResult<bool, T> {
    let right_tag = node
        .right
        .as_deref()
        .ok_or(TreeError::StructuralInvariant(
            "right overflow without a right child",
        ))?
        .balance;
    match right_tag {
        Balance::RightHeavy => {
            trace!("RR rotation");
            rotate_left(node)?;
            node.balance = Balance::Even;
            node.left_mut()?.balance = Balance::Even;
            Ok(true)
        }
        Balance::Even => {
            trace!("RR rotation, even child");
            rotate_left(node)?;
            node.balance = Balance::LeftHeavy;
            node.left_mut()?.balance = Balance::RightHeavy;
            Ok(false)
        }
        Balance::LeftHeavy => {
            trace!("RL rotation");
            let right = node.right.as_mut().ok_or(TreeError::StructuralInvariant(
                "right overflow without a right child",
            ))?;
            let pivot_tag = right
                .left
                .as_deref()
                .ok_or(TreeError::StructuralInvariant("RL rotation without a pivot"))?
                .balance;
            rotate_right(right)?;
            rotate_left(node)?;
            let (left_tag, right_tag) = tags_after_double(pivot_tag);
            node.balance = Balance::Even;
            node.left_mut()?.balance = left_tag;
            node.right_mut()?.balance = right_tag;
            Ok(true)
        }
    }
}

/// Tag transition at a node whose left subtree lost one level. Returns
/// whether this node's subtree is now shorter as well.
pub(crate) fn after_left_shrink<T>(node: &mut Box<AvlNode<T>>) -> TreeResult<bool, T> {
    match node.balance {
        Balance::LeftHeavy => {
            node.balance = Balance::Even;
            Ok(true)
        }
        Balance::Even => {
            node.balance = Balance::RightHeavy;
            Ok(false)
        }
        Balance::RightHeavy => resolve_right_overflow(node),
    }
}

/// Tag transition at a node whose right subtree lost one level, mirror of
/// [`after_left_shrink`].
pub(crate) fn after_right_shrink<T>(node: &mut Box<AvlNode<T>>) -> TreeResult<bool, T> {
    match node.balance {
        Balance::RightHeavy => {
            node.balance = Balance::Even;
            Ok(true)
        }
        Balance::Even => {
            node.balance = Balance::LeftHeavy;
            Ok(false)
        }
        Balance::LeftHeavy => resolve_left_overflow(node),
    }
}
