//! Traversal orders, the borrowing iterator, cloning, and display.

use itertools::Itertools;

use rsavl::util::testing::init_test_setup;
use rsavl::{AvlTree, TreeNodeConvert};

fn tree_from(keys: &[i32]) -> AvlTree<i32> {
    let mut tree = AvlTree::new();
    for &key in keys {
        tree.insert(key).expect("test keys are distinct");
    }
    tree
}

/// Perfect tree used by the order tests:
///
///         4
///       /   \
///      2     6
///     / \   / \
///    1   3 5   7
fn perfect_tree() -> AvlTree<i32> {
    tree_from(&[4, 2, 6, 1, 3, 5, 7])
}

// ============================================================
// Visitor Order Tests
// ============================================================

#[test]
fn given_perfect_tree_when_walking_in_order_then_keys_are_ascending() {
    init_test_setup();
    let tree = perfect_tree();

    let mut keys = Vec::new();
    tree.in_order(|&k| keys.push(k));

    assert_eq!(keys, vec![1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn given_perfect_tree_when_walking_pre_order_then_parents_come_first() {
    let tree = perfect_tree();

    let mut keys = Vec::new();
    tree.pre_order(|&k| keys.push(k));

    assert_eq!(keys, vec![4, 2, 1, 3, 6, 5, 7]);
}

#[test]
fn given_perfect_tree_when_walking_post_order_then_children_come_first() {
    let tree = perfect_tree();

    let mut keys = Vec::new();
    tree.post_order(|&k| keys.push(k));

    assert_eq!(keys, vec![1, 3, 2, 5, 7, 6, 4]);
}

#[test]
fn given_perfect_tree_when_walking_breadth_first_then_levels_come_left_to_right() {
    init_test_setup();
    let tree = perfect_tree();

    let mut keys = Vec::new();
    tree.breadth_first(|&k| keys.push(k));

    assert_eq!(keys, vec![4, 2, 6, 1, 3, 5, 7]);
}

#[test]
fn given_empty_tree_when_traversing_then_visitor_is_never_called() {
    let tree: AvlTree<i32> = AvlTree::new();

    let mut calls = 0;
    tree.in_order(|_| calls += 1);
    tree.pre_order(|_| calls += 1);
    tree.post_order(|_| calls += 1);
    tree.breadth_first(|_| calls += 1);

    assert_eq!(calls, 0);
}

#[test]
fn given_stateful_visitor_when_traversing_then_closure_state_accumulates() {
    let tree = perfect_tree();

    let mut sum = 0;
    tree.in_order(|&k| sum += k);

    assert_eq!(sum, 28);
}

// ============================================================
// Iterator Tests
// ============================================================

#[test]
fn given_scattered_keys_when_iterating_then_sequence_is_strictly_increasing() {
    init_test_setup();
    let tree = tree_from(&[41, 13, 67, 5, 29, 55, 80, 2, 9, 21, 37]);

    let keys: Vec<i32> = tree.iter().copied().collect();

    assert_eq!(keys.len(), 11);
    assert!(
        keys.iter().tuple_windows().all(|(a, b)| a < b),
        "iterator must yield ascending keys: {:?}",
        keys
    );
}

#[test]
fn given_tree_when_iterating_twice_then_each_call_is_a_fresh_traversal() {
    let tree = perfect_tree();

    let first: Vec<i32> = tree.iter().copied().collect();
    let second: Vec<i32> = tree.iter().copied().collect();

    assert_eq!(first, second);
}

// ============================================================
// Round-Trip Tests
// ============================================================

#[test]
fn given_pre_order_dump_when_replayed_through_insert_then_in_order_matches() {
    init_test_setup();
    let tree = tree_from(&[50, 17, 72, 12, 23, 54, 76, 9, 14, 19, 67]);

    let mut dump = Vec::new();
    tree.pre_order(|&k| dump.push(k));

    let rebuilt = tree_from(&dump);
    let original: Vec<i32> = tree.iter().copied().collect();
    let replayed: Vec<i32> = rebuilt.iter().copied().collect();

    assert_eq!(original, replayed);
}

#[test]
fn given_tree_when_cloned_then_copies_are_independent() {
    init_test_setup();
    let mut tree = tree_from(&[4, 2, 6, 1, 3]);

    let copy = tree.clone();
    tree.remove(4).unwrap();

    let original: Vec<i32> = tree.iter().copied().collect();
    let copied: Vec<i32> = copy.iter().copied().collect();

    assert_eq!(copied, vec![1, 2, 3, 4, 6], "the clone keeps every key");
    assert_eq!(original, vec![1, 2, 3, 6], "the source lost the removed key");
}

// ============================================================
// Height Tests
// ============================================================

#[test]
fn given_various_trees_when_measuring_then_both_height_variants_agree() {
    init_test_setup();
    for keys in [
        &[] as &[i32],
        &[1],
        &[2, 1, 3],
        &[4, 2, 6, 1, 3, 5, 7],
        &[50, 17, 72, 12, 23, 54, 76, 9],
    ] {
        let tree = tree_from(keys);
        assert_eq!(
            tree.height(),
            tree.height_iterative(),
            "height variants disagree for {:?}",
            keys
        );
    }
}

// ============================================================
// Display Tests
// ============================================================

#[test]
fn given_small_tree_when_rendered_then_root_leads_and_children_follow() {
    init_test_setup();
    let tree = tree_from(&[2, 1, 3]);

    let rendered = tree.to_tree_string().to_string();
    let mut lines = rendered.lines();

    assert_eq!(lines.next(), Some("2"));
    let rest: Vec<&str> = lines.collect();
    assert_eq!(rest.len(), 2);
    assert!(rest[0].contains('1'), "left child first: {:?}", rest);
    assert!(rest[1].contains('3'), "right child second: {:?}", rest);
}

#[test]
fn given_empty_tree_when_rendered_then_placeholder_is_shown() {
    let tree: AvlTree<i32> = AvlTree::new();

    let rendered = tree.to_tree_string().to_string();

    assert_eq!(rendered.trim_end(), "Empty tree");
}
