//! Self-balancing ordered search tree.
//!
//! An AVL tree with per-node balance tags: insert and delete retrace only
//! the mutated path and restore balance with LL/RR single or LR/RL double
//! rotations. Keys are unique; inserting a present key is an error, not a
//! no-op. Traversals hand each key to a caller-supplied closure; breadth
//! first order runs on an explicit queue.
//!
//! ```rust
//! use rsavl::AvlTree;
//!
//! let mut tree = AvlTree::new();
//! for key in [3, 1, 2] {
//!     tree.insert(key)?;
//! }
//!
//! // the double rotation settled 2 at the root
//! assert_eq!(tree.height(), 1);
//! assert!(tree.contains(&2));
//!
//! let mut keys = Vec::new();
//! tree.in_order(|&k| keys.push(k));
//! assert_eq!(keys, vec![1, 2, 3]);
//! # Ok::<(), rsavl::TreeError<i32>>(())
//! ```

pub mod errors;
mod node;
mod rebalance;
pub mod traverse;
pub mod tree;
mod tree_queue;
pub mod tree_traits;
pub mod util;

pub use errors::{TreeError, TreeResult};
pub use traverse::InOrderIter;
pub use tree::AvlTree;
pub use tree_traits::TreeNodeConvert;
