//! AVL tree routines over an arena of [`AvlNodeLike`](crate::types::AvlNodeLike) nodes.

pub mod types;
pub mod util;

pub use types::StreakNode;
pub use util::{
    assert_avl_tree, dump, find, height, imbalance, insert, rebalance, remove, rotate_left,
    rotate_left_right, rotate_right, rotate_right_left, update_height, InOrder, Removal,
};
