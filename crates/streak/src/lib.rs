//! Height-balanced (AVL) index of animal records keyed by integer id.
//!
//! Nodes live in a `Vec` arena owned by [`Streak`]; child "pointers" are
//! `Option<u32>` indices and there are no parent links. Every mutation is a
//! recursive descent that recomputes heights and rotates while it unwinds,
//! handing the new subtree root back to the caller for re-linking.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`record`] | [`Animal`] and its category enums, id bounds |
//! | [`types`] | [`Node`] and [`AvlNodeLike`] arena node traits |
//! | [`avl`] | rotations, insertion, content-copy deletion, validation, dump |
//! | [`index`] | the [`Streak`] index itself |
//!
//! # Example
//!
//! ```
//! use streak::{Animal, LifeStage, Streak, VitalStatus};
//!
//! let mut streak = Streak::new();
//! for id in [58000, 59000, 60000, 61000] {
//!     streak.insert(Animal::new(id));
//! }
//! streak.insert(Animal::new(5)); // out of range, ignored
//! assert_eq!(streak.len(), 4);
//!
//! streak.set_vital_status(59000, VitalStatus::Dead);
//! streak.remove_dead();
//! assert!(!streak.contains(59000));
//! assert_eq!(streak.count_by_life_stage(LifeStage::Cub), 3);
//! ```

pub mod avl;
pub mod index;
pub mod record;
pub mod types;

pub use index::{InsertError, Iter, Streak};
pub use record::{is_valid_id, Animal, LifeStage, Sex, VitalStatus, MAX_ID, MIN_ID};
pub use types::{AvlNodeLike, Node};
