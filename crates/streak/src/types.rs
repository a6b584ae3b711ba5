//! Node trait definitions.
//!
//! Nodes are stored in a [`Vec`]-backed arena and every "pointer" is an
//! `Option<u32>` index into it. Only child links are kept: there is no parent
//! link, so every structural update happens while a recursive descent unwinds
//! and the new subtree root is handed back to the caller for re-linking.

/// Child links (`l`, `r`).
pub trait Node {
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Height-cached, integer-keyed node as required by the AVL routines.
pub trait AvlNodeLike: Node {
    fn key(&self) -> u32;

    /// Cached subtree height; a leaf stores `0`.
    fn height(&self) -> i32;
    fn set_height(&mut self, height: i32);

    /// Copies every payload field (key included) from `donor`, leaving links
    /// and height untouched.
    fn assign_from(&mut self, donor: &Self);
}
