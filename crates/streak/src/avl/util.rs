use log::{debug, trace};

use crate::types::AvlNodeLike;

#[inline]
fn l<N: AvlNodeLike>(arena: &[N], i: u32) -> Option<u32> {
    arena[i as usize].l()
}

#[inline]
fn r<N: AvlNodeLike>(arena: &[N], i: u32) -> Option<u32> {
    arena[i as usize].r()
}

#[inline]
fn set_l<N: AvlNodeLike>(arena: &mut [N], i: u32, v: Option<u32>) {
    arena[i as usize].set_l(v);
}

#[inline]
fn set_r<N: AvlNodeLike>(arena: &mut [N], i: u32, v: Option<u32>) {
    arena[i as usize].set_r(v);
}

#[inline]
fn key<N: AvlNodeLike>(arena: &[N], i: u32) -> u32 {
    arena[i as usize].key()
}

/// Height of an optional subtree; an absent subtree has height `-1`.
#[inline]
pub fn height<N: AvlNodeLike>(arena: &[N], node: Option<u32>) -> i32 {
    node.map_or(-1, |i| arena[i as usize].height())
}

/// Recomputes the cached height of `n` from its children.
pub fn update_height<N: AvlNodeLike>(arena: &mut [N], n: u32) {
    let h = 1 + height(arena, l(arena, n)).max(height(arena, r(arena, n)));
    arena[n as usize].set_height(h);
}

/// `height(left) - height(right)`.
pub fn imbalance<N: AvlNodeLike>(arena: &[N], n: u32) -> i32 {
    height(arena, l(arena, n)) - height(arena, r(arena, n))
}

/// Copies the payload of `src` into `dst`.
fn assign<N: AvlNodeLike>(arena: &mut [N], dst: u32, src: u32) {
    debug_assert_ne!(dst, src);
    let (dst, src) = (dst as usize, src as usize);
    if dst < src {
        let (lo, hi) = arena.split_at_mut(src);
        lo[dst].assign_from(&hi[0]);
    } else {
        let (lo, hi) = arena.split_at_mut(dst);
        hi[0].assign_from(&lo[src]);
    }
}

/// Unlinks a node that is about to be discarded.
fn detach<N: AvlNodeLike>(arena: &mut [N], n: u32) {
    set_l(arena, n, None);
    set_r(arena, n, None);
    arena[n as usize].set_height(0);
}

/// Single right rotation around `z`; its left child takes its place.
pub fn rotate_right<N: AvlNodeLike>(arena: &mut [N], z: u32) -> u32 {
    let y = l(arena, z).expect("right rotation needs a left child");
    trace!("rotate right at {}", key(arena, z));
    set_l(arena, z, r(arena, y));
    set_r(arena, y, Some(z));
    update_height(arena, z);
    update_height(arena, y);
    y
}

/// Single left rotation around `z`; its right child takes its place.
pub fn rotate_left<N: AvlNodeLike>(arena: &mut [N], z: u32) -> u32 {
    let y = r(arena, z).expect("left rotation needs a right child");
    trace!("rotate left at {}", key(arena, z));
    set_r(arena, z, l(arena, y));
    set_l(arena, y, Some(z));
    update_height(arena, z);
    update_height(arena, y);
    y
}

pub fn rotate_left_right<N: AvlNodeLike>(arena: &mut [N], z: u32) -> u32 {
    let y = l(arena, z).expect("left-right rotation needs a left child");
    let x = rotate_left(arena, y);
    set_l(arena, z, Some(x));
    rotate_right(arena, z)
}

pub fn rotate_right_left<N: AvlNodeLike>(arena: &mut [N], z: u32) -> u32 {
    let y = r(arena, z).expect("right-left rotation needs a right child");
    let x = rotate_right(arena, y);
    set_r(arena, z, Some(x));
    rotate_left(arena, z)
}

/// Restores the balance of `n` (whose children are already balanced and
/// whose height is current) and returns the root of the resulting subtree.
pub fn rebalance<N: AvlNodeLike>(arena: &mut [N], n: u32) -> u32 {
    let factor = imbalance(arena, n);
    if factor > 1 {
        let y = l(arena, n).expect("left-heavy node has a left child");
        if imbalance(arena, y) >= 0 {
            rotate_right(arena, n)
        } else {
            rotate_left_right(arena, n)
        }
    } else if factor < -1 {
        let y = r(arena, n).expect("right-heavy node has a right child");
        if imbalance(arena, y) <= 0 {
            rotate_left(arena, n)
        } else {
            rotate_right_left(arena, n)
        }
    } else {
        n
    }
}

pub fn find<N: AvlNodeLike>(arena: &[N], root: Option<u32>, k: u32) -> Option<u32> {
    let mut curr = root;
    while let Some(i) = curr {
        let ik = key(arena, i);
        if k == ik {
            return Some(i);
        }
        curr = if k < ik { l(arena, i) } else { r(arena, i) };
    }
    None
}

/// Links the detached node `n` into the tree rooted at `root` and returns the
/// new root.
///
/// Keys equal to a visited key descend right; callers reject duplicates
/// before calling.
pub fn insert<N: AvlNodeLike>(arena: &mut [N], root: Option<u32>, n: u32) -> u32 {
    let Some(curr) = root else {
        return n;
    };

    if key(arena, n) < key(arena, curr) {
        let sub = insert(arena, l(arena, curr), n);
        set_l(arena, curr, Some(sub));
    } else {
        let sub = insert(arena, r(arena, curr), n);
        set_r(arena, curr, Some(sub));
    }
    update_height(arena, curr);
    rebalance(arena, curr)
}

/// Result of [`remove`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Removal {
    pub root: Option<u32>,
    /// Slot that is no longer reachable from `root` and may be reused.
    pub freed: Option<u32>,
}

/// Removes the entry keyed `k`, if any.
///
/// When the matching node has children it stays in place and takes over the
/// payload of its only child or of its in-order successor; the donor node is
/// the one unlinked and reported in [`Removal::freed`].
pub fn remove<N: AvlNodeLike>(arena: &mut [N], root: Option<u32>, k: u32) -> Removal {
    let mut freed = None;
    let root = remove_at(arena, root, k, &mut freed);
    Removal { root, freed }
}

fn remove_at<N: AvlNodeLike>(
    arena: &mut [N],
    at: Option<u32>,
    k: u32,
    freed: &mut Option<u32>,
) -> Option<u32> {
    let curr = at?;
    let ck = key(arena, curr);

    if k < ck {
        let sub = remove_at(arena, l(arena, curr), k, freed);
        set_l(arena, curr, sub);
    } else if k > ck {
        let sub = remove_at(arena, r(arena, curr), k, freed);
        set_r(arena, curr, sub);
    } else {
        match (l(arena, curr), r(arena, curr)) {
            (None, None) => {
                debug!("remove {k}: leaf");
                *freed = Some(curr);
                return None;
            }
            (Some(c), None) | (None, Some(c)) => {
                debug!("remove {k}: pulling up child {}", key(arena, c));
                assign(arena, curr, c);
                set_l(arena, curr, l(arena, c));
                set_r(arena, curr, r(arena, c));
                detach(arena, c);
                *freed = Some(c);
            }
            (Some(_), Some(right)) => {
                if l(arena, right).is_none() {
                    debug!("remove {k}: successor {} is the right child", key(arena, right));
                    assign(arena, curr, right);
                    set_r(arena, curr, r(arena, right));
                    detach(arena, right);
                    *freed = Some(right);
                } else {
                    let sub = splice_successor(arena, right, curr, freed);
                    set_r(arena, curr, Some(sub));
                }
            }
        }
    }

    update_height(arena, curr);
    Some(rebalance(arena, curr))
}

/// Walks left from `parent` until the node whose left child has no left
/// child, moves that child's payload into `target`, splices the child out and
/// rebalances every node on the way back up.
fn splice_successor<N: AvlNodeLike>(
    arena: &mut [N],
    parent: u32,
    target: u32,
    freed: &mut Option<u32>,
) -> u32 {
    let s = l(arena, parent).expect("successor search needs a left child");
    if l(arena, s).is_none() {
        debug!(
            "remove {}: successor {} under {}",
            key(arena, target),
            key(arena, s),
            key(arena, parent)
        );
        assign(arena, target, s);
        set_l(arena, parent, r(arena, s));
        detach(arena, s);
        *freed = Some(s);
    } else {
        let sub = splice_successor(arena, s, target, freed);
        set_l(arena, parent, Some(sub));
    }
    update_height(arena, parent);
    rebalance(arena, parent)
}

/// In-order walk over node indices using an explicit stack.
pub struct InOrder<'a, N> {
    arena: &'a [N],
    stack: Vec<u32>,
}

impl<'a, N: AvlNodeLike> InOrder<'a, N> {
    pub fn new(arena: &'a [N], root: Option<u32>) -> Self {
        let mut it = Self {
            arena,
            stack: Vec::new(),
        };
        it.push_left(root);
        it
    }

    fn push_left(&mut self, mut node: Option<u32>) {
        while let Some(i) = node {
            self.stack.push(i);
            node = l(self.arena, i);
        }
    }
}

impl<'a, N: AvlNodeLike> Iterator for InOrder<'a, N> {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.stack.pop()?;
        self.push_left(r(self.arena, i));
        Some(i)
    }
}

/// Checks BST order, cached heights and the AVL balance property of every
/// node reachable from `root`.
pub fn assert_avl_tree<N: AvlNodeLike>(arena: &[N], root: Option<u32>) -> Result<(), String> {
    fn validate<N: AvlNodeLike>(
        arena: &[N],
        node: Option<u32>,
        lo: Option<u32>,
        hi: Option<u32>,
    ) -> Result<i32, String> {
        let Some(i) = node else {
            return Ok(-1);
        };
        let k = key(arena, i);
        if lo.is_some_and(|lo| k <= lo) || hi.is_some_and(|hi| k >= hi) {
            return Err(format!("Node order violated at {k}"));
        }

        let lh = validate(arena, l(arena, i), lo, Some(k))?;
        let rh = validate(arena, r(arena, i), Some(k), hi)?;

        let expected = 1 + lh.max(rh);
        let actual = arena[i as usize].height();
        if actual != expected {
            return Err(format!(
                "Height mismatch at {k}: expected {expected}, got {actual}"
            ));
        }
        if (lh - rh).abs() > 1 {
            return Err(format!("AVL balance violated at {k}: {lh} vs {rh}"));
        }
        Ok(expected)
    }

    validate(arena, root, None, None).map(|_| ())
}

/// Renders the tree as nested `(left key:height right)` groups.
pub fn dump<N: AvlNodeLike>(arena: &[N], root: Option<u32>) -> String {
    fn walk<N: AvlNodeLike>(arena: &[N], node: Option<u32>, out: &mut String) {
        if let Some(i) = node {
            out.push('(');
            walk(arena, l(arena, i), out);
            out.push_str(&format!("{}:{}", key(arena, i), arena[i as usize].height()));
            walk(arena, r(arena, i), out);
            out.push(')');
        }
    }

    let mut out = String::new();
    walk(arena, root, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avl::types::StreakNode;
    use crate::record::{Animal, LifeStage};

    fn build(keys: &[u32]) -> (Vec<StreakNode>, Option<u32>) {
        let mut arena = Vec::new();
        let mut root = None;
        for &k in keys {
            arena.push(StreakNode::new(Animal::new(k)));
            let idx = (arena.len() - 1) as u32;
            root = Some(insert(&mut arena, root, idx));
            assert_avl_tree(&arena, root).unwrap();
        }
        (arena, root)
    }

    fn keys_in_order(arena: &[StreakNode], root: Option<u32>) -> Vec<u32> {
        InOrder::new(arena, root).map(|i| arena[i as usize].animal.id).collect()
    }

    #[test]
    fn leaf_height_is_zero_and_empty_is_minus_one() {
        let (arena, root) = build(&[50000]);
        assert_eq!(height(&arena, root), 0);
        assert_eq!(height(&arena, None), -1);
        assert_eq!(imbalance(&arena, root.unwrap()), 0);
    }

    #[test]
    fn ascending_keys_rotate_left() {
        let (arena, root) = build(&[10, 20, 30]);
        assert_eq!(dump(&arena, root), "((10:0)20:1(30:0))");
    }

    #[test]
    fn descending_keys_rotate_right() {
        let (arena, root) = build(&[30, 20, 10]);
        assert_eq!(dump(&arena, root), "((10:0)20:1(30:0))");
    }

    #[test]
    fn zig_zag_keys_rotate_twice() {
        let (arena, root) = build(&[30, 10, 20]);
        assert_eq!(dump(&arena, root), "((10:0)20:1(30:0))");
        let (arena, root) = build(&[10, 30, 20]);
        assert_eq!(dump(&arena, root), "((10:0)20:1(30:0))");
    }

    #[test]
    fn remove_leaf_frees_its_slot() {
        let (mut arena, root) = build(&[20, 10, 30]);
        let out = remove(&mut arena, root, 30);
        assert_eq!(out.freed, Some(2));
        assert_eq!(dump(&arena, out.root), "((10:0)20:1)");
        assert_avl_tree(&arena, out.root).unwrap();
    }

    #[test]
    fn remove_with_one_child_copies_child_into_place() {
        let (mut arena, root) = build(&[20, 10, 30, 40]);
        arena[3].animal.stage = LifeStage::Old;
        let slot_30 = find(&arena, root, 30).unwrap();

        let out = remove(&mut arena, root, 30);
        assert_eq!(out.freed, Some(3));
        assert_eq!(arena[slot_30 as usize].animal, Animal::new(40).with_stage(LifeStage::Old));
        assert_eq!(keys_in_order(&arena, out.root), vec![10, 20, 40]);
        assert_avl_tree(&arena, out.root).unwrap();
    }

    #[test]
    fn remove_with_two_children_uses_right_child_without_left() {
        let (mut arena, root) = build(&[20, 10, 30, 5, 40]);
        let slot_20 = root.unwrap();
        let out = remove(&mut arena, root, 20);
        assert_eq!(out.root, Some(slot_20));
        assert_eq!(arena[slot_20 as usize].animal.id, 30);
        assert_eq!(keys_in_order(&arena, out.root), vec![5, 10, 30, 40]);
        assert_avl_tree(&arena, out.root).unwrap();
    }

    #[test]
    fn remove_with_two_children_splices_deep_successor() {
        let (mut arena, root) = build(&[40, 20, 60, 10, 50, 70, 45]);
        let out = remove(&mut arena, root, 40);
        let freed = out.freed.unwrap();
        assert_eq!(arena[freed as usize].l, None);
        assert_eq!(arena[root.unwrap() as usize].animal.id, 45);
        assert_eq!(keys_in_order(&arena, out.root), vec![10, 20, 45, 50, 60, 70]);
        assert_avl_tree(&arena, out.root).unwrap();
    }

    #[test]
    fn remove_missing_key_is_a_no_op() {
        let (mut arena, root) = build(&[20, 10, 30]);
        let before = dump(&arena, root);
        let out = remove(&mut arena, root, 25);
        assert_eq!(out, Removal { root, freed: None });
        assert_eq!(dump(&arena, out.root), before);
    }

    #[test]
    fn removal_rebalances_up_to_root() {
        let (mut arena, mut root) = build(&[50, 30, 70, 20, 40, 80, 10]);
        for k in [80, 70] {
            root = remove(&mut arena, root, k).root;
            assert_avl_tree(&arena, root).unwrap();
        }
        assert_eq!(keys_in_order(&arena, root), vec![10, 20, 30, 40, 50]);
        assert_eq!(height(&arena, root), 2);
    }

    #[test]
    fn validator_catches_stale_height() {
        let (mut arena, root) = build(&[20, 10, 30]);
        arena[root.unwrap() as usize].height = 5;
        assert!(assert_avl_tree(&arena, root).is_err());
    }

    #[test]
    fn validator_catches_order_violation() {
        let (mut arena, root) = build(&[20, 10, 30]);
        arena[1].animal.id = 25;
        assert!(assert_avl_tree(&arena, root).is_err());
    }
}
