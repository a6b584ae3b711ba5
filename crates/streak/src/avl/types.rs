use crate::record::Animal;
use crate::types::{AvlNodeLike, Node};

/// Arena node holding one [`Animal`].
#[derive(Clone, Debug)]
pub struct StreakNode {
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub animal: Animal,
    /// Height of the subtree rooted here; `0` for a leaf.
    pub height: i32,
}

impl StreakNode {
    pub fn new(animal: Animal) -> Self {
        Self {
            l: None,
            r: None,
            animal,
            height: 0,
        }
    }
}

impl Node for StreakNode {
    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

impl AvlNodeLike for StreakNode {
    fn key(&self) -> u32 {
        self.animal.id
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn set_height(&mut self, height: i32) {
        self.height = height;
    }

    fn assign_from(&mut self, donor: &Self) {
        self.animal = donor.animal;
    }
}
