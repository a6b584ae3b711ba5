use log::debug;
use thiserror::Error;

use crate::avl::{self, InOrder, StreakNode};
use crate::record::{is_valid_id, Animal, LifeStage, VitalStatus};

/// Why [`Streak::try_insert`] turned a record away.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InsertError {
    #[error("id {0} is outside [10000, 99999]")]
    OutOfRange(u32),
    #[error("id {0} is already present")]
    Duplicate(u32),
}

/// Height-balanced index of [`Animal`] records keyed by id.
///
/// Nodes live in an arena owned by the index. Slots of removed nodes go on a
/// free list and are reused by later insertions.
#[derive(Clone, Debug, Default)]
pub struct Streak {
    arena: Vec<StreakNode>,
    free: Vec<u32>,
    root: Option<u32>,
    len: usize,
}

impl Streak {
    pub fn new() -> Self {
        Self::default()
    }

    fn alloc(&mut self, animal: Animal) -> u32 {
        match self.free.pop() {
            Some(idx) => {
                self.arena[idx as usize] = StreakNode::new(animal);
                idx
            }
            None => {
                self.arena.push(StreakNode::new(animal));
                (self.arena.len() - 1) as u32
            }
        }
    }

    /// Inserts `animal`, reporting why it was rejected if it was.
    pub fn try_insert(&mut self, animal: Animal) -> Result<(), InsertError> {
        if !is_valid_id(animal.id) {
            return Err(InsertError::OutOfRange(animal.id));
        }
        if self.contains(animal.id) {
            return Err(InsertError::Duplicate(animal.id));
        }

        let idx = self.alloc(animal);
        self.root = Some(avl::insert(&mut self.arena, self.root, idx));
        self.len += 1;
        Ok(())
    }

    /// Inserts `animal`; out-of-range and duplicate ids leave the index
    /// unchanged.
    pub fn insert(&mut self, animal: Animal) {
        if let Err(err) = self.try_insert(animal) {
            debug!("insert ignored: {err}");
        }
    }

    /// Removes the record keyed `id`; absent ids leave the index unchanged.
    pub fn remove(&mut self, id: u32) {
        self.remove_entry(id);
    }

    fn remove_entry(&mut self, id: u32) -> bool {
        let out = avl::remove(&mut self.arena, self.root, id);
        self.root = out.root;
        match out.freed {
            Some(idx) => {
                self.free.push(idx);
                self.len -= 1;
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        avl::find(&self.arena, self.root, id).is_some()
    }

    pub fn get(&self, id: u32) -> Option<&Animal> {
        avl::find(&self.arena, self.root, id).map(|i| &self.arena[i as usize].animal)
    }

    /// Updates the vital status of the record keyed `id`. Returns `false` if
    /// there is no such record.
    pub fn set_vital_status(&mut self, id: u32, status: VitalStatus) -> bool {
        match avl::find(&self.arena, self.root, id) {
            Some(i) => {
                self.arena[i as usize].animal.status = status;
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.free.clear();
        self.root = None;
        self.len = 0;
    }

    /// Removes every record whose status is `status` and returns how many
    /// were removed.
    ///
    /// Each removal reshapes the tree, so the scan restarts from the smallest
    /// id after every deletion.
    pub fn remove_all_with_status(&mut self, status: VitalStatus) -> usize {
        let mut removed = 0;
        loop {
            let next = self.iter().find(|a| a.status == status).map(|a| a.id);
            let Some(id) = next else {
                break;
            };
            self.remove_entry(id);
            removed += 1;
        }
        debug!("removed {removed} record(s) with status {status}");
        removed
    }

    pub fn remove_dead(&mut self) -> usize {
        self.remove_all_with_status(VitalStatus::Dead)
    }

    pub fn count_by_life_stage(&self, stage: LifeStage) -> usize {
        self.iter().filter(|a| a.stage == stage).count()
    }

    pub fn count_cubs(&self) -> usize {
        self.count_by_life_stage(LifeStage::Cub)
    }

    /// All records in ascending id order.
    pub fn list_in_order(&self) -> Vec<Animal> {
        self.iter().copied().collect()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            arena: &self.arena,
            inner: InOrder::new(&self.arena, self.root),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the tree; `-1` when empty.
    pub fn height(&self) -> i32 {
        avl::height(&self.arena, self.root)
    }

    /// Debug rendering `(left id:height right)`.
    pub fn dump(&self) -> String {
        avl::dump(&self.arena, self.root)
    }

    pub fn assert_valid(&self) -> Result<(), String> {
        avl::assert_avl_tree(&self.arena, self.root)?;

        let reachable: Vec<u32> = InOrder::new(&self.arena, self.root).collect();
        if reachable.len() != self.len {
            return Err(format!(
                "Length mismatch: {} reachable, {} recorded",
                reachable.len(),
                self.len
            ));
        }
        if let Some(i) = reachable.iter().find(|i| self.free.contains(i)) {
            return Err(format!("Reachable node {i} is on the free list"));
        }
        Ok(())
    }
}

impl Extend<Animal> for Streak {
    fn extend<T: IntoIterator<Item = Animal>>(&mut self, iter: T) {
        for animal in iter {
            self.insert(animal);
        }
    }
}

impl FromIterator<Animal> for Streak {
    fn from_iter<T: IntoIterator<Item = Animal>>(iter: T) -> Self {
        let mut streak = Streak::new();
        streak.extend(iter);
        streak
    }
}

/// Ascending-id iterator over the records of a [`Streak`].
pub struct Iter<'a> {
    arena: &'a [StreakNode],
    inner: InOrder<'a, StreakNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Animal;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|i| &self.arena[i as usize].animal)
    }
}

impl<'a> IntoIterator for &'a Streak {
    type Item = &'a Animal;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Sex;

    #[test]
    fn try_insert_reports_rejections() {
        let mut streak = Streak::new();
        assert_eq!(streak.try_insert(Animal::new(9999)), Err(InsertError::OutOfRange(9999)));
        assert_eq!(
            streak.try_insert(Animal::new(100000)),
            Err(InsertError::OutOfRange(100000))
        );
        assert_eq!(streak.try_insert(Animal::new(20000)), Ok(()));
        assert_eq!(streak.try_insert(Animal::new(20000)), Err(InsertError::Duplicate(20000)));
        assert_eq!(streak.len(), 1);
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            InsertError::OutOfRange(5).to_string(),
            "id 5 is outside [10000, 99999]"
        );
        assert_eq!(
            InsertError::Duplicate(12345).to_string(),
            "id 12345 is already present"
        );
    }

    #[test]
    fn duplicate_keeps_the_first_record() {
        let mut streak = Streak::new();
        streak.insert(Animal::new(30000).with_sex(Sex::Male));
        streak.insert(Animal::new(30000).with_sex(Sex::Female));
        assert_eq!(streak.get(30000).map(|a| a.sex), Some(Sex::Male));
    }

    #[test]
    fn freed_slots_are_reused() {
        let mut streak: Streak = (0..8).map(|i| Animal::new(40000 + i)).collect();
        let slots = streak.arena.len();
        streak.remove(40003);
        streak.remove(40005);
        streak.insert(Animal::new(50000));
        streak.insert(Animal::new(50001));
        assert_eq!(streak.arena.len(), slots);
        assert_eq!(streak.len(), 8);
        streak.assert_valid().unwrap();
    }

    #[test]
    fn set_vital_status_on_missing_id() {
        let mut streak = Streak::new();
        streak.insert(Animal::new(10000));
        assert!(!streak.set_vital_status(10001, VitalStatus::Dead));
        assert!(streak.set_vital_status(10000, VitalStatus::Dead));
        assert!(streak.get(10000).unwrap().is_dead());
    }

    #[test]
    fn clear_resets_everything() {
        let mut streak: Streak = (0..20).map(|i| Animal::new(60000 + i * 7)).collect();
        streak.clear();
        assert!(streak.is_empty());
        assert_eq!(streak.len(), 0);
        assert_eq!(streak.height(), -1);
        assert_eq!(streak.dump(), "");
        streak.insert(Animal::new(60000));
        assert_eq!(streak.len(), 1);
        streak.assert_valid().unwrap();
    }
}
