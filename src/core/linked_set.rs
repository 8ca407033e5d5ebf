//! Insertion-ordered set of coffee records over a hand-built doubly linked
//! chain.
//!
//! Nodes live in a slot arena and link to each other through stable indices,
//! so the chain needs no shared ownership and freed slots are recycled.
//! Membership is a deliberate linear scan: the exercise contract is O(n)
//! add/contains/remove with no hash or tree index behind it.

use crate::domain::model::Coffee;
use crate::utils::error::{CoffeeError, Result};

#[derive(Debug, Clone)]
struct Node {
    data: Coffee,
    prev: Option<usize>,
    next: Option<usize>,
}

/// A mutable collection of unique `Coffee` records that iterates in
/// first-insertion order.
///
/// Uniqueness is decided by the record's structural equality on every
/// mutating call. The set is single-threaded; wrap it in a lock if it must
/// be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct LinkedSet {
    slots: Vec<Option<Node>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl LinkedSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set seeded from a sequence of records. Duplicates collapse
    /// silently, keeping the first occurrence.
    pub fn from_records<I: IntoIterator<Item = Coffee>>(records: I) -> Self {
        let mut set = Self::new();
        set.add_all(records);
        set
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True iff an element equal to `record` exists. Linear scan.
    pub fn contains(&self, record: &Coffee) -> bool {
        self.find(record).is_some()
    }

    /// Appends `record` at the tail unless an equal element already exists.
    /// Returns true if the set changed, false for a rejected duplicate.
    pub fn add(&mut self, record: Coffee) -> bool {
        if self.contains(&record) {
            return false;
        }
        let index = self.allocate(Node {
            data: record,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(tail) => {
                if let Some(node) = self.slots[tail].as_mut() {
                    node.next = Some(index);
                }
            }
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.len += 1;
        true
    }

    /// Unlinks the element equal to `record`, if any. Returns true if an
    /// element was removed. At most one node can match; the add path already
    /// rejected any duplicate.
    pub fn remove(&mut self, record: &Coffee) -> bool {
        match self.find(record) {
            Some(index) => {
                self.unlink(index);
                true
            }
            None => false,
        }
    }

    /// Adds every record of the sequence. Returns true iff at least one was
    /// newly inserted; every element is attempted regardless.
    pub fn add_all<I: IntoIterator<Item = Coffee>>(&mut self, records: I) -> bool {
        let mut modified = false;
        for record in records {
            modified |= self.add(record);
        }
        modified
    }

    /// Removes every listed record present in the set. Returns true iff at
    /// least one was removed.
    pub fn remove_all(&mut self, records: &[Coffee]) -> bool {
        let mut modified = false;
        for record in records {
            modified |= self.remove(record);
        }
        modified
    }

    /// Drops every current element not listed in `keep`. Returns true iff at
    /// least one was removed.
    pub fn retain_all(&mut self, keep: &[Coffee]) -> bool {
        let mut modified = false;
        let mut cursor = self.head;
        while let Some(index) = cursor {
            // Capture the successor before a possible unlink.
            let (next, keep_it) = match self.node(index) {
                Some(node) => (node.next, keep.contains(&node.data)),
                None => break,
            };
            if !keep_it {
                self.unlink(index);
                modified = true;
            }
            cursor = next;
        }
        modified
    }

    /// True iff every listed record is present.
    pub fn contains_all(&self, records: &[Coffee]) -> bool {
        records.iter().all(|record| self.contains(record))
    }

    /// Detaches all nodes; the set becomes empty and slot storage is
    /// released.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// A lazy forward iterator over the elements in insertion order.
    ///
    /// The iterator borrows the set, so mutating while iterating is rejected
    /// at compile time. It is one-shot: once exhausted, call `iter()` again
    /// to scan anew.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            set: self,
            cursor: self.head,
        }
    }

    /// Snapshot of all elements in insertion order.
    pub fn to_vec(&self) -> Vec<Coffee> {
        self.iter().cloned().collect()
    }

    /// Fills a caller-provided buffer with the snapshot, reusing its
    /// allocation. A short buffer grows as needed; afterwards `dest` holds
    /// exactly `len()` elements.
    pub fn snapshot_into(&self, dest: &mut Vec<Coffee>) {
        dest.clear();
        dest.extend(self.iter().cloned());
    }

    fn node(&self, index: usize) -> Option<&Node> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    fn find(&self, record: &Coffee) -> Option<usize> {
        let mut cursor = self.head;
        while let Some(index) = cursor {
            let node = self.node(index)?;
            if node.data == *record {
                return Some(index);
            }
            cursor = node.next;
        }
        None
    }

    fn allocate(&mut self, node: Node) -> usize {
        match self.free.pop() {
            Some(index) => {
                self.slots[index] = Some(node);
                index
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    fn unlink(&mut self, index: usize) {
        let Some(node) = self.slots.get_mut(index).and_then(Option::take) else {
            return;
        };
        match node.prev {
            Some(prev) => {
                if let Some(p) = self.slots[prev].as_mut() {
                    p.next = node.next;
                }
            }
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => {
                if let Some(n) = self.slots[next].as_mut() {
                    n.prev = node.prev;
                }
            }
            None => self.tail = node.prev,
        }
        self.free.push(index);
        self.len -= 1;
    }
}

impl From<Coffee> for LinkedSet {
    fn from(record: Coffee) -> Self {
        let mut set = Self::new();
        set.add(record);
        set
    }
}

impl FromIterator<Coffee> for LinkedSet {
    fn from_iter<I: IntoIterator<Item = Coffee>>(iter: I) -> Self {
        Self::from_records(iter)
    }
}

impl Extend<Coffee> for LinkedSet {
    fn extend<I: IntoIterator<Item = Coffee>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<'a> IntoIterator for &'a LinkedSet {
    type Item = &'a Coffee;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Forward cursor over a `LinkedSet`, yielding records in insertion order.
pub struct Iter<'a> {
    set: &'a LinkedSet,
    cursor: Option<usize>,
}

impl<'a> Iter<'a> {
    /// Advances the cursor, failing with `CoffeeError::NoSuchElement` when
    /// the sequence is already exhausted.
    pub fn try_next(&mut self) -> Result<&'a Coffee> {
        let index = self.cursor.ok_or(CoffeeError::NoSuchElement)?;
        let node = self.set.node(index).ok_or(CoffeeError::NoSuchElement)?;
        self.cursor = node.next;
        Ok(&node.data)
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Coffee;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Upper bound only: the cursor position is not tracked as a count.
        (0, Some(self.set.len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arabica() -> Coffee {
        Coffee::new("Arabica", 30.0, 85.0, 0.8).unwrap()
    }

    fn robusta() -> Coffee {
        Coffee::new("Robusta", 20.0, 75.0, 0.9).unwrap()
    }

    fn liberica() -> Coffee {
        Coffee::new("Liberica", 25.0, 80.0, 0.85).unwrap()
    }

    #[test]
    fn test_add_then_contains() {
        let mut set = LinkedSet::new();
        assert!(set.add(arabica()));
        assert!(set.contains(&arabica()));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_duplicate_add_is_rejected() {
        let mut set = LinkedSet::new();
        assert!(set.add(arabica()));
        assert!(!set.add(arabica()));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_remove_endpoints_fix_head_and_tail() {
        let mut set = LinkedSet::from_records([arabica(), robusta(), liberica()]);

        assert!(set.remove(&arabica()));
        let order: Vec<_> = set.iter().map(Coffee::name).collect();
        assert_eq!(order, ["Robusta", "Liberica"]);

        assert!(set.remove(&liberica()));
        let order: Vec<_> = set.iter().map(Coffee::name).collect();
        assert_eq!(order, ["Robusta"]);

        assert!(set.remove(&robusta()));
        assert!(set.is_empty());
        assert!(set.add(arabica()));
        let order: Vec<_> = set.iter().map(Coffee::name).collect();
        assert_eq!(order, ["Arabica"]);
    }

    #[test]
    fn test_remove_middle_splices_neighbors() {
        let mut set = LinkedSet::from_records([arabica(), robusta(), liberica()]);
        assert!(set.remove(&robusta()));
        let order: Vec<_> = set.iter().map(Coffee::name).collect();
        assert_eq!(order, ["Arabica", "Liberica"]);
    }

    #[test]
    fn test_freed_slots_are_recycled() {
        let mut set = LinkedSet::from_records([arabica(), robusta()]);
        set.remove(&arabica());
        set.add(liberica());
        // The freed slot is reused, the arena does not grow.
        assert_eq!(set.slots.len(), 2);
        let order: Vec<_> = set.iter().map(Coffee::name).collect();
        assert_eq!(order, ["Robusta", "Liberica"]);
    }

    #[test]
    fn test_iter_try_next_past_end() {
        let set = LinkedSet::from(arabica());
        let mut iter = set.iter();
        assert!(iter.try_next().is_ok());
        assert!(matches!(iter.try_next(), Err(CoffeeError::NoSuchElement)));
        // Still exhausted; fresh scans need a new iterator.
        assert!(matches!(iter.try_next(), Err(CoffeeError::NoSuchElement)));
        assert_eq!(set.iter().count(), 1);
    }

    #[test]
    fn test_retain_all_uses_live_chain() {
        let mut set = LinkedSet::from_records([arabica(), robusta(), liberica()]);
        // Dropping two adjacent nodes must not skip the one after an unlink.
        assert!(set.retain_all(&[liberica()]));
        let order: Vec<_> = set.iter().map(Coffee::name).collect();
        assert_eq!(order, ["Liberica"]);
        assert!(!set.retain_all(&[liberica()]));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut set = LinkedSet::from_records([arabica(), robusta()]);
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.iter().count(), 0);
        assert!(set.add(arabica()));
    }

    #[test]
    fn test_snapshot_into_reuses_buffer() {
        let set = LinkedSet::from_records([arabica(), robusta()]);
        let mut buf = vec![liberica(), liberica(), liberica()];
        set.snapshot_into(&mut buf);
        assert_eq!(buf.len(), set.len());
        assert_eq!(buf[0], arabica());
        assert_eq!(buf[1], robusta());
    }
}
