//! Adaptable binary min-heap.
//!
//! A plain binary heap cannot lower the priority of an entry that is already
//! enqueued, which A* needs every time it finds a cheaper path to an open
//! board. [`AdaptableHeap`] hands back a stable [`Locator`] at insertion and
//! keeps a locator-to-heap-index table up to date through every swap, so
//! [`AdaptableHeap::replace_key`] can re-prioritize a live entry in
//! O(log m) without removing it.

/// Opaque handle to a live heap entry, returned by [`AdaptableHeap::insert`].
///
/// A locator stays attached to the same logical entry no matter how the heap
/// reorders underneath it. It is invalidated when that entry leaves the heap
/// through [`AdaptableHeap::remove_min`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locator(usize);

struct Slot<P, V> {
    priority: P,
    value: V,
    id: usize,
}

/// Binary min-heap of `(priority, value)` entries supporting in-place
/// priority changes through [`Locator`] handles.
///
/// Sifting compares priorities with strict `<`, so entries with equal
/// priorities keep their arrival order until a reordering forces a swap;
/// repeated runs over the same input pop in the same order.
pub struct AdaptableHeap<P, V> {
    heap: Vec<Slot<P, V>>,
    // Locator id -> current heap index; None once the entry is removed.
    positions: Vec<Option<usize>>,
    free: Vec<usize>,
}

impl<P: Ord, V> AdaptableHeap<P, V> {
    /// Creates an empty heap.
    pub fn new() -> Self {
        AdaptableHeap {
            heap: Vec::new(),
            positions: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the heap holds no entries.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Adds an entry and returns the locator that addresses it from now on.
    ///
    /// O(log m) for a heap of m entries.
    pub fn insert(&mut self, priority: P, value: V) -> Locator {
        let index = self.heap.len();
        let id = match self.free.pop() {
            Some(id) => {
                self.positions[id] = Some(index);
                id
            }
            None => {
                self.positions.push(Some(index));
                self.positions.len() - 1
            }
        };
        self.heap.push(Slot {
            priority,
            value,
            id,
        });
        self.sift_up(index);
        Locator(id)
    }

    /// The minimum-priority entry, if any, without removing it.
    pub fn peek(&self) -> Option<(&P, &V)> {
        self.heap.first().map(|slot| (&slot.priority, &slot.value))
    }

    /// Removes and returns the minimum-priority entry.
    ///
    /// Returns `None` on an empty heap; the entry's locator is dead
    /// afterwards. O(log m).
    pub fn remove_min(&mut self) -> Option<(P, V)> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let slot = self.heap.pop().expect("heap is non-empty");
        self.positions[slot.id] = None;
        self.free.push(slot.id);
        if !self.heap.is_empty() {
            self.positions[self.heap[0].id] = Some(0);
            self.sift_down(0);
        }
        Some((slot.priority, slot.value))
    }

    /// Changes the priority of the entry `locator` refers to and restores
    /// heap order, in O(log m). The locator keeps referring to that entry.
    ///
    /// # Panics
    /// Panics if the locator's entry has already been removed or belongs to
    /// another heap.
    pub fn replace_key(&mut self, locator: &Locator, priority: P) {
        let index = self.index_of(locator);
        self.heap[index].priority = priority;
        let index = self.sift_up(index);
        self.sift_down(index);
    }

    /// Reads the current priority of a live entry.
    ///
    /// # Panics
    /// Panics if the locator's entry has already been removed.
    pub fn priority(&self, locator: &Locator) -> &P {
        &self.heap[self.index_of(locator)].priority
    }

    /// Reads the value of a live entry.
    ///
    /// # Panics
    /// Panics if the locator's entry has already been removed.
    pub fn value(&self, locator: &Locator) -> &V {
        &self.heap[self.index_of(locator)].value
    }

    fn index_of(&self, locator: &Locator) -> usize {
        self.positions
            .get(locator.0)
            .copied()
            .flatten()
            .expect("locator does not refer to a live entry")
    }

    fn sift_up(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.heap[index].priority < self.heap[parent].priority {
                self.swap_slots(index, parent);
                index = parent;
            } else {
                break;
            }
        }
        index
    }

    fn sift_down(&mut self, mut index: usize) -> usize {
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;
            if left < self.heap.len()
                && self.heap[left].priority < self.heap[smallest].priority
            {
                smallest = left;
            }
            if right < self.heap.len()
                && self.heap[right].priority < self.heap[smallest].priority
            {
                smallest = right;
            }
            if smallest == index {
                return index;
            }
            self.swap_slots(index, smallest);
            index = smallest;
        }
    }

    // Every swap flows through here so the position table never goes stale.
    fn swap_slots(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions[self.heap[a].id] = Some(a);
        self.positions[self.heap[b].id] = Some(b);
    }
}

impl<P: Ord, V> Default for AdaptableHeap<P, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    fn check_invariants<P: Ord, V>(heap: &AdaptableHeap<P, V>) {
        for (index, slot) in heap.heap.iter().enumerate() {
            assert_eq!(heap.positions[slot.id], Some(index));
            if index > 0 {
                let parent = (index - 1) / 2;
                assert!(heap.heap[parent].priority <= heap.heap[index].priority);
            }
        }
    }

    #[test]
    fn test_remove_min_orders_entries() {
        let mut heap = AdaptableHeap::new();
        heap.insert(10, "ten");
        heap.insert(3, "three");
        heap.insert(7, "seven");
        heap.insert(1, "one");
        check_invariants(&heap);

        assert_eq!(heap.remove_min(), Some((1, "one")));
        assert_eq!(heap.remove_min(), Some((3, "three")));
        assert_eq!(heap.remove_min(), Some((7, "seven")));
        assert_eq!(heap.remove_min(), Some((10, "ten")));
        assert_eq!(heap.remove_min(), None);
        assert!(heap.is_empty());
    }

    #[test]
    fn test_peek_does_not_remove() {
        let mut heap = AdaptableHeap::new();
        assert!(heap.peek().is_none());
        heap.insert(5, "five");
        heap.insert(2, "two");
        assert_eq!(heap.peek(), Some((&2, &"two")));
        assert_eq!(heap.len(), 2);
    }

    #[test]
    fn test_replace_key_decreases_priority() {
        let mut heap = AdaptableHeap::new();
        heap.insert(4, "a");
        let loc = heap.insert(9, "b");
        heap.insert(6, "c");

        heap.replace_key(&loc, 1);
        check_invariants(&heap);
        assert_eq!(heap.priority(&loc), &1);
        assert_eq!(heap.remove_min(), Some((1, "b")));
    }

    #[test]
    fn test_replace_key_increases_priority() {
        let mut heap = AdaptableHeap::new();
        let loc = heap.insert(1, "front");
        heap.insert(5, "middle");
        heap.insert(8, "back");

        heap.replace_key(&loc, 10);
        check_invariants(&heap);
        assert_eq!(heap.remove_min(), Some((5, "middle")));
        assert_eq!(heap.remove_min(), Some((8, "back")));
        assert_eq!(heap.remove_min(), Some((10, "front")));
    }

    #[test]
    fn test_locator_survives_reordering() {
        let mut heap = AdaptableHeap::new();
        let mut locators = Vec::new();
        for priority in (0..16).rev() {
            locators.push((priority, heap.insert(priority, priority * 100)));
        }
        check_invariants(&heap);

        // Every locator still reads its own entry after all the sifting.
        for (priority, loc) in &locators {
            assert_eq!(heap.priority(loc), priority);
            assert_eq!(heap.value(loc), &(priority * 100));
        }

        // Pops invalidate exactly the popped entries' locators.
        assert_eq!(heap.remove_min(), Some((0, 0)));
        assert_eq!(heap.remove_min(), Some((1, 100)));
        for (priority, loc) in &locators {
            if *priority > 1 {
                assert_eq!(heap.value(loc), &(priority * 100));
            }
        }
    }

    #[test]
    fn test_locator_slot_reuse_keeps_entries_distinct() {
        let mut heap = AdaptableHeap::new();
        heap.insert(1, "gone");
        heap.remove_min();
        // The freed slot may be reused; the new locator must not read the
        // old entry.
        let loc = heap.insert(2, "fresh");
        assert_eq!(heap.value(&loc), &"fresh");
        check_invariants(&heap);
    }

    #[test]
    #[should_panic(expected = "locator does not refer to a live entry")]
    fn test_stale_locator_panics() {
        let mut heap = AdaptableHeap::new();
        let loc = heap.insert(1, ());
        heap.remove_min();
        heap.priority(&loc);
    }

    #[test]
    fn test_randomized_against_sorted_model() {
        let mut rng = SmallRng::seed_from_u64(99);

        // A shuffled pool of unique priorities, so re-keying can move an
        // entry in either direction and pops are never ambiguous on ties.
        let mut pool: Vec<u32> = (0..2000).collect();
        for i in (1..pool.len()).rev() {
            pool.swap(i, rng.gen_range(0..=i));
        }

        let mut heap = AdaptableHeap::new();
        let mut live: Vec<(u32, Locator)> = Vec::new();
        let mut expected: Vec<(u32, u32)> = Vec::new();

        for _ in 0..500 {
            match rng.gen_range(0..4u8) {
                // Insert with a fresh, unique priority.
                0 | 1 => {
                    let priority = pool.pop().unwrap();
                    let value = priority * 7;
                    let loc = heap.insert(priority, value);
                    live.push((priority, loc));
                    expected.push((priority, value));
                }
                // Remove the minimum and mirror it in the model.
                2 => {
                    if let Some((priority, value)) = heap.remove_min() {
                        if let Some(&(min_p, _)) = expected.iter().min() {
                            assert!(priority <= min_p);
                        }
                        let at = expected
                            .iter()
                            .position(|&(p, _)| p == priority)
                            .expect("popped entry must be in the model");
                        assert_eq!(expected.remove(at), (priority, value));
                        live.retain(|(p, _)| *p != priority);
                    }
                }
                // Re-key a random live entry; the fresh priority may be
                // lower or higher than the old one.
                _ => {
                    if !live.is_empty() {
                        let at = rng.gen_range(0..live.len());
                        let (old, loc) = live.swap_remove(at);
                        let priority = pool.pop().unwrap();
                        heap.replace_key(&loc, priority);
                        let slot = expected
                            .iter_mut()
                            .find(|(p, _)| *p == old)
                            .expect("re-keyed entry must be in the model");
                        slot.0 = priority;
                        live.push((priority, loc));
                    }
                }
            }
            check_invariants(&heap);
        }

        // Drain: everything comes out in ascending priority order.
        expected.sort_unstable();
        let mut drained = Vec::new();
        while let Some(entry) = heap.remove_min() {
            drained.push(entry);
        }
        assert_eq!(drained, expected);
    }
}
