// src/crawl/heap.rs
// =============================================================================
// This module implements the max-priority queue that drives focused crawling.
//
// How it works:
// - Entries (key + priority) live in one contiguous Vec
// - The Vec is read as a complete binary tree: children of i are 2i+1 and 2i+2
// - The entry with the highest priority always sits at index 0
//
// The heap knows nothing about crawling. Keys are opaque and addressed by
// position; there is no key -> index map, so finding a key is a linear scan.
//
// Rust concepts:
// - Generics: PriorityHeap<K> works for any key type
// - Vec::swap: Exchanges two entries in place
// - panic!: Misusing an index is a bug in the caller, not a runtime condition
// =============================================================================

// Starting capacity of the backing storage
const DEFAULT_CAPACITY: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
struct HeapEntry<K> {
    key: K,
    priority: i64,
}

/// Array-backed binary max-heap mapping keys to integer priorities.
#[derive(Debug, Clone)]
pub struct PriorityHeap<K> {
    entries: Vec<HeapEntry<K>>,
}

impl<K> Default for PriorityHeap<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> PriorityHeap<K> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity.max(1)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // Adds a key with the given priority
    //
    // When the storage is full it is doubled up front, then the new entry is
    // placed in the last slot and sifted up toward the root.
    pub fn insert(&mut self, key: K, priority: i64) {
        if self.entries.len() == self.entries.capacity() {
            let extra = self.entries.capacity().max(1);
            self.entries.reserve_exact(extra);
        }
        self.entries.push(HeapEntry { key, priority });
        self.sift_up(self.entries.len() - 1);
    }

    /// Returns the key with the highest priority without removing it.
    ///
    /// # Panics
    /// Panics if the heap is empty.
    pub fn peek_max(&self) -> &K {
        match self.entries.first() {
            Some(entry) => &entry.key,
            None => panic!("peek_max called on an empty PriorityHeap"),
        }
    }

    /// Removes and returns the key with the highest priority.
    ///
    /// # Panics
    /// Panics if the heap is empty.
    pub fn extract_max(&mut self) -> K {
        if self.entries.is_empty() {
            panic!("extract_max called on an empty PriorityHeap");
        }
        self.remove_at(0).0
    }

    /// Removes the entry at array position `index` and returns it.
    ///
    /// The last entry is moved into `index` and sifted down. If it does not
    /// move down it is sifted up instead, which only matters when `index` is
    /// not the root.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn remove_at(&mut self, index: usize) -> (K, i64) {
        self.check_index(index, "remove_at");
        let removed = self.entries.swap_remove(index);
        if index < self.entries.len() && self.sift_down(index) == index {
            self.sift_up(index);
        }
        (removed.key, removed.priority)
    }

    /// Subtracts `delta` from the priority at `index` and restores heap order.
    ///
    /// A positive `delta` lowers the priority and sifts down; zero or a
    /// negative `delta` raises it and sifts up. Callers must pass the sign
    /// that matches the change they intend.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn adjust_priority(&mut self, index: usize, delta: i64) {
        self.check_index(index, "adjust_priority");
        self.entries[index].priority -= delta;
        if delta > 0 {
            self.sift_down(index);
        } else {
            self.sift_up(index);
        }
    }

    /// Key stored at array position `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn key_at(&self, index: usize) -> &K {
        self.check_index(index, "key_at");
        &self.entries[index].key
    }

    /// Priority stored at array position `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn priority_at(&self, index: usize) -> i64 {
        self.check_index(index, "priority_at");
        self.entries[index].priority
    }

    // Snapshot of the priorities in array order (diagnostics and tests)
    pub fn priorities(&self) -> Vec<i64> {
        self.entries.iter().map(|entry| entry.priority).collect()
    }

    fn check_index(&self, index: usize, op: &str) {
        if index >= self.entries.len() {
            panic!(
                "{} index {} out of range for PriorityHeap of size {}",
                op,
                index,
                self.entries.len()
            );
        }
    }

    fn sift_up(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.entries[parent].priority >= self.entries[index].priority {
                break;
            }
            self.entries.swap(index, parent);
            index = parent;
        }
        index
    }

    // Equal children: descend to the right one
    fn sift_down(&mut self, mut index: usize) -> usize {
        let len = self.entries.len();
        let mut child = index * 2 + 1;
        while child < len {
            if child + 1 < len && self.entries[child + 1].priority >= self.entries[child].priority {
                child += 1;
            }
            if self.entries[index].priority >= self.entries[child].priority {
                break;
            }
            self.entries.swap(index, child);
            index = child;
            child = index * 2 + 1;
        }
        index
    }
}

impl<K: PartialEq> PriorityHeap<K> {
    // Finds the array position of a key by scanning every entry
    pub fn position_of(&self, key: &K) -> Option<usize> {
        self.entries.iter().position(|entry| &entry.key == key)
    }
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why not std::collections::BinaryHeap?
//    - BinaryHeap hides positions, so there is no way to adjust or remove an
//      entry in the middle of the heap
//    - The crawler's heap exposes positions (key_at, priority_at, remove_at)
//
// 2. Index arithmetic:
//    - parent(i) = (i - 1) / 2
//    - left(i)   = 2i + 1
//    - right(i)  = 2i + 2
//
// 3. Why swap_remove?
//    - It moves the last element into the removed slot in O(1)
//    - That is exactly the compaction step a binary heap needs
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_heap_order(heap: &PriorityHeap<String>) {
        let priorities = heap.priorities();
        for i in 1..priorities.len() {
            let parent = (i - 1) / 2;
            assert!(
                priorities[parent] >= priorities[i],
                "heap order broken at {}: {:?}",
                i,
                priorities
            );
        }
    }

    #[test]
    fn test_extract_in_priority_order() {
        let mut heap = PriorityHeap::new();
        heap.insert("five", 5);
        heap.insert("one", 1);
        heap.insert("nine", 9);
        heap.insert("three", 3);

        let order: Vec<_> = std::iter::from_fn(|| {
            if heap.is_empty() {
                None
            } else {
                Some(heap.extract_max())
            }
        })
        .collect();
        assert_eq!(order, vec!["nine", "five", "three", "one"]);
    }

    #[test]
    fn test_peek_does_not_remove() {
        let mut heap = PriorityHeap::new();
        heap.insert('a', 2);
        heap.insert('b', 7);
        assert_eq!(*heap.peek_max(), 'b');
        assert_eq!(heap.len(), 2);
    }

    #[test]
    fn test_grows_past_initial_capacity() {
        let mut heap = PriorityHeap::with_capacity(1);
        for i in 0..100 {
            heap.insert(i, i as i64);
        }
        assert_eq!(heap.len(), 100);
        assert_eq!(*heap.peek_max(), 99);
    }

    #[test]
    fn test_equal_children_prefer_right() {
        let mut heap = PriorityHeap::new();
        heap.insert("root", 9);
        heap.insert("left", 3);
        heap.insert("right", 3);
        heap.insert("last", 1);

        assert_eq!(heap.extract_max(), "root");
        assert_eq!(*heap.peek_max(), "right");
    }

    #[test]
    fn test_adjust_priority_both_directions() {
        let mut heap = PriorityHeap::new();
        heap.insert("a", 10);
        heap.insert("b", 8);
        heap.insert("c", 6);

        // lower the root below everything else
        heap.adjust_priority(0, 7);
        assert_eq!(*heap.peek_max(), "b");

        // raise c above b
        let c = heap.position_of(&"c").unwrap();
        heap.adjust_priority(c, -5);
        assert_eq!(*heap.peek_max(), "c");
        assert_eq!(heap.priority_at(0), 11);
    }

    #[test]
    fn test_remove_at_middle_keeps_order() {
        let mut heap = PriorityHeap::new();
        for (key, priority) in [("a", 100), ("b", 10), ("c", 90), ("d", 5), ("e", 4), ("f", 80), ("g", 70)] {
            heap.insert(key.to_string(), priority);
        }
        // removing e pulls g (70) under b (10), which must sift up
        let index = heap.position_of(&"e".to_string()).unwrap();
        let (key, priority) = heap.remove_at(index);
        assert_eq!((key.as_str(), priority), ("e", 4));
        assert_heap_order(&heap);
    }

    #[test]
    fn test_position_of_missing_key() {
        let mut heap = PriorityHeap::new();
        heap.insert("a", 1);
        assert_eq!(heap.position_of(&"zzz"), None);
    }

    #[test]
    #[should_panic(expected = "empty PriorityHeap")]
    fn test_extract_from_empty_panics() {
        let mut heap: PriorityHeap<String> = PriorityHeap::new();
        heap.extract_max();
    }

    #[test]
    #[should_panic(expected = "empty PriorityHeap")]
    fn test_peek_empty_panics() {
        let heap: PriorityHeap<String> = PriorityHeap::new();
        heap.peek_max();
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_adjust_out_of_range_panics() {
        let mut heap = PriorityHeap::new();
        heap.insert("a", 1);
        heap.adjust_priority(3, 1);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Insert(i64),
        Extract,
        Adjust(usize, i64),
        Remove(usize),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (-50i64..50).prop_map(Op::Insert),
            Just(Op::Extract),
            (0usize..64, -20i64..20).prop_map(|(i, d)| Op::Adjust(i, d)),
            (0usize..64).prop_map(Op::Remove),
        ]
    }

    proptest! {
        #[test]
        fn prop_heap_order_survives_any_ops(ops in proptest::collection::vec(op(), 0..200)) {
            let mut heap = PriorityHeap::new();
            let mut next = 0usize;
            for op in ops {
                match op {
                    Op::Insert(p) => {
                        heap.insert(next.to_string(), p);
                        next += 1;
                    }
                    Op::Extract if !heap.is_empty() => {
                        let top = heap.priority_at(0);
                        heap.extract_max();
                        if !heap.is_empty() {
                            prop_assert!(heap.priority_at(0) <= top);
                        }
                    }
                    Op::Adjust(i, d) if !heap.is_empty() => heap.adjust_priority(i % heap.len(), d),
                    Op::Remove(i) if !heap.is_empty() => {
                        let len = heap.len();
                        heap.remove_at(i % len);
                    }
                    _ => {}
                }
                assert_heap_order(&heap);
            }
        }
    }
}
