use core::borrow::Borrow;
use core::fmt;
use core::hash::Hash;
use std::collections::HashMap;

use crate::arity::{Arity, Binary};
use crate::error::Error;
use crate::heap::{BatchOrder, Entry, Heap, HeapCore, Iter, Orientation};

/// A priority queue with O(1) element lookup and O(log n) in-place key
/// updates.
///
/// Each element appears at most once and carries a key. Next to the heap the
/// queue keeps an element-to-slot map, so [`update_key`], [`key_of`] and
/// [`contains`] locate an element without scanning. That makes it the queue
/// shape graph searches want: when a shorter path to a frontier node turns
/// up, lower its key in place and the order repairs itself in O(log n).
///
/// Elements double as lookup keys, so `V: Hash + Eq + Clone`; one copy lives
/// in the heap entry and one in the position map.
///
/// # Examples
///
/// ```
/// use indexed_heap::PriorityQueue;
///
/// let mut frontier = PriorityQueue::min();
/// frontier.push(7, "harbor")?;
/// frontier.push(3, "gate")?;
/// frontier.push(9, "keep")?;
///
/// // A shorter path to the keep was found.
/// frontier.update_key(2, "keep")?;
/// assert_eq!(frontier.top(), Ok(&"keep"));
/// assert_eq!(frontier.key_of("gate"), Ok(&3));
///
/// assert_eq!(frontier.pop(), Ok((2, "keep")));
/// assert_eq!(frontier.pop(), Ok((3, "gate")));
/// assert_eq!(frontier.pop(), Ok((7, "harbor")));
/// # Ok::<(), indexed_heap::Error>(())
/// ```
///
/// A wider layout is picked with the third type parameter:
///
/// ```
/// use indexed_heap::{KAry, Orientation, PriorityQueue};
///
/// let mut queue: PriorityQueue<u64, u32, KAry<4>> =
///     PriorityQueue::new(Orientation::Min);
/// queue.push(10, 1)?;
/// queue.push(5, 2)?;
/// assert_eq!(queue.top(), Ok(&2));
/// # Ok::<(), indexed_heap::Error>(())
/// ```
///
/// [`update_key`]: PriorityQueue::update_key
/// [`key_of`]: PriorityQueue::key_of
/// [`contains`]: PriorityQueue::contains
pub struct PriorityQueue<K, V, A: Arity = Binary> {
    heap: Heap<K, V, A>,
    positions: HashMap<V, usize>,
}

impl<K: Ord, V: Hash + Eq + Clone> PriorityQueue<K, V, Binary> {
    /// Creates an empty binary min-queue.
    #[must_use]
    pub fn min() -> Self {
        Self::new(Orientation::Min)
    }

    /// Creates an empty binary max-queue.
    #[must_use]
    pub fn max() -> Self {
        Self::new(Orientation::Max)
    }
}

impl<K: Ord, V: Hash + Eq + Clone, A: Arity> PriorityQueue<K, V, A> {
    /// Creates an empty queue with the given orientation.
    #[must_use]
    pub fn new(orientation: Orientation) -> Self {
        PriorityQueue {
            heap: Heap::new(orientation),
            positions: HashMap::new(),
        }
    }

    /// Creates an empty queue that can hold `capacity` elements without
    /// reallocating.
    #[must_use]
    pub fn with_capacity(orientation: Orientation, capacity: usize) -> Self {
        PriorityQueue {
            heap: Heap::with_capacity(orientation, capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    /// Builds a queue from a batch of `(key, element)` pairs.
    ///
    /// Fails with [`Error::DuplicateElement`] if the batch names the same
    /// element twice. With [`BatchOrder::Arbitrary`] the batch is heapified
    /// in O(n); [`BatchOrder::AlreadyHeap`] trusts the caller and skips the
    /// build.
    pub fn from_entries(
        orientation: Orientation,
        entries: impl IntoIterator<Item = (K, V)>,
        order: BatchOrder,
    ) -> Result<Self, Error> {
        let entries = entries.into_iter();
        let (lower, _) = entries.size_hint();
        let mut nodes: Vec<Entry<K, V>> = Vec::with_capacity(lower);
        let mut positions = HashMap::with_capacity(lower);
        for (key, element) in entries {
            if positions.insert(element.clone(), nodes.len()).is_some() {
                return Err(Error::DuplicateElement);
            }
            nodes.push(Entry { key, element });
        }
        let mut queue = PriorityQueue {
            heap: Heap::from_parts(orientation, nodes),
            positions,
        };
        if order == BatchOrder::Arbitrary {
            queue.build();
        }
        Ok(queue)
    }

    /// Adds an element with the given key.
    ///
    /// Fails with [`Error::DuplicateElement`] if the element is already in
    /// the queue; a present element's key changes through [`update_key`]
    /// only.
    ///
    /// O(log n) amortized for the binary layout, O(log_K n) for `KAry<K>`.
    ///
    /// [`update_key`]: PriorityQueue::update_key
    pub fn push(&mut self, key: K, element: V) -> Result<(), Error> {
        if self.positions.contains_key(&element) {
            return Err(Error::DuplicateElement);
        }
        let index_to_fix = self.heap.nodes.len();
        self.positions.insert(element.clone(), index_to_fix);
        self.heap.nodes.push(Entry { key, element });
        self.sift_up(index_to_fix);
        Ok(())
    }

    /// Overwrites an element's key and repairs the order from the element's
    /// slot, in whichever direction the change requires. Raising and
    /// lowering are both legal on either orientation.
    ///
    /// Fails with [`Error::ElementNotFound`] if the element is not in the
    /// queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_heap::PriorityQueue;
    ///
    /// let mut queue = PriorityQueue::min();
    /// queue.push(10, 'a')?;
    /// queue.push(20, 'b')?;
    ///
    /// queue.update_key(5, &'b')?;
    /// assert_eq!(queue.top_key_value(), Ok((&5, &'b')));
    /// # Ok::<(), indexed_heap::Error>(())
    /// ```
    pub fn update_key<Q>(&mut self, key: K, element: &Q) -> Result<(), Error>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index_to_fix = *self.positions.get(element).ok_or(Error::ElementNotFound)?;
        self.heap.nodes[index_to_fix].key = key;
        // The new key may belong above or below its old slot; probe the
        // parent to pick the repair direction.
        if index_to_fix > 0 && self.outranks(index_to_fix, A::parent(index_to_fix)) {
            self.sift_up(index_to_fix);
        } else {
            self.sift_down(index_to_fix);
        }
        Ok(())
    }

    /// Removes and returns the top `(key, element)` pair.
    ///
    /// The last entry moves into the root slot, its position entry is
    /// repointed, and the root is sifted down.
    ///
    /// Fails with [`Error::EmptyQueue`] if the queue is empty.
    pub fn pop(&mut self) -> Result<(K, V), Error> {
        if self.heap.nodes.is_empty() {
            return Err(Error::EmptyQueue);
        }
        let entry = self.heap.nodes.swap_remove(0);
        self.positions.remove(&entry.element);
        if !self.heap.nodes.is_empty() {
            if let Some(pos) = self.positions.get_mut(&self.heap.nodes[0].element) {
                *pos = 0;
            }
            self.sift_down(0);
        }
        Ok((entry.key, entry.element))
    }

    /// Returns the top element.
    ///
    /// Fails with [`Error::EmptyQueue`] if the queue is empty.
    pub fn top(&self) -> Result<&V, Error> {
        self.heap
            .peek()
            .map(|(_, element)| element)
            .ok_or(Error::EmptyQueue)
    }

    /// Returns the top `(key, element)` pair.
    ///
    /// Fails with [`Error::EmptyQueue`] if the queue is empty.
    pub fn top_key_value(&self) -> Result<(&K, &V), Error> {
        self.heap.peek().ok_or(Error::EmptyQueue)
    }

    /// Returns the key currently assigned to an element.
    ///
    /// Fails with [`Error::ElementNotFound`] if the element is not in the
    /// queue.
    pub fn key_of<Q>(&self, element: &Q) -> Result<&K, Error>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = *self.positions.get(element).ok_or(Error::ElementNotFound)?;
        Ok(&self.heap.nodes[index].key)
    }

    /// True when the element is in the queue.
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions.contains_key(element)
    }

    /// Consumes the queue and returns every pair in extraction order: keys
    /// ascending for a min-queue, descending for a max-queue.
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_sorted_vec(self) -> Vec<(K, V)> {
        self.heap.into_sorted_vec()
    }
}

impl<K, V, A: Arity> PriorityQueue<K, V, A> {
    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// True when the queue holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// The orientation fixed at construction.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.heap.orientation()
    }

    /// Visits every `(key, element)` pair in arbitrary order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.heap.iter()
    }

    /// Drops every element and position entry.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.positions.clear();
    }
}

impl<K: Ord, V: Hash + Eq + Clone, A: Arity> HeapCore for PriorityQueue<K, V, A> {
    type Shape = A;

    fn len(&self) -> usize {
        self.heap.nodes.len()
    }

    fn outranks(&self, a: usize, b: usize) -> bool {
        self.heap.outranks(a, b)
    }

    // Keeps the position map synchronized with the array on every shape
    // change the sift routines make.
    fn swap_nodes(&mut self, i: usize, j: usize) {
        debug_assert!(self.positions.contains_key(&self.heap.nodes[i].element));
        debug_assert!(self.positions.contains_key(&self.heap.nodes[j].element));
        if let Some(pos) = self.positions.get_mut(&self.heap.nodes[i].element) {
            *pos = j;
        }
        if let Some(pos) = self.positions.get_mut(&self.heap.nodes[j].element) {
            *pos = i;
        }
        self.heap.nodes.swap(i, j);
    }
}

impl<K: Clone, V: Clone, A: Arity> Clone for PriorityQueue<K, V, A> {
    fn clone(&self) -> Self {
        PriorityQueue {
            heap: self.heap.clone(),
            positions: self.positions.clone(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, A: Arity> fmt::Debug for PriorityQueue<K, V, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, K, V, A: Arity> IntoIterator for &'a PriorityQueue<K, V, A> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

#[cfg(test)]
impl<K: Ord, V: Hash + Eq + Clone + fmt::Debug, A: Arity> PriorityQueue<K, V, A> {
    /// Heap order plus position-map consistency in both directions.
    fn assert_consistent(&self) {
        self.heap.assert_heap_order();
        assert_eq!(self.positions.len(), self.heap.nodes.len());
        for (i, entry) in self.heap.nodes.iter().enumerate() {
            assert_eq!(
                self.positions.get(&entry.element),
                Some(&i),
                "element {:?} sits at slot {i} but is mapped elsewhere",
                entry.element
            );
        }
    }
}
