//! Free-list-backed arena with an intrusive traversal order.
//!
//! Both the vertex store and the edge container need the same storage
//! pattern: elements addressed by a stable index, plus a mutable doubly
//! linked traversal order that supports insertion before an existing
//! element and removal at any position. Removed slots are recycled
//! through a free list, so indices of live elements never shift.

const INVALID: u32 = u32::MAX;

#[derive(Debug, Clone)]
struct Slot<T> {
    data: Option<T>,
    prev: u32,
    next: u32,
}

/// An ordered arena with stable indices.
///
/// Indices handed out by [`push_back`](OrderedArena::push_back) and
/// [`insert_before`](OrderedArena::insert_before) remain valid until that
/// element is removed. A removed index may later be reused for a new
/// element.
#[derive(Debug, Clone)]
pub(crate) struct OrderedArena<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
    head: u32,
    tail: u32,
    len: usize,
}

impl<T> Default for OrderedArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OrderedArena<T> {
    /// Create a new empty arena.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: INVALID,
            tail: INVALID,
            len: 0,
        }
    }

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the arena holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check whether `index` names a live element.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        index < self.slots.len() && self.slots[index].data.is_some()
    }

    /// Get a reference to a live element.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(|s| s.data.as_ref())
    }

    /// Get a mutable reference to a live element.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index).and_then(|s| s.data.as_mut())
    }

    /// First element in traversal order.
    #[inline]
    pub fn first(&self) -> Option<usize> {
        (self.head != INVALID).then_some(self.head as usize)
    }

    /// Element following `index` in traversal order, if any.
    pub fn next(&self, index: usize) -> Option<usize> {
        if !self.contains(index) {
            return None;
        }
        let next = self.slots[index].next;
        (next != INVALID).then_some(next as usize)
    }

    /// Element preceding `index` in traversal order, if any.
    pub fn prev(&self, index: usize) -> Option<usize> {
        if !self.contains(index) {
            return None;
        }
        let prev = self.slots[index].prev;
        (prev != INVALID).then_some(prev as usize)
    }

    fn alloc(&mut self, value: T) -> u32 {
        if let Some(i) = self.free.pop() {
            self.slots[i as usize] = Slot {
                data: Some(value),
                prev: INVALID,
                next: INVALID,
            };
            i
        } else {
            self.slots.push(Slot {
                data: Some(value),
                prev: INVALID,
                next: INVALID,
            });
            (self.slots.len() - 1) as u32
        }
    }

    /// Append an element at the end of the traversal order.
    pub fn push_back(&mut self, value: T) -> usize {
        let i = self.alloc(value);
        self.slots[i as usize].prev = self.tail;
        if self.tail != INVALID {
            self.slots[self.tail as usize].next = i;
        } else {
            self.head = i;
        }
        self.tail = i;
        self.len += 1;
        i as usize
    }

    /// Insert an element immediately before `at` in the traversal order.
    ///
    /// `at` must name a live element.
    pub fn insert_before(&mut self, at: usize, value: T) -> usize {
        debug_assert!(self.contains(at), "insert_before at dead index {}", at);
        let i = self.alloc(value);
        let prev = self.slots[at].prev;
        self.slots[i as usize].prev = prev;
        self.slots[i as usize].next = at as u32;
        self.slots[at].prev = i;
        if prev != INVALID {
            self.slots[prev as usize].next = i;
        } else {
            self.head = i;
        }
        self.len += 1;
        i as usize
    }

    /// Remove a live element, returning it.
    ///
    /// Returns `None` if `index` does not name a live element.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if !self.contains(index) {
            return None;
        }
        let Slot { data, prev, next } = std::mem::replace(
            &mut self.slots[index],
            Slot {
                data: None,
                prev: INVALID,
                next: INVALID,
            },
        );
        if prev != INVALID {
            self.slots[prev as usize].next = next;
        } else {
            self.head = next;
        }
        if next != INVALID {
            self.slots[next as usize].prev = prev;
        } else {
            self.tail = prev;
        }
        self.free.push(index as u32);
        self.len -= 1;
        data
    }

    /// Iterate over live indices in traversal order.
    pub fn indices(&self) -> Indices<'_, T> {
        Indices {
            arena: self,
            current: self.head,
        }
    }

    /// Iterate over `(index, element)` pairs in traversal order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.indices().map(|i| {
            // A traversed index is always live.
            (i, self.slots[i].data.as_ref().expect("live slot"))
        })
    }

    /// Relink the traversal order to match `order`.
    ///
    /// `order` must contain every live index exactly once.
    pub fn set_order(&mut self, order: &[usize]) {
        debug_assert_eq!(order.len(), self.len, "set_order must cover all elements");
        self.head = INVALID;
        self.tail = INVALID;
        let mut prev = INVALID;
        for &i in order {
            debug_assert!(self.contains(i), "set_order with dead index {}", i);
            self.slots[i].prev = prev;
            self.slots[i].next = INVALID;
            if prev != INVALID {
                self.slots[prev as usize].next = i as u32;
            } else {
                self.head = i as u32;
            }
            prev = i as u32;
        }
        self.tail = prev;
    }
}

/// Iterator over live indices of an [`OrderedArena`] in traversal order.
pub(crate) struct Indices<'a, T> {
    arena: &'a OrderedArena<T>,
    current: u32,
}

impl<'a, T> Iterator for Indices<'a, T> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == INVALID {
            return None;
        }
        let result = self.current as usize;
        self.current = self.arena.slots[result].next;
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_order() {
        let mut arena = OrderedArena::new();
        let a = arena.push_back("a");
        let b = arena.push_back("b");
        let c = arena.push_back("c");

        assert_eq!(arena.len(), 3);
        assert_eq!(arena.indices().collect::<Vec<_>>(), vec![a, b, c]);
        assert_eq!(arena.first(), Some(a));
        assert_eq!(arena.next(a), Some(b));
        assert_eq!(arena.next(c), None);
        assert_eq!(arena.prev(a), None);
    }

    #[test]
    fn test_insert_before() {
        let mut arena = OrderedArena::new();
        let a = arena.push_back(1);
        let c = arena.push_back(3);
        let b = arena.insert_before(c, 2);

        assert_eq!(arena.indices().collect::<Vec<_>>(), vec![a, b, c]);

        let z = arena.insert_before(a, 0);
        assert_eq!(arena.first(), Some(z));
        assert_eq!(
            arena.indices().map(|i| *arena.get(i).unwrap()).collect::<Vec<_>>(),
            vec![0, 1, 2, 3]
        );
    }

    #[test]
    fn test_remove_and_reuse() {
        let mut arena = OrderedArena::new();
        let a = arena.push_back(1);
        let b = arena.push_back(2);
        let c = arena.push_back(3);

        assert_eq!(arena.remove(b), Some(2));
        assert!(!arena.contains(b));
        assert_eq!(arena.indices().collect::<Vec<_>>(), vec![a, c]);
        assert_eq!(arena.remove(b), None);

        // The freed slot is recycled, appended at the tail.
        let d = arena.push_back(4);
        assert_eq!(d, b);
        assert_eq!(arena.indices().collect::<Vec<_>>(), vec![a, c, d]);
    }

    #[test]
    fn test_remove_head_and_tail() {
        let mut arena = OrderedArena::new();
        let a = arena.push_back(1);
        let b = arena.push_back(2);
        let c = arena.push_back(3);

        arena.remove(a);
        assert_eq!(arena.first(), Some(b));
        arena.remove(c);
        assert_eq!(arena.indices().collect::<Vec<_>>(), vec![b]);
        arena.remove(b);
        assert!(arena.is_empty());
        assert_eq!(arena.first(), None);
    }

    #[test]
    fn test_set_order() {
        let mut arena = OrderedArena::new();
        let a = arena.push_back(1);
        let b = arena.push_back(2);
        let c = arena.push_back(3);

        arena.set_order(&[c, a, b]);
        assert_eq!(arena.indices().collect::<Vec<_>>(), vec![c, a, b]);
        assert_eq!(arena.first(), Some(c));
        assert_eq!(arena.next(b), None);
    }

    #[test]
    fn test_stable_indices_across_mutation() {
        let mut arena = OrderedArena::new();
        let a = arena.push_back(10);
        let b = arena.push_back(20);
        arena.remove(a);
        let _ = arena.push_back(30);
        let _ = arena.push_back(40);

        // b still names the same element.
        assert_eq!(arena.get(b), Some(&20));
    }
}
