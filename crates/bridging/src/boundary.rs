use crate::VertexId;

use alloc::vec::Vec;

/// A position in a [`BoundaryList`].
///
/// Positions stay valid for the lifetime of the list, whatever is inserted
/// around them. They are compared by identity: two positions holding the same
/// vertex are different positions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BoundaryId(u32);

impl BoundaryId {
    #[inline]
    pub fn to_usize(self) -> usize {
        self.0 as usize
    }

    #[inline]
    fn from_usize(idx: usize) -> Self {
        BoundaryId(idx as u32)
    }
}

#[derive(Copy, Clone, Debug)]
struct Node {
    vertex: VertexId,
    next: BoundaryId,
    prev: BoundaryId,
}

/// A circular doubly linked list of vertex ids stored in contiguous memory.
///
/// This is the contour being built by the hole eliminator. A vertex id can
/// appear several times. Nodes are never removed so the list only grows.
#[derive(Clone, Debug, Default)]
pub struct BoundaryList {
    nodes: Vec<Node>,
    head: Option<BoundaryId>,
    tail: Option<BoundaryId>,
}

impl BoundaryList {
    /// Create an empty list.
    pub fn new() -> Self {
        BoundaryList {
            nodes: Vec::new(),
            head: None,
            tail: None,
        }
    }

    /// Create an empty list with a preallocated buffer.
    pub fn with_capacity(capacity: usize) -> Self {
        BoundaryList {
            nodes: Vec::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    /// Remove all elements, keeping the allocation.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    pub fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    #[inline]
    pub fn head(&self) -> Option<BoundaryId> {
        self.head
    }

    #[inline]
    pub fn tail(&self) -> Option<BoundaryId> {
        self.tail
    }

    /// Return true if the position belongs to this list.
    #[inline]
    pub fn contains(&self, position: BoundaryId) -> bool {
        position.to_usize() < self.nodes.len()
    }

    /// Append a vertex after the tail and return its position.
    pub fn push_back(&mut self, vertex: VertexId) -> BoundaryId {
        match self.tail {
            Some(tail) => self.insert_after(tail, vertex),
            None => {
                let id = BoundaryId::from_usize(self.nodes.len());
                self.nodes.push(Node {
                    vertex,
                    next: id,
                    prev: id,
                });
                self.head = Some(id);
                self.tail = Some(id);

                id
            }
        }
    }

    /// Insert a vertex right after a given position and return the new position.
    pub fn insert_after(&mut self, position: BoundaryId, vertex: VertexId) -> BoundaryId {
        debug_assert!(self.contains(position));
        let id = BoundaryId::from_usize(self.nodes.len());
        let next = self.nodes[position.to_usize()].next;
        self.nodes.push(Node {
            vertex,
            next,
            prev: position,
        });
        self.nodes[position.to_usize()].next = id;
        self.nodes[next.to_usize()].prev = id;

        if self.tail == Some(position) {
            self.tail = Some(id);
        }

        id
    }

    /// The position after the given one. The head comes after the tail.
    #[inline]
    pub fn next(&self, position: BoundaryId) -> BoundaryId {
        self.nodes[position.to_usize()].next
    }

    /// The position before the given one. The tail comes before the head.
    #[inline]
    pub fn prev(&self, position: BoundaryId) -> BoundaryId {
        self.nodes[position.to_usize()].prev
    }

    /// The vertex stored at a given position.
    #[inline]
    pub fn vertex(&self, position: BoundaryId) -> VertexId {
        self.nodes[position.to_usize()].vertex
    }

    /// Iterate once over the list from head to tail.
    pub fn iter(&self) -> BoundaryIter<'_> {
        BoundaryIter {
            list: self,
            current: self.head,
            remaining: self.nodes.len(),
        }
    }

    /// Iterate over the vertex ids from head to tail.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.iter().map(|(_, vertex)| vertex)
    }

    /// Iterate over the edges of the closed contour as `(from, to)` positions,
    /// including the edge going from the tail back to the head.
    pub fn edges(&self) -> impl Iterator<Item = (BoundaryId, BoundaryId)> + '_ {
        self.iter().map(move |(position, _)| (position, self.next(position)))
    }

    /// Iterate over all positions holding a given vertex, from head to tail.
    pub fn positions_of(&self, vertex: VertexId) -> impl Iterator<Item = BoundaryId> + '_ {
        self.iter()
            .filter(move |(_, v)| *v == vertex)
            .map(|(position, _)| position)
    }

    /// Collect the vertex ids from head to tail.
    pub fn to_vec(&self) -> Vec<VertexId> {
        self.vertices().collect()
    }
}

/// Iterator over the `(position, vertex)` pairs of a [`BoundaryList`].
pub struct BoundaryIter<'l> {
    list: &'l BoundaryList,
    current: Option<BoundaryId>,
    remaining: usize,
}

impl<'l> Iterator for BoundaryIter<'l> {
    type Item = (BoundaryId, VertexId);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.current?;
        self.remaining -= 1;
        self.current = Some(self.list.next(current));

        Some((current, self.list.vertex(current)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'l> ExactSizeIterator for BoundaryIter<'l> {}

impl<'l> IntoIterator for &'l BoundaryList {
    type Item = (BoundaryId, VertexId);
    type IntoIter = BoundaryIter<'l>;

    fn into_iter(self) -> BoundaryIter<'l> {
        self.iter()
    }
}

#[cfg(test)]
fn ids(list: &BoundaryList) -> Vec<u32> {
    list.vertices().map(|v| v.0).collect()
}

#[test]
fn empty_list() {
    let list = BoundaryList::new();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert_eq!(list.head(), None);
    assert_eq!(list.tail(), None);
    assert_eq!(list.iter().count(), 0);
}

#[test]
fn push_back_and_wrap_around() {
    let mut list = BoundaryList::with_capacity(8);
    let a = list.push_back(VertexId(0));
    assert_eq!(list.next(a), a);
    assert_eq!(list.prev(a), a);

    let b = list.push_back(VertexId(1));
    let c = list.push_back(VertexId(2));

    assert_eq!(list.len(), 3);
    assert_eq!(list.head(), Some(a));
    assert_eq!(list.tail(), Some(c));
    assert_eq!(list.next(a), b);
    assert_eq!(list.next(c), a);
    assert_eq!(list.prev(a), c);
    assert_eq!(list.prev(b), a);
    assert_eq!(ids(&list), alloc::vec![0, 1, 2]);
}

#[test]
fn insert_after_keeps_positions() {
    let mut list = BoundaryList::new();
    let a = list.push_back(VertexId(0));
    let b = list.push_back(VertexId(1));
    let c = list.push_back(VertexId(2));

    // Each insertion after `b` pushes the previous ones further along.
    let x = list.insert_after(b, VertexId(10));
    let y = list.insert_after(b, VertexId(11));
    assert_eq!(ids(&list), alloc::vec![0, 1, 11, 10, 2]);

    assert_eq!(list.vertex(a), VertexId(0));
    assert_eq!(list.vertex(b), VertexId(1));
    assert_eq!(list.vertex(c), VertexId(2));
    assert_eq!(list.vertex(x), VertexId(10));
    assert_eq!(list.next(b), y);
    assert_eq!(list.next(y), x);
    assert_eq!(list.next(x), c);
    assert_eq!(list.prev(c), x);
    assert_eq!(list.tail(), Some(c));

    // Inserting after the tail moves the tail.
    let z = list.insert_after(c, VertexId(12));
    assert_eq!(list.tail(), Some(z));
    assert_eq!(list.next(z), a);
    assert_eq!(list.prev(a), z);
    assert_eq!(ids(&list), alloc::vec![0, 1, 11, 10, 2, 12]);
}

#[test]
fn duplicates_and_edges() {
    let mut list = BoundaryList::new();
    let a = list.push_back(VertexId(0));
    let b = list.push_back(VertexId(1));
    let b2 = list.insert_after(b, VertexId(1));
    assert_ne!(b, b2);

    let copies: Vec<BoundaryId> = list.positions_of(VertexId(1)).collect();
    assert_eq!(copies, alloc::vec![b, b2]);
    assert_eq!(list.positions_of(VertexId(7)).count(), 0);

    let edges: Vec<(BoundaryId, BoundaryId)> = list.edges().collect();
    assert_eq!(edges, alloc::vec![(a, b), (b, b2), (b2, a)]);
}

#[test]
fn clear_and_reuse() {
    let mut list = BoundaryList::new();
    list.push_back(VertexId(3));
    list.push_back(VertexId(4));
    list.clear();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);

    let a = list.push_back(VertexId(5));
    assert_eq!(list.head(), Some(a));
    assert_eq!(list.to_vec(), alloc::vec![VertexId(5)]);
}
