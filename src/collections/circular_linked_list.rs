//! A circular [singly-linked list] with owned nodes.
//!
//! The last node links back to the `head` instead of ending the chain, so
//! there is no terminating link to stop at. Every traversal is bounded by the
//! tracked length of the list.
//!
//! [singly-linked list]: https://en.wikipedia.org/wiki/Linked_list#Circular_linked_list

use std::fmt;

use core::cmp::Ordering;
use core::iter;
use core::marker;
use core::ops::{Index, IndexMut};
use core::ptr::NonNull;

use crate::error::{Error, Result};

/// Creates a `CircularSinglyLinkedList` containing the arguments.
///
/// # Examples
///
/// ```
/// use structures::prelude::*;
///
/// let mut list = circular![1 => 2 => 3];
/// assert_eq!(list.len(), 3);
///
/// assert_eq!(list.pop_front(), Ok(1));
/// assert_eq!(list.pop_back(), Ok(3));
/// assert_eq!(list.pop_back(), Ok(2));
/// ```
#[macro_export]
macro_rules! circular {
    () => {
        $crate::collections::circular_linked_list::CircularSinglyLinkedList::new()
    };
    ($($elem:expr)=>*) => {{
        let mut list = $crate::collections::circular_linked_list::CircularSinglyLinkedList::new();
        $(list.push_back($elem);)*
        list
    }};
}

/// A circular singly-linked list with owned nodes.
///
/// The list owns every node in its ring. A node is allocated when an element
/// is inserted and released exactly once, when that element is popped,
/// removed or the list is cleared or dropped.
pub struct CircularSinglyLinkedList<T> {
    /// Pointer to the head of the ring, [`None`] if and only if the list is
    /// empty.
    head: Option<NonNull<Node<T>>>,
    /// Number of nodes in the ring.
    len: usize,
    /// In order to tell the drop checker that we do own values of type `T`,
    /// and therefore may drop some `T`'s when we drop.
    _marker: marker::PhantomData<T>,
}

struct Node<T> {
    /// Pointer to the next node. The last node points back to the head, a
    /// single node points to itself.
    next: NonNull<Node<T>>,
    /// Data the node owns.
    elem: T,
}

impl<T> Node<T> {
    /// Allocates a node linked to itself.
    fn alloc(elem: T) -> NonNull<Node<T>> {
        let node = NonNull::from(Box::leak(Box::new(Node {
            next: NonNull::dangling(),
            elem,
        })));

        unsafe {
            (*node.as_ptr()).next = node;
        }

        node
    }
}

impl<T> CircularSinglyLinkedList<T> {
    /// Creates a new, empty `CircularSinglyLinkedList`.
    ///
    /// # Examples
    ///
    /// ```
    /// use structures::prelude::*;
    ///
    /// let list: CircularSinglyLinkedList<i32> = CircularSinglyLinkedList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self {
            head: None,
            len: 0,
            _marker: marker::PhantomData,
        }
    }

    /// Returns an immutable reference to the first element, or [`None`] if
    /// the list is empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        unsafe { self.head.map(|head| &(*head.as_ptr()).elem) }
    }

    /// Returns an immutable reference to the last element, or [`None`] if the
    /// list is empty.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time, the ring is walked up to the node before `head`.
    pub fn back(&self) -> Option<&T> {
        unsafe { self.last().map(|last| &(*last.as_ptr()).elem) }
    }

    /// Prepends an element to the front of the list.
    ///
    /// On an empty list the new node links to itself.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time. The last node has to be found so it can be
    /// re-linked to the new `head`.
    ///
    /// # Examples
    ///
    /// ```
    /// use structures::prelude::*;
    ///
    /// let mut list = CircularSinglyLinkedList::new();
    /// list.push_front(3);
    /// list.push_front(4);
    ///
    /// assert_eq!(list.front(), Some(&4));
    /// assert_eq!(list.back(), Some(&3));
    /// ```
    pub fn push_front(&mut self, elem: T) {
        let new_node = Node::alloc(elem);

        if let Some(last) = self.last() {
            unsafe {
                // There is at least a valid `head` node.
                (*new_node.as_ptr()).next = (*last.as_ptr()).next;
                (*last.as_ptr()).next = new_node;
            }
        }

        self.head = Some(new_node);
        self.len += 1;
    }

    /// Appends an element to the back of the list.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time, the ring is walked to its last node.
    ///
    /// # Examples
    ///
    /// ```
    /// use structures::prelude::*;
    ///
    /// let mut list = CircularSinglyLinkedList::new();
    /// list.push_back(3);
    /// list.push_back(4);
    ///
    /// assert_eq!(list.at(1), Ok(&4));
    /// assert_eq!(list.back(), Some(&4));
    /// ```
    pub fn push_back(&mut self, elem: T) {
        self.link_at(elem, self.len);
    }

    /// Inserts an element at the provided `index`, shifting all elements
    /// after it towards the back. An `index` equal to the length of the list
    /// appends the element right before `head`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIndex`] if `index > len`. The list is left
    /// unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use structures::prelude::*;
    ///
    /// let mut list = circular![1 => 3];
    ///
    /// assert_eq!(list.insert(2, 1), Ok(()));
    /// assert_eq!(list.insert(4, 3), Ok(()));
    /// assert_eq!(list, circular![1 => 2 => 3 => 4]);
    ///
    /// assert_eq!(list.insert(9, 5), Err(Error::InvalidIndex { index: 5, len: 4 }));
    /// ```
    pub fn insert(&mut self, elem: T, index: usize) -> Result<()> {
        if index > self.len {
            return Err(Error::InvalidIndex {
                index,
                len: self.len,
            });
        }

        self.link_at(elem, index);
        Ok(())
    }

    /// Removes the first element and returns it. When the last remaining
    /// node is removed the list goes back to having no `head`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`] if the list is empty.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time. The last node has to be re-linked to the new
    /// `head`.
    ///
    /// # Examples
    ///
    /// ```
    /// use structures::prelude::*;
    ///
    /// let mut list = circular![1 => 2];
    ///
    /// assert_eq!(list.pop_front(), Ok(1));
    /// assert_eq!(list.pop_front(), Ok(2));
    /// assert_eq!(list.pop_front(), Err(Error::EmptyContainer));
    /// ```
    pub fn pop_front(&mut self) -> Result<T> {
        let (Some(head), Some(last)) = (self.head, self.last()) else {
            return Err(Error::EmptyContainer);
        };

        unsafe {
            if self.len == 1 {
                self.head = None;
            } else {
                let new_head = (*head.as_ptr()).next;
                (*last.as_ptr()).next = new_head;
                self.head = Some(new_head);
            }

            self.len -= 1;

            let boxed_node = Box::from_raw(head.as_ptr());
            Ok(boxed_node.elem)
            // `boxed_node` handles it's deallocation...
        }
    }

    /// Removes the last element and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use structures::prelude::*;
    ///
    /// let mut list = circular![1 => 2];
    ///
    /// assert_eq!(list.pop_back(), Ok(2));
    /// assert_eq!(list.pop_back(), Ok(1));
    /// assert_eq!(list.pop_back(), Err(Error::EmptyContainer));
    /// ```
    pub fn pop_back(&mut self) -> Result<T> {
        match self.len.checked_sub(1) {
            Some(last) => self.pop(last),
            None => Err(Error::EmptyContainer),
        }
    }

    /// Removes the element at the provided `index` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`] if the list is empty, or
    /// [`Error::InvalidIndex`] if `index >= len`.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time. The ring is walked `index - 1` hops from `head` to
    /// reach the predecessor of the removed node.
    ///
    /// # Examples
    ///
    /// ```
    /// use structures::prelude::*;
    ///
    /// let mut list = circular![1 => 2 => 3];
    ///
    /// assert_eq!(list.pop(1), Ok(2));
    /// assert_eq!(list.pop(2), Err(Error::InvalidIndex { index: 2, len: 2 }));
    /// assert_eq!(list, circular![1 => 3]);
    /// ```
    pub fn pop(&mut self, index: usize) -> Result<T> {
        let Some(head) = self.head else {
            return Err(Error::EmptyContainer);
        };

        if index >= self.len {
            return Err(Error::InvalidIndex {
                index,
                len: self.len,
            });
        } else if index == 0 {
            return self.pop_front();
        }

        unsafe {
            let prev = Self::walk(head, index - 1);
            let popped = (*prev.as_ptr()).next;

            // If `popped` was the last node, `prev` now links back to `head`.
            (*prev.as_ptr()).next = (*popped.as_ptr()).next;
            self.len -= 1;

            let boxed_node = Box::from_raw(popped.as_ptr());
            Ok(boxed_node.elem)
        }
    }

    /// Returns an immutable reference to the element at the provided index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIndex`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use structures::prelude::*;
    ///
    /// let list = circular![1 => 2 => 3];
    ///
    /// assert_eq!(list.at(2), Ok(&3));
    /// assert_eq!(list.at(3), Err(Error::InvalidIndex { index: 3, len: 3 }));
    /// ```
    pub fn at(&self, index: usize) -> Result<&T> {
        let node = self.node(index)?;
        unsafe { Ok(&(*node.as_ptr()).elem) }
    }

    /// Returns a mutable reference to the element at the provided index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIndex`] if `index >= len`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let node = self.node(index)?;
        unsafe { Ok(&mut (*node.as_ptr()).elem) }
    }

    /// Moves `head` one node forward, so the former first element becomes the
    /// last one.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time. Only the `head` pointer moves, the ring itself is
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use structures::prelude::*;
    ///
    /// let mut list = circular![1 => 2 => 3];
    /// list.rotate();
    ///
    /// assert_eq!(list, circular![2 => 3 => 1]);
    /// ```
    pub fn rotate(&mut self) {
        if let Some(head) = self.head {
            unsafe {
                self.head = Some((*head.as_ptr()).next);
            }
        }
    }

    /// Clears the list, releasing every node of the ring.
    ///
    /// # Examples
    ///
    /// ```
    /// use structures::prelude::*;
    ///
    /// let mut list = circular![1 => 2 => 3];
    /// list.clear();
    ///
    /// assert!(list.is_empty());
    /// assert_eq!(list.front(), None);
    /// ```
    pub fn clear(&mut self) {
        let remaining = self.len;
        self.len = 0;

        if let Some(mut curr) = self.head.take() {
            for _ in 0..remaining {
                unsafe {
                    let boxed_node = Box::from_raw(curr.as_ptr());
                    curr = boxed_node.next;
                }
            }
        }
    }

    /// Returns the number of nodes in the list.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list contains no nodes.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Links a new node so it ends up at `index`. `index` must be at most
    /// `len`.
    fn link_at(&mut self, elem: T, index: usize) {
        match self.head {
            Some(head) if index > 0 => unsafe {
                let new_node = Node::alloc(elem);
                let prev = Self::walk(head, index - 1);

                (*new_node.as_ptr()).next = (*prev.as_ptr()).next;
                (*prev.as_ptr()).next = new_node;

                self.len += 1;
            },
            _ => self.push_front(elem),
        }
    }

    /// Returns the node `hops` links away from `from`.
    ///
    /// The loop is bounded by `hops` only; callers keep `hops` below the
    /// length of the list.
    fn walk(from: NonNull<Node<T>>, hops: usize) -> NonNull<Node<T>> {
        let mut curr = from;
        for _ in 0..hops {
            unsafe {
                curr = (*curr.as_ptr()).next;
            }
        }
        curr
    }

    fn node(&self, index: usize) -> Result<NonNull<Node<T>>> {
        match self.head {
            Some(head) if index < self.len => Ok(Self::walk(head, index)),
            _ => Err(Error::InvalidIndex {
                index,
                len: self.len,
            }),
        }
    }

    /// Returns the node whose `next` is `head`.
    fn last(&self) -> Option<NonNull<Node<T>>> {
        self.head.map(|head| Self::walk(head, self.len - 1))
    }

    /// Walks the elements once around the ring, starting at `head`.
    fn elems(&self) -> impl Iterator<Item = &T> + '_ {
        iter::successors(self.head, |node| unsafe { Some((*node.as_ptr()).next) })
            .take(self.len)
            .map(|node| unsafe { &(*node.as_ptr()).elem })
    }
}

impl<T: PartialEq> CircularSinglyLinkedList<T> {
    /// Returns the index of the first element equal to `elem`, or [`None`] if
    /// there is none.
    pub fn position(&self, elem: &T) -> Option<usize> {
        self.elems().position(|e| e == elem)
    }

    /// Returns the index of the first element equal to `elem`, or the length
    /// of the list if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use structures::prelude::*;
    ///
    /// let list = circular![4 => 2 => 1];
    /// assert_eq!(list.find(&1), 2);
    /// assert_eq!(list.find(&9), 3);
    /// ```
    pub fn find(&self, elem: &T) -> usize {
        self.position(elem).unwrap_or(self.len)
    }

    /// Returns `true` if the list holds an element equal to `elem`.
    pub fn contains(&self, elem: &T) -> bool {
        self.position(elem).is_some()
    }

    /// Removes the first element equal to `elem` and returns it, or [`None`]
    /// if the list holds no such element.
    ///
    /// # Examples
    ///
    /// ```
    /// use structures::prelude::*;
    ///
    /// let mut list = circular![4 => 2 => 1];
    ///
    /// assert_eq!(list.remove(&1), Some(1));
    /// assert_eq!(list.remove(&1), None);
    /// assert_eq!(list, circular![4 => 2]);
    /// ```
    pub fn remove(&mut self, elem: &T) -> Option<T> {
        let index = self.position(elem)?;
        self.pop(index).ok()
    }
}

impl<T: PartialOrd> CircularSinglyLinkedList<T> {
    /// Inserts `elem` before the first element that is not less than it.
    ///
    /// # Examples
    ///
    /// ```
    /// use structures::prelude::*;
    ///
    /// let mut list = CircularSinglyLinkedList::new();
    /// list.insert_sorted(5);
    /// list.insert_sorted(2);
    /// list.insert_sorted(8);
    ///
    /// assert_eq!(list, circular![2 => 5 => 8]);
    /// ```
    pub fn insert_sorted(&mut self, elem: T) {
        let index = self
            .elems()
            .position(|e| elem.partial_cmp(e) != Some(Ordering::Greater))
            .unwrap_or(self.len);
        self.link_at(elem, index);
    }
}

impl<T> Drop for CircularSinglyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for CircularSinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for CircularSinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.elems().cloned().collect()
    }
}

impl<T> Extend<T> for CircularSinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut iter = iter.into_iter();

        let mut last = match self.last() {
            Some(last) => last,
            None => match iter.next() {
                Some(elem) => {
                    self.push_front(elem);
                    match self.head {
                        Some(head) => head,
                        None => return,
                    }
                }
                None => return,
            },
        };

        for elem in iter {
            let new_node = Node::alloc(elem);
            unsafe {
                (*new_node.as_ptr()).next = (*last.as_ptr()).next;
                (*last.as_ptr()).next = new_node;
            }
            last = new_node;
            self.len += 1;
        }
    }
}

impl<T> FromIterator<T> for CircularSinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularSinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.elems()).finish()
    }
}

impl<T: PartialEq> PartialEq for CircularSinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.elems().eq(other.elems())
    }
}

impl<T: Eq> Eq for CircularSinglyLinkedList<T> {}

impl<T> Index<usize> for CircularSinglyLinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.at(index).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<T> IndexMut<usize> for CircularSinglyLinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.at_mut(index).unwrap_or_else(|err| panic!("{err}"))
    }
}

unsafe impl<T: Send> Send for CircularSinglyLinkedList<T> {}
unsafe impl<T: Sync> Sync for CircularSinglyLinkedList<T> {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::collections::testing::DropCounter;

    /// Following `next` exactly `len` times from `head` must return to
    /// `head`, without meeting it earlier.
    fn assert_ring<T>(list: &CircularSinglyLinkedList<T>) {
        let Some(head) = list.head else {
            assert_eq!(list.len, 0);
            return;
        };

        assert!(list.len > 0);
        let mut curr = head;
        for hop in 0..list.len {
            if hop > 0 {
                assert_ne!(curr, head, "ring closed after {hop} hops");
            }
            curr = unsafe { (*curr.as_ptr()).next };
        }
        assert_eq!(curr, head);
    }

    fn contents<T: Clone>(list: &CircularSinglyLinkedList<T>) -> Vec<T> {
        list.elems().cloned().collect()
    }

    #[test]
    fn test_basic_front() {
        let mut list = CircularSinglyLinkedList::new();

        // Try to break an empty list
        assert_eq!(list.pop_front(), Err(Error::EmptyContainer));
        assert_eq!(list.len(), 0);
        assert_ring(&list);

        // Try to break a one item list
        list.push_front(10);
        assert_ring(&list);
        assert_eq!(list.front(), list.back());
        assert_eq!(list.pop_front(), Ok(10));
        assert_ring(&list);
        assert!(list.head.is_none());
        assert_eq!(list.pop_front(), Err(Error::EmptyContainer));

        // Mess around
        list.push_front(10);
        list.push_front(20);
        list.push_front(30);
        assert_ring(&list);
        assert_eq!(contents(&list), [30, 20, 10]);
        assert_eq!(list.pop_front(), Ok(30));
        assert_ring(&list);
        list.push_front(40);
        assert_eq!(list.pop_front(), Ok(40));
        assert_eq!(list.pop_front(), Ok(20));
        assert_eq!(list.pop_front(), Ok(10));
        assert_ring(&list);
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_pop_front_keeps_ring() {
        let mut list = circular![1 => 2 => 3];
        assert_eq!(list.pop_front(), Ok(1));
        assert_ring(&list);

        // two hops from the new head lead back to it
        let head = list.head.unwrap();
        assert_eq!(CircularSinglyLinkedList::walk(head, 2), head);
        assert_eq!(list.front(), Some(&2));
        assert_eq!(list.back(), Some(&3));
    }

    #[test]
    fn test_insert_and_pop_everywhere() {
        let mut list = CircularSinglyLinkedList::new();
        assert_eq!(
            list.insert(1, 1),
            Err(Error::InvalidIndex { index: 1, len: 0 })
        );
        assert_ring(&list);

        list.insert(2, 0).unwrap();
        list.insert(0, 0).unwrap();
        list.insert(3, 2).unwrap();
        list.insert(1, 1).unwrap();
        assert_ring(&list);
        assert_eq!(contents(&list), [0, 1, 2, 3]);

        assert_eq!(list.pop(4), Err(Error::InvalidIndex { index: 4, len: 4 }));
        assert_eq!(contents(&list), [0, 1, 2, 3]);

        assert_eq!(list.pop(3), Ok(3));
        assert_ring(&list);
        assert_eq!(list.back(), Some(&2));
        assert_eq!(list.pop(1), Ok(1));
        assert_ring(&list);
        assert_eq!(list.pop_back(), Ok(2));
        assert_ring(&list);
        assert_eq!(list.pop_back(), Ok(0));
        assert_ring(&list);
        assert_eq!(list.pop_back(), Err(Error::EmptyContainer));
        assert_eq!(list.pop(0), Err(Error::EmptyContainer));
    }

    #[test]
    fn test_at() {
        let mut list = circular![1 => 2 => 3];
        assert_eq!(list.at(0), Ok(&1));
        assert_eq!(list.at(2), Ok(&3));
        assert!(list.at(3).is_err());

        *list.at_mut(1).unwrap() = 20;
        list[2] = 30;
        assert_eq!(contents(&list), [1, 20, 30]);

        let empty: CircularSinglyLinkedList<i32> = CircularSinglyLinkedList::new();
        assert_eq!(empty.at(0), Err(Error::InvalidIndex { index: 0, len: 0 }));
    }

    #[test]
    fn test_find_remove() {
        let mut list = circular![1 => 2 => 3];
        assert_eq!(list.find(&3), 2);
        assert_eq!(list.find(&7), 3);
        assert!(list.contains(&1));
        assert!(!list.contains(&7));

        assert_eq!(list.remove(&7), None);
        assert_eq!(list.len(), 3);

        assert_eq!(list.remove(&3), Some(3));
        assert_ring(&list);
        assert_eq!(list.remove(&1), Some(1));
        assert_ring(&list);
        assert_eq!(contents(&list), [2]);
        assert_eq!(list.remove(&2), Some(2));
        assert_ring(&list);
        assert!(list.is_empty());
    }

    #[test]
    fn test_insert_sorted() {
        let mut list = CircularSinglyLinkedList::new();
        for elem in [5, 2, 8, 1, 9, 5] {
            list.insert_sorted(elem);
            assert_ring(&list);
        }
        assert_eq!(contents(&list), [1, 2, 5, 5, 8, 9]);
    }

    #[test]
    fn test_rotate() {
        let mut list = circular![1 => 2 => 3];
        list.rotate();
        assert_ring(&list);
        assert_eq!(contents(&list), [2, 3, 1]);
        list.rotate();
        list.rotate();
        assert_eq!(contents(&list), [1, 2, 3]);

        let mut empty: CircularSinglyLinkedList<i32> = CircularSinglyLinkedList::new();
        empty.rotate();
        assert_ring(&empty);
    }

    #[test]
    fn test_extend_clone_debug() {
        let mut list: CircularSinglyLinkedList<i32> = (1..=3).collect();
        assert_ring(&list);
        list.extend([4, 5]);
        assert_ring(&list);
        assert_eq!(list.len(), 5);
        assert_eq!(format!("{list:?}"), "[1, 2, 3, 4, 5]");

        let copy = list.clone();
        assert_ring(&copy);
        assert_eq!(copy, list);

        let mut empty = CircularSinglyLinkedList::new();
        empty.extend(Vec::<i32>::new());
        assert_ring(&empty);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_releases_every_node_once() {
        let drops = DropCounter::new();

        let mut list = CircularSinglyLinkedList::new();
        for id in 0..5 {
            list.push_back(drops.track(id));
        }

        assert_eq!(list.pop_back().map(|t| t.id()), Ok(4));
        assert_eq!(drops.count(), 1);
        assert_eq!(list.pop_front().map(|t| t.id()), Ok(0));
        assert_eq!(drops.count(), 2);

        list.clear();
        assert_eq!(drops.count(), 5);
        assert_ring(&list);

        list.push_back(drops.track(7));
        list.push_back(drops.track(8));
        drop(list);
        assert_eq!(drops.count(), 7);
    }
}
