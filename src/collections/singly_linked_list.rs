//! A [singly-linked list] with owned nodes.
//!
//! Every node is owned by exactly one slot: either the list's `head`, or the
//! `next` field of the node before it. Unlinking a node moves it out of its
//! slot, so a released node can never be reached again.
//!
//! [singly-linked list]: https://en.wikipedia.org/wiki/Linked_list

use std::fmt;

use core::cmp::Ordering;
use core::iter;
use core::ops::{Index, IndexMut};

use crate::error::{Error, Result};

/// Creates a `SinglyLinkedList` containing the arguments.
///
/// # Examples
///
/// ```
/// use structures::prelude::*;
///
/// let mut list = singly![1 => 2 => 3];
/// assert_eq!(list.len(), 3);
///
/// assert_eq!(list.pop_front(), Ok(1));
/// assert_eq!(list.pop_front(), Ok(2));
/// assert_eq!(list.pop_front(), Ok(3));
/// ```
#[macro_export]
macro_rules! singly {
    () => {
        $crate::collections::singly_linked_list::SinglyLinkedList::new()
    };
    ($($elem:expr)=>*) => {{
        let mut singly = $crate::collections::singly_linked_list::SinglyLinkedList::new();
        $(singly.push_back($elem);)*
        singly
    }};
}

type Link<T> = Option<Box<Node<T>>>;

/// A [singly-linked list] with owned nodes.
///
/// The list only keeps a reference to its `head`, so every index based
/// operation, including [`push_back`](SinglyLinkedList::push_back) and
/// [`pop_back`](SinglyLinkedList::pop_back), walks the chain from the front.
///
/// [singly-linked list]: https://en.wikipedia.org/wiki/Linked_list
pub struct SinglyLinkedList<T> {
    /// Owning link to the first node.
    head: Link<T>,
    /// Number of allocated nodes in the list.
    len: usize,
}

struct Node<T> {
    /// Owning link to the next node.
    next: Link<T>,
    /// Data the node owns.
    elem: T,
}

impl<T> SinglyLinkedList<T> {
    /// Creates a new, empty `SinglyLinkedList`.
    ///
    /// The list will not allocate until elements are pushed onto it.
    ///
    /// # Examples
    ///
    /// ```
    /// use structures::prelude::*;
    ///
    /// let list: SinglyLinkedList<i32> = SinglyLinkedList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Returns an immutable reference to the first element from the list, or
    /// [`None`] if it is empty.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time. The list maintains a reference to the `head`, or
    /// first node, making it a *constant* time operation.
    ///
    /// # Examples
    ///
    /// ```
    /// use structures::prelude::*;
    ///
    /// let mut list = singly![4 => 3];
    /// assert_eq!(list.front(), Some(&4));
    ///
    /// list.clear();
    /// assert_eq!(list.front(), None);
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.elem)
    }

    /// Returns a mutable reference to the first element from the list, or
    /// [`None`] if it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use structures::prelude::*;
    ///
    /// let mut list = singly![4 => 3];
    ///
    /// if let Some(front) = list.front_mut() {
    ///     *front = 7;
    /// }
    /// assert_eq!(list.at(0), Ok(&7));
    /// ```
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_deref_mut().map(|node| &mut node.elem)
    }

    /// Prepends an element to the front of the list.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time. A singly linked list can prepend nodes in *constant*
    /// time since only the `head` link is replaced, regardless of the number
    /// of nodes within the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use structures::prelude::*;
    ///
    /// let mut list: SinglyLinkedList<i32> = SinglyLinkedList::new();
    /// list.push_front(3);
    /// list.push_front(4);
    ///
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.pop_front(), Ok(4));
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn push_front(&mut self, elem: T) {
        self.link_at(elem, 0);
    }

    /// Appends an element to the back of the list.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time. No `tail` reference is maintained, so the list is
    /// traversed to its last node before the new node is linked in.
    ///
    /// # Examples
    ///
    /// ```
    /// use structures::prelude::*;
    ///
    /// let mut list: SinglyLinkedList<i32> = SinglyLinkedList::new();
    /// list.push_back(3);
    /// list.push_back(4);
    ///
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.pop_front(), Ok(3));
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn push_back(&mut self, elem: T) {
        self.link_at(elem, self.len);
    }

    /// Inserts an element at the provided `index` into the list, shifting all
    /// elements after it towards the back. An `index` equal to the length of
    /// the list appends the element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIndex`] if `index > len`. The list is left
    /// unchanged in that case.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time. The list is linearly traversed, following links
    /// until reaching the slot corresponding to the index. Insertion itself is
    /// a *constant* time operation, since only links are replaced.
    ///
    /// # Examples
    ///
    /// ```
    /// use structures::prelude::*;
    ///
    /// let mut list = singly![4 => 2 => 1];
    ///
    /// assert_eq!(list.insert(3, 1), Ok(()));
    /// assert_eq!(list.at(1), Ok(&3));
    /// assert_eq!(list.insert(0, 4), Ok(()));
    /// assert_eq!(list.at(4), Ok(&0));
    ///
    /// assert_eq!(list.insert(9, 9), Err(Error::InvalidIndex { index: 9, len: 5 }));
    /// assert_eq!(list.len(), 5);
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

    /// Removes the first element from the list and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`] if the list is empty.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use structures::prelude::*;
    ///
    /// let mut list = singly![5 => 4];
    ///
    /// assert_eq!(list.pop_front(), Ok(5));
    /// assert_eq!(list.pop_front(), Ok(4));
    /// assert_eq!(list.pop_front(), Err(Error::EmptyContainer));
    /// ```
    pub fn pop_front(&mut self) -> Result<T> {
        self.pop(0)
    }

    /// Removes the last element from the list and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`] if the list is empty.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time, the list is traversed up to the last node.
    ///
    /// # Examples
    ///
    /// ```
    /// use structures::prelude::*;
    ///
    /// let mut list = singly![5 => 4];
    ///
    /// assert_eq!(list.pop_back(), Ok(4));
    /// assert_eq!(list.pop_back(), Ok(5));
    /// assert_eq!(list.pop_back(), Err(Error::EmptyContainer));
    /// ```
    pub fn pop_back(&mut self) -> Result<T> {
        match self.len.checked_sub(1) {
            Some(last) => self.pop(last),
            None => Err(Error::EmptyContainer),
        }
    }

    /// Removes the element at the provided `index` from the list and returns
    /// it, shifting all elements after it towards the front.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`] if the list is empty, or
    /// [`Error::InvalidIndex`] if `index >= len`.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time. The list is linearly traversed, following links
    /// until reaching the node corresponding to the index. Removal itself is
    /// a *constant* time operation.
    ///
    /// # Examples
    ///
    /// ```
    /// use structures::prelude::*;
    ///
    /// let mut list = singly![4 => 3 => 2 => 1];
    ///
    /// assert_eq!(list.pop(1), Ok(3));
    /// assert_eq!(list.pop(2), Ok(1));
    /// assert_eq!(list.pop(2), Err(Error::InvalidIndex { index: 2, len: 2 }));
    /// assert_eq!(list.pop(1), Ok(2));
    /// assert_eq!(list.pop(0), Ok(4));
    ///
    /// assert_eq!(list.pop(0), Err(Error::EmptyContainer));
    /// ```
    pub fn pop(&mut self, index: usize) -> Result<T> {
        let len = self.len;
        if len == 0 {
            return Err(Error::EmptyContainer);
        } else if index >= len {
            return Err(Error::InvalidIndex { index, len });
        }

        let slot = self.slot_mut(index);
        let node = slot.take().ok_or(Error::InvalidIndex { index, len })?;
        let Node { next, elem } = *node;
        *slot = next;

        self.len -= 1;
        Ok(elem)
        // the unlinked node's box was released by the destructure above...
    }

    /// Returns an immutable reference to the element at the provided index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIndex`] if `index >= len`.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time. The list is linearly traversed, following links
    /// until reaching the node corresponding to the index.
    ///
    /// # Examples
    ///
    /// ```
    /// use structures::prelude::*;
    ///
    /// let mut list = SinglyLinkedList::new();
    /// assert_eq!(list.at(0), Err(Error::InvalidIndex { index: 0, len: 0 }));
    ///
    /// list.push_front(2);
    /// list.push_front(3);
    /// list.push_front(4);
    ///
    /// assert_eq!(list.at(0), Ok(&4));
    /// assert_eq!(list.at(1), Ok(&3));
    /// assert_eq!(list.at(2), Ok(&2));
    /// assert!(list.at(20).is_err());
    /// ```
    pub fn at(&self, index: usize) -> Result<&T> {
        self.node(index)
            .map(|node| &node.elem)
            .ok_or(Error::InvalidIndex {
                index,
                len: self.len,
            })
    }

    /// Returns a mutable reference to the element at the provided index.
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
    /// let mut list = singly![1 => 2];
    ///
    /// *list.at_mut(1).unwrap() = 5;
    /// assert_eq!(list.at(1), Ok(&5));
    /// assert!(list.at_mut(2).is_err());
    /// ```
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len;
        self.node_mut(index)
            .map(|node| &mut node.elem)
            .ok_or(Error::InvalidIndex { index, len })
    }

    /// Clears the list, releasing all nodes.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time. Every node is unlinked and released one after the
    /// other, without recursion.
    ///
    /// # Examples
    ///
    /// ```
    /// use structures::prelude::*;
    ///
    /// let mut list = singly![3 => 4 => 5];
    /// assert!(!list.is_empty());
    ///
    /// list.clear();
    /// assert!(list.is_empty());
    /// ```
    pub fn clear(&mut self) {
        let mut curr = self.head.take();
        while let Some(mut node) = curr {
            curr = node.next.take();
        }
        self.len = 0;
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

    /// Links a new node into the slot at `index`. `index` must be at most
    /// `len`.
    fn link_at(&mut self, elem: T, index: usize) {
        let slot = self.slot_mut(index);
        let next = slot.take();
        *slot = Some(Box::new(Node { next, elem }));
        self.len += 1;
    }

    /// Returns the slot that owns the node at `index`, or the empty slot after
    /// the last node when `index == len`.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time. The list is linearly traversed, following links
    /// until reaching the slot corresponding to the index.
    fn slot_mut(&mut self, index: usize) -> &mut Link<T> {
        let mut slot = &mut self.head;
        for _ in 0..index {
            match slot {
                Some(node) => slot = &mut node.next,
                None => break,
            }
        }
        slot
    }

    fn node(&self, index: usize) -> Option<&Node<T>> {
        let mut curr = self.head.as_deref();
        for _ in 0..index {
            curr = curr?.next.as_deref();
        }
        curr
    }

    fn node_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        let mut curr = self.head.as_deref_mut();
        for _ in 0..index {
            curr = curr?.next.as_deref_mut();
        }
        curr
    }

    /// Walks the elements from front to back.
    fn elems(&self) -> impl Iterator<Item = &T> + '_ {
        iter::successors(self.head.as_deref(), |node| node.next.as_deref()).map(|node| &node.elem)
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    /// Returns the index of the first element equal to `elem`, or [`None`] if
    /// there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use structures::prelude::*;
    ///
    /// let list = singly![4 => 2 => 2];
    /// assert_eq!(list.position(&2), Some(1));
    /// assert_eq!(list.position(&7), None);
    /// ```
    pub fn position(&self, elem: &T) -> Option<usize> {
        self.elems().position(|e| e == elem)
    }

    /// Returns the index of the first element equal to `elem`, or the length
    /// of the list if there is none.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time. The list is linearly traversed until a matching
    /// node is found or every node has been checked.
    ///
    /// # Examples
    ///
    /// ```
    /// use structures::prelude::*;
    ///
    /// let list = singly![4 => 2 => 1];
    /// assert_eq!(list.find(&2), 1);
    /// assert_eq!(list.find(&9), list.len());
    /// ```
    pub fn find(&self, elem: &T) -> usize {
        self.position(elem).unwrap_or(self.len)
    }

    /// Returns `true` if the list holds an element equal to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// use structures::prelude::*;
    ///
    /// let list = singly![4 => 2 => 1];
    /// assert!(list.contains(&4));
    /// assert!(!list.contains(&3));
    /// ```
    pub fn contains(&self, elem: &T) -> bool {
        self.position(elem).is_some()
    }

    /// Removes the first element equal to `elem` and returns it, or [`None`]
    /// if the list holds no such element. A missing element is not an error
    /// and leaves the list unchanged.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time. The list is linearly traversed, following links
    /// until reaching the node corresponding to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// use structures::prelude::*;
    ///
    /// let mut list = singly![4 => 2 => 1];
    /// assert_eq!(list.remove(&0), None);
    /// assert_eq!(list.len(), 3);
    ///
    /// assert_eq!(list.remove(&2), Some(2));
    /// assert_eq!(list.at(1), Ok(&1));
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn remove(&mut self, elem: &T) -> Option<T> {
        let index = self.position(elem)?;
        self.pop(index).ok()
    }
}

impl<T: PartialOrd> SinglyLinkedList<T> {
    /// Inserts `elem` before the first element that is not less than it.
    ///
    /// If the list is sorted in non-decreasing order, it stays sorted.
    ///
    /// # Examples
    ///
    /// ```
    /// use structures::prelude::*;
    ///
    /// let mut list = SinglyLinkedList::new();
    /// list.insert_sorted(5);
    /// list.insert_sorted(2);
    /// list.insert_sorted(8);
    ///
    /// assert_eq!(list, singly![2 => 5 => 8]);
    /// ```
    pub fn insert_sorted(&mut self, elem: T) {
        let index = self
            .elems()
            .position(|e| elem.partial_cmp(e) != Some(Ordering::Greater))
            .unwrap_or(self.len);
        self.link_at(elem, index);
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.elems().cloned().collect()
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut added = 0;
        let mut slot = self.slot_mut(self.len);
        for elem in iter {
            let node = slot.insert(Box::new(Node { next: None, elem }));
            slot = &mut node.next;
            added += 1;
        }
        self.len += added;
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.elems()).finish()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.elems().eq(other.elems())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T> Index<usize> for SinglyLinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.at(index).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<T> IndexMut<usize> for SinglyLinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.at_mut(index).unwrap_or_else(|err| panic!("{err}"))
    }
}
