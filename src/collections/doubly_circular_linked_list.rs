//! A circular doubly-linked list with owned nodes.
//!
//! The `DoublyCircularLinkedList` keeps its nodes in a ring: the last node's
//! `next` is the `head`, and the `head`'s `prev` is the last node. This gives
//! *constant* time access to either end from the single `head` pointer, and
//! lets a node be unlinked through its own back-reference without walking
//! the list again.
//!
//! Ownership of the ring is rooted at `head`. The `prev` links are only a
//! lookup aid and never own the node they point to.
//!
//! Using [Learn Rust With Entirely Too Many Linked Lists]
//!
//! [Learn Rust With Entirely Too Many Linked Lists]: https://rust-unofficial.github.io/too-many-lists/

use std::fmt;

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use core::iter;
use core::marker;
use core::ops::{Index, IndexMut};
use core::ptr::NonNull;

use crate::error::{Error, Result};

/// Creates a `DoublyCircularLinkedList` containing the arguments.
///
/// # Examples
///
/// ```
/// use structures::prelude::*;
///
/// let mut list = doubly_circular![1 => 2 => 3];
/// assert_eq!(list.len(), 3);
///
/// assert_eq!(list.pop_back(), Ok(3));
/// assert_eq!(list.pop_back(), Ok(2));
/// assert_eq!(list.pop_back(), Ok(1));
/// ```
#[macro_export]
macro_rules! doubly_circular {
    () => {
        $crate::collections::doubly_circular_linked_list::DoublyCircularLinkedList::new()
    };
    ($($elem:expr)=>*) => {{
        let mut list = $crate::collections::doubly_circular_linked_list::DoublyCircularLinkedList::new();
        $(list.push_back($elem);)*
        list
    }};
}

/// A circular doubly-linked list with owned nodes.
///
/// Pushing and popping at either end takes *constant* time. Index based
/// access walks from `head` in whichever direction is shorter.
pub struct DoublyCircularLinkedList<T> {
    /// Pointer to the head of the ring, [`None`] if and only if the list is
    /// empty.
    head: Option<NonNull<Node<T>>>,
    /// Number of initialized nodes.
    len: usize,
    /// In order to tell the drop checker that we do own values of type T, and
    /// therefore may drop some T's when we drop.
    _marker: marker::PhantomData<T>,
}

#[derive(Debug)]
struct Node<T> {
    /// Pointer to the next node in sequence, the `head` for the last node.
    next: NonNull<Node<T>>,
    /// Pointer to the previous node in sequence, the last node for `head`.
    prev: NonNull<Node<T>>,
    /// The node's data.
    elem: T,
}

impl<T> Node<T> {
    /// Allocates a node whose `next` and `prev` both point to itself.
    fn alloc(elem: T) -> NonNull<Node<T>> {
        let node = NonNull::from(Box::leak(Box::new(Node {
            next: NonNull::dangling(),
            prev: NonNull::dangling(),
            elem,
        })));

        unsafe {
            (*node.as_ptr()).next = node;
            (*node.as_ptr()).prev = node;
        }

        node
    }
}

impl<T> DoublyCircularLinkedList<T> {
    /// Constructs a new, empty `DoublyCircularLinkedList<T>`.
    ///
    /// The list will not allocate until elements are pushed onto it.
    ///
    /// # Examples
    ///
    /// ```
    /// use structures::prelude::*;
    ///
    /// let list: DoublyCircularLinkedList<i32> = DoublyCircularLinkedList::new();
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self {
            head: None,
            len: 0,
            _marker: marker::PhantomData,
        }
    }

    /// Returns an immutable reference to the first element from the list, or
    /// [`None`] if it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use structures::prelude::*;
    ///
    /// let mut list = doubly_circular![4 => 3];
    /// assert_eq!(list.front(), Some(&4));
    ///
    /// list.clear();
    /// assert_eq!(list.front(), None);
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        unsafe { self.head.map(|head| &(*head.as_ptr()).elem) }
    }

    /// Returns an immutable reference to the last element from the list, or
    /// [`None`] if it is empty.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time. The last node is the `prev` of `head`.
    ///
    /// # Examples
    ///
    /// ```
    /// use structures::prelude::*;
    ///
    /// let mut list = doubly_circular![4 => 3];
    /// assert_eq!(list.back(), Some(&3));
    ///
    /// list.clear();
    /// assert_eq!(list.back(), None);
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        unsafe { self.head.map(|head| &(*(*head.as_ptr()).prev.as_ptr()).elem) }
    }

    /// Prepends an element to the front of the list.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time. The new node is linked between the last node and the
    /// current `head`, then becomes the `head`.
    ///
    /// # Examples
    ///
    /// ```
    /// use structures::prelude::*;
    ///
    /// let mut list = DoublyCircularLinkedList::new();
    /// list.push_front(3);
    /// list.push_front(4);
    ///
    /// assert_eq!(list.pop_front(), Ok(4));
    /// assert_eq!(list.pop_front(), Ok(3));
    /// ```
    pub fn push_front(&mut self, elem: T) {
        let new_node = Node::alloc(elem);

        if let Some(head) = self.head {
            unsafe { self.link_before(head, new_node) };
        }

        self.head = Some(new_node);
        self.len += 1;
    }

    /// Appends an element to the back of the list.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time. Linking before `head` places the node at the back
    /// of the ring.
    ///
    /// # Examples
    ///
    /// ```
    /// use structures::prelude::*;
    ///
    /// let mut list = DoublyCircularLinkedList::new();
    /// list.push_back(3);
    /// list.push_back(4);
    ///
    /// assert_eq!(list.pop_front(), Ok(3));
    /// assert_eq!(list.pop_front(), Ok(4));
    /// ```
    pub fn push_back(&mut self, elem: T) {
        let new_node = Node::alloc(elem);

        match self.head {
            Some(head) => unsafe { self.link_before(head, new_node) },
            None => self.head = Some(new_node),
        }

        self.len += 1;
    }

    /// Inserts an element at the provided `index`, between the nodes at
    /// `index - 1` and `index`. An `index` equal to the length of the list
    /// appends the element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIndex`] if `index > len`. The list is left
    /// unchanged in that case.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time to find the successor node, linking itself updates
    /// four pointers in *constant* time.
    ///
    /// # Examples
    ///
    /// ```
    /// use structures::prelude::*;
    ///
    /// let mut list = doubly_circular![1 => 3];
    ///
    /// assert_eq!(list.insert(2, 1), Ok(()));
    /// assert_eq!(list.insert(4, 3), Ok(()));
    /// assert_eq!(list.insert(0, 0), Ok(()));
    /// assert_eq!(list, doubly_circular![0 => 1 => 2 => 3 => 4]);
    ///
    /// assert_eq!(list.insert(9, 6), Err(Error::InvalidIndex { index: 6, len: 5 }));
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
    /// let mut list = doubly_circular![5 => 4];
    ///
    /// assert_eq!(list.pop_front(), Ok(5));
    /// assert_eq!(list.pop_front(), Ok(4));
    /// assert_eq!(list.pop_front(), Err(Error::EmptyContainer));
    /// ```
    pub fn pop_front(&mut self) -> Result<T> {
        match self.head {
            Some(head) => Ok(unsafe { self.unlink(head) }),
            None => Err(Error::EmptyContainer),
        }
    }

    /// Removes the last element from the list and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`] if the list is empty.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time. The last node is reached through `head`'s `prev`.
    ///
    /// # Examples
    ///
    /// ```
    /// use structures::prelude::*;
    ///
    /// let mut list = doubly_circular![5 => 4];
    ///
    /// assert_eq!(list.pop_back(), Ok(4));
    /// assert_eq!(list.pop_back(), Ok(5));
    /// assert_eq!(list.pop_back(), Err(Error::EmptyContainer));
    /// ```
    pub fn pop_back(&mut self) -> Result<T> {
        match self.head {
            Some(head) => Ok(unsafe {
                let last = (*head.as_ptr()).prev;
                self.unlink(last)
            }),
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
    /// Takes *O*(*n*) time to reach the node, the removal itself splices its
    /// predecessor and successor together in *constant* time.
    ///
    /// # Examples
    ///
    /// ```
    /// use structures::prelude::*;
    ///
    /// let mut list = doubly_circular![1 => 2 => 3 => 4];
    ///
    /// assert_eq!(list.pop(2), Ok(3));
    /// assert_eq!(list.pop(3), Err(Error::InvalidIndex { index: 3, len: 3 }));
    /// assert_eq!(list, doubly_circular![1 => 2 => 4]);
    /// ```
    pub fn pop(&mut self, index: usize) -> Result<T> {
        if self.is_empty() {
            return Err(Error::EmptyContainer);
        }

        let node = self.node(index)?;
        Ok(unsafe { self.unlink(node) })
    }

    /// Returns an immutable reference to the element at the provided index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIndex`] if `index >= len`.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time. Indices in the back half of the list are reached
    /// by walking `prev` links from `head`, so at most `len / 2` hops are
    /// taken.
    ///
    /// # Examples
    ///
    /// ```
    /// use structures::prelude::*;
    ///
    /// let list = doubly_circular![1 => 2 => 3 => 4 => 5];
    ///
    /// assert_eq!(list.at(1), Ok(&2));
    /// assert_eq!(list.at(4), Ok(&5));
    /// assert!(list.at(5).is_err());
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
    ///
    /// # Examples
    ///
    /// ```
    /// use structures::prelude::*;
    ///
    /// let mut list = doubly_circular![1 => 2 => 3];
    ///
    /// *list.at_mut(2).unwrap() = 30;
    /// assert_eq!(list.back(), Some(&30));
    /// ```
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let node = self.node(index)?;
        unsafe { Ok(&mut (*node.as_ptr()).elem) }
    }

    /// Moves `head` one node forward, so the first element becomes the last.
    ///
    /// # Examples
    ///
    /// ```
    /// use structures::prelude::*;
    ///
    /// let mut list = doubly_circular![1 => 2 => 3];
    /// list.rotate();
    ///
    /// assert_eq!(list, doubly_circular![2 => 3 => 1]);
    /// ```
    pub fn rotate(&mut self) {
        if let Some(head) = self.head {
            unsafe { self.head = Some((*head.as_ptr()).next) };
        }
    }

    /// Moves `head` one node backward, so the last element becomes the first.
    ///
    /// # Examples
    ///
    /// ```
    /// use structures::prelude::*;
    ///
    /// let mut list = doubly_circular![1 => 2 => 3];
    /// list.rotate_back();
    ///
    /// assert_eq!(list, doubly_circular![3 => 1 => 2]);
    /// ```
    pub fn rotate_back(&mut self) {
        if let Some(head) = self.head {
            unsafe { self.head = Some((*head.as_ptr()).prev) };
        }
    }

    /// Clears the list, removing all nodes.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*len*) time. The entire ring needs to be traversed in order
    /// to release all initialized nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use structures::prelude::*;
    ///
    /// let mut list = doubly_circular![3 => 4 => 5];
    /// assert!(!list.is_empty());
    ///
    /// list.clear();
    /// assert!(list.is_empty());
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

    /// Links `new_node` between `succ` and its predecessor, updating the four
    /// affected pointers. Does not touch `head` or `len`.
    ///
    /// # Safety
    ///
    /// `succ` must be a node of this list and `new_node` a freshly allocated
    /// node that is not part of any ring.
    unsafe fn link_before(&mut self, succ: NonNull<Node<T>>, new_node: NonNull<Node<T>>) {
        let prev = (*succ.as_ptr()).prev;

        (*new_node.as_ptr()).next = succ;
        (*new_node.as_ptr()).prev = prev;
        (*prev.as_ptr()).next = new_node;
        (*succ.as_ptr()).prev = new_node;
    }

    /// Links a new node so it ends up at `index`. `index` must be at most
    /// `len`.
    fn link_at(&mut self, elem: T, index: usize) {
        if index == 0 {
            return self.push_front(elem);
        } else if index == self.len {
            return self.push_back(elem);
        }

        if let Ok(succ) = self.node(index) {
            unsafe { self.link_before(succ, Node::alloc(elem)) };
            self.len += 1;
        }
    }

    /// Splices `node` out of the ring and releases it, returning its element.
    /// If `node` was the `head`, the `head` advances to its successor, or the
    /// list becomes empty if it was the only node.
    ///
    /// # Safety
    ///
    /// `node` must be a node of this list.
    unsafe fn unlink(&mut self, node: NonNull<Node<T>>) -> T {
        if self.len == 1 {
            self.head = None;
        } else {
            let prev = (*node.as_ptr()).prev;
            let next = (*node.as_ptr()).next;

            (*prev.as_ptr()).next = next;
            (*next.as_ptr()).prev = prev;

            if self.head == Some(node) {
                self.head = Some(next);
            }
        }

        self.len -= 1;

        // Node is boxed before being released so the destructor for T can be
        // invoked when returning.
        let boxed_node = Box::from_raw(node.as_ptr());
        boxed_node.elem
        // `boxed_node` handles it's deallocation...
    }

    /// Returns the node at `index`, walking `next` links for the front half of
    /// the list and `prev` links for the back half.
    fn node(&self, index: usize) -> Result<NonNull<Node<T>>> {
        let head = match self.head {
            Some(head) if index < self.len => head,
            _ => {
                return Err(Error::InvalidIndex {
                    index,
                    len: self.len,
                })
            }
        };

        let mut curr = head;
        unsafe {
            if index <= self.len / 2 {
                for _ in 0..index {
                    curr = (*curr.as_ptr()).next;
                }
            } else {
                for _ in index..self.len {
                    curr = (*curr.as_ptr()).prev;
                }
            }
        }

        Ok(curr)
    }

    /// Walks the elements once around the ring, starting at `head`.
    fn elems(&self) -> impl Iterator<Item = &T> + '_ {
        iter::successors(self.head, |node| unsafe { Some((*node.as_ptr()).next) })
            .take(self.len)
            .map(|node| unsafe { &(*node.as_ptr()).elem })
    }
}

impl<T: PartialEq> DoublyCircularLinkedList<T> {
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
    /// let list = doubly_circular![4 => 2 => 1];
    /// assert_eq!(list.find(&2), 1);
    /// assert_eq!(list.find(&5), list.len());
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
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time to find the node. Once found, the node is unlinked
    /// through its own `prev` pointer with no second traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use structures::prelude::*;
    ///
    /// let mut list = doubly_circular![4 => 2 => 1];
    ///
    /// assert_eq!(list.remove(&4), Some(4));
    /// assert_eq!(list.remove(&4), None);
    /// assert_eq!(list, doubly_circular![2 => 1]);
    /// ```
    pub fn remove(&mut self, elem: &T) -> Option<T> {
        let head = self.head?;

        let mut curr = head;
        for _ in 0..self.len {
            unsafe {
                if (*curr.as_ptr()).elem == *elem {
                    return Some(self.unlink(curr));
                }
                curr = (*curr.as_ptr()).next;
            }
        }

        None
    }
}

impl<T: PartialOrd> DoublyCircularLinkedList<T> {
    /// Inserts `elem` before the first element that is not less than it.
    ///
    /// # Examples
    ///
    /// ```
    /// use structures::prelude::*;
    ///
    /// let mut list = DoublyCircularLinkedList::new();
    /// list.insert_sorted(5);
    /// list.insert_sorted(2);
    /// list.insert_sorted(8);
    ///
    /// assert_eq!(list, doubly_circular![2 => 5 => 8]);
    /// ```
    pub fn insert_sorted(&mut self, elem: T) {
        let index = self
            .elems()
            .position(|e| elem.partial_cmp(e) != Some(Ordering::Greater))
            .unwrap_or(self.len);
        self.link_at(elem, index);
    }
}

impl<T> Drop for DoublyCircularLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for DoublyCircularLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DoublyCircularLinkedList<T> {
    fn clone(&self) -> Self {
        self.elems().cloned().collect()
    }
}

impl<T> Extend<T> for DoublyCircularLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.push_back(elem);
        }
    }
}

impl<T> FromIterator<T> for DoublyCircularLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: fmt::Debug> fmt::Debug for DoublyCircularLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.elems()).finish()
    }
}

impl<T: PartialEq> PartialEq for DoublyCircularLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.elems().eq(other.elems())
    }
}

impl<T: Eq> Eq for DoublyCircularLinkedList<T> {}

impl<T: PartialOrd> PartialOrd for DoublyCircularLinkedList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.elems().partial_cmp(other.elems())
    }
}

impl<T: Ord> Ord for DoublyCircularLinkedList<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.elems().cmp(other.elems())
    }
}

impl<T: Hash> Hash for DoublyCircularLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elem in self.elems() {
            elem.hash(state);
        }
    }
}

impl<T> Index<usize> for DoublyCircularLinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.at(index).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<T> IndexMut<usize> for DoublyCircularLinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.at_mut(index).unwrap_or_else(|err| panic!("{err}"))
    }
}

#[allow(dead_code)]
fn assert_properties() {
    fn is_send<T: Send>() {}
    fn is_sync<T: Sync>() {}

    is_send::<DoublyCircularLinkedList<i32>>();
    is_sync::<DoublyCircularLinkedList<i32>>();

    fn doubly_circular_covariant<'a, T>(
        x: DoublyCircularLinkedList<&'static T>,
    ) -> DoublyCircularLinkedList<&'a T> {
        x
    }
}

unsafe impl<T: Send> Send for DoublyCircularLinkedList<T> {}
unsafe impl<T: Sync> Sync for DoublyCircularLinkedList<T> {}
