//! A FIFO queue built on a singly-linked chain of owned nodes.
//!
//! The chain is owned from `head` onwards. `tail` is a non-owning alias of
//! the last node, kept only so that enqueueing does not need to walk the
//! chain.

use std::fmt;

use core::iter;
use core::ptr::NonNull;

use crate::error::{Error, Result};

/// Creates a `LinkedQueue` containing the arguments, enqueued from left to
/// right.
///
/// # Examples
///
/// ```
/// use structures::prelude::*;
///
/// let mut queue = queue![1 => 2 => 3];
///
/// assert_eq!(queue.dequeue(), Ok(1));
/// assert_eq!(queue.dequeue(), Ok(2));
/// assert_eq!(queue.dequeue(), Ok(3));
/// ```
#[macro_export]
macro_rules! queue {
    () => {
        $crate::collections::linked_queue::LinkedQueue::new()
    };
    ($($elem:expr)=>*) => {{
        let mut queue = $crate::collections::linked_queue::LinkedQueue::new();
        $(queue.enqueue($elem);)*
        queue
    }};
}

type Link<T> = Option<Box<Node<T>>>;

/// A FIFO queue. Elements are enqueued at the `tail` and dequeued at the
/// `head`, both in *constant* time.
pub struct LinkedQueue<T> {
    /// Owning link to the first node.
    head: Link<T>,
    /// Alias of the last node, [`None`] if and only if the queue is empty.
    tail: Option<NonNull<Node<T>>>,
    len: usize,
}

struct Node<T> {
    next: Link<T>,
    elem: T,
}

impl<T> LinkedQueue<T> {
    /// Creates a new, empty `LinkedQueue`.
    #[inline]
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Appends an element at the back of the queue.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time. The new node is linked after `tail`, or becomes both
    /// `head` and `tail` if the queue was empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use structures::prelude::*;
    ///
    /// let mut queue = LinkedQueue::new();
    /// queue.enqueue(1);
    /// queue.enqueue(2);
    ///
    /// assert_eq!(queue.front(), Ok(&1));
    /// assert_eq!(queue.back(), Ok(&2));
    /// ```
    pub fn enqueue(&mut self, elem: T) {
        let slot = match self.tail {
            // The alias is only ever set to a node owned by the chain.
            Some(tail) => unsafe { &mut (*tail.as_ptr()).next },
            None => &mut self.head,
        };

        let new_node = slot.insert(Box::new(Node { next: None, elem }));
        self.tail = Some(NonNull::from(&mut **new_node));
        self.len += 1;
    }

    /// Removes the element at the front of the queue and returns it. Once the
    /// last element is dequeued, the `tail` alias is reset as well.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`] if the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use structures::prelude::*;
    ///
    /// let mut queue = queue![1 => 2];
    ///
    /// assert_eq!(queue.dequeue(), Ok(1));
    /// assert_eq!(queue.front(), Ok(&2));
    /// assert_eq!(queue.dequeue(), Ok(2));
    /// assert_eq!(queue.front(), Err(Error::EmptyContainer));
    /// ```
    pub fn dequeue(&mut self) -> Result<T> {
        let node = self.head.take().ok_or(Error::EmptyContainer)?;
        let Node { next, elem } = *node;

        self.head = next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;

        Ok(elem)
    }

    /// Returns a reference to the element at the front of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`] if the queue is empty.
    pub fn front(&self) -> Result<&T> {
        self.head
            .as_deref()
            .map(|node| &node.elem)
            .ok_or(Error::EmptyContainer)
    }

    /// Returns a mutable reference to the element at the front of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`] if the queue is empty.
    pub fn front_mut(&mut self) -> Result<&mut T> {
        self.head
            .as_deref_mut()
            .map(|node| &mut node.elem)
            .ok_or(Error::EmptyContainer)
    }

    /// Returns a reference to the element at the back of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`] if the queue is empty.
    pub fn back(&self) -> Result<&T> {
        unsafe {
            self.tail
                .map(|tail| &(*tail.as_ptr()).elem)
                .ok_or(Error::EmptyContainer)
        }
    }

    /// Returns a mutable reference to the element at the back of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`] if the queue is empty.
    pub fn back_mut(&mut self) -> Result<&mut T> {
        unsafe {
            self.tail
                .map(|tail| &mut (*tail.as_ptr()).elem)
                .ok_or(Error::EmptyContainer)
        }
    }

    /// Dequeues every element until the queue is empty.
    pub fn clear(&mut self) {
        while self.dequeue().is_ok() {}
    }

    /// Returns the number of elements in the queue.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the queue holds no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Walks the elements from front to back.
    fn elems(&self) -> impl Iterator<Item = &T> + '_ {
        iter::successors(self.head.as_deref(), |node| node.next.as_deref()).map(|node| &node.elem)
    }
}

impl<T> Drop for LinkedQueue<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedQueue<T> {
    fn clone(&self) -> Self {
        self.elems().cloned().collect()
    }
}

impl<T> Extend<T> for LinkedQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.enqueue(elem);
        }
    }
}

impl<T> FromIterator<T> for LinkedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.elems()).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.elems().eq(other.elems())
    }
}

impl<T: Eq> Eq for LinkedQueue<T> {}

unsafe impl<T: Send> Send for LinkedQueue<T> {}
unsafe impl<T: Sync> Sync for LinkedQueue<T> {}
