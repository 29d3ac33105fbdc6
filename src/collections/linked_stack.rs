//! A LIFO stack built on a singly-linked chain of owned nodes.

use std::fmt;

use core::iter;

use crate::error::{Error, Result};

/// Creates a `LinkedStack` containing the arguments, pushed from left to
/// right so the last argument ends up on top.
///
/// # Examples
///
/// ```
/// use structures::prelude::*;
///
/// let mut stack = stack![1 => 2 => 3];
///
/// assert_eq!(stack.pop(), Ok(3));
/// assert_eq!(stack.pop(), Ok(2));
/// assert_eq!(stack.pop(), Ok(1));
/// ```
#[macro_export]
macro_rules! stack {
    () => {
        $crate::collections::linked_stack::LinkedStack::new()
    };
    ($($elem:expr)=>*) => {{
        let mut stack = $crate::collections::linked_stack::LinkedStack::new();
        $(stack.push($elem);)*
        stack
    }};
}

type Link<T> = Option<Box<Node<T>>>;

/// A LIFO stack. Elements are pushed and popped at the `top` node only, both
/// in *constant* time.
pub struct LinkedStack<T> {
    /// Owning link to the top node.
    top: Link<T>,
    len: usize,
}

struct Node<T> {
    next: Link<T>,
    elem: T,
}

impl<T> LinkedStack<T> {
    /// Creates a new, empty `LinkedStack`.
    #[inline]
    pub const fn new() -> Self {
        Self { top: None, len: 0 }
    }

    /// Pushes an element on top of the stack.
    ///
    /// # Examples
    ///
    /// ```
    /// use structures::prelude::*;
    ///
    /// let mut stack = LinkedStack::new();
    /// stack.push(1);
    /// stack.push(2);
    ///
    /// assert_eq!(stack.top(), Ok(&2));
    /// assert_eq!(stack.len(), 2);
    /// ```
    pub fn push(&mut self, elem: T) {
        let next = self.top.take();
        self.top = Some(Box::new(Node { next, elem }));
        self.len += 1;
    }

    /// Removes the top element and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`] if the stack is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use structures::prelude::*;
    ///
    /// let mut stack = stack![1];
    ///
    /// assert_eq!(stack.pop(), Ok(1));
    /// assert_eq!(stack.pop(), Err(Error::EmptyContainer));
    /// ```
    pub fn pop(&mut self) -> Result<T> {
        let node = self.top.take().ok_or(Error::EmptyContainer)?;
        let Node { next, elem } = *node;

        self.top = next;
        self.len -= 1;

        Ok(elem)
    }

    /// Returns a reference to the top element without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`] if the stack is empty.
    pub fn top(&self) -> Result<&T> {
        self.top
            .as_deref()
            .map(|node| &node.elem)
            .ok_or(Error::EmptyContainer)
    }

    /// Returns a mutable reference to the top element without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`] if the stack is empty.
    pub fn top_mut(&mut self) -> Result<&mut T> {
        self.top
            .as_deref_mut()
            .map(|node| &mut node.elem)
            .ok_or(Error::EmptyContainer)
    }

    /// Pops every element until the stack is empty.
    pub fn clear(&mut self) {
        while self.pop().is_ok() {}
    }

    /// Returns the number of elements on the stack.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the stack holds no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Walks the elements from top to bottom.
    fn elems(&self) -> impl Iterator<Item = &T> + '_ {
        iter::successors(self.top.as_deref(), |node| node.next.as_deref()).map(|node| &node.elem)
    }
}

impl<T> Drop for LinkedStack<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedStack<T> {
    fn clone(&self) -> Self {
        // Rebuild bottom-up so the top stays on top.
        let mut elems: Vec<&T> = self.elems().collect();
        elems.reverse();
        elems.into_iter().cloned().collect()
    }
}

impl<T> Extend<T> for LinkedStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.push(elem);
        }
    }
}

impl<T> FromIterator<T> for LinkedStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

/// Prints the elements from top to bottom.
impl<T: fmt::Debug> fmt::Debug for LinkedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.elems()).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedStack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.elems().eq(other.elems())
    }
}

impl<T: Eq> Eq for LinkedStack<T> {}
