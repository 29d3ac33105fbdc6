//! Collection Types.

pub mod circular_linked_list;
pub mod doubly_circular_linked_list;
pub mod linked_queue;
pub mod linked_stack;
pub mod singly_linked_list;

#[cfg(test)]
mod testing;

pub use circular_linked_list::CircularSinglyLinkedList;
pub use doubly_circular_linked_list::DoublyCircularLinkedList;
pub use linked_queue::LinkedQueue;
pub use linked_stack::LinkedStack;
pub use singly_linked_list::SinglyLinkedList;

/// Collections Prelude
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::{circular, doubly_circular, queue, singly, stack};

    #[doc(no_inline)]
    pub use super::circular_linked_list::CircularSinglyLinkedList;
    #[doc(no_inline)]
    pub use super::doubly_circular_linked_list::DoublyCircularLinkedList;
    #[doc(no_inline)]
    pub use super::linked_queue::LinkedQueue;
    #[doc(no_inline)]
    pub use super::linked_stack::LinkedStack;
    #[doc(no_inline)]
    pub use super::singly_linked_list::SinglyLinkedList;
}
