//! Helpers shared by the container unit tests.

use std::cell::Cell;
use std::rc::Rc;

/// Hands out [`Tracked`] elements and counts how many of them were dropped.
#[derive(Debug, Default)]
pub(crate) struct DropCounter {
    drops: Rc<Cell<usize>>,
}

/// Element whose destructor bumps the counter it was created from.
#[derive(Debug)]
pub(crate) struct Tracked {
    id: i32,
    drops: Rc<Cell<usize>>,
}

impl DropCounter {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn track(&self, id: i32) -> Tracked {
        Tracked {
            id,
            drops: Rc::clone(&self.drops),
        }
    }

    /// Number of `Tracked` values dropped so far.
    pub(crate) fn count(&self) -> usize {
        self.drops.get()
    }
}

impl Tracked {
    pub(crate) fn id(&self) -> i32 {
        self.id
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}
