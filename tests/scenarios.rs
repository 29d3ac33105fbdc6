use structures::prelude::*;

#[test]
fn singly_push_back_then_remove() {
    let mut list = SinglyLinkedList::new();
    list.push_back(1);
    list.push_back(2);
    list.push_back(3);

    assert_eq!(list.at(0), Ok(&1));
    assert_eq!(list.at(1), Ok(&2));
    assert_eq!(list.at(2), Ok(&3));
    assert_eq!(list.len(), 3);

    assert_eq!(list.remove(&2), Some(2));
    assert_eq!(list, singly![1 => 3]);
    assert_eq!(list.len(), 2);
}

#[test]
fn queue_drains_then_reports_empty() {
    let mut queue = LinkedQueue::new();
    queue.enqueue(1);
    queue.enqueue(2);

    assert_eq!(queue.dequeue(), Ok(1));
    assert_eq!(queue.front(), Ok(&2));
    assert_eq!(queue.dequeue(), Ok(2));
    assert!(queue.is_empty());
    assert_eq!(queue.front(), Err(Error::EmptyContainer));
    assert_eq!(queue.back(), Err(Error::EmptyContainer));
}

#[test]
fn circular_pop_front_moves_head() {
    let mut list = CircularSinglyLinkedList::new();
    list.push_back(1);
    list.push_back(2);
    list.push_back(3);

    assert_eq!(list.pop_front(), Ok(1));
    assert_eq!(list.len(), 2);
    assert_eq!(list.front(), Some(&2));
    assert_eq!(list.back(), Some(&3));

    // a full turn around the ring lands on the new head again
    list.rotate();
    list.rotate();
    assert_eq!(list.front(), Some(&2));
}

#[test]
fn insert_sorted_on_every_list() {
    let mut singly = SinglyLinkedList::new();
    let mut circular = CircularSinglyLinkedList::new();
    let mut doubly = DoublyCircularLinkedList::new();

    for elem in [5, 2, 8] {
        singly.insert_sorted(elem);
        circular.insert_sorted(elem);
        doubly.insert_sorted(elem);
    }

    assert_eq!(singly, singly![2 => 5 => 8]);
    assert_eq!(circular, circular![2 => 5 => 8]);
    assert_eq!(doubly, doubly_circular![2 => 5 => 8]);
}

#[test]
fn stack_and_queue_orders() {
    let input = [4, 8, 15, 16, 23, 42];

    let mut stack = LinkedStack::new();
    let mut queue = LinkedQueue::new();
    for elem in input {
        stack.push(elem);
        queue.enqueue(elem);
    }

    let popped: Vec<i32> = (0..input.len()).filter_map(|_| stack.pop().ok()).collect();
    let dequeued: Vec<i32> = (0..input.len()).filter_map(|_| queue.dequeue().ok()).collect();

    assert_eq!(popped, [42, 23, 16, 15, 8, 4]);
    assert_eq!(dequeued, input);
    assert!(stack.is_empty());
    assert!(queue.is_empty());
}

#[test]
fn empty_containers_fail_cleanly() {
    let mut singly: SinglyLinkedList<i32> = SinglyLinkedList::new();
    let mut circular: CircularSinglyLinkedList<i32> = CircularSinglyLinkedList::new();
    let mut doubly: DoublyCircularLinkedList<i32> = DoublyCircularLinkedList::new();
    let mut stack: LinkedStack<i32> = LinkedStack::new();
    let mut queue: LinkedQueue<i32> = LinkedQueue::new();

    assert_eq!(singly.pop_front(), Err(Error::EmptyContainer));
    assert_eq!(singly.pop_back(), Err(Error::EmptyContainer));
    assert_eq!(singly.pop(0), Err(Error::EmptyContainer));
    assert_eq!(circular.pop_front(), Err(Error::EmptyContainer));
    assert_eq!(circular.pop_back(), Err(Error::EmptyContainer));
    assert_eq!(circular.pop(3), Err(Error::EmptyContainer));
    assert_eq!(doubly.pop_front(), Err(Error::EmptyContainer));
    assert_eq!(doubly.pop_back(), Err(Error::EmptyContainer));
    assert_eq!(doubly.pop(1), Err(Error::EmptyContainer));
    assert_eq!(stack.pop(), Err(Error::EmptyContainer));
    assert_eq!(stack.top(), Err(Error::EmptyContainer));
    assert_eq!(queue.dequeue(), Err(Error::EmptyContainer));

    assert_eq!(singly.len(), 0);
    assert_eq!(circular.len(), 0);
    assert_eq!(doubly.len(), 0);
    assert_eq!(stack.len(), 0);
    assert_eq!(queue.len(), 0);
}

#[test]
fn find_absent_returns_sentinel() {
    let singly = singly![1 => 2];
    let circular = circular![1 => 2];
    let doubly = doubly_circular![1 => 2];

    assert_eq!(singly.find(&3), singly.len());
    assert_eq!(circular.find(&3), circular.len());
    assert_eq!(doubly.find(&3), doubly.len());
    assert!(!singly.contains(&3));
    assert!(!circular.contains(&3));
    assert!(!doubly.contains(&3));
}

/// Deterministic xorshift generator so the mixed workloads are reproducible.
struct XorShift(u64);

impl XorShift {
    fn next_u64(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }

    fn below(&mut self, bound: usize) -> usize {
        (self.next_u64() % bound as u64) as usize
    }
}

/// Runs the same random sequence of operations on a list and a `Vec`, and
/// checks that they agree after every step.
macro_rules! matches_vec_model {
    ($name:ident, $list:ty) => {
        #[test]
        fn $name() {
            let mut rng = XorShift(0x9E37_79B9_7F4A_7C15);
            let mut list: $list = Default::default();
            let mut model: Vec<u8> = Vec::new();

            for _ in 0..2_000 {
                let elem = rng.below(16) as u8;
                match rng.below(8) {
                    0 => {
                        list.push_front(elem);
                        model.insert(0, elem);
                    }
                    1 => {
                        list.push_back(elem);
                        model.push(elem);
                    }
                    2 => {
                        let index = rng.below(model.len() + 2);
                        let res = list.insert(elem, index);
                        if index <= model.len() {
                            assert_eq!(res, Ok(()));
                            model.insert(index, elem);
                        } else {
                            assert_eq!(
                                res,
                                Err(Error::InvalidIndex {
                                    index,
                                    len: model.len()
                                })
                            );
                        }
                    }
                    3 => {
                        let expected = if model.is_empty() {
                            Err(Error::EmptyContainer)
                        } else {
                            Ok(model.remove(0))
                        };
                        assert_eq!(list.pop_front(), expected);
                    }
                    4 => {
                        let expected = model.pop().ok_or(Error::EmptyContainer);
                        assert_eq!(list.pop_back(), expected);
                    }
                    5 => {
                        let index = rng.below(model.len() + 1);
                        let expected = if model.is_empty() {
                            Err(Error::EmptyContainer)
                        } else if index >= model.len() {
                            Err(Error::InvalidIndex {
                                index,
                                len: model.len(),
                            })
                        } else {
                            Ok(model.remove(index))
                        };
                        assert_eq!(list.pop(index), expected);
                    }
                    6 => {
                        let expected = model
                            .iter()
                            .position(|e| *e == elem)
                            .map(|index| model.remove(index));
                        assert_eq!(list.remove(&elem), expected);
                    }
                    _ => {
                        let index = model.iter().position(|e| *e >= elem).unwrap_or(model.len());
                        model.insert(index, elem);
                        list.insert_sorted(elem);
                    }
                }

                assert_eq!(list.len(), model.len());
                assert_eq!(list.is_empty(), model.is_empty());
                assert_eq!(list.find(&elem), model.iter().position(|e| *e == elem).unwrap_or(model.len()));
                for (index, expected) in model.iter().enumerate() {
                    assert_eq!(list.at(index), Ok(expected));
                }
                assert!(list.at(model.len()).is_err());
            }
        }
    };
}

matches_vec_model!(singly_matches_vec_model, SinglyLinkedList<u8>);
matches_vec_model!(circular_matches_vec_model, CircularSinglyLinkedList<u8>);
matches_vec_model!(doubly_circular_matches_vec_model, DoublyCircularLinkedList<u8>);
