use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use structures::prelude::*;

const ELEMS: u32 = 1_000;

fn stack_push_pop() {
    let mut stack = LinkedStack::new();
    for elem in 0..ELEMS {
        stack.push(black_box(elem));
    }
    while let Ok(elem) = stack.pop() {
        black_box(elem);
    }
}

fn queue_enqueue_dequeue() {
    let mut queue = LinkedQueue::new();
    for elem in 0..ELEMS {
        queue.enqueue(black_box(elem));
    }
    while let Ok(elem) = queue.dequeue() {
        black_box(elem);
    }
}

fn doubly_circular_both_ends() {
    let mut list = DoublyCircularLinkedList::new();
    for elem in 0..ELEMS {
        list.push_back(black_box(elem));
        list.push_front(black_box(elem));
    }
    while let Ok(elem) = list.pop_back() {
        black_box(elem);
    }
}

fn insert_sorted<L, F>(mut insert: F) -> L
where
    L: Default,
    F: FnMut(&mut L, u32),
{
    let mut list = L::default();
    // Interleave high and low values so insertion points spread over the list.
    for elem in 0..ELEMS / 4 {
        insert(&mut list, black_box(elem * 7919 % ELEMS));
    }
    list
}

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("stack_push_pop", |b| b.iter(stack_push_pop));
    c.bench_function("queue_enqueue_dequeue", |b| b.iter(queue_enqueue_dequeue));
    c.bench_function("doubly_circular_both_ends", |b| {
        b.iter(doubly_circular_both_ends)
    });

    c.bench_function("singly_insert_sorted", |b| {
        b.iter(|| insert_sorted::<SinglyLinkedList<u32>, _>(|list, elem| list.insert_sorted(elem)))
    });
    c.bench_function("circular_insert_sorted", |b| {
        b.iter(|| {
            insert_sorted::<CircularSinglyLinkedList<u32>, _>(|list, elem| list.insert_sorted(elem))
        })
    });
    c.bench_function("doubly_circular_insert_sorted", |b| {
        b.iter(|| {
            insert_sorted::<DoublyCircularLinkedList<u32>, _>(|list, elem| list.insert_sorted(elem))
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
