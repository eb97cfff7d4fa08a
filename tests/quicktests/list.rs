use containers::List;

use std::collections::VecDeque;

use crate::SeqOp;

/// Applies a set of operations to a list and a model deque.
/// This way we can ensure that after a random smattering of pushes
/// and pops from both ends we have the same sequence as the model.
fn do_ops<T>(ops: &[SeqOp<T>], list: &mut List<T>, deque: &mut VecDeque<T>)
where
    T: Clone + PartialEq + std::fmt::Debug,
{
    for op in ops {
        match op {
            SeqOp::PushFront(value) => {
                list.push_front(value.clone());
                deque.push_front(value.clone());
            }
            SeqOp::PushBack(value) => {
                list.push_back(value.clone());
                deque.push_back(value.clone());
            }
            SeqOp::PopFront => assert_eq!(list.pop_front(), deque.pop_front()),
            SeqOp::PopBack => assert_eq!(list.pop_back(), deque.pop_back()),
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<SeqOp<i8>>) -> bool {
    let mut list = List::new();
    let mut deque = VecDeque::new();

    do_ops(&ops, &mut list, &mut deque);
    list.len() == deque.len() && list.iter().eq(deque.iter())
}

#[quickcheck]
fn ends_track_the_model(ops: Vec<SeqOp<i8>>) -> bool {
    let mut list = List::new();
    let mut deque = VecDeque::new();

    do_ops(&ops, &mut list, &mut deque);
    list.front().ok() == deque.front() && list.back().ok() == deque.back()
}

#[quickcheck]
fn reversing_matches_the_reversed_model(ops: Vec<SeqOp<i8>>) -> bool {
    let mut list = List::new();
    let mut deque = VecDeque::new();

    do_ops(&ops, &mut list, &mut deque);
    list.reverse();
    list.iter().eq(deque.iter().rev())
}

#[quickcheck]
fn draining_by_value_matches_the_model(ops: Vec<SeqOp<i8>>) -> bool {
    let mut list = List::new();
    let mut deque = VecDeque::new();

    do_ops(&ops, &mut list, &mut deque);
    list.into_iter().eq(deque.into_iter())
}

#[quickcheck]
fn positional_inserts_match_vec(xs: Vec<i8>, index: usize, value: i8) -> bool {
    let mut list: List<i8> = xs.iter().copied().collect();
    let mut model = xs.clone();

    let index = index % (xs.len() + 1);
    list.insert_at(index, value).is_ok() && {
        model.insert(index, value);
        list.iter().eq(model.iter())
    }
}
