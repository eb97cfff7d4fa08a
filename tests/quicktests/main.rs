#[macro_use]
extern crate quickcheck_macros;

mod list;
mod tree;
mod vector;

use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// an ordered tree in a quicktest.
#[derive(Copy, Clone, Debug)]
enum Op<T> {
    /// Insert the value into the data structure
    Insert(T),
    /// Remove the value from the data structure
    Remove(T),
    /// Ask whether the value is present
    Contains(T),
}

impl<T: Arbitrary> Arbitrary for Op<T> {
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).unwrap() {
            0 => Op::Insert(T::arbitrary(g)),
            1 => Op::Remove(T::arbitrary(g)),
            2 => Op::Contains(T::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}

/// An enum for the various kinds of "things" to do to
/// a sequence in a quicktest.
#[derive(Copy, Clone, Debug)]
enum SeqOp<T> {
    /// Push the value onto the front
    PushFront(T),
    /// Push the value onto the back
    PushBack(T),
    /// Pop from the front
    PopFront,
    /// Pop from the back
    PopBack,
}

impl<T: Arbitrary> Arbitrary for SeqOp<T> {
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2, 3]).unwrap() {
            0 => SeqOp::PushFront(T::arbitrary(g)),
            1 => SeqOp::PushBack(T::arbitrary(g)),
            2 => SeqOp::PopFront,
            3 => SeqOp::PopBack,
            _ => unreachable!(),
        }
    }
}
