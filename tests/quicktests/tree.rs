use containers::Tree;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a model set.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same values as the model.
fn do_ops<T: Ord + Clone>(ops: &[Op<T>], tree: &mut Tree<T>, set: &mut BTreeSet<T>) {
    for op in ops {
        match op {
            Op::Insert(value) => {
                tree.insert(value.clone());
                set.insert(value.clone());
            }
            Op::Remove(value) => {
                tree.remove(value);
                set.remove(value);
            }
            Op::Contains(value) => {
                assert_eq!(tree.contains(value), set.contains(value));
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.len() == set.len() && tree.iter().eq(set.iter())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn with_removals(xs: Vec<i8>, removals: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    for removal in &removals {
        tree.remove(removal);
    }

    let mut still_present = xs;
    for removal in &removals {
        // We may have inserted the same value multiple times - remove each one.
        while let Some(pos) = still_present.iter().position(|x| x == removal) {
            still_present.swap_remove(pos);
        }
    }

    removals.iter().all(|x| !tree.contains(x))
        && still_present.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn min_and_max_bracket_everything(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();

    match (tree.min(), tree.max()) {
        (Some(min), Some(max)) => xs.iter().all(|x| min <= x && x <= max),
        (None, None) => xs.is_empty(),
        _ => false,
    }
}

#[quickcheck]
fn cloned_trees_agree_then_diverge(xs: Vec<i8>, extra: i8) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();
    let mut copy = tree.clone();

    if tree != copy {
        return false;
    }
    copy.remove(&extra);
    copy.insert(extra.wrapping_add(1));

    // The original must not have noticed any of that.
    tree.iter().eq(xs.iter().collect::<BTreeSet<_>>())
}
