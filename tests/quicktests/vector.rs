use containers::{Error, Vector};

#[quickcheck]
fn collected_matches_vec(xs: Vec<i8>) -> bool {
    let vector: Vector<i8> = xs.iter().copied().collect();

    vector.len() == xs.len() && vector.iter().eq(xs.iter())
}

#[quickcheck]
fn accessors_agree_with_the_slice(xs: Vec<i8>, index: usize) -> bool {
    let vector: Vector<i8> = xs.iter().copied().collect();

    vector.get(index) == xs.get(index)
}

#[quickcheck]
fn at_reports_the_offending_index(xs: Vec<i8>, index: usize) -> bool {
    let vector: Vector<i8> = xs.iter().copied().collect();

    if index < vector.len() {
        vector.at(index) == Ok(&xs[index])
    } else {
        vector.at(index)
            == Err(Error::IndexOutOfRange {
                index,
                len: xs.len(),
            })
    }
}

#[quickcheck]
fn len_never_exceeds_capacity(xs: Vec<i8>) -> bool {
    let mut vector = Vector::new();
    for x in xs {
        vector.push(x);
        if vector.len() > vector.capacity() {
            return false;
        }
    }
    true
}

#[quickcheck]
fn sorting_through_the_slice_works(xs: Vec<i8>) -> bool {
    let mut vector: Vector<i8> = xs.iter().copied().collect();
    let mut model = xs;

    vector.sort_unstable();
    model.sort_unstable();
    vector.as_slice() == model.as_slice()
}

#[quickcheck]
fn shrinking_keeps_the_values(xs: Vec<i8>) -> bool {
    let mut vector = Vector::new();
    for x in &xs {
        vector.push(*x);
    }

    vector.shrink_to_fit();
    vector.capacity() == vector.len() && vector.iter().eq(xs.iter())
}
