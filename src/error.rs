//! The error conditions shared by every container in this crate.
//!
//! Only two things can go wrong when talking to an in-process container:
//! asking for a position that does not exist, or asking for a value from a
//! container that has none. Accessors that return values surface these as
//! [`Error`]s. Structural mutators aimed at absent targets (popping an empty
//! container, removing a value that was never inserted) are documented
//! no-ops instead, so the two variants here only ever come out of accessors
//! and position-validated operations.

use thiserror::Error;

/// The failure conditions reported by container accessors.
///
/// # Examples
///
/// ```
/// use containers::{Error, Vector};
///
/// let numbers: Vector<i32> = [1, 2, 3].into_iter().collect();
///
/// assert_eq!(numbers.at(3), Err(Error::IndexOutOfRange { index: 3, len: 3 }));
///
/// let empty: Vector<i32> = Vector::new();
/// assert_eq!(empty.front(), Err(Error::EmptyContainer));
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A positional access or mutation named an index at or beyond the end
    /// of the container.
    #[error("index {index} out of range for container of length {len}")]
    IndexOutOfRange {
        /// The index the caller asked for.
        index: usize,
        /// The container's length at the time of the call.
        len: usize,
    },

    /// A value-returning accessor (such as `front` or `back`) was called on
    /// a container with no elements.
    #[error("container is empty")]
    EmptyContainer,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_index_and_len() {
        let err = Error::IndexOutOfRange { index: 5, len: 3 };
        assert_eq!(
            err.to_string(),
            "index 5 out of range for container of length 3"
        );
    }

    #[test]
    fn display_for_empty_container() {
        assert_eq!(Error::EmptyContainer.to_string(), "container is empty");
    }
}
