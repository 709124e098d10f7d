//! In-place, predicate-driven removal from mutable sequences.
//!
//! [`filter`] removes every element for which the predicate holds and keeps
//! the survivors in their original relative order. Nothing is allocated and
//! nothing is returned; the caller's sequence is the result.
//!
//! # Examples
//!
//! ```rust
//! use optfield::filter::filter;
//!
//! let mut numbers = vec![1, 2, 3, 4, 5, 6];
//! filter(&mut numbers, |n| n % 2 == 0);
//! assert_eq!(numbers, vec![1, 3, 5]);
//!
//! // Successive passes compose as set difference
//! filter(&mut numbers, |n| *n > 3);
//! assert_eq!(numbers, vec![1, 3]);
//! ```

use std::collections::VecDeque;

/// A mutable ordered sequence that can drop elements matching a predicate.
///
/// Implementations must preserve the relative order of retained elements and
/// evaluate the predicate exactly once per element.
pub trait RemoveIf {
    /// Element type of the sequence.
    type Item;

    /// Removes every element for which `predicate` returns `true` and returns
    /// how many were removed.
    fn remove_if<P>(&mut self, predicate: P) -> usize
    where
        P: FnMut(&Self::Item) -> bool;
}

impl<T> RemoveIf for Vec<T> {
    type Item = T;

    fn remove_if<P>(&mut self, mut predicate: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        let before = self.len();
        self.retain(|element| !predicate(element));
        before - self.len()
    }
}

impl<T> RemoveIf for VecDeque<T> {
    type Item = T;

    fn remove_if<P>(&mut self, mut predicate: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        let before = self.len();
        self.retain(|element| !predicate(element));
        before - self.len()
    }
}

/// Removes, in place, every element of `sequence` for which `predicate` is
/// `true`.
///
/// An empty sequence, or a predicate that matches nothing, leaves the
/// sequence untouched.
pub fn filter<S, P>(sequence: &mut S, predicate: P)
where
    S: RemoveIf + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    let removed = sequence.remove_if(predicate);
    tracing::debug!(removed, "filtered sequence in place");
}
