//! Monad type class - sequencing optional-returning computations.
//!
//! # Laws
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! m.flat_map(Self::pure) == m
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```

use super::applicative::Applicative;
use crate::optional::Optional;

/// A type class for sequencing computations where each step depends on the
/// result of the previous one.
///
/// # Examples
///
/// ```rust
/// use optfield::optional::Optional;
/// use optfield::typeclass::Monad;
///
/// let x = Optional::present(5);
/// let y = x.and_then(|n| if n > 10 { Optional::present(n) } else { Optional::absent() });
/// assert_eq!(y, Optional::absent());
/// ```
pub trait Monad: Applicative {
    /// Applies `function` to the inner value and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        Monad::flat_map(self, function)
    }

    /// Sequences two computations, discarding the first result.
    ///
    /// ```rust
    /// use optfield::optional::Optional;
    /// use optfield::typeclass::Monad;
    ///
    /// assert_eq!(Optional::present(5).then(Optional::present("hello")), Optional::present("hello"));
    /// assert_eq!(Optional::<i32>::absent().then(Optional::present("hello")), Optional::absent());
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        Monad::flat_map(self, |_| next)
    }
}

impl<A> Monad for Optional<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> Optional<B>,
    {
        // Delegate to the inherent combinator
        Self::flat_map(self, function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_and_then_present() {
        let result = Optional::present(4).and_then(|n| Optional::present(n + 1));
        assert_eq!(result, Optional::present(5));
    }

    #[rstest]
    fn test_and_then_short_circuits() {
        let mut called = false;
        let result = Optional::<i32>::absent().and_then(|n| {
            called = true;
            Optional::present(n)
        });
        assert_eq!(result, Optional::absent());
        assert!(!called);
    }
}
