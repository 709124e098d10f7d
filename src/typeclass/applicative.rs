//! Applicative type class - lifting values and combining independent contexts.

use super::functor::Functor;
use crate::optional::Optional;

/// A type class for types that support lifting values and combining contexts.
///
/// # Laws
///
/// ```text
/// pure(a).map2(pure(b), f) == pure(f(a, b))
/// fa.map2(pure(b), |a, _| a) == fa
/// ```
///
/// # Examples
///
/// ```rust
/// use optfield::optional::Optional;
/// use optfield::typeclass::Applicative;
///
/// let x: Optional<i32> = <Optional<()>>::pure(42);
/// assert_eq!(x, Optional::present(42));
///
/// let missing: Optional<i32> = Optional::absent();
/// assert_eq!(x.map2(missing, |a, b| a + b), Optional::absent());
/// ```
pub trait Applicative: Functor {
    /// Lifts `value` into the applicative context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two values in the context with `function`.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Pairs two values in the context.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }
}

impl<A> Applicative for Optional<A> {
    #[inline]
    fn pure<B>(value: B) -> Optional<B> {
        Optional::present(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Optional<B>, function: F) -> Optional<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Present(a), Optional::Present(b)) => Optional::present(function(a, b)),
            _ => Optional::absent(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Optional::present(1), Optional::present("a"), Optional::present((1, "a")))]
    #[case(Optional::present(1), Optional::absent(), Optional::absent())]
    #[case(Optional::absent(), Optional::present("a"), Optional::absent())]
    fn test_product(
        #[case] left: Optional<i32>,
        #[case] right: Optional<&'static str>,
        #[case] expected: Optional<(i32, &'static str)>,
    ) {
        assert_eq!(left.product(right), expected);
    }
}
