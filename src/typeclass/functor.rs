//! Functor type class - mapping over the held value.
//!
//! # Laws
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```

use super::higher::TypeConstructor;
use crate::optional::Optional;

/// A type class for types that can have a function mapped over their contents.
///
/// # Examples
///
/// ```rust
/// use optfield::optional::Optional;
/// use optfield::typeclass::Functor;
///
/// let x = Optional::present(5);
/// let y: Optional<String> = x.fmap(|n| n.to_string());
/// assert_eq!(y, Optional::present("5".to_string()));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies `function` to the value inside the functor.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies `function` to a reference of the value inside the functor.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with `value`.
    ///
    /// ```rust
    /// use optfield::optional::Optional;
    /// use optfield::typeclass::Functor;
    ///
    /// assert_eq!(Optional::present(5).replace("replaced"), Optional::present("replaced"));
    /// assert_eq!(Optional::<i32>::absent().replace("replaced"), Optional::absent());
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, keeping only its shape.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<A> Functor for Optional<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Optional<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}
