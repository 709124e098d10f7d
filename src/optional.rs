//! Optional type - a value that may or may not be present.
//!
//! This module provides the `Optional<T>` type, which represents either a
//! `Present(T)` value or `Absent`. It is the return type of every accessor in
//! this crate whose backing field may be unset, and of [`LookupMap::find`].
//!
//! Combinators (`map`, `flat_map`, `filter`, `or`) let a caller walk through
//! several possibly-missing links without branching at each step. Absence at
//! any link short-circuits the rest of the chain.
//!
//! # Examples
//!
//! ```rust
//! use optfield::optional::Optional;
//!
//! let present = Optional::present("foo@bar.com");
//! let absent: Optional<&str> = Optional::absent();
//!
//! assert_eq!(present.to_string(), "Optional[foo@bar.com]");
//! assert_eq!(absent.to_string(), "Optional.empty");
//!
//! // Chaining short-circuits on the first absent link
//! let length = present.filter(|s| s.contains('@')).map(str::len);
//! assert_eq!(length, Optional::present(11));
//! ```
//!
//! [`LookupMap::find`]: crate::lookup::LookupMap::find

use std::fmt;
use std::ops::Deref;

use crate::error::OptionalError;

/// A value of type `T`, or nothing.
///
/// `Optional<T>` is either `Present(T)` or `Absent`. It is produced fresh by
/// each accessor call and is never cached by the entity that produced it.
///
/// # Type Parameters
///
/// * `T` - The type of the held value
///
/// # Examples
///
/// ```rust
/// use optfield::optional::Optional;
///
/// let name = Optional::of_nullable(Some("Young America"));
/// let mut seen = None;
/// name.if_present(|value| seen = Some(value));
/// assert_eq!(seen, Some("Young America"));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Optional<T> {
    /// No value is held.
    #[default]
    Absent,
    /// A value is held.
    Present(T),
}

impl<T> Optional<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a value that is known to exist.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optfield::optional::Optional;
    ///
    /// assert!(Optional::present(42).is_present());
    /// ```
    #[inline]
    pub const fn present(value: T) -> Self {
        Self::Present(value)
    }

    /// Returns the absent variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optfield::optional::Optional;
    ///
    /// let empty: Optional<i32> = Optional::absent();
    /// assert!(empty.is_absent());
    /// ```
    #[inline]
    pub const fn absent() -> Self {
        Self::Absent
    }

    /// Converts a possibly-missing value, mapping `None` to `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optfield::optional::Optional;
    ///
    /// assert_eq!(Optional::of_nullable(Some(1)), Optional::present(1));
    /// assert_eq!(Optional::<i32>::of_nullable(None), Optional::absent());
    /// ```
    #[inline]
    pub fn of_nullable(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }

    /// Wraps a payload that the caller asserts is present.
    ///
    /// This is the strict counterpart of [`of_nullable`](Self::of_nullable).
    ///
    /// # Errors
    ///
    /// Returns [`OptionalError::InvalidArgument`] if `value` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optfield::error::OptionalError;
    /// use optfield::optional::Optional;
    ///
    /// assert_eq!(Optional::try_present(Some(7)), Ok(Optional::present(7)));
    /// assert_eq!(
    ///     Optional::<i32>::try_present(None),
    ///     Err(OptionalError::InvalidArgument { operation: "present" }),
    /// );
    /// ```
    pub fn try_present(value: Option<T>) -> Result<Self, OptionalError> {
        value
            .map(Self::Present)
            .ok_or(OptionalError::InvalidArgument {
                operation: "present",
            })
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if a value is held.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if no value is held.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    // =========================================================================
    // Borrowing
    // =========================================================================

    /// Converts `&Optional<T>` into `Optional<&T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optfield::optional::Optional;
    ///
    /// let text = Optional::present(String::from("hello"));
    /// let length = text.as_ref().map(String::len);
    /// assert_eq!(length, Optional::present(5));
    /// // text is still available here
    /// assert!(text.is_present());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match *self {
            Self::Present(ref value) => Optional::Present(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Converts `&mut Optional<T>` into `Optional<&mut T>`.
    #[inline]
    pub const fn as_mut(&mut self) -> Optional<&mut T> {
        match *self {
            Self::Present(ref mut value) => Optional::Present(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Borrows the held value through [`Deref`], e.g. `Optional<String>` to
    /// `Optional<&str>`.
    #[inline]
    pub fn as_deref(&self) -> Optional<&T::Target>
    where
        T: Deref,
    {
        self.as_ref().map(|value| &**value)
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns a reference to the held value.
    ///
    /// # Errors
    ///
    /// Returns [`OptionalError::NoSuchElement`] if no value is held.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optfield::error::OptionalError;
    /// use optfield::optional::Optional;
    ///
    /// assert_eq!(Optional::present(3).get(), Ok(&3));
    /// assert_eq!(Optional::<i32>::absent().get(), Err(OptionalError::NoSuchElement));
    /// ```
    pub const fn get(&self) -> Result<&T, OptionalError> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(OptionalError::NoSuchElement),
        }
    }

    /// Converts into a standard `Option<T>`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Converts into a `Result`, failing with [`OptionalError::NoSuchElement`].
    ///
    /// # Errors
    ///
    /// Returns [`OptionalError::NoSuchElement`] if no value is held.
    pub fn into_result(self) -> Result<T, OptionalError> {
        self.ok_or_else(|| OptionalError::NoSuchElement)
    }

    /// Converts into a `Result`, building the error lazily.
    ///
    /// # Errors
    ///
    /// Returns the error produced by `error_supplier` if no value is held.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optfield::optional::Optional;
    ///
    /// let missing: Optional<i32> = Optional::absent();
    /// assert_eq!(missing.ok_or_else(|| "missing"), Err("missing"));
    /// ```
    #[inline]
    pub fn ok_or_else<E, F>(self, error_supplier: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(error_supplier()),
        }
    }

    /// Returns the held value, or `default` if absent.
    #[inline]
    pub fn or_else(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Returns the held value, or computes one from `supplier` if absent.
    #[inline]
    pub fn or_else_with<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => supplier(),
        }
    }

    // =========================================================================
    // Side Effects
    // =========================================================================

    /// Invokes `consumer` with the held value; does nothing when absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optfield::optional::Optional;
    ///
    /// let mut calls = 0;
    /// Optional::present(1).if_present(|_| calls += 1);
    /// Optional::<i32>::absent().if_present(|_| calls += 1);
    /// assert_eq!(calls, 1);
    /// ```
    #[inline]
    pub fn if_present<F>(self, consumer: F)
    where
        F: FnOnce(T),
    {
        if let Self::Present(value) = self {
            consumer(value);
        }
    }

    /// Invokes `action` only when no value is held.
    #[inline]
    pub fn if_absent<F>(&self, action: F)
    where
        F: FnOnce(),
    {
        if self.is_absent() {
            action();
        }
    }

    /// Invokes `consumer` with the held value, or `action` when absent.
    #[inline]
    pub fn if_present_or_else<F, G>(self, consumer: F, action: G)
    where
        F: FnOnce(T),
        G: FnOnce(),
    {
        match self {
            Self::Present(value) => consumer(value),
            Self::Absent => action(),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `function` to the held value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optfield::optional::Optional;
    ///
    /// assert_eq!(Optional::present(5).map(|n| n * 2), Optional::present(10));
    /// assert_eq!(Optional::<i32>::absent().map(|n| n * 2), Optional::absent());
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Optional::Present(function(value)),
            Self::Absent => Optional::Absent,
        }
    }

    /// Applies an optional-returning `function` to the held value without
    /// nesting the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optfield::optional::Optional;
    ///
    /// fn half(n: i32) -> Optional<i32> {
    ///     if n % 2 == 0 { Optional::present(n / 2) } else { Optional::absent() }
    /// }
    ///
    /// assert_eq!(Optional::present(8).flat_map(half).flat_map(half), Optional::present(2));
    /// assert_eq!(Optional::present(6).flat_map(half).flat_map(half), Optional::absent());
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Keeps the held value only if `predicate` accepts it.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) => {
                if predicate(&value) {
                    Self::Present(value)
                } else {
                    Self::Absent
                }
            }
            Self::Absent => Self::Absent,
        }
    }

    /// Returns `self` if present, otherwise `other`.
    #[inline]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Present(_) => self,
            Self::Absent => other,
        }
    }

    /// Returns `self` if present, otherwise the optional produced by `supplier`.
    #[inline]
    pub fn or_else_get<F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Present(_) => self,
            Self::Absent => supplier(),
        }
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    /// Iterates over the held value, yielding zero or one item.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().into_option().into_iter()
    }
}

impl<T> Optional<Optional<T>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Optional<T> {
        self.flat_map(|inner| inner)
    }
}

impl<T: Clone> Optional<&T> {
    /// Clones the referenced value.
    #[inline]
    pub fn cloned(self) -> Optional<T> {
        self.map(Clone::clone)
    }
}

impl<T: Copy> Optional<&T> {
    /// Copies the referenced value.
    #[inline]
    pub fn copied(self) -> Optional<T> {
        self.map(|value| *value)
    }
}

// =============================================================================
// Display
// =============================================================================

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => write!(formatter, "Optional[{value}]"),
            Self::Absent => formatter.write_str("Optional.empty"),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<T> From<Option<T>> for Optional<T> {
    /// Converts an `Option<T>` into an `Optional<T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optfield::optional::Optional;
    ///
    /// let value: Optional<i32> = Some(1).into();
    /// assert_eq!(value, Optional::present(1));
    /// ```
    fn from(value: Option<T>) -> Self {
        Self::of_nullable(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Optional<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Present(value) => serializer.serialize_some(value),
            Self::Absent => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Optional<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Option<T> as serde::Deserialize>::deserialize(deserializer).map(Self::of_nullable)
    }
}
