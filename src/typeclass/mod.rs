//! Type class traits for optional values.
//!
//! This module lifts [`Optional`](crate::optional::Optional) into the usual
//! functional vocabulary so it can be used by code that is generic over
//! containers:
//!
//! - [`TypeConstructor`]: Higher-kinded type emulation via GATs
//! - [`Functor`]: Mapping over the held value
//! - [`Applicative`]: Lifting values and combining independent optionals
//! - [`Monad`]: Sequencing optional-returning steps
//!
//! The inherent methods on `Optional` cover everyday use. The traits exist
//! for generic code and for checking the functor and monad laws.
//!
//! # Examples
//!
//! ```rust
//! use optfield::optional::Optional;
//! use optfield::typeclass::{Applicative, Functor, Monad};
//!
//! let width = Optional::present(3);
//! let height = Optional::present(4);
//!
//! let area = width.map2(height, |w, h| w * h);
//! assert_eq!(area, Optional::present(12));
//!
//! let label = area.fmap(|n| n.to_string()).and_then(|s| {
//!     if s.is_empty() { Optional::absent() } else { Optional::present(s) }
//! });
//! assert_eq!(label, Optional::present("12".to_string()));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
