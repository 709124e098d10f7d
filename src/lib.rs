//! # optfield
//!
//! Optional-valued fields for plain data entities, with monadic lookup
//! chains and in-place roster filtering.
//!
//! ## Overview
//!
//! - **Optional**: [`Optional<T>`](optional::Optional), a `Present(T)` / `Absent`
//!   sum type with `map`, `flat_map`, `filter` and `if_present` combinators
//!   and the display forms `Optional[<value>]` / `Optional.empty`
//! - **Model**: [`Person`](model::Person), [`Address`](model::Address) and
//!   [`City`](model::City), whose unset fields read as `Absent`
//! - **Lookup**: [`LookupMap`](lookup::LookupMap), whose `find` returns an
//!   optional on miss
//! - **Filter**: [`filter`](filter::filter), in-place predicate removal
//!   preserving order
//! - **Type Classes**: Functor, Applicative and Monad for `Optional`
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (enabled by default)
//! - `serde`: Serialization for `Optional` and the model types
//! - `fxhash`: `FxLookupMap`, a lookup map using the Fx hasher
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use optfield::prelude::*;
//!
//! let mut people = LookupMap::new();
//! people.insert("A. Name", Person::with_address(Address::new(City::new("Young America"))));
//!
//! let city = people
//!     .find("A. Name")
//!     .flat_map(Person::address)
//!     .flat_map(Address::city)
//!     .map(City::name);
//! assert_eq!(city.to_string(), "Optional[Young America]");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use optfield::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::OptionalError;
    pub use crate::filter::{RemoveIf, filter};
    pub use crate::lookup::LookupMap;
    pub use crate::model::{Address, City, EmptyPolicy, Gender, Person};
    pub use crate::optional::Optional;

    #[cfg(feature = "fxhash")]
    pub use crate::lookup::FxLookupMap;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

pub mod error;
pub mod filter;
pub mod lookup;
pub mod model;
pub mod optional;

#[cfg(feature = "typeclass")]
pub mod typeclass;
