//! Domain entities whose unset fields are exposed as [`Optional`] values.
//!
//! A [`Person`] may own an [`Address`], which may own a [`City`]. Every link
//! can be missing, so the accessors compose with
//! [`Optional::flat_map`]:
//!
//! ```rust
//! use optfield::model::{Address, City, Person};
//!
//! let person = Person::with_address(Address::new(City::new("Young America")));
//! let city = person.address().flat_map(Address::city).map(City::name);
//! assert_eq!(city.to_string(), "Optional[Young America]");
//!
//! let nobody = Person::new();
//! assert!(nobody.address().flat_map(Address::city).is_absent());
//! ```
//!
//! [`Optional`]: crate::optional::Optional
//! [`Optional::flat_map`]: crate::optional::Optional::flat_map

mod address;
mod city;
mod gender;
mod person;

pub use address::Address;
pub use city::City;
pub use gender::Gender;
pub use person::{EmptyPolicy, Person};
