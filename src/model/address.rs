//! Address entity.

use crate::optional::Optional;

use super::city::City;

/// A postal address that may or may not name a city.
///
/// # Examples
///
/// ```rust
/// use optfield::model::{Address, City};
///
/// let address = Address::new(City::new("Young America"));
/// assert_eq!(address.city().map(City::name).to_string(), "Optional[Young America]");
///
/// assert!(Address::without_city().city().is_absent());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Address {
    city: Option<City>,
}

impl Address {
    /// Creates an address located in `city`.
    pub const fn new(city: City) -> Self {
        Self { city: Some(city) }
    }

    /// Creates an address with no city.
    pub const fn without_city() -> Self {
        Self { city: None }
    }

    /// Returns the city, or `Absent` if none was set.
    pub fn city(&self) -> Optional<&City> {
        Optional::of_nullable(self.city.as_ref())
    }

    /// Sets the city.
    pub fn set_city(&mut self, city: City) {
        self.city = Some(city);
    }

    /// Removes the city, returning the previous one.
    pub fn clear_city(&mut self) -> Optional<City> {
        Optional::of_nullable(self.city.take())
    }
}
