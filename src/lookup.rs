//! Keyed lookup map whose `find` returns an [`Optional`] instead of panicking
//! or handing back a sentinel.
//!
//! The returned optional borrows from the map, so it chains directly into the
//! entity accessors:
//!
//! ```rust
//! use optfield::lookup::LookupMap;
//! use optfield::model::{Address, City, Person};
//!
//! let mut people = LookupMap::new();
//! people.insert("A. Name", Person::with_address(Address::new(City::new("Young America"))));
//!
//! let mut visited = Vec::new();
//! people
//!     .find("A. Name")
//!     .flat_map(Person::address)
//!     .flat_map(Address::city)
//!     .if_present(|city| visited.push(city.name().to_owned()));
//! assert_eq!(visited, vec!["Young America".to_owned()]);
//!
//! assert!(people.find("Nobody").flat_map(Person::address).is_absent());
//! ```

use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map::{self, RandomState};
use std::fmt;
use std::hash::{BuildHasher, Hash};

use crate::optional::Optional;

/// A hash map from key to value with optional-returning accessors.
///
/// Insertion order is not preserved.
#[derive(Clone)]
pub struct LookupMap<K, V, S = RandomState> {
    entries: HashMap<K, V, S>,
}

/// A [`LookupMap`] using the Fx hasher.
#[cfg(feature = "fxhash")]
pub type FxLookupMap<K, V> = LookupMap<K, V, rustc_hash::FxBuildHasher>;

impl<K, V> LookupMap<K, V, RandomState> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<K, V, S> LookupMap<K, V, S> {
    /// Creates an empty map using `hasher` to hash keys.
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            entries: HashMap::with_hasher(hasher),
        }
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in arbitrary order.
    pub fn iter(&self) -> hash_map::Iter<'_, K, V> {
        self.entries.iter()
    }
}

impl<K, V, S> LookupMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Inserts `value` under `key`, returning the value it replaced.
    pub fn insert(&mut self, key: K, value: V) -> Optional<V> {
        Optional::of_nullable(self.entries.insert(key, value))
    }

    /// Looks up `key`. A missing key yields `Absent`.
    pub fn find<Q>(&self, key: &Q) -> Optional<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let found = Optional::of_nullable(self.entries.get(key));
        found.if_absent(|| tracing::trace!(entries = self.entries.len(), "lookup miss"));
        found
    }

    /// Looks up `key` for mutation. A missing key yields `Absent`.
    pub fn find_mut<Q>(&mut self, key: &Q) -> Optional<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        Optional::of_nullable(self.entries.get_mut(key))
    }

    /// Removes `key`, returning its value if it was present.
    pub fn remove<Q>(&mut self, key: &Q) -> Optional<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        Optional::of_nullable(self.entries.remove(key))
    }

    /// Returns `true` if `key` has an entry.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }
}

impl<K, V, S: Default> Default for LookupMap<K, V, S> {
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for LookupMap<K, V, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.entries.iter()).finish()
    }
}

impl<K, V, S> FromIterator<(K, V)> for LookupMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<K, V, S> Extend<(K, V)> for LookupMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl<'a, K, V, S> IntoIterator for &'a LookupMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = hash_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
