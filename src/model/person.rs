//! Person entity and its email emptiness policy.

use chrono::NaiveDate;

use crate::filter;
use crate::optional::Optional;

use super::address::Address;
use super::gender::Gender;

/// Whether an empty stored email address counts as present.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EmptyPolicy {
    /// An empty string reads as `Absent`.
    #[default]
    Reject,
    /// An empty string reads as `Present("")`.
    Allow,
}

impl EmptyPolicy {
    /// Returns `true` if empty strings are reported as present.
    pub const fn permits_empty(self) -> bool {
        matches!(self, Self::Allow)
    }
}

impl From<bool> for EmptyPolicy {
    fn from(allow_empty: bool) -> Self {
        if allow_empty { Self::Allow } else { Self::Reject }
    }
}

/// A person whose contact and personal details may be unset.
///
/// Raw values are stored as given; the emptiness rule for the email address
/// is applied when it is read, so toggling [`set_allow_empty`] affects only
/// later reads.
///
/// # Examples
///
/// ```rust
/// use optfield::model::Person;
///
/// let mut person = Person::new();
/// assert_eq!(person.email_address().to_string(), "Optional.empty");
///
/// person.set_email_address("");
/// assert!(person.email_address().is_absent());
///
/// person.set_allow_empty(true);
/// assert_eq!(person.email_address().to_string(), "Optional[]");
///
/// person.set_email_address("foo@bar.com");
/// assert_eq!(person.email_address().to_string(), "Optional[foo@bar.com]");
/// ```
///
/// [`set_allow_empty`]: Person::set_allow_empty
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Person {
    email_address: Option<String>,
    address: Option<Address>,
    gender: Gender,
    birthday: Option<NaiveDate>,
    empty_policy: EmptyPolicy,
}

impl Person {
    /// Creates a person with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a person living at `address`.
    pub fn with_address(address: Address) -> Self {
        Self {
            address: Some(address),
            ..Self::default()
        }
    }

    // =========================================================================
    // Email address
    // =========================================================================

    /// Returns the email address.
    ///
    /// The result is `Absent` when nothing was stored, or when the stored
    /// string is empty and the empty policy is [`EmptyPolicy::Reject`].
    /// A non-empty address is always present.
    pub fn email_address(&self) -> Optional<&str> {
        match self.email_address.as_deref() {
            Some("") if !self.empty_policy.permits_empty() => {
                tracing::trace!(policy = ?self.empty_policy, "empty email address read as absent");
                Optional::absent()
            }
            stored => Optional::of_nullable(stored),
        }
    }

    /// Stores the email address as given. No validation happens here.
    pub fn set_email_address(&mut self, email_address: impl Into<String>) {
        self.email_address = Some(email_address.into());
    }

    /// Removes the stored email address.
    pub fn clear_email_address(&mut self) {
        self.email_address = None;
    }

    /// Returns `true` if an empty email address reads as present.
    pub const fn allow_empty(&self) -> bool {
        self.empty_policy.permits_empty()
    }

    /// Toggles whether an empty email address reads as present.
    pub fn set_allow_empty(&mut self, allow_empty: bool) {
        self.empty_policy = EmptyPolicy::from(allow_empty);
    }

    /// Returns the emptiness policy applied to the email address.
    pub const fn empty_policy(&self) -> EmptyPolicy {
        self.empty_policy
    }

    /// Replaces the emptiness policy applied to the email address.
    pub fn set_empty_policy(&mut self, policy: EmptyPolicy) {
        self.empty_policy = policy;
    }

    // =========================================================================
    // Address
    // =========================================================================

    /// Returns the address, or `Absent` if none was set.
    pub fn address(&self) -> Optional<&Address> {
        Optional::of_nullable(self.address.as_ref())
    }

    /// Sets the address.
    pub fn set_address(&mut self, address: Address) {
        self.address = Some(address);
    }

    /// Removes the address, returning the previous one.
    pub fn clear_address(&mut self) -> Optional<Address> {
        Optional::of_nullable(self.address.take())
    }

    // =========================================================================
    // Gender and birthday
    // =========================================================================

    /// Returns the gender; [`Gender::Unspecified`] if never set.
    pub const fn gender(&self) -> Gender {
        self.gender
    }

    /// Sets the gender.
    pub fn set_gender(&mut self, gender: Gender) {
        self.gender = gender;
    }

    /// Returns the birthday, or `Absent` if none was set.
    pub fn birthday(&self) -> Optional<NaiveDate> {
        Optional::of_nullable(self.birthday)
    }

    /// Sets the birthday.
    pub fn set_birthday(&mut self, birthday: NaiveDate) {
        self.birthday = Some(birthday);
    }

    /// Removes the birthday.
    pub fn clear_birthday(&mut self) {
        self.birthday = None;
    }

    // =========================================================================
    // Roster operations
    // =========================================================================

    /// Removes, in place, every person in `roster` matching `predicate`.
    ///
    /// See [`filter::filter`] for the ordering guarantees.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optfield::model::{Gender, Person};
    ///
    /// let mut male = Person::new();
    /// male.set_gender(Gender::Male);
    /// let mut roster = vec![male, Person::new()];
    ///
    /// Person::filter(&mut roster, |person| person.gender() == Gender::Male);
    /// assert_eq!(roster, vec![Person::new()]);
    /// ```
    pub fn filter<P>(roster: &mut Vec<Self>, predicate: P)
    where
        P: FnMut(&Self) -> bool,
    {
        filter::filter(roster, predicate);
    }
}
