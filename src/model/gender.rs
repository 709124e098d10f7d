//! Gender of a person.

use std::fmt;

/// Gender recorded for a [`Person`](super::Person).
///
/// A person whose gender was never set reports [`Gender::Unspecified`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
    /// Not recorded.
    #[default]
    Unspecified,
}

impl fmt::Display for Gender {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Male => "MALE",
            Self::Female => "FEMALE",
            Self::Unspecified => "UNSPECIFIED",
        };
        formatter.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Gender::Male, "MALE")]
    #[case(Gender::Female, "FEMALE")]
    #[case(Gender::Unspecified, "UNSPECIFIED")]
    fn test_display(#[case] gender: Gender, #[case] expected: &str) {
        assert_eq!(gender.to_string(), expected);
    }

    #[rstest]
    fn test_default_is_unspecified() {
        assert_eq!(Gender::default(), Gender::Unspecified);
    }
}
