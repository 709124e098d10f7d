//! Error types for optional-value construction and extraction.
//!
//! Absence is never an error in this crate; it is carried by
//! [`Optional::Absent`](crate::optional::Optional::Absent). The variants here
//! cover the two places where a caller explicitly asserts that a value exists.

use thiserror::Error;

/// Errors raised when a value was required but not supplied.
///
/// # Examples
///
/// ```rust
/// use optfield::error::OptionalError;
/// use optfield::optional::Optional;
///
/// let error = Optional::<i32>::try_present(None).unwrap_err();
/// assert_eq!(error, OptionalError::InvalidArgument { operation: "present" });
/// assert_eq!(error.to_string(), "invalid argument: present requires a value");
///
/// let missing: Optional<i32> = Optional::absent();
/// assert_eq!(missing.get().unwrap_err().to_string(), "No value present");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum OptionalError {
    /// A present value was constructed from a missing payload.
    #[error("invalid argument: {operation} requires a value")]
    InvalidArgument {
        /// Name of the operation that rejected the payload.
        operation: &'static str,
    },
    /// A value was extracted from an absent optional.
    #[error("No value present")]
    NoSuchElement,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_invalid_argument_display() {
        let error = OptionalError::InvalidArgument {
            operation: "present",
        };

        assert_eq!(error.to_string(), "invalid argument: present requires a value");
    }

    #[rstest]
    fn test_no_such_element_display() {
        assert_eq!(OptionalError::NoSuchElement.to_string(), "No value present");
    }

    #[rstest]
    fn test_error_trait() {
        let error = OptionalError::NoSuchElement;

        // Verify that std::error::Error is implemented
        let _: &dyn std::error::Error = &error;
    }
}
