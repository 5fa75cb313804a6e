//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum shared by every crate.

/// Error classification
///
/// ## Notes
/// * `non_exhaustive` - new kinds may be added later
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::ExternalFailure;
/// assert_eq!(kind.as_str(), "External Failure");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Malformed or non-numeric input supplied by the caller
    InvalidInput,
    /// A collaborator (routing service, rate configuration) failed
    ExternalFailure,
    /// Bug or unexpected state inside this process
    Internal,
}

impl ErrorKind {
    /// Human-readable name
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "Invalid Input",
            ErrorKind::ExternalFailure => "External Failure",
            ErrorKind::Internal => "Internal",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str() {
        assert_eq!(ErrorKind::InvalidInput.as_str(), "Invalid Input");
        assert_eq!(ErrorKind::ExternalFailure.as_str(), "External Failure");
        assert_eq!(ErrorKind::Internal.as_str(), "Internal");
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorKind::ExternalFailure.to_string(), "External Failure");
    }
}
