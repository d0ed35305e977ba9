//! Payment verification code type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`VerificationCode`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum CodeError {
    /// The input string is empty (or only whitespace).
    #[error("verification code cannot be empty")]
    Empty,
}

/// A normalized payment verification code.
///
/// Codes are entered by hand after an external checkout, so parsing is
/// forgiving: surrounding whitespace is stripped and the code is
/// upper-cased. Whether a code is *valid* is decided by the entitlement
/// allowlist, not by this type.
///
/// ```
/// use afroman_core::VerificationCode;
///
/// let code = VerificationCode::parse(" afroman2025 ").unwrap();
/// assert_eq!(code.as_str(), "AFROMAN2025");
///
/// assert!(VerificationCode::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct VerificationCode(String);

impl VerificationCode {
    /// Parse a `VerificationCode` from user input.
    ///
    /// # Errors
    ///
    /// Returns [`CodeError::Empty`] if the input is empty after trimming.
    pub fn parse(s: &str) -> Result<Self, CodeError> {
        let normalized = s.trim().to_uppercase();
        if normalized.is_empty() {
            return Err(CodeError::Empty);
        }
        Ok(Self(normalized))
    }

    /// Returns the normalized code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the code and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for VerificationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_case_and_whitespace() {
        let code = VerificationCode::parse("  premium2025\n").unwrap();
        assert_eq!(code.as_str(), "PREMIUM2025");
    }

    #[test]
    fn test_parse_already_normalized() {
        let code = VerificationCode::parse("EXCLUSIVE2025").unwrap();
        assert_eq!(code.as_str(), "EXCLUSIVE2025");
    }

    #[test]
    fn test_parse_empty_fails() {
        assert!(VerificationCode::parse("").is_err());
        assert!(VerificationCode::parse(" \t ").is_err());
    }
}
