//! Vote code value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of decimal digits in a vote code
pub const VOTE_CODE_LEN: usize = 5;

/// A 5-digit credential gating one voting action (Value Object)
///
/// Codes stay strings so leading zeros survive (`"00042"`). Surrounding
/// whitespace is trimmed before the format check; anything other than
/// exactly five ASCII digits is rejected.
///
/// Only the format is checked here. Whether the server accepts the code
/// is decided at vote time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VoteCode(String);

impl VoteCode {
    /// Parse a vote code from raw user input
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        if Self::is_well_formed(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(DomainError::InvalidCodeFormat(trimmed.to_string()))
        }
    }

    /// Exactly [`VOTE_CODE_LEN`] ASCII decimal digits, nothing else.
    pub fn is_well_formed(candidate: &str) -> bool {
        candidate.len() == VOTE_CODE_LEN && candidate.bytes().all(|b| b.is_ascii_digit())
    }

    /// Get the code as sent to the server
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VoteCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for VoteCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for VoteCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<VoteCode> for String {
    fn from(code: VoteCode) -> Self {
        code.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_five_digits() {
        let code = VoteCode::parse("12345").unwrap();
        assert_eq!(code.as_str(), "12345");
    }

    #[test]
    fn test_keeps_leading_zeros() {
        let code = VoteCode::parse("00042").unwrap();
        assert_eq!(code.to_string(), "00042");
    }

    #[test]
    fn test_trims_whitespace() {
        let code = VoteCode::parse("  54321\n").unwrap();
        assert_eq!(code.as_str(), "54321");
    }

    #[test]
    fn test_rejects_malformed_codes() {
        for input in [
            "", "1234", "123456", "12a45", "12 45", "-1234", "+1234", "1234.", "１２３４５",
            "١٢٣٤٥", "    ",
        ] {
            assert!(
                VoteCode::parse(input).is_err(),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_error_carries_trimmed_input() {
        let err = VoteCode::parse(" 1234 ").unwrap_err();
        assert_eq!(err, DomainError::InvalidCodeFormat("1234".to_string()));
    }

    #[test]
    fn test_deserialize_validates() {
        let code: VoteCode = serde_json::from_str("\"07007\"").unwrap();
        assert_eq!(code.as_str(), "07007");
        assert!(serde_json::from_str::<VoteCode>("\"7007\"").is_err());
    }
}
