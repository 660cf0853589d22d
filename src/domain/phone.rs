//! PhoneNumber value object and the mobile-number policy it is checked against.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Default national mobile number length.
pub const DEFAULT_PHONE_LENGTH: usize = 9;

/// Default set of allowed leading digits.
pub const DEFAULT_PHONE_PREFIXES: &str = "679";

/// Locale policy for mobile numbers: a fixed number of ASCII digits whose
/// first digit belongs to a restricted set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhonePolicy {
    length: usize,
    leading_digits: Vec<char>,
}

impl PhonePolicy {
    /// Build a policy. Non-digit characters in `leading_digits` are ignored.
    pub fn new(length: usize, leading_digits: &str) -> Self {
        Self {
            length,
            leading_digits: leading_digits
                .chars()
                .filter(|c| c.is_ascii_digit())
                .collect(),
        }
    }

    pub fn leading_digits(&self) -> &[char] {
        &self.leading_digits
    }

    /// Check a trimmed phone string against the policy.
    pub fn matches(&self, phone: &str) -> bool {
        if phone.len() != self.length || !phone.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }

        phone
            .chars()
            .next()
            .map(|first| self.leading_digits.contains(&first))
            .unwrap_or(false)
    }
}

impl Default for PhonePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_PHONE_LENGTH, DEFAULT_PHONE_PREFIXES)
    }
}

/// A type-safe wrapper for a candidate's mobile phone number.
///
/// # Example
///
/// ```
/// use candidate_intake::domain::{PhoneNumber, PhonePolicy};
///
/// let phone = PhoneNumber::new("666777888", &PhonePolicy::default()).unwrap();
/// assert_eq!(phone.as_str(), "666777888");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating it against `policy`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the number does not match.
    pub fn new(phone: impl AsRef<str>, policy: &PhonePolicy) -> Result<Self, ValidationError> {
        let phone = phone.as_ref().trim();

        if !policy.matches(phone) {
            return Err(ValidationError::InvalidPhone);
        }

        Ok(Self(phone.to_string()))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Deserialization checks against the default policy.
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s, &PhonePolicy::default()).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        let policy = PhonePolicy::default();
        assert!(PhoneNumber::new("666777888", &policy).is_ok());
        assert!(PhoneNumber::new("712345678", &policy).is_ok());
        assert!(PhoneNumber::new("912345678", &policy).is_ok());
    }

    #[test]
    fn test_phone_validates_format() {
        let policy = PhonePolicy::default();
        assert!(PhoneNumber::new("123", &policy).is_err());
        assert!(PhoneNumber::new("", &policy).is_err());
        assert!(PhoneNumber::new("512345678", &policy).is_err());
        assert!(PhoneNumber::new("6667778889", &policy).is_err());
        assert!(PhoneNumber::new("66677788", &policy).is_err());
        assert!(PhoneNumber::new("666 777 88", &policy).is_err());
        assert!(PhoneNumber::new("+34666777", &policy).is_err());
    }

    #[test]
    fn test_phone_error_message() {
        let err = PhoneNumber::new("123", &PhonePolicy::default()).unwrap_err();
        assert_eq!(err.to_string(), "Invalid phone");
    }

    #[test]
    fn test_custom_policy() {
        let policy = PhonePolicy::new(10, "2-3");
        assert_eq!(policy.leading_digits(), &['2', '3']);
        assert!(PhoneNumber::new("2025550123", &policy).is_ok());
        assert!(PhoneNumber::new("666777888", &policy).is_err());
    }

    #[test]
    fn test_phone_is_trimmed() {
        let phone = PhoneNumber::new(" 666777888 ", &PhonePolicy::default()).unwrap();
        assert_eq!(phone.as_str(), "666777888");
    }

    #[test]
    fn test_phone_serde() {
        let phone: PhoneNumber = serde_json::from_str("\"666777888\"").unwrap();
        assert_eq!(serde_json::to_string(&phone).unwrap(), "\"666777888\"");

        let result: Result<PhoneNumber, _> = serde_json::from_str("\"123\"");
        assert!(result.is_err());
    }
}
