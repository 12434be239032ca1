//! Validated customer contact fields.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a contact field.
#[derive(thiserror::Error, Debug, Clone)]
pub enum ContactFieldError {
    /// The input string is empty.
    #[error("field cannot be empty")]
    Empty,
    /// A name contains something other than letters and whitespace.
    #[error("name must contain only letters and spaces")]
    InvalidName,
    /// A mobile number is not exactly ten decimal digits.
    #[error("mobile number must be exactly 10 digits")]
    InvalidMobileNumber,
}

/// A customer's name as accepted on the details form.
///
/// ## Constraints
///
/// - Non-empty
/// - ASCII letters and whitespace only (no digits or punctuation)
///
/// ## Examples
///
/// ```
/// use peppercorn_core::CustomerName;
///
/// assert!(CustomerName::parse("Jane Doe").is_ok());
/// assert!(CustomerName::parse("John123").is_err());
/// assert!(CustomerName::parse("").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct CustomerName(String);

impl CustomerName {
    /// Parse a `CustomerName` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty or contains characters other
    /// than ASCII letters and whitespace.
    pub fn parse(s: &str) -> Result<Self, ContactFieldError> {
        if s.is_empty() {
            return Err(ContactFieldError::Empty);
        }

        if !s
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        {
            return Err(ContactFieldError::InvalidName);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `CustomerName` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CustomerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CustomerName {
    type Err = ContactFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for CustomerName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A ten-digit mobile phone number.
///
/// ## Examples
///
/// ```
/// use peppercorn_core::MobileNumber;
///
/// assert!(MobileNumber::parse("9876543210").is_ok());
/// assert!(MobileNumber::parse("12345").is_err());      // too short
/// assert!(MobileNumber::parse("987654321x").is_err()); // non-digit
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct MobileNumber(String);

impl MobileNumber {
    /// Required number of digits.
    pub const LENGTH: usize = 10;

    /// Parse a `MobileNumber` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, or is not exactly ten ASCII
    /// decimal digits.
    pub fn parse(s: &str) -> Result<Self, ContactFieldError> {
        if s.is_empty() {
            return Err(ContactFieldError::Empty);
        }

        if s.len() != Self::LENGTH || !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(ContactFieldError::InvalidMobileNumber);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `MobileNumber` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for MobileNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for MobileNumber {
    type Err = ContactFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for MobileNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// SQLx support (with postgres feature)
#[cfg(feature = "postgres")]
macro_rules! impl_pg_text {
    ($name:ident) => {
        impl sqlx::Type<sqlx::Postgres> for $name {
            fn type_info() -> sqlx::postgres::PgTypeInfo {
                <String as sqlx::Type<sqlx::Postgres>>::type_info()
            }

            fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
                <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
            }
        }

        impl<'r> sqlx::Decode<'r, sqlx::Postgres> for $name {
            fn decode(
                value: sqlx::postgres::PgValueRef<'r>,
            ) -> Result<Self, sqlx::error::BoxDynError> {
                let s = <String as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
                // Database values are assumed valid
                Ok(Self(s))
            }
        }

        impl sqlx::Encode<'_, sqlx::Postgres> for $name {
            fn encode_by_ref(
                &self,
                buf: &mut sqlx::postgres::PgArgumentBuffer,
            ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
                <String as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
            }
        }
    };
}

#[cfg(feature = "postgres")]
impl_pg_text!(CustomerName);
#[cfg(feature = "postgres")]
impl_pg_text!(MobileNumber);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_names() {
        assert!(CustomerName::parse("Jane Doe").is_ok());
        assert!(CustomerName::parse("Jane").is_ok());
        assert!(CustomerName::parse("a b c").is_ok());
    }

    #[test]
    fn test_parse_name_with_digits() {
        assert!(matches!(
            CustomerName::parse("John123"),
            Err(ContactFieldError::InvalidName)
        ));
    }

    #[test]
    fn test_parse_name_with_punctuation() {
        assert!(matches!(
            CustomerName::parse("O'Brien"),
            Err(ContactFieldError::InvalidName)
        ));
    }

    #[test]
    fn test_parse_empty_name() {
        assert!(matches!(
            CustomerName::parse(""),
            Err(ContactFieldError::Empty)
        ));
    }

    #[test]
    fn test_parse_valid_mobile() {
        let mobile = MobileNumber::parse("9876543210").unwrap();
        assert_eq!(mobile.as_str(), "9876543210");
    }

    #[test]
    fn test_parse_mobile_wrong_length() {
        assert!(matches!(
            MobileNumber::parse("12345"),
            Err(ContactFieldError::InvalidMobileNumber)
        ));
        assert!(matches!(
            MobileNumber::parse("98765432101"),
            Err(ContactFieldError::InvalidMobileNumber)
        ));
    }

    #[test]
    fn test_parse_mobile_non_digit() {
        assert!(matches!(
            MobileNumber::parse("98765x3210"),
            Err(ContactFieldError::InvalidMobileNumber)
        ));
    }

    #[test]
    fn test_parse_empty_mobile() {
        assert!(matches!(
            MobileNumber::parse(""),
            Err(ContactFieldError::Empty)
        ));
    }
}
