//! Storefront name type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`StoreName`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreNameError {
    /// The input string is empty.
    #[error("store name cannot be empty")]
    Empty,
    /// The input string is too long for a DNS label.
    #[error("store name must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains a character that is not allowed in a subdomain.
    #[error("store name contains invalid character {0:?}")]
    InvalidCharacter(char),
    /// The input starts or ends with a hyphen.
    #[error("store name cannot start or end with '-'")]
    LeadingOrTrailingHyphen,
}

/// A Shopify storefront name (the `{store}` in `{store}.myshopify.com`).
///
/// The name ends up in the host part of the outbound URL, so it is
/// restricted to a single DNS label. Input that already carries the
/// `.myshopify.com` suffix is accepted and reduced to the bare label.
///
/// ## Constraints
///
/// - Length: 1-63 characters
/// - ASCII letters, digits and `-` only
/// - Must not start or end with `-`
///
/// ## Examples
///
/// ```
/// use shopify_proxy_core::StoreName;
///
/// assert_eq!(StoreName::parse("acme").unwrap().as_str(), "acme");
/// assert_eq!(StoreName::parse("acme.myshopify.com").unwrap().as_str(), "acme");
///
/// assert!(StoreName::parse("").is_err());
/// assert!(StoreName::parse("evil.example.com/").is_err());
/// assert!(StoreName::parse("-acme").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct StoreName(String);

impl StoreName {
    /// Maximum length of a DNS label.
    pub const MAX_LENGTH: usize = 63;

    /// Domain suffix shared by every Shopify store.
    pub const DOMAIN_SUFFIX: &'static str = ".myshopify.com";

    /// Parse a `StoreName` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input (after stripping `.myshopify.com`):
    /// - Is empty
    /// - Is longer than 63 characters
    /// - Contains anything other than ASCII alphanumerics and `-`
    /// - Starts or ends with `-`
    pub fn parse(s: &str) -> Result<Self, StoreNameError> {
        let trimmed = s.trim();
        let label = trimmed.strip_suffix(Self::DOMAIN_SUFFIX).unwrap_or(trimmed);

        if label.is_empty() {
            return Err(StoreNameError::Empty);
        }

        if label.len() > Self::MAX_LENGTH {
            return Err(StoreNameError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        if let Some(c) = label
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-'))
        {
            return Err(StoreNameError::InvalidCharacter(c));
        }

        if label.starts_with('-') || label.ends_with('-') {
            return Err(StoreNameError::LeadingOrTrailingHyphen);
        }

        Ok(Self(label.to_ascii_lowercase()))
    }

    /// Returns the store name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the store's `myshopify.com` hostname.
    #[must_use]
    pub fn host(&self) -> String {
        format!("{}{}", self.0, Self::DOMAIN_SUFFIX)
    }
}

impl fmt::Display for StoreName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for StoreName {
    type Err = StoreNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for StoreName {
    type Error = StoreNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<StoreName> for String {
    fn from(name: StoreName) -> Self {
        name.0
    }
}

impl AsRef<str> for StoreName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
