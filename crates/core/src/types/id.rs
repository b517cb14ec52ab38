//! Newtype IDs for opaque Shopify identifiers.
//!
//! Shopify identifies resources with global IDs such as
//! `gid://shopify/Customer/123`. The proxy never interprets them; the
//! newtypes only stop a customer ID from being passed where a product ID
//! is expected.

/// Macro to define a type-safe wrapper around an opaque Shopify ID.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - `parse()` rejecting blank input, `as_str()`, `into_inner()`
/// - `Display` and `AsRef<str>`
///
/// # Example
///
/// ```rust
/// # use shopify_proxy_core::define_gid;
/// define_gid!(LocationId);
///
/// let id = LocationId::parse("gid://shopify/Location/1").unwrap();
/// assert_eq!(id.as_str(), "gid://shopify/Location/1");
/// assert!(LocationId::parse("  ").is_none());
/// ```
#[macro_export]
macro_rules! define_gid {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an ID from a raw value, rejecting empty or blank input.
            #[must_use]
            pub fn parse(raw: &str) -> Option<Self> {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(Self(trimmed.to_owned()))
                }
            }

            /// Get the underlying ID string.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_gid!(CustomerId);
define_gid!(ProductId);
