//! Newtype IDs for type-safe entity references.
//!
//! Catalog identifiers are short human-readable slugs (`vanilla`,
//! `choco-truffle`) or generated base-36 strings, so the IDs wrap a `String`.
//! Use the `define_id!` macro to create wrappers that prevent mixing IDs from
//! different entity types.

use rand::Rng;

/// Macro to define a type-safe string ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>`, `From<&str>` and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use cakes_n_bells_core::define_id;
/// define_id!(CakeId);
/// define_id!(BoxId);
///
/// let cake = CakeId::new("vanilla");
/// let boxed = BoxId::new("vanilla");
///
/// // These are different types, so this won't compile:
/// // let _: CakeId = boxed;
/// assert_eq!(cake.as_str(), boxed.as_str());
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from anything string-like.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return the inner string.
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

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

define_id!(ProductId);

/// Length of generated product IDs.
pub const GENERATED_ID_LEN: usize = 9;

impl ProductId {
    /// Generate a fresh random product ID.
    ///
    /// Produces [`GENERATED_ID_LEN`] lowercase base-36 characters, the same
    /// shape as the IDs created by the admin panel before the catalog moved
    /// server-side.
    #[must_use]
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let id: String = (0..GENERATED_ID_LEN)
            .filter_map(|_| char::from_digit(rng.random_range(0..36), 36))
            .collect();
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_id_shape() {
        let id = ProductId::generate();
        assert_eq!(id.as_str().len(), GENERATED_ID_LEN);
        assert!(
            id.as_str()
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
        );
    }

    #[test]
    fn test_generated_ids_differ() {
        assert_ne!(ProductId::generate(), ProductId::generate());
    }

    #[test]
    fn test_serde_transparent() {
        let id = ProductId::new("vanilla");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"vanilla\"");

        let back: ProductId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, "vanilla");
    }
}
