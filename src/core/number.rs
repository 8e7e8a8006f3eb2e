//! Typed, validated document numbers.

/// Define a newtype over a normalized, validated digit string.
///
/// The generated type can only be built through the document's `check`
/// function, so holding one proves the number passed validation. It
/// displays in masked form and serializes as bare digits.
macro_rules! document_number {
    (
        $(#[$meta:meta])*
        $name:ident, kind = $kind:expr, check = $check:path, mask = $mask:path
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            /// The document kind this number belongs to.
            pub const KIND: $crate::core::DocumentKind = $kind;

            /// Normalize and validate `input`.
            pub fn parse(input: &str) -> Result<Self, $crate::core::DocumentError> {
                $check(input)
            }

            pub(crate) fn from_normalized(digits: String) -> Self {
                Self(digits)
            }

            /// The normalized digits, without punctuation.
            pub fn as_digits(&self) -> &str {
                &self.0
            }

            /// The number with its display mask applied.
            pub fn formatted(&self) -> String {
                $mask(&self.0)
            }

            /// Consume the number, returning its digits.
            pub fn into_digits(self) -> String {
                self.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::core::DocumentError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.formatted())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                Self::parse(&raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use document_number;
