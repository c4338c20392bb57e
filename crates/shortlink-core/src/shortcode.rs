use crate::codec;
use std::fmt::Display;

/// A short code issued by the store.
///
/// Codes are base-62 encodings of counter values and are never chosen by
/// callers, so there is no validating constructor.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ShortCode(String);

impl ShortCode {
    /// Encodes a counter value as a short code.
    pub fn from_id(id: u64) -> Self {
        Self(codec::encode(id))
    }

    /// Creates a `ShortCode` without checking that it came from the codec.
    ///
    /// Lookups use this for codes extracted from user input.
    pub fn new_unchecked(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the counter value this code was minted from, if it is a valid
    /// base-62 string.
    pub fn id(&self) -> Option<u64> {
        codec::decode(&self.0)
    }

    /// Builds the externally visible short link.
    ///
    /// `base_url` is used verbatim as the prefix, so it should already end
    /// with `/`.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}{}", base_url, self.0)
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ShortCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
