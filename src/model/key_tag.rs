use std::fmt;

use crate::error::ValidationError;

/// Caller-chosen identifier of a key pair in the key store
///
/// Key tags are global to the store, so callers conventionally use reverse
/// DNS notation (`com.example.app.signing-key`). The tag is the only handle
/// the binding ever holds for a key pair.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct KeyTag(String);

impl KeyTag {
    /// Name of the field carrying the tag at the host boundary
    pub const FIELD: &'static str = "keyTag";

    /// Create a key tag
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Empty` if the tag is empty or whitespace only
    pub fn new(tag: impl Into<String>) -> Result<Self, ValidationError> {
        let tag = tag.into();
        if tag.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(tag))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for KeyTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyTag({:?})", self.0)
    }
}

impl fmt::Display for KeyTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for KeyTag {
    type Error = ValidationError;

    fn try_from(tag: &str) -> Result<Self, Self::Error> {
        Self::new(tag)
    }
}

impl TryFrom<String> for KeyTag {
    type Error = ValidationError;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        Self::new(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_tag_valid() {
        let tag = KeyTag::new("net.example.app.key").unwrap();
        assert_eq!(tag.as_str(), "net.example.app.key");
        assert_eq!(tag.as_bytes(), b"net.example.app.key");
    }

    #[test]
    fn test_key_tag_empty() {
        assert_eq!(
            KeyTag::new("").unwrap_err(),
            ValidationError::Empty { field: "keyTag" }
        );
    }

    #[test]
    fn test_key_tag_whitespace_only() {
        assert_eq!(
            KeyTag::try_from(" \t\n").unwrap_err(),
            ValidationError::Empty { field: "keyTag" }
        );
    }

    #[test]
    fn test_key_tag_keeps_inner_whitespace() {
        let tag = KeyTag::try_from(" padded ".to_string()).unwrap();
        assert_eq!(tag.as_str(), " padded ");
    }
}
