use std::fmt;

use crate::error::ValidationError;

/// Human-readable reason shown by the biometric prompt
///
/// Display context only; it has no effect on the cryptography.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationPrompt(String);

impl AuthorizationPrompt {
    /// Name of the field carrying the prompt at the host boundary
    pub const FIELD: &'static str = "touchIdPrompt";

    pub fn new(prompt: impl Into<String>) -> Result<Self, ValidationError> {
        let prompt = prompt.into();
        if prompt.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(prompt))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuthorizationPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
