//! BiometricGate trait - capability to obtain live user approval

use async_trait::async_trait;

use crate::model::AuthorizationPrompt;

/// `LAErrorAuthenticationFailed`
pub const LA_ERROR_AUTHENTICATION_FAILED: i64 = -1;
/// `LAErrorUserCancel`
pub const LA_ERROR_USER_CANCEL: i64 = -2;
/// `LAErrorBiometryNotAvailable`
pub const LA_ERROR_BIOMETRY_NOT_AVAILABLE: i64 = -6;
/// `LAErrorNotInteractive`
pub const LA_ERROR_NOT_INTERACTIVE: i64 = -1004;

/// Terminal answer of a single authorization request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Approved,
    /// The user dismissed or failed the prompt
    Denied { code: i64 },
    /// Nobody answered within the subsystem's window
    TimedOut,
    /// The prompt could not be presented
    Refused { reason: String, code: Option<i64> },
}

/// Capability to ask the user for biometric approval
///
/// Implementations may wait for a human for tens of seconds; they must do so
/// without blocking the executor thread.
#[async_trait]
pub trait BiometricGate: Send + Sync {
    /// Whether the biometric subsystem is present on this host
    fn is_available(&self) -> bool;

    /// Present `prompt` and wait for the user's answer
    async fn authorize(&self, prompt: &AuthorizationPrompt) -> AuthOutcome;
}
