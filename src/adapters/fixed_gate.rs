//! Biometric gate with a predetermined answer
//!
//! For headless hosts and tests. Counts how often it was consulted so callers
//! can assert that the gate was (or was not) entered.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tracing::debug;

use crate::model::AuthorizationPrompt;
use crate::ports::{AuthOutcome, BiometricGate, LA_ERROR_BIOMETRY_NOT_AVAILABLE, LA_ERROR_USER_CANCEL};

#[derive(Debug)]
pub struct FixedGate {
    outcome: AuthOutcome,
    available: bool,
    calls: AtomicUsize,
}

impl FixedGate {
    pub fn new(outcome: AuthOutcome) -> Self {
        Self {
            outcome,
            available: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn approving() -> Self {
        Self::new(AuthOutcome::Approved)
    }

    pub fn denying() -> Self {
        Self::new(AuthOutcome::Denied {
            code: LA_ERROR_USER_CANCEL,
        })
    }

    pub fn timing_out() -> Self {
        Self::new(AuthOutcome::TimedOut)
    }

    /// A gate on a host without biometric hardware
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new(AuthOutcome::Refused {
                reason: "biometry not available".to_string(),
                code: Some(LA_ERROR_BIOMETRY_NOT_AVAILABLE),
            })
        }
    }

    /// Number of authorization requests seen so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BiometricGate for FixedGate {
    fn is_available(&self) -> bool {
        self.available
    }

    async fn authorize(&self, prompt: &AuthorizationPrompt) -> AuthOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        debug!("Fixed gate answering {:?} to prompt {:?}", self.outcome, prompt.as_str());
        self.outcome.clone()
    }
}
