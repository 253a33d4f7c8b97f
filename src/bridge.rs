//! Async execution bridge
//!
//! Key-store calls block (the hardware may take a while), so they run on the
//! blocking pool. Gate answers are awaited directly. Every external failure
//! leaves this module already classified as an [`EnclaveError`].

use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::{AuthorizationError, EnclaveError, EnclaveResult, ModuleError};
use crate::model::AuthorizationPrompt;
use crate::ports::{AuthOutcome, BiometricGate, StoreResult};

/// Run a blocking store call for `op` without stalling the executor
pub async fn offload<T, F>(op: &'static str, call: F) -> EnclaveResult<T>
where
    T: Send + 'static,
    F: FnOnce() -> StoreResult<T> + Send + 'static,
{
    debug!("Offloading {}", op);
    let joined = tokio::task::spawn_blocking(call).await.map_err(|err| {
        EnclaveError::Module(ModuleError::Task {
            op,
            reason: err.to_string(),
        })
    })?;
    joined.map_err(|err| EnclaveError::from_store(op, err))
}

/// Ask `gate` for approval; anything but an explicit yes is an error
pub async fn authorize<G>(gate: &Arc<G>, prompt: &AuthorizationPrompt) -> EnclaveResult<()>
where
    G: BiometricGate + ?Sized,
{
    match gate.authorize(prompt).await {
        AuthOutcome::Approved => {
            debug!("Authorization approved");
            Ok(())
        }
        AuthOutcome::Denied { code } => {
            warn!("Authorization rejected by user (code {})", code);
            Err(AuthorizationError::Rejected { code }.into())
        }
        AuthOutcome::TimedOut => {
            warn!("Authorization prompt timed out");
            Err(AuthorizationError::TimedOut.into())
        }
        AuthOutcome::Refused { reason, code } => {
            warn!("Authorization prompt refused: {}", reason);
            Err(AuthorizationError::Refused { reason, code }.into())
        }
    }
}
