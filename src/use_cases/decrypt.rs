//! Decrypt use case
//!
//! The only operation behind the biometric gate:
//!
//! ```text
//! Requested --key absent--> KeyNotFound
//!     |
//!     key present
//!     v
//! AuthorizationPending --denied--> Rejected
//!     |                --timeout/refused--> AuthorizationUnavailable
//!     approved
//!     v
//! Decrypting --> plaintext | ModuleFailure
//! ```
//!
//! Every terminal state is final; nothing is retried.

use std::sync::Arc;

use tracing::debug;

use crate::bridge;
use crate::error::{EnclaveResult, KeyError, ValidationError};
use crate::model::{AuthorizationPrompt, EncryptedPayload, EncryptionAlgorithm, KeyTag, DATA_FIELD};
use crate::ports::{BiometricGate, KeyStore};
use crate::use_cases::find_key_pair;

/// Decrypt `payload` with the key stored under `tag` after user approval
///
/// The gate is only consulted once the key is known to exist.
pub async fn decrypt<S, G>(
    store: &Arc<S>,
    gate: &Arc<G>,
    tag: &KeyTag,
    payload: &EncryptedPayload,
    prompt: &AuthorizationPrompt,
) -> EnclaveResult<Vec<u8>>
where
    S: KeyStore + ?Sized + 'static,
    G: BiometricGate + ?Sized,
{
    if payload.is_empty() {
        return Err(ValidationError::Empty { field: DATA_FIELD }.into());
    }

    if find_key_pair(store, tag).await?.is_none() {
        return Err(KeyError::NotFound.into());
    }

    debug!("Requesting authorization to decrypt with {}", tag);
    bridge::authorize(gate, prompt).await?;

    let store = Arc::clone(store);
    let key_tag = tag.clone();
    let ciphertext = payload.as_bytes().to_vec();
    let plaintext = bridge::offload("decrypt_data", move || {
        store.decrypt(&key_tag, EncryptionAlgorithm::default_ecies(), &ciphertext)
    })
    .await?;

    debug!("Decrypted {} bytes with {}", payload.len(), tag);
    Ok(plaintext)
}
