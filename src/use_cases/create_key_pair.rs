//! Create key pair use case
//!
//! Creation is not idempotent: an occupied tag is reported to the caller,
//! who must delete the existing key first.

use std::sync::Arc;

use tracing::info;

use crate::bridge;
use crate::error::{EnclaveResult, KeyError};
use crate::model::{KeyConfig, KeyTag, PublicKey};
use crate::ports::KeyStore;
use crate::use_cases::find_key_pair;

/// Generate a new key pair under `tag` and return its public key
///
/// # Errors
///
/// - `KeyError::AlreadyExists` if `tag` is occupied, either before the call
///   or when the store reports a duplicate during generation
/// - `ModuleError::Store` for any other store failure
pub async fn create_key_pair<S>(
    store: &Arc<S>,
    tag: &KeyTag,
    config: &KeyConfig,
) -> EnclaveResult<PublicKey>
where
    S: KeyStore + ?Sized + 'static,
{
    if find_key_pair(store, tag).await?.is_some() {
        return Err(KeyError::AlreadyExists.into());
    }

    let generator = Arc::clone(store);
    let key_tag = tag.clone();
    let key_config = *config;
    let public_key =
        bridge::offload("generate_key", move || generator.generate(&key_tag, &key_config)).await?;

    info!("Created key {} ({}...)", tag, public_key.fingerprint());
    Ok(public_key)
}
