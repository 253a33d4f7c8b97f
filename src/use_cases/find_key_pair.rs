//! Find key pair use case

use std::sync::Arc;

use tracing::debug;

use crate::bridge;
use crate::error::{EnclaveError, EnclaveResult, KeyError};
use crate::model::{KeyTag, PublicKey};
use crate::ports::KeyStore;

/// Look up the public key stored under `tag`
///
/// A missing key is a normal outcome (`None`), not an error.
pub async fn find_key_pair<S>(store: &Arc<S>, tag: &KeyTag) -> EnclaveResult<Option<PublicKey>>
where
    S: KeyStore + ?Sized + 'static,
{
    let store = Arc::clone(store);
    let key_tag = tag.clone();
    match bridge::offload("find_key", move || store.public_key(&key_tag)).await {
        Ok(public_key) => {
            debug!("Found key {} ({}...)", tag, public_key.fingerprint());
            Ok(Some(public_key))
        }
        Err(EnclaveError::Key(KeyError::NotFound)) => {
            debug!("No key stored under {}", tag);
            Ok(None)
        }
        Err(err) => Err(err),
    }
}
