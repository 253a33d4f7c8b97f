//! Delete key pair use case

use std::sync::Arc;

use tracing::info;

use crate::bridge;
use crate::error::{EnclaveError, EnclaveResult, KeyError};
use crate::model::KeyTag;
use crate::ports::KeyStore;

/// Remove the key stored under `tag`
///
/// Returns `false` when there was nothing to delete.
pub async fn delete_key_pair<S>(store: &Arc<S>, tag: &KeyTag) -> EnclaveResult<bool>
where
    S: KeyStore + ?Sized + 'static,
{
    let store = Arc::clone(store);
    let key_tag = tag.clone();
    match bridge::offload("delete_key", move || store.delete(&key_tag)).await {
        Ok(()) => {
            info!("Deleted key {}", tag);
            Ok(true)
        }
        Err(EnclaveError::Key(KeyError::NotFound)) => Ok(false),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock_keystore::{MockKeyStore, StoreCall};
    use crate::error::ErrorKind;
    use crate::model::KeyConfig;
    use crate::ports::{StoreError, ERR_SEC_PARAM};

    fn tag() -> KeyTag {
        KeyTag::new("net.example.delete").unwrap()
    }

    #[tokio::test]
    async fn test_delete_existing_then_absent() {
        let store = Arc::new(MockKeyStore::new());
        store.generate(&tag(), &KeyConfig::software()).unwrap();

        assert!(delete_key_pair(&store, &tag()).await.unwrap());
        assert!(!delete_key_pair(&store, &tag()).await.unwrap());
        assert_eq!(store.public_key(&tag()).unwrap_err(), StoreError::ItemNotFound);
    }

    #[tokio::test]
    async fn test_delete_store_failure() {
        let store = Arc::new(MockKeyStore::new());
        store.fail(
            StoreCall::Delete,
            StoreError::Param {
                reason: "bad query".to_string(),
            },
        );

        let err = delete_key_pair(&store, &tag()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ModuleFailure);
        assert_eq!(err.code(), Some(ERR_SEC_PARAM));
    }
}
