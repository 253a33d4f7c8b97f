//! Encrypt use case

use std::sync::Arc;

use tracing::debug;

use crate::bridge;
use crate::error::{EnclaveResult, ValidationError};
use crate::model::{EncryptedPayload, EncryptionAlgorithm, KeyTag, DATA_FIELD};
use crate::ports::KeyStore;

/// Encrypt `plaintext` to the public half of the key stored under `tag`
///
/// No user approval is needed. Fails with `KeyError::NotFound` when the tag
/// holds no key.
pub async fn encrypt<S>(store: &Arc<S>, tag: &KeyTag, plaintext: &[u8]) -> EnclaveResult<EncryptedPayload>
where
    S: KeyStore + ?Sized + 'static,
{
    if plaintext.is_empty() {
        return Err(ValidationError::Empty { field: DATA_FIELD }.into());
    }

    let store = Arc::clone(store);
    let key_tag = tag.clone();
    let data = plaintext.to_vec();
    let ciphertext = bridge::offload("encrypt_data", move || {
        store.encrypt(&key_tag, EncryptionAlgorithm::default_ecies(), &data)
    })
    .await?;

    debug!("Encrypted {} bytes with {}", plaintext.len(), tag);
    Ok(EncryptedPayload::from(ciphertext))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock_keystore::{MockKeyStore, StoreCall};
    use crate::error::ErrorKind;
    use crate::model::KeyConfig;
    use crate::ports::{StoreError, ERR_SEC_UNIMPLEMENTED};

    fn tag() -> KeyTag {
        KeyTag::new("net.example.encrypt").unwrap()
    }

    #[tokio::test]
    async fn test_encrypt_success() {
        let store = Arc::new(MockKeyStore::new());
        store.generate(&tag(), &KeyConfig::software()).unwrap();

        let payload = encrypt(&store, &tag(), b"Hello, world!").await.unwrap();
        assert!(payload.len() > b"Hello, world!".len());
        assert_ne!(payload.as_bytes(), b"Hello, world!");
    }

    #[tokio::test]
    async fn test_encrypt_missing_key() {
        let store = Arc::new(MockKeyStore::new());

        let err = encrypt(&store, &KeyTag::new("missing-tag").unwrap(), b"data")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::KeyNotFound);
        assert!(err.key_not_found());
        assert_eq!(err.to_string(), "Key not found in key store");
    }

    #[tokio::test]
    async fn test_encrypt_empty_plaintext() {
        let store = Arc::new(MockKeyStore::new());

        let err = encrypt(&store, &tag(), b"").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(store.calls().is_empty());
    }

    #[tokio::test]
    async fn test_encrypt_algorithm_not_supported() {
        let store = Arc::new(MockKeyStore::new());
        store.generate(&tag(), &KeyConfig::software()).unwrap();
        store.fail(StoreCall::Encrypt, StoreError::AlgorithmNotSupported);

        let err = encrypt(&store, &tag(), b"data").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ModuleFailure);
        assert_eq!(err.code(), Some(ERR_SEC_UNIMPLEMENTED));
        assert_eq!(err.to_string(), "encrypt_data: Algorithm not supported");
    }
}
