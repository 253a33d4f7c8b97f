//! Mock key store for testing error mapping
//!
//! Delegates to a [`SoftwareKeyStore`] unless a failure has been scripted for
//! the called method. Also counts calls so tests can assert which store
//! operations were reached.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::adapters::SoftwareKeyStore;
use crate::model::{EncryptionAlgorithm, KeyConfig, KeyTag, PublicKey};
use crate::ports::{KeyStore, StoreError, StoreResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreCall {
    Generate,
    PublicKey,
    Delete,
    Encrypt,
    Decrypt,
}

pub struct MockKeyStore {
    inner: SoftwareKeyStore,
    pub available: bool,
    failures: Mutex<HashMap<StoreCall, StoreError>>,
    calls: Mutex<Vec<StoreCall>>,
}

impl MockKeyStore {
    pub fn new() -> Self {
        Self {
            inner: SoftwareKeyStore::new(),
            available: true,
            failures: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    /// Make every subsequent `call` fail with `err`
    pub fn fail(&self, call: StoreCall, err: StoreError) {
        self.failures.lock().unwrap().insert(call, err);
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, call: StoreCall) -> usize {
        self.calls().into_iter().filter(|c| *c == call).count()
    }

    fn record(&self, call: StoreCall) -> StoreResult<()> {
        self.calls.lock().unwrap().push(call);
        match self.failures.lock().unwrap().get(&call) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

impl KeyStore for MockKeyStore {
    fn is_available(&self) -> bool {
        self.available
    }

    fn generate(&self, tag: &KeyTag, config: &KeyConfig) -> StoreResult<PublicKey> {
        self.record(StoreCall::Generate)?;
        self.inner.generate(tag, config)
    }

    fn public_key(&self, tag: &KeyTag) -> StoreResult<PublicKey> {
        self.record(StoreCall::PublicKey)?;
        self.inner.public_key(tag)
    }

    fn delete(&self, tag: &KeyTag) -> StoreResult<()> {
        self.record(StoreCall::Delete)?;
        self.inner.delete(tag)
    }

    fn encrypt(
        &self,
        tag: &KeyTag,
        algorithm: EncryptionAlgorithm,
        plaintext: &[u8],
    ) -> StoreResult<Vec<u8>> {
        self.record(StoreCall::Encrypt)?;
        self.inner.encrypt(tag, algorithm, plaintext)
    }

    fn decrypt(
        &self,
        tag: &KeyTag,
        algorithm: EncryptionAlgorithm,
        ciphertext: &[u8],
    ) -> StoreResult<Vec<u8>> {
        self.record(StoreCall::Decrypt)?;
        self.inner.decrypt(tag, algorithm, ciphertext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract_tests_for;
    use crate::ports::contract_tests::key_store_contract;

    contract_tests_for!(
        mock_keystore_contract,
        make = MockKeyStore::new,
        tests = {
            test_generate_success => key_store_contract::test_generate_success,
            test_generate_occupied_tag => key_store_contract::test_generate_occupied_tag,
            test_public_key_not_found => key_store_contract::test_public_key_not_found,
            test_delete_then_generate_fresh_key => key_store_contract::test_delete_then_generate_fresh_key,
            test_encrypt_decrypt_success => key_store_contract::test_encrypt_decrypt_success,
        }
    );

    #[test]
    fn test_scripted_failure() {
        let store = MockKeyStore::new();
        let tag = KeyTag::new("net.example.mock").unwrap();
        store.fail(
            StoreCall::Generate,
            StoreError::Other {
                code: -1,
                reason: "boom".to_string(),
            },
        );

        let err = store.generate(&tag, &KeyConfig::software()).unwrap_err();
        assert_eq!(err.code(), -1);
        assert_eq!(store.count(StoreCall::Generate), 1);
        assert_eq!(store.public_key(&tag).unwrap_err(), StoreError::ItemNotFound);
    }
}
