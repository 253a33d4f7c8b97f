//! In-process key store
//!
//! Stand-in for the hardware key store on hosts without a secure element,
//! equivalent to a regular-keychain build: keys are generated and used
//! inside this adapter and never handed to the binding. Keys live for the
//! lifetime of the store.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use p256::elliptic_curve::sec1::ToEncodedPoint;
use p256::SecretKey;
use rand_core::OsRng;
use tracing::debug;

use crate::logic::ecies::{self, EciesError};
use crate::model::{EncryptionAlgorithm, KeyAlgorithm, KeyConfig, KeyTag, PublicKey, Token};
use crate::ports::{KeyStore, StoreError, StoreResult, ERR_SEC_INTERNAL_COMPONENT};

#[derive(Default)]
pub struct SoftwareKeyStore {
    keys: Mutex<HashMap<KeyTag, SecretKey>>,
}

impl SoftwareKeyStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn keys(&self) -> StoreResult<MutexGuard<'_, HashMap<KeyTag, SecretKey>>> {
        self.keys.lock().map_err(|_| StoreError::Other {
            code: ERR_SEC_INTERNAL_COMPONENT,
            reason: "key store lock poisoned".to_string(),
        })
    }
}

fn export(public: &p256::PublicKey) -> PublicKey {
    PublicKey::from_bytes(public.to_encoded_point(false).as_bytes().to_vec())
}

impl From<EciesError> for StoreError {
    fn from(err: EciesError) -> Self {
        match err {
            EciesError::Cipher | EciesError::Kdf => StoreError::Other {
                code: ERR_SEC_INTERNAL_COMPONENT,
                reason: err.to_string(),
            },
            _ => StoreError::Decode {
                reason: err.to_string(),
            },
        }
    }
}

impl KeyStore for SoftwareKeyStore {
    fn is_available(&self) -> bool {
        true
    }

    fn generate(&self, tag: &KeyTag, config: &KeyConfig) -> StoreResult<PublicKey> {
        if config.token != Token::Software {
            return Err(StoreError::Param {
                reason: format!("token {:?} is not available in a software key store", config.token),
            });
        }
        match config.algorithm {
            KeyAlgorithm::EcP256 => {}
        }

        let mut keys = self.keys()?;
        if keys.contains_key(tag) {
            return Err(StoreError::DuplicateItem);
        }

        let secret = SecretKey::random(&mut OsRng);
        let public_key = export(&secret.public_key());
        keys.insert(tag.clone(), secret);

        debug!("Generated software key for {} (access {:?})", tag, config.access);
        Ok(public_key)
    }

    fn public_key(&self, tag: &KeyTag) -> StoreResult<PublicKey> {
        let keys = self.keys()?;
        let secret = keys.get(tag).ok_or(StoreError::ItemNotFound)?;
        Ok(export(&secret.public_key()))
    }

    fn delete(&self, tag: &KeyTag) -> StoreResult<()> {
        self.keys()?
            .remove(tag)
            .map(drop)
            .ok_or(StoreError::ItemNotFound)
    }

    fn encrypt(
        &self,
        tag: &KeyTag,
        algorithm: EncryptionAlgorithm,
        plaintext: &[u8],
    ) -> StoreResult<Vec<u8>> {
        let public = {
            let keys = self.keys()?;
            keys.get(tag).ok_or(StoreError::ItemNotFound)?.public_key()
        };

        match algorithm {
            EncryptionAlgorithm::EciesCofactorVariableIvX963Sha256AesGcm => {
                Ok(ecies::seal(&public, plaintext)?)
            }
        }
    }

    fn decrypt(
        &self,
        tag: &KeyTag,
        algorithm: EncryptionAlgorithm,
        ciphertext: &[u8],
    ) -> StoreResult<Vec<u8>> {
        let keys = self.keys()?;
        let secret = keys.get(tag).ok_or(StoreError::ItemNotFound)?;

        match algorithm {
            EncryptionAlgorithm::EciesCofactorVariableIvX963Sha256AesGcm => {
                Ok(ecies::open(secret, ciphertext)?)
            }
        }
    }
}
