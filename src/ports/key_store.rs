//! KeyStore trait - capability to custody key pairs addressed by tag

use thiserror::Error;

use crate::model::{EncryptionAlgorithm, KeyConfig, KeyTag, PublicKey};

/// `errSecUnimplemented`
pub const ERR_SEC_UNIMPLEMENTED: i64 = -4;
/// `errSecParam`
pub const ERR_SEC_PARAM: i64 = -50;
/// `errSecInternalComponent`
pub const ERR_SEC_INTERNAL_COMPONENT: i64 = -2070;
/// `errSecDuplicateItem`
pub const ERR_SEC_DUPLICATE_ITEM: i64 = -25299;
/// `errSecItemNotFound`
pub const ERR_SEC_ITEM_NOT_FOUND: i64 = -25300;
/// `errSecDecode`
pub const ERR_SEC_DECODE: i64 = -26275;

pub type StoreResult<T> = Result<T, StoreError>;

/// Raw failure reported by a key store
///
/// Stores report what happened; classification into caller-facing errors
/// happens in the binding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("item not found")]
    ItemNotFound,

    #[error("duplicate item")]
    DuplicateItem,

    #[error("bad parameter: {reason}")]
    Param { reason: String },

    #[error("Algorithm not supported")]
    AlgorithmNotSupported,

    #[error("unable to decode the provided data: {reason}")]
    Decode { reason: String },

    #[error("{reason} (code {code})")]
    Other { code: i64, reason: String },
}

impl StoreError {
    /// OSStatus-style numeric code for this failure
    pub fn code(&self) -> i64 {
        match self {
            StoreError::ItemNotFound => ERR_SEC_ITEM_NOT_FOUND,
            StoreError::DuplicateItem => ERR_SEC_DUPLICATE_ITEM,
            StoreError::Param { .. } => ERR_SEC_PARAM,
            StoreError::AlgorithmNotSupported => ERR_SEC_UNIMPLEMENTED,
            StoreError::Decode { .. } => ERR_SEC_DECODE,
            StoreError::Other { code, .. } => *code,
        }
    }
}

/// Capability to generate, look up, delete and use key pairs
///
/// The private half of every key stays inside the implementation; only the
/// exported public key and the results of cryptographic operations cross
/// this boundary. All methods may block (hardware round trips), so callers
/// run them off the async executor.
pub trait KeyStore: Send + Sync {
    /// Whether the backing key store is present and usable on this host
    fn is_available(&self) -> bool;

    /// Generate a new key pair under `tag`
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicateItem` if `tag` is occupied and
    /// `StoreError::Param` if the configuration cannot be honoured.
    fn generate(&self, tag: &KeyTag, config: &KeyConfig) -> StoreResult<PublicKey>;

    /// Export the public key of the pair stored under `tag`
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ItemNotFound` if `tag` is vacant.
    fn public_key(&self, tag: &KeyTag) -> StoreResult<PublicKey>;

    /// Remove the pair stored under `tag`, including its private key
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ItemNotFound` if `tag` is vacant.
    fn delete(&self, tag: &KeyTag) -> StoreResult<()>;

    /// Encrypt `plaintext` to the public key stored under `tag`
    fn encrypt(
        &self,
        tag: &KeyTag,
        algorithm: EncryptionAlgorithm,
        plaintext: &[u8],
    ) -> StoreResult<Vec<u8>>;

    /// Decrypt `ciphertext` with the private key stored under `tag`
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Decode` when the ciphertext is malformed or does
    /// not authenticate under the key.
    fn decrypt(
        &self,
        tag: &KeyTag,
        algorithm: EncryptionAlgorithm,
        ciphertext: &[u8],
    ) -> StoreResult<Vec<u8>>;
}
