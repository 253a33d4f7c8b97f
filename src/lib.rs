//! Hardware-backed key pairs with biometric-gated decryption
//!
//! Keys are addressed by a caller-chosen [`KeyTag`] and never leave the
//! [`KeyStore`](ports::KeyStore). Anyone may encrypt to a stored key; decrypting
//! requires live user approval through a [`BiometricGate`](ports::BiometricGate).
//!
//! ```no_run
//! use std::sync::Arc;
//! use enclave_keys::adapters::FixedGate;
//! use enclave_keys::{AuthorizationPrompt, Enclave, KeyTag};
//!
//! # async fn demo() -> enclave_keys::EnclaveResult<()> {
//! let enclave = Enclave::software(Arc::new(FixedGate::approving()));
//! let tag = KeyTag::new("com.example.app.key")?;
//! enclave.create_key_pair(&tag).await?;
//! let payload = enclave.encrypt(&tag, b"Hello, world!").await?;
//! let prompt = AuthorizationPrompt::new("decrypt data")?;
//! let plaintext = enclave.decrypt(&tag, &payload, &prompt).await?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod api;
mod bridge;
mod capability;
pub mod error;
mod logic;
pub mod model;
pub mod ports;
pub mod use_cases;
pub mod validate;

// Re-export commonly used types
pub use error::{EnclaveError, EnclaveResult, ErrorFlags, ErrorKind};

// Re-export public API
pub use api::{decrypt_options, encrypt_options, key_options, Enclave};
pub use capability::Capability;
pub use model::{
    Arg, AuthorizationPrompt, EncryptedPayload, KeyConfig, KeyTag, Operation, PublicKey, Reply,
};
