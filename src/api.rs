//! Public API
//!
//! [`Enclave`] owns the key store and biometric gate and exposes the five
//! operations, both as typed async methods and through the untyped
//! [`Enclave::call`] dispatcher used by host bindings.

use std::sync::Arc;

use tracing::debug;

use crate::adapters::SoftwareKeyStore;
use crate::capability::Capability;
use crate::error::{EnclaveResult, ModuleError};
use crate::ports::{BiometricGate, KeyStore};
use crate::use_cases;
use crate::validate;

pub use crate::model::*;

/// Handle to the secure key store
///
/// Cheap to clone; clones share the store and the gate. Facades built with
/// [`Enclave::new`] or [`Enclave::with_config`] share the process-wide
/// capability answer.
pub struct Enclave<S: ?Sized, G: ?Sized> {
    store: Arc<S>,
    gate: Arc<G>,
    config: KeyConfig,
    capability: Capability,
}

impl<S: ?Sized, G: ?Sized> Clone for Enclave<S, G> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            gate: Arc::clone(&self.gate),
            config: self.config,
            capability: self.capability.clone(),
        }
    }
}

impl<S, G> Enclave<S, G>
where
    S: KeyStore + ?Sized + 'static,
    G: BiometricGate + ?Sized,
{
    /// Facade generating keys with [`KeyConfig::default`]
    ///
    /// The default config asks for Secure Enclave keys, which a
    /// [`SoftwareKeyStore`] refuses with `badParam`. Use
    /// [`Enclave::software`] for that store.
    pub fn new(store: Arc<S>, gate: Arc<G>) -> Self {
        Self::with_config(store, gate, KeyConfig::default())
    }

    pub fn with_config(store: Arc<S>, gate: Arc<G>, config: KeyConfig) -> Self {
        Self::with_capability(store, gate, config, Capability::host())
    }

    /// Facade with its own capability answer instead of the host's
    pub fn with_capability(
        store: Arc<S>,
        gate: Arc<G>,
        config: KeyConfig,
        capability: Capability,
    ) -> Self {
        Self {
            store,
            gate,
            config,
            capability,
        }
    }

    pub fn config(&self) -> &KeyConfig {
        &self.config
    }

    /// Whether both the key store and the biometric gate are present
    ///
    /// Checked on first access and cached; see [`Capability`].
    pub fn is_supported(&self) -> bool {
        self.capability
            .get_or_check(|| self.store.is_available() && self.gate.is_available())
    }

    fn ensure_supported(&self) -> EnclaveResult<()> {
        if self.is_supported() {
            Ok(())
        } else {
            Err(ModuleError::NotSupported.into())
        }
    }

    pub async fn create_key_pair(&self, tag: &KeyTag) -> EnclaveResult<PublicKey> {
        self.ensure_supported()?;
        use_cases::create_key_pair(&self.store, tag, &self.config).await
    }

    pub async fn find_key_pair(&self, tag: &KeyTag) -> EnclaveResult<Option<PublicKey>> {
        self.ensure_supported()?;
        use_cases::find_key_pair(&self.store, tag).await
    }

    pub async fn delete_key_pair(&self, tag: &KeyTag) -> EnclaveResult<bool> {
        self.ensure_supported()?;
        use_cases::delete_key_pair(&self.store, tag).await
    }

    pub async fn encrypt(&self, tag: &KeyTag, plaintext: &[u8]) -> EnclaveResult<EncryptedPayload> {
        self.ensure_supported()?;
        use_cases::encrypt(&self.store, tag, plaintext).await
    }

    pub async fn decrypt(
        &self,
        tag: &KeyTag,
        payload: &EncryptedPayload,
        prompt: &AuthorizationPrompt,
    ) -> EnclaveResult<Vec<u8>> {
        self.ensure_supported()?;
        use_cases::decrypt(&self.store, &self.gate, tag, payload, prompt).await
    }

    /// Run `operation` with an untyped host argument list
    ///
    /// Arguments are validated before anything else, including the
    /// capability check, so malformed calls fail the same way on every host.
    /// A binding that checked support first would report `notSupported` for
    /// malformed calls on an unsupported host; this one reports the
    /// validation error.
    pub async fn call(&self, operation: Operation, args: &[Arg]) -> EnclaveResult<Reply> {
        debug!("Host call {}", operation);
        match operation {
            Operation::CreateKeyPair => {
                let args = validate::key_operation(args)?;
                let public_key = self.create_key_pair(&args.key_tag).await?;
                Ok(Reply::PublicKey(public_key))
            }
            Operation::FindKeyPair => {
                let args = validate::key_operation(args)?;
                let reply = match self.find_key_pair(&args.key_tag).await? {
                    Some(public_key) => Reply::PublicKey(public_key),
                    None => Reply::NotFound,
                };
                Ok(reply)
            }
            Operation::DeleteKeyPair => {
                let args = validate::key_operation(args)?;
                let deleted = self.delete_key_pair(&args.key_tag).await?;
                Ok(Reply::Deleted(deleted))
            }
            Operation::Encrypt => {
                let args = validate::data_operation(args)?;
                let payload = self.encrypt(&args.key_tag, &args.data).await?;
                Ok(Reply::Bytes(payload.into_bytes()))
            }
            Operation::Decrypt => {
                let args = validate::decrypt_operation(args)?;
                let payload = EncryptedPayload::from(args.data);
                let plaintext = self.decrypt(&args.key_tag, &payload, &args.prompt).await?;
                Ok(Reply::Bytes(plaintext))
            }
        }
    }

    /// Like [`Enclave::call`] for hosts that pass the record directly
    pub async fn call_with(&self, operation: Operation, options: Arg) -> EnclaveResult<Reply> {
        self.call(operation, std::slice::from_ref(&options)).await
    }
}

impl<G> Enclave<SoftwareKeyStore, G>
where
    G: BiometricGate + ?Sized,
{
    /// Facade over a fresh in-process key store, generating software keys
    pub fn software(gate: Arc<G>) -> Self {
        Self::with_config(
            Arc::new(SoftwareKeyStore::new()),
            gate,
            KeyConfig::software(),
        )
    }
}

/// Build the single-record argument of a key operation
pub fn key_options(tag: &str) -> Arg {
    Arg::record([(KeyTag::FIELD, Arg::from(tag))])
}

/// Build the single-record argument of `encrypt`
pub fn encrypt_options(tag: &str, data: &[u8]) -> Arg {
    Arg::record([(KeyTag::FIELD, Arg::from(tag)), (DATA_FIELD, Arg::from(data))])
}

/// Build the single-record argument of `decrypt`
pub fn decrypt_options(tag: &str, data: &[u8], prompt: &str) -> Arg {
    Arg::record([
        (KeyTag::FIELD, Arg::from(tag)),
        (DATA_FIELD, Arg::from(data)),
        (AuthorizationPrompt::FIELD, Arg::from(prompt)),
    ])
}
