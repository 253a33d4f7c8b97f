//! Error types for enclave-keys
//!
//! Every operation fails with exactly one [`EnclaveError`]. The variants are
//! organised hierarchically (validation, key registry, authorization, module)
//! and each error exposes a closed [`ErrorKind`] plus programmatic
//! [`ErrorFlags`]. Callers should branch on those, not on message text.

use thiserror::Error;

use crate::ports::{StoreError, ERR_SEC_ITEM_NOT_FOUND};

/// Result type alias for enclave operations
pub type EnclaveResult<T> = Result<T, EnclaveError>;

/// Top-level error type for all enclave operations
#[derive(Error, Debug)]
pub enum EnclaveError {
    /// Malformed call arguments, raised before any privileged call
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Key registry outcomes that callers must handle
    #[error(transparent)]
    Key(#[from] KeyError),

    /// Biometric gate outcomes other than approval
    #[error(transparent)]
    Authorization(#[from] AuthorizationError),

    /// Anything else reported by the key store or the execution bridge
    #[error(transparent)]
    Module(#[from] ModuleError),
}

/// Closed set of error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    KeyAlreadyExists,
    KeyNotFound,
    AuthorizationRejected,
    AuthorizationUnavailable,
    ModuleFailure,
}

/// Flags attached to an error for programmatic detection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ErrorFlags {
    /// `keyExists`: creation hit an occupied key tag
    pub key_exists: bool,
    /// `keyNotFound`: the key tag has no key in the store
    pub key_not_found: bool,
    /// `rejected`: the user declined the authorization prompt
    pub rejected: bool,
    /// `timedOut`: the authorization prompt expired
    pub timed_out: bool,
    /// `notSupported`: the host lacks the key store or the biometric gate
    pub not_supported: bool,
    /// `badParam`: the store refused a parameter
    pub bad_param: bool,
}

impl ErrorFlags {
    /// Names of the flags that are set, as exposed at the host boundary
    pub fn names(&self) -> Vec<&'static str> {
        [
            (self.key_exists, "keyExists"),
            (self.key_not_found, "keyNotFound"),
            (self.rejected, "rejected"),
            (self.timed_out, "timedOut"),
            (self.not_supported, "notSupported"),
            (self.bad_param, "badParam"),
        ]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
        .collect()
    }
}

/// Argument validation errors
///
/// Messages are stable: they are part of the host-boundary contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Expected exactly one argument")]
    ArgumentCount { actual: usize },

    #[error("options is not an object")]
    NotARecord,

    #[error("{field} property is missing")]
    MissingField { field: &'static str },

    #[error("{field} is not a {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("{field} cannot be empty")]
    Empty { field: &'static str },
}

impl ValidationError {
    /// The offending field, if the error is about a specific field
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ValidationError::ArgumentCount { .. } | ValidationError::NotARecord => None,
            ValidationError::MissingField { field }
            | ValidationError::WrongType { field, .. }
            | ValidationError::Empty { field } => Some(field),
        }
    }
}

/// Key registry errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// Creation is not idempotent: the caller must delete first
    #[error("A key with this keyTag already exists, please delete it first")]
    AlreadyExists,

    #[error("Key not found in key store")]
    NotFound,
}

/// Biometric authorization errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthorizationError {
    /// The user explicitly dismissed the prompt
    #[error("User refused to authenticate")]
    Rejected { code: i64 },

    #[error("Authorization prompt timed out")]
    TimedOut,

    /// The system would not present the prompt at all
    #[error("Authorization prompt could not be presented: {reason}")]
    Refused { reason: String, code: Option<i64> },
}

/// Underlying module failures
#[derive(Error, Debug)]
pub enum ModuleError {
    #[error("Biometric auth is not supported")]
    NotSupported,

    #[error("{op}: {source}")]
    Store {
        op: &'static str,
        #[source]
        source: StoreError,
    },

    /// The blocking task running a store call panicked or was cancelled
    #[error("{op}: background task failed: {reason}")]
    Task { op: &'static str, reason: String },
}

impl EnclaveError {
    /// Classify a raw store failure reported while running `op`
    ///
    /// `ItemNotFound` and `DuplicateItem` become registry errors, everything
    /// else is a module failure that keeps the store diagnostic.
    pub fn from_store(op: &'static str, err: StoreError) -> Self {
        match err {
            StoreError::ItemNotFound => EnclaveError::Key(KeyError::NotFound),
            StoreError::DuplicateItem => EnclaveError::Key(KeyError::AlreadyExists),
            source => EnclaveError::Module(ModuleError::Store { op, source }),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            EnclaveError::Validation(_) => ErrorKind::Validation,
            EnclaveError::Key(KeyError::AlreadyExists) => ErrorKind::KeyAlreadyExists,
            EnclaveError::Key(KeyError::NotFound) => ErrorKind::KeyNotFound,
            EnclaveError::Authorization(AuthorizationError::Rejected { .. }) => {
                ErrorKind::AuthorizationRejected
            }
            EnclaveError::Authorization(_) => ErrorKind::AuthorizationUnavailable,
            EnclaveError::Module(_) => ErrorKind::ModuleFailure,
        }
    }

    pub fn flags(&self) -> ErrorFlags {
        let mut flags = ErrorFlags::default();
        match self {
            EnclaveError::Key(KeyError::AlreadyExists) => flags.key_exists = true,
            EnclaveError::Key(KeyError::NotFound) => flags.key_not_found = true,
            EnclaveError::Authorization(AuthorizationError::Rejected { .. }) => {
                flags.rejected = true
            }
            EnclaveError::Authorization(AuthorizationError::TimedOut) => flags.timed_out = true,
            EnclaveError::Module(ModuleError::NotSupported) => flags.not_supported = true,
            EnclaveError::Module(ModuleError::Store {
                source: StoreError::Param { .. },
                ..
            }) => flags.bad_param = true,
            _ => {}
        }
        flags
    }

    /// Numeric status reported by the underlying subsystem, if any
    pub fn code(&self) -> Option<i64> {
        match self {
            EnclaveError::Key(KeyError::NotFound) => Some(ERR_SEC_ITEM_NOT_FOUND),
            EnclaveError::Authorization(AuthorizationError::Rejected { code }) => Some(*code),
            EnclaveError::Authorization(AuthorizationError::Refused { code, .. }) => *code,
            EnclaveError::Module(ModuleError::Store { source, .. }) => Some(source.code()),
            _ => None,
        }
    }

    pub fn key_exists(&self) -> bool {
        self.flags().key_exists
    }

    pub fn key_not_found(&self) -> bool {
        self.flags().key_not_found
    }

    pub fn rejected(&self) -> bool {
        self.flags().rejected
    }
}
