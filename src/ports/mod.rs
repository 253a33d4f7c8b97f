//! Ports for the external collaborators
//!
//! The binding depends on these abstractions, not on a concrete key store or
//! biometric subsystem. Adapters in `crate::adapters` implement them.

mod biometric_gate;
pub mod contract_tests;
mod key_store;

pub use biometric_gate::{
    AuthOutcome, BiometricGate, LA_ERROR_AUTHENTICATION_FAILED, LA_ERROR_BIOMETRY_NOT_AVAILABLE,
    LA_ERROR_NOT_INTERACTIVE, LA_ERROR_USER_CANCEL,
};
pub use key_store::{
    KeyStore, StoreError, StoreResult, ERR_SEC_DECODE, ERR_SEC_DUPLICATE_ITEM,
    ERR_SEC_INTERNAL_COMPONENT, ERR_SEC_ITEM_NOT_FOUND, ERR_SEC_PARAM, ERR_SEC_UNIMPLEMENTED,
};
