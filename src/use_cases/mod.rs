//! Use cases (orchestration)
//!
//! Each use case drives the key store and biometric gate ports through the
//! execution bridge. They take already-validated, typed arguments.

mod create_key_pair;
mod decrypt;
mod delete_key_pair;
mod encrypt;
mod find_key_pair;

pub use create_key_pair::create_key_pair;
pub use decrypt::decrypt;
pub use delete_key_pair::delete_key_pair;
pub use encrypt::encrypt;
pub use find_key_pair::find_key_pair;
