mod arg;
mod config;
mod key_tag;
mod operation;
mod payload;
mod prompt;
mod public_key;

pub use arg::{Arg, Record};
pub use config::{AccessPolicy, EncryptionAlgorithm, KeyAlgorithm, KeyConfig, Token};
pub use key_tag::KeyTag;
pub use operation::{Operation, Reply};
pub use payload::{EncryptedPayload, DATA_FIELD};
pub use prompt::AuthorizationPrompt;
pub use public_key::PublicKey;
