use std::fmt;

use super::PublicKey;

/// The operations exposed at the host boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    CreateKeyPair,
    FindKeyPair,
    DeleteKeyPair,
    Encrypt,
    Decrypt,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::CreateKeyPair,
        Operation::FindKeyPair,
        Operation::DeleteKeyPair,
        Operation::Encrypt,
        Operation::Decrypt,
    ];

    /// Host-facing name of the operation
    pub fn name(self) -> &'static str {
        match self {
            Operation::CreateKeyPair => "createKeyPair",
            Operation::FindKeyPair => "findKeyPair",
            Operation::DeleteKeyPair => "deleteKeyPair",
            Operation::Encrypt => "encrypt",
            Operation::Decrypt => "decrypt",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Successful result of a host-boundary call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// `createKeyPair` / `findKeyPair` hit
    PublicKey(PublicKey),
    /// `findKeyPair` miss
    NotFound,
    /// `deleteKeyPair`: whether a key was removed
    Deleted(bool),
    /// `encrypt` ciphertext or `decrypt` plaintext
    Bytes(Vec<u8>),
}
