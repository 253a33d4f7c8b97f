use std::fmt;

/// Name of the field carrying payload bytes at the host boundary
pub const DATA_FIELD: &str = "data";

/// Opaque ciphertext produced by `encrypt`
///
/// Self-contained: decrypting it needs nothing but the key tag it was
/// produced for. The byte layout is owned by the key store.
#[derive(Clone, PartialEq, Eq)]
pub struct EncryptedPayload(Vec<u8>);

impl EncryptedPayload {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for EncryptedPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EncryptedPayload({} bytes)", self.0.len())
    }
}

impl From<Vec<u8>> for EncryptedPayload {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for EncryptedPayload {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}
