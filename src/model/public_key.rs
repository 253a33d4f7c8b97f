use std::fmt;

/// Exported public half of a hardware-resident key pair
///
/// For P-256 keys this is the uncompressed SEC1 point (`04 || X || Y`).
/// The private half never leaves the key store.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PublicKey(Vec<u8>);

impl PublicKey {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Short hex prefix, suitable for logs and UI
    pub fn fingerprint(&self) -> String {
        let end = self.0.len().min(12);
        hex::encode(&self.0[..end])
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({}...)", self.fingerprint())
    }
}

impl From<Vec<u8>> for PublicKey {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_is_24_hex_chars() {
        let key = PublicKey::from_bytes(vec![0xab; 65]);
        assert_eq!(key.fingerprint().len(), 24);
        assert_eq!(key.to_hex().len(), 130);
    }

    #[test]
    fn test_fingerprint_short_key() {
        let key = PublicKey::from(vec![1, 2, 3]);
        assert_eq!(key.fingerprint(), "010203");
    }

    #[test]
    fn test_debug_shows_prefix_only() {
        let key = PublicKey::from_bytes((0u8..65).collect());
        let debug_str = format!("{:?}", key);
        assert!(debug_str.starts_with("PublicKey(000102"));
        assert!(!debug_str.contains(&key.to_hex()));
    }
}
