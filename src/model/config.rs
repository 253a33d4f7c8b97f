//! Key generation and encryption parameters

/// Asymmetric key type generated in the key store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAlgorithm {
    /// NIST P-256, the only curve the Secure Enclave supports
    EcP256,
}

impl KeyAlgorithm {
    pub fn size_in_bits(self) -> u32 {
        match self {
            KeyAlgorithm::EcP256 => 256,
        }
    }
}

/// Encryption scheme used for `encrypt`/`decrypt`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncryptionAlgorithm {
    /// ECIES: cofactor ECDH with an ephemeral key, X9.63 KDF over SHA-256,
    /// AES-GCM with the IV taken from the KDF output
    EciesCofactorVariableIvX963Sha256AesGcm,
}

impl EncryptionAlgorithm {
    pub fn default_ecies() -> Self {
        Self::EciesCofactorVariableIvX963Sha256AesGcm
    }
}

/// User-presence requirement attached to the private key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessPolicy {
    /// Biometry, invalidated when the enrolled set changes
    BiometryCurrentSet,
    /// Biometry, surviving enrollment changes
    BiometryAny,
    /// Biometry or device passcode
    UserPresence,
}

impl AccessPolicy {
    pub fn recommended() -> Self {
        Self::BiometryCurrentSet
    }
}

/// Where the private key is generated and kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    SecureEnclave,
    /// Regular keychain storage, used for development and tests
    Software,
}

/// Configuration for key pair generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyConfig {
    pub algorithm: KeyAlgorithm,
    pub access: AccessPolicy,
    pub token: Token,
}

impl KeyConfig {
    /// Configuration for stores without secure hardware
    pub fn software() -> Self {
        Self {
            token: Token::Software,
            ..Self::default()
        }
    }
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            algorithm: KeyAlgorithm::EcP256,
            access: AccessPolicy::recommended(),
            token: Token::SecureEnclave,
        }
    }
}
