//! ECIES with cofactor ECDH, X9.63 SHA-256 KDF and AES-GCM (variable IV)
//!
//! Byte-compatible with the `ECIESEncryptionCofactorVariableIVX963SHA256AESGCM`
//! algorithm of Apple's Security framework for P-256 keys:
//!
//! ```text
//! sealed = ephemeral_public (65, uncompressed) || ciphertext || tag (16)
//! key || iv = X9.63-KDF-SHA256(Z, shared_info = ephemeral_public), 16 + 16 bytes
//! ```

use aes_gcm::aead::consts::U16;
use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::aes::Aes128;
use aes_gcm::{AesGcm, Nonce};
use p256::ecdh::{diffie_hellman, EphemeralSecret};
use p256::elliptic_curve::sec1::ToEncodedPoint;
use p256::{PublicKey, SecretKey};
use rand_core::OsRng;
use sha2::Sha256;
use thiserror::Error;
use zeroize::Zeroizing;

/// AES-128-GCM with a 16-byte nonce
type Aes128Gcm16 = AesGcm<Aes128, U16>;

/// Uncompressed P-256 point
pub const EPHEMERAL_KEY_LEN: usize = 65;
pub const TAG_LEN: usize = 16;
const KEY_LEN: usize = 16;
const IV_LEN: usize = 16;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EciesError {
    #[error("ciphertext too short: {len} bytes")]
    TooShort { len: usize },

    #[error("invalid ephemeral public key")]
    InvalidEphemeralKey,

    #[error("message authentication failed")]
    Authentication,

    #[error("cipher initialization failed")]
    Cipher,

    #[error("key derivation failed")]
    Kdf,
}

/// Encrypt `plaintext` to `recipient`
pub fn seal(recipient: &PublicKey, plaintext: &[u8]) -> Result<Vec<u8>, EciesError> {
    let ephemeral = EphemeralSecret::random(&mut OsRng);
    let ephemeral_public = ephemeral.public_key().to_encoded_point(false);
    let shared = ephemeral.diffie_hellman(recipient);

    let okm = x963_kdf(shared.raw_secret_bytes(), ephemeral_public.as_bytes())?;
    let (cipher, nonce) = cipher_and_nonce(&okm)?;
    let body = cipher.encrypt(&nonce, plaintext).map_err(|_| EciesError::Cipher)?;

    let mut sealed = Vec::with_capacity(EPHEMERAL_KEY_LEN + body.len());
    sealed.extend_from_slice(ephemeral_public.as_bytes());
    sealed.extend_from_slice(&body);
    Ok(sealed)
}

/// Decrypt a payload produced by [`seal`] for `recipient`'s public key
pub fn open(recipient: &SecretKey, sealed: &[u8]) -> Result<Vec<u8>, EciesError> {
    if sealed.len() < EPHEMERAL_KEY_LEN + TAG_LEN {
        return Err(EciesError::TooShort { len: sealed.len() });
    }

    let (ephemeral_bytes, body) = sealed.split_at(EPHEMERAL_KEY_LEN);
    let ephemeral =
        PublicKey::from_sec1_bytes(ephemeral_bytes).map_err(|_| EciesError::InvalidEphemeralKey)?;
    let shared = diffie_hellman(recipient.to_nonzero_scalar(), ephemeral.as_affine());

    let okm = x963_kdf(shared.raw_secret_bytes(), ephemeral_bytes)?;
    let (cipher, nonce) = cipher_and_nonce(&okm)?;
    cipher
        .decrypt(&nonce, body)
        .map_err(|_| EciesError::Authentication)
}

fn x963_kdf(
    secret: &[u8],
    shared_info: &[u8],
) -> Result<Zeroizing<[u8; KEY_LEN + IV_LEN]>, EciesError> {
    let mut okm = Zeroizing::new([0u8; KEY_LEN + IV_LEN]);
    ansi_x963_kdf::derive_key_into::<Sha256>(secret, shared_info, &mut *okm)
        .map_err(|_| EciesError::Kdf)?;
    Ok(okm)
}

/// Split derived material into the AES key and the 16-byte GCM nonce
fn cipher_and_nonce(
    okm: &[u8; KEY_LEN + IV_LEN],
) -> Result<(Aes128Gcm16, Nonce<U16>), EciesError> {
    let (key, iv) = okm.split_at(KEY_LEN);
    let cipher = Aes128Gcm16::new_from_slice(key).map_err(|_| EciesError::Cipher)?;
    let mut nonce = [0u8; IV_LEN];
    nonce.copy_from_slice(iv);
    Ok((cipher, Nonce::<U16>::from(nonce)))
}
