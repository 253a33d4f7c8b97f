#[macro_export]
macro_rules! contract_tests_for {
      (
          $mod_name:ident,
          make = $make:expr,
          tests = {
            $( $test_name:ident => $tmpl:path ),+ $(,)?
        }
      ) => {
          mod $mod_name {
              use super::*;

              $(
                  #[test]
                  fn $test_name() {
                      let store = ($make)();
                      $tmpl(store);
                  }
              )+
          }
      };
  }

/// Behaviour every `KeyStore` adapter must share
#[cfg(test)]
pub mod key_store_contract {
    use crate::model::{EncryptionAlgorithm, KeyConfig, KeyTag};
    use crate::ports::{KeyStore, StoreError};

    const ALGORITHM: EncryptionAlgorithm = EncryptionAlgorithm::EciesCofactorVariableIvX963Sha256AesGcm;

    fn tag(name: &str) -> KeyTag {
        KeyTag::new(format!("net.example.contract.{name}")).expect("valid tag")
    }

    pub(crate) fn test_generate_success(store: impl KeyStore) {
        let result = store.generate(&tag("generate"), &KeyConfig::software());

        assert!(result.is_ok(), "error: {:?}", result.err());
        assert!(!result.unwrap().as_bytes().is_empty());
    }

    pub(crate) fn test_generate_occupied_tag(store: impl KeyStore) {
        let key_tag = tag("occupied");
        store
            .generate(&key_tag, &KeyConfig::software())
            .expect("first generate failed");

        let result = store.generate(&key_tag, &KeyConfig::software());
        assert_eq!(result.unwrap_err(), StoreError::DuplicateItem);
    }

    pub(crate) fn test_public_key_is_stable(store: impl KeyStore) {
        let key_tag = tag("stable");
        let created = store
            .generate(&key_tag, &KeyConfig::software())
            .expect("generate failed");

        assert_eq!(store.public_key(&key_tag).unwrap(), created);
        assert_eq!(store.public_key(&key_tag).unwrap(), created);
    }

    pub(crate) fn test_public_key_not_found(store: impl KeyStore) {
        let result = store.public_key(&tag("never-created"));
        assert_eq!(result.unwrap_err(), StoreError::ItemNotFound);
    }

    pub(crate) fn test_distinct_tags_distinct_keys(store: impl KeyStore) {
        let first = store
            .generate(&tag("first"), &KeyConfig::software())
            .expect("generate failed");
        let second = store
            .generate(&tag("second"), &KeyConfig::software())
            .expect("generate failed");

        assert_ne!(first, second);
    }

    pub(crate) fn test_delete_not_found(store: impl KeyStore) {
        let result = store.delete(&tag("never-created"));
        assert_eq!(result.unwrap_err(), StoreError::ItemNotFound);
    }

    pub(crate) fn test_delete_then_generate_fresh_key(store: impl KeyStore) {
        let key_tag = tag("recreate");
        let original = store
            .generate(&key_tag, &KeyConfig::software())
            .expect("generate failed");

        store.delete(&key_tag).expect("delete failed");
        assert_eq!(
            store.public_key(&key_tag).unwrap_err(),
            StoreError::ItemNotFound
        );

        let replacement = store
            .generate(&key_tag, &KeyConfig::software())
            .expect("generate failed");
        assert_ne!(original, replacement);
    }

    pub(crate) fn test_encrypt_key_not_found(store: impl KeyStore) {
        let result = store.encrypt(&tag("never-created"), ALGORITHM, b"data");
        assert_eq!(result.unwrap_err(), StoreError::ItemNotFound);
    }

    pub(crate) fn test_encrypt_decrypt_success(store: impl KeyStore) {
        let key_tag = tag("round-trip");
        store
            .generate(&key_tag, &KeyConfig::software())
            .expect("generate failed");

        let data = b"Hello, world!";
        let encrypted = store.encrypt(&key_tag, ALGORITHM, data).expect("encrypt failed");
        assert_ne!(encrypted.as_slice(), data.as_slice());

        let decrypted = store
            .decrypt(&key_tag, ALGORITHM, &encrypted)
            .expect("decrypt failed");
        assert_eq!(decrypted.as_slice(), data.as_slice());
    }

    pub(crate) fn test_decrypt_bad_data(store: impl KeyStore) {
        let key_tag = tag("bad-data");
        store
            .generate(&key_tag, &KeyConfig::software())
            .expect("generate failed");

        let result = store.decrypt(&key_tag, ALGORITHM, b"broken");
        assert!(matches!(result.unwrap_err(), StoreError::Decode { .. }));
    }

    pub(crate) fn test_decrypt_tampered_data(store: impl KeyStore) {
        let key_tag = tag("tampered");
        store
            .generate(&key_tag, &KeyConfig::software())
            .expect("generate failed");

        let mut encrypted = store
            .encrypt(&key_tag, ALGORITHM, b"attack at dawn")
            .expect("encrypt failed");
        let last = encrypted.len() - 1;
        encrypted[last] ^= 0x01;

        let result = store.decrypt(&key_tag, ALGORITHM, &encrypted);
        assert!(matches!(result.unwrap_err(), StoreError::Decode { .. }));
    }

    pub(crate) fn test_decrypt_with_other_key(store: impl KeyStore) {
        let sender = tag("sender");
        let other = tag("other");
        store
            .generate(&sender, &KeyConfig::software())
            .expect("generate failed");
        store
            .generate(&other, &KeyConfig::software())
            .expect("generate failed");

        let encrypted = store
            .encrypt(&sender, ALGORITHM, b"for sender only")
            .expect("encrypt failed");

        let result = store.decrypt(&other, ALGORITHM, &encrypted);
        assert!(matches!(result.unwrap_err(), StoreError::Decode { .. }));
    }
}
