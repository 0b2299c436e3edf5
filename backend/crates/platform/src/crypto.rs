//! Cryptographic Utilities
//!
//! Primitives used to sign and check access tokens.

use base64::{Engine, engine::general_purpose};
use hmac::{Hmac, Mac};
use rand::{RngCore, rngs::OsRng};
use sha2::Sha256;

/// Random 32-byte signing key
pub fn random_key() -> [u8; 32] {
    let mut key = [0u8; 32];
    OsRng.fill_bytes(&mut key);
    key
}

/// URL-safe base64 without padding (token segments)
pub fn to_base64_url(bytes: &[u8]) -> String {
    general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

pub fn from_base64_url(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    general_purpose::URL_SAFE_NO_PAD.decode(s)
}

fn keyed_mac(key: &[u8; 32]) -> Hmac<Sha256> {
    Hmac::<Sha256>::new_from_slice(key).expect("HMAC can take key of any size")
}

/// Compute HMAC-SHA256
pub fn hmac_sha256(key: &[u8; 32], data: &[u8]) -> [u8; 32] {
    let mut mac = keyed_mac(key);
    mac.update(data);
    mac.finalize().into_bytes().into()
}

/// Sign `data` and return the signature as URL-safe base64.
pub fn sign(key: &[u8; 32], data: &[u8]) -> String {
    to_base64_url(&hmac_sha256(key, data))
}

/// Check a signature produced by [`sign`]. The tag comparison is constant time.
pub fn verify_signature(key: &[u8; 32], data: &[u8], signature_b64: &str) -> bool {
    let Ok(signature) = from_base64_url(signature_b64) else {
        return false;
    };
    let mut mac = keyed_mac(key);
    mac.update(data);
    mac.verify_slice(&signature).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hmac_known_value() {
        // RFC 4231 test case 2; zero padding the key does not change HMAC
        let mut key = [0u8; 32];
        key[..4].copy_from_slice(b"Jefe");
        let mac = hmac_sha256(&key, b"what do ya want for nothing?");
        let expected =
            hex::decode("5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843")
                .unwrap();
        assert_eq!(mac.to_vec(), expected);
    }

    #[test]
    fn test_hmac_is_keyed() {
        let mac1 = hmac_sha256(&[7u8; 32], b"bills");
        let mac2 = hmac_sha256(&[7u8; 32], b"bills");
        let mac3 = hmac_sha256(&[8u8; 32], b"bills");
        assert_eq!(mac1, mac2);
        assert_ne!(mac1, mac3);
    }

    #[test]
    fn test_sign_and_verify() {
        let key = random_key();
        let signature = sign(&key, b"user.123");
        assert!(verify_signature(&key, b"user.123", &signature));
        assert!(!verify_signature(&key, b"user.124", &signature));
        assert!(!verify_signature(&random_key(), b"user.123", &signature));
        assert!(!verify_signature(&key, b"user.123", "***not base64***"));
        assert!(!verify_signature(&key, b"user.123", &signature[..20]));
    }

    #[test]
    fn test_base64_url_has_no_padding() {
        let encoded = to_base64_url(&[0xfb, 0xff]);
        assert!(!encoded.contains('='));
        assert!(!encoded.contains('+'));
        assert_eq!(from_base64_url(&encoded).unwrap(), vec![0xfb, 0xff]);
    }

    #[test]
    fn test_random_key() {
        let key = random_key();
        assert!(key.iter().any(|&b| b != 0));
        assert_ne!(key, random_key());
    }
}
