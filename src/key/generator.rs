//! Key generation using the operating system's random number generator.

use anyhow::anyhow;
use ed25519_dalek::SigningKey;
use rand::RngCore;
use rand::rngs::OsRng;

use super::{KeyGenerator, KeyType, SecretKey};

/// Default RSA modulus size in bits.
const RSA_BITS: usize = 2048;

/// In-memory [`KeyGenerator`] backed by [`OsRng`].
///
/// Keys are not stored anywhere; the caller owns the returned [`SecretKey`].
#[derive(Clone, Debug)]
pub struct OsRngGenerator {
    rsa_bits: usize,
}

impl Default for OsRngGenerator {
    fn default() -> Self {
        Self { rsa_bits: RSA_BITS }
    }
}

impl OsRngGenerator {
    /// Create a generator with the default RSA modulus size.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the RSA modulus size in bits.
    #[must_use]
    pub const fn rsa_bits(mut self, bits: usize) -> Self {
        self.rsa_bits = bits;
        self
    }
}

impl KeyGenerator for OsRngGenerator {
    fn generate(&self, key_type: KeyType) -> anyhow::Result<SecretKey> {
        let secret = match key_type {
            KeyType::Ed25519 => SecretKey::Ed25519(SigningKey::generate(&mut OsRng)),
            KeyType::X25519 => {
                let mut secret = [0u8; 32];
                OsRng.fill_bytes(&mut secret);
                SecretKey::X25519(secret)
            }
            KeyType::Secp256k1 => SecretKey::Secp256k1(k256::SecretKey::random(&mut OsRng)),
            KeyType::P256 => SecretKey::P256(p256::SecretKey::random(&mut OsRng)),
            KeyType::P384 => SecretKey::P384(p384::SecretKey::random(&mut OsRng)),
            KeyType::P521 => SecretKey::P521(p521::SecretKey::random(&mut OsRng)),
            KeyType::Rsa => {
                let private_key = rsa::RsaPrivateKey::new(&mut OsRng, self.rsa_bits)
                    .map_err(|e| anyhow!("issue generating RSA key: {e}"))?;
                SecretKey::Rsa(private_key)
            }
            _ => return Err(anyhow!("key type {key_type} is not supported by this generator")),
        };
        tracing::debug!(%key_type, "generated key");
        Ok(secret)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::key::supported_key_types;

    #[test]
    fn generates_supported_types() {
        let generator = OsRngGenerator::new().rsa_bits(1024);
        for kt in supported_key_types() {
            let secret = generator.generate(kt).expect("should generate");
            assert_eq!(secret.key_type(), kt);
        }
    }

    #[test]
    fn rejects_unsupported_types() {
        let generator = OsRngGenerator::new();
        assert!(generator.generate(KeyType::Dilithium3).is_err());
    }
}
