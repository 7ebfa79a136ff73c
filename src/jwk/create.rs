//! # DID JWK Create
//!
//! Create a `did:jwk` DID from a public key, or from a newly generated key.
//!
//! See <https://github.com/quartzjer/did-jwk/blob/main/spec.md#create>

use base64ct::{Base64UrlUnpadded, Encoding};
use tracing::instrument;

use super::{DidJwk, PREFIX};
use crate::error::Error;
use crate::jose::PublicKeyJwk;
use crate::key::{KeyGenerator, KeyType, SecretKey};

impl DidJwk {
    /// Create a `did:jwk` DID from a public JWK.
    ///
    /// The JWK is serialized to JSON, encoded using base64url without padding
    /// and prefixed with `did:jwk:`. The same key always produces the same DID.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if the key cannot be serialized.
    pub fn create(jwk: &PublicKeyJwk) -> crate::Result<Self> {
        let serialized = serde_json::to_vec(jwk).map_err(Error::Serialization)?;
        let encoded = Base64UrlUnpadded::encode_string(&serialized);
        Ok(Self(format!("{PREFIX}:{encoded}")))
    }

    /// Generate a new key of the requested type and create a `did:jwk` DID
    /// from its public half.
    ///
    /// The key type is checked before the generator is called, so no key
    /// material is produced for unsupported types.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedKeyType`] if the key type cannot be used
    /// with `did:jwk`, or [`Error::KeyGeneration`] if the generator fails.
    #[instrument(level = "debug", skip(generator))]
    pub fn generate(
        key_type: KeyType, generator: &impl KeyGenerator,
    ) -> crate::Result<(SecretKey, Self)> {
        if !key_type.is_supported() {
            tracing::warn!(%key_type, "unsupported did:jwk key type");
            return Err(Error::UnsupportedKeyType(key_type));
        }

        let secret = generator.generate(key_type).map_err(Error::KeyGeneration)?;
        let did = Self::create(&secret.public_jwk())?;
        tracing::debug!(%did, "created did:jwk");

        Ok((secret, did))
    }
}
