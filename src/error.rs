//! # DID JWK Errors
//!
//! Errors returned when generating, decoding, expanding or resolving a
//! `did:jwk` DID. Every error is scoped to a single call and carries enough
//! context for the caller to correct their input.

use thiserror::Error;

use crate::key::KeyType;

/// Errors returned by this crate.
#[derive(Error, Debug)]
pub enum Error {
    /// The requested key type cannot be used to create a `did:jwk`.
    #[error("unsupported did:jwk key type: {0}")]
    UnsupportedKeyType(KeyType),

    /// The key generator failed to produce a key pair.
    #[error("issue generating key: {0}")]
    KeyGeneration(#[source] anyhow::Error),

    /// The public key could not be serialized to JSON.
    #[error("issue serializing key: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The DID does not begin with `did:jwk:`.
    #[error("not a did:jwk DID, invalid prefix: {0}")]
    InvalidPrefix(String),

    /// The DID has the `did:jwk:` prefix but no encoded key follows it.
    #[error("did:jwk DID has no encoded key: {0}")]
    MissingPayload(String),

    /// The method-specific identifier is not valid unpadded base64url.
    #[error("issue decoding did:jwk: {0}")]
    InvalidEncoding(#[source] base64ct::Error),

    /// The decoded method-specific identifier is not a valid public JWK.
    #[error("issue deserializing did:jwk key: {0}")]
    InvalidKey(#[source] serde_json::Error),

    /// The requested resource does not exist in the DID document.
    #[error("not found: {0}")]
    NotFound(String),

    /// Resolution of a DID failed.
    #[error("issue resolving did:jwk: {0}")]
    Resolution(#[source] Box<Error>),
}

impl Error {
    /// Returns the DID resolution error code for the error.
    ///
    /// See <https://www.w3.org/TR/did-spec-registries/#error>.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidPrefix(_) => "methodNotSupported",
            Self::MissingPayload(_) | Self::InvalidEncoding(_) | Self::InvalidKey(_) => {
                "invalidDid"
            }
            Self::NotFound(_) => "notFound",
            Self::Resolution(inner) => inner.code(),
            Self::UnsupportedKeyType(_) | Self::KeyGeneration(_) | Self::Serialization(_) => {
                "internalError"
            }
        }
    }

    /// Returns `true` when the input was shaped like a `did:jwk` DID but its
    /// payload is corrupt, as opposed to not being a `did:jwk` DID at all.
    #[must_use]
    pub fn is_malformed_did(&self) -> bool {
        match self {
            Self::MissingPayload(_) | Self::InvalidEncoding(_) | Self::InvalidKey(_) => true,
            Self::Resolution(inner) => inner.is_malformed_did(),
            _ => false,
        }
    }

    /// Returns the error message, without the wrapping resolution context.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Resolution(inner) => inner.message(),
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn error_code() {
        let err = Error::InvalidPrefix("did:web:example.com".into());
        assert_eq!(err.code(), "methodNotSupported");
        assert!(!err.is_malformed_did());

        let err = Error::MissingPayload("did:jwk:".into());
        assert_eq!(err.code(), "invalidDid");
        assert!(err.is_malformed_did());
    }

    #[test]
    fn resolution_wraps_source() {
        let err = Error::Resolution(Box::new(Error::MissingPayload("did:jwk:".into())));
        assert_eq!(err.code(), "invalidDid");
        assert!(err.is_malformed_did());
        assert_eq!(err.message(), "did:jwk DID has no encoded key: did:jwk:");
        assert_eq!(
            err.to_string(),
            "issue resolving did:jwk: did:jwk DID has no encoded key: did:jwk:"
        );
    }
}
