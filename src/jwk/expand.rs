//! # DID JWK Read
//!
//! Decode the public key from a `did:jwk` DID and expand it into a DID
//! document.
//!
//! See <https://github.com/quartzjer/did-jwk/blob/main/spec.md#read>

use base64ct::{Base64UrlUnpadded, Encoding};

use super::DidJwk;
use crate::core::Kind;
use crate::document::{DID_CONTEXT, Document, MethodType, VerificationMethod};
use crate::error::Error;
use crate::jose::{KeyUse, PublicKeyJwk};

impl DidJwk {
    /// Decode the public JWK embedded in the DID.
    ///
    /// # Errors
    ///
    /// Each step of decoding fails with its own error:
    ///
    /// - [`Error::InvalidPrefix`] if the DID does not start with `did:jwk:`,
    /// - [`Error::MissingPayload`] if nothing follows the prefix,
    /// - [`Error::InvalidEncoding`] if the suffix is not unpadded base64url,
    /// - [`Error::InvalidKey`] if the decoded bytes are not a JSON public JWK.
    pub fn decode(&self) -> crate::Result<PublicKeyJwk> {
        let encoded = self.suffix()?;
        if encoded.is_empty() {
            return Err(Error::MissingPayload(self.0.clone()));
        }
        let serialized = Base64UrlUnpadded::decode_vec(encoded).map_err(Error::InvalidEncoding)?;
        serde_json::from_slice(&serialized).map_err(Error::InvalidKey)
    }

    /// Decode the DID and expand it into a DID document.
    ///
    /// # Errors
    ///
    /// Returns an error if the DID cannot be decoded. See [`DidJwk::decode`].
    pub fn expand(&self) -> crate::Result<Document> {
        let jwk = self.decode()?;
        Ok(document(self, &jwk))
    }
}

/// Expand a `did:jwk` DID and its decoded public key into a DID document.
///
/// The document has a single `JsonWebKey2020` verification method, `<did>#0`,
/// referenced from every verification relationship the key may be used for.
/// A key with `"use": "sig"` is not referenced from `keyAgreement`, and a key
/// with `"use": "enc"` is referenced only from `keyAgreement`.
#[must_use]
pub fn document(did: &DidJwk, jwk: &PublicKeyJwk) -> Document {
    let kid = did.key_id();
    let method_type = MethodType::JsonWebKey2020;
    let reference = || Some(vec![Kind::String(kid.clone())]);

    let mut doc = Document {
        context: vec![Kind::from(DID_CONTEXT), Kind::from(method_type.context())],
        id: did.to_string(),
        verification_method: Some(vec![VerificationMethod {
            id: kid.clone(),
            type_: method_type,
            controller: did.to_string(),
            public_key_jwk: jwk.clone(),
        }]),
        authentication: reference(),
        assertion_method: reference(),
        key_agreement: reference(),
        capability_invocation: reference(),
        capability_delegation: reference(),
    };

    match jwk.key_use() {
        Some(KeyUse::Signature) => {
            doc.key_agreement = None;
        }
        Some(KeyUse::Encryption) => {
            doc.authentication = None;
            doc.assertion_method = None;
            doc.capability_invocation = None;
            doc.capability_delegation = None;
        }
        None => {}
    }

    doc
}
