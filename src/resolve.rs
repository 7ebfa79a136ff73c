//! # DID Resolver
//!
//! The resolution contract shared by DID methods, and dereferencing of
//! `did:jwk` DID URLs.
//!
//! See [DID resolution](https://www.w3.org/TR/did-core/#did-resolution) for more.

use std::future::Future;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::document::{Document, VerificationMethod};
use crate::error::Error;
use crate::jwk::{DidJwk, KEY_FRAGMENT};
use crate::Method;

/// The DID resolution context.
pub const RESOLUTION_CONTEXT: &str = "https://w3id.org/did-resolution/v1";

/// [`Resolver`] is implemented by each DID method.
///
/// A host wanting to resolve more than one method keeps a map from
/// [`Method`] to resolver and dispatches on the DID's method.
pub trait Resolver: Send + Sync {
    /// Resolve a DID into a DID document.
    ///
    /// # Errors
    ///
    /// Returns an error if the DID cannot be resolved. No partial result is
    /// returned.
    fn resolve(
        &self, did: &str, options: Option<Options>,
    ) -> impl Future<Output = crate::Result<Resolved>> + Send;

    /// The DID methods handled by the resolver.
    fn methods(&self) -> Vec<Method>;
}

/// Used to pass additional values to the `resolve` and `dereference` methods. Any
/// properties used should be registered in the DID Specification Registries.
///
/// The `accept` property is common to all resolver implementations. It is used
/// by users to specify the Media Type of the resolved document. For example:
///
/// ```json
/// {
///    "accept": "application/did+ld+json"
/// }
/// ```
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    /// [`accept`](https://www.w3.org/TR/did-spec-registries/#accept) resolution option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept: Option<ContentType>,
}

/// Returned by `resolve` DID methods.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolved {
    /// The DID resolution context.
    #[serde(rename = "@context")]
    pub context: String,

    /// Resolution metadata.
    pub metadata: Metadata,

    /// The DID document.
    pub document: Document,
}

/// DID resolution metadata.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// The Media Type of the returned resource.
    pub content_type: ContentType,

    /// Additional information about the resolution process.
    #[serde(flatten)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional: Option<Value>,
}

/// The Media Type of the returned resource.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub enum ContentType {
    /// JSON-LD representation of a DID document.
    #[default]
    #[serde(rename = "application/did+ld+json")]
    DidLdJson,

    /// JSON representation of a DID document.
    #[serde(rename = "application/did+json")]
    DidJson,
}

/// Resource represents the DID document resource returned as a result of DID
/// dereferencing. The resource is a DID document or a subset of a DID document.
#[allow(clippy::large_enum_variant)]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum Resource {
    ///  DID `Document` resource.
    Document(Document),

    /// `VerificationMethod` resource.
    VerificationMethod(VerificationMethod),
}

/// Dereference a `did:jwk` DID URL into a resource.
///
/// A DID without a fragment dereferences to the DID document, and the `#0`
/// fragment to the document's verification method.
///
/// # Errors
///
/// Returns an error if the DID cannot be expanded, if the URL has a path or
/// query, or if the fragment does not identify a resource in the document.
pub fn dereference(did_url: &str) -> crate::Result<Resource> {
    let (did, fragment) = match did_url.split_once('#') {
        Some((did, fragment)) => (did, Some(fragment)),
        None => (did_url, None),
    };
    if did.contains(['/', '?']) {
        return Err(Error::NotFound(format!("{did_url} has a path or query")));
    }

    let did = DidJwk::new(did);
    let document = did.expand()?;

    match fragment {
        None => Ok(Resource::Document(document)),
        Some(KEY_FRAGMENT) => document
            .get_verification_method(&did.key_id())
            .cloned()
            .map(Resource::VerificationMethod)
            .ok_or_else(|| Error::NotFound(format!("verification method {did_url} not found"))),
        Some(_) => Err(Error::NotFound(format!("resource {did_url} not found in document"))),
    }
}
