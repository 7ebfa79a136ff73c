//! # DID JWK Resolver
//!
//! Resolution of a `did:jwk` DID is local: the DID document is expanded from
//! the key encoded in the DID, so there is no network or storage access.
//!
//! See:
//!
//! - <https://github.com/quartzjer/did-jwk/blob/main/spec.md#read>
//! - <https://w3c.github.io/did-resolution>

use serde_json::json;

use super::{DidJwk, PREFIX};
use crate::error::Error;
use crate::resolve::{Metadata, Options, RESOLUTION_CONTEXT, Resolved, Resolver};
use crate::Method;

/// [`Resolver`] for the `did:jwk` method.
#[derive(Clone, Copy, Debug, Default)]
pub struct JwkResolver;

impl DidJwk {
    /// Resolve the DID into a DID document with resolution metadata.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Resolution`] wrapping the decoding error if the DID is
    /// not a valid `did:jwk`.
    pub fn resolve(&self, options: Option<Options>) -> crate::Result<Resolved> {
        let document = self.expand().map_err(|e| {
            tracing::warn!(did = %self, error = %e, "failed to resolve did:jwk");
            Error::Resolution(Box::new(e))
        })?;
        let method_specific_id = self.suffix()?;

        Ok(Resolved {
            context: RESOLUTION_CONTEXT.into(),
            metadata: Metadata {
                content_type: options.and_then(|o| o.accept).unwrap_or_default(),
                additional: Some(json!({
                    "pattern": format!("^{PREFIX}:[A-Za-z0-9_-]+$"),
                    "did": {
                        "didString": self.as_str(),
                        "methodSpecificId": method_specific_id,
                        "method": Method::Jwk.to_string(),
                    }
                })),
            },
            document,
        })
    }
}

impl Resolver for JwkResolver {
    async fn resolve(&self, did: &str, options: Option<Options>) -> crate::Result<Resolved> {
        let resolved = DidJwk::new(did).resolve(options)?;
        tracing::debug!(did, "resolved did:jwk");
        Ok(resolved)
    }

    fn methods(&self) -> Vec<Method> {
        vec![Method::Jwk]
    }
}
