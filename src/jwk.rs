//! # DID JWK
//!
//! The `did:jwk` method is a DID method for static cryptographic keys. The
//! method-specific identifier is the base64url (unpadded) encoding of the JSON
//! serialization of a public JWK, so a DID document can be expanded from the
//! DID alone.
//!
//! See:
//!
//! - <https://github.com/quartzjer/did-jwk/blob/main/spec.md>
//! - <https://w3c.github.io/did-resolution>

mod create;
mod expand;
mod resolver;

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use self::expand::document;
pub use self::resolver::JwkResolver;
use crate::{Error, Method};

/// The `did:jwk` prefix.
pub const PREFIX: &str = "did:jwk";

/// Fragment identifying the single verification method of a `did:jwk`
/// document.
pub const KEY_FRAGMENT: &str = "0";

/// A `did:jwk` DID.
///
/// Creating a `DidJwk` from a string does not validate it. Use
/// [`DidJwk::decode`], [`DidJwk::expand`] or [`DidJwk::is_valid`] for that.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct DidJwk(String);

impl DidJwk {
    /// Wrap a string as a `did:jwk` DID without validating it.
    pub fn new(did: impl Into<String>) -> Self {
        Self(did.into())
    }

    /// The DID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The DID method.
    #[must_use]
    pub const fn method() -> Method {
        Method::Jwk
    }

    /// The method-specific identifier: the DID without the `did:jwk:` prefix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPrefix`] if the DID does not start with
    /// `did:jwk:`.
    pub fn suffix(&self) -> crate::Result<&str> {
        self.0
            .strip_prefix(PREFIX)
            .and_then(|rest| rest.strip_prefix(':'))
            .ok_or_else(|| Error::InvalidPrefix(self.0.clone()))
    }

    /// The DID URL of the verification method in the DID's document.
    #[must_use]
    pub fn key_id(&self) -> String {
        format!("{}#{KEY_FRAGMENT}", self.0)
    }

    /// Returns `true` if the DID can be decoded and expanded into a DID
    /// document.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.expand().is_ok()
    }
}

impl Display for DidJwk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DidJwk {
    type Err = Error;

    /// Parse and validate a `did:jwk` DID.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid `did:jwk` DID.
    fn from_str(s: &str) -> crate::Result<Self> {
        let did = Self::new(s);
        did.decode()?;
        Ok(did)
    }
}

impl AsRef<str> for DidJwk {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<DidJwk> for String {
    fn from(did: DidJwk) -> Self {
        did.0
    }
}
