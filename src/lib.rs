//! # DID JWK
//!
//! An implementation of the `did:jwk` DID method. A `did:jwk` DID is a
//! self-certifying identifier: the public key is encoded in the DID itself, so
//! resolving it is a matter of decoding the key and expanding it into a DID
//! document. No ledger, registry or network lookup is involved.
//!
//! See:
//!
//! - <https://github.com/quartzjer/did-jwk/blob/main/spec.md>
//! - <https://w3c.github.io/did-resolution>
//!
//! # Example
//!
//! ```rust
//! use did_jwk::{DidJwk, KeyType, OsRngGenerator};
//!
//! let (_secret, did) =
//!     DidJwk::generate(KeyType::Ed25519, &OsRngGenerator::new()).expect("should generate");
//! let document = did.expand().expect("should expand");
//! assert_eq!(document.id, did.as_str());
//! ```

mod core;
mod document;
mod error;
pub mod jose;
pub mod jwk;
pub mod key;
mod resolve;

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::anyhow;

pub use self::core::Kind;
pub use self::document::*;
pub use self::error::Error;
pub use self::jose::PublicKeyJwk;
pub use self::jwk::{DidJwk, JwkResolver};
pub use self::key::{KeyGenerator, KeyType, OsRngGenerator, SecretKey, supported_key_types};
pub use self::resolve::*;

/// Result type for `did:jwk` operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// DID methods supported by this crate.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// `did:jwk`
    #[default]
    Jwk,
}

impl FromStr for Method {
    type Err = anyhow::Error;

    /// Parse a string into a [`Method`].
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid method.
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "jwk" => Ok(Self::Jwk),
            _ => Err(anyhow!("method not supported: {s}")),
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Jwk => write!(f, "jwk"),
        }
    }
}
