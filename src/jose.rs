//! # JSON Web Key
//!
//! A public JSON Web Key as embedded in a `did:jwk` DID. Only the members
//! needed to describe a public key are modelled; members are serialized in a
//! fixed order and absent members are omitted so that the same key always
//! yields the same bytes.
//!
//! See [RFC7517](https://www.rfc-editor.org/rfc/rfc7517).

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Simplified public JSON Web Key (JWK).
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct PublicKeyJwk {
    /// Key family.
    pub kty: KeyFamily,

    /// Cryptographic curve. Used by `EC` and `OKP` keys.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crv: Option<Curve>,

    /// Public key, or X coordinate of an `EC` public key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,

    /// Y coordinate of an `EC` public key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<String>,

    /// RSA modulus.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n: Option<String>,

    /// RSA public exponent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub e: Option<String>,

    /// Intended use of the key: `sig` or `enc`. Other values are carried but
    /// have no meaning to this crate.
    #[serde(rename = "use")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_: Option<String>,

    /// Operations the key is intended for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_ops: Option<Vec<String>>,

    /// Algorithm intended for use with the key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alg: Option<String>,

    /// Key identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,
}

impl PublicKeyJwk {
    /// The recognized use of the key, if any.
    ///
    /// Values other than `sig` and `enc` are treated the same as an absent
    /// `use` member.
    #[must_use]
    pub fn key_use(&self) -> Option<KeyUse> {
        self.use_.as_deref().and_then(KeyUse::from_hint)
    }
}

/// JWK `kty` values.
///
/// Values other than those generated by this crate are kept as given in
/// [`KeyFamily::Other`].
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum KeyFamily {
    /// Octet key pair (Edwards and Montgomery curves).
    #[default]
    Okp,

    /// Elliptic curve.
    Ec,

    /// RSA.
    Rsa,

    /// Any other key family.
    Other(String),
}

impl KeyFamily {
    /// The registered name of the key family.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Okp => "OKP",
            Self::Ec => "EC",
            Self::Rsa => "RSA",
            Self::Other(kty) => kty,
        }
    }
}

impl From<String> for KeyFamily {
    fn from(kty: String) -> Self {
        match kty.as_str() {
            "OKP" => Self::Okp,
            "EC" => Self::Ec,
            "RSA" => Self::Rsa,
            _ => Self::Other(kty),
        }
    }
}

impl From<KeyFamily> for String {
    fn from(kty: KeyFamily) -> Self {
        match kty {
            KeyFamily::Other(kty) => kty,
            known => known.as_str().to_string(),
        }
    }
}

impl Display for KeyFamily {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JWK `crv` values.
///
/// Curves this crate cannot generate keys for (Ed448, brainpoolP256r1, ...)
/// are kept as given in [`Curve::Other`].
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum Curve {
    /// Ed25519 signature (`EdDSA`) key.
    Ed25519,

    /// X25519 key agreement key.
    X25519,

    /// secp256k1 curve.
    Secp256k1,

    /// NIST P-256 curve.
    P256,

    /// NIST P-384 curve.
    P384,

    /// NIST P-521 curve.
    P521,

    /// Any other curve.
    Other(String),
}

impl Curve {
    /// The registered name of the curve.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ed25519 => "Ed25519",
            Self::X25519 => "X25519",
            Self::Secp256k1 => "secp256k1",
            Self::P256 => "P-256",
            Self::P384 => "P-384",
            Self::P521 => "P-521",
            Self::Other(crv) => crv,
        }
    }
}

impl From<String> for Curve {
    fn from(crv: String) -> Self {
        match crv.as_str() {
            "Ed25519" => Self::Ed25519,
            "X25519" => Self::X25519,
            "secp256k1" => Self::Secp256k1,
            "P-256" => Self::P256,
            "P-384" => Self::P384,
            "P-521" => Self::P521,
            _ => Self::Other(crv),
        }
    }
}

impl From<Curve> for String {
    fn from(crv: Curve) -> Self {
        match crv {
            Curve::Other(crv) => crv,
            known => known.as_str().to_string(),
        }
    }
}

impl Display for Curve {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recognized values of the JWK `use` member.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyUse {
    /// `sig`: the key is for signatures only.
    Signature,

    /// `enc`: the key is for encryption (key agreement) only.
    Encryption,
}

impl KeyUse {
    /// Map a raw `use` value to a recognized key use.
    #[must_use]
    pub fn from_hint(hint: &str) -> Option<Self> {
        match hint {
            "sig" => Some(Self::Signature),
            "enc" => Some(Self::Encryption),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    #[test]
    fn serialize_in_member_order() {
        let jwk = PublicKeyJwk {
            kty: KeyFamily::Ec,
            crv: Some(Curve::P256),
            x: Some("x".into()),
            y: Some("y".into()),
            use_: Some("sig".into()),
            ..PublicKeyJwk::default()
        };
        let json = serde_json::to_string(&jwk).expect("should serialize");
        assert_eq!(json, r#"{"kty":"EC","crv":"P-256","x":"x","y":"y","use":"sig"}"#);
    }

    #[test]
    fn kty_required() {
        let res = serde_json::from_value::<PublicKeyJwk>(json!({"crv": "Ed25519", "x": "abc"}));
        assert!(res.is_err());
    }

    #[test]
    fn unrecognized_members_kept() {
        let value = json!({"kty": "OKP", "crv": "Ed448", "x": "abc"});
        let jwk: PublicKeyJwk = serde_json::from_value(value.clone()).expect("should deserialize");
        assert_eq!(jwk.kty, KeyFamily::Okp);
        assert_eq!(jwk.crv, Some(Curve::Other("Ed448".into())));
        assert_eq!(serde_json::to_value(&jwk).expect("should serialize"), value);

        let jwk: PublicKeyJwk =
            serde_json::from_value(json!({"kty": "oct"})).expect("should deserialize");
        assert_eq!(jwk.kty, KeyFamily::Other("oct".into()));
        assert_eq!(jwk.kty.to_string(), "oct");

        // known names never land in `Other`
        assert_eq!(Curve::from("P-256".to_string()), Curve::P256);
        assert_eq!(String::from(Curve::Secp256k1), "secp256k1");
    }

    #[test]
    fn key_use() {
        let mut jwk = PublicKeyJwk::default();
        assert_eq!(jwk.key_use(), None);

        jwk.use_ = Some("sig".into());
        assert_eq!(jwk.key_use(), Some(KeyUse::Signature));

        jwk.use_ = Some("enc".into());
        assert_eq!(jwk.key_use(), Some(KeyUse::Encryption));

        jwk.use_ = Some("wrap".into());
        assert_eq!(jwk.key_use(), None);
    }
}
