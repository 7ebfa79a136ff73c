//! # Keys
//!
//! Key types, the key generation collaborator and the gate that limits which
//! key types may be used to create a `did:jwk`.

mod generator;

use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;

use base64ct::{Base64UrlUnpadded, Encoding};
use curve25519_dalek::MontgomeryPoint;
use p256::elliptic_curve::sec1::ToEncodedPoint;
use rsa::traits::PublicKeyParts;
use serde::{Deserialize, Serialize};

pub use self::generator::OsRngGenerator;
use crate::jose::{Curve, KeyFamily, PublicKeyJwk};

/// Key types known to key generators.
///
/// Not all of them can be used with `did:jwk`. See [`KeyType::is_supported`].
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub enum KeyType {
    /// Ed25519 signing key.
    Ed25519,

    /// X25519 key agreement key.
    X25519,

    /// secp256k1 key.
    #[serde(rename = "secp256k1")]
    Secp256k1,

    /// NIST P-224 key.
    #[serde(rename = "P-224")]
    P224,

    /// NIST P-256 key.
    #[serde(rename = "P-256")]
    P256,

    /// NIST P-384 key.
    #[serde(rename = "P-384")]
    P384,

    /// NIST P-521 key.
    #[serde(rename = "P-521")]
    P521,

    /// RSA key.
    #[serde(rename = "RSA")]
    Rsa,

    /// BLS12-381 key in G1.
    #[serde(rename = "BLS12381G1")]
    Bls12381G1,

    /// BLS12-381 key in G2.
    #[serde(rename = "BLS12381G2")]
    Bls12381G2,

    /// CRYSTALS-Dilithium, security level 2.
    Dilithium2,

    /// CRYSTALS-Dilithium, security level 3.
    Dilithium3,

    /// CRYSTALS-Dilithium, security level 5.
    Dilithium5,
}

impl KeyType {
    /// Returns `true` if a `did:jwk` can be created from a key of this type.
    #[must_use]
    pub const fn is_supported(self) -> bool {
        match self {
            Self::Ed25519
            | Self::X25519
            | Self::Secp256k1
            | Self::P256
            | Self::P384
            | Self::P521
            | Self::Rsa => true,
            Self::P224
            | Self::Bls12381G1
            | Self::Bls12381G2
            | Self::Dilithium2
            | Self::Dilithium3
            | Self::Dilithium5 => false,
        }
    }
}

/// Key types that can be used to create a `did:jwk`.
#[must_use]
pub const fn supported_key_types() -> [KeyType; 7] {
    [
        KeyType::Ed25519,
        KeyType::X25519,
        KeyType::Secp256k1,
        KeyType::P256,
        KeyType::P384,
        KeyType::P521,
        KeyType::Rsa,
    ]
}

impl Display for KeyType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ed25519 => write!(f, "Ed25519"),
            Self::X25519 => write!(f, "X25519"),
            Self::Secp256k1 => write!(f, "secp256k1"),
            Self::P224 => write!(f, "P-224"),
            Self::P256 => write!(f, "P-256"),
            Self::P384 => write!(f, "P-384"),
            Self::P521 => write!(f, "P-521"),
            Self::Rsa => write!(f, "RSA"),
            Self::Bls12381G1 => write!(f, "BLS12381G1"),
            Self::Bls12381G2 => write!(f, "BLS12381G2"),
            Self::Dilithium2 => write!(f, "Dilithium2"),
            Self::Dilithium3 => write!(f, "Dilithium3"),
            Self::Dilithium5 => write!(f, "Dilithium5"),
        }
    }
}

impl FromStr for KeyType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "Ed25519" => Ok(Self::Ed25519),
            "X25519" => Ok(Self::X25519),
            "secp256k1" => Ok(Self::Secp256k1),
            "P-224" => Ok(Self::P224),
            "P-256" => Ok(Self::P256),
            "P-384" => Ok(Self::P384),
            "P-521" => Ok(Self::P521),
            "RSA" => Ok(Self::Rsa),
            "BLS12381G1" => Ok(Self::Bls12381G1),
            "BLS12381G2" => Ok(Self::Bls12381G2),
            "Dilithium2" => Ok(Self::Dilithium2),
            "Dilithium3" => Ok(Self::Dilithium3),
            "Dilithium5" => Ok(Self::Dilithium5),
            _ => Err(anyhow::anyhow!("unknown key type: {s}")),
        }
    }
}

/// Key generation provider.
///
/// Implementers only need to generate keys for the types listed by
/// [`supported_key_types`]; callers in this crate never ask for anything else.
pub trait KeyGenerator {
    /// Generate a new private key of the requested type.
    ///
    /// # Errors
    ///
    /// Returns an error if the key cannot be generated.
    fn generate(&self, key_type: KeyType) -> anyhow::Result<SecretKey>;
}

/// A private key for one of the key types supported by `did:jwk`.
pub enum SecretKey {
    /// Ed25519 signing key.
    Ed25519(ed25519_dalek::SigningKey),

    /// X25519 static secret (clamped on use).
    X25519([u8; 32]),

    /// secp256k1 secret key.
    Secp256k1(k256::SecretKey),

    /// NIST P-256 secret key.
    P256(p256::SecretKey),

    /// NIST P-384 secret key.
    P384(p384::SecretKey),

    /// NIST P-521 secret key.
    P521(p521::SecretKey),

    /// RSA private key.
    Rsa(rsa::RsaPrivateKey),
}

impl SecretKey {
    /// The type of the key.
    #[must_use]
    pub const fn key_type(&self) -> KeyType {
        match self {
            Self::Ed25519(_) => KeyType::Ed25519,
            Self::X25519(_) => KeyType::X25519,
            Self::Secp256k1(_) => KeyType::Secp256k1,
            Self::P256(_) => KeyType::P256,
            Self::P384(_) => KeyType::P384,
            Self::P521(_) => KeyType::P521,
            Self::Rsa(_) => KeyType::Rsa,
        }
    }

    /// The public half of the key as a JWK.
    #[must_use]
    pub fn public_jwk(&self) -> PublicKeyJwk {
        match self {
            Self::Ed25519(signing_key) => {
                okp_jwk(Curve::Ed25519, signing_key.verifying_key().as_bytes())
            }
            Self::X25519(secret) => {
                okp_jwk(Curve::X25519, MontgomeryPoint::mul_base_clamped(*secret).as_bytes())
            }
            Self::Secp256k1(secret) => {
                let point = secret.public_key().to_encoded_point(false);
                ec_jwk(Curve::Secp256k1, point.x(), point.y())
            }
            Self::P256(secret) => {
                let point = secret.public_key().to_encoded_point(false);
                ec_jwk(Curve::P256, point.x(), point.y())
            }
            Self::P384(secret) => {
                let point = secret.public_key().to_encoded_point(false);
                ec_jwk(Curve::P384, point.x(), point.y())
            }
            Self::P521(secret) => {
                let point = secret.public_key().to_encoded_point(false);
                ec_jwk(Curve::P521, point.x(), point.y())
            }
            Self::Rsa(private_key) => PublicKeyJwk {
                kty: KeyFamily::Rsa,
                n: Some(Base64UrlUnpadded::encode_string(&private_key.n().to_bytes_be())),
                e: Some(Base64UrlUnpadded::encode_string(&private_key.e().to_bytes_be())),
                ..PublicKeyJwk::default()
            },
        }
    }
}

impl Debug for SecretKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SecretKey").field(&self.key_type()).finish()
    }
}

fn okp_jwk(crv: Curve, x: &[u8]) -> PublicKeyJwk {
    PublicKeyJwk {
        kty: KeyFamily::Okp,
        crv: Some(crv),
        x: Some(Base64UrlUnpadded::encode_string(x)),
        ..PublicKeyJwk::default()
    }
}

// Uncompressed points always carry both coordinates.
fn ec_jwk<B: AsRef<[u8]>>(crv: Curve, x: Option<&B>, y: Option<&B>) -> PublicKeyJwk {
    PublicKeyJwk {
        kty: KeyFamily::Ec,
        crv: Some(crv),
        x: x.map(|x| Base64UrlUnpadded::encode_string(x.as_ref())),
        y: y.map(|y| Base64UrlUnpadded::encode_string(y.as_ref())),
        ..PublicKeyJwk::default()
    }
}
