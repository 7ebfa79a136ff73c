//! Tests for the creation of `did:jwk` DIDs.

use base64ct::{Base64UrlUnpadded, Encoding};
use did_jwk::jose::{Curve, KeyFamily};
use did_jwk::{
    DidJwk, Error, Kind, KeyType, OsRngGenerator, PublicKeyJwk, supported_key_types,
};

// A DID created from a minimal Ed25519 key is the base64url encoding of the
// exact JSON of the key, and expands to a document using the key for every
// purpose.
#[test]
fn minimal_ed25519() {
    let jwk = PublicKeyJwk {
        kty: KeyFamily::Okp,
        crv: Some(Curve::Ed25519),
        x: Some("11qYAYKxCrfVS_7TyWQHOg7hcvPapiMlrwIaaPcHURo".into()),
        ..PublicKeyJwk::default()
    };
    let did = DidJwk::create(&jwk).expect("should create");

    let expected = Base64UrlUnpadded::encode_string(
        br#"{"kty":"OKP","crv":"Ed25519","x":"11qYAYKxCrfVS_7TyWQHOg7hcvPapiMlrwIaaPcHURo"}"#,
    );
    assert_eq!(did.as_str(), format!("did:jwk:{expected}"));

    let document = did.expand().expect("should expand");
    let kid = format!("{did}#0");
    assert_eq!(document.id, did.as_str());

    let vms = document.verification_method.as_ref().expect("should have verification method");
    assert_eq!(vms.len(), 1);
    assert_eq!(vms[0].id, kid);
    assert_eq!(vms[0].controller, did.as_str());
    assert_eq!(vms[0].public_key_jwk, jwk);

    let reference = Some(vec![Kind::String(kid)]);
    assert_eq!(document.authentication, reference);
    assert_eq!(document.assertion_method, reference);
    assert_eq!(document.key_agreement, reference);
    assert_eq!(document.capability_invocation, reference);
    assert_eq!(document.capability_delegation, reference);
}

// Every supported key type round-trips through a DID.
#[test]
fn round_trip() {
    let generator = OsRngGenerator::new().rsa_bits(1024);

    for key_type in supported_key_types() {
        let (secret, did) = DidJwk::generate(key_type, &generator).expect("should generate");
        assert_eq!(secret.key_type(), key_type);
        assert!(did.is_valid(), "{key_type} DID should be valid");

        let jwk = did.decode().expect("should decode");
        assert_eq!(jwk, secret.public_jwk());
        assert_eq!(DidJwk::create(&jwk).expect("should create"), did);
    }
}

#[test]
fn public_key_shapes() {
    let generator = OsRngGenerator::new().rsa_bits(1024);

    let (_, did) = DidJwk::generate(KeyType::P384, &generator).expect("should generate");
    let jwk = did.decode().expect("should decode");
    assert_eq!(jwk.kty, KeyFamily::Ec);
    assert_eq!(jwk.crv, Some(Curve::P384));
    let x = Base64UrlUnpadded::decode_vec(&jwk.x.expect("should have x")).expect("should decode");
    assert_eq!(x.len(), 48);

    let (_, did) = DidJwk::generate(KeyType::P521, &generator).expect("should generate");
    let jwk = did.decode().expect("should decode");
    let y = Base64UrlUnpadded::decode_vec(&jwk.y.expect("should have y")).expect("should decode");
    assert_eq!(y.len(), 66);

    let (_, did) = DidJwk::generate(KeyType::Rsa, &generator).expect("should generate");
    let jwk = did.decode().expect("should decode");
    assert_eq!(jwk.kty, KeyFamily::Rsa);
    assert_eq!(jwk.crv, None);
    assert_eq!(jwk.e.as_deref(), Some("AQAB"));
}

// Unsupported key types fail before any key is generated.
#[test]
fn unsupported_key_type() {
    let generator = OsRngGenerator::new();
    for key_type in [KeyType::P224, KeyType::Bls12381G1, KeyType::Dilithium5] {
        let err = DidJwk::generate(key_type, &generator).expect_err("should fail");
        assert!(matches!(err, Error::UnsupportedKeyType(kt) if kt == key_type));
        assert_eq!(err.to_string(), format!("unsupported did:jwk key type: {key_type}"));
    }
}
