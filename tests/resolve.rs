//! Tests for resolving `did:jwk` DIDs through the shared resolver contract.

use did_jwk::{
    ContentType, DidJwk, Error, JwkResolver, Kind, KeyType, Method, OsRngGenerator,
    RESOLUTION_CONTEXT, Resolver,
};

// The did:jwk specification's P-256 example.
const DID_P256: &str = "did:jwk:eyJjcnYiOiJQLTI1NiIsImt0eSI6IkVDIiwieCI6ImFjYklRaXVNczNpOF91c3pFakoydHBUdFJNNEVVM3l6OTFQSDZDZEgyVjAiLCJ5IjoiX0tjeUxqOXZXTXB0bm1LdG00NkdxRHo4d2Y3NEk1TEtncmwyR3pIM25TRSJ9";

// Resolution is generic over the resolver, as a multi-method host would use it.
async fn resolve(resolver: &impl Resolver, did: &str) -> did_jwk::Result<did_jwk::Resolved> {
    resolver.resolve(did, None).await
}

#[tokio::test]
async fn resolve_spec_example() {
    let resolved = resolve(&JwkResolver, DID_P256).await.expect("should resolve");

    assert_eq!(resolved.context, RESOLUTION_CONTEXT);
    assert_eq!(resolved.metadata.content_type, ContentType::DidLdJson);

    let document = resolved.document;
    assert_eq!(document.id, DID_P256);
    let context = document.context.iter().map(Kind::as_str).collect::<Vec<_>>();
    assert_eq!(
        context,
        vec![
            Some("https://www.w3.org/ns/did/v1"),
            Some("https://w3id.org/security/suites/jws-2020/v1")
        ]
    );
    assert!(document.key_agreement.is_some());
}

#[tokio::test]
async fn resolve_generated() {
    let (_, did) =
        DidJwk::generate(KeyType::Ed25519, &OsRngGenerator::new()).expect("should generate");
    let resolved = resolve(&JwkResolver, did.as_str()).await.expect("should resolve");
    assert_eq!(resolved.document, did.expand().expect("should expand"));
}

#[tokio::test]
async fn resolve_malformed() {
    // rejected DIDs are logged at `warn`
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();

    for did in ["not-the-prefix:abc", "did:jwk", "did:jwk:", "did:jwk:e30", "did:jwk:@@@"] {
        let err = resolve(&JwkResolver, did).await.expect_err("should fail");
        assert!(matches!(err, Error::Resolution(_)), "{did} should fail to resolve");
    }
}

#[tokio::test]
async fn resolve_concurrently() {
    let handles = (0..8)
        .map(|_| tokio::spawn(async { JwkResolver.resolve(DID_P256, None).await }))
        .collect::<Vec<_>>();

    for handle in handles {
        let resolved = handle.await.expect("should join").expect("should resolve");
        assert_eq!(resolved.document.id, DID_P256);
    }
}

#[test]
fn methods() {
    let methods = JwkResolver.methods();
    assert_eq!(methods, vec![Method::Jwk]);
    assert_eq!(methods[0].to_string(), "jwk");
}
