//! Shared fixtures for integration tests

#![allow(dead_code)]

use aws_lc_rs::rand::SystemRandom;
use aws_lc_rs::signature::{
    ECDSA_P256_SHA256_FIXED_SIGNING, ECDSA_P384_SHA384_FIXED_SIGNING,
    ECDSA_P521_SHA512_FIXED_SIGNING, EcdsaKeyPair,
};
use jwtforge::*;
use rsa::pkcs1::EncodeRsaPrivateKey;
use rsa::pkcs8::EncodePrivateKey;
use std::sync::OnceLock;

/// Fixed clock for deterministic time checks
pub const NOW: i64 = 1_700_000_000;

fn rsa_private_key() -> &'static rsa::RsaPrivateKey {
    static KEY: OnceLock<rsa::RsaPrivateKey> = OnceLock::new();
    KEY.get_or_init(|| {
        let mut rng = rand::thread_rng();
        rsa::RsaPrivateKey::new(&mut rng, 2048).expect("Failed to generate RSA key")
    })
}

/// RSA private key as PKCS#8 DER
pub fn rsa_pkcs8_der() -> Vec<u8> {
    rsa_private_key()
        .to_pkcs8_der()
        .expect("Failed to encode PKCS#8")
        .as_bytes()
        .to_vec()
}

/// RSA private key as PKCS#1 DER
pub fn rsa_pkcs1_der() -> Vec<u8> {
    rsa_private_key()
        .to_pkcs1_der()
        .expect("Failed to encode PKCS#1")
        .as_bytes()
        .to_vec()
}

/// (signing key, verifying key) for RSA algorithms
pub fn rsa_keys() -> (Key, Key) {
    let private = Key::rsa_private(rsa_pkcs8_der());
    let public = private.public_key().expect("Failed to derive RSA public key");
    (private, public)
}

/// Public half of a second, unrelated RSA key
pub fn other_rsa_public_key() -> Key {
    static DER: OnceLock<Vec<u8>> = OnceLock::new();
    let der = DER.get_or_init(|| {
        let mut rng = rand::thread_rng();
        rsa::RsaPrivateKey::new(&mut rng, 2048)
            .expect("Failed to generate RSA key")
            .to_pkcs8_der()
            .expect("Failed to encode PKCS#8")
            .as_bytes()
            .to_vec()
    });
    Key::rsa_private(der.as_slice())
        .public_key()
        .expect("Failed to derive RSA public key")
}

/// (signing key, verifying key) for an ECDSA curve
pub fn ecdsa_keys(curve: EcdsaCurve) -> (Key, Key) {
    let alg = match curve {
        EcdsaCurve::P256 => &ECDSA_P256_SHA256_FIXED_SIGNING,
        EcdsaCurve::P384 => &ECDSA_P384_SHA384_FIXED_SIGNING,
        EcdsaCurve::P521 => &ECDSA_P521_SHA512_FIXED_SIGNING,
    };
    let pkcs8 = EcdsaKeyPair::generate_pkcs8(alg, &SystemRandom::new())
        .expect("Failed to generate ECDSA key");

    let private = Key::ecdsa_private(pkcs8.as_ref(), curve);
    let public = private.public_key().expect("Failed to derive ECDSA public key");
    (private, public)
}

/// (signing key, verifying key) suitable for `alg`
pub fn keys_for(alg: Algorithm) -> (Key, Key) {
    match alg.curve() {
        Some(curve) => ecdsa_keys(curve),
        None if alg.is_symmetric() => {
            let key = Key::symmetric(format!("test-secret-for-{alg}-with-some-length"));
            (key.clone(), key)
        }
        None => rsa_keys(),
    }
}

/// Claim set exercising every registered claim plus extensions
pub fn sample_claims() -> Claims {
    ClaimsBuilder::new()
        .at(NOW)
        .issuer("https://example.com")
        .subject("test-user")
        .audiences(["app-one", "app-two"])
        .expires_in(std::time::Duration::from_secs(3600))
        .not_before(NOW - 60)
        .issued_now()
        .jwt_id("token-id-1")
        .claim("role", "admin")
        .claim("scopes", serde_json::json!(["read", "write"]))
        .build()
        .expect("Failed to build claims")
}

/// Validation config pinned to [`NOW`]
pub fn config() -> ValidationConfig {
    ValidationConfig::default().at(NOW)
}

/// Sign `claims` with `alg` under a default header
pub fn sign(alg: Algorithm, key: &Key, claims: &Claims) -> String {
    build(key, &TokenHeader::new(alg), claims).expect("Failed to build token")
}

/// Assemble a token from raw JSON and raw signature bytes
pub fn raw_token(header: &str, payload: &str, signature: &[u8]) -> String {
    format!(
        "{}.{}.{}",
        jwtforge::utils::base64url::encode(header),
        jwtforge::utils::base64url::encode(payload),
        jwtforge::utils::base64url::encode_bytes(signature)
    )
}

/// Sign raw JSON segments with HS256
pub fn hs256_raw(secret: &str, header: &str, payload: &str) -> String {
    let signing_input = format!(
        "{}.{}",
        jwtforge::utils::base64url::encode(header),
        jwtforge::utils::base64url::encode(payload)
    );
    let signature = resolve(Algorithm::HS256)
        .sign(&Key::symmetric(secret), signing_input.as_bytes())
        .expect("Failed to sign");
    format!(
        "{signing_input}.{}",
        jwtforge::utils::base64url::encode_bytes(&signature)
    )
}
