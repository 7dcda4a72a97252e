//! Tests for header fields beyond `alg` and `typ`

mod common;

use common::*;
use jwtforge::utils::base64url;
use jwtforge::*;
use serde_json::json;

fn decoded_header(token: &str) -> String {
    let header = token.split('.').next().unwrap();
    String::from_utf8(base64url::decode_bytes(header).unwrap()).unwrap()
}

#[test]
fn test_key_id_round_trip() {
    let (private, public) = keys_for(Algorithm::ES256);
    let token_str = TokenBuilder::new(Algorithm::ES256)
        .key_id("signing-key-2024")
        .claims(sample_claims())
        .sign(&private)
        .unwrap();

    let parsed = parse(&token_str).unwrap();
    assert_eq!(parsed.header().key_id(), Some("signing-key-2024"));

    let token = TokenValidator::new(Algorithm::ES256, public)
        .validation(config())
        .validate(&token_str)
        .unwrap();
    assert_eq!(token.header().key_id(), Some("signing-key-2024"));
}

#[test]
fn test_header_field_order() {
    let token_str = TokenBuilder::new(Algorithm::HS256)
        .key_id("k1")
        .header_field("x5t", "thumb")
        .header_field("cty", "JWT")
        .sign(&Key::symmetric("secret"))
        .unwrap();

    assert_eq!(
        decoded_header(&token_str),
        r#"{"alg":"HS256","typ":"JWT","kid":"k1","x5t":"thumb","cty":"JWT"}"#
    );
}

#[test]
fn test_structured_header_fields() {
    let key = Key::symmetric("secret");
    let token_str = TokenBuilder::new(Algorithm::HS512)
        .header_field("crit", json!(["exp"]))
        .header_field("ctx", json!({"tenant": "acme", "tier": 2}))
        .sign(&key)
        .unwrap();

    let token = validate(Algorithm::HS512, &key, &token_str).unwrap();
    assert_eq!(token.header().get("crit"), Some(&json!(["exp"])));
    assert_eq!(
        token.header().get("ctx"),
        Some(&json!({"tenant": "acme", "tier": 2}))
    );
    assert_eq!(token.header().extra().len(), 2);
}

#[test]
fn test_reserved_fields_cannot_be_overridden() {
    let builder = TokenBuilder::new(Algorithm::HS256)
        .header_field("alg", "none")
        .header_field("typ", "other");
    assert_eq!(builder.header().algorithm(), Algorithm::HS256);
    assert_eq!(builder.header().token_type(), Some("JWT"));

    let token_str = builder.sign(&Key::symmetric("secret")).unwrap();
    assert_eq!(decoded_header(&token_str), r#"{"alg":"HS256","typ":"JWT"}"#);
}

#[test]
fn test_foreign_header_fields_preserved() {
    let header = r#"{"kid":"first","alg":"HS384","typ":"JWT","jku":"https://example.com/keys"}"#;
    let signing_input = format!(
        "{}.{}",
        base64url::encode(header),
        base64url::encode(r#"{"sub":"user"}"#)
    );
    let key = Key::symmetric("secret");
    let signature = resolve(Algorithm::HS384)
        .sign(&key, signing_input.as_bytes())
        .unwrap();
    let token_str = format!("{signing_input}.{}", base64url::encode_bytes(&signature));

    let token = validate(Algorithm::HS384, &key, &token_str).unwrap();
    assert_eq!(token.header().key_id(), Some("first"));
    assert_eq!(
        token.header().get("jku"),
        Some(&json!("https://example.com/keys"))
    );
    // Signature covers the received bytes, not a re-serialization
    assert_eq!(decoded_header(token.as_compact().as_str()), header);
}

#[test]
fn test_header_without_typ() {
    let mut header = TokenHeader::new(Algorithm::HS256);
    header.insert("kid", "k");
    let token_str = build(&Key::symmetric("secret"), &header, &Claims::default()).unwrap();
    assert!(decoded_header(&token_str).starts_with(r#"{"alg":"HS256","typ":"JWT""#));

    let raw = hs256_raw("secret", r#"{"alg":"HS256","kid":"k"}"#, "{}");
    let token = validate(Algorithm::HS256, &Key::symmetric("secret"), &raw).unwrap();
    assert_eq!(token.header().token_type(), None);
    assert_eq!(token.header().key_id(), Some("k"));
}

#[test]
fn test_lowercase_typ_rejected() {
    let raw = hs256_raw("secret", r#"{"alg":"HS256","typ":"jwt"}"#, "{}");
    assert_eq!(
        parse(&raw).err(),
        Some(Error::Malformed(Malformed::TokenType(r#""jwt""#.into())))
    );
}
