//! Public Token type for validated JWT tokens
//!
//! This module provides the `Token` type, the result of a successful
//! validation. It has passed every stage of the pipeline: parsing, the
//! algorithm check, the time window and claim checks, and signature
//! verification.

use crate::algorithm::Algorithm;
use crate::claims::Claims;
use crate::token::TokenHeader;
use serde_json::Value;

/// A fully validated JWT token
///
/// By the time you receive a `Token`, all validation steps have completed
/// successfully:
///
/// - **Parsing**: header and payload decoded, registered claims type-checked
/// - **Algorithm**: the header `alg` equals the algorithm the caller expected
/// - **Claims validation**: `exp` and `nbf` hold, plus any configured
///   `iat`, audience, issuer or subject requirement
/// - **Signature verification**: the signature verified against the caller's key
///
/// The three raw wire segments are kept so the token can be forwarded
/// byte-for-byte.
///
/// # Examples
///
/// ```ignore
/// use jwtforge::*;
///
/// let token = TokenValidator::new(Algorithm::HS256, Key::symmetric("secret"))
///     .validation(ValidationConfig::default().require_issuer("https://trusted.com"))
///     .validate(&token_string)?;
///
/// println!("Subject: {:?}", token.subject());
/// println!("Expiration: {:?}", token.expiration());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    header: TokenHeader,
    claims: Claims,
    parts: [String; 3],
}

impl Token {
    pub(crate) fn new(header: TokenHeader, claims: Claims, parts: [String; 3]) -> Self {
        Self {
            header,
            claims,
            parts,
        }
    }

    /// Get the token header
    pub fn header(&self) -> &TokenHeader {
        &self.header
    }

    /// Get the algorithm the token was verified with
    pub fn algorithm(&self) -> Algorithm {
        self.header.algorithm()
    }

    /// Get all claims
    pub fn claims(&self) -> &Claims {
        &self.claims
    }

    /// Take ownership of the claims
    pub fn into_claims(self) -> Claims {
        self.claims
    }

    /// Get the issuer (iss claim)
    pub fn issuer(&self) -> Option<&str> {
        self.claims.issuer.as_deref()
    }

    /// Get the subject (sub claim)
    pub fn subject(&self) -> Option<&str> {
        self.claims.subject.as_deref()
    }

    /// Get the audience (aud claim), empty when absent
    pub fn audience(&self) -> &[String] {
        self.claims.audience()
    }

    /// Get the expiration time (exp claim) as Unix timestamp
    pub fn expiration(&self) -> Option<i64> {
        self.claims.expiration
    }

    /// Get the not-before time (nbf claim) as Unix timestamp
    pub fn not_before(&self) -> Option<i64> {
        self.claims.not_before
    }

    /// Get the issued-at time (iat claim) as Unix timestamp
    pub fn issued_at(&self) -> Option<i64> {
        self.claims.issued_at
    }

    /// Get the JWT ID (jti claim)
    pub fn jwt_id(&self) -> Option<&str> {
        self.claims.jwt_id.as_deref()
    }

    /// Get an extension claim
    pub fn claim(&self, name: &str) -> Option<&Value> {
        self.claims.get(name)
    }

    /// Raw header segment
    pub fn header_part(&self) -> &str {
        &self.parts[0]
    }

    /// Raw payload segment
    pub fn payload_part(&self) -> &str {
        &self.parts[1]
    }

    /// Raw signature segment
    pub fn signature_part(&self) -> &str {
        &self.parts[2]
    }

    /// The token as it appeared on the wire
    pub fn as_compact(&self) -> String {
        self.parts.join(".")
    }
}
