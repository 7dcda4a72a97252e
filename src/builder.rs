//! Token construction: header + claims → signed compact JWT

use crate::algorithm::{Algorithm, resolve};
use crate::claims::Claims;
use crate::codec;
use crate::error::Result;
use crate::keys::Key;
use crate::token::TokenHeader;
use crate::utils::base64url;

use serde_json::Value;

/// Sign `claims` under `header` and return the compact token
///
/// The algorithm used is always `header.algorithm()`, so the `alg` written
/// into the token is the one that produced the signature.
///
/// # Errors
/// Key and signing errors from the signing primitive are returned unchanged
/// (`KeyTypeMismatch`, `InvalidKey`, `SigningFailed`).
pub fn build(key: &Key, header: &TokenHeader, claims: &Claims) -> Result<String> {
    let algorithm = header.algorithm();
    let encoded = codec::encode(header, claims);

    let signature = resolve(algorithm)
        .sign(key, encoded.signing_input.as_bytes())
        .inspect_err(|e| tracing::debug!(alg = %algorithm, error = %e, "token signing failed"))?;

    tracing::trace!(alg = %algorithm, "token built");

    Ok(format!(
        "{}.{}",
        encoded.signing_input,
        base64url::encode_bytes(&signature)
    ))
}

/// [`build`] with the signing call moved onto tokio's blocking pool
///
/// # Errors
/// Same as [`build`], plus `Error::Runtime` if the blocking task panics or
/// is cancelled.
#[cfg(feature = "async")]
pub async fn build_async(key: Key, header: TokenHeader, claims: Claims) -> Result<String> {
    tokio::task::spawn_blocking(move || build(&key, &header, &claims))
        .await
        .map_err(|e| crate::error::Error::Runtime(e.to_string()))?
}

/// Builder for signed tokens
///
/// # Example
///
/// ```ignore
/// use jwtforge::*;
/// use std::time::Duration;
///
/// let claims = ClaimsBuilder::new()
///     .subject("user-1")
///     .expires_in(Duration::from_secs(3600))
///     .build()?;
///
/// let token = TokenBuilder::new(Algorithm::HS256)
///     .key_id("2024-01")
///     .claims(claims)
///     .sign(&Key::symmetric("secret"))?;
/// ```
#[derive(Debug, Clone)]
pub struct TokenBuilder {
    header: TokenHeader,
    claims: Claims,
}

impl TokenBuilder {
    /// Start a token signed with `algorithm`; `typ` is set to `"JWT"`
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            header: TokenHeader::new(algorithm),
            claims: Claims::default(),
        }
    }

    /// Set the `kid` header field
    pub fn key_id(self, kid: impl Into<String>) -> Self {
        self.header_field("kid", kid.into())
    }

    /// Add an extension header field
    pub fn header_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.header.insert(name, value);
        self
    }

    /// Set the payload
    pub fn claims(mut self, claims: Claims) -> Self {
        self.claims = claims;
        self
    }

    /// Header that will be written
    pub fn header(&self) -> &TokenHeader {
        &self.header
    }

    /// Sign and serialize
    pub fn sign(&self, key: &Key) -> Result<String> {
        build(key, &self.header, &self.claims)
    }

    /// Sign on tokio's blocking pool
    #[cfg(feature = "async")]
    pub async fn sign_async(self, key: Key) -> Result<String> {
        build_async(key, self.header, self.claims).await
    }
}
