//! # jwtforge - Build, Parse and Validate Signed JWTs
//!
//! **jwtforge** builds compact JSON Web Tokens, parses untrusted token strings, and validates
//! them against a caller-declared algorithm and key. It covers exactly twelve signing
//! algorithms (HMAC, RSASSA-PKCS1-v1_5, ECDSA and RSASSA-PSS with SHA-256/384/512) and
//! nothing else: no `none`, no encryption, no key management.
//!
//! ## Overview
//!
//! A JWT is three Base64URL segments joined by dots: a JSON header naming the algorithm, a
//! JSON payload of claims, and a signature over the first two segments. The header's `alg`
//! field is attacker-controlled, so a validator that trusts it can be tricked into verifying
//! an HMAC token with an RSA public key used as a shared secret (algorithm confusion).
//!
//! **jwtforge** never lets `alg` pick the verification path. The caller names the algorithm
//! it expects; a token declaring anything else is rejected before the key is touched.
//!
//! ## Quick Start
//!
//! ```ignore
//! use jwtforge::*;
//! use std::time::Duration;
//!
//! let key = Key::symmetric("your-256-bit-secret");
//!
//! let claims = ClaimsBuilder::new()
//!     .issuer("https://auth.example.com")
//!     .subject("user-1")
//!     .audience("my-api")
//!     .expires_in(Duration::from_secs(3600))
//!     .issued_now()
//!     .build()?;
//!
//! let token_str = TokenBuilder::new(Algorithm::HS256)
//!     .claims(claims)
//!     .sign(&key)?;
//!
//! let token = TokenValidator::new(Algorithm::HS256, key)
//!     .validation(ValidationConfig::default().require_audience("my-api"))
//!     .validate(&token_str)?;
//!
//! println!("Subject: {:?}", token.subject());
//! ```
//!
//! ## Validation Flow
//!
//! Validation moves a token through type-level states, cheapest and safest checks first:
//!
//! ```text
//! &str
//!     │ ParsedToken::from_string()   three parts, known alg, typed claims
//!     ▼
//! ParsedToken (public; untrusted)
//!     │ algorithm check              alg == expected
//!     ▼
//! TrustedToken (internal)
//!     │ claims check                 exp, nbf, optional iat/aud/iss/sub
//!     ▼
//! ValidatedToken (internal)
//!     │ signature check              key used here and only here
//!     ▼
//! Token (public; safe to use)
//! ```
//!
//! Only `ParsedToken` and `Token` are public. The intermediate states cannot escape the
//! validator, so a partially validated token is never handed to the caller.
//!
//! ## Algorithm Support
//!
//! | Family | Algorithms | Key |
//! |---|---|---|
//! | HMAC | HS256, HS384, HS512 | [`Key::symmetric`] |
//! | RSASSA-PKCS1-v1_5 | RS256, RS384, RS512 | [`Key::rsa_private`] / [`Key::rsa_public`] |
//! | RSASSA-PSS | PS256, PS384, PS512 | [`Key::rsa_private`] / [`Key::rsa_public`] |
//! | ECDSA | ES256 (P-256), ES384 (P-384), ES512 (P-521) | [`Key::ecdsa_private`] / [`Key::ecdsa_public`] |
//!
//! ## Claims Validation
//!
//! `exp` and `nbf` are enforced by default. Everything else is opt-in:
//!
//! ```ignore
//! ValidationConfig::default()
//!     .require_audience("my-api")              // `aud` must contain this value
//!     .require_issuer("https://auth.example.com")
//!     .max_age(3600)                           // enables `iat` checks
//!     .clock_skew(60)                          // at most 300 seconds
//! ```
//!
//! ## Features
//!
//! - **`async`** (default): `build_async`, `TokenBuilder::sign_async` and
//!   `TokenValidator::validate_async`, which run the cryptographic call on tokio's blocking pool
//!
//! ## Security
//!
//! ### Algorithm Confusion Prevention
//!
//! The expected algorithm is mandatory. A mismatch is `Error::AlgorithmMismatch` and is
//! reported before any signing primitive runs.
//!
//! ### "none" Algorithm Rejection
//!
//! `"none"` is not a supported tag; a token declaring it is malformed at parse time
//! per [RFC 8725](https://datatracker.ietf.org/doc/html/rfc8725).
//!
//! ### Timing Attack Protection
//!
//! HMAC signature verification uses constant-time comparison via the
//! [`constant_time_eq`](https://crates.io/crates/constant_time_eq) crate.
//!
//! ### Bounded Input
//!
//! Token length and decoded segment sizes are capped before JSON parsing.
//!
//! ## References
//!
//! - [RFC 7515](https://datatracker.ietf.org/doc/html/rfc7515): JSON Web Signature (JWS)
//! - [RFC 7518](https://datatracker.ietf.org/doc/html/rfc7518): JSON Web Algorithms (JWA)
//! - [RFC 7519](https://datatracker.ietf.org/doc/html/rfc7519): JSON Web Token (JWT)
//! - [RFC 8725](https://datatracker.ietf.org/doc/html/rfc8725): JWT Best Current Practices

// Core modules
pub mod error;
mod limits;
pub mod utils;

// Algorithm system
pub mod algorithm;
pub mod keys;

// Claims and wire format
pub mod claims;
pub mod codec;

// Token types
pub mod token;

// Builder and validator (main public API)
pub mod builder;
pub mod validator;

// ============================================================================
// PUBLIC API
// ============================================================================

// Main flow
pub use builder::{TokenBuilder, build};
#[cfg(feature = "async")]
pub use builder::build_async;
pub use token::{ParsedToken, Token};
pub use validator::{TokenValidator, parse, validate};

// Configuration types
pub use claims::{ClaimsBuilder, ValidationConfig};

// Supporting types
pub use algorithm::{Algorithm, SigningPrimitive, resolve};
pub use claims::Claims;
pub use error::{Error, Malformed, Result};
pub use keys::{EcdsaCurve, Key};
pub use token::TokenHeader;

// ============================================================================
// Internal types - Not part of public API
// ============================================================================
// - TrustedToken (algorithm pinned)
// - ValidatedToken (claims validated, signature pending)
// - size limits
// ============================================================================
