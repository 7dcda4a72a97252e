//! Token validation
//!
//! Validation runs the typestate pipeline in a fixed order and stops at the
//! first failure:
//!
//! 1. Parse: structure, `alg` in the supported set, claim types
//! 2. Algorithm check: header `alg` must equal the expected algorithm
//! 3. Claims: `exp`, `nbf`, then any configured `iat`/`aud`/`iss`/`sub` checks
//! 4. Signature: verified with the caller's key
//!
//! The key is only used in step 4, so a token declaring a different
//! algorithm never reaches a signing primitive.

use crate::algorithm::Algorithm;
use crate::claims::ValidationConfig;
use crate::error::Result;
use crate::keys::Key;
use crate::token::{ParsedToken, Token, ValidatedToken};

/// Validate `token` against an expected algorithm and key with the default
/// [`ValidationConfig`]
pub fn validate(expected: Algorithm, key: &Key, token: &str) -> Result<Token> {
    let validated = pre_verify(expected, &ValidationConfig::default(), token)?;
    verify(expected, validated, key)
}

/// Parse a token without verifying it
///
/// The result is structurally valid but must not be trusted.
pub fn parse(token: &str) -> Result<ParsedToken> {
    ParsedToken::from_string(token)
}

/// Reusable validator bound to one algorithm and key
///
/// # Example
///
/// ```ignore
/// use jwtforge::*;
///
/// let validator = TokenValidator::new(Algorithm::RS256, public_key)
///     .validation(
///         ValidationConfig::default()
///             .require_audience("my-api")
///             .clock_skew(30),
///     );
///
/// let token = validator.validate(token_str)?;
/// println!("Subject: {:?}", token.subject());
/// ```
#[derive(Debug, Clone)]
pub struct TokenValidator {
    expected: Algorithm,
    key: Key,
    config: ValidationConfig,
}

impl TokenValidator {
    /// Create a validator that accepts only `expected`, verified with `key`
    pub fn new(expected: Algorithm, key: Key) -> Self {
        Self {
            expected,
            key,
            config: ValidationConfig::default(),
        }
    }

    /// Configure claims validation
    pub fn validation(mut self, config: ValidationConfig) -> Self {
        self.config = config;
        self
    }

    /// The algorithm tokens must declare
    pub fn expected_algorithm(&self) -> Algorithm {
        self.expected
    }

    /// Run the validation pipeline
    ///
    /// # Errors
    ///
    /// Returns the first failure, in pipeline order:
    /// - `Error::Malformed` - the token could not be parsed
    /// - `Error::AlgorithmMismatch` - header `alg` is not the expected algorithm
    /// - `Error::Expired` / `Error::NotYetValid` - outside the validity window
    /// - `Error::IssuedInFuture`, `Error::TooOld`, `Error::AudienceMismatch`,
    ///   `Error::IssuerMismatch`, `Error::SubjectMismatch`, `Error::MissingClaim`
    ///   - a configured claim requirement failed
    /// - `Error::KeyTypeMismatch` / `Error::InvalidKey` - the key cannot verify this algorithm
    /// - `Error::InvalidSignature` - the signature does not verify
    pub fn validate(&self, token: &str) -> Result<Token> {
        let validated = pre_verify(self.expected, &self.config, token)?;
        verify(self.expected, validated, &self.key)
    }

    /// Run the validation pipeline with signature verification on tokio's
    /// blocking pool
    ///
    /// Parsing and claim checks run inline; only the cryptographic step is
    /// moved off the async worker.
    #[cfg(feature = "async")]
    pub async fn validate_async(&self, token: &str) -> Result<Token> {
        let validated = pre_verify(self.expected, &self.config, token)?;
        let expected = self.expected;
        let key = self.key.clone();

        tokio::task::spawn_blocking(move || verify(expected, validated, &key))
            .await
            .map_err(|e| crate::error::Error::Runtime(e.to_string()))?
    }
}

/// Steps 1-3: everything that does not touch the key
fn pre_verify(
    expected: Algorithm,
    config: &ValidationConfig,
    token: &str,
) -> Result<ValidatedToken> {
    let parsed = ParsedToken::from_string(token)
        .inspect_err(|e| tracing::debug!(expected = %expected, reason = %e, "token rejected"))?;

    let trusted = parsed.expect_algorithm(expected).inspect_err(|e| {
        tracing::debug!(expected = %expected, reason = %e, "token rejected");
    })?;

    let alg = trusted.algorithm();
    trusted.check_claims(config).inspect_err(|e| {
        tracing::debug!(alg = %alg, expected = %expected, reason = %e, "token rejected");
    })
}

/// Step 4
fn verify(expected: Algorithm, validated: ValidatedToken, key: &Key) -> Result<Token> {
    let alg = validated.algorithm();
    let token = validated.verify_signature(key).inspect_err(|e| {
        tracing::debug!(alg = %alg, expected = %expected, reason = %e, "token rejected");
    })?;

    tracing::trace!(alg = %alg, "token validated");
    Ok(token)
}
