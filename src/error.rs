//! Error types for building, parsing and validating tokens
//!
//! Every failure is returned as a distinct variant so callers can tell a
//! malformed token apart from a well-formed but forged one, and both apart
//! from a token that is simply outside its validity window.

use thiserror::Error;

/// jwtforge errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // ============================================================================
    // Format Errors
    // ============================================================================
    #[error("Malformed JWT: {0}")]
    Malformed(Malformed),

    // ============================================================================
    // Algorithm Errors
    // ============================================================================
    #[error("Algorithm '{0}' is not supported")]
    UnsupportedAlgorithm(String),

    #[error("Algorithm mismatch: expected '{expected}', token declares '{found}'")]
    AlgorithmMismatch { expected: String, found: String },

    // ============================================================================
    // Key Errors
    // ============================================================================
    #[error(
        "Key type mismatch for algorithm '{algorithm}': expected {expected_key_type}, got {actual_key_type}"
    )]
    KeyTypeMismatch {
        algorithm: String,
        expected_key_type: String,
        actual_key_type: String,
    },

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    // ============================================================================
    // Signature Errors
    // ============================================================================
    #[error("Signature verification failed")]
    InvalidSignature,

    #[error("Signing failed: {0}")]
    SigningFailed(String),

    // ============================================================================
    // Time Window Errors
    // ============================================================================
    #[error("Token expired at {expired_at} (now: {now}, skew: {skew}s)")]
    Expired {
        expired_at: i64,
        now: i64,
        skew: u64,
    },

    #[error("Token not valid until {not_before} (now: {now}, skew: {skew}s)")]
    NotYetValid {
        not_before: i64,
        now: i64,
        skew: u64,
    },

    #[error("Token issued in future at {issued_at} (now: {now}, skew: {skew}s)")]
    IssuedInFuture { issued_at: i64, now: i64, skew: u64 },

    #[error("Token too old: issued at {issued_at}, max age {max_age}s (now: {now})")]
    TooOld {
        issued_at: i64,
        now: i64,
        max_age: u64,
    },

    // ============================================================================
    // Claim Requirement Errors
    // ============================================================================
    #[error("Audience mismatch: expected '{expected}', found {found:?}")]
    AudienceMismatch {
        expected: String,
        found: Vec<String>,
    },

    #[error("Issuer mismatch: expected '{expected}', found '{found}'")]
    IssuerMismatch { expected: String, found: String },

    #[error("Subject mismatch: expected '{expected}', found '{found}'")]
    SubjectMismatch { expected: String, found: String },

    #[error("Required claim '{0}' is missing")]
    MissingClaim(String),

    #[error("Clock skew too large: {value} seconds (maximum: {max} seconds)")]
    ClockSkewTooLarge { value: u64, max: u64 },

    // ============================================================================
    // Runtime Errors
    // ============================================================================
    #[error("Runtime failure: {0}")]
    Runtime(String),
}

/// Structural reasons a token string could not be parsed
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Malformed {
    #[error("expected three parts separated by '.', found {0}")]
    PartCount(usize),

    #[error("invalid base64url in {segment}: {reason}")]
    Segment {
        segment: &'static str,
        reason: String,
    },

    #[error("invalid JSON in {segment}: {reason}")]
    Json {
        segment: &'static str,
        reason: String,
    },

    #[error("{0} is not a JSON object")]
    NotAnObject(&'static str),

    #[error("header has no string 'alg' field")]
    MissingAlgorithm,

    #[error("header declares unknown algorithm '{0}'")]
    UnknownAlgorithm(String),

    #[error("header 'typ' must be \"JWT\", found {0}")]
    TokenType(String),

    #[error("claim '{claim}' must be {expected}")]
    ClaimType {
        claim: &'static str,
        expected: &'static str,
    },

    #[error("{segment} too large: {size} bytes (maximum: {max} bytes)")]
    TooLarge {
        segment: &'static str,
        size: usize,
        max: usize,
    },
}

impl From<Malformed> for Error {
    fn from(reason: Malformed) -> Self {
        Error::Malformed(reason)
    }
}

impl Error {
    /// True for structural failures (`MalformedJWT`)
    pub fn is_malformed(&self) -> bool {
        matches!(self, Error::Malformed(_))
    }

    /// True when the token is outside its `exp`/`nbf`/`iat` window
    pub fn is_time_window(&self) -> bool {
        matches!(
            self,
            Error::Expired { .. }
                | Error::NotYetValid { .. }
                | Error::IssuedInFuture { .. }
                | Error::TooOld { .. }
        )
    }
}

/// Result type alias for jwtforge operations
pub type Result<T> = std::result::Result<T, Error>;
