//! The closed set of signing algorithms and the registry that maps each
//! algorithm to its signing primitive.

mod traits;

pub mod ecdsa;
pub mod hmac;
pub mod rsa;

pub use traits::{SigningPrimitive, resolve};

use crate::error::{Error, Result};
use crate::keys::EcdsaCurve;
use std::str::FromStr;

/// Algorithm identifier from the JWT header
///
/// Exactly the twelve tags listed in RFC 7518 §3.1 for HMAC, RSASSA-PKCS1-v1_5,
/// ECDSA and RSASSA-PSS. Matching is case-sensitive, and `"none"` is never accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// HMAC with SHA-256
    HS256,
    /// HMAC with SHA-384
    HS384,
    /// HMAC with SHA-512
    HS512,
    /// RSASSA-PKCS1-v1_5 with SHA-256
    RS256,
    /// RSASSA-PKCS1-v1_5 with SHA-384
    RS384,
    /// RSASSA-PKCS1-v1_5 with SHA-512
    RS512,
    /// ECDSA with P-256 and SHA-256
    ES256,
    /// ECDSA with P-384 and SHA-384
    ES384,
    /// ECDSA with P-521 and SHA-512
    ES512,
    /// RSASSA-PSS with SHA-256 and MGF1 with SHA-256
    PS256,
    /// RSASSA-PSS with SHA-384 and MGF1 with SHA-384
    PS384,
    /// RSASSA-PSS with SHA-512 and MGF1 with SHA-512
    PS512,
}

/// Signature scheme family an algorithm belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Hmac,
    RsaPkcs1,
    Ecdsa,
    RsaPss,
}

/// Hash function paired with an algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashFunction {
    Sha256,
    Sha384,
    Sha512,
}

impl Algorithm {
    /// Every supported algorithm, in registry order
    pub const ALL: [Algorithm; 12] = [
        Algorithm::HS256,
        Algorithm::HS384,
        Algorithm::HS512,
        Algorithm::RS256,
        Algorithm::RS384,
        Algorithm::RS512,
        Algorithm::ES256,
        Algorithm::ES384,
        Algorithm::ES512,
        Algorithm::PS256,
        Algorithm::PS384,
        Algorithm::PS512,
    ];

    /// Convert to string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Algorithm::HS256 => "HS256",
            Algorithm::HS384 => "HS384",
            Algorithm::HS512 => "HS512",
            Algorithm::RS256 => "RS256",
            Algorithm::RS384 => "RS384",
            Algorithm::RS512 => "RS512",
            Algorithm::ES256 => "ES256",
            Algorithm::ES384 => "ES384",
            Algorithm::ES512 => "ES512",
            Algorithm::PS256 => "PS256",
            Algorithm::PS384 => "PS384",
            Algorithm::PS512 => "PS512",
        }
    }

    pub const fn family(&self) -> Family {
        match self {
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => Family::Hmac,
            Algorithm::RS256 | Algorithm::RS384 | Algorithm::RS512 => Family::RsaPkcs1,
            Algorithm::ES256 | Algorithm::ES384 | Algorithm::ES512 => Family::Ecdsa,
            Algorithm::PS256 | Algorithm::PS384 | Algorithm::PS512 => Family::RsaPss,
        }
    }

    pub const fn hash(&self) -> HashFunction {
        match self {
            Algorithm::HS256 | Algorithm::RS256 | Algorithm::ES256 | Algorithm::PS256 => {
                HashFunction::Sha256
            }
            Algorithm::HS384 | Algorithm::RS384 | Algorithm::ES384 | Algorithm::PS384 => {
                HashFunction::Sha384
            }
            Algorithm::HS512 | Algorithm::RS512 | Algorithm::ES512 | Algorithm::PS512 => {
                HashFunction::Sha512
            }
        }
    }

    /// Curve required by ECDSA algorithms, `None` for the other families
    pub const fn curve(&self) -> Option<EcdsaCurve> {
        match self {
            Algorithm::ES256 => Some(EcdsaCurve::P256),
            Algorithm::ES384 => Some(EcdsaCurve::P384),
            Algorithm::ES512 => Some(EcdsaCurve::P521),
            _ => None,
        }
    }

    /// Check if algorithm is HMAC-based (symmetric)
    pub const fn is_symmetric(&self) -> bool {
        matches!(self.family(), Family::Hmac)
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Algorithm::ALL
            .into_iter()
            .find(|alg| alg.as_str() == s)
            .ok_or_else(|| Error::UnsupportedAlgorithm(s.to_string()))
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Algorithm {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
