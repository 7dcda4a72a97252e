/// Key types for JWT signing and verification
///
/// This module provides a type-safe abstraction over the key shapes the
/// algorithm families accept:
/// - Symmetric secrets (HMAC)
/// - RSA private keys for signing, RSA public keys for verification
/// - ECDSA private keys for signing, ECDSA public keys for verification
///
/// Keys are supplied by the caller on every call and never cached.
/// Secret material is wiped from memory when the key is dropped.
use crate::algorithm::{Algorithm, ecdsa};
use crate::error::{Error, Result};

use aws_lc_rs::signature::{EcdsaKeyPair, KeyPair, RsaKeyPair};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A key that can be used to sign or verify a token
#[derive(Clone)]
pub enum Key {
    /// Shared secret for HMAC algorithms
    Symmetric(SymmetricKey),

    /// RSA private key for RS*/PS* signing
    RsaPrivate(RsaPrivateKey),

    /// RSA public key for RS*/PS* verification
    RsaPublic(RsaPublicKey),

    /// ECDSA private key for ES* signing
    EcdsaPrivate(EcdsaPrivateKey),

    /// ECDSA public key for ES* verification
    EcdsaPublic(EcdsaPublicKey),
}

impl Key {
    /// Create a symmetric key from bytes
    pub fn symmetric(secret: impl Into<Vec<u8>>) -> Self {
        Key::Symmetric(SymmetricKey::new(secret.into()))
    }

    /// Create an RSA private key from PKCS#8 or PKCS#1 DER
    pub fn rsa_private(der: impl Into<Vec<u8>>) -> Self {
        Key::RsaPrivate(RsaPrivateKey { der: der.into() })
    }

    /// Create an RSA public key from PKCS#1 `RSAPublicKey` or SubjectPublicKeyInfo DER
    pub fn rsa_public(der: impl Into<Vec<u8>>) -> Self {
        Key::RsaPublic(RsaPublicKey { der: der.into() })
    }

    /// Create an ECDSA private key from PKCS#8 DER
    pub fn ecdsa_private(der: impl Into<Vec<u8>>, curve: EcdsaCurve) -> Self {
        Key::EcdsaPrivate(EcdsaPrivateKey {
            der: der.into(),
            curve,
        })
    }

    /// Create an ECDSA public key from SubjectPublicKeyInfo DER or an
    /// uncompressed SEC1 point
    pub fn ecdsa_public(bytes: impl Into<Vec<u8>>, curve: EcdsaCurve) -> Self {
        Key::EcdsaPublic(EcdsaPublicKey {
            bytes: bytes.into(),
            curve,
        })
    }

    /// Get key type name for error messages
    pub fn key_type(&self) -> &'static str {
        match self {
            Key::Symmetric(_) => "Symmetric",
            Key::RsaPrivate(_) => "RSA private",
            Key::RsaPublic(_) => "RSA public",
            Key::EcdsaPrivate(_) => "ECDSA private",
            Key::EcdsaPublic(_) => "ECDSA public",
        }
    }

    /// Derive the key that verifies signatures made with this key
    ///
    /// Symmetric and public keys are returned unchanged.
    ///
    /// # Errors
    /// Returns `InvalidKey` if a private key cannot be loaded.
    pub fn public_key(&self) -> Result<Key> {
        match self {
            Key::RsaPrivate(private) => {
                let key_pair = private.key_pair()?;
                Ok(Key::rsa_public(key_pair.public_key().as_ref()))
            }
            Key::EcdsaPrivate(private) => {
                let key_pair = private.key_pair()?;
                Ok(Key::ecdsa_public(
                    key_pair.public_key().as_ref(),
                    private.curve,
                ))
            }
            other => Ok(other.clone()),
        }
    }

    pub(crate) fn as_symmetric(&self, algorithm: Algorithm) -> Result<&SymmetricKey> {
        match self {
            Key::Symmetric(key) => Ok(key),
            _ => Err(self.mismatch(algorithm, "Symmetric")),
        }
    }

    pub(crate) fn as_rsa_private(&self, algorithm: Algorithm) -> Result<&RsaPrivateKey> {
        match self {
            Key::RsaPrivate(key) => Ok(key),
            _ => Err(self.mismatch(algorithm, "RSA private")),
        }
    }

    pub(crate) fn as_rsa_public(&self, algorithm: Algorithm) -> Result<&RsaPublicKey> {
        match self {
            Key::RsaPublic(key) => Ok(key),
            _ => Err(self.mismatch(algorithm, "RSA public")),
        }
    }

    pub(crate) fn as_ecdsa_private(&self, algorithm: Algorithm) -> Result<&EcdsaPrivateKey> {
        match self {
            Key::EcdsaPrivate(key) => Ok(key),
            _ => Err(self.mismatch(algorithm, "ECDSA private")),
        }
    }

    pub(crate) fn as_ecdsa_public(&self, algorithm: Algorithm) -> Result<&EcdsaPublicKey> {
        match self {
            Key::EcdsaPublic(key) => Ok(key),
            _ => Err(self.mismatch(algorithm, "ECDSA public")),
        }
    }

    fn mismatch(&self, algorithm: Algorithm, expected: &str) -> Error {
        Error::KeyTypeMismatch {
            algorithm: algorithm.to_string(),
            expected_key_type: expected.to_string(),
            actual_key_type: self.key_type().to_string(),
        }
    }
}

impl std::fmt::Debug for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Key::Symmetric(key) => f.debug_tuple("Symmetric").field(key).finish(),
            Key::RsaPrivate(key) => f.debug_tuple("RsaPrivate").field(key).finish(),
            Key::RsaPublic(key) => f.debug_tuple("RsaPublic").field(key).finish(),
            Key::EcdsaPrivate(key) => f.debug_tuple("EcdsaPrivate").field(key).finish(),
            Key::EcdsaPublic(key) => f.debug_tuple("EcdsaPublic").field(key).finish(),
        }
    }
}

/// Symmetric key for HMAC algorithms
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SymmetricKey {
    secret: Vec<u8>,
}

impl SymmetricKey {
    /// Create a new symmetric key
    pub fn new(secret: Vec<u8>) -> Self {
        Self { secret }
    }

    /// Get the secret bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.secret
    }
}

impl std::fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymmetricKey")
            .field("len", &self.secret.len())
            .finish_non_exhaustive()
    }
}

impl From<Vec<u8>> for SymmetricKey {
    fn from(secret: Vec<u8>) -> Self {
        Self::new(secret)
    }
}

impl From<&[u8]> for SymmetricKey {
    fn from(secret: &[u8]) -> Self {
        Self::new(secret.to_vec())
    }
}

impl From<&str> for SymmetricKey {
    fn from(secret: &str) -> Self {
        Self::new(secret.as_bytes().to_vec())
    }
}

/// RSA private key (PKCS#8 or PKCS#1 DER)
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct RsaPrivateKey {
    der: Vec<u8>,
}

impl RsaPrivateKey {
    pub(crate) fn key_pair(&self) -> Result<RsaKeyPair> {
        RsaKeyPair::from_pkcs8(&self.der)
            .or_else(|_| RsaKeyPair::from_der(&self.der))
            .map_err(|e| Error::InvalidKey(format!("RSA private key rejected: {e}")))
    }
}

impl std::fmt::Debug for RsaPrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RsaPrivateKey").finish_non_exhaustive()
    }
}

/// RSA public key (DER)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    der: Vec<u8>,
}

impl RsaPublicKey {
    /// Get the DER-encoded key bytes
    pub fn as_der(&self) -> &[u8] {
        &self.der
    }
}

/// ECDSA curve identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EcdsaCurve {
    /// P-256 (secp256r1) curve
    P256,
    /// P-384 (secp384r1) curve
    P384,
    /// P-521 (secp521r1) curve
    P521,
}

/// ECDSA private key (PKCS#8 DER)
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct EcdsaPrivateKey {
    der: Vec<u8>,
    #[zeroize(skip)]
    curve: EcdsaCurve,
}

impl EcdsaPrivateKey {
    /// Get the curve
    pub fn curve(&self) -> EcdsaCurve {
        self.curve
    }

    pub(crate) fn key_pair(&self) -> Result<EcdsaKeyPair> {
        EcdsaKeyPair::from_pkcs8(ecdsa::signing_algorithm(self.curve), &self.der)
            .map_err(|e| Error::InvalidKey(format!("ECDSA private key rejected: {e}")))
    }
}

impl std::fmt::Debug for EcdsaPrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EcdsaPrivateKey")
            .field("curve", &self.curve)
            .finish_non_exhaustive()
    }
}

/// ECDSA public key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EcdsaPublicKey {
    bytes: Vec<u8>,
    curve: EcdsaCurve,
}

impl EcdsaPublicKey {
    /// Get the encoded key bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Get the curve
    pub fn curve(&self) -> EcdsaCurve {
        self.curve
    }
}
