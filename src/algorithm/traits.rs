use super::{Algorithm, ecdsa, hmac, rsa};
use crate::error::Result;
use crate::keys::Key;

/// Sign/verify contract implemented by each algorithm family
///
/// Implementations hold no state beyond their fixed parameters, so a resolved
/// primitive may be shared freely across threads.
pub trait SigningPrimitive: Send + Sync {
    /// The algorithm this primitive implements
    fn algorithm(&self) -> Algorithm;

    /// Sign `data` and return the raw signature bytes
    ///
    /// # Errors
    /// Fails when the key is of the wrong type or cannot be loaded.
    fn sign(&self, key: &Key, data: &[u8]) -> Result<Vec<u8>>;

    /// Verify `signature` over `data`
    ///
    /// Returns `Ok(false)` for a signature that does not verify; key errors
    /// are reported as `Err`.
    fn verify(&self, key: &Key, signature: &[u8], data: &[u8]) -> Result<bool>;
}

/// Look up the signing primitive for an algorithm
///
/// Total over [`Algorithm`]: once a tag has been parsed there is no
/// unsupported case left to handle.
pub fn resolve(algorithm: Algorithm) -> &'static dyn SigningPrimitive {
    match algorithm {
        Algorithm::HS256 => &hmac::HS256,
        Algorithm::HS384 => &hmac::HS384,
        Algorithm::HS512 => &hmac::HS512,
        Algorithm::RS256 => &rsa::RS256,
        Algorithm::RS384 => &rsa::RS384,
        Algorithm::RS512 => &rsa::RS512,
        Algorithm::PS256 => &rsa::PS256,
        Algorithm::PS384 => &rsa::PS384,
        Algorithm::PS512 => &rsa::PS512,
        Algorithm::ES256 => &ecdsa::ES256,
        Algorithm::ES384 => &ecdsa::ES384,
        Algorithm::ES512 => &ecdsa::ES512,
    }
}
