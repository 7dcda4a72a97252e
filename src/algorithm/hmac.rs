use crate::algorithm::{Algorithm, HashFunction, SigningPrimitive};
use crate::error::{Error, Result};
use crate::keys::Key;

use constant_time_eq::constant_time_eq;
use hmac::{Hmac as HmacImpl, Mac};
use sha2::{Sha256, Sha384, Sha512};

/// HMAC signing primitive for one SHA-2 variant
pub struct Hmac {
    algorithm: Algorithm,
}

/// HS256 algorithm (HMAC with SHA-256)
pub static HS256: Hmac = Hmac {
    algorithm: Algorithm::HS256,
};

/// HS384 algorithm (HMAC with SHA-384)
pub static HS384: Hmac = Hmac {
    algorithm: Algorithm::HS384,
};

/// HS512 algorithm (HMAC with SHA-512)
pub static HS512: Hmac = Hmac {
    algorithm: Algorithm::HS512,
};

impl SigningPrimitive for Hmac {
    fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    fn sign(&self, key: &Key, data: &[u8]) -> Result<Vec<u8>> {
        let secret = key.as_symmetric(self.algorithm)?;
        compute_mac(self.algorithm.hash(), secret.as_bytes(), data)
    }

    fn verify(&self, key: &Key, signature: &[u8], data: &[u8]) -> Result<bool> {
        let secret = key.as_symmetric(self.algorithm)?;
        let expected = compute_mac(self.algorithm.hash(), secret.as_bytes(), data)?;

        if signature.len() != expected.len() {
            return Ok(false);
        }

        Ok(constant_time_eq(signature, &expected))
    }
}

fn compute_mac(hash: HashFunction, secret: &[u8], data: &[u8]) -> Result<Vec<u8>> {
    if secret.is_empty() {
        return Err(Error::InvalidKey("HMAC secret must not be empty".to_string()));
    }

    let tag = match hash {
        HashFunction::Sha256 => {
            let mut mac = HmacImpl::<Sha256>::new_from_slice(secret)
                .map_err(|e| Error::InvalidKey(e.to_string()))?;
            mac.update(data);
            mac.finalize().into_bytes().to_vec()
        }
        HashFunction::Sha384 => {
            let mut mac = HmacImpl::<Sha384>::new_from_slice(secret)
                .map_err(|e| Error::InvalidKey(e.to_string()))?;
            mac.update(data);
            mac.finalize().into_bytes().to_vec()
        }
        HashFunction::Sha512 => {
            let mut mac = HmacImpl::<Sha512>::new_from_slice(secret)
                .map_err(|e| Error::InvalidKey(e.to_string()))?;
            mac.update(data);
            mac.finalize().into_bytes().to_vec()
        }
    };

    Ok(tag)
}
