use crate::algorithm::{Algorithm, Family, HashFunction, SigningPrimitive};
use crate::error::{Error, Result};
use crate::keys::Key;

use aws_lc_rs::rand::SystemRandom;
use aws_lc_rs::signature::{self, RsaEncoding, UnparsedPublicKey, VerificationAlgorithm};

/// RSA signing primitive, PKCS#1 v1.5 or PSS padding
pub struct Rsa {
    algorithm: Algorithm,
}

/// RS256 algorithm (RSASSA-PKCS1-v1_5 with SHA-256)
pub static RS256: Rsa = Rsa {
    algorithm: Algorithm::RS256,
};

/// RS384 algorithm (RSASSA-PKCS1-v1_5 with SHA-384)
pub static RS384: Rsa = Rsa {
    algorithm: Algorithm::RS384,
};

/// RS512 algorithm (RSASSA-PKCS1-v1_5 with SHA-512)
pub static RS512: Rsa = Rsa {
    algorithm: Algorithm::RS512,
};

/// PS256 algorithm (RSASSA-PSS with SHA-256)
pub static PS256: Rsa = Rsa {
    algorithm: Algorithm::PS256,
};

/// PS384 algorithm (RSASSA-PSS with SHA-384)
pub static PS384: Rsa = Rsa {
    algorithm: Algorithm::PS384,
};

/// PS512 algorithm (RSASSA-PSS with SHA-512)
pub static PS512: Rsa = Rsa {
    algorithm: Algorithm::PS512,
};

impl Rsa {
    fn padding(&self) -> &'static dyn RsaEncoding {
        let pss = self.algorithm.family() == Family::RsaPss;
        match (pss, self.algorithm.hash()) {
            (false, HashFunction::Sha256) => &signature::RSA_PKCS1_SHA256,
            (false, HashFunction::Sha384) => &signature::RSA_PKCS1_SHA384,
            (false, HashFunction::Sha512) => &signature::RSA_PKCS1_SHA512,
            (true, HashFunction::Sha256) => &signature::RSA_PSS_SHA256,
            (true, HashFunction::Sha384) => &signature::RSA_PSS_SHA384,
            (true, HashFunction::Sha512) => &signature::RSA_PSS_SHA512,
        }
    }

    fn verification_algorithm(&self) -> &'static dyn VerificationAlgorithm {
        let pss = self.algorithm.family() == Family::RsaPss;
        match (pss, self.algorithm.hash()) {
            (false, HashFunction::Sha256) => &signature::RSA_PKCS1_2048_8192_SHA256,
            (false, HashFunction::Sha384) => &signature::RSA_PKCS1_2048_8192_SHA384,
            (false, HashFunction::Sha512) => &signature::RSA_PKCS1_2048_8192_SHA512,
            (true, HashFunction::Sha256) => &signature::RSA_PSS_2048_8192_SHA256,
            (true, HashFunction::Sha384) => &signature::RSA_PSS_2048_8192_SHA384,
            (true, HashFunction::Sha512) => &signature::RSA_PSS_2048_8192_SHA512,
        }
    }
}

impl SigningPrimitive for Rsa {
    fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    fn sign(&self, key: &Key, data: &[u8]) -> Result<Vec<u8>> {
        let key_pair = key.as_rsa_private(self.algorithm)?.key_pair()?;

        let rng = SystemRandom::new();
        let mut signature = vec![0u8; key_pair.public_modulus_len()];
        key_pair
            .sign(self.padding(), &rng, data, &mut signature)
            .map_err(|_| Error::SigningFailed(format!("{} signing failed", self.algorithm)))?;

        Ok(signature)
    }

    fn verify(&self, key: &Key, signature: &[u8], data: &[u8]) -> Result<bool> {
        let public_key = key.as_rsa_public(self.algorithm)?;
        let public_key = UnparsedPublicKey::new(self.verification_algorithm(), public_key.as_der());

        Ok(public_key.verify(data, signature).is_ok())
    }
}
