use crate::algorithm::{Algorithm, SigningPrimitive};
use crate::error::{Error, Result};
use crate::keys::{EcdsaCurve, Key};

use aws_lc_rs::rand::SystemRandom;
use aws_lc_rs::signature::{self, EcdsaSigningAlgorithm, UnparsedPublicKey, VerificationAlgorithm};

/// ECDSA signing primitive for one curve/hash pairing
///
/// JWT ECDSA signatures use the fixed-length R||S form (RFC 7518 §3.4),
/// not ASN.1 DER.
pub struct Ecdsa {
    algorithm: Algorithm,
    curve: EcdsaCurve,
}

/// ES256 algorithm (ECDSA with P-256 and SHA-256)
pub static ES256: Ecdsa = Ecdsa {
    algorithm: Algorithm::ES256,
    curve: EcdsaCurve::P256,
};

/// ES384 algorithm (ECDSA with P-384 and SHA-384)
pub static ES384: Ecdsa = Ecdsa {
    algorithm: Algorithm::ES384,
    curve: EcdsaCurve::P384,
};

/// ES512 algorithm (ECDSA with P-521 and SHA-512)
pub static ES512: Ecdsa = Ecdsa {
    algorithm: Algorithm::ES512,
    curve: EcdsaCurve::P521,
};

pub(crate) fn signing_algorithm(curve: EcdsaCurve) -> &'static EcdsaSigningAlgorithm {
    match curve {
        EcdsaCurve::P256 => &signature::ECDSA_P256_SHA256_FIXED_SIGNING,
        EcdsaCurve::P384 => &signature::ECDSA_P384_SHA384_FIXED_SIGNING,
        EcdsaCurve::P521 => &signature::ECDSA_P521_SHA512_FIXED_SIGNING,
    }
}

fn verification_algorithm(curve: EcdsaCurve) -> &'static dyn VerificationAlgorithm {
    match curve {
        EcdsaCurve::P256 => &signature::ECDSA_P256_SHA256_FIXED,
        EcdsaCurve::P384 => &signature::ECDSA_P384_SHA384_FIXED,
        EcdsaCurve::P521 => &signature::ECDSA_P521_SHA512_FIXED,
    }
}

impl Ecdsa {
    fn check_curve(&self, curve: EcdsaCurve) -> Result<()> {
        if curve != self.curve {
            return Err(Error::KeyTypeMismatch {
                algorithm: self.algorithm.to_string(),
                expected_key_type: format!("ECDSA {:?}", self.curve),
                actual_key_type: format!("ECDSA {curve:?}"),
            });
        }
        Ok(())
    }
}

impl SigningPrimitive for Ecdsa {
    fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    fn sign(&self, key: &Key, data: &[u8]) -> Result<Vec<u8>> {
        let private_key = key.as_ecdsa_private(self.algorithm)?;
        self.check_curve(private_key.curve())?;

        let rng = SystemRandom::new();
        let signature = private_key
            .key_pair()?
            .sign(&rng, data)
            .map_err(|_| Error::SigningFailed(format!("{} signing failed", self.algorithm)))?;

        Ok(signature.as_ref().to_vec())
    }

    fn verify(&self, key: &Key, signature: &[u8], data: &[u8]) -> Result<bool> {
        let public_key = key.as_ecdsa_public(self.algorithm)?;
        self.check_curve(public_key.curve())?;

        let public_key =
            UnparsedPublicKey::new(verification_algorithm(self.curve), public_key.as_bytes());
        Ok(public_key.verify(data, signature).is_ok())
    }
}
