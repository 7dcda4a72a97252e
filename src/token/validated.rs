use crate::algorithm::{Algorithm, resolve};
use crate::error::{Error, Result};
use crate::keys::Key;
use crate::token::{ParsedToken, Token};

/// A token whose algorithm is pinned and whose claims passed validation
///
/// This is the third stage in the token validation pipeline.
/// At this stage:
/// - The algorithm matches the caller's expectation
/// - `exp`/`nbf` and any configured claim requirements hold
///
/// Only the signature is left. This type is `Send + 'static`, so the final
/// step can run on a blocking worker.
///
/// Next step: Token (after signature verification)
pub(crate) struct ValidatedToken {
    parsed: ParsedToken,
}

impl ValidatedToken {
    pub(crate) fn new(parsed: ParsedToken) -> Self {
        Self { parsed }
    }

    pub(crate) fn algorithm(&self) -> Algorithm {
        self.parsed.algorithm()
    }

    /// Verify the signature and move to the final Token state
    ///
    /// The signing input is rebuilt from the two raw wire segments, never
    /// from re-serialized JSON.
    pub(crate) fn verify_signature(self, key: &Key) -> Result<Token> {
        let algorithm = self.algorithm();
        let signing_input = self.parsed.signing_input();
        let (header, claims, parts, signature) = self.parsed.into_parts();

        if !resolve(algorithm).verify(key, &signature, signing_input.as_bytes())? {
            return Err(Error::InvalidSignature);
        }

        Ok(Token::new(header, claims, parts))
    }
}
