use crate::algorithm::Algorithm;
use crate::claims::Claims;
use crate::codec;
use crate::error::{Error, Malformed, Result};
use crate::limits::{
    MAX_DECODED_HEADER_SIZE, MAX_DECODED_PAYLOAD_SIZE, MAX_DECODED_SIGNATURE_SIZE,
    MAX_TOKEN_LENGTH,
};
use crate::token::{TokenHeader, TrustedToken};
use std::str::FromStr;

/// A JWT that is structurally valid but not yet trusted
///
/// This is the first stage in the token validation pipeline.
/// At this stage we have:
/// - Split the token into exactly three parts
/// - Decoded the header and checked `alg` against the supported set
/// - Decoded the payload and type-checked every registered claim
/// - Decoded the signature bytes
///
/// No signing primitive has been called. Nothing here should be trusted
/// until the token has gone through [`TokenValidator`](crate::TokenValidator).
///
/// Next step: TrustedToken (after the algorithm is pinned)
#[derive(Debug, Clone)]
pub struct ParsedToken {
    header: TokenHeader,
    claims: Claims,
    header_part: String,
    payload_part: String,
    signature_part: String,
    signature: Vec<u8>,
}

impl ParsedToken {
    /// Parse a JWT from a string
    ///
    /// # Arguments
    /// * `token` - The JWT string in format "header.payload.signature"
    ///
    /// # Example
    /// ```ignore
    /// let parsed = ParsedToken::from_string("eyJ...")?;
    /// println!("alg: {}", parsed.algorithm());
    /// ```
    pub fn from_string(token: &str) -> Result<Self> {
        if token.len() > MAX_TOKEN_LENGTH {
            return Err(Malformed::TooLarge {
                segment: "token",
                size: token.len(),
                max: MAX_TOKEN_LENGTH,
            }
            .into());
        }

        let parts: Vec<&str> = token.split('.').collect();
        let [header_part, payload_part, signature_part] = parts[..] else {
            return Err(Malformed::PartCount(parts.len()).into());
        };

        let header = TokenHeader::from_json(codec::decode_object(
            "header",
            header_part,
            MAX_DECODED_HEADER_SIZE,
        )?)?;

        let claims = Claims::from_json(codec::decode_object(
            "payload",
            payload_part,
            MAX_DECODED_PAYLOAD_SIZE,
        )?)?;

        let signature = codec::decode("signature", signature_part)?;
        if signature.len() > MAX_DECODED_SIGNATURE_SIZE {
            return Err(Malformed::TooLarge {
                segment: "signature",
                size: signature.len(),
                max: MAX_DECODED_SIGNATURE_SIZE,
            }
            .into());
        }

        Ok(Self {
            header,
            claims,
            header_part: header_part.to_string(),
            payload_part: payload_part.to_string(),
            signature_part: signature_part.to_string(),
            signature,
        })
    }

    /// Get the token header
    pub fn header(&self) -> &TokenHeader {
        &self.header
    }

    /// Get the algorithm declared by the header
    pub fn algorithm(&self) -> Algorithm {
        self.header.algorithm()
    }

    /// Get the claims (unverified!)
    pub fn claims(&self) -> &Claims {
        &self.claims
    }

    /// Get the signing input (header.payload)
    pub fn signing_input(&self) -> String {
        format!("{}.{}", self.header_part, self.payload_part)
    }

    /// Get the raw signature segment
    pub fn signature_part(&self) -> &str {
        &self.signature_part
    }

    /// Pin the algorithm and move to TrustedToken state
    ///
    /// The header's `alg` is attacker-controlled. It must equal the
    /// algorithm the caller expects, otherwise the token is rejected before
    /// any key is used.
    pub(crate) fn expect_algorithm(self, expected: Algorithm) -> Result<TrustedToken> {
        let found = self.algorithm();
        if found != expected {
            return Err(Error::AlgorithmMismatch {
                expected: expected.to_string(),
                found: found.to_string(),
            });
        }

        Ok(TrustedToken::new(self))
    }

    pub(crate) fn into_parts(self) -> (TokenHeader, Claims, [String; 3], Vec<u8>) {
        (
            self.header,
            self.claims,
            [self.header_part, self.payload_part, self.signature_part],
            self.signature,
        )
    }
}

impl FromStr for ParsedToken {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_string(s)
    }
}
