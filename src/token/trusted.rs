use crate::algorithm::Algorithm;
use crate::claims::{ClaimsValidator, ValidationConfig};
use crate::error::Result;
use crate::token::{ParsedToken, ValidatedToken};

/// A parsed token whose `alg` matches the caller's expected algorithm
///
/// This is the second stage in the token validation pipeline.
/// At this stage:
/// - The token has been parsed
/// - The header algorithm equals the one the caller asked for
///
/// Next step: ValidatedToken (after the time window and claim checks)
pub(crate) struct TrustedToken {
    parsed: ParsedToken,
}

impl TrustedToken {
    pub(crate) fn new(parsed: ParsedToken) -> Self {
        Self { parsed }
    }

    pub(crate) fn algorithm(&self) -> Algorithm {
        self.parsed.algorithm()
    }

    /// Validate claims and move to ValidatedToken state
    ///
    /// Runs before signature verification, so an expired or not-yet-valid
    /// token is rejected without touching the key.
    pub(crate) fn check_claims(self, config: &ValidationConfig) -> Result<ValidatedToken> {
        ClaimsValidator::validate(self.parsed.claims(), config)?;
        Ok(ValidatedToken::new(self.parsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::utils::base64url;

    fn trusted(payload: &str) -> TrustedToken {
        let token_str = format!(
            "{}.{}.{}",
            base64url::encode(r#"{"alg":"HS384"}"#),
            base64url::encode(payload),
            base64url::encode("sig")
        );
        ParsedToken::from_string(&token_str)
            .unwrap()
            .expect_algorithm(Algorithm::HS384)
            .unwrap()
    }

    #[test]
    fn test_check_claims_passes() {
        let token = trusted(r#"{"exp":2000,"nbf":1000}"#);
        assert_eq!(token.algorithm(), Algorithm::HS384);

        let config = ValidationConfig::default().at(1500);
        assert!(token.check_claims(&config).is_ok());
    }

    #[test]
    fn test_check_claims_expired() {
        let config = ValidationConfig::default().at(2000);
        let result = trusted(r#"{"exp":2000}"#).check_claims(&config);
        assert!(matches!(result, Err(Error::Expired { .. })));
    }
}
