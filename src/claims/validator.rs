use crate::claims::Claims;
use crate::error::{Error, Result};
use crate::limits::MAX_CLOCK_SKEW_SECONDS;
use crate::utils::time::current_timestamp;

/// Configuration for claims validation
///
/// Only `exp` and `nbf` are enforced by default. The `iat`, audience,
/// issuer and subject checks are opt-in because their expected values are
/// application-specific.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Validate expiration time (exp claim)
    pub validate_exp: bool,

    /// Validate not-before time (nbf claim)
    pub validate_nbf: bool,

    /// Validate issued-at time (iat claim)
    pub validate_iat: bool,

    /// Clock skew tolerance in seconds (default: 0, maximum: 300)
    pub clock_skew_seconds: u64,

    /// Maximum age of token in seconds
    /// Only applies if validate_iat is true
    pub max_age_seconds: Option<u64>,

    /// Audience that must appear in `aud`
    pub required_audience: Option<String>,

    /// Required `iss` value
    pub required_issuer: Option<String>,

    /// Required `sub` value
    pub required_subject: Option<String>,

    /// Fixed current time; the system clock is read when unset
    pub now: Option<i64>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            validate_exp: true,
            validate_nbf: true,
            validate_iat: false,
            clock_skew_seconds: 0,
            max_age_seconds: None,
            required_audience: None,
            required_issuer: None,
            required_subject: None,
            now: None,
        }
    }
}

impl ValidationConfig {
    /// Create a new validation config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set clock skew tolerance
    pub fn clock_skew(mut self, seconds: u64) -> Self {
        self.clock_skew_seconds = seconds;
        self
    }

    /// Set maximum token age and enable `iat` validation
    pub fn max_age(mut self, seconds: u64) -> Self {
        self.max_age_seconds = Some(seconds);
        self.validate_iat = true;
        self
    }

    /// Require a specific audience
    pub fn require_audience(mut self, audience: impl Into<String>) -> Self {
        self.required_audience = Some(audience.into());
        self
    }

    /// Require a specific issuer
    pub fn require_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.required_issuer = Some(issuer.into());
        self
    }

    /// Require a specific subject
    pub fn require_subject(mut self, subject: impl Into<String>) -> Self {
        self.required_subject = Some(subject.into());
        self
    }

    /// Evaluate time claims against `now` (seconds since epoch)
    pub fn at(mut self, now: i64) -> Self {
        self.now = Some(now);
        self
    }

    /// Disable expiration validation
    pub fn no_exp_validation(mut self) -> Self {
        self.validate_exp = false;
        self
    }

    /// Disable not-before validation
    pub fn no_nbf_validation(mut self) -> Self {
        self.validate_nbf = false;
        self
    }

    /// Enable issued-at validation
    pub fn validate_iat(mut self) -> Self {
        self.validate_iat = true;
        self
    }
}

/// Claims validator
pub struct ClaimsValidator;

impl ClaimsValidator {
    /// Validate claims according to configuration
    ///
    /// Checks run in a fixed order and stop at the first failure:
    /// exp, nbf, iat, audience, issuer, subject.
    pub fn validate(claims: &Claims, config: &ValidationConfig) -> Result<()> {
        if config.clock_skew_seconds > MAX_CLOCK_SKEW_SECONDS {
            return Err(Error::ClockSkewTooLarge {
                value: config.clock_skew_seconds,
                max: MAX_CLOCK_SKEW_SECONDS,
            });
        }

        let now = match config.now {
            Some(now) => now,
            None => current_timestamp()?,
        };
        let skew = config.clock_skew_seconds as i64;

        // A token is expired from the exp instant onwards
        if config.validate_exp {
            if let Some(exp) = claims.expiration {
                if now >= exp.saturating_add(skew) {
                    return Err(Error::Expired {
                        expired_at: exp,
                        now,
                        skew: config.clock_skew_seconds,
                    });
                }
            }
        }

        if config.validate_nbf {
            if let Some(nbf) = claims.not_before {
                if now < nbf.saturating_sub(skew) {
                    return Err(Error::NotYetValid {
                        not_before: nbf,
                        now,
                        skew: config.clock_skew_seconds,
                    });
                }
            }
        }

        if config.validate_iat {
            if let Some(iat) = claims.issued_at {
                if iat > now.saturating_add(skew) {
                    return Err(Error::IssuedInFuture {
                        issued_at: iat,
                        now,
                        skew: config.clock_skew_seconds,
                    });
                }

                if let Some(max_age) = config.max_age_seconds {
                    let max_age_i64 = i64::try_from(max_age).unwrap_or(i64::MAX);
                    if now > iat.saturating_add(max_age_i64) {
                        return Err(Error::TooOld {
                            issued_at: iat,
                            now,
                            max_age,
                        });
                    }
                }
            }
        }

        if let Some(required_aud) = &config.required_audience {
            match &claims.audience {
                Some(aud) if aud.iter().any(|a| a == required_aud) => {}
                Some(aud) => {
                    return Err(Error::AudienceMismatch {
                        expected: required_aud.clone(),
                        found: aud.clone(),
                    });
                }
                None => return Err(Error::MissingClaim("aud".to_string())),
            }
        }

        Self::require_exact("iss", claims.issuer.as_deref(), &config.required_issuer)?;
        Self::require_exact("sub", claims.subject.as_deref(), &config.required_subject)?;

        Ok(())
    }

    fn require_exact(claim: &str, found: Option<&str>, expected: &Option<String>) -> Result<()> {
        let Some(expected) = expected else {
            return Ok(());
        };

        match found {
            Some(found) if found == expected => Ok(()),
            Some(found) => {
                let (expected, found) = (expected.clone(), found.to_string());
                Err(match claim {
                    "iss" => Error::IssuerMismatch { expected, found },
                    _ => Error::SubjectMismatch { expected, found },
                })
            }
            None => Err(Error::MissingClaim(claim.to_string())),
        }
    }
}
