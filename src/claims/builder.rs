use crate::claims::Claims;
use crate::error::Result;
use crate::utils::time::current_timestamp;

use serde_json::{Map, Value};
use std::time::Duration;

/// Builder for a payload claim set
///
/// Typed setters always win over a raw [`claim`](Self::claim) of the same
/// name. Expiry is relative: `expires_in` is added to the current time when
/// [`build`](Self::build) runs, so pin the clock with [`at`](Self::at) for
/// deterministic output.
#[derive(Debug, Clone, Default)]
pub struct ClaimsBuilder {
    now: Option<i64>,
    expires_in: Option<Duration>,
    issuer: Option<String>,
    subject: Option<String>,
    audience: Option<Vec<String>>,
    not_before: Option<i64>,
    issued_at: bool,
    jwt_id: Option<String>,
    extra: Map<String, Value>,
}

impl ClaimsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `now` instead of the system clock
    pub fn at(mut self, now: i64) -> Self {
        self.now = Some(now);
        self
    }

    /// Set `exp` to the current time plus `duration`
    pub fn expires_in(mut self, duration: Duration) -> Self {
        self.expires_in = Some(duration);
        self
    }

    pub fn issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Add one audience; repeated calls accumulate
    pub fn audience(mut self, audience: impl Into<String>) -> Self {
        self.audience
            .get_or_insert_with(Vec::new)
            .push(audience.into());
        self
    }

    /// Replace the audience list
    pub fn audiences<I, S>(mut self, audiences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.audience = Some(audiences.into_iter().map(Into::into).collect());
        self
    }

    /// Set `nbf` to an absolute instant (seconds since epoch)
    pub fn not_before(mut self, timestamp: i64) -> Self {
        self.not_before = Some(timestamp);
        self
    }

    /// Stamp `iat` with the current time
    pub fn issued_now(mut self) -> Self {
        self.issued_at = true;
        self
    }

    pub fn jwt_id(mut self, jti: impl Into<String>) -> Self {
        self.jwt_id = Some(jti.into());
        self
    }

    /// Add an arbitrary claim
    pub fn claim(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(name.into(), value.into());
        self
    }

    /// Assemble the claim set
    ///
    /// # Errors
    /// Returns `Malformed::ClaimType` when a raw claim uses a registered name
    /// with the wrong JSON type, e.g. `claim("exp", "soon")`, and
    /// `Error::Runtime` when no time was injected and the system clock reads
    /// before the Unix epoch.
    pub fn build(self) -> Result<Claims> {
        let mut claims = Claims::from_json(self.extra)?;
        let now = match self.now {
            Some(now) => now,
            None => current_timestamp()?,
        };

        if let Some(duration) = self.expires_in {
            let seconds = i64::try_from(duration.as_secs()).unwrap_or(i64::MAX);
            claims.expiration = Some(now.saturating_add(seconds));
        }
        if self.issuer.is_some() {
            claims.issuer = self.issuer;
        }
        if self.subject.is_some() {
            claims.subject = self.subject;
        }
        if self.audience.is_some() {
            claims.audience = self.audience;
        }
        if self.not_before.is_some() {
            claims.not_before = self.not_before;
        }
        if self.issued_at {
            claims.issued_at = Some(now);
        }
        if self.jwt_id.is_some() {
            claims.jwt_id = self.jwt_id;
        }

        Ok(claims)
    }
}
