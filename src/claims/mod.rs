mod builder;
mod validator;

pub use builder::ClaimsBuilder;
pub use validator::{ClaimsValidator, ValidationConfig};

use crate::error::{Malformed, Result};
use serde_json::{Map, Value};

/// Registered claim names, in the order they are serialized
const REGISTERED: [&str; 7] = ["iss", "sub", "aud", "exp", "nbf", "iat", "jti"];

/// Payload claims as defined in RFC 7519 Section 4.1
///
/// The seven registered claims are held in typed fields. Every other claim
/// in the payload is an extension claim and is kept verbatim, in the order
/// it appeared, in [`Claims::extra`].
///
/// # Examples
///
/// ```ignore
/// use jwtforge::*;
///
/// let token = TokenValidator::new(Algorithm::HS256, Key::symmetric("secret"))
///     .validate(&token_string)?;
///
/// let claims = token.claims();
/// println!("Subject: {:?}", claims.subject);
/// println!("Audience: {:?}", claims.audience());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Claims {
    /// Issuer (iss) - identifies the principal that issued the JWT
    pub issuer: Option<String>,

    /// Subject (sub) - identifies the principal that is the subject of the JWT
    pub subject: Option<String>,

    /// Audience (aud) - identifies the recipients that the JWT is intended for
    ///
    /// A bare string on the wire is normalized to a single-element list.
    pub audience: Option<Vec<String>>,

    /// Expiration Time (exp) - seconds since Unix epoch
    pub expiration: Option<i64>,

    /// Not Before (nbf) - seconds since Unix epoch
    pub not_before: Option<i64>,

    /// Issued At (iat) - seconds since Unix epoch
    pub issued_at: Option<i64>,

    /// JWT ID (jti) - provides a unique identifier for the JWT
    pub jwt_id: Option<String>,

    /// Extension claims, preserved verbatim
    pub extra: Map<String, Value>,
}

impl Claims {
    /// Build typed claims from a decoded payload object
    ///
    /// Fails closed: a registered claim holding the wrong JSON type rejects
    /// the whole payload. `null` counts as a wrong type.
    pub fn from_json(object: Map<String, Value>) -> Result<Self> {
        let mut claims = Claims::default();

        for (name, value) in object {
            match name.as_str() {
                "iss" => claims.issuer = Some(string_claim("iss", value)?),
                "sub" => claims.subject = Some(string_claim("sub", value)?),
                "aud" => claims.audience = Some(audience_claim(value)?),
                "exp" => claims.expiration = Some(numeric_claim("exp", &value)?),
                "nbf" => claims.not_before = Some(numeric_claim("nbf", &value)?),
                "iat" => claims.issued_at = Some(numeric_claim("iat", &value)?),
                "jti" => claims.jwt_id = Some(string_claim("jti", value)?),
                _ => {
                    claims.extra.insert(name, value);
                }
            }
        }

        Ok(claims)
    }

    /// Serialize to a JSON object
    ///
    /// Registered claims come first in a fixed order (`iss`, `sub`, `aud`,
    /// `exp`, `nbf`, `iat`, `jti`), followed by extension claims in insertion
    /// order. A single audience is written as a bare string.
    pub fn to_json(&self) -> Map<String, Value> {
        let mut object = Map::new();

        if let Some(iss) = &self.issuer {
            object.insert("iss".into(), Value::String(iss.clone()));
        }
        if let Some(sub) = &self.subject {
            object.insert("sub".into(), Value::String(sub.clone()));
        }
        if let Some(aud) = &self.audience {
            let value = match aud.as_slice() {
                [single] => Value::String(single.clone()),
                many => Value::Array(many.iter().cloned().map(Value::String).collect()),
            };
            object.insert("aud".into(), value);
        }
        if let Some(exp) = self.expiration {
            object.insert("exp".into(), exp.into());
        }
        if let Some(nbf) = self.not_before {
            object.insert("nbf".into(), nbf.into());
        }
        if let Some(iat) = self.issued_at {
            object.insert("iat".into(), iat.into());
        }
        if let Some(jti) = &self.jwt_id {
            object.insert("jti".into(), Value::String(jti.clone()));
        }

        for (name, value) in &self.extra {
            if !is_registered(name) {
                object.insert(name.clone(), value.clone());
            }
        }

        object
    }

    /// Audience as a slice, empty when `aud` is absent
    pub fn audience(&self) -> &[String] {
        self.audience.as_deref().unwrap_or_default()
    }

    /// Check whether `aud` contains the given value
    pub fn has_audience(&self, audience: &str) -> bool {
        self.audience().iter().any(|aud| aud == audience)
    }

    /// Look up an extension claim
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }
}

/// True for the seven claim names RFC 7519 registers
pub fn is_registered(name: &str) -> bool {
    REGISTERED.contains(&name)
}

fn string_claim(claim: &'static str, value: Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s),
        _ => Err(Malformed::ClaimType {
            claim,
            expected: "a string",
        }
        .into()),
    }
}

fn audience_claim(value: Value) -> Result<Vec<String>> {
    let invalid = || Malformed::ClaimType {
        claim: "aud",
        expected: "a string or an array of strings",
    };

    match value {
        Value::String(s) => Ok(vec![s]),
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => Ok(s),
                _ => Err(invalid().into()),
            })
            .collect(),
        _ => Err(invalid().into()),
    }
}

/// NumericDate per RFC 7519 §2; fractional seconds are truncated
fn numeric_claim(claim: &'static str, value: &Value) -> Result<i64> {
    if let Some(n) = value.as_i64() {
        return Ok(n);
    }

    match value.as_f64() {
        Some(f) if f.is_finite() && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
            Ok(f.trunc() as i64)
        }
        Some(_) => Err(Malformed::ClaimType {
            claim,
            expected: "a NumericDate within the i64 range",
        }
        .into()),
        None => Err(Malformed::ClaimType {
            claim,
            expected: "a number",
        }
        .into()),
    }
}
