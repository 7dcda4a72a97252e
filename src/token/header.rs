use crate::algorithm::Algorithm;
use crate::error::{Malformed, Result};
use serde_json::{Map, Value};

/// JWT header (JOSE header)
///
/// `alg` is always one of the supported algorithms; `typ`, when present, is
/// exactly `"JWT"`. Any other header field is an extension field and is kept
/// in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenHeader {
    algorithm: Algorithm,
    token_type: Option<String>,
    extra: Map<String, Value>,
}

impl TokenHeader {
    /// Header for `algorithm` with `typ` set to `"JWT"`
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            token_type: Some("JWT".to_string()),
            extra: Map::new(),
        }
    }

    /// Reconstruct a header from a decoded JSON object
    ///
    /// # Errors
    /// `Malformed::MissingAlgorithm` when `alg` is absent or not a string,
    /// `Malformed::UnknownAlgorithm` for a tag outside the supported set
    /// (including `"none"`), and `Malformed::TokenType` when `typ` is present
    /// but not exactly `"JWT"`.
    pub fn from_json(object: Map<String, Value>) -> Result<Self> {
        let mut algorithm = None;
        let mut token_type = None;
        let mut extra = Map::new();

        for (name, value) in object {
            match name.as_str() {
                "alg" => {
                    let tag = value.as_str().ok_or(Malformed::MissingAlgorithm)?;
                    let parsed = tag
                        .parse::<Algorithm>()
                        .map_err(|_| Malformed::UnknownAlgorithm(tag.to_string()))?;
                    algorithm = Some(parsed);
                }
                "typ" => match value {
                    Value::String(typ) if typ == "JWT" => token_type = Some(typ),
                    other => return Err(Malformed::TokenType(other.to_string()).into()),
                },
                _ => {
                    extra.insert(name, value);
                }
            }
        }

        Ok(Self {
            algorithm: algorithm.ok_or(Malformed::MissingAlgorithm)?,
            token_type,
            extra,
        })
    }

    /// Serialize as `alg`, `typ`, then extension fields in insertion order
    pub fn to_json(&self) -> Map<String, Value> {
        let mut object = Map::new();
        object.insert("alg".into(), Value::String(self.algorithm.to_string()));
        if let Some(typ) = &self.token_type {
            object.insert("typ".into(), Value::String(typ.clone()));
        }
        for (name, value) in &self.extra {
            if name != "alg" && name != "typ" {
                object.insert(name.clone(), value.clone());
            }
        }
        object
    }

    /// Algorithm declared by the header
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Token type (`typ`), if present
    pub fn token_type(&self) -> Option<&str> {
        self.token_type.as_deref()
    }

    /// Key ID (`kid`), if present and a string
    pub fn key_id(&self) -> Option<&str> {
        self.extra.get("kid").and_then(Value::as_str)
    }

    /// Look up an extension field
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }

    /// Extension fields
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    /// Set an extension field
    ///
    /// `alg` and `typ` are owned by the header and cannot be overridden here;
    /// such entries are dropped on serialization.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.extra.insert(name.into(), value.into());
    }
}
