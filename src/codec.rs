//! Conversion between header/payload objects and wire segments
//!
//! A token on the wire is `base64url(header) "." base64url(payload) "."
//! base64url(signature)`. Segments are written unpadded and read with
//! padding optional.

use crate::claims::Claims;
use crate::error::{Malformed, Result};
use crate::token::TokenHeader;
use crate::utils::base64url;
use serde_json::{Map, Value};

/// Encoded header and payload segments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    pub header_part: String,
    pub payload_part: String,
    /// `header_part + "." + payload_part`, the exact bytes that get signed
    pub signing_input: String,
}

/// Serialize and encode a header and claim set
///
/// See [`TokenHeader::to_json`] and [`Claims::to_json`] for field order.
pub fn encode(header: &TokenHeader, claims: &Claims) -> Encoded {
    let header_part = base64url::encode(&Value::Object(header.to_json()).to_string());
    let payload_part = base64url::encode(&Value::Object(claims.to_json()).to_string());
    let signing_input = format!("{header_part}.{payload_part}");

    Encoded {
        header_part,
        payload_part,
        signing_input,
    }
}

/// Base64url-decode one wire segment
///
/// # Errors
/// `Malformed::Segment` for characters outside the URL-safe alphabet or an
/// impossible length.
pub fn decode(segment: &'static str, part: &str) -> Result<Vec<u8>> {
    base64url::decode_bytes(part).map_err(|reason| Malformed::Segment { segment, reason }.into())
}

/// Decode a segment that must hold a JSON object of at most `max` bytes
pub(crate) fn decode_object(
    segment: &'static str,
    part: &str,
    max: usize,
) -> Result<Map<String, Value>> {
    let bytes = decode(segment, part)?;
    if bytes.len() > max {
        return Err(Malformed::TooLarge {
            segment,
            size: bytes.len(),
            max,
        }
        .into());
    }

    let value: Value = serde_json::from_slice(&bytes).map_err(|e| Malformed::Json {
        segment,
        reason: e.to_string(),
    })?;

    match value {
        Value::Object(object) => Ok(object),
        _ => Err(Malformed::NotAnObject(segment).into()),
    }
}
