//! Request handling and extraction.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) when the client sent none
//! - Extract the repository identifier from the path
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - Identifier parsing is lenient: the longest integer prefix wins,
//!   and anything without digits becomes "no id" rather than a rejection

use axum::{
    extract::{FromRequestParts, Path},
    http::{request::Parts, HeaderMap, HeaderName, HeaderValue, Request},
};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

use crate::http::response::ApiError;

/// Header carrying the request correlation ID.
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Generates UUID v4 request IDs for `SetRequestIdLayer`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidRequestId;

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Read the request ID from headers, for log correlation.
pub trait RequestIdExt {
    fn request_id(&self) -> &str;
}

impl RequestIdExt for HeaderMap {
    fn request_id(&self) -> &str {
        self.get(&X_REQUEST_ID)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("unknown")
    }
}

/// Repository identifier taken from the `{id}` path segment.
///
/// Holds `None` when the segment carries no parsable integer; handlers
/// treat that exactly like an unknown id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepositoryId(pub Option<i64>);

impl<S> FromRequestParts<S> for RepositoryId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::RepositoryNotFound)?;

        let id = parse_int_prefix(&raw);
        if id.is_none() {
            tracing::debug!(
                request_id = %parts.headers.request_id(),
                segment = %raw,
                "Repository id is not a number"
            );
        }
        Ok(Self(id))
    }
}

/// Whitespace and line terminators skipped before an integer prefix:
/// ASCII blanks, NBSP, BOM, the `Zs` space separators, LS and PS.
/// Unicode `White_Space` differs (it has NEL, lacks BOM).
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{000B}' | '\u{000C}' | '\r' | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Parse the longest integer prefix of `raw`.
///
/// Leading whitespace and a single sign are accepted, `0x`/`0X` selects
/// hexadecimal, trailing garbage is ignored. Returns `None` when no digit
/// is present or the value does not fit in `i64`.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let s = raw.trim_start_matches(is_js_whitespace);
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, s) = match s.get(..2) {
        Some("0x") | Some("0X") => (16, &s[2..]),
        _ => (10, s),
    };

    let end = s.find(|c: char| !c.is_digit(radix)).unwrap_or(s.len());
    let digits = &s[..end];
    if digits.is_empty() {
        return None;
    }

    let magnitude = i64::from_str_radix(digits, radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
