//! Client IP resolution.
//!
//! The `X-Forwarded-For` header wins when present; otherwise the peer
//! address recorded by the server is used with its port stripped.

use axum::http::HeaderMap;

/// Header consulted before falling back to the peer address.
pub const FORWARDED_FOR: &str = "x-forwarded-for";

/// Resolves the caller's IP from the request headers and peer address.
///
/// The forwarded header is returned verbatim, so a proxy chain such as
/// `1.2.3.4, 10.0.0.1` is reported as-is. Bytes that are not valid UTF-8
/// are replaced rather than discarding the header. Returns `None` when
/// neither source yields a non-empty value.
#[must_use]
pub fn resolve_client_ip(headers: &HeaderMap, remote_addr: Option<&str>) -> Option<String> {
    if let Some(forwarded) = headers.get(FORWARDED_FOR)
        && !forwarded.is_empty()
    {
        return Some(String::from_utf8_lossy(forwarded.as_bytes()).into_owned());
    }

    remote_addr.and_then(strip_port).map(str::to_string)
}

/// Returns everything before the last `:` of `addr`.
///
/// `5.6.7.8:9999` gives `5.6.7.8` and `[::1]:8080` gives `[::1]`.
#[must_use]
pub fn strip_port(addr: &str) -> Option<&str> {
    match addr.rsplit_once(':') {
        Some((host, _)) if !host.is_empty() => Some(host),
        _ => None,
    }
}
