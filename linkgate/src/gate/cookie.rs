use hyper::HeaderMap;
use hyper::header::COOKIE;

/// Name of the cookie whose presence authorizes a request
pub const AUTHKEY_COOKIE: &str = "authkey";

/// Find the value of the first `name=value` pair in a raw `Cookie` header.
///
/// Pairs are separated by `;` and trimmed before matching. The value is everything after
/// the first `=`, so `authkey=` yields `Some("")`.
pub fn extract_cookie<'a>(cookie_header: &'a str, name: &str) -> Option<&'a str> {
    cookie_header.split(';').map(str::trim).find_map(|pair| pair.strip_prefix(name).and_then(|rest| rest.strip_prefix('=')))
}

pub fn extract_authkey(cookie_header: &str) -> Option<&str> {
    extract_cookie(cookie_header, AUTHKEY_COOKIE)
}

/// Read the `Cookie` header as a string. Absent or non-ASCII values read as empty.
pub fn cookie_header(headers: &HeaderMap) -> &str {
    headers.get(COOKIE).and_then(|v| v.to_str().ok()).unwrap_or("")
}
