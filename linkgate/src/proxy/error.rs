//! Error types shared by both proxies.

use hyper::header::CONTENT_TYPE;
use hyper::{Body, Response, StatusCode};
use thiserror::Error;

/// Failure while building or forwarding an outbound request.
///
/// Every variant displays only the underlying message, which is what ends up
/// after `Proxy Error: ` in the host-rewrite error response.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// The outbound URL could not be parsed (for example, a malformed target host).
    #[error(transparent)]
    InvalidUri(#[from] hyper::http::uri::InvalidUri),

    /// The outbound request could not be assembled.
    #[error(transparent)]
    Request(#[from] hyper::http::Error),

    /// Connection, TLS or protocol failure talking to the upstream.
    #[error(transparent)]
    Upstream(#[from] hyper::Error),

    /// Failure reported by a forwarder that has no richer error type.
    #[error("{0}")]
    Forward(String),
}

/// Turn a proxy failure into the plaintext 500 sent back to the client
pub fn proxy_error_response(error: &ProxyError) -> Response<Body> {
    let mut response = Response::new(Body::from(format!("Proxy Error: {}", error)));
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response.headers_mut().insert(CONTENT_TYPE, hyper::header::HeaderValue::from_static("text/plain"));
    response
}
