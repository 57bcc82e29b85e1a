use crate::proxy::error::ProxyError;
use async_trait::async_trait;
use hyper::client::HttpConnector;
use hyper::http::Version;
use hyper::{Body, Client, Request, Response, Uri};
use hyper_tls::HttpsConnector;
use log::debug;
use std::net::IpAddr;

/// Forward a request somewhere and hand back whatever came back.
///
/// Implementations never retry and never follow redirects. Dropping the returned
/// future aborts the call and releases its connection.
#[async_trait]
pub trait Upstream: Send + Sync {
    async fn forward(&self, client_ip: IpAddr, req: Request<Body>) -> Result<Response<Body>, ProxyError>;
}

/// Pass-through to a plain HTTP origin.
///
/// Only the URI changes (origin base + inbound path and query). Method, every header
/// value (repeats and `Host` included) and the body go out as received, and the origin's
/// response comes back as-is.
#[derive(Debug, Clone)]
pub struct OriginUpstream {
    origin: String,
    client: Client<HttpConnector, Body>,
}

impl OriginUpstream {
    pub fn new(origin: impl Into<String>) -> Self {
        Self { origin: origin.into().trim_end_matches('/').to_string(), client: Client::builder().build_http() }
    }

    pub fn get_origin(&self) -> &str {
        &self.origin
    }

    pub fn origin_uri(&self, uri: &Uri) -> Result<Uri, ProxyError> {
        let path_and_query = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
        Ok(format!("{}{}", self.origin, path_and_query).parse::<Uri>()?)
    }
}

#[async_trait]
impl Upstream for OriginUpstream {
    async fn forward(&self, _client_ip: IpAddr, req: Request<Body>) -> Result<Response<Body>, ProxyError> {
        let (mut parts, body) = req.into_parts();
        parts.uri = self.origin_uri(&parts.uri)?;
        // The origin connection is HTTP/1.1 whatever the client spoke
        parts.version = Version::HTTP_11;
        debug!("Forwarding {} {} to origin", parts.method, parts.uri);
        Ok(self.client.request(Request::from_parts(parts, body)).await?)
    }
}

/// Sends requests to the absolute URI they already carry, over HTTP or HTTPS.
#[derive(Debug, Clone)]
pub struct HttpsUpstream {
    client: Client<HttpsConnector<HttpConnector>, Body>,
}

impl Default for HttpsUpstream {
    fn default() -> Self {
        let https = HttpsConnector::new();
        Self { client: Client::builder().build::<_, Body>(https) }
    }
}

#[async_trait]
impl Upstream for HttpsUpstream {
    async fn forward(&self, _client_ip: IpAddr, req: Request<Body>) -> Result<Response<Body>, ProxyError> {
        debug!("Sending {} {}", req.method(), req.uri());
        Ok(self.client.request(req).await?)
    }
}
