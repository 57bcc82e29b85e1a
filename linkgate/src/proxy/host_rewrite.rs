//! Unconditional host-rewriting proxy.
//!
//! Every inbound request is re-addressed to `https://<target host><path>?<query>` and
//! forwarded with its method, headers and body intact. Whatever the target answers,
//! redirects included, is relayed unchanged. Any failure becomes a plaintext 500.

use crate::config;
use crate::proxy::error::{ProxyError, proxy_error_response};
use crate::proxy::upstream::Upstream;
use hyper::header::HOST;
use hyper::{Body, Request, Response, Uri};
use log::{error, info};
use std::net::IpAddr;

/// Build the outbound URL: forced `https`, the target host, and the inbound path and query.
pub fn rewrite_uri(uri: &Uri, target_host: &str) -> Result<Uri, ProxyError> {
    let path_and_query = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
    Ok(format!("https://{}{}", target_host, path_and_query).parse::<Uri>()?)
}

/// Re-address `req` to the target host, keeping method, headers and body.
pub fn rewrite_request(req: Request<Body>, target_host: &str) -> Result<Request<Body>, ProxyError> {
    let (parts, body) = req.into_parts();
    let target = rewrite_uri(&parts.uri, target_host)?;

    let mut builder = Request::builder().method(parts.method).uri(target);
    for (name, value) in parts.headers.iter() {
        if name == HOST {
            continue;
        }
        builder = builder.header(name, value);
    }
    builder = builder.header(HOST, target_host);

    Ok(builder.body(body)?)
}

pub struct HostRewriteProxy<U: Upstream> {
    upstream: U,
}

impl<U: Upstream> HostRewriteProxy<U> {
    pub fn new(upstream: U) -> Self {
        Self { upstream }
    }

    /// Forward using the target host currently configured in the environment.
    pub async fn handle(&self, client_ip: IpAddr, req: Request<Body>) -> Response<Body> {
        let target_host = config::target_host();
        self.handle_with_target(client_ip, req, &target_host).await
    }

    pub async fn handle_with_target(&self, client_ip: IpAddr, req: Request<Body>, target_host: &str) -> Response<Body> {
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        match self.forward(client_ip, req, target_host).await {
            Ok(response) => {
                info!(
                    "Received request from {ip} for {method} {path} -> https://{host} ({status})",
                    ip = client_ip,
                    method = method,
                    path = path,
                    host = target_host,
                    status = response.status()
                );
                response
            }
            Err(e) => {
                error!("Host rewrite proxy error for {method} {path} -> {host}: {e}", method = method, path = path, host = target_host, e = e);
                proxy_error_response(&e)
            }
        }
    }

    async fn forward(&self, client_ip: IpAddr, req: Request<Body>, target_host: &str) -> Result<Response<Body>, ProxyError> {
        let outbound = rewrite_request(req, target_host)?;
        self.upstream.forward(client_ip, outbound).await
    }
}
