use anyhow::Result;
use hyper::server::conn::AddrStream;
use hyper::service::{make_service_fn, service_fn};
use hyper::{Body, Request, Response, StatusCode};
use log::{error, info};
use std::convert::Infallible;
use std::future::Future;
use std::net::{IpAddr, SocketAddr};

/// Response for a handler that gave up without producing one
fn internal_error() -> Response<Body> {
    let mut response = Response::new(Body::empty());
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response
}

/// Serve `handler` on `addr` until the process exits.
///
/// One handler invocation per request. If it returns an error, the error is logged and
/// the client gets an empty 500. Failing to bind is retried every two seconds.
pub async fn serve<H, F>(name: &'static str, addr: SocketAddr, handler: H) -> Result<()>
where
    H: Fn(IpAddr, Request<Body>) -> F + Clone + Send + Sync + 'static,
    F: Future<Output = Result<Response<Body>>> + Send + 'static,
{
    loop {
        let handler = handler.clone();
        let make_svc = make_service_fn(move |conn: &AddrStream| {
            let remote_addr = conn.remote_addr().ip();
            let handler = handler.clone();
            async move {
                Ok::<_, Infallible>(service_fn(move |req: Request<Body>| {
                    let client_ip = remote_addr;
                    let response = handler(client_ip, req);
                    async move {
                        match response.await {
                            Ok(resp) => Ok::<_, Infallible>(resp),
                            Err(e) => {
                                error!("handle_request error from {}: {}", client_ip, e);
                                Ok::<_, Infallible>(internal_error())
                            }
                        }
                    }
                }))
            }
        });

        let builder = match hyper::Server::try_bind(&addr) {
            Ok(b) => b,
            Err(e) => {
                error!("Failed to bind {} on {}: {}", name, addr, e);
                tokio::time::sleep(std::time::Duration::from_secs(2)).await;
                continue;
            }
        };

        let server = builder.serve(make_svc);

        info!("{} running on {}", name, addr);

        if let Err(e) = server.await {
            error!("Server error: {}", e);
        }
    }
}
