use crate::proxy::error::ProxyError;
use crate::proxy::upstream::Upstream;
use async_trait::async_trait;
use hyper::body::to_bytes;
use hyper::header::{HOST, HeaderValue, LOCATION, SET_COOKIE};
use hyper::server::conn::AddrStream;
use hyper::service::{make_service_fn, service_fn};
use hyper::{Body, HeaderMap, Method, Request, Response, StatusCode};
use std::convert::Infallible;
use std::net::{IpAddr, SocketAddr};
use std::sync::Mutex;

/// Snapshot of a request as it reached an upstream
#[derive(Debug)]
pub struct RecordedRequest {
    pub client_ip: IpAddr,
    pub method: Method,
    pub uri: String,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

type ResponseFactory = Box<dyn Fn() -> Response<Body> + Send + Sync>;

/// Upstream double that remembers the last request and answers with a canned response
pub struct RecordingUpstream {
    last: Mutex<Option<RecordedRequest>>,
    respond: ResponseFactory,
}

impl Default for RecordingUpstream {
    fn default() -> Self {
        Self::with_response(|| Response::new(Body::from("origin says hi")))
    }
}

impl RecordingUpstream {
    pub fn with_response(respond: impl Fn() -> Response<Body> + Send + Sync + 'static) -> Self {
        Self { last: Mutex::new(None), respond: Box::new(respond) }
    }

    pub fn take(&self) -> Option<RecordedRequest> {
        self.last.lock().unwrap().take()
    }
}

#[async_trait]
impl Upstream for RecordingUpstream {
    async fn forward(&self, client_ip: IpAddr, req: Request<Body>) -> Result<Response<Body>, ProxyError> {
        let (parts, body) = req.into_parts();
        let body = to_bytes(body).await?;
        *self.last.lock().unwrap() =
            Some(RecordedRequest { client_ip, method: parts.method, uri: parts.uri.to_string(), headers: parts.headers, body: body.to_vec() });
        Ok((self.respond)())
    }
}

/// Upstream double whose every call fails with the given message
pub struct FailingUpstream {
    message: String,
}

impl FailingUpstream {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

#[async_trait]
impl Upstream for FailingUpstream {
    async fn forward(&self, _client_ip: IpAddr, _req: Request<Body>) -> Result<Response<Body>, ProxyError> {
        Err(ProxyError::Forward(self.message.clone()))
    }
}

fn seen(headers: &HeaderMap, name: impl hyper::header::AsHeaderName) -> HeaderValue {
    headers.get(name).cloned().unwrap_or_else(|| HeaderValue::from_static(""))
}

/// Origin that reports what it received in `x-seen-*` headers, echoes the body and sets two cookies.
/// `/moved` answers with a 302 instead.
async fn echo(req: Request<Body>) -> Result<Response<Body>, Infallible> {
    if req.uri().path() == "/moved" {
        return Ok(Response::builder().status(StatusCode::FOUND).header(LOCATION, "/elsewhere").body(Body::empty()).unwrap());
    }

    let multi: Vec<&str> = req.headers().get_all("x-multi").iter().map(|v| v.to_str().unwrap()).collect();
    let response = Response::builder()
        .status(StatusCode::CREATED)
        .header("x-seen-method", req.method().as_str())
        .header("x-seen-target", req.uri().to_string())
        .header("x-seen-host", seen(req.headers(), HOST))
        .header("x-seen-multi", multi.join(","))
        .header("x-seen-forwarded-for", seen(req.headers(), "x-forwarded-for"))
        .header(SET_COOKIE, "a=1")
        .header(SET_COOKIE, "b=2");
    let body = to_bytes(req.into_body()).await.unwrap();
    Ok(response.body(Body::from(body)).unwrap())
}

/// Start the echo origin on an ephemeral loopback port
pub async fn spawn_echo_origin() -> SocketAddr {
    let make_svc = make_service_fn(|_conn: &AddrStream| async { Ok::<_, Infallible>(service_fn(echo)) });
    let server = hyper::Server::try_bind(&SocketAddr::from(([127, 0, 0, 1], 0))).unwrap().serve(make_svc);
    let addr = server.local_addr();
    tokio::spawn(server);
    addr
}
