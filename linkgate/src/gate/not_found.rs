use hyper::header::CONTENT_TYPE;
use hyper::{Body, Response, StatusCode};

pub const NOT_FOUND_PAGE: &str = include_str!("../../assets/not_found.html");
pub const NOT_FOUND_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Build the themed 404 returned to unauthorized visitors
pub fn not_found_response() -> hyper::http::Result<Response<Body>> {
    Response::builder().status(StatusCode::NOT_FOUND).header(CONTENT_TYPE, NOT_FOUND_CONTENT_TYPE).body(Body::from(NOT_FOUND_PAGE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::body::to_bytes;

    #[tokio::test]
    async fn test_not_found_response() {
        let response = not_found_response().unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers().get(CONTENT_TYPE).unwrap(), "text/html; charset=utf-8");

        let body = to_bytes(response.into_body()).await.unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.starts_with("<!DOCTYPE html>"));
        assert!(body.contains("404"));
    }
}
