// Proxy module
//
// Hosts the library's proxies on a socket:
// - http_server: accept loop and the default handling of failed requests

pub mod http_server;

pub use http_server::serve;
