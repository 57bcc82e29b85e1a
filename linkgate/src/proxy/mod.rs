// Proxy module
//
// Outbound forwarding shared by both deployables:
// - upstream: the forward-and-relay seam and its origin/HTTPS implementations
// - host_rewrite: the unconditional host-rewriting proxy
// - error: proxy errors and the plaintext 500 wrapper

pub mod error;
pub mod host_rewrite;
pub mod upstream;

pub use error::ProxyError;
pub use host_rewrite::HostRewriteProxy;
pub use upstream::{HttpsUpstream, OriginUpstream, Upstream};
