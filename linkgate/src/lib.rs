//! linkgate - a reverse proxy that keeps an origin private except to link previews
//!
//! Two independent proxies live here:
//!
//! - [`gate::AccessGate`] forwards requests from known link-preview crawlers and from
//!   visitors carrying an `authkey` cookie, and answers everyone else with a 404 page.
//! - [`proxy::HostRewriteProxy`] forwards every request to `https://$TARGET_HOST` with the
//!   same path, query, method, headers and body, and relays the answer as-is.

#![forbid(unsafe_code)]

pub mod config;
pub mod gate;
pub mod proxy;

#[cfg(test)]
pub(crate) mod test_support;
