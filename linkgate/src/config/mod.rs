// Configuration module
//
// The only runtime setting is the host the rewrite proxy forwards to. It is read from the
// environment on every request so a changed value takes effect without a restart.

pub mod env_vars;

use log::trace;

/// Host used when `TARGET_HOST` is unset or blank
pub const DEFAULT_TARGET_HOST: &str = "example.com";

/// Current rewrite target, falling back to [`DEFAULT_TARGET_HOST`].
pub fn target_host() -> String {
    let host = resolve_target_host(std::env::var(env_vars::TARGET_HOST).ok());
    trace!("Resolved {} = {}", env_vars::TARGET_HOST, host);
    host
}

pub fn resolve_target_host(value: Option<String>) -> String {
    match value {
        Some(host) if !host.trim().is_empty() => host.trim().to_string(),
        _ => DEFAULT_TARGET_HOST.to_string(),
    }
}
