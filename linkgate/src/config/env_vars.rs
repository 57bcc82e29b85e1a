//! Environment variable names read by linkgate

/// Host the rewrite proxy forwards every request to
pub const TARGET_HOST: &str = "TARGET_HOST";

/// Origin base URL for the access gate (read by the CLI)
pub const ORIGIN: &str = "LINKGATE_ORIGIN";

/// Listen addresses (read by the CLI)
pub const GATE_LISTEN: &str = "LINKGATE_GATE_LISTEN";
pub const REWRITE_LISTEN: &str = "LINKGATE_REWRITE_LISTEN";

/// Get all environment variable names for documentation/validation
pub fn all_env_vars() -> &'static [&'static str] {
    &[TARGET_HOST, ORIGIN, GATE_LISTEN, REWRITE_LISTEN]
}
