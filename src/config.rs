use std::net::SocketAddr;

/// Application-level constants
pub const APP_NAME: &str = "HippoCard";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Address the API server binds when `HIPPOCARD_BIND_ADDR` is unset.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

pub const ENV_BIND_ADDR: &str = "HIPPOCARD_BIND_ADDR";
pub const ENV_SEED_SAMPLE_DATA: &str = "HIPPOCARD_SEED_SAMPLE_DATA";

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "hippocard=info,hippocard_lib=info,tower_http=warn"
}

/// Runtime settings for the API server, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Seed the in-memory store with the demo records.
    pub seed_sample_data: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            seed_sample_data: true,
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 3000))
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unparseable values fall back to the
    /// default with a warning rather than aborting startup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_BIND_ADDR) {
            match raw.trim().parse::<SocketAddr>() {
                Ok(addr) => config.bind_addr = addr,
                Err(e) => tracing::warn!(
                    value = %raw,
                    "Invalid {ENV_BIND_ADDR} ({e}), using {DEFAULT_BIND_ADDR}"
                ),
            }
        }

        if let Some(raw) = lookup(ENV_SEED_SAMPLE_DATA) {
            match parse_flag(&raw) {
                Some(flag) => config.seed_sample_data = flag,
                None => tracing::warn!(
                    value = %raw,
                    "Invalid {ENV_SEED_SAMPLE_DATA}, keeping sample data enabled"
                ),
            }
        }

        config
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
