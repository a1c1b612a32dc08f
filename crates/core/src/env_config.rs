//! Environment-driven settings.

use crate::constants::{
    ENV_PG_ACQUIRE_TIMEOUT_SECS, ENV_PG_MAX_CONNECTIONS, PG_POOL_ACQUIRE_TIMEOUT_SECS,
    PG_POOL_IDLE_TIMEOUT_SECS, PG_POOL_MAX_CONNECTIONS,
};

/// Read `var` and parse it, falling back to `default`.
///
/// An unset variable is the normal case and stays silent; a value that fails to
/// parse is logged at warn level before the default is used.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    let Ok(raw) = std::env::var(var) else {
        return default;
    };
    raw.parse().unwrap_or_else(|_| {
        tracing::warn!(var, value = %raw, default = %default, "invalid env var value, using default");
        default
    })
}

/// Connection pool sizing for the PostgreSQL store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: PG_POOL_MAX_CONNECTIONS,
            acquire_timeout_secs: PG_POOL_ACQUIRE_TIMEOUT_SECS,
            idle_timeout_secs: PG_POOL_IDLE_TIMEOUT_SECS,
        }
    }
}

impl PoolSettings {
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_connections: env_parse_with_default(
                ENV_PG_MAX_CONNECTIONS,
                defaults.max_connections,
            ),
            acquire_timeout_secs: env_parse_with_default(
                ENV_PG_ACQUIRE_TIMEOUT_SECS,
                defaults.acquire_timeout_secs,
            ),
            idle_timeout_secs: defaults.idle_timeout_secs,
        }
    }
}
