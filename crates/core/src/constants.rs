//! Shared constants for stronghold.

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 10;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// Env var overriding [`PG_POOL_MAX_CONNECTIONS`].
pub const ENV_PG_MAX_CONNECTIONS: &str = "STRONGHOLD_PG_MAX_CONNECTIONS";

/// Env var overriding [`PG_POOL_ACQUIRE_TIMEOUT_SECS`].
pub const ENV_PG_ACQUIRE_TIMEOUT_SECS: &str = "STRONGHOLD_PG_ACQUIRE_TIMEOUT_SECS";

/// Default HTTP port.
pub const DEFAULT_HTTP_PORT: u16 = 5000;

/// Longest accepted set or card name, in characters.
pub const MAX_NAME_LEN: usize = 200;

/// Most cards accepted in one create/update request.
pub const MAX_CARDS_PER_SET: usize = 5000;
