/// Centralized environment configuration.
/// All env vars and defaults are defined here.
#[derive(Debug, Clone)]
pub struct Config {
    /// Database connection URL. Required.
    pub database_url: String,

    /// Address the HTTP server binds to.
    /// Default: 0.0.0.0:3000
    pub bind_addr: String,

    /// Bearer session lifetime in days.
    /// Default: 30
    pub session_ttl_days: i64,

    /// Seconds between expired-notification sweeps.
    /// Default: 3600
    pub notification_sweep_secs: u64,
}

impl Config {
    /// Build config from environment variables.
    /// Returns an error if required vars are missing or malformed.
    pub fn from_env() -> Result<Self, String> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| "DATABASE_URL must be set in .env")?;

        let bind_addr = std::env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let session_ttl_days = std::env::var("SESSION_TTL_DAYS")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<i64>()
            .map_err(|_| "SESSION_TTL_DAYS must be a whole number of days")?;

        let notification_sweep_secs = std::env::var("NOTIFICATION_SWEEP_SECS")
            .unwrap_or_else(|_| "3600".to_string())
            .parse::<u64>()
            .map_err(|_| "NOTIFICATION_SWEEP_SECS must be a number of seconds")?;

        Ok(Self {
            database_url,
            bind_addr,
            session_ttl_days,
            notification_sweep_secs,
        })
    }

    /// Config for tests. In-memory database, short defaults.
    pub fn for_tests() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            bind_addr: "127.0.0.1:0".to_string(),
            session_ttl_days: 30,
            notification_sweep_secs: 3600,
        }
    }
}
