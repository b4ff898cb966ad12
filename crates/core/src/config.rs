/// Process configuration, resolved from the environment exactly once at
/// startup and passed by reference into component constructors. No other
/// module reads environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Symmetric secret for token signing.
    pub secret: String,
    /// Issuer string stamped into and required from every token.
    pub issuer: String,
    /// Token lifetime. One policy for all tokens.
    pub ttl: std::time::Duration,
    /// Canonical URL base for published snippets.
    pub site: String,
    /// Listen address, e.g. `127.0.0.1:3000`.
    pub bind: String,
    /// Record Store connection string.
    pub db_url: String,
}

/// Default token lifetime in seconds when `TOKEN_TTL_SECS` is unset.
pub const TOKEN_TTL_SECS: u64 = 3600;

impl Config {
    /// Read all recognized options from the environment.
    ///
    /// # Panics
    ///
    /// Panics when a required variable is missing or malformed. Startup
    /// is the only caller; a partially configured process must not serve.
    pub fn from_env() -> Self {
        let ttl = std::env::var("TOKEN_TTL_SECS")
            .map(|s| s.parse().expect("TOKEN_TTL_SECS must be a number"))
            .unwrap_or(TOKEN_TTL_SECS);
        Self {
            secret: std::env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            issuer: std::env::var("SITE_NAME_SHORT").expect("SITE_NAME_SHORT must be set"),
            ttl: std::time::Duration::from_secs(ttl),
            site: std::env::var("SITE_NAME").expect("SITE_NAME must be set"),
            bind: std::env::var("BIND_ADDR").expect("BIND_ADDR must be set"),
            db_url: std::env::var("DB_URL").expect("DB_URL must be set"),
        }
    }
}
