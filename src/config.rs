use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Runtime configuration, resolved once at startup.
///
/// Defaults below are overridden by `PORTAL_`-prefixed environment variables
/// (e.g. `PORTAL_DATABASE_URL`, `PORTAL_JWT_SECRET`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalConfig {
    pub database_url: String,
    pub bind_addr: String,
    pub jwt_secret: String,
    /// Lifetime of issued login tokens, in days.
    pub token_ttl_days: i64,
    pub loglevel: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite:covid19_portal.db".to_string(),
            bind_addr: "0.0.0.0:3000".to_string(),
            jwt_secret: "MY_SECRET_TOKEN".to_string(),
            token_ttl_days: 30,
            loglevel: "info".to_string(),
        }
    }
}

impl PortalConfig {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(PortalConfig::default()))
            .merge(Env::prefixed("PORTAL_"))
            .extract()
    }
}

pub static CONFIG: LazyLock<PortalConfig> = LazyLock::new(|| {
    PortalConfig::load().unwrap_or_else(|e| {
        eprintln!("invalid configuration: {e}");
        std::process::exit(1);
    })
});
