use tracing::info;

const DEFAULT_AUDIT_URL: &str = "http://127.0.0.1:8000";

/// Application configuration
/// In debug builds: loads from .env file before reading the environment
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the audit service
    pub audit_base_url: String,
}

impl Config {
    /// Load configuration based on build mode
    pub fn load() -> Self {
        #[cfg(debug_assertions)]
        if dotenvy::dotenv().is_ok() {
            info!("Config: Dev mode activated - loaded .env file");
        }

        let audit_base_url =
            std::env::var("SEOLENS_AUDIT_URL").unwrap_or_else(|_| DEFAULT_AUDIT_URL.to_string());

        info!("Config: audit service at {}", audit_base_url);

        Self { audit_base_url }
    }
}
