use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub api: ApiConfig,
}

/// Connection settings for the storefront REST backend
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the backend, without the /api/v1 prefix
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            // Only warn if it's not "file not found" - that's acceptable
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            api: ApiConfig::from_env()?,
        })
    }
}

impl ApiConfig {
    const DEFAULT_TIMEOUT_SECS: u64 = 30;

    pub fn from_env() -> Result<Self, String> {
        let base_url = env::var("API_BASE_URL")
            .map_err(|_| "API_BASE_URL environment variable is required".to_string())?;

        let timeout_secs = env::var("API_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "API_TIMEOUT_SECS must be a valid number".to_string())?;

        let user_agent = env::var("API_USER_AGENT")
            .unwrap_or_else(|_| format!("StorefrontCore/{}", env!("CARGO_PKG_VERSION")));

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            user_agent,
        })
    }

    /// Base URL with any trailing slash removed, ready for path concatenation
    pub fn trimmed_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
