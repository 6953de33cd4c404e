//! Gateway configuration.

/// Environment variable carrying the remote API base URL.
pub const BASE_URL_ENV: &str = "STOCKLENS_API_BASE_URL";

const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Remote endpoint configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    base_url: String,
}

impl GatewayConfig {
    /// Build a config with an explicit base URL. A trailing slash is
    /// stripped so endpoint joining stays predictable.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Read the base URL from the environment, falling back to the local
    /// development default.
    pub fn from_env() -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::new(DEFAULT_BASE_URL),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join a path onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joining_normalizes_slashes() {
        let config = GatewayConfig::new("https://api.example.com/");
        assert_eq!(
            config.endpoint("/products"),
            "https://api.example.com/products"
        );
        assert_eq!(
            config.endpoint("users/signin"),
            "https://api.example.com/users/signin"
        );
    }

    #[test]
    fn default_points_at_local_development() {
        let config = GatewayConfig::default();
        assert_eq!(config.base_url(), "http://localhost:5000/api");
    }
}
