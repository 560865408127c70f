//! Frontend configuration module
//!
//! This module provides configuration for the remote catalog API.

/// Frontend configuration for API endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the catalog API.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: option_env!("LIBRETTO_API_URL")
                .unwrap_or("http://localhost:8000")
                .to_string(),
        }
    }
}

impl ApiConfig {
    /// Create a new configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the API base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = ApiConfig::default();
        assert!(!config.base_url.is_empty());
        assert!(config.base_url.starts_with("http"));
    }

    #[test]
    fn test_config_new() {
        let config = ApiConfig::new();
        assert_eq!(config.base_url(), config.base_url.as_str());
    }

    #[test]
    fn test_config_clone() {
        let config1 = ApiConfig::new();
        let config2 = config1.clone();
        assert_eq!(config1, config2);
    }
}
