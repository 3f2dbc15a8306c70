use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Configuration for a single extraction run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// URL of the page to extract.
    pub url: String,

    /// URL for the WebDriver instance.
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Skip TLS certificate validation on the probe and the browser
    /// navigation.
    #[serde(default)]
    pub insecure: bool,

    /// Timeout for the liveness probe, in seconds.
    #[serde(default = "default_probe_timeout_secs")]
    pub probe_timeout_secs: u64,

    /// Timeout for page navigation, in seconds.
    #[serde(default = "default_page_load_timeout_secs")]
    pub page_load_timeout_secs: u64,
}

impl ExtractorConfig {
    /// Create a new configuration with default values.
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            webdriver_url: default_webdriver_url(),
            insecure: false,
            probe_timeout_secs: default_probe_timeout_secs(),
            page_load_timeout_secs: default_page_load_timeout_secs(),
        }
    }

    /// Load configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }
}

fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

fn default_probe_timeout_secs() -> u64 {
    10
}

fn default_page_load_timeout_secs() -> u64 {
    45
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExtractorConfig::new("https://example.com");
        assert_eq!(config.webdriver_url, "http://localhost:4444");
        assert!(!config.insecure);
        assert_eq!(config.probe_timeout_secs, 10);
        assert_eq!(config.page_load_timeout_secs, 45);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ExtractorConfig =
            serde_json::from_str(r#"{"url": "https://example.com", "insecure": true}"#).unwrap();
        assert_eq!(config.url, "https://example.com");
        assert!(config.insecure);
        assert_eq!(config.webdriver_url, "http://localhost:4444");
    }
}
