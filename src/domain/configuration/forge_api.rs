use url::Url;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Connection settings for the GitHub REST API.
#[derive(Debug, Clone)]
pub struct ForgeApiConfig {
    /// API base URL.
    pub api_url: Url,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ForgeApiConfig {
    fn default() -> Self {
        Self {
            api_url: Url::parse(DEFAULT_API_URL).expect("default API URL is valid"),
            timeout_secs: 30,
        }
    }
}
