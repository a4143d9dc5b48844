use std::time::Duration;

use super::constants;

/// SmartAPI HTTP client with connection pooling
pub struct SmartApiClient {
    pub(super) api_key: String,
    pub(super) base_url: String,
    pub(super) http_client: reqwest::Client,
}

impl SmartApiClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, constants::API_BASE_URL.to_string())
    }

    /// Point the client at a different endpoint root (used by tests).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("smartapi-cli/1.0")
            .build()
            .expect("Failed to build HTTP client");

        Self {
            api_key,
            base_url,
            http_client,
        }
    }
}
