//! Client configuration
//!
//! Settings shared by every request a [`Client`](crate::Client) sends: the API
//! root, the request timeout, the user agent, and extra headers.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Default Fanfou API root
pub const DEFAULT_BASE_URL: &str = "http://api.fanfou.com";

/// Configuration for the Fanfou client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API root (e.g., "http://api.fanfou.com")
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout
    #[serde(default = "default_timeout", with = "duration_secs")]
    pub timeout: Duration,
    /// User agent string
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Custom headers to include in all requests
    #[serde(default)]
    pub default_headers: HashMap<String, String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_user_agent() -> String {
    format!("fanfou-client/{}", env!("CARGO_PKG_VERSION"))
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
            user_agent: default_user_agent(),
            default_headers: HashMap::new(),
        }
    }
}

impl ClientConfig {
    /// Create a new config with an API root
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Add a default header
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Absolute URL of an endpoint path such as `statuses/update`
    pub fn endpoint_url(&self, path: &str) -> String {
        format!(
            "{}/{}.json",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
