use serde::{Deserialize, Serialize};
use std::fmt;

fn default_chat_ttl_seconds() -> u64 {
    3600
}

/// Connection parameters for the external voice/emotion provider.
#[derive(Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// WebSocket endpoint of the provider's realtime API.
    pub url: String,
    pub api_key: String,
    #[serde(skip_serializing)]
    pub secret_key: String,
    /// Provider-side configuration profile to run the session against
    /// (voice, system prompt, inference models).
    #[serde(default)]
    pub config_id: Option<String>,
    /// Idle chat TTL in seconds before the provider closes the session.
    /// Default: 3600 (1 hour).
    #[serde(default = "default_chat_ttl_seconds")]
    pub chat_ttl_seconds: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            api_key: String::new(),
            secret_key: String::new(),
            config_id: None,
            chat_ttl_seconds: default_chat_ttl_seconds(),
        }
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("url", &self.url)
            .field("api_key", &self.api_key)
            .field("secret_key", &"[REDACTED]")
            .field("config_id", &self.config_id)
            .field("chat_ttl_seconds", &self.chat_ttl_seconds)
            .finish()
    }
}

impl ProviderConfig {
    pub fn new(
        url: impl Into<String>,
        api_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            api_key: api_key.into(),
            secret_key: secret_key.into(),
            config_id: None,
            chat_ttl_seconds: default_chat_ttl_seconds(),
        }
    }
}
