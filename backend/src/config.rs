//! Runtime configuration, resolved from environment variables with sensible
//! defaults at startup.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Top-level application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Data directory holding the JSON stores; defaults to
    /// Documents/Wanderlust when unset
    pub data_dir: Option<PathBuf>,
    pub bind_addr: SocketAddr,
    /// Trip budget the expense summary is measured against, in euros
    pub budget_limit: f64,
    pub assistant: AssistantConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            budget_limit: 500.0,
            assistant: AssistantConfig::default(),
        }
    }
}

impl AppConfig {
    /// Resolve configuration from the environment
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = std::env::var("WANDERLUST_DATA_DIR") {
            config.data_dir = Some(PathBuf::from(dir));
        }
        if let Some(addr) = std::env::var("WANDERLUST_BIND_ADDR")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.bind_addr = addr;
        }
        if let Some(budget) = std::env::var("WANDERLUST_BUDGET_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.budget_limit = budget;
        }
        config.assistant = AssistantConfig::from_env();

        config
    }
}

/// Configuration for the assistant proxy
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    /// OpenAI-compatible chat-completions endpoint
    pub api_url: String,
    /// Missing key is not fatal: assistant requests soft-fail to fallback
    /// text instead
    pub api_key: Option<String>,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub request_timeout_secs: u64,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.openai.com/v1/chat/completions".to_string(),
            api_key: None,
            model: "gpt-4o-mini".to_string(),
            max_tokens: 500,
            temperature: 0.7,
            request_timeout_secs: 30,
        }
    }
}

impl AssistantConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.api_key = std::env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty());
        if let Ok(url) = std::env::var("WANDERLUST_ASSISTANT_URL") {
            config.api_url = url;
        }
        if let Ok(model) = std::env::var("WANDERLUST_ASSISTANT_MODEL") {
            config.model = model;
        }

        config
    }
}
