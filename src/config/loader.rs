use std::{env, time::Duration};

use super::env::{
    AppConfig, ConfigError, DirectoryConfig, LoggingConfig, OpenAiConfig, WebContentConfig,
};

pub const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4";

pub fn load_config() -> Result<AppConfig, ConfigError> {
    AppConfig::from_lookup(|key| env::var(key).ok())
}

impl AppConfig {
    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let openai = OpenAiConfig {
            api_key: non_empty("OPENAI_API_KEY").ok_or(ConfigError::Missing("OPENAI_API_KEY"))?,
            model: non_empty("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            api_url: non_empty("OPENAI_API_URL")
                .unwrap_or_else(|| DEFAULT_OPENAI_API_URL.to_string()),
        };

        let directories = DirectoryConfig {
            logs_dir: non_empty("LOGS_DIR").unwrap_or_else(|| "logs".to_string()),
        };

        let logging = LoggingConfig {
            level: non_empty("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        };

        let defaults = WebContentConfig::default();
        let web = WebContentConfig {
            fetch_timeout: lookup("WEBPAGE_FETCH_TIMEOUT")
                .and_then(|v| v.trim().parse::<u64>().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.fetch_timeout),
            content_max_length: lookup("WEBPAGE_CONTENT_MAX_LENGTH")
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(defaults.content_max_length),
        };

        Ok(Self {
            openai,
            directories,
            logging,
            web,
        })
    }
}
