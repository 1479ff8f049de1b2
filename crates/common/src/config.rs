use std::time::Duration;

use serde::Deserialize;

use crate::error::BotError;

const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
const DEFAULT_RETRY_TIME_SECS: u64 = 600;

/// Bot configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// OAuth token for the homework review API
    pub practicum_token: String,

    /// Telegram bot token
    pub telegram_token: String,

    /// Chat that receives every notification
    pub telegram_chat_id: String,

    /// Review API endpoint
    pub endpoint: String,

    /// Telegram Bot API base URL
    pub telegram_api_url: String,

    /// Fixed sleep between poll cycles (default: 600s)
    pub retry_time: Duration,

    /// Optional timeout for the review API request. Unset means no timeout.
    pub request_timeout: Option<Duration>,
}

impl BotConfig {
    /// Load configuration from a `.env` file (if any) and the process environment.
    pub fn from_env() -> Result<Self, BotError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// All three secrets must be present and non-empty; the error names every missing one.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BotError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let practicum_token = secret("TOKEN");
        let telegram_token = secret("TOKEN_TELEGRAM_BOT");
        let telegram_chat_id = secret("CHAT_ID");

        let (Some(practicum_token), Some(telegram_token), Some(telegram_chat_id)) =
            (practicum_token.clone(), telegram_token.clone(), telegram_chat_id.clone())
        else {
            let missing: Vec<&str> = [
                ("TOKEN", practicum_token.is_none()),
                ("TOKEN_TELEGRAM_BOT", telegram_token.is_none()),
                ("CHAT_ID", telegram_chat_id.is_none()),
            ]
            .into_iter()
            .filter_map(|(key, absent)| absent.then_some(key))
            .collect();
            return Err(BotError::Config(format!(
                "missing required environment variables: {}",
                missing.join(", ")
            )));
        };

        let retry_secs = parse_u64(&lookup, "RETRY_TIME")?.unwrap_or(DEFAULT_RETRY_TIME_SECS);
        if retry_secs == 0 {
            return Err(BotError::Config("RETRY_TIME must be greater than zero".to_string()));
        }
        let request_timeout =
            parse_u64(&lookup, "PRACTICUM_REQUEST_TIMEOUT_SECS")?.map(Duration::from_secs);

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            endpoint: lookup("PRACTICUM_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            telegram_api_url: lookup("TELEGRAM_API_URL")
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string()),
            retry_time: Duration::from_secs(retry_secs),
            request_timeout,
        })
    }
}

fn parse_u64<F>(lookup: &F, key: &str) -> Result<Option<u64>, BotError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|_| BotError::Config(format!("{key} must be a valid u64")))
        })
        .transpose()
}
