//! Bot credentials and destination.

use crate::{Result, TelegramError};
use std::env;
use std::fmt;

/// Environment variable holding the bot token.
pub const TOKEN_ENV: &str = "TG_BOT_TOKEN_CROSSINGS";

/// Environment variable holding the destination chat id.
pub const CHAT_ID_ENV: &str = "TELEGRAM_CHAT_ID";

/// Where and as whom alerts are sent.
#[derive(Clone, PartialEq, Eq)]
pub struct TelegramConfig {
    /// Bot token issued by BotFather.
    pub token: String,
    /// Destination chat or channel id, e.g. `-4240308218`.
    pub chat_id: String,
}

impl TelegramConfig {
    /// Create a config from explicit values.
    #[must_use]
    pub fn new(token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            chat_id: chat_id.into(),
        }
    }

    /// Read [`TOKEN_ENV`] and [`CHAT_ID_ENV`], loading `.env` if present.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first variable that is unset or empty.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve from any key lookup, so overrides can be layered on top of the environment.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first key that is missing or empty.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |key: &str| lookup(key).filter(|v: &String| !v.trim().is_empty());
        let token = non_empty(TOKEN_ENV).ok_or(TelegramError::MissingToken(TOKEN_ENV))?;
        let chat_id = non_empty(CHAT_ID_ENV).ok_or(TelegramError::MissingChatId(CHAT_ID_ENV))?;
        Ok(Self::new(token, chat_id))
    }
}

impl fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_from_lookup() {
        let config =
            TelegramConfig::from_lookup(lookup(&[(TOKEN_ENV, "abc"), (CHAT_ID_ENV, "-42")])).unwrap();
        assert_eq!(config, TelegramConfig::new("abc", "-42"));
    }

    #[test]
    fn test_missing_token() {
        let err = TelegramConfig::from_lookup(lookup(&[(CHAT_ID_ENV, "-42")])).unwrap_err();
        assert!(matches!(err, TelegramError::MissingToken(TOKEN_ENV)));
    }

    #[test]
    fn test_empty_chat_id_is_missing() {
        let err =
            TelegramConfig::from_lookup(lookup(&[(TOKEN_ENV, "abc"), (CHAT_ID_ENV, "  ")])).unwrap_err();
        assert!(matches!(err, TelegramError::MissingChatId(_)));
    }

    #[test]
    fn test_debug_redacts_token() {
        let debug = format!("{:?}", TelegramConfig::new("secret-token", "-1"));
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("-1"));
    }
}
