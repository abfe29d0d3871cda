//! Telegram Bot API client implementation.

use crate::{Result, TelegramConfig, TelegramError};
use crossings_traits::Notifier;
use reqwest::{
    Client,
    multipart::{Form, Part},
};
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Base URL for the Bot API.
const TELEGRAM_BASE_URL: &str = "https://api.telegram.org";

/// Envelope every Bot API method answers with.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Telegram Bot API client bound to one destination chat.
#[derive(Debug, Clone)]
pub struct TelegramClient {
    client: Client,
    config: TelegramConfig,
    base_url: String,
}

impl TelegramClient {
    /// Create a client for the configured bot and chat.
    #[must_use]
    pub fn new(config: TelegramConfig) -> Self {
        Self {
            client: Client::new(),
            config,
            base_url: TELEGRAM_BASE_URL.to_string(),
        }
    }

    /// Point the client at a self-hosted Bot API server instead of
    /// `api.telegram.org`.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Create a client from the environment. See [`TelegramConfig::from_env`].
    ///
    /// # Errors
    ///
    /// Returns an error if the token or chat id is not configured.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(TelegramConfig::from_env()?))
    }

    /// Destination chat id.
    pub fn chat_id(&self) -> &str {
        &self.config.chat_id
    }

    /// Build the URL of a Bot API method.
    fn url(&self, method: &str) -> String {
        format!("{}/bot{}/{method}", self.base_url, self.config.token)
    }

    /// Check the HTTP status and the `ok` flag of a Bot API answer.
    async fn check(response: reqwest::Response) -> Result<()> {
        let status = response.status();
        let text = response.text().await?;
        let parsed: Option<ApiResponse> = serde_json::from_str(&text).ok();

        match parsed {
            Some(ApiResponse { ok: true, .. }) if status.is_success() => Ok(()),
            Some(ApiResponse {
                description: Some(d),
                ..
            }) => Err(TelegramError::Api(format!("HTTP {status}: {d}"))),
            _ => Err(TelegramError::Api(format!("HTTP {status}: {text}"))),
        }
    }

    /// Send a text message to the configured chat.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn send_text(&self, text: &str) -> Result<()> {
        debug!(chat_id = %self.config.chat_id, "sendMessage");
        let response = self
            .client
            .post(self.url("sendMessage"))
            .form(&[("chat_id", self.config.chat_id.as_str()), ("text", text)])
            .send()
            .await?;
        Self::check(response).await
    }

    /// Upload the image at `path` with a caption to the configured chat.
    ///
    /// # Errors
    ///
    /// Returns [`TelegramError::FileNotFound`] if the image does not exist,
    /// otherwise an error if reading, the request, or the API fails.
    pub async fn send_image(&self, caption: &str, path: &Path) -> Result<()> {
        let bytes = tokio::fs::read(path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => TelegramError::FileNotFound(path.to_path_buf()),
            _ => TelegramError::Read {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "chart.png".to_string());
        let photo = Part::bytes(bytes).file_name(file_name).mime_str("image/png")?;
        let form = Form::new()
            .text("chat_id", self.config.chat_id.clone())
            .text("caption", caption.to_string())
            .part("photo", photo);

        debug!(chat_id = %self.config.chat_id, path = %path.display(), "sendPhoto");
        let response = self
            .client
            .post(self.url("sendPhoto"))
            .multipart(form)
            .send()
            .await?;
        Self::check(response).await
    }
}

impl Notifier for TelegramClient {
    type Error = TelegramError;

    async fn send_message(&self, text: &str) -> Result<()> {
        self.send_text(text).await
    }

    async fn send_photo(&self, caption: &str, path: &Path) -> Result<()> {
        self.send_image(caption, path).await
    }
}
