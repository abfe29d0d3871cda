//! Telegram Bot API notifier for Crossings.
//!
//! Sends alert texts and chart images to one chat through the
//! [Bot API](https://core.telegram.org/bots/api). The bot token and the chat
//! id are explicit configuration; nothing is hardcoded.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crossings_telegram::{TelegramClient, TelegramConfig};
//! use crossings_traits::Notifier;
//!
//! let client = TelegramClient::new(TelegramConfig::from_env()?);
//! client.send_message("Attention, BTCUSD price went below 200D MA!").await?;
//! client.send_photo("Price and 200D MA", Path::new("output_figures/BTCUSD_close_200dma_plot.png")).await?;
//! ```
//!
//! # Environment Variables
//!
//! ```bash
//! TG_BOT_TOKEN_CROSSINGS=123456:ABC...
//! TELEGRAM_CHAT_ID=-1001234567890
//! ```

mod client;
mod config;
mod error;

pub use client::TelegramClient;
pub use config::{CHAT_ID_ENV, TOKEN_ENV, TelegramConfig};
pub use error::TelegramError;

/// Result type for Telegram operations.
pub type Result<T> = std::result::Result<T, TelegramError>;
