//! Alert wording.

use crate::signals::CrossingPair;
use serde::Serialize;

/// Text and chart captions sent when a live crossunder fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertMessage {
    /// Opening text message.
    pub text: String,
    /// Captions for the time-series, average-returns and counts charts, in that order.
    pub captions: [String; 3],
}

impl AlertMessage {
    /// Wording for a live crossunder of `pair` on `symbol`.
    pub fn new(symbol: &str, pair: &CrossingPair) -> Self {
        match *pair {
            CrossingPair::PriceVsMa { window } => Self {
                text: format!("Attention, {symbol} price went below {window}D MA!"),
                captions: [
                    format!("This is a timeseries chart of {symbol} price and {window}D MA 😉"),
                    format!(
                        "These are the average returns after {symbol} goes below {window}D MA 😉"
                    ),
                    format!(
                        "This is the number of positive and negative returns after {symbol} goes below {window}D MA 😉"
                    ),
                ],
            },
            CrossingPair::MaVsMa { fast, slow } => Self {
                text: format!("Attention, {symbol} {fast} went below {slow}D MA!"),
                captions: [
                    format!("This is a timeseries chart of {symbol} {fast} and {slow}D MA 😉"),
                    format!(
                        "These are the average returns after {symbol} {fast} goes below {slow}D MA 😉"
                    ),
                    format!(
                        "This is the number of positive and negative returns after {symbol} {fast} goes below {slow}D MA 😉"
                    ),
                ],
            },
        }
    }
}
