//! Custom error types for the bot

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
        retry_count: u32,
    },

    /// Transient quote failure: the router call reverted or the transport
    /// failed. Callers treat this as "no quote available" for the cycle.
    #[error("Quote unavailable on {router}: {message}")]
    Quote { router: String, message: String },
}

pub type BotResult<T> = Result<T, BotError>;
