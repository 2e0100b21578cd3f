//! The `error` module defines the error type used within `subledger`.
//!
//! The subscription registry itself never fails; errors only surface at the
//! edges: decoding snapshots, loading configuration and pushing deliveries
//! into a subscriber whose receiving side has gone away.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("subscription id must contain at least a contract")]
    EmptySsid,

    #[error("subscriber {0} is no longer receiving")]
    SubscriberClosed(String),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
