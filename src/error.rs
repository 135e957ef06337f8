use std::fmt::Display;

use thiserror::Error;

/// Failure taxonomy for a generation run.
///
/// Every runtime error is fatal to the whole run; the only retried outcome
/// (a candidate landing in a non-allowed shard) is not an error at all and
/// never surfaces here.
#[derive(Debug, Error)]
pub enum WalletGenError {
    #[error("invalid request: {0}")]
    Validation(String),
    #[error("wallet generation failed: {0}")]
    Generation(String),
    #[error("shard lookup request failed: {0}")]
    Network(String),
    #[error("malformed shard lookup response: {0}")]
    Parse(String),
    #[error("wallet file operation failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("no wallet matched shards {shards:?} after {attempts} attempts")]
    AttemptsExhausted { shards: Vec<u32>, attempts: u32 },
}

impl WalletGenError {
    pub fn validation(msg: impl Display) -> Self {
        Self::Validation(msg.to_string())
    }

    pub fn generation(msg: impl Display) -> Self {
        Self::Generation(msg.to_string())
    }

    pub fn network(msg: impl Display) -> Self {
        Self::Network(msg.to_string())
    }

    pub fn parse(msg: impl Display) -> Self {
        Self::Parse(msg.to_string())
    }
}
