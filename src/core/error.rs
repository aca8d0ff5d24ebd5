use thiserror::Error;

/// Errors surfaced to callers. Everything else (truncated payloads,
/// discriminator mismatches, out-of-range indices) is swallowed by the
/// decoder fallback chain and at most logged.
#[derive(Debug, Error)]
pub enum ParserError {
    #[error("malformed transaction: {0}")]
    MalformedTransaction(String),
    #[error("no valid swaps found")]
    NoSwaps,
}

impl ParserError {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedTransaction(message.into())
    }
}
