use thiserror::Error;

/// Everything that can go wrong between a raw request and a solution.
#[derive(Debug, Error)]
pub enum Error {
    /// A feedback row was not exactly five tiles.
    #[error("feedback row has {0} tiles, expected 5")]
    RowLength(usize),

    /// A tile letter was not a single ASCII alphabetic character.
    #[error("invalid tile letter {0:?}")]
    BadLetter(String),

    /// A color code outside green/yellow/gray.
    #[error("unknown feedback color {0:?}")]
    BadColor(String),

    /// The request body was not valid JSON for the expected shape.
    #[error("malformed request: {0}")]
    Json(#[from] serde_json::Error),

    /// The word list could not be read. Fatal at startup.
    #[error("failed to load word list: {0}")]
    Wordbank(#[from] std::io::Error),
}
