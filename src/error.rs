//! Errors for caller-side guards around the selector

use thiserror::Error;

/// Reasons a chat action is refused. The selector itself never fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AskError {
    /// Input was empty or whitespace only
    #[error("message is empty")]
    EmptyInput,

    /// Language code not in the language table
    #[error("unknown language '{0}' (try one of: {1})")]
    UnknownLanguage(String, String),

    /// Sample question index out of range (1-based)
    #[error("no sample question #{0}; there are {1}")]
    UnknownSample(usize, usize),
}
