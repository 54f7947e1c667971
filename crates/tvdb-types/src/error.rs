use thiserror::Error;

/// Errors produced while constructing value types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid date {input:?}: {reason}")]
    InvalidDate { input: String, reason: String },

    #[error("score out of range: expected 0..={max}, got {value}")]
    ScoreOutOfRange { value: i64, max: u8 },
}
