use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RiscoError {
    #[error("aggregation produced no clients: the input record set is empty")]
    EmptyResult,

    #[error("score {score} matched no configured risk band")]
    UnclassifiedScore { score: Decimal },

    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    #[error("invalid band configuration: {0}")]
    InvalidBandConfig(String),

    #[error("no aggregate table available — compute or load one first")]
    MissingTable,
}
