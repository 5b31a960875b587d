pub mod aggregate;
pub mod classifier;
pub mod error;
pub mod summary;
pub mod types;

pub use classifier::{RiskBand, RiskBands};
pub use error::RiscoError;
pub use types::*;

/// Standard result type for all risco operations
pub type RiscoResult<T> = Result<T, RiscoError>;
