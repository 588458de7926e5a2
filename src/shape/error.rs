use super::ClassSymbol;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShapeError {
    #[error("run of {symbol:?} must occur at least once (got min 0)")]
    ZeroMinimum { symbol: ClassSymbol },
    #[error("run of {symbol:?} has inverted bounds: min {min} > max {max}")]
    InvertedBounds {
        symbol: ClassSymbol,
        min: usize,
        max: usize,
    },
    #[error("shapes '{left}' and '{right}' are not structurally equal and cannot be widened")]
    StructuralMismatch { left: String, right: String },
}

pub type ShapeResult<T> = Result<T, ShapeError>;
