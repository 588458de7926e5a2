use super::{ClassSymbol, ShapeError, ShapeResult};
use serde::Serialize;
use std::fmt;

/// One run of a single character class, occurring between `min` and `max` times.
///
/// Bounds are checked on construction (`1 <= min <= max`) and never mutated afterwards;
/// widening yields a fresh token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RunToken {
    symbol: ClassSymbol,
    min: usize,
    max: usize,
}

impl RunToken {
    pub fn new(symbol: ClassSymbol, min: usize, max: usize) -> ShapeResult<Self> {
        if min == 0 {
            return Err(ShapeError::ZeroMinimum { symbol });
        }
        if max < min {
            return Err(ShapeError::InvertedBounds { symbol, min, max });
        }
        Ok(Self { symbol, min, max })
    }

    /// A run observed exactly `len` times. `len` comes from a non-empty scan, so it is at least 1.
    pub(crate) fn exact(symbol: ClassSymbol, len: usize) -> Self {
        debug_assert!(len >= 1);
        Self {
            symbol,
            min: len,
            max: len,
        }
    }

    pub fn symbol(&self) -> ClassSymbol {
        self.symbol
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn is_singleton(&self) -> bool {
        self.min == 1 && self.max == 1
    }

    pub fn contains_len(&self, len: usize) -> bool {
        (self.min..=self.max).contains(&len)
    }

    pub fn same_symbol(&self, other: &RunToken) -> bool {
        self.symbol == other.symbol
    }

    /// Elementwise bound widening. Callers guarantee both tokens carry the same symbol.
    pub(crate) fn widen(&self, other: &RunToken) -> RunToken {
        debug_assert!(self.same_symbol(other));
        RunToken {
            symbol: self.symbol,
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

impl fmt::Display for RunToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol.placeholder())?;
        if !self.is_singleton() {
            write!(f, "{{{},{}}}", self.min, self.max)?;
        }
        Ok(())
    }
}
