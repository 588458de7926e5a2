mod builder;
mod class;
mod equivalence;
mod error;
mod token;

pub use builder::build_shape;
pub use class::{ClassSymbol, classify};
pub use equivalence::{ShapeKey, exactly_equal, structurally_equal};
pub use error::{ShapeError, ShapeResult};
pub use token::RunToken;

use serde::Serialize;
use smallvec::SmallVec;
use std::fmt;

pub(crate) type TokenList = SmallVec<[RunToken; 8]>;

/// Ordered run-length description of one string's character classes.
///
/// Derived `PartialEq` is exact equality (symbols and bounds). Use [`structurally_equal`]
/// or [`Shape::key`] when bounds should be ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Shape {
    tokens: TokenList,
}

impl Shape {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = RunToken>,
    {
        Self {
            tokens: tokens.into_iter().collect(),
        }
    }

    pub fn push(&mut self, token: RunToken) {
        self.tokens.push(token);
    }

    pub fn tokens(&self) -> &[RunToken] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn key(&self) -> ShapeKey {
        ShapeKey::of(self)
    }

    /// Combines two structurally equal shapes by widening every position's bounds.
    pub fn widen(&self, other: &Shape) -> ShapeResult<Shape> {
        if !structurally_equal(self, other) {
            return Err(ShapeError::StructuralMismatch {
                left: self.to_string(),
                right: other.to_string(),
            });
        }

        Ok(Shape {
            tokens: self
                .tokens
                .iter()
                .zip(other.tokens.iter())
                .map(|(a, b)| a.widen(b))
                .collect(),
        })
    }

    /// True when `other` already fits inside this shape's bounds.
    pub fn covers(&self, other: &Shape) -> bool {
        structurally_equal(self, other)
            && self
                .tokens
                .iter()
                .zip(other.tokens.iter())
                .all(|(a, b)| a.min() <= b.min() && b.max() <= a.max())
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            write!(f, "{token}")?;
        }
        Ok(())
    }
}
