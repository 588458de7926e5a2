use super::{ClassSymbol, Shape};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// Same length and the same symbol at every position; bounds are ignored.
pub fn structurally_equal(a: &Shape, b: &Shape) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.tokens()
        .iter()
        .zip(b.tokens().iter())
        .all(|(ta, tb)| ta.same_symbol(tb))
}

/// Structurally equal and every position's `(min, max)` matches.
pub fn exactly_equal(a: &Shape, b: &Shape) -> bool {
    structurally_equal(a, b)
        && a
            .tokens()
            .iter()
            .zip(b.tokens().iter())
            .all(|(ta, tb)| ta.min() == tb.min() && ta.max() == tb.max())
}

/// A shape with its bounds stripped. Two shapes share a key iff they are structurally equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShapeKey {
    symbols: SmallVec<[ClassSymbol; 8]>,
}

impl ShapeKey {
    pub fn of(shape: &Shape) -> Self {
        Self {
            symbols: shape.tokens().iter().map(|t| t.symbol()).collect(),
        }
    }
}

impl fmt::Display for ShapeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{}", symbol.placeholder())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::build_shape;

    #[test]
    fn different_bounds_are_structurally_but_not_exactly_equal() {
        let tree = build_shape("tree");
        let oak = build_shape("oak");
        assert!(structurally_equal(&tree, &oak));
        assert!(!exactly_equal(&tree, &oak));
        assert_eq!(tree.key(), oak.key());
    }

    #[test]
    fn prefix_shape_is_never_equivalent() {
        let short = build_shape("ab");
        let long = build_shape("ab1");
        assert!(!structurally_equal(&short, &long));
        assert_ne!(short.key(), long.key());
    }

    #[test]
    fn distinct_literals_are_distinct_classes() {
        assert!(!structurally_equal(&build_shape("a-1"), &build_shape("a_1")));
    }

    #[test]
    fn exact_repeat_is_exactly_equal() {
        assert!(exactly_equal(&build_shape("AB-12"), &build_shape("XY-99")));
    }

    #[test]
    fn key_display_uses_placeholders() {
        assert_eq!(build_shape("Item-42").key().to_string(), "Aa-0");
    }
}
