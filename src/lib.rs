//! Infers a small set of human-readable regular expressions that together match a
//! collection of example strings.
//!
//! Each string is reduced to a [`Shape`]: runs of digits, lowercase letters, uppercase
//! letters or a repeated literal character, each with a run length. Shapes with the same
//! run sequence are merged by widening their length bounds, counted, ranked by frequency
//! and rendered as patterns.
//!
//! ```
//! let patterns = pattern_generator_rs::infer(["tree", "oak"])?;
//! assert_eq!(patterns.len(), 1);
//! assert_eq!(patterns[0].as_str(), "[a-z]{3,4}");
//! assert!(patterns[0].is_full_match("pine"));
//! # Ok::<(), pattern_generator_rs::GeneratorError>(())
//! ```

pub mod aggregate;
pub mod check;
pub mod errors;
pub mod generator;
pub mod render;
pub mod shape;

pub use aggregate::{ShapeCounter, ShapeEntry};
pub use check::{CoverageReport, verify_coverage};
pub use errors::{GeneratorError, GeneratorResult};
pub use generator::{
    GeneratorConfigError, GeneratorOptions, GeneratorOptionsBuilder, PatternGenerator, TieBreak,
};
pub use render::{InferredPattern, render};
pub use shape::{ClassSymbol, RunToken, Shape, ShapeKey, build_shape, classify};

/// Runs inference with [`GeneratorOptions::default`].
pub fn infer<I, S>(items: I) -> GeneratorResult<Vec<InferredPattern>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    PatternGenerator::new(None).infer(items)
}
