use regex::Regex;

use super::{RenderResult, compile, render};
use crate::aggregate::ShapeEntry;
use crate::shape::Shape;

/// A ranked output: the shape, how many distinct inputs fell into its class,
/// the rendered source and its compiled full-match form.
#[derive(Debug, Clone)]
pub struct InferredPattern {
    shape: Shape,
    count: usize,
    source: String,
    regex: Regex,
}

impl InferredPattern {
    pub fn from_entry(entry: ShapeEntry) -> RenderResult<Self> {
        let source = render(&entry.shape);
        let regex = compile(&source)?;
        Ok(Self {
            shape: entry.shape,
            count: entry.count,
            source,
            regex,
        })
    }

    /// The rendered pattern, unanchored.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_full_match(&self, s: &str) -> bool {
        self.regex.is_match(s)
    }
}

impl PartialEq for InferredPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.count == other.count
    }
}

impl Eq for InferredPattern {}

impl std::fmt::Display for InferredPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}
