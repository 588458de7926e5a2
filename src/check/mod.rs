use serde::Serialize;
use std::collections::BTreeSet;

use crate::render::InferredPattern;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CoverageReport {
    /// Inputs no pattern fully matches, in descending order.
    pub unmatched_inputs: Vec<String>,
    /// Pattern sources that matched none of the inputs, in ranked order.
    pub unmatched_patterns: Vec<String>,
}

impl CoverageReport {
    pub fn is_complete(&self) -> bool {
        self.unmatched_inputs.is_empty() && self.unmatched_patterns.is_empty()
    }
}

/// Checks that every input has a matching pattern and every pattern matches some input.
///
/// Each input is credited to the first pattern (in ranked order) that matches it.
#[tracing::instrument(level = "debug", skip_all, fields(patterns = patterns.len() as u64))]
pub fn verify_coverage<I, S>(items: I, patterns: &[InferredPattern]) -> CoverageReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let unique: BTreeSet<String> = items
        .into_iter()
        .map(|item| item.as_ref().to_owned())
        .collect();

    let mut matched = vec![false; patterns.len()];
    let mut unmatched_inputs = Vec::new();

    for item in unique.iter().rev() {
        match patterns.iter().position(|p| p.is_full_match(item)) {
            Some(idx) => matched[idx] = true,
            None => unmatched_inputs.push(item.clone()),
        }
    }

    let unmatched_patterns = patterns
        .iter()
        .zip(matched)
        .filter(|(_, hit)| !hit)
        .map(|(p, _)| p.as_str().to_owned())
        .collect();

    CoverageReport {
        unmatched_inputs,
        unmatched_patterns,
    }
}
