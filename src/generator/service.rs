use std::collections::BTreeSet;
use std::time::Instant;

use crate::aggregate::{ShapeCounter, ShapeEntry};
use crate::check::verify_coverage;
use crate::errors::{GeneratorError, GeneratorResult};
use crate::generator::GeneratorOptions;
use crate::render::InferredPattern;
use crate::shape::{ShapeResult, build_shape};

#[derive(Debug, Clone, Default)]
pub struct PatternGenerator {
    options: GeneratorOptions,
}

impl PatternGenerator {
    pub fn new(options: Option<GeneratorOptions>) -> Self {
        Self {
            options: options.unwrap_or_default(),
        }
    }

    /// Infers a frequency-ranked list of patterns; every input fully matches at least one
    /// of them and each of them fully matches at least one input.
    #[tracing::instrument(skip_all)]
    pub fn infer<I, S>(&self, items: I) -> GeneratorResult<Vec<InferredPattern>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let items: Vec<S> = items.into_iter().collect();
        let entries = self.infer_shapes(items.iter().map(|s| s.as_ref()))?;

        let patterns = entries
            .into_iter()
            .map(InferredPattern::from_entry)
            .collect::<Result<Vec<_>, _>>()?;

        if self.options.verify_coverage {
            let report = verify_coverage(items.iter().map(|s| s.as_ref()), &patterns);
            if !report.is_complete() {
                tracing::warn!(
                    unmatched_inputs = report.unmatched_inputs.len() as u64,
                    unmatched_patterns = report.unmatched_patterns.len() as u64,
                    "inferred patterns do not cover their inputs"
                );
                return Err(GeneratorError::CoverageViolation {
                    unmatched_inputs: report.unmatched_inputs,
                    unmatched_patterns: report.unmatched_patterns,
                });
            }
        }

        Ok(patterns)
    }

    /// Same as [`PatternGenerator::infer`] but stops before rendering.
    #[tracing::instrument(skip_all)]
    pub fn infer_shapes<I, S>(&self, items: I) -> GeneratorResult<Vec<ShapeEntry>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.options.validate()?;
        let started = Instant::now();

        let items: Vec<S> = items.into_iter().collect();
        let unique: BTreeSet<&str> = items.iter().map(|s| s.as_ref()).collect();
        if unique.is_empty() {
            return Ok(Vec::new());
        }

        // descending lexicographic visit order fixes first-seen ties
        let ordered: Vec<&str> = unique.iter().rev().copied().collect();
        let counter = self.absorb_all(&ordered)?;

        tracing::event!(
            tracing::Level::DEBUG,
            operation = "infer",
            inputs = items.len() as u64,
            distinct_inputs = ordered.len() as u64,
            classes = counter.len() as u64,
            widenings = counter.metrics().widenings as u64,
            elapsed_us = started.elapsed().as_micros() as u64
        );

        Ok(counter.ranked_entries(self.options.tie_break))
    }

    fn absorb_all(&self, ordered: &[&str]) -> ShapeResult<ShapeCounter> {
        let size = self.options.partition_size;
        if ordered.len() <= size {
            return absorb_partition(ordered);
        }

        let partitions = self.absorb_partitions(ordered, size)?;
        tracing::event!(tracing::Level::TRACE, operation = "reduce", partitions = partitions.len() as u64);

        let mut merged = ShapeCounter::new();
        for partition in partitions {
            merged.merge(partition)?;
        }
        Ok(merged)
    }

    #[cfg(feature = "rayon")]
    fn absorb_partitions(&self, ordered: &[&str], size: usize) -> ShapeResult<Vec<ShapeCounter>> {
        if self.options.parallel {
            use rayon::prelude::*;

            return ordered.par_chunks(size).map(absorb_partition).collect();
        }
        ordered.chunks(size).map(absorb_partition).collect()
    }

    #[cfg(not(feature = "rayon"))]
    fn absorb_partitions(&self, ordered: &[&str], size: usize) -> ShapeResult<Vec<ShapeCounter>> {
        ordered.chunks(size).map(absorb_partition).collect()
    }
}

fn absorb_partition(items: &[&str]) -> ShapeResult<ShapeCounter> {
    let mut counter = ShapeCounter::new();
    for item in items {
        counter.absorb(build_shape(item))?;
    }
    Ok(counter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::TieBreak;

    fn sources(patterns: &[InferredPattern]) -> Vec<String> {
        patterns.iter().map(|p| p.as_str().to_string()).collect()
    }

    #[test]
    fn partitioned_inference_matches_single_counter() {
        let items: Vec<String> = (0..200)
            .map(|i| match i % 4 {
                0 => format!("user{i}"),
                1 => format!("ID-{i}"),
                2 => format!("{i}.log"),
                _ => format!("x{}", "a".repeat(i % 7)),
            })
            .collect();

        let whole = PatternGenerator::new(None).infer(&items).expect("infer");
        let options = GeneratorOptions::builder()
            .partition_size(7)
            .build()
            .expect("options");
        let split = PatternGenerator::new(Some(options))
            .infer(&items)
            .expect("infer partitioned");

        assert_eq!(sources(&whole), sources(&split));
        assert_eq!(whole, split);
    }

    #[test]
    fn sequential_partitions_match_parallel_ones() {
        let items: Vec<String> = (0..120).map(|i| format!("k{}-{}", i % 9, i)).collect();
        let build = |parallel| {
            GeneratorOptions::builder()
                .partition_size(5)
                .parallel(parallel)
                .tie_break(TieBreak::Canonical)
                .build()
                .expect("options")
        };

        let a = PatternGenerator::new(Some(build(true)))
            .infer(&items)
            .expect("infer");
        let b = PatternGenerator::new(Some(build(false)))
            .infer(&items)
            .expect("infer");
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_options_are_rejected_at_infer_time() {
        let options = GeneratorOptions {
            partition_size: 0,
            ..GeneratorOptions::default()
        };
        let err = PatternGenerator::new(Some(options))
            .infer(["a"])
            .expect_err("partition size 0 must fail");
        assert!(matches!(err, GeneratorError::Config(_)));
    }
}
