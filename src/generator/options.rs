use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_PARTITION_SIZE: usize = 4096;

/// Ordering among shapes with equal counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TieBreak {
    /// Order in which the structural class was first absorbed.
    #[default]
    FirstSeen,
    /// Ascending placeholder form of the shape (`0{2,2}` < `A0` < `a0`).
    Canonical,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub tie_break: TieBreak,
    pub verify_coverage: bool,
    pub partition_size: usize,
    pub parallel: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            tie_break: TieBreak::default(),
            verify_coverage: false,
            partition_size: DEFAULT_PARTITION_SIZE,
            parallel: true,
        }
    }
}

impl GeneratorOptions {
    pub fn builder() -> GeneratorOptionsBuilder {
        GeneratorOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), GeneratorConfigError> {
        if self.partition_size == 0 {
            return Err(GeneratorConfigError::PartitionSizeInvalid { provided: 0 });
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct GeneratorOptionsBuilder {
    options: GeneratorOptions,
}

impl GeneratorOptionsBuilder {
    pub fn tie_break(mut self, value: TieBreak) -> Self {
        self.options.tie_break = value;
        self
    }

    pub fn verify_coverage(mut self, value: bool) -> Self {
        self.options.verify_coverage = value;
        self
    }

    pub fn partition_size(mut self, value: usize) -> Self {
        self.options.partition_size = value;
        self
    }

    pub fn parallel(mut self, value: bool) -> Self {
        self.options.parallel = value;
        self
    }

    pub fn build(self) -> Result<GeneratorOptions, GeneratorConfigError> {
        let options = self.options;
        options.validate()?;
        Ok(options)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorConfigError {
    #[error("partition_size must be at least 1 (got {provided})")]
    PartitionSizeInvalid { provided: usize },
}
