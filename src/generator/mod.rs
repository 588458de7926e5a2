mod options;
mod service;

pub use options::{
    DEFAULT_PARTITION_SIZE, GeneratorConfigError, GeneratorOptions, GeneratorOptionsBuilder,
    TieBreak,
};
pub use service::PatternGenerator;
