use crate::generator::GeneratorConfigError;
use crate::render::RenderError;
use crate::shape::ShapeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error(transparent)]
    Config(#[from] GeneratorConfigError),
    #[error(transparent)]
    Shape(#[from] ShapeError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(
        "inferred patterns do not cover their inputs: {} unmatched inputs, {} unmatched patterns",
        .unmatched_inputs.len(),
        .unmatched_patterns.len()
    )]
    CoverageViolation {
        unmatched_inputs: Vec<String>,
        unmatched_patterns: Vec<String>,
    },
}

pub type GeneratorResult<T> = Result<T, GeneratorError>;
