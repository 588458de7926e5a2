use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("rendered pattern '{pattern}' failed to compile: {error}")]
    Compile { pattern: String, error: String },
}

pub type RenderResult<T> = Result<T, RenderError>;
