// ABOUTME: Error types for the slider application
// ABOUTME: Provides structured error handling for each stage of the pipeline

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SliderError {
    #[error("Failed to read file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Slide list not found: {0}")]
    SlideListNotFound(PathBuf),

    #[error("Slide not found: {0}")]
    SlideNotFound(PathBuf),

    #[error("Unrecognized slide type: {0}")]
    UnrecognizedType(PathBuf),

    #[error("No markdown converter available for: {0}")]
    ConverterUnavailable(PathBuf),

    #[error("Malformed markup in {path}: {message}")]
    MalformedMarkup { path: PathBuf, message: String },

    #[error("Duplicate slide name: {0}")]
    DuplicateIdentifier(String),

    #[error("Input validation error: {0}")]
    ValidationError(String),
}

// Implement conversion from anyhow::Error to our SliderError
impl From<anyhow::Error> for SliderError {
    fn from(err: anyhow::Error) -> Self {
        SliderError::ValidationError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SliderError>;
