// ABOUTME: Utility functions for the slider application
// ABOUTME: Provides path validation and output-name helpers

use crate::errors::{Result, SliderError};
use std::path::Path;

/// Validate that a slide source file exists
pub fn validate_file_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(SliderError::SlideNotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(SliderError::ValidationError(format!(
            "Path is not a file: {:?}",
            path
        )));
    }
    Ok(())
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    } else if !path.is_dir() {
        return Err(SliderError::ValidationError(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    }
    Ok(())
}

/// Ensure a file's parent directory exists
pub fn ensure_parent_directory_exists(file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory_exists(parent)?;
        }
    }
    Ok(())
}

/// Rewrite a slide identifier to the name of its HTML output: same path,
/// extension replaced with `.html`. Non-HTML neighbors are addressed this
/// way because they will have been normalized by the time links are live.
pub fn html_counterpart(identifier: &str) -> String {
    Path::new(identifier)
        .with_extension("html")
        .display()
        .to_string()
}

/// Output name for the numbered naming scheme: `{prefix}_{NNN}.html`,
/// 1-based, zero-padded to three digits. `position` is the 0-based index
/// in the slide sequence.
pub fn numbered_name(prefix: &str, position: usize) -> String {
    format!("{}_{:03}.html", prefix, position + 1)
}

/// File stem used for the duplicate-identifier precheck.
pub fn identifier_stem(identifier: &str) -> String {
    Path::new(identifier)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| identifier.to_string())
}
