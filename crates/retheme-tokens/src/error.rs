//! Error types for the token pipeline.
//!
//! This module provides [`NormalizeError`] for configuration normalization
//! failures and [`ReportError`] for Markdown report rendering failures. Both
//! abstract over internal details, providing a stable public API.

use std::fmt;

/// Error type for configuration normalization.
#[derive(Debug)]
pub enum NormalizeError {
    /// The top level of the configuration is not a mapping.
    InvalidConfig(String),
}

impl fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizeError::InvalidConfig(msg) => write!(f, "invalid config: {}", msg),
        }
    }
}

impl std::error::Error for NormalizeError {}

/// Error type for Markdown report rendering.
#[derive(Debug)]
pub enum ReportError {
    /// Template rendering failure.
    TemplateError(String),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::TemplateError(msg) => write!(f, "report template error: {}", msg),
        }
    }
}

impl std::error::Error for ReportError {}

impl From<minijinja::Error> for ReportError {
    fn from(err: minijinja::Error) -> Self {
        ReportError::TemplateError(err.to_string())
    }
}
