//! Tailwind-style config conversion to CSS-first design tokens.
//!
//! This crate is the user-facing surface of the retheme pipeline: it loads
//! JSON or YAML configuration files, runs them through the core
//! normalization and rendering stages of [`retheme_tokens`], and exposes
//! the `retheme` command line tool.
//!
//! The core types are re-exported, so depending on `retheme` alone is
//! enough for programmatic use:
//!
//! ```rust
//! use retheme::{load_config, ConversionOptions, Normalizer, Renderer};
//!
//! let config = load_config(r##"{"theme": {"colors": {"ink": "#111827"}}}"##, None)?;
//! let outcome = Normalizer::new().parse(&config)?;
//! let result = Renderer::new().generate(&outcome.theme, &ConversionOptions::default());
//!
//! assert!(result.css.contains("--color-ink: #111827;"));
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod loader;

pub use cli::Cli;
pub use loader::{load_config, ConfigError, ConfigFormat};

pub use retheme_tokens::{
    ConversionOptions, ConversionReport, ConversionResult, ConvertedTokens, FontSize,
    KeyframeSteps, NormalizeError, Normalizer, ParseOutcome, Renderer, ReportError, Theme,
    TokenLeaf,
};
