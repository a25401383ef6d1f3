//! Design-token normalization and CSS-first variable rendering.
//!
//! This crate turns a Tailwind-style configuration tree into a normalized
//! [`Theme`] and renders it as CSS variable stylesheets plus a Markdown
//! conversion report. The pipeline has two stages:
//!
//! 1. [`Normalizer`] walks the `theme` and `theme.extend` sections,
//!    sanitizes keys, validates values, and records every conversion and
//!    skip in a [`ConversionReport`].
//! 2. [`Renderer`] emits the stylesheets: a main sheet with `:root`
//!    variables and `@theme inline` bindings, optional dark mode
//!    overrides, and keyframe/animation rules.
//!
//! # Example
//!
//! ```rust
//! use retheme_tokens::{ConversionOptions, Normalizer, Renderer};
//! use serde_json::json;
//!
//! let config = json!({
//!     "theme": {
//!         "extend": {
//!             "colors": {"primary": "#3b82f6"},
//!             "spacing": {"18": "4.5rem"}
//!         }
//!     }
//! });
//!
//! let outcome = Normalizer::new().parse(&config)?;
//! let result = Renderer::new().generate(&outcome.theme, &ConversionOptions::default());
//!
//! assert!(result.css.contains("--color-primary: #3b82f6;"));
//! assert!(result.css.contains("--space-18: 4.5rem;"));
//! # Ok::<(), retheme_tokens::NormalizeError>(())
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod normalize;
pub mod render;
pub mod report;
pub mod theme;

pub use config::TokenLeaf;
pub use error::{NormalizeError, ReportError};
pub use normalize::{Normalizer, ParseOutcome};
pub use render::{ConversionOptions, ConversionResult, Renderer};
pub use report::{ConversionReport, ConvertedTokens};
pub use theme::{FontSize, KeyframeSteps, Theme};
