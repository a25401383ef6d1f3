//! Conversion reporting.
//!
//! [`ConversionReport`] records what a pipeline stage converted, what it
//! skipped and why, and any warnings. Reports serialize to camelCase JSON
//! for embedding hosts. The Markdown summary is rendered through a
//! compiled-once template.

use std::collections::BTreeMap;

use minijinja::Environment;
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::ReportError;
use crate::theme::Theme;

/// Converted token labels, one list per category.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertedTokens {
    pub colors: Vec<String>,
    pub fonts: Vec<String>,
    pub font_sizes: Vec<String>,
    pub spacing: Vec<String>,
    pub border_radius: Vec<String>,
    pub keyframes: Vec<String>,
    pub animations: Vec<String>,
    pub custom: Vec<String>,
}

/// What a pipeline stage converted and skipped.
///
/// Skips are keyed by reason, each holding the `category.key` paths that
/// were dropped for that reason.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConversionReport {
    pub converted: ConvertedTokens,
    pub skipped: BTreeMap<String, Vec<String>>,
    pub warnings: Vec<String>,
}

impl ConversionReport {
    /// Records a skipped entry under its reason.
    pub fn record_skip(&mut self, category: &str, key: &str, reason: &str) {
        self.skipped
            .entry(reason.to_string())
            .or_default()
            .push(format!("{}.{}", category, key));
    }

    /// Total number of skipped entries across all reasons.
    pub fn skipped_count(&self) -> usize {
        self.skipped.values().map(Vec::len).sum()
    }

    /// Folds a later stage's report into this one. The later stage's
    /// converted lists replace these, since it saw the final theme;
    /// skips and warnings accumulate.
    pub fn merge(mut self, later: ConversionReport) -> ConversionReport {
        self.converted = later.converted;
        for (reason, mut keys) in later.skipped {
            self.skipped.entry(reason).or_default().append(&mut keys);
        }
        self.warnings.extend(later.warnings);
        self
    }
}

const SUMMARY_TEMPLATE: &str = "# Token Conversion Report\n\n**Total converted:** {{ total }} tokens\n\n{% for section in sections %}## {{ section.title }} ({{ section.entries | length }})\n{% for entry in section.entries %}- {{ entry }}\n{% endfor %}\n{% endfor %}";

static SUMMARY_ENV: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    // The template is a compile-time constant; a registration failure
    // surfaces as a lookup error on first render.
    let _ = env.add_template("summary", SUMMARY_TEMPLATE);
    env
});

#[derive(Serialize)]
struct SummarySection {
    title: &'static str,
    entries: Vec<String>,
}

#[derive(Serialize)]
struct SummaryContext {
    total: usize,
    sections: Vec<SummarySection>,
}

/// Renders the Markdown conversion summary for a theme. Only non-empty
/// categories get a section.
pub(crate) fn markdown_summary(theme: &Theme) -> Result<String, ReportError> {
    let mut sections = Vec::new();
    let mut push = |title: &'static str, entries: Vec<String>| {
        if !entries.is_empty() {
            sections.push(SummarySection { title, entries });
        }
    };

    push(
        "Colors",
        theme.colors().keys().map(|name| format!("--{}", name)).collect(),
    );
    push(
        "Font Families",
        theme.fonts().keys().map(|name| format!("--{}", name)).collect(),
    );
    push(
        "Font Sizes",
        theme
            .font_sizes()
            .keys()
            .map(|name| format!("--font-size-{}", name))
            .collect(),
    );
    push(
        "Spacing",
        theme.spacing().keys().map(|name| format!("--{}", name)).collect(),
    );
    push(
        "Border Radius",
        theme
            .border_radius()
            .keys()
            .map(|name| format!("--{}", name))
            .collect(),
    );
    push(
        "Keyframes",
        theme
            .keyframes()
            .keys()
            .map(|name| format!("@keyframes {}", name))
            .collect(),
    );
    push(
        "Animations",
        theme
            .animations()
            .keys()
            .map(|name| format!(".animate-{}", name))
            .collect(),
    );
    push(
        "Custom Properties",
        theme
            .custom()
            .iter()
            .flat_map(|(category, properties)| {
                properties
                    .keys()
                    .map(move |name| format!("--{}-{}", category, name))
            })
            .collect(),
    );

    let context = SummaryContext {
        total: theme.token_count(),
        sections,
    };
    let template = SUMMARY_ENV.get_template("summary")?;
    Ok(template.render(&context)?)
}
