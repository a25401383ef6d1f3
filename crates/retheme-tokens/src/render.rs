//! CSS rendering.
//!
//! The [`Renderer`] turns a [`Theme`] into CSS-first variable stylesheets:
//! a main sheet declaring every token twice (once under `:root` for plain
//! CSS consumers, once under `@theme inline` bound to the root variables),
//! an optional dark override sheet, and an animations sheet that is either
//! appended to the main sheet or split out on request.

use crate::error::ReportError;
use crate::format::{
    format_animation_class, format_css_variable, format_keyframes, header, minify_css,
};
use crate::report::{self, ConversionReport};
use crate::theme::Theme;

/// Rendering options.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConversionOptions {
    /// Emit dark mode overrides for `-dark` color variants.
    pub dark: bool,
    /// Emit dark and animation CSS as separate blobs instead of
    /// appending them to the main sheet.
    pub split: bool,
    /// Minify every emitted blob.
    pub minify: bool,
}

/// The rendered stylesheets plus the renderer's view of the theme.
#[derive(Debug, Clone)]
pub struct ConversionResult {
    pub css: String,
    pub dark_css: Option<String>,
    pub animations_css: Option<String>,
    pub report: ConversionReport,
}

/// Renders themes into CSS.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Renderer
    }

    /// Renders a theme. Rendering never fails; tokens that cannot be
    /// expressed (non-scalar keyframe declarations) are dropped silently.
    pub fn generate(&self, theme: &Theme, options: &ConversionOptions) -> ConversionResult {
        let mut css = main_css(theme);
        let mut dark_css = options.dark.then(|| dark_overrides_css(theme));
        let mut animations_css = options.split.then(|| animations_css_block(theme));

        let has_animations = !theme.keyframes().is_empty() || !theme.animations().is_empty();
        if !options.split && has_animations {
            css.push('\n');
            css.push_str(&animations_css_block(theme));
        }
        if !options.split {
            if let Some(dark) = &dark_css {
                css.push('\n');
                css.push_str(dark);
            }
        }

        if options.minify {
            css = minify_css(&css);
            dark_css = dark_css.as_deref().map(minify_css);
            animations_css = animations_css.as_deref().map(minify_css);
        }

        ConversionResult {
            css,
            dark_css: if options.split { dark_css } else { None },
            animations_css,
            report: renderer_report(theme),
        }
    }

    /// Renders the Markdown conversion summary for a theme.
    pub fn generate_report(&self, theme: &Theme) -> Result<String, ReportError> {
        report::markdown_summary(theme)
    }
}

fn main_css(theme: &Theme) -> String {
    let mut css = String::from("@import \"tailwindcss\";\n\n");
    css.push_str(&header("Retheme Tokens - Tailwind v4 Design Tokens"));

    // Root variables for plain CSS consumers
    css.push_str(":root {\n");
    for_each_variable(theme, |name, value| {
        css.push_str(&format_css_variable(name, value));
        css.push('\n');
    });
    css.push_str("}\n\n");

    // The @theme directive binds token names to the root variables
    css.push_str("@theme inline {\n");
    for_each_variable(theme, |name, _| {
        css.push_str(&format_css_variable(name, &format!("var(--{})", name)));
        css.push('\n');
    });
    css.push_str("}\n");

    css
}

/// Visits every variable-shaped token in declaration order: colors, fonts,
/// font sizes (with line heights), spacing, radii, then custom groups.
fn for_each_variable(theme: &Theme, mut visit: impl FnMut(&str, &str)) {
    for (name, value) in theme.colors() {
        visit(name, value);
    }
    for (name, value) in theme.fonts() {
        visit(name, value);
    }
    for (name, size) in theme.font_sizes() {
        visit(&format!("font-size-{}", name), &size.size);
        if let Some(line_height) = &size.line_height {
            visit(&format!("line-height-{}", name), line_height);
        }
    }
    for (name, value) in theme.spacing() {
        visit(name, value);
    }
    for (name, value) in theme.border_radius() {
        visit(name, value);
    }
    for (category, properties) in theme.custom() {
        for (name, value) in properties {
            visit(&format!("{}-{}", category, name), value);
        }
    }
}

fn dark_overrides_css(theme: &Theme) -> String {
    let mut css = header("Retheme Tokens - Dark Mode Overrides");

    let dark_colors: Vec<(&String, &String)> = theme
        .colors()
        .iter()
        .filter(|(name, _)| name.contains("-dark-") || name.ends_with("-dark"))
        .collect();

    if dark_colors.is_empty() {
        css.push_str("/* No dark mode color overrides found */\n");
        return css;
    }

    for wrapper in ["@media (prefers-color-scheme: dark) {\n", ".dark {\n"] {
        css.push_str(wrapper);
        css.push_str("  @theme inline {\n");
        for (name, value) in &dark_colors {
            css.push_str("  ");
            css.push_str(&format_css_variable(&dark_base_name(name), value));
            css.push('\n');
        }
        css.push_str("  }\n");
        css.push_str("}\n");
        if wrapper.starts_with("@media") {
            css.push('\n');
        }
    }

    css
}

/// Maps a dark variant name back to the base token it overrides:
/// `color-primary-dark` and `color-dark-primary` both resolve to
/// `color-primary`.
fn dark_base_name(name: &str) -> String {
    let stripped = if let Some(idx) = name.find("-dark-") {
        let mut base = String::with_capacity(name.len());
        base.push_str(&name[..idx]);
        base.push_str(&name[idx + 5..]);
        base
    } else if let Some(prefix) = name.strip_suffix("-dark") {
        prefix.to_string()
    } else {
        name.to_string()
    };
    stripped.replacen("-dark", "", 1)
}

fn animations_css_block(theme: &Theme) -> String {
    let mut css = header("Retheme Tokens - Animations & Keyframes");

    for (name, steps) in theme.keyframes() {
        css.push_str(&format_keyframes(name, steps));
        css.push_str("\n\n");
    }

    if !theme.animations().is_empty() {
        css.push_str("@layer components {\n");
        for (name, animation) in theme.animations() {
            let class = format_animation_class(name, animation).replace('\n', "\n  ");
            css.push_str("  ");
            css.push_str(&class);
            css.push_str("\n\n");
        }
        css.push_str("}\n");
    }

    css
}

/// The renderer's restatement of the report: the final variable names per
/// category, with nothing skipped at this stage.
fn renderer_report(theme: &Theme) -> ConversionReport {
    let mut report = ConversionReport::default();
    report.converted.colors = theme.colors().keys().cloned().collect();
    report.converted.fonts = theme.fonts().keys().cloned().collect();
    report.converted.font_sizes = theme.font_sizes().keys().cloned().collect();
    report.converted.spacing = theme.spacing().keys().cloned().collect();
    report.converted.border_radius = theme.border_radius().keys().cloned().collect();
    report.converted.keyframes = theme.keyframes().keys().cloned().collect();
    report.converted.animations = theme.animations().keys().cloned().collect();
    report.converted.custom = theme.custom().keys().cloned().collect();
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{FontSize, KeyframeSteps};

    fn sample_theme() -> Theme {
        Theme::new()
            .add_color("color-primary", "#3b82f6")
            .add_color("color-secondary-500", "#64748b")
            .add_font("font-sans", "Inter, sans-serif")
            .add_font_size("xl", FontSize::with_line_height("1.25rem", "1.75rem"))
            .add_spacing("space-18", "4.5rem")
            .add_radius("radius-xl", "0.75rem")
    }

    fn animated_theme() -> Theme {
        let mut steps = KeyframeSteps::new();
        steps.insert("0%".to_string(), serde_json::json!({"opacity": "0"}));
        steps.insert("100%".to_string(), serde_json::json!({"opacity": "1"}));
        Theme::new()
            .add_keyframes("fadeIn", steps)
            .add_animation("fade-in", "fadeIn 0.5s ease-in-out")
    }

    #[test]
    fn test_generate_variables() {
        let result = Renderer::new().generate(&sample_theme(), &ConversionOptions::default());

        assert!(result.css.starts_with("@import \"tailwindcss\";\n\n"));
        assert!(result.css.contains("--color-primary: #3b82f6;"));
        assert!(result.css.contains("--color-secondary-500: #64748b;"));
        assert!(result.css.contains("--font-sans: Inter, sans-serif;"));
        assert!(result.css.contains("--font-size-xl: 1.25rem;"));
        assert!(result.css.contains("--line-height-xl: 1.75rem;"));
        assert!(result.css.contains("--space-18: 4.5rem;"));
        assert!(result.css.contains("--radius-xl: 0.75rem;"));
    }

    #[test]
    fn test_generate_font_size_without_line_height() {
        let theme = Theme::new().add_font_size("base", FontSize::new("1rem"));
        let result = Renderer::new().generate(&theme, &ConversionOptions::default());

        assert!(result.css.contains("--font-size-base: 1rem;"));
        assert!(!result.css.contains("--line-height-base"));
    }

    #[test]
    fn test_generate_theme_inline_bindings() {
        let result = Renderer::new().generate(&sample_theme(), &ConversionOptions::default());

        assert!(result.css.contains("@theme inline {"));
        assert!(result.css.contains("--color-primary: var(--color-primary);"));
        assert!(result
            .css
            .contains("--line-height-xl: var(--line-height-xl);"));
    }

    #[test]
    fn test_generate_custom_properties() {
        let theme = Theme::new().add_custom("shadow", "card", "0 1px 2px rgba(0,0,0,0.1)");
        let result = Renderer::new().generate(&theme, &ConversionOptions::default());

        assert!(result.css.contains("--shadow-card: 0 1px 2px rgba(0,0,0,0.1);"));
        assert!(result.css.contains("--shadow-card: var(--shadow-card);"));
    }

    #[test]
    fn test_generate_animations_inline() {
        let result = Renderer::new().generate(&animated_theme(), &ConversionOptions::default());

        assert!(result.css.contains("@keyframes fadeIn"));
        assert!(result.css.contains("0% {\n    opacity: 0;\n  }"));
        assert!(result.css.contains("100% {\n    opacity: 1;\n  }"));
        assert!(result.css.contains("@layer components {"));
        assert!(result
            .css
            .contains("  .animate-fade-in {\n    animation: fadeIn 0.5s ease-in-out;\n  }"));
        assert!(result.animations_css.is_none());
    }

    #[test]
    fn test_generate_split() {
        let theme = sample_theme();
        let mut steps = KeyframeSteps::new();
        steps.insert("0%".to_string(), serde_json::json!({"opacity": "0"}));
        let theme = theme.add_keyframes("fadeIn", steps);

        let options = ConversionOptions {
            split: true,
            ..Default::default()
        };
        let result = Renderer::new().generate(&theme, &options);

        let animations = result.animations_css.expect("split animations blob");
        assert!(animations.contains("@keyframes fadeIn"));
        assert!(!result.css.contains("@keyframes fadeIn"));
    }

    #[test]
    fn test_generate_dark_overrides() {
        let theme = Theme::new()
            .add_color("color-primary", "#3b82f6")
            .add_color("color-primary-dark", "#60a5fa")
            .add_color("color-dark-surface", "#0f172a");

        let options = ConversionOptions {
            dark: true,
            split: true,
            ..Default::default()
        };
        let result = Renderer::new().generate(&theme, &options);

        let dark = result.dark_css.expect("dark blob");
        assert!(dark.contains("@media (prefers-color-scheme: dark) {"));
        assert!(dark.contains(".dark {"));
        assert!(dark.contains("    --color-primary: #60a5fa;"));
        assert!(dark.contains("    --color-surface: #0f172a;"));
        assert!(!dark.contains("--color-primary-dark"));
    }

    #[test]
    fn test_generate_dark_none_found() {
        let theme = Theme::new().add_color("color-primary", "#3b82f6");
        let options = ConversionOptions {
            dark: true,
            split: true,
            ..Default::default()
        };
        let result = Renderer::new().generate(&theme, &options);

        let dark = result.dark_css.expect("dark blob");
        assert!(dark.contains("/* No dark mode color overrides found */"));
    }

    #[test]
    fn test_generate_dark_appended_when_not_split() {
        let theme = Theme::new().add_color("color-primary-dark", "#60a5fa");
        let options = ConversionOptions {
            dark: true,
            ..Default::default()
        };
        let result = Renderer::new().generate(&theme, &options);

        assert!(result.dark_css.is_none());
        assert!(result.css.contains("@media (prefers-color-scheme: dark) {"));
    }

    #[test]
    fn test_generate_minify() {
        let theme = Theme::new().add_color("color-primary", "#3b82f6");
        let options = ConversionOptions {
            minify: true,
            ..Default::default()
        };
        let result = Renderer::new().generate(&theme, &options);

        assert!(!result.css.contains("\n  --color-primary"));
        assert!(result.css.contains("--color-primary: #3b82f6"));
        assert!(result.css.contains(":root{"));
    }

    #[test]
    fn test_dark_base_name() {
        assert_eq!(dark_base_name("color-primary-dark"), "color-primary");
        assert_eq!(dark_base_name("color-dark-primary"), "color-primary");
        assert_eq!(
            dark_base_name("color-primary-dark-500"),
            "color-primary-500"
        );
        assert_eq!(dark_base_name("color-plain"), "color-plain");
    }

    #[test]
    fn test_renderer_report_restates_names() {
        let theme = sample_theme().add_custom("shadow", "card", "none");
        let result = Renderer::new().generate(&theme, &ConversionOptions::default());

        assert_eq!(
            result.report.converted.colors,
            vec!["color-primary".to_string(), "color-secondary-500".to_string()]
        );
        assert_eq!(result.report.converted.custom, vec!["shadow".to_string()]);
        assert!(result.report.skipped.is_empty());
    }

    #[test]
    fn test_generate_report_markdown() {
        let summary = Renderer::new().generate_report(&sample_theme()).unwrap();
        assert!(summary.contains("# Token Conversion Report"));
        assert!(summary.contains("- --color-primary"));
        assert!(summary.contains("## Spacing (1)"));
    }
}
