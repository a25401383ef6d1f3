//! Configuration normalization.
//!
//! The [`Normalizer`] walks the `theme` and `theme.extend` sections of a
//! raw configuration value and produces a [`Theme`] plus a
//! [`ConversionReport`] describing what was converted and what was skipped.
//! Base entries are processed before extension entries, so extensions win
//! when both resolve to the same final name. Skips never abort the run;
//! only a non-mapping top level is an error.

use serde_json::Value;

use crate::config::{ThemeSections, TokenLeaf};
use crate::error::NormalizeError;
use crate::format::{is_valid_css_value, sanitize_key};
use crate::report::ConversionReport;
use crate::theme::{FontSize, Theme};

/// The result of a normalization run.
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    pub theme: Theme,
    pub report: ConversionReport,
}

/// Which theme section an entry came from. Recorded in the report so a
/// reader can tell base tokens from extensions.
#[derive(Debug, Clone, Copy)]
enum Source {
    Base,
    Extend,
}

impl Source {
    fn label(self) -> &'static str {
        match self {
            Source::Base => "base",
            Source::Extend => "extend",
        }
    }
}

/// Normalizes raw configuration values into themes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer;

impl Normalizer {
    pub fn new() -> Self {
        Normalizer
    }

    /// Normalizes a configuration. Returns an error only when the top
    /// level is not a mapping; every other problem is reported as a skip.
    pub fn parse(&self, config: &Value) -> Result<ParseOutcome, NormalizeError> {
        let root = config.as_object().ok_or_else(|| {
            NormalizeError::InvalidConfig("top level must be a mapping".to_string())
        })?;
        let sections = ThemeSections::locate(root);
        let mut pass = Pass::default();

        for (category, handler) in CATEGORY_RULES {
            if let Some(entries) = sections.base_category(category) {
                for (key, value) in entries {
                    handler(&mut pass, key, value, Source::Base);
                }
            }
            if let Some(entries) = sections.extend_category(category) {
                for (key, value) in entries {
                    handler(&mut pass, key, value, Source::Extend);
                }
            }
        }

        Ok(ParseOutcome {
            theme: pass.theme,
            report: pass.report,
        })
    }
}

/// Category handlers in processing order, keyed by their config section name.
const CATEGORY_RULES: &[(&str, fn(&mut Pass, &str, &Value, Source))] = &[
    ("colors", Pass::color),
    ("fontFamily", Pass::font_family),
    ("fontSize", Pass::font_size),
    ("spacing", Pass::spacing),
    ("borderRadius", Pass::border_radius),
    ("keyframes", Pass::keyframes),
    ("animation", Pass::animation),
];

/// Accumulator for a single normalization run.
#[derive(Default)]
struct Pass {
    theme: Theme,
    report: ConversionReport,
}

impl Pass {
    fn color(&mut self, key: &str, value: &Value, source: Source) {
        match TokenLeaf::classify(value) {
            TokenLeaf::Scalar(text) if is_valid_css_value(text) => {
                let name = format!("color-{}", sanitize_key(key));
                self.theme.colors_mut().insert(name, text.to_string());
                self.converted_color(key, source);
            }
            TokenLeaf::Mapping(group) => {
                let prefix = sanitize_key(key);
                for (sub, sub_value) in group {
                    match TokenLeaf::classify(sub_value) {
                        TokenLeaf::Scalar(text) if is_valid_css_value(text) => {
                            let name = if sub == "DEFAULT" {
                                format!("color-{}", prefix)
                            } else {
                                format!("color-{}-{}", prefix, sanitize_key(sub))
                            };
                            self.theme.colors_mut().insert(name, text.to_string());
                            self.converted_color(&format!("{}.{}", key, sub), source);
                        }
                        _ => self.skip(
                            "colors",
                            &format!("{}.{}", key, sub),
                            "Invalid nested color value",
                        ),
                    }
                }
            }
            _ => self.skip("colors", key, "Invalid color value type"),
        }
    }

    fn converted_color(&mut self, label: &str, source: Source) {
        self.report
            .converted
            .colors
            .push(format!("{} ({})", label, source.label()));
    }

    fn font_family(&mut self, key: &str, value: &Value, source: Source) {
        let stack = match TokenLeaf::classify(value) {
            TokenLeaf::List(faces) => joined_faces(faces),
            TokenLeaf::Scalar(face) => Some(quote_face(face)),
            _ => None,
        };
        match stack {
            Some(stack) => {
                let name = format!("font-{}", sanitize_key(key));
                self.theme.fonts_mut().insert(name, stack);
                self.report
                    .converted
                    .fonts
                    .push(format!("{} ({})", key, source.label()));
            }
            None => self.skip("fonts", key, "Invalid font family type"),
        }
    }

    fn font_size(&mut self, key: &str, value: &Value, source: Source) {
        let size = match TokenLeaf::classify(value) {
            TokenLeaf::Scalar(size) => Some(FontSize::new(size)),
            TokenLeaf::List(parts) => font_size_from_list(parts),
            _ => None,
        };
        match size {
            Some(size) => {
                self.theme.font_sizes_mut().insert(sanitize_key(key), size);
                self.report
                    .converted
                    .font_sizes
                    .push(format!("{} ({})", key, source.label()));
            }
            None => self.skip("fontSizes", key, "Invalid font size format"),
        }
    }

    fn spacing(&mut self, key: &str, value: &Value, source: Source) {
        match TokenLeaf::classify(value) {
            TokenLeaf::Scalar(text) if is_valid_css_value(text) => {
                let name = format!("space-{}", sanitize_key(key));
                self.theme.spacing_mut().insert(name, text.to_string());
                self.report
                    .converted
                    .spacing
                    .push(format!("{} ({})", key, source.label()));
            }
            _ => self.skip("spacing", key, "Invalid spacing value"),
        }
    }

    fn border_radius(&mut self, key: &str, value: &Value, source: Source) {
        match TokenLeaf::classify(value) {
            TokenLeaf::Scalar(text) if is_valid_css_value(text) => {
                let name = format!("radius-{}", sanitize_key(key));
                self.theme.border_radius_mut().insert(name, text.to_string());
                self.report
                    .converted
                    .border_radius
                    .push(format!("{} ({})", key, source.label()));
            }
            _ => self.skip("borderRadius", key, "Invalid border radius value"),
        }
    }

    fn keyframes(&mut self, key: &str, value: &Value, source: Source) {
        match TokenLeaf::classify(value) {
            TokenLeaf::Mapping(steps) => {
                self.theme
                    .keyframes_mut()
                    .insert(key.to_string(), steps.clone());
                self.report
                    .converted
                    .keyframes
                    .push(format!("{} ({})", key, source.label()));
            }
            _ => self.skip("keyframes", key, "Invalid keyframe definition"),
        }
    }

    fn animation(&mut self, key: &str, value: &Value, source: Source) {
        match TokenLeaf::classify(value) {
            TokenLeaf::Scalar(shorthand) => {
                self.theme
                    .animations_mut()
                    .insert(key.to_string(), shorthand.to_string());
                self.report
                    .converted
                    .animations
                    .push(format!("{} ({})", key, source.label()));
            }
            _ => self.skip("animations", key, "Invalid animation definition"),
        }
    }

    fn skip(&mut self, category: &str, key: &str, reason: &str) {
        self.report.record_skip(category, key, reason);
    }
}

/// Joins a font stack, quoting faces that contain spaces. Every face must
/// be a string.
fn joined_faces(faces: &[Value]) -> Option<String> {
    let mut joined = Vec::with_capacity(faces.len());
    for face in faces {
        match face {
            Value::String(face) => joined.push(quote_face(face)),
            _ => return None,
        }
    }
    Some(joined.join(", "))
}

fn quote_face(face: &str) -> String {
    if face.contains(' ') {
        format!("\"{}\"", face)
    } else {
        face.to_string()
    }
}

/// Reads a `[size, line-height]` pair. The first element is required, the
/// second is kept when it is a non-empty string, extras are ignored. A
/// non-string element in either slot rejects the whole entry.
fn font_size_from_list(parts: &[Value]) -> Option<FontSize> {
    let size = match parts.first()? {
        Value::String(size) => size,
        _ => return None,
    };
    match parts.get(1) {
        None => Some(FontSize::new(size)),
        Some(Value::String(line_height)) if line_height.is_empty() => Some(FontSize::new(size)),
        Some(Value::String(line_height)) => Some(FontSize::with_line_height(size, line_height)),
        Some(_) => None,
    }
}
