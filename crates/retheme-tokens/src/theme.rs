//! The normalized token model.
//!
//! A [`Theme`] holds categorized design tokens after normalization: colors,
//! font families, font sizes, spacing, border radii, keyframes, animations,
//! and free-form custom properties. Category maps are sorted so rendered
//! output is reproducible across runs.

use std::collections::BTreeMap;

/// Ordered keyframe stops, e.g. `"0%" -> { "opacity": "0" }`.
///
/// Stop order is preserved as written in the source configuration, since
/// reordering percentage stops would change the animation.
pub type KeyframeSteps = serde_json::Map<String, serde_json::Value>;

/// A font size token: a size plus an optional line height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSize {
    pub size: String,
    pub line_height: Option<String>,
}

impl FontSize {
    /// Creates a font size without a line height.
    pub fn new(size: impl Into<String>) -> Self {
        FontSize {
            size: size.into(),
            line_height: None,
        }
    }

    /// Creates a font size with a line height.
    pub fn with_line_height(size: impl Into<String>, line_height: impl Into<String>) -> Self {
        FontSize {
            size: size.into(),
            line_height: Some(line_height.into()),
        }
    }
}

/// The normalized theme: one map per token category.
///
/// Keys in the scalar categories are already sanitized and prefixed
/// (`color-primary`, `font-sans`, `space-4`, `radius-lg`); font size keys
/// are the bare sanitized names; keyframe and animation keys are kept as
/// written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Theme {
    colors: BTreeMap<String, String>,
    fonts: BTreeMap<String, String>,
    font_sizes: BTreeMap<String, FontSize>,
    spacing: BTreeMap<String, String>,
    border_radius: BTreeMap<String, String>,
    keyframes: BTreeMap<String, KeyframeSteps>,
    animations: BTreeMap<String, String>,
    custom: BTreeMap<String, BTreeMap<String, String>>,
}

impl Theme {
    /// Creates an empty theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a color token. The key should already carry the `color-` prefix.
    pub fn add_color(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.colors.insert(key.into(), value.into());
        self
    }

    /// Adds a font family token. The key should already carry the `font-` prefix.
    pub fn add_font(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fonts.insert(key.into(), value.into());
        self
    }

    /// Adds a font size token under its bare sanitized name.
    pub fn add_font_size(mut self, key: impl Into<String>, value: FontSize) -> Self {
        self.font_sizes.insert(key.into(), value);
        self
    }

    /// Adds a spacing token. The key should already carry the `space-` prefix.
    pub fn add_spacing(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.spacing.insert(key.into(), value.into());
        self
    }

    /// Adds a border radius token. The key should already carry the `radius-` prefix.
    pub fn add_radius(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.border_radius.insert(key.into(), value.into());
        self
    }

    /// Adds a keyframe definition under its original name.
    pub fn add_keyframes(mut self, name: impl Into<String>, steps: KeyframeSteps) -> Self {
        self.keyframes.insert(name.into(), steps);
        self
    }

    /// Adds an animation shorthand under its original name.
    pub fn add_animation(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.animations.insert(name.into(), value.into());
        self
    }

    /// Adds a custom property group. Rendered as `--<category>-<name>`.
    pub fn add_custom(
        mut self,
        category: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.custom
            .entry(category.into())
            .or_default()
            .insert(name.into(), value.into());
        self
    }

    pub fn colors(&self) -> &BTreeMap<String, String> {
        &self.colors
    }

    pub fn fonts(&self) -> &BTreeMap<String, String> {
        &self.fonts
    }

    pub fn font_sizes(&self) -> &BTreeMap<String, FontSize> {
        &self.font_sizes
    }

    pub fn spacing(&self) -> &BTreeMap<String, String> {
        &self.spacing
    }

    pub fn border_radius(&self) -> &BTreeMap<String, String> {
        &self.border_radius
    }

    pub fn keyframes(&self) -> &BTreeMap<String, KeyframeSteps> {
        &self.keyframes
    }

    pub fn animations(&self) -> &BTreeMap<String, String> {
        &self.animations
    }

    pub fn custom(&self) -> &BTreeMap<String, BTreeMap<String, String>> {
        &self.custom
    }

    /// Returns true when no category holds any token.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
            && self.fonts.is_empty()
            && self.font_sizes.is_empty()
            && self.spacing.is_empty()
            && self.border_radius.is_empty()
            && self.keyframes.is_empty()
            && self.animations.is_empty()
            && self.custom.is_empty()
    }

    /// Total token count across all categories. Custom groups count
    /// each property individually.
    pub fn token_count(&self) -> usize {
        self.colors.len()
            + self.fonts.len()
            + self.font_sizes.len()
            + self.spacing.len()
            + self.border_radius.len()
            + self.keyframes.len()
            + self.animations.len()
            + self.custom.values().map(|props| props.len()).sum::<usize>()
    }

    pub(crate) fn colors_mut(&mut self) -> &mut BTreeMap<String, String> {
        &mut self.colors
    }

    pub(crate) fn fonts_mut(&mut self) -> &mut BTreeMap<String, String> {
        &mut self.fonts
    }

    pub(crate) fn font_sizes_mut(&mut self) -> &mut BTreeMap<String, FontSize> {
        &mut self.font_sizes
    }

    pub(crate) fn spacing_mut(&mut self) -> &mut BTreeMap<String, String> {
        &mut self.spacing
    }

    pub(crate) fn border_radius_mut(&mut self) -> &mut BTreeMap<String, String> {
        &mut self.border_radius
    }

    pub(crate) fn keyframes_mut(&mut self) -> &mut BTreeMap<String, KeyframeSteps> {
        &mut self.keyframes
    }

    pub(crate) fn animations_mut(&mut self) -> &mut BTreeMap<String, String> {
        &mut self.animations
    }
}
