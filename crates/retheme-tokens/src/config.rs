//! Configuration shape classification.
//!
//! Raw configuration values arrive as [`serde_json::Value`] trees. Instead of
//! duck-typing each leaf at every use site, a leaf is classified once into a
//! [`TokenLeaf`] and every category rule matches on the tag.

use serde_json::{Map, Value};

/// The shape of a single configuration leaf.
///
/// Numbers, booleans, and nulls are deliberately `Unrecognized`: token values
/// are CSS text, and a bare `16` in a color or spacing slot is a config
/// mistake that should surface in the skip report rather than be coerced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenLeaf<'a> {
    /// A string value.
    Scalar(&'a str),
    /// A list value, e.g. a font stack or a `[size, line-height]` pair.
    List(&'a [Value]),
    /// A nested mapping, e.g. a color group or keyframe stops.
    Mapping(&'a Map<String, Value>),
    /// Anything else: number, boolean, or null.
    Unrecognized,
}

impl<'a> TokenLeaf<'a> {
    /// Classifies a raw configuration value.
    pub fn classify(value: &'a Value) -> Self {
        match value {
            Value::String(s) => TokenLeaf::Scalar(s),
            Value::Array(items) => TokenLeaf::List(items),
            Value::Object(map) => TokenLeaf::Mapping(map),
            _ => TokenLeaf::Unrecognized,
        }
    }
}

/// The `theme` and `theme.extend` sections of a configuration, located once.
///
/// Extension entries are applied after base entries, so an extended token
/// overrides a base token under the same final name.
pub(crate) struct ThemeSections<'a> {
    base: Option<&'a Map<String, Value>>,
    extend: Option<&'a Map<String, Value>>,
}

impl<'a> ThemeSections<'a> {
    /// Locates `theme` and `theme.extend` in a top-level configuration
    /// mapping. Missing or non-mapping sections read as absent.
    pub(crate) fn locate(root: &'a Map<String, Value>) -> Self {
        let base = root.get("theme").and_then(Value::as_object);
        let extend = base
            .and_then(|theme| theme.get("extend"))
            .and_then(Value::as_object);
        ThemeSections { base, extend }
    }

    /// A category mapping from the base theme, by its config key
    /// (`colors`, `fontFamily`, `spacing`, ...).
    pub(crate) fn base_category(&self, name: &str) -> Option<&'a Map<String, Value>> {
        self.base
            .and_then(|section| section.get(name))
            .and_then(Value::as_object)
    }

    /// A category mapping from `theme.extend`, by its config key.
    pub(crate) fn extend_category(&self, name: &str) -> Option<&'a Map<String, Value>> {
        self.extend
            .and_then(|section| section.get(name))
            .and_then(Value::as_object)
    }
}
