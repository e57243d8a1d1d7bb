//! Layout model – the input structure describing a generated web page.
//!
//! A [`Layout`] is produced upstream (a layout generator or editor) and
//! consumed once by the compiler. It has no identity or lifecycle of its own:
//! equal layouts compile to byte-identical output, so callers may cache
//! results by structural equality.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A complete page layout ready for compilation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Layout {
    /// Page title; shown in `<title>` and the page header block.
    pub title: Option<String>,
    /// Short description rendered under the title in the header block.
    pub description: Option<String>,
    /// Palette overrides merged over the fixed defaults.
    pub colors: Option<ColorPalette>,
    /// Font overrides merged over the fixed defaults.
    pub fonts: Option<FontSpec>,
    /// Ordered list of components; output order matches this order exactly.
    pub components: Vec<ComponentSpec>,
    /// Precompiled HTML. When both `html_code` and `css_code` are non-empty
    /// the compiler is bypassed and they are returned verbatim.
    pub html_code: Option<String>,
    /// Precompiled CSS companion to `html_code`.
    pub css_code: Option<String>,
}

/// Optional palette overrides; each key has a fixed default when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorPalette {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub accent: Option<String>,
    pub background: Option<String>,
    pub text: Option<String>,
}

/// Optional font overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSpec {
    /// Body font stack (default: "Inter, Arial, sans-serif").
    pub body: Option<String>,
}

/// One component in the layout: a type tag plus a free-form props bag.
///
/// The `type` string is matched against a closed set of known component
/// kinds; anything else falls through to a generic diagnostic renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentSpec {
    #[serde(rename = "type")]
    pub kind: String,
    pub props: Option<Map<String, Value>>,
}

impl Layout {
    /// Serialise to pretty-printed JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Deserialise from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// True when both precompiled fields are present and non-empty.
    pub fn has_precompiled(&self) -> bool {
        matches!((&self.html_code, &self.css_code),
            (Some(h), Some(c)) if !h.is_empty() && !c.is_empty())
    }
}

impl ComponentSpec {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            props: None,
        }
    }

    pub fn with_props(kind: impl Into<String>, props: Map<String, Value>) -> Self {
        Self {
            kind: kind.into(),
            props: Some(props),
        }
    }
}
