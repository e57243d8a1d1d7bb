//! Pipeline – ties theme resolution, component classification, and rendering
//! into a single compile call.
//!
//! The compiler is a total function: malformed or missing fields degrade to
//! documented defaults and never raise. The only fallible surface is the
//! JSON entry point, which guards against an absent (`null`) layout.

use serde_json::Value;
use thiserror::Error;

use crate::component::Component;
use crate::layout::Layout;
use crate::render::render_document;
use crate::stylesheet::stylesheet;
use crate::theme::Theme;

/// Default document title and header heading.
pub const DEFAULT_TITLE: &str = "Generated Layout";
/// Default header description.
pub const DEFAULT_DESCRIPTION: &str = "This is a generated layout.";

/// Compiler output: a standalone HTML document plus the matching stylesheet.
///
/// The CSS rules embedded in the document's `<style>` element and the
/// standalone `css` string are textually identical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupOutput {
    pub html: String,
    pub css: String,
}

impl MarkupOutput {
    /// Serialise the pair as one JSON value for callers that consume both.
    pub fn to_json(&self) -> String {
        serde_json::json!({ "html": self.html, "css": self.css }).to_string()
    }
}

/// Errors from the JSON entry point. The typed [`compile`] never fails.
#[derive(Debug, Error)]
pub enum CompileError {
    /// The layout was absent: JSON `null` or an empty input string.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The input was present but not a valid layout document.
    #[error("layout parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Compile a layout into HTML + CSS.
///
/// When the layout carries both `html_code` and `css_code` (non-empty) the
/// compiler is bypassed and they are returned verbatim — the path for
/// hand-authored or previously generated markup.
pub fn compile(layout: &Layout) -> MarkupOutput {
    if layout.has_precompiled() {
        log::debug!("Layout carries precompiled markup, skipping compilation");
        return MarkupOutput {
            html: layout.html_code.clone().unwrap_or_default(),
            css: layout.css_code.clone().unwrap_or_default(),
        };
    }

    let theme = Theme::resolve(layout.colors.as_ref(), layout.fonts.as_ref());
    let css = stylesheet(&theme);

    let title = layout.title.as_deref().filter(|t| !t.is_empty()).unwrap_or(DEFAULT_TITLE);
    let description = layout
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .unwrap_or(DEFAULT_DESCRIPTION);

    let components: Vec<Component> = layout.components.iter().map(Component::classify).collect();
    log::debug!("Compiling layout '{title}' with {} components", components.len());

    let html = render_document(title, description, &components, &css);
    MarkupOutput { html, css }
}

/// Compile a layout supplied as a JSON document.
///
/// Fails fast with [`CompileError::InvalidInput`] when the layout itself is
/// absent (JSON `null` or a blank string) instead of producing a degenerate
/// document.
pub fn compile_json(json: &str) -> Result<MarkupOutput, CompileError> {
    if json.trim().is_empty() {
        return Err(CompileError::InvalidInput("empty layout document".to_string()));
    }
    let value: Value = serde_json::from_str(json)?;
    if value.is_null() {
        return Err(CompileError::InvalidInput("layout is null".to_string()));
    }
    let layout: Layout = serde_json::from_value(value)?;
    Ok(compile(&layout))
}
