//! Theme resolver – merges a layout's optional palette and font overrides
//! over the fixed defaults into a flat [`Theme`] consumed by the stylesheet
//! builder.
//!
//! Merging is shallow and per-field: the first non-null value wins, never a
//! deep merge beyond the flat key set.

use crate::layout::{ColorPalette, FontSpec};

/// Fully resolved colors and fonts for one compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
    pub body_font: String,
}

pub const DEFAULT_PRIMARY: &str = "#2563eb";
pub const DEFAULT_SECONDARY: &str = "#1e40af";
pub const DEFAULT_ACCENT: &str = "#f59e0b";
pub const DEFAULT_BACKGROUND: &str = "#ffffff";
pub const DEFAULT_TEXT: &str = "#1f2937";
pub const DEFAULT_BODY_FONT: &str = "Inter, Arial, sans-serif";

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: DEFAULT_PRIMARY.to_string(),
            secondary: DEFAULT_SECONDARY.to_string(),
            accent: DEFAULT_ACCENT.to_string(),
            background: DEFAULT_BACKGROUND.to_string(),
            text: DEFAULT_TEXT.to_string(),
            body_font: DEFAULT_BODY_FONT.to_string(),
        }
    }
}

impl Theme {
    /// Resolve a theme from optional overrides.
    pub fn resolve(colors: Option<&ColorPalette>, fonts: Option<&FontSpec>) -> Self {
        let mut theme = Theme::default();
        if let Some(c) = colors {
            merge(&mut theme.primary, &c.primary);
            merge(&mut theme.secondary, &c.secondary);
            merge(&mut theme.accent, &c.accent);
            merge(&mut theme.background, &c.background);
            merge(&mut theme.text, &c.text);
        }
        if let Some(f) = fonts {
            merge(&mut theme.body_font, &f.body);
        }
        theme
    }
}

fn merge(slot: &mut String, over: &Option<String>) {
    if let Some(v) = over {
        *slot = v.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_no_overrides() {
        let theme = Theme::resolve(None, None);
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn partial_palette_keeps_other_defaults() {
        let palette = ColorPalette {
            primary: Some("#abcdef".to_string()),
            ..ColorPalette::default()
        };
        let theme = Theme::resolve(Some(&palette), None);
        assert_eq!(theme.primary, "#abcdef");
        assert_eq!(theme.secondary, DEFAULT_SECONDARY);
        assert_eq!(theme.body_font, DEFAULT_BODY_FONT);
    }

    #[test]
    fn font_override_applies() {
        let fonts = FontSpec {
            body: Some("Georgia, serif".to_string()),
        };
        let theme = Theme::resolve(None, Some(&fonts));
        assert_eq!(theme.body_font, "Georgia, serif");
    }
}
