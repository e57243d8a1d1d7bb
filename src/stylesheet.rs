//! Stylesheet builder – one fixed rule set parameterized by a [`Theme`].
//!
//! The returned string is the single source of truth for styling: the
//! document assembler embeds it in the `<style>` element and the compiler
//! returns the very same string as the standalone CSS output. Selectors and
//! rules are fixed; only the color and font tokens vary per compilation.

use crate::theme::Theme;

const STYLESHEET_TEMPLATE: &str = r#"* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: {font-body};
  background: {background};
  color: {text};
  line-height: 1.6;
}

.page-header {
  background: {primary};
  color: #ffffff;
  padding: 40px 24px;
  text-align: center;
}

.page-header p {
  margin-top: 8px;
  opacity: 0.9;
}

.components > * {
  padding: 32px 24px;
}

.site-header {
  border-bottom: 3px solid {primary};
}

.site-nav {
  margin-top: 12px;
}

.site-nav a {
  color: {primary};
  text-decoration: none;
  margin-right: 16px;
}

.hero {
  background: linear-gradient(135deg, {primary}, {secondary});
  color: #ffffff;
  text-align: center;
  padding: 64px 24px;
}

.hero-subtitle {
  margin-top: 12px;
  font-size: 1.1em;
}

.cta-button {
  margin-top: 20px;
  padding: 12px 28px;
  border: none;
  border-radius: 6px;
  background: {accent};
  color: #ffffff;
  font-size: 1em;
  cursor: pointer;
}

.card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
  gap: 20px;
  margin-top: 20px;
}

.card {
  border: 1px solid #e5e7eb;
  border-radius: 8px;
  overflow: hidden;
}

.card-image {
  width: 100%;
  height: 160px;
  object-fit: cover;
  display: block;
}

.card-image.placeholder {
  background: #e5e7eb;
  color: {text};
  display: flex;
  align-items: center;
  justify-content: center;
}

.card-body {
  padding: 16px;
}

.card-body h3 {
  color: {secondary};
}

.card-price {
  color: {accent};
  font-weight: bold;
  margin-top: 8px;
}

.card-rating {
  margin-top: 4px;
}

.content-section img {
  max-width: 100%;
  margin-top: 16px;
  border-radius: 8px;
}

.data-table {
  width: 100%;
  border-collapse: collapse;
  margin-top: 20px;
}

.data-table th {
  background: {primary};
  color: #ffffff;
  text-align: left;
  padding: 10px 12px;
}

.data-table td {
  padding: 10px 12px;
  border-bottom: 1px solid #e5e7eb;
}

.site-footer {
  background: {secondary};
  color: #ffffff;
}

.site-footer a {
  color: {accent};
  text-decoration: none;
  margin-right: 12px;
}

.copyright {
  margin-top: 16px;
  font-size: 0.9em;
  opacity: 0.8;
}

.empty-state {
  margin-top: 16px;
  color: #6b7280;
  font-style: italic;
}

.component-unknown {
  border: 1px dashed #9ca3af;
}

.props-dump {
  margin-top: 12px;
  padding: 12px;
  background: #f3f4f6;
  color: {text};
  overflow-x: auto;
  font-size: 0.85em;
}
"#;

/// Build the shared stylesheet for a resolved theme.
pub fn stylesheet(theme: &Theme) -> String {
    STYLESHEET_TEMPLATE
        .replace("{font-body}", &theme.body_font)
        .replace("{primary}", &theme.primary)
        .replace("{secondary}", &theme.secondary)
        .replace("{accent}", &theme.accent)
        .replace("{background}", &theme.background)
        .replace("{text}", &theme.text)
}
