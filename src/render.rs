//! Markup renderer – per-component HTML fragments and the document shell.
//!
//! Every user-supplied text field is HTML-escaped at the point of
//! interpolation. Attribute values (hrefs, image sources) go through the
//! same escaping, which also covers the quoted-attribute context.

use serde_json::Value;

use crate::component::{
    CardGridProps, Component, FooterProps, HeaderProps, HeroProps, SectionProps, TripsTableProps,
    UnknownProps,
};

/// Escape text for interpolation into HTML element or attribute content.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Assemble the full HTML document: doctype, head with embedded stylesheet,
/// page header block, then every component fragment in input order.
///
/// `css` is the shared stylesheet string; it is embedded verbatim so the
/// document's `<style>` block stays textually identical to the standalone
/// CSS output.
pub fn render_document(
    title: &str,
    description: &str,
    components: &[Component],
    css: &str,
) -> String {
    let mut html = String::with_capacity(css.len() + 2048);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    html.push_str("<style>\n");
    html.push_str(css);
    html.push_str("</style>\n</head>\n<body>\n");

    html.push_str("<header class=\"page-header\">\n");
    html.push_str(&format!("  <h1>{}</h1>\n", escape_html(title)));
    html.push_str(&format!("  <p>{}</p>\n", escape_html(description)));
    html.push_str("</header>\n");

    html.push_str("<div class=\"components\">\n");
    for component in components {
        html.push_str(&render_component(component));
    }
    html.push_str("</div>\n");

    html.push_str("</body>\n</html>\n");
    html
}

/// Render one classified component to its markup fragment.
pub fn render_component(component: &Component) -> String {
    match component {
        Component::Header(props) => render_header(props),
        Component::Hero(props) => render_hero(props),
        Component::CardGrid(props) => render_card_grid(props),
        Component::Section(props) => render_section(props),
        Component::TripsTable(props) => render_trips_table(props),
        Component::Footer(props) => render_footer(props),
        Component::Unknown(props) => render_unknown(props),
    }
}

fn render_header(props: &HeaderProps) -> String {
    let mut out = String::new();
    out.push_str("<header class=\"site-header\">\n");
    out.push_str(&format!("  <h2>{}</h2>\n", escape_html(&props.title)));
    out.push_str(&format!("  <p>{}</p>\n", escape_html(&props.content)));
    if let Some(links) = &props.navigation {
        out.push_str("  <nav class=\"site-nav\">");
        for link in links {
            out.push_str(&format!(
                "<a href=\"{}\">{}</a>",
                escape_html(&link.href),
                escape_html(&link.label)
            ));
        }
        out.push_str("</nav>\n");
    }
    out.push_str("</header>\n");
    out
}

fn render_hero(props: &HeroProps) -> String {
    let mut out = String::new();
    out.push_str("<section class=\"hero\">\n");
    out.push_str(&format!("  <h2>{}</h2>\n", escape_html(&props.title)));
    out.push_str(&format!(
        "  <p class=\"hero-subtitle\">{}</p>\n",
        escape_html(&props.subtitle)
    ));
    if let Some(cta) = &props.cta_text {
        out.push_str(&format!(
            "  <button class=\"cta-button\">{}</button>\n",
            escape_html(cta)
        ));
    }
    out.push_str("</section>\n");
    out
}

fn render_card_grid(props: &CardGridProps) -> String {
    let mut out = String::new();
    out.push_str("<section class=\"card-grid-section\">\n");
    out.push_str(&format!("  <h2>{}</h2>\n", escape_html(&props.title)));
    out.push_str(&format!("  <p>{}</p>\n", escape_html(&props.content)));

    if props.items.is_empty() {
        out.push_str("  <p class=\"empty-state\">No items available</p>\n");
    } else {
        out.push_str("  <div class=\"card-grid\">\n");
        for item in &props.items {
            out.push_str("    <div class=\"card\">\n");
            match &item.image {
                Some(src) => out.push_str(&format!(
                    "      <img class=\"card-image\" src=\"{}\" alt=\"{}\">\n",
                    escape_html(src),
                    escape_html(&item.title)
                )),
                None => out.push_str(
                    "      <div class=\"card-image placeholder\">No image</div>\n",
                ),
            }
            out.push_str("      <div class=\"card-body\">\n");
            out.push_str(&format!("        <h3>{}</h3>\n", escape_html(&item.title)));
            out.push_str(&format!(
                "        <p>{}</p>\n",
                escape_html(&item.description)
            ));
            if let Some(price) = &item.price {
                out.push_str(&format!(
                    "        <p class=\"card-price\">${}</p>\n",
                    escape_html(price)
                ));
            }
            if let Some(rating) = &item.rating {
                out.push_str(&format!(
                    "        <p class=\"card-rating\">{}/5</p>\n",
                    escape_html(rating)
                ));
            }
            out.push_str("      </div>\n    </div>\n");
        }
        out.push_str("  </div>\n");
    }

    out.push_str("</section>\n");
    out
}

fn render_section(props: &SectionProps) -> String {
    let mut out = String::new();
    out.push_str("<section class=\"content-section\">\n");
    out.push_str(&format!("  <h2>{}</h2>\n", escape_html(&props.title)));
    out.push_str(&format!("  <p>{}</p>\n", escape_html(&props.content)));
    if let Some(src) = &props.image {
        out.push_str(&format!(
            "  <img src=\"{}\" alt=\"{}\">\n",
            escape_html(src),
            escape_html(&props.title)
        ));
    }
    out.push_str("</section>\n");
    out
}

/// Table rendering keeps the source's first-row contract: the header row is
/// the first row's key set in that row's own order, and each body row emits
/// its values positionally in its own order. Rows with differing key sets
/// misalign under the first row's headers. This is preserved, not corrected.
fn render_trips_table(props: &TripsTableProps) -> String {
    let mut out = String::new();
    out.push_str("<section class=\"table-section\">\n");
    out.push_str(&format!("  <h2>{}</h2>\n", escape_html(&props.title)));
    out.push_str(&format!("  <p>{}</p>\n", escape_html(&props.content)));

    match props.rows.first() {
        None => out.push_str("  <p class=\"empty-state\">No data available</p>\n"),
        Some(first) => {
            out.push_str("  <table class=\"data-table\">\n    <thead>\n      <tr>");
            for key in first.keys() {
                out.push_str(&format!("<th>{}</th>", escape_html(key)));
            }
            out.push_str("</tr>\n    </thead>\n    <tbody>\n");
            for row in &props.rows {
                out.push_str("      <tr>");
                for value in row.values() {
                    out.push_str(&format!("<td>{}</td>", escape_html(&cell_text(value))));
                }
                out.push_str("</tr>\n");
            }
            out.push_str("    </tbody>\n  </table>\n");
        }
    }

    out.push_str("</section>\n");
    out
}

fn render_footer(props: &FooterProps) -> String {
    let mut out = String::new();
    out.push_str("<footer class=\"site-footer\">\n");
    out.push_str(&format!("  <h2>{}</h2>\n", escape_html(&props.title)));
    out.push_str(&format!("  <p>{}</p>\n", escape_html(&props.content)));
    if let Some(links) = &props.links {
        out.push_str("  <nav class=\"footer-links\">");
        for link in links {
            out.push_str(&format!(
                "<a href=\"{}\">{}</a>",
                escape_html(&link.href),
                escape_html(&link.label)
            ));
        }
        out.push_str("</nav>\n");
    }
    if let Some(social) = &props.social_media {
        out.push_str("  <div class=\"social-links\">");
        for link in social {
            out.push_str(&format!(
                "<a href=\"{}\">{}</a>",
                escape_html(&link.href),
                escape_html(&link.platform)
            ));
        }
        out.push_str("</div>\n");
    }
    out.push_str(&format!(
        "  <p class=\"copyright\">&copy; {}. All rights reserved.</p>\n",
        escape_html(&props.copyright_name)
    ));
    out.push_str("</footer>\n");
    out
}

fn render_unknown(props: &UnknownProps) -> String {
    let dump = serde_json::to_string_pretty(&Value::Object(props.raw.clone()))
        .unwrap_or_else(|_| "{}".to_string());
    let mut out = String::new();
    out.push_str("<section class=\"component-unknown\">\n");
    out.push_str(&format!("  <h2>{}</h2>\n", escape_html(&props.title)));
    out.push_str(&format!("  <p>{}</p>\n", escape_html(&props.content)));
    out.push_str(&format!(
        "  <pre class=\"props-dump\">{}</pre>\n",
        escape_html(&dump)
    ));
    out.push_str("</section>\n");
    out
}

/// Text form of a table cell value. Scalars print bare; nested structures
/// print as compact JSON.
fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => serde_json::to_string(other).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{CardItem, Link};

    #[test]
    fn escape_html_covers_special_characters() {
        assert_eq!(
            escape_html(r#"<b a="1">&'x'</b>"#),
            "&lt;b a=&quot;1&quot;&gt;&amp;&#39;x&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn header_omits_nav_when_absent() {
        let with_nav = render_header(&HeaderProps {
            title: "T".to_string(),
            content: "C".to_string(),
            navigation: Some(vec![Link {
                href: "/a".to_string(),
                label: "A".to_string(),
            }]),
        });
        assert!(with_nav.contains("<nav class=\"site-nav\">"));
        assert!(with_nav.contains("<a href=\"/a\">A</a>"));

        let without = render_header(&HeaderProps {
            title: "T".to_string(),
            content: "C".to_string(),
            navigation: None,
        });
        assert!(!without.contains("<nav"));
    }

    #[test]
    fn card_price_and_rating_are_decorated() {
        let grid = CardGridProps {
            title: "Grid".to_string(),
            content: "Cards".to_string(),
            items: vec![CardItem {
                image: None,
                title: "Trip".to_string(),
                description: "Desc".to_string(),
                price: Some("499".to_string()),
                rating: Some("4.5".to_string()),
            }],
        };
        let html = render_card_grid(&grid);
        assert!(html.contains("$499"));
        assert!(html.contains("4.5/5"));
        assert!(html.contains("No image"));
    }

    #[test]
    fn user_text_is_escaped() {
        let hero = render_hero(&HeroProps {
            title: "<script>alert(1)</script>".to_string(),
            subtitle: "a & b".to_string(),
            cta_text: None,
        });
        assert!(!hero.contains("<script>"));
        assert!(hero.contains("&lt;script&gt;"));
        assert!(hero.contains("a &amp; b"));
    }
}
