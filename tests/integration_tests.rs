//! Integration tests for the markup-forge compiler.
//!
//! These tests validate:
//! - Determinism and cache short-circuit behaviour
//! - Default substitution and component order preservation
//! - Empty-list placeholders and the unrecognized-type fallback
//! - Stylesheet identity between embedded and standalone CSS

use serde_json::json;
use sha2::{Digest, Sha256};

use markup_forge::layout::{ColorPalette, ComponentSpec, Layout};
use markup_forge::pipeline::{compile, compile_json, CompileError};
use markup_forge::templates;

// =====================================================================
// Helpers
// =====================================================================

fn component(kind: &str, props: serde_json::Value) -> ComponentSpec {
    ComponentSpec::with_props(kind, props.as_object().unwrap().clone())
}

fn sha256_hex(input: &str) -> String {
    let digest = Sha256::digest(input.as_bytes());
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

/// The stylesheet as embedded in the document's <style> element.
fn embedded_css(html: &str) -> &str {
    let start = html.find("<style>\n").expect("Missing <style>") + "<style>\n".len();
    let end = html.find("</style>").expect("Missing </style>");
    &html[start..end]
}

// =====================================================================
// Determinism
// =====================================================================

#[test]
fn equal_layouts_compile_identically() {
    let layout = Layout::from_json(templates::landing_layout()).unwrap();
    let first = compile(&layout);
    let second = compile(&layout.clone());
    assert_eq!(first.html, second.html);
    assert_eq!(first.css, second.css);
    assert_eq!(sha256_hex(&first.html), sha256_hex(&second.html));
}

#[test]
fn sample_layouts_compile_deterministically() {
    for json in [
        templates::minimal_layout(),
        templates::landing_layout(),
        templates::travel_layout(),
        templates::all_components_layout(),
    ] {
        let a = compile_json(json).unwrap();
        let b = compile_json(json).unwrap();
        assert_eq!(a, b);
    }
}

// =====================================================================
// Cache short-circuit
// =====================================================================

#[test]
fn precompiled_markup_returned_verbatim() {
    let out = compile_json(templates::precompiled_layout()).unwrap();
    assert_eq!(
        out.html,
        "<!DOCTYPE html><html><body><p>canned</p></body></html>"
    );
    assert_eq!(out.css, "p { color: teal; }");
    // Other fields are ignored on this path.
    assert!(!out.html.contains("Ignored when precompiled"));
}

#[test]
fn one_precompiled_field_is_not_enough() {
    let layout = Layout {
        html_code: Some("<p>half</p>".to_string()),
        ..Layout::default()
    };
    let out = compile(&layout);
    assert_ne!(out.html, "<p>half</p>");
    assert!(out.html.contains("<!DOCTYPE html>"));
}

// =====================================================================
// Default substitution
// =====================================================================

#[test]
fn empty_layout_renders_defaults() {
    let out = compile(&Layout::default());
    assert!(out.html.contains("<title>Generated Layout</title>"));
    assert!(out.html.contains("<h1>Generated Layout</h1>"));
    assert!(out.html.contains("<p>This is a generated layout.</p>"));
    assert!(out.html.contains("<div class=\"components\">\n</div>"));
}

#[test]
fn component_defaults_applied_per_type() {
    let out = compile_json(templates::all_components_layout()).unwrap();
    for expected in [
        "Header",
        "Navigation and branding section",
        "Welcome",
        "Hero section content",
        "Card Grid",
        "Section content",
        "Data Table",
        "Footer content and links",
    ] {
        assert!(out.html.contains(expected), "Missing default '{expected}'");
    }
}

// =====================================================================
// Order preservation
// =====================================================================

#[test]
fn component_order_is_preserved() {
    let layout = Layout {
        components: vec![
            component("section", json!({ "title": "Alpha" })),
            component("section", json!({ "title": "Beta" })),
            component("section", json!({ "title": "Gamma" })),
        ],
        ..Layout::default()
    };
    let out = compile(&layout);

    let alpha = out.html.find("<h2>Alpha</h2>").expect("Alpha missing");
    let beta = out.html.find("<h2>Beta</h2>").expect("Beta missing");
    let gamma = out.html.find("<h2>Gamma</h2>").expect("Gamma missing");
    assert!(alpha < beta && beta < gamma, "Components reordered");

    assert_eq!(out.html.matches("<h2>Alpha</h2>").count(), 1);
    assert_eq!(out.html.matches("<h2>Beta</h2>").count(), 1);
    assert_eq!(out.html.matches("<h2>Gamma</h2>").count(), 1);
}

// =====================================================================
// Empty-list placeholders
// =====================================================================

#[test]
fn empty_cardgrid_renders_placeholder() {
    let layout = Layout {
        components: vec![component("cardgrid", json!({ "items": [] }))],
        ..Layout::default()
    };
    let out = compile(&layout);
    assert!(out.html.contains("No items available"));
    assert!(!out.html.contains("<div class=\"card\">"));
}

#[test]
fn empty_tripstable_renders_placeholder() {
    let layout = Layout {
        components: vec![component("tripstable", json!({ "data": [] }))],
        ..Layout::default()
    };
    let out = compile(&layout);
    assert!(out.html.contains("No data available"));
    assert!(!out.html.contains("<table"));
}

// =====================================================================
// Unrecognized type fallback
// =====================================================================

#[test]
fn unknown_type_renders_diagnostic_dump() {
    let layout = Layout {
        components: vec![component("widget", json!({ "foo": 1 }))],
        ..Layout::default()
    };
    let out = compile(&layout);
    assert!(out.html.contains("<h2>widget</h2>"));
    assert!(out.html.contains("Component content"));
    assert!(out.html.contains("&quot;foo&quot;"));
    assert!(out.html.contains('1'));
}

// =====================================================================
// Stylesheet identity and color substitution
// =====================================================================

#[test]
fn embedded_and_standalone_css_are_identical() {
    for json in [
        templates::minimal_layout(),
        templates::landing_layout(),
        templates::travel_layout(),
    ] {
        let out = compile_json(json).unwrap();
        assert_eq!(embedded_css(&out.html), out.css);
    }
}

#[test]
fn primary_color_reaches_every_mapped_position() {
    let layout = Layout {
        colors: Some(ColorPalette {
            primary: Some("#ABCDEF".to_string()),
            ..ColorPalette::default()
        }),
        ..Layout::default()
    };
    let out = compile(&layout);
    let hits = out.css.matches("#ABCDEF").count();
    assert!(hits >= 3, "Primary color substituted only {hits} times");

    // The default primary must be fully displaced.
    assert!(!out.css.contains("#2563eb"));
}

#[test]
fn font_override_lands_in_css() {
    let out = compile_json(templates::travel_layout()).unwrap();
    assert!(out.css.contains("Georgia, 'Times New Roman', serif"));
}

// =====================================================================
// Table rendering
// =====================================================================

#[test]
fn table_headers_come_from_first_row_in_order() {
    let layout = Layout {
        components: vec![component(
            "tripstable",
            json!({
                "data": [
                    { "trip": "Kyoto", "days": 9, "price": "$1,850" },
                    { "trip": "Lisbon", "days": 4, "price": "$990" }
                ]
            }),
        )],
        ..Layout::default()
    };
    let out = compile(&layout);
    assert!(out
        .html
        .contains("<tr><th>trip</th><th>days</th><th>price</th></tr>"));
    assert!(out
        .html
        .contains("<tr><td>Kyoto</td><td>9</td><td>$1,850</td></tr>"));
}

#[test]
fn heterogeneous_rows_misalign_positionally() {
    // The second row's keys differ from the first; its values still render
    // positionally under the first row's headers. Preserved source quirk.
    let layout = Layout {
        components: vec![component(
            "tripstable",
            json!({
                "data": [
                    { "name": "Kyoto", "price": 1850 },
                    { "price": 990, "name": "Lisbon" }
                ]
            }),
        )],
        ..Layout::default()
    };
    let out = compile(&layout);
    assert!(out.html.contains("<tr><th>name</th><th>price</th></tr>"));
    assert!(out.html.contains("<tr><td>Kyoto</td><td>1850</td></tr>"));
    // Misaligned: 990 lands under "name".
    assert!(out.html.contains("<tr><td>990</td><td>Lisbon</td></tr>"));
}

#[test]
fn tripstable_rows_fall_back_to_items() {
    let layout = Layout {
        components: vec![component(
            "tripstable",
            json!({ "items": [{ "city": "Oslo" }] }),
        )],
        ..Layout::default()
    };
    let out = compile(&layout);
    assert!(out.html.contains("<th>city</th>"));
    assert!(out.html.contains("<td>Oslo</td>"));
}

// =====================================================================
// Card grid rendering
// =====================================================================

#[test]
fn destinations_feed_card_grid() {
    let out = compile_json(templates::travel_layout()).unwrap();
    assert!(out.html.contains("<h3>Kyoto</h3>"));
    assert!(out.html.contains("$1850"));
    assert!(out.html.contains("4.8/5"));
    // Lisbon has no image: placeholder path.
    assert!(out.html.contains("No image"));
}

#[test]
fn card_item_field_fallbacks() {
    let layout = Layout {
        components: vec![component(
            "cardgrid",
            json!({ "items": [ {} ] }),
        )],
        ..Layout::default()
    };
    let out = compile(&layout);
    assert!(out.html.contains("<h3>Item</h3>"));
    assert!(out.html.contains("<p>Description</p>"));
}

// =====================================================================
// Escaping
// =====================================================================

#[test]
fn user_text_is_escaped_in_output() {
    let layout = Layout {
        title: Some("<script>alert('x')</script>".to_string()),
        components: vec![component(
            "section",
            json!({ "title": "a < b", "content": "Tom & Jerry" }),
        )],
        ..Layout::default()
    };
    let out = compile(&layout);
    assert!(!out.html.contains("<script>alert"));
    assert!(out.html.contains("&lt;script&gt;"));
    assert!(out.html.contains("a &lt; b"));
    assert!(out.html.contains("Tom &amp; Jerry"));
}

// =====================================================================
// JSON entry point
// =====================================================================

#[test]
fn null_layout_fails_fast() {
    match compile_json("null") {
        Err(CompileError::InvalidInput(_)) => {}
        other => panic!("Expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn garbage_input_is_a_parse_error() {
    match compile_json("{ not json") {
        Err(CompileError::Parse(_)) => {}
        other => panic!("Expected Parse error, got {other:?}"),
    }
}

#[test]
fn output_json_contains_both_strings() {
    let out = compile_json(templates::minimal_layout()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out.to_json()).unwrap();
    assert_eq!(value["html"].as_str().unwrap(), out.html);
    assert_eq!(value["css"].as_str().unwrap(), out.css);
}

// =====================================================================
// Footer
// =====================================================================

#[test]
fn footer_always_appends_copyright() {
    let unnamed = compile(&Layout {
        components: vec![ComponentSpec::new("footer")],
        ..Layout::default()
    });
    assert!(unnamed.html.contains("&copy; Company. All rights reserved."));

    let named = compile_json(templates::landing_layout()).unwrap();
    assert!(named.html.contains("&copy; Acme Cloud. All rights reserved."));
}

#[test]
fn footer_links_and_social_render_in_order() {
    let out = compile_json(templates::landing_layout()).unwrap();
    assert!(out.html.contains("<a href=\"/terms\">Terms</a>"));
    assert!(out.html.contains("<a href=\"/privacy\">Privacy</a>"));
    assert!(out.html.contains("<a href=\"https://github.com/acme\">GitHub</a>"));
    let terms = out.html.find("/terms").unwrap();
    let privacy = out.html.find("/privacy").unwrap();
    assert!(terms < privacy);
}
