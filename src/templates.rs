//! Sample layout documents for testing and demonstration.
//!
//! Each layout exercises different component types and prop shapes.

/// Minimal layout for unit testing: no overrides, no components.
pub fn minimal_layout() -> &'static str {
    r#"{ "title": "Minimal", "components": [] }"#
}

/// Landing-page layout with header, hero, cards, section, and footer.
pub fn landing_layout() -> &'static str {
    r##"{
  "title": "Acme Cloud",
  "description": "Infrastructure that stays out of your way.",
  "colors": {
    "primary": "#0f766e",
    "accent": "#ea580c"
  },
  "components": [
    {
      "type": "header",
      "props": {
        "title": "Acme Cloud",
        "content": "Deploy in seconds",
        "navigation": [
          { "href": "/features", "label": "Features" },
          { "href": "/pricing", "label": "Pricing" },
          { "href": "/docs", "label": "Docs" }
        ]
      }
    },
    {
      "type": "hero",
      "props": {
        "title": "Ship faster",
        "subtitle": "From git push to production in under a minute.",
        "ctaText": "Start free trial"
      }
    },
    {
      "type": "cardgrid",
      "props": {
        "title": "Plans",
        "content": "Pick what fits your team.",
        "cards": [
          { "title": "Starter", "description": "For side projects", "price": 9 },
          { "title": "Team", "description": "For growing teams", "price": 49 },
          { "title": "Enterprise", "description": "For large fleets" }
        ]
      }
    },
    {
      "type": "section",
      "props": {
        "title": "Why Acme",
        "content": "Built-in observability, zero-config TLS, and global edge caching.",
        "image": "https://example.com/diagram.png"
      }
    },
    {
      "type": "footer",
      "props": {
        "title": "Acme Cloud",
        "content": "Made with care.",
        "links": [
          { "href": "/terms", "label": "Terms" },
          { "href": "/privacy", "label": "Privacy" }
        ],
        "socialMedia": [
          { "href": "https://github.com/acme", "platform": "GitHub" }
        ]
      }
    }
  ]
}"##
}

/// Travel layout exercising destinations-sourced cards and a data table.
pub fn travel_layout() -> &'static str {
    r##"{
  "title": "Wander",
  "description": "Curated trips for the curious.",
  "fonts": { "body": "Georgia, 'Times New Roman', serif" },
  "components": [
    {
      "type": "cardgrid",
      "props": {
        "title": "Destinations",
        "destinations": [
          {
            "name": "Kyoto",
            "content": "Temples, gardens, and quiet alleys.",
            "image": "https://example.com/kyoto.jpg",
            "price": 1850,
            "rating": 4.8
          },
          {
            "name": "Lisbon",
            "content": "Hills, tiles, and custard tarts.",
            "price": 990,
            "rating": 4.6
          }
        ]
      }
    },
    {
      "type": "tripstable",
      "props": {
        "title": "Upcoming departures",
        "content": "All prices per person, double occupancy.",
        "data": [
          { "trip": "Kyoto in Autumn", "departs": "2026-10-12", "days": 9, "price": "$1,850" },
          { "trip": "Lisbon Long Weekend", "departs": "2026-09-04", "days": 4, "price": "$990" },
          { "trip": "Patagonia Trek", "departs": "2026-11-20", "days": 12, "price": "$3,400" }
        ]
      }
    },
    { "type": "footer", "props": { "title": "Wander" } }
  ]
}"##
}

/// Layout exercising every component type, including the unknown fallback
/// and the empty-list placeholders.
pub fn all_components_layout() -> &'static str {
    r##"{
  "components": [
    { "type": "header" },
    { "type": "hero" },
    { "type": "cardgrid", "props": { "items": [] } },
    { "type": "section" },
    { "type": "tripstable", "props": { "data": [] } },
    { "type": "footer" },
    { "type": "countdown", "props": { "target": "2026-12-31", "label": "Launch" } }
  ]
}"##
}

/// Layout with precompiled markup: the compiler must return it verbatim.
pub fn precompiled_layout() -> &'static str {
    r##"{
  "title": "Ignored when precompiled",
  "htmlCode": "<!DOCTYPE html><html><body><p>canned</p></body></html>",
  "cssCode": "p { color: teal; }"
}"##
}
