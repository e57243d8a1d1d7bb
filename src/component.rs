//! Component classifier – turns a loose [`ComponentSpec`] (type string plus
//! free-form props bag) into the closed [`Component`] sum type with every
//! field default already applied.
//!
//! Field lookup follows an explicit ordered fallback: the first candidate
//! key that holds a usable value wins, otherwise the documented default.
//! Empty strings and nulls never win a fallback chain.

use serde_json::{Map, Value};

use crate::layout::ComponentSpec;

/// A classified component, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    Header(HeaderProps),
    Hero(HeroProps),
    CardGrid(CardGridProps),
    Section(SectionProps),
    TripsTable(TripsTableProps),
    Footer(FooterProps),
    /// Unrecognized type: rendered through the generic diagnostic path.
    Unknown(UnknownProps),
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderProps {
    pub title: String,
    pub content: String,
    /// `None` omits the nav element entirely; `Some(vec![])` renders an
    /// empty nav (a present-but-empty list is not treated as absent).
    pub navigation: Option<Vec<Link>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeroProps {
    pub title: String,
    pub subtitle: String,
    pub cta_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardGridProps {
    pub title: String,
    pub content: String,
    pub items: Vec<CardItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardItem {
    pub image: Option<String>,
    pub title: String,
    pub description: String,
    pub price: Option<String>,
    pub rating: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionProps {
    pub title: String,
    pub content: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TripsTableProps {
    pub title: String,
    pub content: String,
    /// Rows as parsed: header row is derived from the first row's own key
    /// order at render time.
    pub rows: Vec<Map<String, Value>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FooterProps {
    pub title: String,
    pub content: String,
    pub links: Option<Vec<Link>>,
    pub social_media: Option<Vec<SocialLink>>,
    /// Name used in the copyright line: the supplied title, or "Company".
    pub copyright_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnknownProps {
    pub title: String,
    pub content: String,
    /// The full props bag, dumped pretty-printed by the renderer.
    pub raw: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub href: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SocialLink {
    pub href: String,
    pub platform: String,
}

impl Component {
    /// Classify a spec into its component variant, applying all defaults.
    pub fn classify(spec: &ComponentSpec) -> Self {
        let empty = Map::new();
        let props = spec.props.as_ref().unwrap_or(&empty);

        match spec.kind.as_str() {
            "header" => Component::Header(HeaderProps {
                title: resolve_text(props, &["title"], "Header"),
                content: resolve_text(props, &["content"], "Navigation and branding section"),
                navigation: link_list(props, "navigation", "label", "Link")
                    .map(|links| links.into_iter().map(|(href, label)| Link { href, label }).collect()),
            }),
            "hero" => Component::Hero(HeroProps {
                title: resolve_text(props, &["title"], "Welcome"),
                subtitle: resolve_text(props, &["subtitle", "content"], "Hero section content"),
                cta_text: first_text(props, &["ctaText"]),
            }),
            "cardgrid" => Component::CardGrid(CardGridProps {
                title: resolve_text(props, &["title"], "Card Grid"),
                content: resolve_text(props, &["content"], "Grid of cards or items"),
                items: card_items(props),
            }),
            "section" => Component::Section(SectionProps {
                title: resolve_text(props, &["title"], "Section"),
                content: resolve_text(props, &["content"], "Section content"),
                image: first_text(props, &["image"]),
            }),
            "tripstable" => Component::TripsTable(TripsTableProps {
                title: resolve_text(props, &["title"], "Data Table"),
                content: resolve_text(props, &["content"], "Tabular data display"),
                rows: table_rows(props),
            }),
            "footer" => Component::Footer(FooterProps {
                title: resolve_text(props, &["title"], "Footer"),
                content: resolve_text(props, &["content"], "Footer content and links"),
                links: link_list(props, "links", "label", "Link")
                    .map(|links| links.into_iter().map(|(href, label)| Link { href, label }).collect()),
                social_media: link_list(props, "socialMedia", "platform", "Social")
                    .map(|links| {
                        links
                            .into_iter()
                            .map(|(href, platform)| SocialLink { href, platform })
                            .collect()
                    }),
                copyright_name: resolve_text(props, &["title"], "Company"),
            }),
            other => {
                log::debug!("Unknown component type '{other}', using generic renderer");
                Component::Unknown(UnknownProps {
                    title: resolve_text(props, &["title"], other),
                    content: resolve_text(props, &["content"], "Component content"),
                    raw: props.clone(),
                })
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Ordered default resolution
// ---------------------------------------------------------------------------

/// Text form of a scalar value. Empty strings, nulls, and structured values
/// do not count as text (they never win a fallback chain).
fn text_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// First candidate key holding a usable text value.
pub fn first_text(props: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|k| props.get(*k).and_then(text_value))
}

/// First candidate key holding a usable text value, or the default.
pub fn resolve_text(props: &Map<String, Value>, keys: &[&str], default: &str) -> String {
    first_text(props, keys).unwrap_or_else(|| default.to_string())
}

/// An optional link list under `key`. Returns `(href, label)` pairs; a
/// present-but-empty array stays `Some(vec![])`. Non-object entries are
/// dropped.
fn link_list(
    props: &Map<String, Value>,
    key: &str,
    label_key: &str,
    label_default: &str,
) -> Option<Vec<(String, String)>> {
    let entries = props.get(key)?.as_array()?;
    Some(
        entries
            .iter()
            .filter_map(|entry| entry.as_object())
            .map(|obj| {
                (
                    resolve_text(obj, &["href"], "#"),
                    resolve_text(obj, &[label_key], label_default),
                )
            })
            .collect(),
    )
}

/// Card grid items: `items`, else `cards`, else `destinations` — the first
/// non-empty array wins. Non-object entries are dropped.
fn card_items(props: &Map<String, Value>) -> Vec<CardItem> {
    let entries = ["items", "cards", "destinations"]
        .iter()
        .filter_map(|k| props.get(*k).and_then(Value::as_array))
        .find(|a| !a.is_empty());

    let Some(entries) = entries else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| entry.as_object())
        .map(|obj| CardItem {
            image: first_text(obj, &["image", "imageUrl"]),
            title: resolve_text(obj, &["title", "name"], "Item"),
            description: resolve_text(obj, &["description", "content"], "Description"),
            price: first_text(obj, &["price"]),
            rating: first_text(obj, &["rating"]),
        })
        .collect()
}

/// Table rows: `data` if present, else `items`, default empty. Presence
/// wins here, not non-emptiness — `data: []` shadows a populated `items`.
/// Non-object rows are skipped with a warning.
fn table_rows(props: &Map<String, Value>) -> Vec<Map<String, Value>> {
    let entries = ["data", "items"]
        .iter()
        .find_map(|k| props.get(*k).and_then(Value::as_array));

    let Some(entries) = entries else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|row| match row.as_object() {
            Some(obj) => Some(obj.clone()),
            None => {
                log::warn!("Skipping non-object table row: {row}");
                None
            }
        })
        .collect()
}
