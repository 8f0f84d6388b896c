//! HTML head scraping.
//!
//! Only what link previews and source metadata need: `<meta>` attributes, the
//! document `<title>` and the first `<h1>`. Parsing goes through html5ever (via
//! `scraper`), so quoting, entities and broken markup follow browser rules;
//! nothing here fails.

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

static META: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("meta").expect("meta selector"));

static TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("title selector"));

static H1: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h1").expect("h1 selector"));

#[derive(Debug, Clone, Default)]
struct MetaTag {
    property: Option<String>,
    name: Option<String>,
    content: Option<String>,
}

/// Head-level facts scraped from one page.
///
/// Owns plain strings only, so it can be held across `.await` unlike
/// [`scraper::Html`].
#[derive(Debug, Clone, Default)]
pub struct HtmlDocument {
    metas: Vec<MetaTag>,
    title: Option<String>,
    first_h1: Option<String>,
}

impl HtmlDocument {
    pub fn parse(html: &str) -> Self {
        let document = Html::parse_document(html);

        let metas = document
            .select(&META)
            .map(|meta| {
                let attr = |key: &str| meta.value().attr(key).map(str::to_string);
                MetaTag {
                    property: attr("property"),
                    name: attr("name"),
                    content: attr("content"),
                }
            })
            .collect();

        Self {
            metas,
            title: document.select(&TITLE).next().and_then(text_content),
            first_h1: document.select(&H1).next().and_then(text_content),
        }
    }

    /// `content` of the first `<meta property="...">` with this property.
    pub fn meta_property(&self, property: &str) -> Option<String> {
        self.meta_content(|tag| tag.property.as_deref(), property)
    }

    /// `content` of the first `<meta name="...">` with this name.
    pub fn meta_name(&self, name: &str) -> Option<String> {
        self.meta_content(|tag| tag.name.as_deref(), name)
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn first_h1(&self) -> Option<&str> {
        self.first_h1.as_deref()
    }

    // The first tag carrying the key decides; an empty `content` there is absent.
    fn meta_content(&self, key: impl Fn(&MetaTag) -> Option<&str>, value: &str) -> Option<String> {
        self.metas
            .iter()
            .find(|tag| key(tag).is_some_and(|v| v.trim().eq_ignore_ascii_case(value)))
            .and_then(|tag| tag.content.as_deref())
            .map(str::trim)
            .filter(|content| !content.is_empty())
            .map(str::to_string)
    }
}

/// Visible text of an element: descendant text joined, whitespace collapsed.
fn text_content(element: ElementRef<'_>) -> Option<String> {
    let text: String = element.text().collect();
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    (!collapsed.is_empty()).then_some(collapsed)
}
