//! HTML parser for archive pages
//!
//! Parsing never fails: html5ever recovers from broken markup, so a bad page
//! simply yields fewer anchors.

use scraper::{Html, Selector};

/// An `<a>` element as seen by the classifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    /// Raw `href` attribute, if present
    pub href: Option<String>,

    /// Text content with surrounding whitespace trimmed
    pub text: String,
}

/// Parses page markup into a document tree
pub fn parse_page(html: &str) -> Html {
    Html::parse_document(html)
}

/// Lists every anchor in the document, in document order
pub fn extract_anchors(document: &Html) -> Vec<Anchor> {
    let Ok(selector) = Selector::parse("a") else {
        return Vec::new();
    };

    document
        .select(&selector)
        .map(|element| Anchor {
            href: element.value().attr("href").map(str::to_string),
            text: element.text().collect::<String>().trim().to_string(),
        })
        .collect()
}
