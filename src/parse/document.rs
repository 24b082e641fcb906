//! Lenient HTML document wrapper.

use scraper::{ElementRef, Html, Selector};

/// A parsed HTML document.
///
/// Parsing never fails: html5ever recovers from unclosed tags, stray quotes
/// and non-HTML text, producing at worst an empty `html/head/body` skeleton.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML text into a queryable tree.
    pub fn parse(html_text: &str) -> Self {
        Document {
            html: Html::parse_document(html_text),
        }
    }

    /// All elements carrying `attribute`, in document order.
    pub fn find_with_attribute(&self, attribute: &str) -> Vec<ElementRef<'_>> {
        self.select(&format!("[{attribute}]"))
    }

    /// All `tag` elements carrying `attribute`, in document order.
    pub fn find_tag_with_attribute(&self, tag: &str, attribute: &str) -> Vec<ElementRef<'_>> {
        self.select(&format!("{tag}[{attribute}]"))
    }

    fn select(&self, selector_str: &str) -> Vec<ElementRef<'_>> {
        match Selector::parse(selector_str) {
            Ok(selector) => self.html.select(&selector).collect(),
            Err(e) => {
                log::warn!("Invalid selector {selector_str:?}: {e}");
                Vec::new()
            }
        }
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("errors", &self.html.errors.len())
            .finish()
    }
}
