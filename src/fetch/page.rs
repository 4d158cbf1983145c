//! A successfully fetched HTML page.
//!
//! Stores only the raw body; links, input names, and visible text are
//! extracted on demand so a page that is never classified costs nothing
//! beyond its body.

use scraper::{Html, Selector};
use std::sync::LazyLock;

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").unwrap());

static INPUT_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("input").unwrap());

/// The result of one successful page fetch.
///
/// Owned by the audit that produced it; pages are never shared or cached
/// across audits.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    url: String,
    html: String,
}

impl FetchedPage {
    pub fn new(url: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            html: html.into(),
        }
    }

    /// The URL this page was fetched from.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The raw HTML body.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// All `<a href>` values, in document order.
    pub fn links(&self) -> Vec<String> {
        let doc = Html::parse_document(&self.html);
        doc.select(&ANCHOR_SELECTOR)
            .filter_map(|a| a.value().attr("href"))
            .map(str::to_string)
            .collect()
    }

    /// The `name` attributes of all `<input>` elements, in document order.
    ///
    /// Inputs without a `name` attribute are skipped.
    pub fn input_names(&self) -> Vec<String> {
        let doc = Html::parse_document(&self.html);
        doc.select(&INPUT_SELECTOR)
            .filter_map(|i| i.value().attr("name"))
            .map(str::to_string)
            .collect()
    }

    /// The concatenated text content of the document.
    ///
    /// Text nodes are joined without separators, so keyword matching sees
    /// the same stream a plain text dump of the page would produce.
    pub fn text(&self) -> String {
        let doc = Html::parse_document(&self.html);
        doc.root_element().text().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_in_document_order() {
        let page = FetchedPage::new(
            "https://example.com",
            r#"<html><body>
                <a href="/about">About</a>
                <a href="/privacy-old">Old policy</a>
                <a href="/privacy-new">New policy</a>
                <a>No href</a>
            </body></html>"#,
        );
        assert_eq!(page.links(), vec!["/about", "/privacy-old", "/privacy-new"]);
    }

    #[test]
    fn test_input_names_skip_unnamed() {
        let page = FetchedPage::new(
            "https://example.com",
            r#"<form>
                <input name="email_address" type="text">
                <input type="submit">
                <input name="phone">
            </form>"#,
        );
        assert_eq!(page.input_names(), vec!["email_address", "phone"]);
    }

    #[test]
    fn test_text_spans_nested_markup() {
        let page = FetchedPage::new(
            "https://example.com",
            "<p>We require <b>parental consent</b> for all accounts.</p>",
        );
        assert!(page.text().contains("parental consent"));
    }
}
