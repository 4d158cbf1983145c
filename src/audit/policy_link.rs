//! Locate a site's privacy-policy link.

use crate::fetch::page::FetchedPage;

/// Find the best-effort privacy-policy URL on a page.
///
/// Scans hrefs in document order and returns the first one whose
/// lowercased text contains `"privacy"`; document order decides ties,
/// not relevance. Returns `None` when the page is absent or nothing
/// matches.
pub fn find_privacy_link(page: Option<&FetchedPage>, origin: &str) -> Option<String> {
    let page = page?;
    page.links()
        .into_iter()
        .find(|href| href.to_lowercase().contains("privacy"))
        .map(|href| resolve(origin, &href))
}

/// Join an href against the page's origin.
///
/// Absolute hrefs pass through untouched. Everything else gets a
/// single-level `origin + "/" + href` join with slash normalization,
/// deliberately not full relative-reference resolution, which would
/// change which URLs the audit visits.
fn resolve(origin: &str, href: &str) -> String {
    if href.starts_with("http") {
        href.to_string()
    } else {
        format!(
            "{}/{}",
            origin.trim_end_matches('/'),
            href.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(html: &str) -> FetchedPage {
        FetchedPage::new("https://example.com", html)
    }

    #[test]
    fn test_first_match_wins() {
        let page = page(
            r#"<a href="/about">x</a>
               <a href="/privacy-old">x</a>
               <a href="/privacy-new">x</a>"#,
        );
        let link = find_privacy_link(Some(&page), "https://example.com");
        assert_eq!(link.as_deref(), Some("https://example.com/privacy-old"));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let page = page(r#"<a href="/PRIVACY">Privacy</a>"#);
        let link = find_privacy_link(Some(&page), "https://example.com");
        assert_eq!(link.as_deref(), Some("https://example.com/PRIVACY"));
    }

    #[test]
    fn test_absolute_href_passes_through() {
        let page = page(r#"<a href="https://legal.example.net/privacy">Privacy</a>"#);
        let link = find_privacy_link(Some(&page), "https://example.com");
        assert_eq!(link.as_deref(), Some("https://legal.example.net/privacy"));
    }

    #[test]
    fn test_relative_href_joins_origin() {
        let page = page(r#"<a href="policy/privacy">Privacy</a>"#);
        let link = find_privacy_link(Some(&page), "https://example.com");
        assert_eq!(link.as_deref(), Some("https://example.com/policy/privacy"));
    }

    #[test]
    fn test_slash_normalization() {
        let page = page(r#"<a href="/privacy">Privacy</a>"#);
        let link = find_privacy_link(Some(&page), "https://example.com/");
        assert_eq!(link.as_deref(), Some("https://example.com/privacy"));
    }

    #[test]
    fn test_absent_page_yields_none() {
        assert_eq!(find_privacy_link(None, "https://example.com"), None);
    }

    #[test]
    fn test_no_matching_link_yields_none() {
        let page = page(r#"<a href="/about">About</a><a href="/terms">Terms</a>"#);
        assert_eq!(find_privacy_link(Some(&page), "https://example.com"), None);
    }
}
