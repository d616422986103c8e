use scraper::Html;

/// A successfully fetched document.
///
/// The body stays a `String` so pages can cross await points and threads;
/// call [`Page::document`] to get a queryable tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// URL that was requested
    pub url: String,
    /// URL after redirects
    pub final_url: String,
    pub status: u16,
    pub duration_ms: u64,
    pub html: String,
}

impl Page {
    /// Build a page from in-memory HTML (fixtures, cached bodies).
    pub fn from_html(url: &str, html: impl Into<String>) -> Self {
        Self {
            url: url.to_string(),
            final_url: url.to_string(),
            status: 200,
            duration_ms: 0,
            html: html.into(),
        }
    }

    /// Parse the body into a document tree.
    pub fn document(&self) -> Html {
        Html::parse_document(&self.html)
    }
}
