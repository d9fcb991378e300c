use crate::error::BeoError;
use std::path::Path;

/// Page separator emitted by PDF text extractors
pub const PAGE_BREAK: char = '\x0C';

/// One page of extracted text, split into lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    lines: Vec<String>,
}

impl Page {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// Extracted document text as ordered pages of ordered lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pages: Vec<Page>,
}

impl Document {
    /// Split extracted text into pages on form feeds, then into lines
    pub fn from_text(text: &str) -> Self {
        let pages = text
            .split(PAGE_BREAK)
            .map(|page| Page::new(page.lines().map(str::to_string).collect()))
            .collect();

        Self { pages }
    }

    /// Build a document from pages that are already split into lines
    pub fn from_pages<I, P, L>(pages: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: IntoIterator<Item = L>,
        L: Into<String>,
    {
        let pages = pages
            .into_iter()
            .map(|page| Page::new(page.into_iter().map(Into::into).collect()))
            .collect();

        Self { pages }
    }

    /// Read a text file; bytes that are not valid UTF-8 are replaced
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BeoError> {
        let bytes = std::fs::read(path)?;
        Ok(Self::from_text(&String::from_utf8_lossy(&bytes)))
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn line_count(&self) -> usize {
        self.pages.iter().map(Page::line_count).sum()
    }

    /// Every line in document order, page by page
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().flat_map(|page| page.lines())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_page_text() {
        let doc = Document::from_text("line1\nline2\nline3");
        assert_eq!(doc.page_count(), 1);
        assert_eq!(doc.line_count(), 3);
        assert_eq!(doc.lines().collect::<Vec<_>>(), vec!["line1", "line2", "line3"]);
    }

    #[test]
    fn test_form_feed_splits_pages() {
        let doc = Document::from_text("a\nb\n\x0Cc\r\nd\n");
        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.pages()[0].line_count(), 2);
        assert_eq!(doc.pages()[1].lines().collect::<Vec<_>>(), vec!["c", "d"]);
    }

    #[test]
    fn test_empty_pages_have_no_lines() {
        let doc = Document::from_text("\x0C\x0Conly\x0C");
        assert_eq!(doc.page_count(), 4);
        assert_eq!(doc.line_count(), 1);
        assert_eq!(doc.pages()[0].line_count(), 0);
    }

    #[test]
    fn test_empty_text() {
        let doc = Document::from_text("");
        assert_eq!(doc.line_count(), 0);
    }

    #[test]
    fn test_from_pages_keeps_order() {
        let doc = Document::from_pages(vec![vec!["p1 l1", "p1 l2"], vec![], vec!["p3 l1"]]);
        assert_eq!(doc.page_count(), 3);
        assert_eq!(
            doc.lines().collect::<Vec<_>>(),
            vec!["p1 l1", "p1 l2", "p3 l1"]
        );
    }

    #[test]
    fn test_load_lossy_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("beo.txt");
        std::fs::write(&path, b"Caf\xE9 Quote #:1\n9:00 AM - 10:00 AM Envoy").unwrap();

        let doc = Document::load(&path).unwrap();
        assert_eq!(doc.line_count(), 2);
        assert!(doc.lines().next().unwrap().ends_with("Quote #:1"));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            Document::load("/no/such/beo.txt"),
            Err(BeoError::Io(_))
        ));
    }
}
