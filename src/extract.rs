//! HTML content extraction
//!
//! Pulls the page title, meta description, h1/h2/h3 headings and paragraph
//! text out of a fetched document. Extraction is lenient: missing elements
//! and malformed markup produce empty values, never errors.

use scraper::{ElementRef, Html, Selector};

/// Text content extracted from one page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedContent {
    /// Text of the first `<title>` element, untrimmed
    pub title: String,

    /// `content` attribute of `<meta name="description">`
    pub meta_description: String,

    /// One entry per `<h1>`, in document order
    pub h1: Vec<String>,

    /// One entry per `<h2>`, in document order
    pub h2: Vec<String>,

    /// One entry per `<h3>`, in document order
    pub h3: Vec<String>,

    /// Trimmed `<p>` text, empty paragraphs dropped
    pub paragraphs: Vec<String>,
}

impl ExtractedContent {
    /// All headings, h1 first, then h2, then h3
    pub fn headings(&self) -> impl Iterator<Item = &str> {
        self.h1
            .iter()
            .chain(&self.h2)
            .chain(&self.h3)
            .map(String::as_str)
    }
}

/// Parses HTML and extracts its text content
///
/// # Example
///
/// ```
/// use page_pulse::extract;
///
/// let content = extract("<title>Hi</title><p>Great news today</p><p>   </p>");
/// assert_eq!(content.title, "Hi");
/// assert_eq!(content.paragraphs, vec!["Great news today".to_string()]);
/// assert!(content.h1.is_empty());
/// ```
pub fn extract(html: &str) -> ExtractedContent {
    let document = Html::parse_document(html);

    ExtractedContent {
        title: extract_title(&document),
        meta_description: extract_meta_description(&document),
        h1: select_texts(&document, "h1"),
        h2: select_texts(&document, "h2"),
        h3: select_texts(&document, "h3"),
        paragraphs: extract_paragraphs(&document),
    }
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

fn extract_title(document: &Html) -> String {
    let Ok(selector) = Selector::parse("title") else {
        return String::new();
    };

    document
        .select(&selector)
        .next()
        .map(element_text)
        .unwrap_or_default()
}

fn extract_meta_description(document: &Html) -> String {
    let Ok(selector) = Selector::parse(r#"meta[name="description"]"#) else {
        return String::new();
    };

    document
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr("content"))
        .unwrap_or_default()
        .to_string()
}

fn select_texts(document: &Html, selector: &str) -> Vec<String> {
    match Selector::parse(selector) {
        Ok(selector) => document.select(&selector).map(element_text).collect(),
        Err(_) => Vec::new(),
    }
}

fn extract_paragraphs(document: &Html) -> Vec<String> {
    select_texts(document, "p")
        .into_iter()
        .filter_map(|text| {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .collect()
}
