use serde::{Deserialize, Serialize};

/// The URL an extraction run was asked to process.
#[derive(Debug, Clone)]
pub struct ExtractionTarget {
    /// URL as given on the command line, before any redirects.
    pub requested_url: String,
}

impl ExtractionTarget {
    pub fn new(requested_url: &str) -> Self {
        Self {
            requested_url: requested_url.to_string(),
        }
    }
}

/// Immutable data captured from a single page render.
///
/// Produced once per run by the page fetcher and never mutated
/// afterwards; everything downstream is a pure function of this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSnapshot {
    /// URL the navigation actually resolved to, after redirects.
    pub final_url: String,

    /// Page title (empty if the document has none).
    pub title: String,

    /// Rendered body text.
    pub body_text: String,

    /// Raw anchor href values, in document order, duplicates included.
    pub anchor_hrefs: Vec<String>,

    /// Raw script src values, in document order, duplicates included.
    pub script_srcs: Vec<String>,
}

impl PageSnapshot {
    pub fn new(
        final_url: String,
        title: String,
        body_text: String,
        anchor_hrefs: Vec<String>,
        script_srcs: Vec<String>,
    ) -> Self {
        Self {
            final_url,
            title,
            body_text,
            anchor_hrefs,
            script_srcs,
        }
    }
}

/// The three artifact sets produced by one run.
///
/// Each vector is duplicate-free and sorted ascending by code point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Distinct lowercase words from the title and body text.
    pub words: Vec<String>,

    /// Absolute in-scope hyperlinks, excluding the page's own URL.
    pub urls: Vec<String>,

    /// Absolute script resource URLs with query strings removed.
    pub scripts: Vec<String>,
}

impl ExtractionResult {
    pub fn new(words: Vec<String>, urls: Vec<String>, scripts: Vec<String>) -> Self {
        Self {
            words,
            urls,
            scripts,
        }
    }
}
