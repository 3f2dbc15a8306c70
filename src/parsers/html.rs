use scraper::{Html, Selector};

/// Extracts the document title text, empty if the page has none.
pub fn extract_title(html: &str) -> String {
    let doc = Html::parse_document(html);
    let selector = Selector::parse("title").unwrap();
    doc.select(&selector)
        .flat_map(|n| n.text())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Extracts the rendered body text with whitespace collapsed to
/// single spaces.
pub fn extract_body_text(html: &str) -> String {
    let doc = Html::parse_document(html);
    let selector = Selector::parse("body").unwrap();
    doc.select(&selector)
        .flat_map(|n| n.text())
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Extracts raw anchor href values in document order.
pub fn extract_anchor_hrefs(html: &str) -> Vec<String> {
    let doc = Html::parse_document(html);
    let selector = Selector::parse("a[href]").unwrap();
    let hrefs = doc
        .select(&selector)
        .filter_map(|e| e.value().attr("href"))
        .map(|s| s.to_string())
        .collect::<Vec<String>>();

    ::log::debug!("HTML parser found {} anchors", hrefs.len());
    hrefs
}

/// Extracts raw script src values in document order.
pub fn extract_script_srcs(html: &str) -> Vec<String> {
    let doc = Html::parse_document(html);
    let selector = Selector::parse("script[src]").unwrap();
    let srcs = doc
        .select(&selector)
        .filter_map(|e| e.value().attr("src"))
        .map(|s| s.to_string())
        .collect::<Vec<String>>();

    ::log::debug!("HTML parser found {} script sources", srcs.len());
    srcs
}
