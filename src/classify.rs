use crate::normalize::normalize;
use url::Url;

/// Filters anchor hrefs down to the in-scope URL set.
///
/// Each href is resolved against the final (post-redirect) page URL.
/// Scope is a plain string-prefix test against that URL: an absolute
/// form qualifies iff its string representation starts with the final
/// URL's string. This over-matches sibling paths that merely share the
/// prefix; true scheme+host comparison would be stricter. The page's
/// own URL is never part of the set. Unparseable hrefs are skipped.
pub fn scope_urls(final_url: &Url, hrefs: &[String]) -> Vec<String> {
    let scope = final_url.as_str();
    let in_scope = hrefs
        .iter()
        .filter_map(|href| match final_url.join(href) {
            Ok(resolved) => Some(resolved.to_string()),
            Err(e) => {
                ::log::debug!("Skipping unparseable href {}: {}", href, e);
                None
            }
        })
        .filter(|resolved| resolved.starts_with(scope) && resolved != scope);
    normalize(in_scope)
}

/// Cleans raw script src values into the absolute script URL set.
///
/// Blank entries are dropped, any `?...` query suffix is stripped,
/// protocol-relative entries get the page URL's scheme prefixed, and
/// remaining relative entries resolve against the final page URL.
pub fn script_urls(final_url: &Url, srcs: &[String]) -> Vec<String> {
    let scheme = final_url.scheme();
    let cleaned = srcs.iter().filter_map(|raw| {
        let src = raw.trim();
        if src.is_empty() {
            return None;
        }
        let src = match src.split_once('?') {
            Some((path, _query)) => path,
            None => src,
        };
        if src.is_empty() {
            return None;
        }
        if let Some(rest) = src.strip_prefix("//") {
            return Some(format!("{}://{}", scheme, rest));
        }
        match final_url.join(src) {
            Ok(resolved) => Some(resolved.to_string()),
            Err(e) => {
                ::log::debug!("Skipping unparseable script src {}: {}", src, e);
                None
            }
        }
    });
    normalize(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_scope_drops_external_and_duplicates() {
        let page = Url::parse("https://x.com/").unwrap();
        let hrefs = strings(&["https://x.com/a", "https://y.com/b", "https://x.com/a"]);
        assert_eq!(scope_urls(&page, &hrefs), strings(&["https://x.com/a"]));
    }

    #[test]
    fn test_scope_excludes_page_itself() {
        let page = Url::parse("https://x.com/").unwrap();
        let hrefs = strings(&["https://x.com/", "https://x.com/about"]);
        assert_eq!(scope_urls(&page, &hrefs), strings(&["https://x.com/about"]));
    }

    #[test]
    fn test_scope_resolves_relative_hrefs() {
        let page = Url::parse("https://x.com/docs/").unwrap();
        let hrefs = strings(&["guide.html", "/docs/api.html", "https://x.com/docs/faq"]);
        assert_eq!(
            scope_urls(&page, &hrefs),
            strings(&[
                "https://x.com/docs/api.html",
                "https://x.com/docs/faq",
                "https://x.com/docs/guide.html",
            ])
        );
    }

    #[test]
    fn test_scope_is_plain_string_prefix() {
        // Prefix matching, not path segmentation: a sibling path that
        // merely extends the final URL's string is accepted.
        let page = Url::parse("https://x.com/docs").unwrap();
        let hrefs = strings(&["https://x.com/docs2", "https://x.com/blog"]);
        assert_eq!(scope_urls(&page, &hrefs), strings(&["https://x.com/docs2"]));
    }

    #[test]
    fn test_script_query_stripped() {
        let page = Url::parse("https://x.com/").unwrap();
        let srcs = strings(&["/app.js?v=3"]);
        assert_eq!(script_urls(&page, &srcs), strings(&["https://x.com/app.js"]));
    }

    #[test]
    fn test_script_protocol_relative_gets_page_scheme() {
        let page = Url::parse("https://x.com/").unwrap();
        let srcs = strings(&["//cdn.example.com/lib.js"]);
        assert_eq!(
            script_urls(&page, &srcs),
            strings(&["https://cdn.example.com/lib.js"])
        );
    }

    #[test]
    fn test_script_blank_entries_dropped() {
        let page = Url::parse("https://x.com/").unwrap();
        let srcs = strings(&["", "   ", "?v=9", "/real.js"]);
        assert_eq!(script_urls(&page, &srcs), strings(&["https://x.com/real.js"]));
    }

    #[test]
    fn test_script_dedup_after_query_strip() {
        let page = Url::parse("https://x.com/").unwrap();
        let srcs = strings(&["/app.js?v=1", "/app.js?v=2", "https://x.com/app.js"]);
        assert_eq!(script_urls(&page, &srcs), strings(&["https://x.com/app.js"]));
    }

    #[test]
    fn test_script_absolute_external_kept() {
        // Script scope is not restricted to the page's origin.
        let page = Url::parse("https://x.com/").unwrap();
        let srcs = strings(&["https://cdn.other.com/analytics.js?key=abc"]);
        assert_eq!(
            script_urls(&page, &srcs),
            strings(&["https://cdn.other.com/analytics.js"])
        );
    }
}
