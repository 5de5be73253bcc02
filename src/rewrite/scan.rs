//! Position-eligibility heuristics for the HTML scan.
//!
//! HTML is treated as a flat token stream via bracket counting rather
//! than a DOM. On unbalanced markup the counts can be off, which only
//! ever skips a candidate position; an insertion inside a tag is never
//! possible through these checks.

use regex::Regex;

/// True when `pos` falls inside an open tag (a `<` not yet closed by `>`).
///
/// Catches attribute text such as `alt="Bears logo"`.
#[inline]
pub(crate) fn inside_tag(html: &str, pos: usize) -> bool {
    let prefix = &html.as_bytes()[..pos];
    let opens = prefix.iter().filter(|&&b| b == b'<').count();
    let closes = prefix.iter().filter(|&&b| b == b'>').count();
    opens > closes
}

/// True when `pos` falls inside an existing `<a ...>...</a>` span.
#[inline]
pub(crate) fn inside_anchor(html: &str, pos: usize) -> bool {
    let prefix = &html[..pos];
    prefix.matches("<a ").count() > prefix.matches("</a>").count()
}

/// Byte span of the earliest match that is outside every tag and anchor.
pub(crate) fn first_eligible_span(html: &str, re: &Regex) -> Option<(usize, usize)> {
    re.find_iter(html)
        .find(|m| !inside_tag(html, m.start()) && !inside_anchor(html, m.start()))
        .map(|m| (m.start(), m.end()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inside_tag() {
        let html = r#"<img alt="Bears logo">The Bears won."#;
        let attr_pos = html.find("Bears").unwrap();
        let text_pos = html.rfind("Bears").unwrap();
        assert!(inside_tag(html, attr_pos));
        assert!(!inside_tag(html, text_pos));
    }

    #[test]
    fn test_stray_bracket_biases_toward_skipping() {
        // An unclosed `<` makes everything after it look tag-internal.
        let html = "a < b Bears";
        assert!(inside_tag(html, html.find("Bears").unwrap()));
    }

    #[test]
    fn test_inside_anchor() {
        let html = r#"<a href="/x">Bears</a> and Bears"#;
        let linked_pos = html.find("Bears").unwrap();
        let bare_pos = html.rfind("Bears").unwrap();
        assert!(inside_anchor(html, linked_pos));
        assert!(!inside_anchor(html, bare_pos));
    }

    #[test]
    fn test_first_eligible_span_skips_ineligible() {
        let html = r#"<img alt="Bears"><a href="/x">Bears</a> the Bears"#;
        let re = Regex::new(r"\bBears\b").unwrap();
        let (start, end) = first_eligible_span(html, &re).unwrap();
        assert_eq!(&html[start..end], "Bears");
        assert_eq!(start, html.rfind("Bears").unwrap());
    }

    #[test]
    fn test_no_eligible_span() {
        let html = r#"<a href="/x">Bears</a>"#;
        let re = Regex::new(r"\bBears\b").unwrap();
        assert!(first_eligible_span(html, &re).is_none());
    }
}
