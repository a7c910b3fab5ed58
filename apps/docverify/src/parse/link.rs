//! Scanner for inline Markdown links `[text](target)`.
//!
//! `text` runs to the first `]` and must be non-empty; `target` runs to the
//! first `)` and must be non-empty. Both may span lines. After a match the
//! scan resumes past the closing parenthesis; after a failed attempt it
//! resumes one byte past the `[`.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link<'a> {
    pub text: &'a str,
    pub target: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// How a link target should be treated by the cross-reference pass.
pub enum LinkTarget<'a> {
    /// `http...`, `scheme://...` or an opaque scheme like `mailto:`; never resolved.
    External,
    /// `#section` on the same page; never resolved.
    Anchor,
    /// Path to resolve on disk, fragment and title removed.
    Local(&'a str),
}

/// Collect every inline link in `content`, in document order.
pub fn scan_links(content: &str) -> Vec<Link<'_>> {
    let mut out = Vec::new();
    let mut pos = 0;
    while let Some(off) = content[pos..].find('[') {
        let open = pos + off;
        match match_at(content, open) {
            Some((link, next)) => {
                out.push(link);
                pos = next;
            }
            None => pos = open + 1,
        }
    }
    out
}

fn match_at(content: &str, open: usize) -> Option<(Link<'_>, usize)> {
    let text_start = open + 1;
    let close = text_start + content[text_start..].find(']')?;
    if close == text_start || content.as_bytes().get(close + 1) != Some(&b'(') {
        return None;
    }
    let target_start = close + 2;
    let end = target_start + content[target_start..].find(')')?;
    if end == target_start {
        return None;
    }
    let link = Link {
        text: &content[text_start..close],
        target: &content[target_start..end],
    };
    Some((link, end + 1))
}

/// Decide whether a raw link target is external, a same-page anchor, or a
/// local path.
pub fn classify(target: &str) -> LinkTarget<'_> {
    let t = target.trim();
    if t.starts_with("http") || has_scheme(t) {
        return LinkTarget::External;
    }
    if t.starts_with('#') {
        return LinkTarget::Anchor;
    }
    let t = strip_title(t);
    let path = t.split(['#', '?']).next().unwrap_or("");
    if path.is_empty() {
        LinkTarget::Anchor
    } else {
        LinkTarget::Local(path)
    }
}

/// Drop a trailing quoted title (`path "Title"` or `path 'Title'`); an
/// unquoted space is part of the path.
fn strip_title(t: &str) -> &str {
    for (i, c) in t.char_indices() {
        if !c.is_whitespace() {
            continue;
        }
        let rest = t[i..].trim_start();
        let quoted = rest.len() >= 2
            && ((rest.starts_with('"') && rest.ends_with('"'))
                || (rest.starts_with('\'') && rest.ends_with('\'')));
        if quoted {
            return t[..i].trim_end();
        }
    }
    t
}

const OPAQUE_SCHEMES: [&str; 9] = [
    "mailto", "tel", "sms", "data", "javascript", "urn", "news", "irc", "ftp",
];

fn has_scheme(t: &str) -> bool {
    let Some((scheme, rest)) = t.split_once(':') else {
        return false;
    };
    // single letters are drive prefixes, not schemes
    let well_formed = scheme.len() > 1
        && scheme.starts_with(|c: char| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-'));
    // `NOTES:12` style suffixes are not URLs
    well_formed
        && (rest.starts_with("//")
            || OPAQUE_SCHEMES.contains(&scheme.to_ascii_lowercase().as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_finds_links_in_order() {
        let md = "See [setup](SETUP.md) and [api](./api/README.md#auth).\n[x](y)";
        let links = scan_links(md);
        let targets: Vec<&str> = links.iter().map(|l| l.target).collect();
        assert_eq!(targets, vec!["SETUP.md", "./api/README.md#auth", "y"]);
        assert_eq!(links[0].text, "setup");
    }

    #[test]
    fn test_scan_skips_incomplete_syntax() {
        assert!(scan_links("[] (a.md) [empty]() [open](a.md").is_empty());
        // text runs to the first `]`, so a nested `[` is part of the text
        let links = scan_links("[a [b](c.md)");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].text, "a [b");
    }

    #[test]
    fn test_text_may_span_lines() {
        let links = scan_links("[multi\nline](doc.md)");
        assert_eq!(links[0].text, "multi\nline");
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("https://example.com"), LinkTarget::External);
        assert_eq!(classify("http://x"), LinkTarget::External);
        assert_eq!(classify("mailto:me@example.com"), LinkTarget::External);
        assert_eq!(classify("#intro"), LinkTarget::Anchor);
        assert_eq!(classify("GUIDE.md#intro"), LinkTarget::Local("GUIDE.md"));
        assert_eq!(classify("GUIDE.md \"Guide\""), LinkTarget::Local("GUIDE.md"));
        assert_eq!(classify("../src/main.rs"), LinkTarget::Local("../src/main.rs"));
    }

    #[test]
    fn test_unquoted_space_stays_in_path() {
        assert_eq!(classify("my doc.md"), LinkTarget::Local("my doc.md"));
        assert_eq!(classify("my doc.md \"Doc\""), LinkTarget::Local("my doc.md"));
        assert_eq!(classify("GUIDE.md 'Guide'"), LinkTarget::Local("GUIDE.md"));
    }

    #[test]
    fn test_colon_suffix_is_not_a_scheme() {
        assert_eq!(classify("NOTES.md:12"), LinkTarget::Local("NOTES.md:12"));
        assert_eq!(classify("notes:12"), LinkTarget::Local("notes:12"));
        assert_eq!(classify("ssh+git://host/repo"), LinkTarget::External);
        assert_eq!(classify("tel:+123"), LinkTarget::External);
    }
}
