// src/core/html.rs
// Low-level HTML string helpers, case-insensitive on ASCII tag/attribute names.
//
// The pick sheet nests tables inside header cells, so element lookups here
// track depth: a `<td>` block ends at *its* `</td>`, not the first one after it.

pub fn to_lower(s: &str) -> String {
    // ASCII-only lowering keeps byte offsets identical to `s`.
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Find `pat` (already lowercase, e.g. `<td` or `</td`) at or after `from`,
/// only where it is followed by a tag-name boundary (so `<tr` skips `<track`).
fn find_tag(lc: &str, pat: &str, from: usize) -> Option<usize> {
    let mut pos = from;
    loop {
        let at = lc.get(pos..)?.find(pat)? + pos;
        let after = at + pat.len();
        match lc.as_bytes().get(after) {
            None => return Some(at),
            Some(b) if b.is_ascii_whitespace() || *b == b'>' || *b == b'/' => return Some(at),
            _ => pos = at + 1,
        }
    }
}

/// Core of `next_element_ci`, against a precomputed lowercase copy.
fn element_from(lc: &str, tag: &str, from: usize) -> Option<(usize, usize)> {
    let open = join!("<", tag);
    let close = join!("</", tag);

    let start = find_tag(lc, &open, from)?;
    let mut pos = lc[start..].find('>')? + start + 1;
    let mut depth = 1usize;

    loop {
        let next_close = find_tag(lc, &close, pos)?;
        match find_tag(lc, &open, pos) {
            Some(o) if o < next_close => {
                depth += 1;
                pos = lc[o..].find('>')? + o + 1;
            }
            _ => {
                depth -= 1;
                let end = lc[next_close..].find('>')? + next_close + 1;
                if depth == 0 {
                    return Some((start, end));
                }
                pos = end;
            }
        }
    }
}

/// Next complete `<tag …>…</tag>` block at or after `from`, nesting-aware.
/// Returns byte offsets `(start, end)` covering the whole element.
pub fn next_element_ci(s: &str, tag: &str, from: usize) -> Option<(usize, usize)> {
    element_from(&to_lower(s), &tag.to_ascii_lowercase(), from)
}

/// Top-level `<tag>` elements inside `inner`, in document order.
/// Same-name elements nested inside a match are skipped, so calling this on
/// a `<tr>`'s inner markup yields that row's own cells.
pub fn child_elements_ci<'a>(inner: &'a str, tag: &str) -> Vec<&'a str> {
    let lc = to_lower(inner);
    let tag = tag.to_ascii_lowercase();
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((s, e)) = element_from(&lc, &tag, pos) {
        out.push(&inner[s..e]);
        pos = e;
    }
    out
}

/// First `<tag>` element whose `id` attribute equals `id` (ASCII case-insensitive).
pub fn find_element_by_id_ci<'a>(doc: &'a str, tag: &str, id: &str) -> Option<&'a str> {
    let lc = to_lower(doc);
    let tag = tag.to_ascii_lowercase();
    let open = join!("<", &tag);
    let mut pos = 0usize;
    while let Some(at) = find_tag(&lc, &open, pos) {
        let opener_end = doc[at..].find('>')? + at + 1;
        let matches = attr_value(&doc[at..opener_end], "id")
            .is_some_and(|v| v.eq_ignore_ascii_case(id));
        if matches {
            let (s, e) = element_from(&lc, &tag, at)?;
            return Some(&doc[s..e]);
        }
        pos = at + 1;
    }
    None
}

/// The opening tag of a block, `<td class="x" colspan=3>` including brackets.
pub fn open_tag(block: &str) -> &str {
    match block.find('>') {
        Some(i) => &block[..=i],
        None => block,
    }
}

/// Given a complete tag block like `<td ...>INNER</td>`,
/// return INNER (may still contain nested tags).
pub fn inner_after_open_tag(block: &str) -> &str {
    if let Some(open_end) = block.find('>') {
        if let Some(close_start) = block.rfind('<') {
            if close_start > open_end {
                return &block[open_end + 1..close_start];
            }
        }
    }
    ""
}

/// Read one attribute from an opening tag. Accepts double, single or no quotes.
pub fn attr_value(opener: &str, name: &str) -> Option<String> {
    let lc = to_lower(opener);
    let needle = join!(&name.to_ascii_lowercase(), "=");
    let bytes = lc.as_bytes();

    let mut from = 0usize;
    let at = loop {
        let i = lc.get(from..)?.find(&needle)? + from;
        // must be a whole attribute name: preceded by whitespace
        if i > 0 && bytes[i - 1].is_ascii_whitespace() {
            break i;
        }
        from = i + 1;
    };

    let val = &opener[at + needle.len()..];
    let (quote, off) = match val.as_bytes().first() {
        Some(b'"') => (Some('"'), 1),
        Some(b'\'') => (Some('\''), 1),
        _ => (None, 0),
    };
    let end = match quote {
        Some(q) => val[off..].find(q).map(|e| off + e).unwrap_or(val.len()),
        None => val
            .find(|c: char| c.is_ascii_whitespace() || c == '>' || c == '/')
            .unwrap_or(val.len()),
    };
    Some(val[off..end].to_string())
}

/// Lowercased class tokens of an opening tag.
pub fn class_tokens(opener: &str) -> Vec<String> {
    attr_value(opener, "class")
        .map(|v| v.split_ascii_whitespace().map(|t| t.to_ascii_lowercase()).collect())
        .unwrap_or_default()
}

/// Remove all HTML tags `<...>`, decode entities, collapse whitespace.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&super::sanitize::normalize_entities(&out))
}

/// The first non-blank text node, ignoring all markup around it.
pub fn first_text_node(s: &str) -> Option<String> {
    let mut rest = s;
    loop {
        let lt = rest.find('<').unwrap_or(rest.len());
        let text = super::sanitize::normalize_ws(&super::sanitize::normalize_entities(&rest[..lt]));
        if !text.is_empty() {
            return Some(text);
        }
        if lt == rest.len() {
            return None;
        }
        let gt = rest[lt..].find('>')? + lt + 1;
        rest = &rest[gt..];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_block_respects_nesting() {
        let html = r#"<tr><td>a<table><tr><td>x</td></tr></table></td><td>b</td></tr>"#;
        let tds = child_elements_ci(inner_after_open_tag(html), "td");
        assert_eq!(tds.len(), 2);
        assert!(tds[0].contains("<table>"));
        assert_eq!(strip_tags(tds[1]), "b");
    }

    #[test]
    fn tag_boundary_is_checked() {
        let html = "<track src=x><TR class=a><td>1</td></TR>";
        let (s, e) = next_element_ci(html, "tr", 0).unwrap();
        assert_eq!(&html[s..e], "<TR class=a><td>1</td></TR>");
    }

    #[test]
    fn finds_by_id_case_insensitive() {
        let doc = r#"<table><tbody ID="nflPlayerRows"><tr><td>A</td></tr></tbody></table>"#;
        let body = find_element_by_id_ci(doc, "tbody", "nflplayerrows").unwrap();
        assert!(body.starts_with("<tbody"));
        assert!(body.ends_with("</tbody>"));
        assert!(find_element_by_id_ci(doc, "tbody", "other").is_none());
    }

    #[test]
    fn attr_value_quote_styles() {
        assert_eq!(attr_value(r#"<td colspan="14">"#, "colspan").as_deref(), Some("14"));
        assert_eq!(attr_value("<td colspan='3'>", "colspan").as_deref(), Some("3"));
        assert_eq!(attr_value("<td colspan=5 class=x>", "colspan").as_deref(), Some("5"));
        assert_eq!(attr_value(r#"<td data-id="1">"#, "id"), None);
        assert_eq!(attr_value("<td>", "colspan"), None);
    }

    #[test]
    fn class_tokens_split() {
        assert_eq!(class_tokens(r#"<td class="pick Correct">"#), vec!["pick", "correct"]);
        assert!(class_tokens("<td>").is_empty());
    }

    #[test]
    fn first_text_node_skips_markup() {
        assert_eq!(first_text_node("<td> <b>KC</b></td><td>21</td>").as_deref(), Some("KC"));
        assert_eq!(first_text_node("<td>&nbsp;</td>"), None);
    }

    #[test]
    fn strip_tags_decodes() {
        assert_eq!(strip_tags("<td> KC&nbsp;(11) </td>"), "KC (11)");
    }
}
