/// Every `<script ...>...</script>` block as `(opening tag, inner text)`.
pub(crate) fn iter_scripts(html: &str) -> Vec<(&str, &str)> {
    let mut res = Vec::new();
    let mut pos = 0usize;

    while let Some(si) = html[pos..].find("<script") {
        let si = pos + si;

        let open_end = match html[si..].find('>') {
            Some(x) => si + x,
            None => break,
        };
        let tag_open = &html[si..=open_end];

        let close = match html[open_end + 1..].find("</script>") {
            Some(x) => open_end + 1 + x,
            None => break,
        };
        res.push((tag_open, &html[open_end + 1..close]));
        pos = close + "</script>".len();
    }
    res
}

/// `true` when the opening tag carries `name="value"` or `name='value'`.
pub(crate) fn has_attr(tag_open: &str, name: &str, value: &str) -> bool {
    tag_open.contains(&format!("{name}=\"{value}\"")) || tag_open.contains(&format!("{name}='{value}'"))
}

/// Index of the `}` closing the object that opens at `start`, skipping braces inside strings.
pub(crate) fn find_matching_brace(s: &str, start: usize) -> Option<usize> {
    let bytes = s.as_bytes();
    if bytes.get(start).copied()? != b'{' {
        return None;
    }

    let mut depth = 0usize;
    let mut in_str = false;
    let mut j = start;

    while j < bytes.len() {
        let c = bytes[j];

        if in_str {
            if c == b'\\' {
                j += 2;
                continue;
            } else if c == b'"' {
                in_str = false;
            }
            j += 1;
            continue;
        }

        match c {
            b'"' => in_str = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(j);
                }
            }
            _ => {}
        }
        j += 1;
    }
    None
}

/// Decode the handful of entities the page uses when embedding JSON in markup.
///
/// Replacements run in a fixed order, `&amp;` before `&lt;`/`&gt;`, so a double-encoded
/// `&amp;lt;` ends up as `<`.
pub(crate) fn decode_html_entities(input: &str) -> String {
    input
        .replace("&quot;", "\"")
        .replace("&#34;", "\"")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
}

pub(crate) fn truncate(s: &str, n: usize) -> &str {
    if s.len() <= n {
        return s;
    }
    let mut end = n;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
