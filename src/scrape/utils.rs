/// Every `<script type="application/json">` block as `(opening tag, inner text)`.
pub(crate) fn iter_json_scripts(html: &str) -> Vec<(&str, &str)> {
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
        let inner = &html[open_end + 1..close];

        if tag_open.contains("type=\"application/json\"") {
            res.push((tag_open, inner));
        }
        pos = close + "</script>".len();
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(json_scripts = res.len(), "scanned script blocks");

    res
}

/// Given `s[start]` is `{` or `[`, return the index of the bracket that closes it.
///
/// Brackets inside JSON string literals (including escaped quotes) are ignored.
/// Returns `None` if `start` is not an opening bracket or the literal is unterminated.
pub(crate) fn find_matching_bracket(s: &str, start: usize) -> Option<usize> {
    let bytes = s.as_bytes();
    let open = *bytes.get(start)?;
    let close = match open {
        b'{' => b'}',
        b'[' => b']',
        _ => return None,
    };

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

        if c == b'"' {
            in_str = true;
        } else if c == open {
            depth += 1;
        } else if c == close {
            depth -= 1;
            if depth == 0 {
                return Some(j);
            }
        }
        j += 1;
    }
    None
}

#[cfg(any(feature = "tracing", feature = "debug-dumps"))]
pub(crate) fn truncate(s: &str, n: usize) -> String {
    if s.len() <= n {
        return s.to_string();
    }
    let mut end = n;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{} …[trunc]", &s[..end])
}
