//! Location of the first JSON object embedded in noisy text.

/// Find the first top-level `{ ... }` span in `text`.
///
/// Scans from the first `{`, tracking nesting depth outside of string
/// literals, and returns the span that closes it. If the braces never
/// balance (truncated output, stray braces inside prose), falls back to
/// the greedy span from the first `{` to the last `}`.
///
/// Returns `None` when there is no `{` followed by a `}`.
pub fn locate_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    balanced_span(text, start).or_else(|| greedy_span(text, start))
}

fn balanced_span(text: &str, start: usize) -> Option<&str> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, byte) in text.as_bytes()[start..].iter().enumerate() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(&text[start..=start + offset]);
                }
            }
            _ => {}
        }
    }
    None
}

fn greedy_span(text: &str, start: usize) -> Option<&str> {
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}
