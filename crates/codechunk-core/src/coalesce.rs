//! Gap-filling, coalescing, and empty-span post-filtering (§4.2).

use crate::span::Span;

/// Insert a span for any untouched byte region between consecutive spans
/// (or before the first / after the last), guaranteeing full coverage of
/// `[0, file_len)`.
pub fn fill_gaps(spans: &[Span], file_len: usize) -> Vec<Span> {
    let mut filled = Vec::with_capacity(spans.len() + 1);
    let mut previous_end = 0usize;

    for &span in spans {
        if span.start > previous_end {
            filled.push(Span::new(previous_end, span.start));
        }
        filled.push(span);
        previous_end = previous_end.max(span.end);
    }

    if file_len > previous_end {
        filled.push(Span::new(previous_end, file_len));
    }

    filled
}

fn non_whitespace_len(bytes: &[u8], span: Span) -> usize {
    span.slice(bytes).iter().filter(|b| !b.is_ascii_whitespace()).count()
}

fn newline_count(bytes: &[u8], span: Span) -> usize {
    span.slice(bytes).iter().filter(|&&b| b == b'\n').count()
}

/// Merge small spans into their right neighbor per the three-condition
/// heuristic in §4.2.
pub fn coalesce_spans(spans: &[Span], bytes: &[u8], coalesce: usize, max_chars: usize) -> Vec<Span> {
    let mut result = Vec::new();
    let mut i = 0;

    while i < spans.len() {
        let mut current = spans[i];
        i += 1;

        while i < spans.len() {
            let next = spans[i];
            let current_nw = non_whitespace_len(bytes, current);
            let combined_len = next.end - current.start;
            let added_newlines = newline_count(bytes, next);

            let should_merge = current_nw < coalesce
                && combined_len < max_chars.saturating_mul(3) / 2
                && (added_newlines < 3 || current_nw < coalesce / 2);

            if should_merge {
                current = Span::new(current.start, next.end);
                i += 1;
            } else {
                break;
            }
        }

        result.push(current);
    }

    result
}

/// Discard spans whose content is entirely whitespace.
pub fn drop_empty_spans(spans: Vec<Span>, bytes: &[u8]) -> Vec<Span> {
    spans.into_iter().filter(|&span| non_whitespace_len(bytes, span) > 0).collect()
}
