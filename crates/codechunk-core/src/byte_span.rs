//! Recursive byte-span builder (§4.1).
//!
//! Produces an ordered list of non-overlapping [`Span`]s covering a parse
//! tree's byte range, each bounded by `max_chars` where the syntax tree
//! allows it.

use tree_sitter::Node;

use crate::span::Span;

/// Build byte spans for `node`, each at most `max_chars` bytes where the
/// tree's structure permits.
pub fn build_byte_spans(node: Node, max_chars: usize) -> Vec<Span> {
    let mut spans = Vec::new();
    recurse(node, max_chars, &mut spans);
    spans
}

fn recurse(node: Node, max_chars: usize, spans: &mut Vec<Span>) {
    let mut cur_start = node.start_byte();
    let mut cur_end = node.start_byte();

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        let child_start = child.start_byte();
        let child_end = child.end_byte();
        if child_end == child_start {
            continue;
        }
        let child_size = child_end - child_start;

        if child_size > max_chars {
            if cur_end > cur_start {
                push(spans, cur_start, cur_end);
            }
            recurse(child, max_chars, spans);
            cur_start = child_end;
            cur_end = child_end;
        } else if child_end - cur_start > max_chars && cur_end > cur_start {
            push(spans, cur_start, cur_end);
            cur_start = child_start;
            cur_end = child_end;
        } else {
            cur_end = child_end;
        }
    }

    let node_end = node.end_byte();
    if node_end > cur_end {
        if cur_end > cur_start {
            push(spans, cur_start, cur_end);
            cur_start = cur_end;
        }
        let start = spans.last().map_or(cur_start, |last| cur_start.max(last.end));
        if node_end > start {
            push(spans, start, node_end);
        }
    } else if cur_end > cur_start {
        push(spans, cur_start, cur_end);
    }
}

fn push(spans: &mut Vec<Span>, start: usize, end: usize) {
    if end > start {
        spans.push(Span::new(start, end));
    }
}
