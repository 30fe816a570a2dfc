//! Ancestor context extraction: defining node, signature spans, and the
//! human-readable relational description (§4.6).

use tree_sitter::Node;

use crate::span::Span;

fn first_non_whitespace_byte(source: &[u8], span: Span) -> Option<usize> {
    (span.start..span.end).find(|&i| !source[i].is_ascii_whitespace())
}

/// The topmost `container_types` ancestor that fully encloses `chunk_span`,
/// found by climbing from the chunk's first non-whitespace byte.
pub fn find_defining_node<'tree>(
    root: Node<'tree>,
    source: &[u8],
    chunk_span: Span,
    container_types: &[&str],
) -> Option<Node<'tree>> {
    let pos = first_non_whitespace_byte(source, chunk_span)?;
    let mut current = root.descendant_for_byte_range(pos, pos)?;
    let mut defining = None;

    loop {
        let Some(parent) = current.parent() else { break };
        let encloses =
            container_types.contains(&parent.kind()) && parent.start_byte() <= chunk_span.start && parent.end_byte() >= chunk_span.end;
        if !encloses {
            break;
        }
        defining = Some(parent);
        current = parent;
    }

    defining
}

/// Enclosing containers from the defining node's parent up to (not
/// including) a `stop_at_types` node or the tree root, outermost first.
pub fn ancestor_context<'tree>(
    defining: Option<Node<'tree>>,
    container_types: &[&str],
    stop_at_types: &[&str],
) -> Vec<Node<'tree>> {
    let mut containers = Vec::new();
    let mut current = defining.and_then(|node| node.parent());

    while let Some(node) = current {
        if stop_at_types.contains(&node.kind()) {
            break;
        }
        if container_types.contains(&node.kind()) {
            containers.push(node);
        }
        current = node.parent();
    }

    containers.reverse();
    containers
}

/// `[node.start_byte, body_start)`, using the `body` field if present, else
/// the configured block-open delimiter, else the node's full range.
pub fn signature_span(node: Node, source: &[u8], block_delimiter_start: Option<&str>) -> Span {
    if let Some(body) = node.child_by_field_name("body") {
        return Span::new(node.start_byte(), body.start_byte());
    }

    if let Some(delimiter) = block_delimiter_start {
        if let Ok(prefix) = node.utf8_text(source) {
            if let Some(idx) = prefix.find(delimiter) {
                return Span::new(node.start_byte(), node.start_byte() + idx + delimiter.len());
            }
        }
    }

    Span::new(node.start_byte(), node.end_byte())
}

/// A container's declared name: its `name` field, or a second-child
/// identifier-shaped fallback.
pub fn container_name(node: Node, source: &[u8]) -> Option<String> {
    if let Some(name) = node.child_by_field_name("name") {
        return name.utf8_text(source).ok().map(str::to_string);
    }

    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .nth(1)
        .filter(|n| n.kind().contains("identifier") || n.kind() == "name")
        .and_then(|n| n.utf8_text(source).ok())
        .map(str::to_string)
}

/// Build the human-readable relational description for a chunk.
pub fn relational_description(
    ancestors: &[Node],
    source: &[u8],
    self_container: Option<Node>,
    imports_only: bool,
) -> String {
    if !ancestors.is_empty() {
        let parts: Vec<String> = ancestors
            .iter()
            .map(|node| match container_name(*node, source) {
                Some(name) => format!("{} '{name}'", node.kind()),
                None => node.kind().to_string(),
            })
            .collect();
        return format!("Chunk within {}", parts.join(" -> "));
    }

    if let Some(node) = self_container {
        return match container_name(node, source) {
            Some(name) => format!("Top-level {} '{name}'", node.kind()),
            None => format!("Top-level {}", node.kind()),
        };
    }

    if imports_only {
        return "Chunk containing primarily imports".to_string();
    }

    "Top-level code chunk".to_string()
}
