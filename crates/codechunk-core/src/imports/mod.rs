//! Global import collection (§4.4) and per-chunk import filtering (§4.5).

pub mod bindings;

use std::collections::HashSet;

use tree_sitter::Node;

use crate::identifier::extract_identifiers;
use crate::span::Span;
use bindings::WILDCARD;

/// All file-scope import nodes and their aligned, de-duplicated source text.
pub struct GlobalImports<'tree> {
    /// Import nodes, in source order, de-duplicated by decoded text.
    pub nodes: Vec<Node<'tree>>,
    /// `nodes[i]`'s decoded, trimmed text — aligned with `nodes` by index.
    pub lines: Vec<String>,
}

impl GlobalImports<'_> {
    /// 1-based line number of the last import's end, or `0` if there are none.
    pub fn last_line(&self, source: &[u8]) -> usize {
        self.nodes.last().map_or(0, |n| crate::span::LineSpan::line_of(source, n.end_byte()))
    }
}

/// Collect file-scope import nodes, never descending into a `container_types`
/// node (unless that node is itself an import type).
pub fn collect_global_imports<'tree>(
    root: Node<'tree>,
    source: &[u8],
    import_types: &[&str],
    container_types: &[&str],
) -> GlobalImports<'tree> {
    let mut found = Vec::new();
    visit(root, import_types, container_types, &mut found);
    found.sort_by_key(Node::start_byte);

    let mut seen = HashSet::new();
    let mut nodes = Vec::new();
    let mut lines = Vec::new();
    for node in found {
        let text = node.utf8_text(source).unwrap_or_default().trim().to_string();
        if seen.insert(text.clone()) {
            nodes.push(node);
            lines.push(text);
        }
    }

    GlobalImports { nodes, lines }
}

fn visit<'tree>(node: Node<'tree>, import_types: &[&str], container_types: &[&str], out: &mut Vec<Node<'tree>>) {
    if import_types.contains(&node.kind()) {
        out.push(node);
        return;
    }
    if container_types.contains(&node.kind()) {
        return;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        visit(child, import_types, container_types, out);
    }
}

/// Select the subset of `imports.lines` relevant to a chunk, in original order.
///
/// If any import node binds the wildcard sentinel, every import line is
/// returned (the filter cannot prove non-use across a wildcard).
pub fn filter_imports(
    imports: &GlobalImports,
    chunk_span: Span,
    root: Node,
    source: &[u8],
    language: &str,
    identifier_types: &[&str],
) -> Vec<String> {
    if imports.nodes.is_empty() {
        return Vec::new();
    }

    let per_import_bindings: Vec<Vec<String>> =
        imports.nodes.iter().map(|&node| bindings::extract_bindings(language, node, source)).collect();

    if per_import_bindings.iter().any(|names| names.iter().any(|n| n == WILDCARD)) {
        return imports.lines.clone();
    }

    let used = extract_identifiers(root, source, chunk_span, identifier_types);

    imports
        .lines
        .iter()
        .zip(per_import_bindings.iter())
        .filter(|(_, names)| names.iter().any(|name| used.contains(name)))
        .map(|(line, _)| line.clone())
        .collect()
}
