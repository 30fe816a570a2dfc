//! Identifier extraction over a byte range (§4.3).

use std::collections::{HashSet, VecDeque};

use tree_sitter::Node;

use crate::span::Span;

/// Collect the set of identifier texts appearing in nodes whose type is in
/// `identifier_types` and that overlap `span`.
///
/// Member-access forms (`object.property`) need no special casing: most
/// grammars represent the object and the property as two separate
/// identifier-family nodes (e.g. `identifier` and `field_identifier`), both
/// already listed in a profile's `identifier_types`, so a plain traversal
/// picks up both halves.
pub fn extract_identifiers(root: Node, source: &[u8], span: Span, identifier_types: &[&str]) -> HashSet<String> {
    let mut identifiers = HashSet::new();

    let Some(start_node) = root.descendant_for_byte_range(span.start, span.start) else {
        return identifiers;
    };

    let mut queue = VecDeque::new();
    queue.push_back(start_node);

    while let Some(node) = queue.pop_front() {
        if node.end_byte() <= span.start || node.start_byte() >= span.end {
            continue;
        }

        if identifier_types.contains(&node.kind()) {
            if let Ok(text) = node.utf8_text(source) {
                identifiers.insert(text.to_string());
            }
        }

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            queue.push_back(child);
        }
    }

    identifiers
}
