//! Chunk assembly: wires the byte-span builder, coalescer, identifier
//! extractor, import filter, and ancestor context extractor together into
//! final [`ChunkRecord`]s, then performs the whitespace handoff pass (§4.7).

use tree_sitter::Node;

use crate::ancestor::{ancestor_context, container_name, find_defining_node, relational_description, signature_span};
use crate::byte_span::build_byte_spans;
use crate::coalesce::{coalesce_spans, drop_empty_spans, fill_gaps};
use crate::imports::{collect_global_imports, filter_imports};
use crate::metadata::{ChunkMetadata, ChunkRecord, ChunkingMethod, FileMetadata};
use crate::span::{LineSpan, Span};
use codechunk_lang::LanguageProfile;

/// A chunk's non-whitespace byte count must meet this floor to survive
/// assembly; smaller spans are pure noise (stray blank lines, brace-only
/// remnants left over from coalescing).
const MIN_NON_WHITESPACE_LEN: usize = 5;

/// Join a repo name and a caller-supplied file path into the normalized
/// `"<repo>/<path>"` form used in chunk metadata and chunk ids: kept from
/// wherever `repo` appears inside `file_path` onward, or `"<repo>/<basename>"`
/// when it doesn't appear at all. Delegates to the shared rule in
/// `codechunk_domain`, which implements this exact substring/basename
/// fallback.
pub fn normalize_file_path(repo: &str, file_path: &str) -> String {
    codechunk_domain::utils::path::normalize_file_path(file_path, repo)
}

fn non_whitespace_len(bytes: &[u8], span: Span) -> usize {
    span.slice(bytes).iter().filter(|b| !b.is_ascii_whitespace()).count()
}

fn exact_match_container<'tree>(root: Node<'tree>, span: Span, container_types: &[&str]) -> Option<Node<'tree>> {
    let node = root.descendant_for_byte_range(span.start, span.end)?;
    (node.start_byte() == span.start && node.end_byte() == span.end && container_types.contains(&node.kind())).then_some(node)
}

fn chunk_is_imports_only(root: Node, span: Span, import_types: &[&str]) -> bool {
    let mut cursor = root.walk();
    let mut saw_any = false;
    for child in root.children(&mut cursor) {
        if child.end_byte() <= span.start || child.start_byte() >= span.end {
            continue;
        }
        saw_any = true;
        if !import_types.contains(&child.kind()) {
            return false;
        }
    }
    saw_any
}

/// Strip trailing spaces/tabs (never newlines) from each chunk's content and
/// prepend them to the next chunk, so that in-between whitespace is never
/// silently dropped nor duplicated across a chunk boundary.
fn whitespace_handoff(contents: &mut [String]) {
    for i in 0..contents.len().saturating_sub(1) {
        let trimmed_len = contents[i].trim_end_matches([' ', '\t']).len();
        if trimmed_len == contents[i].len() {
            continue;
        }
        let carried = contents[i].split_off(trimmed_len);
        contents[i + 1] = format!("{carried}{}", contents[i + 1]);
    }
}

/// Assemble every chunk for one parsed file.
#[allow(clippy::too_many_arguments)]
pub fn assemble_chunks(
    root: Node,
    source: &[u8],
    profile: &LanguageProfile,
    meta: &FileMetadata,
    language: &str,
    max_chars: usize,
    coalesce: usize,
) -> Vec<ChunkRecord> {
    let spans = build_byte_spans(root, max_chars);
    let spans = fill_gaps(&spans, source.len());
    let spans = coalesce_spans(&spans, source, coalesce, max_chars);
    let spans = drop_empty_spans(spans, source);
    let spans: Vec<Span> = spans.into_iter().filter(|&span| non_whitespace_len(source, span) >= MIN_NON_WHITESPACE_LEN).collect();

    if spans.is_empty() {
        return Vec::new();
    }

    let normalized_path = normalize_file_path(&meta.repo, &meta.file_path);
    let global_imports = collect_global_imports(root, source, profile.import_types, profile.container_types);

    let mut contents: Vec<String> =
        spans.iter().map(|span| String::from_utf8_lossy(span.slice(source)).into_owned()).collect();
    whitespace_handoff(&mut contents);

    let mut records = Vec::with_capacity(spans.len());
    for (index, (span, content)) in spans.into_iter().zip(contents.into_iter()).enumerate() {
        let line_span = LineSpan::from_byte_span(source, span);
        let import_lines = filter_imports(&global_imports, span, root, source, language, profile.identifier_types);

        let defining = find_defining_node(root, source, span, profile.container_types);
        let ancestors = ancestor_context(defining, profile.container_types, profile.stop_at_types);
        let self_container = if defining.is_none() { exact_match_container(root, span, profile.container_types) } else { None };
        let imports_only = ancestors.is_empty() && self_container.is_none() && chunk_is_imports_only(root, span, profile.import_types);

        let description = relational_description(&ancestors, source, self_container, imports_only);

        let mut parent_context_spans = Vec::with_capacity(ancestors.len());
        let mut parent_context_text = Vec::with_capacity(ancestors.len());
        for ancestor in &ancestors {
            let sig = signature_span(*ancestor, source, profile.block_delimiters.start);
            parent_context_spans.push(LineSpan::from_byte_span(source, sig));
            let text = sig.slice(source);
            let label = match container_name(*ancestor, source) {
                Some(name) => format!("{} '{name}': {}", ancestor.kind(), String::from_utf8_lossy(text).trim()),
                None => String::from_utf8_lossy(text).trim().to_string(),
            };
            parent_context_text.push(label);
        }

        let chunk_id = ChunkRecord::build_chunk_id(&normalized_path, line_span);
        let metadata = ChunkMetadata {
            repo: meta.repo.clone(),
            branch: meta.branch.clone(),
            file_path: normalized_path.clone(),
            language: language.to_string(),
            chunk_id,
            chunk_index: index,
            start_line: line_span.start_line,
            end_line: line_span.end_line,
            chunking_method: ChunkingMethod::TreeSitter,
            relational_description: description,
            cell_type: None,
            original_cell_index: None,
        };

        records.push(ChunkRecord { content, metadata, import_lines, parent_context_spans, parent_context_text });
    }

    records
}
