//! Line-based fallback chunking (§4.9).
//!
//! Used whenever a file has no tree-sitter grammar, or its parse produced an
//! error tree — a windowed split with no syntactic awareness at all.

use crate::assembler::normalize_file_path;
use crate::error::{Error, Result};
use crate::metadata::{ChunkMetadata, ChunkRecord, ChunkingMethod, FileMetadata};
use crate::span::LineSpan;

/// Split `source` into overlapping line windows of `chunk_size` lines,
/// stepping forward by `chunk_size - overlap` lines each time.
///
/// # Errors
///
/// Returns [`Error::InvalidFallbackParameters`] unless `0 <= overlap < chunk_size`.
pub fn chunk_by_lines(
    source: &str,
    meta: &FileMetadata,
    language: &str,
    chunk_size: usize,
    overlap: usize,
) -> Result<Vec<ChunkRecord>> {
    if chunk_size == 0 || overlap >= chunk_size {
        return Err(Error::invalid_fallback_parameters(chunk_size, overlap));
    }

    let lines: Vec<&str> = source.lines().collect();
    if lines.is_empty() {
        return Ok(Vec::new());
    }

    let normalized_path = normalize_file_path(&meta.repo, &meta.file_path);
    let step = chunk_size - overlap;
    let mut records = Vec::new();
    let mut start = 0usize;
    let mut chunk_index = 0usize;

    while start < lines.len() {
        let end = (start + chunk_size).min(lines.len());
        let content = lines[start..end].join("\n");
        let line_span = LineSpan::new(start + 1, end);
        let chunk_id = ChunkRecord::build_chunk_id(&normalized_path, line_span);

        let metadata = ChunkMetadata {
            repo: meta.repo.clone(),
            branch: meta.branch.clone(),
            file_path: normalized_path.clone(),
            language: language.to_string(),
            chunk_id,
            chunk_index,
            start_line: line_span.start_line,
            end_line: line_span.end_line,
            chunking_method: ChunkingMethod::LineBased,
            relational_description: "Line-based code chunk".to_string(),
            cell_type: None,
            original_cell_index: None,
        };

        records.push(ChunkRecord { content, metadata, import_lines: Vec::new(), parent_context_spans: Vec::new(), parent_context_text: Vec::new() });

        chunk_index += 1;
        if end == lines.len() {
            break;
        }
        start += step;
    }

    Ok(records)
}
