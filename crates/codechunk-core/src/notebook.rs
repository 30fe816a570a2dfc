//! Jupyter notebook specialization (§4.8).
//!
//! A notebook's `.ipynb` JSON is parsed cell by cell; each code cell's
//! source is chunked with the same newline-aware windowing the line-based
//! fallback uses, independently of every other cell. Malformed JSON yields
//! an empty chunk list rather than an error — a non-notebook-shaped file
//! handed in under a `.ipynb` path is not a chunking failure.

use serde::Deserialize;

use crate::assembler::normalize_file_path;
use crate::metadata::{ChunkMetadata, ChunkRecord, ChunkingMethod, FileMetadata};
use crate::span::LineSpan;

#[derive(Debug, Deserialize)]
struct NotebookDocument {
    #[serde(default)]
    cells: Vec<NotebookCell>,
}

#[derive(Debug, Deserialize)]
struct NotebookCell {
    cell_type: String,
    #[serde(deserialize_with = "deserialize_source")]
    source: String,
}

fn deserialize_source<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Source {
        Lines(Vec<String>),
        Joined(String),
    }

    Ok(match Source::deserialize(deserializer)? {
        Source::Lines(lines) => lines.concat(),
        Source::Joined(text) => text,
    })
}

const RECOGNIZED_CELL_TYPES: &[&str] = &["code", "markdown", "raw"];

/// Parse `source` as a Jupyter notebook and chunk every code/markdown/raw
/// cell independently. Returns an empty vector for anything that does not
/// parse as notebook JSON. `max_chars` bounds each cell sub-chunk's size, the
/// notebook-specific analogue of a tree-sitter chunk's `max_chars`.
pub fn chunk_notebook(source: &str, meta: &FileMetadata, language: &str, max_chars: usize) -> Vec<ChunkRecord> {
    let Ok(document) = serde_json::from_str::<NotebookDocument>(source) else {
        return Vec::new();
    };

    let normalized_path = normalize_file_path(&meta.repo, &meta.file_path);
    let mut records = Vec::new();
    let mut chunk_index = 0;

    for (cell_index, cell) in document.cells.iter().enumerate() {
        if !RECOGNIZED_CELL_TYPES.contains(&cell.cell_type.as_str()) || cell.source.trim().is_empty() {
            continue;
        }

        let cell_chars: Vec<char> = cell.source.chars().collect();
        for (sub_index, (start, window)) in windows_by_char_budget(&cell.source, max_chars).into_iter().enumerate() {
            if window.trim().is_empty() {
                continue;
            }
            let end = start + window.chars().count();
            let start_line = cell_chars[..start].iter().filter(|&&c| c == '\n').count() + 1;
            let end_line = cell_chars[..end].iter().filter(|&&c| c == '\n').count() + 1;
            let line_span = LineSpan::new(start_line, end_line);
            let chunk_id = format!("{normalized_path}-cell{cell_index}-{sub_index}");
            let metadata = ChunkMetadata {
                repo: meta.repo.clone(),
                branch: meta.branch.clone(),
                file_path: normalized_path.clone(),
                language: language.to_string(),
                chunk_id,
                chunk_index,
                start_line: line_span.start_line,
                end_line: line_span.end_line,
                chunking_method: ChunkingMethod::Notebook,
                relational_description: format!("Notebook cell {cell_index}"),
                cell_type: Some(cell.cell_type.clone()),
                original_cell_index: Some(cell_index),
            };
            records.push(ChunkRecord {
                content: window,
                metadata,
                import_lines: Vec::new(),
                parent_context_spans: Vec::new(),
                parent_context_text: Vec::new(),
            });
            chunk_index += 1;
        }
    }

    records
}

/// Split `text` into windows of at most `max_chars` characters. Each window
/// is `[start, start + max_chars)`, except when a newline falls in the
/// latter three-quarters of that range (past `start + max_chars / 4`) — the
/// window is then cut right after the last such newline, so a slice rarely
/// lands mid-line. Returns each window paired with its starting char offset
/// into `text`, so callers can derive line numbers cumulative within the
/// whole cell rather than relative to the window.
fn windows_by_char_budget(text: &str, max_chars: usize) -> Vec<(usize, String)> {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_chars {
        return vec![(0, text.to_string())];
    }

    let mut windows = Vec::new();
    let mut start = 0usize;

    while start < chars.len() {
        let mut end = (start + max_chars).min(chars.len());
        if end < chars.len() {
            let quarter_boundary = (start + max_chars / 4).min(end);
            if let Some(offset) = chars[quarter_boundary..end].iter().rposition(|&c| c == '\n') {
                end = quarter_boundary + offset + 1;
            }
        }
        windows.push((start, chars[start..end].iter().collect()));
        start = end.max(start + 1);
    }

    windows
}
