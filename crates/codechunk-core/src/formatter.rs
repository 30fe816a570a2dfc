//! Render chunk records into formatted text blocks (§4.10).

use serde::Serialize;

use crate::metadata::{ChunkMetadata, ChunkRecord};

const SENTINEL: &str = "#... some code ...";
const CHUNK_SEPARATOR: &str = "\n\n========== CHUNK SEPARATOR ==========\n\n";

/// One chunk's rendered text alongside its original content and metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedChunk {
    /// The rendered block (tagged or placeholder mode, per the caller's choice).
    pub formatted_chunk_block: String,
    /// The chunk's unmodified source content.
    pub original_content: String,
    /// The chunk's metadata.
    pub metadata: ChunkMetadata,
}

/// Parent context blocks to render for a chunk, with the last block dropped
/// if its first line duplicates the chunk content's own first line.
fn effective_parent_blocks(record: &ChunkRecord) -> Vec<String> {
    let mut blocks = record.parent_context_text.clone();
    let chunk_first_line = record.content.lines().next().map(str::trim);
    if let Some(last) = blocks.last() {
        if last.lines().next().map(str::trim) == chunk_first_line {
            blocks.pop();
        }
    }
    blocks
}

fn imports_text(record: &ChunkRecord) -> Option<String> {
    (!record.import_lines.is_empty()).then(|| record.import_lines.join("\n"))
}

fn parent_context_text(record: &ChunkRecord, separator: &str) -> Option<String> {
    let blocks = effective_parent_blocks(record);
    (!blocks.is_empty()).then(|| blocks.join(separator))
}

fn render_tagged(record: &ChunkRecord) -> String {
    let mut sections = Vec::new();

    if let Some(text) = imports_text(record) {
        sections.push(format!("<<IMPORTS_START>>\n{text}\n<<IMPORTS_END>>"));
    }
    if let Some(text) = parent_context_text(record, &format!("\n{SENTINEL}\n")) {
        sections.push(format!("<<PARENT_CONTEXT_START>>\n{text}\n<<PARENT_CONTEXT_END>>"));
    }
    sections.push(format!("<<ORIGINAL_CHUNK_START>>\n{}\n<<ORIGINAL_CHUNK_END>>", record.content));

    sections.join("\n\n")
}

fn render_placeholder(record: &ChunkRecord) -> String {
    let mut sections = Vec::new();
    if let Some(text) = imports_text(record) {
        sections.push(text);
    }
    if let Some(text) = parent_context_text(record, &format!("\n{SENTINEL}\n")) {
        sections.push(text);
    }
    sections.push(record.content.clone());

    let mut lines = Vec::with_capacity(sections.len() * 3);
    for section in sections {
        lines.push(SENTINEL.to_string());
        lines.push(section);
        lines.push(SENTINEL.to_string());
    }

    let last = lines.len() - 1;
    lines[0] = String::new();
    lines[last] = String::new();

    let mut collapsed: Vec<String> = Vec::with_capacity(lines.len());
    for line in lines {
        if line == SENTINEL && collapsed.last().map(String::as_str) == Some(SENTINEL) {
            continue;
        }
        collapsed.push(line);
    }

    collapsed.join("\n")
}

/// Render one chunk record into its formatted text block.
pub fn format_chunk(record: &ChunkRecord, include_tokens: bool) -> String {
    if include_tokens { render_tagged(record) } else { render_placeholder(record) }
}

/// Render an entire file's chunks into a joined whole-file text and the
/// parallel structured per-chunk output.
pub fn format_file(records: &[ChunkRecord], include_tokens: bool) -> (String, Vec<FormattedChunk>) {
    let structured: Vec<FormattedChunk> = records
        .iter()
        .map(|record| FormattedChunk {
            formatted_chunk_block: format_chunk(record, include_tokens),
            original_content: record.content.clone(),
            metadata: record.metadata.clone(),
        })
        .collect();

    let whole_file =
        structured.iter().map(|chunk| chunk.formatted_chunk_block.as_str()).collect::<Vec<_>>().join(CHUNK_SEPARATOR);

    (whole_file, structured)
}
