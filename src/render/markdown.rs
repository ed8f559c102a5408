//! Line-oriented rendering of the markdown subset used in proposals.
//!
//! Every input line becomes exactly one [`LineRecord`]. There are no
//! multi-line blocks: list items, table rows and headings are classified
//! line by line, so the output always has as many records as the input has
//! `\n`-separated segments.

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::inline::{InlineParser, InlineSpan};

/// Classification of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LineKind {
    Heading1,
    Heading2,
    Heading3,
    Bullet,
    Ordered,
    TableRow,
    Blank,
    Paragraph,
}

impl LineKind {
    /// Heading level (1-3) for heading kinds.
    pub fn heading_level(self) -> Option<u8> {
        match self {
            LineKind::Heading1 => Some(1),
            LineKind::Heading2 => Some(2),
            LineKind::Heading3 => Some(3),
            _ => None,
        }
    }

    /// Check if this is a bullet or ordered list item.
    pub fn is_list_item(self) -> bool {
        matches!(self, LineKind::Bullet | LineKind::Ordered)
    }
}

/// A table cell with its inline spans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCell {
    /// Trimmed cell text
    pub text: String,
    pub spans: Vec<InlineSpan>,
}

/// One rendered input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRecord {
    pub kind: LineKind,

    /// Line content with the structural marker removed
    pub text: String,

    /// Inline spans of `text`; empty for blank lines and table rows
    pub spans: Vec<InlineSpan>,

    /// Cells of a visible table row; `None` on separator rows and non-table lines
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cells: Option<Vec<TableCell>>,

    /// Leading digits of an ordered item, as written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordinal: Option<String>,
}

impl LineRecord {
    fn new(kind: LineKind, text: impl Into<String>, spans: Vec<InlineSpan>) -> Self {
        Self {
            kind,
            text: text.into(),
            spans,
            cells: None,
            ordinal: None,
        }
    }

    /// Check if this is a table separator row such as `| --- | :-: |`.
    pub fn is_separator(&self) -> bool {
        self.kind == LineKind::TableRow && self.cells.is_none()
    }

    /// Whether the record produces any output.
    pub fn is_visible(&self) -> bool {
        !self.is_separator()
    }
}

/// Renderer for the proposal markdown subset.
///
/// Holds its compiled patterns, so reuse one instance when rendering many
/// documents.
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    inline: InlineParser,
    ordered_marker: Regex,
    separator_cell: Regex,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer.
    pub fn new() -> Self {
        Self {
            inline: InlineParser::new(),
            ordered_marker: Regex::new(r"^(\d+)\.\s").expect("ordered marker pattern"),
            separator_cell: Regex::new(r"^[\s:-]+$").expect("separator cell pattern"),
        }
    }

    /// Render text into one record per line.
    ///
    /// An empty string yields no records.
    pub fn render(&self, text: &str) -> Vec<LineRecord> {
        if text.is_empty() {
            return Vec::new();
        }
        text.split('\n').map(|line| self.render_line(line)).collect()
    }

    /// Classify and render a single line.
    pub fn render_line(&self, line: &str) -> LineRecord {
        if let Some(rest) = line.strip_prefix("### ") {
            return self.text_record(LineKind::Heading3, rest);
        }
        if let Some(rest) = line.strip_prefix("## ") {
            return self.text_record(LineKind::Heading2, rest);
        }
        if let Some(rest) = line.strip_prefix("# ") {
            return self.text_record(LineKind::Heading1, rest);
        }
        if let Some(rest) = line
            .strip_prefix("- ")
            .or_else(|| line.strip_prefix("* "))
        {
            return self.text_record(LineKind::Bullet, rest);
        }
        if let Some(caps) = self.ordered_marker.captures(line) {
            let marker_end = caps.get(0).map_or(0, |m| m.end());
            let mut record = self.text_record(LineKind::Ordered, &line[marker_end..]);
            record.ordinal = caps.get(1).map(|m| m.as_str().to_string());
            return record;
        }

        let trimmed = line.trim();
        if trimmed.starts_with('|') && trimmed.ends_with('|') {
            return self.table_row(line, trimmed);
        }
        if trimmed.is_empty() {
            return LineRecord::new(LineKind::Blank, line, Vec::new());
        }

        self.text_record(LineKind::Paragraph, line)
    }

    fn text_record(&self, kind: LineKind, text: &str) -> LineRecord {
        LineRecord::new(kind, text, self.inline.parse(text))
    }

    fn table_row(&self, line: &str, trimmed: &str) -> LineRecord {
        let cells: Vec<&str> = trimmed
            .split('|')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .collect();

        let mut record = LineRecord::new(LineKind::TableRow, line, Vec::new());
        if !cells.iter().all(|c| self.separator_cell.is_match(c)) {
            record.cells = Some(
                cells
                    .into_iter()
                    .map(|c| TableCell {
                        text: c.to_string(),
                        spans: self.inline.parse(c),
                    })
                    .collect(),
            );
        }
        record
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Render markdown-subset text into line records.
pub fn render_lines(text: &str) -> Vec<LineRecord> {
    MarkdownRenderer::new().render(text)
}
