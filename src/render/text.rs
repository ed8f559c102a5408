//! Plain text rendering of line records.

use super::inline::{spans_to_markdown, spans_to_plain, InlineSpan};
use super::{LineKind, LineRecord, RenderOptions};

/// Convert line records to plain text, one output line per visible record.
pub fn to_text(records: &[LineRecord], options: &RenderOptions) -> String {
    let inline = |spans: &[InlineSpan]| {
        if options.keep_bold_markers {
            spans_to_markdown(spans)
        } else {
            spans_to_plain(spans)
        }
    };

    let mut lines = Vec::with_capacity(records.len());
    for record in records.iter().filter(|r| r.is_visible()) {
        let line = match record.kind {
            LineKind::Heading1 | LineKind::Heading2 | LineKind::Heading3 => {
                let text = inline(&record.spans);
                if options.uppercase_headings {
                    text.to_uppercase()
                } else {
                    text
                }
            }
            LineKind::Bullet => format!(
                "{}{} {}",
                options.list_indent,
                options.bullet_marker,
                inline(&record.spans)
            ),
            LineKind::Ordered => format!(
                "{}{}. {}",
                options.list_indent,
                record.ordinal.as_deref().unwrap_or_default(),
                inline(&record.spans)
            ),
            LineKind::TableRow => record
                .cells
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(|c| inline(&c.spans))
                .collect::<Vec<_>>()
                .join(&options.cell_separator),
            LineKind::Blank => String::new(),
            LineKind::Paragraph => inline(&record.spans),
        };
        lines.push(line);
    }

    lines.join("\n")
}

/// Collapse markdown text into a one-line preview of at most `max_chars` characters.
///
/// `#`, `*` and newlines become spaces before trimming.
pub fn snippet(text: &str, max_chars: usize) -> String {
    let flattened: String = text
        .chars()
        .map(|c| if matches!(c, '#' | '*' | '\n') { ' ' } else { c })
        .collect();
    flattened.trim().chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render_lines;

    #[test]
    fn test_to_text() {
        let records = render_lines(
            "## Pricing\n\n| Service | Cost |\n|---|---|\n| SEO | **$2,000** |\n- Weekly **posts**\n3. Kickoff",
        );
        let text = to_text(&records, &RenderOptions::default());
        assert_eq!(
            text,
            "Pricing\n\nService | Cost\nSEO | $2,000\n  • Weekly posts\n  3. Kickoff"
        );
    }

    #[test]
    fn test_to_text_options() {
        let records = render_lines("# Plan\n- **Bold** item");
        let options = RenderOptions::new()
            .with_uppercase_headings(true)
            .with_bullet_marker('-')
            .with_list_indent("")
            .with_bold_markers(true);
        assert_eq!(to_text(&records, &options), "PLAN\n- **Bold** item");
    }

    #[test]
    fn test_to_text_large_ordinal() {
        let records = render_lines("12345678901234567890123. Phase one");
        assert_eq!(
            to_text(&records, &RenderOptions::default()),
            "  12345678901234567890123. Phase one"
        );
    }

    #[test]
    fn test_to_text_empty() {
        assert_eq!(to_text(&[], &RenderOptions::default()), "");
    }

    #[test]
    fn test_snippet() {
        assert_eq!(snippet("## Hi **there**\nfriend", 140), "Hi   there   friend");
        assert_eq!(snippet("abcdef", 3), "abc");
        assert_eq!(snippet("  #  ", 10), "");
        assert_eq!(snippet("ééé", 2), "éé");
    }
}
