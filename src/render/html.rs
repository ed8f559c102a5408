//! HTML rendering of line records.
//!
//! Each visible record becomes one element; consecutive list items are not
//! grouped into a list container.

use super::inline::InlineSpan;
use super::{LineKind, LineRecord, RenderOptions};

/// Convert line records to an HTML fragment wrapped in a container `div`.
pub fn to_html(records: &[LineRecord], options: &RenderOptions) -> String {
    let class = |name: &str| format!("{}{}", options.class_prefix, name);

    let mut output = format!("<div class=\"{}\">\n", class("proposal"));
    for record in records.iter().filter(|r| r.is_visible()) {
        match record.kind {
            LineKind::Heading1 | LineKind::Heading2 | LineKind::Heading3 => {
                // Level 1 maps to h2: the page title owns h1.
                let level = record.kind.heading_level().unwrap_or(1) + 1;
                output.push_str(&format!("<h{}>", level));
                render_spans(&mut output, &record.spans);
                output.push_str(&format!("</h{}>", level));
            }
            LineKind::Bullet | LineKind::Ordered => {
                let name = if record.kind == LineKind::Bullet {
                    "bullet"
                } else {
                    "ordered"
                };
                output.push_str(&format!("<li class=\"{}\">", class(name)));
                render_spans(&mut output, &record.spans);
                output.push_str("</li>");
            }
            LineKind::TableRow => {
                let cells = record.cells.as_deref().unwrap_or_default();
                output.push_str(&format!("<div class=\"{}\">", class("table-row")));
                for (i, cell) in cells.iter().enumerate() {
                    let name = if i + 1 == cells.len() {
                        "cell-last"
                    } else {
                        "cell"
                    };
                    output.push_str(&format!("<span class=\"{}\">", class(name)));
                    render_spans(&mut output, &cell.spans);
                    output.push_str("</span>");
                }
                output.push_str("</div>");
            }
            LineKind::Blank => {
                output.push_str(&format!("<div class=\"{}\"></div>", class("spacer")));
            }
            LineKind::Paragraph => {
                output.push_str("<p>");
                render_spans(&mut output, &record.spans);
                output.push_str("</p>");
            }
        }
        output.push('\n');
    }
    output.push_str("</div>");
    output
}

fn render_spans(output: &mut String, spans: &[InlineSpan]) {
    for span in spans {
        if span.bold {
            output.push_str("<strong>");
            output.push_str(&escape_html(&span.text));
            output.push_str("</strong>");
        } else {
            output.push_str(&escape_html(&span.text));
        }
    }
}

/// Escape characters with special meaning in HTML text and attributes.
fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render_lines;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
    }

    #[test]
    fn test_headings_shift_one_level() {
        let html = to_html(&render_lines("# A\n## B\n### C"), &RenderOptions::default());
        assert!(html.contains("<h2>A</h2>"));
        assert!(html.contains("<h3>B</h3>"));
        assert!(html.contains("<h4>C</h4>"));
    }

    #[test]
    fn test_table_and_bold() {
        let html = to_html(
            &render_lines("| Service | Cost |\n|---|---|\n| SEO | **$2,000** |"),
            &RenderOptions::new().with_class_prefix(""),
        );
        assert!(html.contains(
            "<div class=\"table-row\"><span class=\"cell\">SEO</span><span class=\"cell-last\"><strong>$2,000</strong></span></div>"
        ));
        assert!(!html.contains("---"));
        assert_eq!(html.matches("table-row").count(), 2);
    }

    #[test]
    fn test_lists_spacer_and_paragraph() {
        let html = to_html(
            &render_lines("- one\n\n1. two\nFish & <chips>"),
            &RenderOptions::default(),
        );
        assert!(html.starts_with("<div class=\"pf-proposal\">\n"));
        assert!(html.contains("<li class=\"pf-bullet\">one</li>"));
        assert!(html.contains("<div class=\"pf-spacer\"></div>"));
        assert!(html.contains("<li class=\"pf-ordered\">two</li>"));
        assert!(html.contains("<p>Fish &amp; &lt;chips&gt;</p>"));
        assert!(html.ends_with("</div>"));
    }
}
