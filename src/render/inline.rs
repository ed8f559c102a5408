//! Inline bold-span splitting.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// A run of inline text, bold or plain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineSpan {
    pub text: String,
    pub bold: bool,
}

impl InlineSpan {
    /// Create a plain span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }

    /// Create a bold span.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
        }
    }
}

/// Splits text on paired `**` delimiters.
#[derive(Debug, Clone)]
pub struct InlineParser {
    bold: Regex,
}

impl InlineParser {
    /// Create a new inline parser.
    pub fn new() -> Self {
        Self {
            bold: Regex::new(r"\*\*(.*?)\*\*").expect("bold span pattern"),
        }
    }

    /// Split a line into bold and plain spans.
    ///
    /// Text without a complete `**…**` pair comes back as one plain span,
    /// even when empty. Otherwise empty plain runs between pairs are dropped.
    pub fn parse(&self, text: &str) -> Vec<InlineSpan> {
        let mut spans = Vec::new();
        let mut last = 0;

        for caps in self.bold.captures_iter(text) {
            let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            if whole.start() > last {
                spans.push(InlineSpan::plain(&text[last..whole.start()]));
            }
            spans.push(InlineSpan::bold(inner.as_str()));
            last = whole.end();
        }

        if spans.is_empty() {
            return vec![InlineSpan::plain(text)];
        }
        if last < text.len() {
            spans.push(InlineSpan::plain(&text[last..]));
        }
        spans
    }
}

impl Default for InlineParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Split text into bold and plain spans.
pub fn split_bold(text: &str) -> Vec<InlineSpan> {
    InlineParser::new().parse(text)
}

/// Rebuild markdown source from spans, wrapping bold runs in `**`.
pub fn spans_to_markdown(spans: &[InlineSpan]) -> String {
    let mut output = String::new();
    for span in spans {
        if span.bold {
            output.push_str("**");
            output.push_str(&span.text);
            output.push_str("**");
        } else {
            output.push_str(&span.text);
        }
    }
    output
}

/// Concatenate span text without any markup.
pub fn spans_to_plain(spans: &[InlineSpan]) -> String {
    spans.iter().map(|s| s.text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text() {
        assert_eq!(split_bold("plain text"), vec![InlineSpan::plain("plain text")]);
    }

    #[test]
    fn test_only_bold() {
        assert_eq!(split_bold("**bold**"), vec![InlineSpan::bold("bold")]);
    }

    #[test]
    fn test_mixed() {
        assert_eq!(
            split_bold("a **b** c **d**"),
            vec![
                InlineSpan::plain("a "),
                InlineSpan::bold("b"),
                InlineSpan::plain(" c "),
                InlineSpan::bold("d"),
            ]
        );
    }

    #[test]
    fn test_adjacent_pairs_have_no_empty_plain_run() {
        assert_eq!(
            split_bold("**a****b**"),
            vec![InlineSpan::bold("a"), InlineSpan::bold("b")]
        );
    }

    #[test]
    fn test_unmatched_delimiter() {
        assert_eq!(
            split_bold("price **TBD"),
            vec![InlineSpan::plain("price **TBD")]
        );
        assert_eq!(
            split_bold("**a** and **b"),
            vec![InlineSpan::bold("a"), InlineSpan::plain(" and **b")]
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(split_bold(""), vec![InlineSpan::plain("")]);
    }

    #[test]
    fn test_lazy_match() {
        assert_eq!(
            split_bold("***x**"),
            vec![InlineSpan::bold("*x")]
        );
    }

    #[test]
    fn test_markdown_reconstruction_is_stable() {
        for input in ["a **b** c", "**x**", "no bold", "**a** and **b", "***x**", "****"] {
            let spans = split_bold(input);
            assert_eq!(split_bold(&spans_to_markdown(&spans)), spans, "{input}");
        }
    }

    #[test]
    fn test_spans_to_plain() {
        assert_eq!(spans_to_plain(&split_bold("a **b** c")), "a b c");
    }
}
