//! Rendering options and configuration.

/// Options for rendering line records as text or HTML.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Uppercase heading text in plain-text output
    pub uppercase_headings: bool,

    /// Marker placed before bullet items in plain-text output
    pub bullet_marker: char,

    /// Indent before list items in plain-text output
    pub list_indent: String,

    /// Separator placed between table cells in plain-text output
    pub cell_separator: String,

    /// Keep `**` around bold spans in plain-text output
    pub keep_bold_markers: bool,

    /// Prefix for CSS class names in HTML output
    pub class_prefix: String,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable uppercase headings.
    pub fn with_uppercase_headings(mut self, uppercase: bool) -> Self {
        self.uppercase_headings = uppercase;
        self
    }

    /// Set the bullet marker character.
    pub fn with_bullet_marker(mut self, marker: char) -> Self {
        self.bullet_marker = marker;
        self
    }

    /// Set the list indent.
    pub fn with_list_indent(mut self, indent: impl Into<String>) -> Self {
        self.list_indent = indent.into();
        self
    }

    /// Set the table cell separator.
    pub fn with_cell_separator(mut self, separator: impl Into<String>) -> Self {
        self.cell_separator = separator.into();
        self
    }

    /// Keep or drop `**` markers around bold text.
    pub fn with_bold_markers(mut self, keep: bool) -> Self {
        self.keep_bold_markers = keep;
        self
    }

    /// Set the CSS class prefix.
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            uppercase_headings: false,
            bullet_marker: '•',
            list_indent: "  ".to_string(),
            cell_separator: " | ".to_string(),
            keep_bold_markers: false,
            class_prefix: "pf-".to_string(),
        }
    }
}
