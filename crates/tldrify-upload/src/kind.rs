//! Coarse file categories used to pick an icon.

use std::fmt;

/// Display category of a file, derived from its mime type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// `image/*`.
    Image,
    /// PDF or EPUB.
    Pdf,
    /// Excel, spreadsheets, CSV.
    Spreadsheet,
    /// PowerPoint and other presentations.
    Presentation,
    /// Word and other documents.
    Document,
    /// HTML, XML, JSON.
    Code,
    /// Plain text and other `text/*`.
    Text,
    /// Anything else.
    Other,
}

impl FileKind {
    /// Classify a mime type (case-insensitive substring rules, first match wins).
    #[must_use]
    pub fn from_mime(mime: &str) -> Self {
        let mime = mime.to_lowercase();
        let has = |needles: &[&str]| needles.iter().any(|n| mime.contains(n));

        if has(&["image"]) {
            Self::Image
        } else if has(&["pdf", "epub"]) {
            Self::Pdf
        } else if has(&["excel", "spreadsheet", "csv"]) {
            Self::Spreadsheet
        } else if has(&["powerpoint", "presentation"]) {
            Self::Presentation
        } else if has(&["word", "document"]) {
            Self::Document
        } else if has(&["html", "xml", "json"]) {
            Self::Code
        } else if has(&["text"]) {
            Self::Text
        } else {
            Self::Other
        }
    }

    /// Short label for screen readers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Image => "Image",
            Self::Pdf => "PDF",
            Self::Spreadsheet => "Spreadsheet",
            Self::Presentation => "Presentation",
            Self::Document => "Document",
            Self::Code => "Code",
            Self::Text => "Text",
            Self::Other => "File",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
