//! Error types for reading markup trees

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Character range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("JSON error at line {line}, column {column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },
}

impl ParseError {
    /// Character span of the error within `source`
    pub fn span(&self, source: &str) -> Span {
        match self {
            ParseError::Syntax { line, column, .. } => {
                let start = offset_of(source, *line, *column);
                start..(start + 1).min(source.chars().count()).max(start)
            }
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let mut buf = Vec::new();
        let span = self.span(source);
        match self {
            ParseError::Syntax { message, .. } => {
                let written = Report::build(ReportKind::Error, filename, span.start)
                    .with_message("invalid markup tree")
                    .with_label(
                        Label::new((filename, span))
                            .with_message(message)
                            .with_color(Color::Red),
                    )
                    .finish()
                    .write((filename, Source::from(source)), &mut buf);
                if written.is_err() {
                    return self.to_string();
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl From<&serde_json::Error> for ParseError {
    fn from(err: &serde_json::Error) -> Self {
        // serde_json appends " at line X column Y" to its Display output
        let full = err.to_string();
        let message = match full.rfind(" at line ") {
            Some(idx) => full[..idx].to_string(),
            None => full,
        };
        ParseError::Syntax {
            line: err.line(),
            column: err.column(),
            message,
        }
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        ParseError::from(&err)
    }
}

/// Convert a 1-based line and column into a character offset
fn offset_of(source: &str, line: usize, column: usize) -> usize {
    let mut offset = 0;
    for (idx, text) in source.split('\n').enumerate() {
        if idx + 1 == line {
            return offset + column.saturating_sub(1).min(text.chars().count());
        }
        offset += text.chars().count() + 1;
    }
    source.chars().count()
}
