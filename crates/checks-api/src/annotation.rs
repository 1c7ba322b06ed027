//! Line-scoped annotations attached to a check run.

use serde::{Deserialize, Serialize};

use crate::error::{ChecksError, Result};

/// Maximum size of an annotation message or raw details, in bytes.
pub const MAX_TEXT_BYTES: usize = 64 * 1024;

/// Maximum length of an annotation title, in characters.
pub const MAX_TITLE_CHARS: usize = 255;

/// Severity of an annotation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationLevel {
    Notice,
    Warning,
    Failure,
}

/// An annotation for a line range of a file.
///
/// Only constructible through [`ChecksAnnotationBuilder`]; immutable after.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ChecksAnnotation {
    path: String,
    start_line: u32,
    end_line: u32,
    level: AnnotationLevel,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_column: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_column: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    raw_details: Option<String>,
}

impl ChecksAnnotation {
    /// Repository-relative path, e.g. `assets/css/main.css`.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn start_line(&self) -> u32 {
        self.start_line
    }

    pub fn end_line(&self) -> u32 {
        self.end_line
    }

    pub fn level(&self) -> AnnotationLevel {
        self.level
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn start_column(&self) -> Option<u32> {
        self.start_column
    }

    pub fn end_column(&self) -> Option<u32> {
        self.end_column
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn raw_details(&self) -> Option<&str> {
        self.raw_details.as_deref()
    }

    /// Whether the annotation covers exactly one line.
    pub fn is_single_line(&self) -> bool {
        self.start_line == self.end_line
    }
}

/// Builder for [`ChecksAnnotation`].
#[derive(Debug, Clone)]
pub struct ChecksAnnotationBuilder {
    annotation: ChecksAnnotation,
}

impl ChecksAnnotationBuilder {
    /// Start an annotation covering `start_line..=end_line` of `path`.
    ///
    /// Fails when `path` or `message` is blank, when the line range is
    /// inverted, or when `message` is larger than 64 KiB.
    pub fn new(
        path: impl Into<String>,
        start_line: u32,
        end_line: u32,
        level: AnnotationLevel,
        message: impl Into<String>,
    ) -> Result<Self> {
        let path = path.into();
        let message = message.into();

        if path.trim().is_empty() {
            return Err(ChecksError::BlankField { field: "path" });
        }
        if message.trim().is_empty() {
            return Err(ChecksError::BlankField { field: "message" });
        }
        if start_line > end_line {
            return Err(ChecksError::InvalidLineRange {
                start_line,
                end_line,
            });
        }
        check_bytes("message", &message)?;

        Ok(Self {
            annotation: ChecksAnnotation {
                path,
                start_line,
                end_line,
                level,
                message,
                start_column: None,
                end_column: None,
                title: None,
                raw_details: None,
            },
        })
    }

    /// Start an annotation covering a single line.
    pub fn single_line(
        path: impl Into<String>,
        line: u32,
        level: AnnotationLevel,
        message: impl Into<String>,
    ) -> Result<Self> {
        Self::new(path, line, line, level, message)
    }

    pub fn with_start_column(mut self, start_column: u32) -> Result<Self> {
        self.require_single_line()?;
        self.annotation.start_column = Some(start_column);
        Ok(self)
    }

    pub fn with_end_column(mut self, end_column: u32) -> Result<Self> {
        self.require_single_line()?;
        self.annotation.end_column = Some(end_column);
        Ok(self)
    }

    /// Title shown above the message; at most 255 characters.
    pub fn with_title(mut self, title: impl Into<String>) -> Result<Self> {
        let title = title.into();
        let chars = title.chars().count();
        if chars > MAX_TITLE_CHARS {
            return Err(ChecksError::FieldTooLong {
                field: "title",
                limit: MAX_TITLE_CHARS,
                actual: chars,
                unit: "characters",
            });
        }
        self.annotation.title = Some(title);
        Ok(self)
    }

    /// Extra details about the annotation; at most 64 KiB.
    pub fn with_raw_details(mut self, raw_details: impl Into<String>) -> Result<Self> {
        let raw_details = raw_details.into();
        check_bytes("raw details", &raw_details)?;
        self.annotation.raw_details = Some(raw_details);
        Ok(self)
    }

    pub fn build(self) -> ChecksAnnotation {
        self.annotation
    }

    fn require_single_line(&self) -> Result<()> {
        if !self.annotation.is_single_line() {
            return Err(ChecksError::ColumnsRequireSingleLine {
                start_line: self.annotation.start_line,
                end_line: self.annotation.end_line,
            });
        }
        Ok(())
    }
}

fn check_bytes(field: &'static str, text: &str) -> Result<()> {
    if text.len() > MAX_TEXT_BYTES {
        return Err(ChecksError::FieldTooLong {
            field,
            limit: MAX_TEXT_BYTES,
            actual: text.len(),
            unit: "bytes",
        });
    }
    Ok(())
}
