//! Cell comments (notes)
//!
//! A comment is attached to one cell and holds one or more rich-text runs.
//!
//! ## Example
//!
//! ```rust
//! use tabwright_core::{Comment, CommentRun, Workbook};
//!
//! let mut workbook = Workbook::new();
//! let sheet = workbook.current_sheet_mut();
//!
//! let note = Comment::new("A1", "Reviewer")
//!     .with_run(CommentRun::new("Check: ").bold(true))
//!     .with_run("totals do not match");
//! sheet.add_comment(note).unwrap();
//! assert_eq!(sheet.comments().len(), 1);
//! ```

use crate::cell::CellReference;
use crate::error::{Error, Result};
use crate::style::{Color, UnderlineStyle};
use serde::Serialize;

/// One formatted run of comment text
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CommentRun {
    #[serde(rename = "text")]
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline: Option<UnderlineStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strike: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl CommentRun {
    /// Plain run
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = Some(italic);
        self
    }

    pub fn underline(mut self, underline: UnderlineStyle) -> Self {
        self.underline = Some(underline);
        self
    }

    pub fn family<S: Into<String>>(mut self, family: S) -> Self {
        self.family = Some(family.into());
        self
    }

    pub fn size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn strike(mut self, strike: bool) -> Self {
        self.strike = Some(strike);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

impl From<&str> for CommentRun {
    fn from(text: &str) -> Self {
        CommentRun::new(text)
    }
}

impl From<String> for CommentRun {
    fn from(text: String) -> Self {
        CommentRun::new(text)
    }
}

/// A comment attached to a cell
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comment {
    /// Cell reference (e.g., "B3")
    pub cell: String,
    /// Author of the comment
    pub author: String,
    /// Text runs, in order
    pub paragraph: Vec<CommentRun>,
}

impl Comment {
    /// Create a comment with no text yet
    pub fn new<C: Into<String>, A: Into<String>>(cell: C, author: A) -> Self {
        Self {
            cell: cell.into(),
            author: author.into(),
            paragraph: Vec::new(),
        }
    }

    /// Create a comment holding a single plain run
    pub fn text<C: Into<String>, A: Into<String>, T: Into<String>>(
        cell: C,
        author: A,
        text: T,
    ) -> Self {
        Self::new(cell, author).with_run(CommentRun::new(text))
    }

    /// Append a run
    pub fn with_run<R: Into<CommentRun>>(mut self, run: R) -> Self {
        self.paragraph.push(run.into());
        self
    }

    /// Full text with formatting dropped
    pub fn plain_text(&self) -> String {
        self.paragraph.iter().map(|r| r.text.as_str()).collect()
    }

    /// Check the cell reference and that there is some text
    pub fn validate(&self) -> Result<()> {
        CellReference::parse(&self.cell)?;
        if self.paragraph.is_empty() {
            return Err(Error::InvalidComment(format!(
                "comment on {} has no text",
                self.cell
            )));
        }
        Ok(())
    }

    /// Validate and rewrite the cell in uppercase A1 form
    pub(crate) fn normalized(mut self) -> Result<Self> {
        self.validate()?;
        self.cell = CellReference::parse(&self.cell)?.to_a1_string();
        Ok(self)
    }
}
