//! Boundary to the external rendering engine
//!
//! No renderer ships with tabwright. Implement [`Renderer`] over whatever
//! reaches the engine (a shared library, a subprocess, a service).

use thiserror::Error;

/// Errors reported by a renderer
#[derive(Debug, Error)]
pub enum RenderError {
    /// The engine refused the document
    #[error("Renderer rejected the document: {0}")]
    Rejected(String),

    /// The engine could not be reached or failed mid-way
    #[error("Renderer failed: {0}")]
    Failed(String),

    /// The engine succeeded but produced nothing
    #[error("Renderer returned an empty file")]
    EmptyOutput,
}

/// Turns an encoded exchange document into a spreadsheet file
pub trait Renderer {
    /// Render one document; the returned bytes are the finished file
    fn render(&self, document: &[u8]) -> Result<Vec<u8>, RenderError>;
}

impl<F> Renderer for F
where
    F: Fn(&[u8]) -> Result<Vec<u8>, RenderError>,
{
    fn render(&self, document: &[u8]) -> Result<Vec<u8>, RenderError> {
        self(document)
    }
}
