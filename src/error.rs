//! Error types for sheet generation and request decoding.

use thiserror::Error;

/// Failures while producing a worksheet document.
#[derive(Debug, Error)]
pub enum WorksheetError {
    /// No operand pair satisfies the operator's rules.
    #[error("Error: No unique problems could be generated.")]
    EmptyProblemSet,

    /// A layout block can never fit on a page, even an empty one.
    #[error("layout block of {height:.1}pt does not fit a {frame_height:.1}pt frame")]
    BlockTooTall { height: f32, frame_height: f32 },

    #[error("failed to write PDF: {0}")]
    Pdf(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Invalid form input on `POST /generate`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("missing form field '{0}'")]
    MissingField(&'static str),

    #[error("invalid operation '{0}'; expected '+' or '-'")]
    InvalidOperation(String),

    #[error("invalid page_count '{0}'; expected 1 or 2")]
    InvalidPageCount(String),
}
