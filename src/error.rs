//! Error types for the pdftools library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the pdftools library
#[derive(Error, Debug)]
pub enum Error {
    /// PDF processing error
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Word document could not be written
    #[error("DOCX error: {0}")]
    Docx(String),

    /// Input file does not exist
    #[error("The target file doesn't exist: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Folder or save directory does not exist
    #[error("The target directory doesn't exist: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// Folder contains nothing to combine
    #[error("No PDF files found in {}", .0.display())]
    NoPdfFiles(PathBuf),

    /// Invalid PDF (no pages)
    #[error("PDF has no pages: {}", .0.display())]
    EmptyPdf(PathBuf),

    /// Rotation that is not a multiple of 90 degrees
    #[error("Rotation must be a multiple of 90 degrees, got {0}")]
    InvalidRotation(i64),

    /// A flag the chosen function needs was not given
    #[error("Missing required argument {0}")]
    MissingArgument(&'static str),

    /// General error
    #[error("{0}")]
    General(String),
}
