//! PDF Tools Library
//!
//! A small set of PDF file operations behind one command-line dispatcher:
//! - Combine every PDF in a folder into one file
//! - Convert a PDF's text into a Word document, one paragraph per page
//! - Rotate every page of a PDF
//! - Replace a single page with the first page of another PDF
//!
//! # Example
//!
//! ```no_run
//! use pdftools::dispatch::{Function, Request};
//! use std::path::PathBuf;
//!
//! let request = Request {
//!     input: Some(PathBuf::from("scan.pdf")),
//!     save_dir: Some(PathBuf::from("out")),
//!     degrees: Some(90),
//!     ..Request::default()
//! };
//!
//! let outcome = Function::RotatePdf.run(&request).expect("Failed to rotate");
//! println!("{}", outcome.message());
//! ```

pub mod convert;
pub mod dispatch;
pub mod error;
pub mod paths;
pub mod pdf;

#[cfg(test)]
mod testing;

// Re-export commonly used items
pub use dispatch::{Function, Outcome, Request};
pub use error::{Error, Result};
