//! Operation dispatch
//!
//! One variant per command-line function. Each variant pulls the arguments
//! it needs out of a [`Request`] and calls into [`crate::pdf`] or
//! [`crate::convert`].

use std::path::PathBuf;
use clap::ValueEnum;
use crate::convert::pdf_to_docx;
use crate::error::{Error, Result};
use crate::pdf::{combine_folder, replace_page_pdf, rotate_pdf, Replacement};

/// The operation selected with `-f/--functions`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Function {
    /// Merge every PDF in a folder into <folder>/output.pdf
    #[value(name = "combinepdf")]
    CombinePdf,
    /// Extract each page's text into <save_dir>/<stem>.docx
    #[value(name = "pdftodocx")]
    PdfToDocx,
    /// Rotate every page clockwise, writing <save_dir>/<stem>.pdf
    #[value(name = "rotatepdf")]
    RotatePdf,
    /// Replace one page with the first page of another PDF, writing <save_dir>/<stem>_new.pdf
    #[value(name = "pagereplace")]
    PageReplace,
}

/// Arguments for a single invocation
///
/// Every field is optional at parse time; each function checks for the
/// ones it uses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    /// Folder of PDFs to combine
    pub folder: Option<PathBuf>,
    /// Input PDF file
    pub input: Option<PathBuf>,
    /// Directory the output is written to
    pub save_dir: Option<PathBuf>,
    /// Clockwise rotation in degrees
    pub degrees: Option<i64>,
    /// PDF whose first page is used as the replacement
    pub replacement: Option<PathBuf>,
    /// 1-based page number to replace
    pub page_number: Option<i64>,
}

/// What an operation did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// An output file was written
    Written { path: PathBuf, message: &'static str },
    /// The operation declined to write anything
    Skipped(String),
}

impl Outcome {
    /// Text shown to the user on stdout
    pub fn message(&self) -> String {
        match self {
            Outcome::Written { path, message } => format!("{} ({})", message, path.display()),
            Outcome::Skipped(reason) => reason.clone(),
        }
    }
}

impl Function {
    /// Name accepted on the command line
    pub fn name(self) -> &'static str {
        match self {
            Function::CombinePdf => "combinepdf",
            Function::PdfToDocx => "pdftodocx",
            Function::RotatePdf => "rotatepdf",
            Function::PageReplace => "pagereplace",
        }
    }

    /// Run the operation
    ///
    /// Missing paths and missing flags come back as errors. An out-of-range
    /// page number for `pagereplace` is not an error: it returns
    /// [`Outcome::Skipped`] and writes nothing.
    pub fn run(self, request: &Request) -> Result<Outcome> {
        log::debug!("Running {} with {:?}", self.name(), request);

        match self {
            Function::CombinePdf => {
                let folder = required(&request.folder, "--folderpath")?;
                let path = combine_folder(folder)?;
                Ok(Outcome::Written { path, message: "PDF Combined.. Please check." })
            }
            Function::PdfToDocx => {
                let input = required(&request.input, "--inputfilepath")?;
                let save_dir = required(&request.save_dir, "--savepath")?;
                let path = pdf_to_docx(input, save_dir)?;
                Ok(Outcome::Written { path, message: "PDF converted to DOCX.. Please check." })
            }
            Function::RotatePdf => {
                let input = required(&request.input, "--inputfilepath")?;
                let save_dir = required(&request.save_dir, "--savepath")?;
                let degrees = *required(&request.degrees, "--degrees")?;
                let path = rotate_pdf(input, save_dir, degrees)?;
                Ok(Outcome::Written { path, message: "PDF rotated.. Please check." })
            }
            Function::PageReplace => {
                let input = required(&request.input, "--inputfilepath")?;
                let replacement = required(&request.replacement, "--replacement")?;
                let save_dir = required(&request.save_dir, "--savepath")?;
                let page_number = *required(&request.page_number, "--pagenumber")?;

                match replace_page_pdf(input, replacement, save_dir, page_number)? {
                    Replacement::Written(path) => {
                        Ok(Outcome::Written { path, message: "Page replaced.. Please check." })
                    }
                    Replacement::OutOfRange { page_number, page_count } => Ok(Outcome::Skipped(format!(
                        "Page number {} is out of range: must be between 1 and {}",
                        page_number, page_count
                    ))),
                }
            }
        }
    }
}

fn required<'a, T>(value: &'a Option<T>, flag: &'static str) -> Result<&'a T> {
    value.as_ref().ok_or(Error::MissingArgument(flag))
}
