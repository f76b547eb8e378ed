//! PDF to Word document conversion
//!
//! Text is pulled from each page with lopdf and written to a `.docx` file
//! with one paragraph per page, in page order. Layout, fonts and images are
//! not carried over.

use std::fs::File;
use std::path::{Path, PathBuf};
use docx_rs::{BreakType, Docx, Paragraph, Run};
use log::{debug, info};
use lopdf::Document;
use crate::error::{Error, Result};
use crate::paths::{output_path, require_dir, require_file};

/// Extract the text of every page, in document order
///
/// A page without text yields an empty string, so the result always has one
/// entry per page.
pub fn page_texts(doc: &Document) -> Result<Vec<String>> {
    let mut texts = Vec::new();

    for page_number in doc.get_pages().into_keys() {
        let text = doc.extract_text(&[page_number])?;
        debug!("Page {}: {} characters", page_number, text.len());
        texts.push(text.trim_end().to_string());
    }

    Ok(texts)
}

/// One paragraph holding a page's text
///
/// `<w:t>` does not carry newlines, so each extracted line becomes its own
/// text element with a line break in between.
fn page_paragraph(text: &str) -> Paragraph {
    let mut run = Run::new();

    for (index, line) in text.split('\n').enumerate() {
        if index > 0 {
            run = run.add_break(BreakType::TextWrapping);
        }
        run = run.add_text(line.trim_end_matches('\r'));
    }

    Paragraph::new().add_run(run)
}

/// Build a Word document with one paragraph per entry
pub fn build_docx(paragraphs: &[String]) -> Docx {
    paragraphs
        .iter()
        .fold(Docx::new(), |docx, text| docx.add_paragraph(page_paragraph(text)))
}

/// Write a Word document to `path`
pub fn write_docx(docx: Docx, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    docx.build()
        .pack(file)
        .map_err(|e| Error::Docx(e.to_string()))?;
    Ok(())
}

/// Convert `input` to `<save_dir>/<input_stem>.docx`
///
/// # Example
///
/// ```no_run
/// use pdftools::convert::pdf_to_docx;
/// use std::path::Path;
///
/// let output = pdf_to_docx(Path::new("notes.pdf"), Path::new(".")).expect("Failed to convert");
/// assert!(output.ends_with("notes.docx"));
/// ```
pub fn pdf_to_docx(input: &Path, save_dir: &Path) -> Result<PathBuf> {
    require_file(input)?;
    require_dir(save_dir)?;

    let doc = Document::load(input)?;
    let texts = page_texts(&doc)?;

    let output = output_path(input, save_dir, "", "docx");
    write_docx(build_docx(&texts), &output)?;

    info!("Wrote {} paragraphs to {}", texts.len(), output.display());
    Ok(output)
}
