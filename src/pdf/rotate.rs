//! Page rotation

use std::path::{Path, PathBuf};
use log::{debug, info};
use lopdf::{Document, Object};
use crate::error::{Error, Result};
use crate::paths::{output_path, require_dir, require_file};
use crate::pdf::pages::{effective_rotation, page_ids};

/// Rotate every page of `doc` clockwise by `degrees`
///
/// Each page ends up with an explicit `/Rotate` in `0..360`. Negative values
/// rotate counter-clockwise.
pub fn rotate_document(doc: &mut Document, degrees: i64) -> Result<()> {
    if degrees % 90 != 0 {
        return Err(Error::InvalidRotation(degrees));
    }

    for page_id in page_ids(doc) {
        let rotation = (effective_rotation(doc, page_id) + degrees).rem_euclid(360);
        doc.get_dictionary_mut(page_id)?.set("Rotate", Object::Integer(rotation));
    }

    Ok(())
}

/// Rotate every page of `input` and write `<save_dir>/<input_stem>.pdf`
///
/// Note that when `save_dir` is the input's own folder the input is
/// overwritten.
pub fn rotate_pdf(input: &Path, save_dir: &Path, degrees: i64) -> Result<PathBuf> {
    require_file(input)?;
    require_dir(save_dir)?;

    let mut doc = Document::load(input)?;
    debug!("Rotating {} pages of {} by {}", doc.get_pages().len(), input.display(), degrees);

    rotate_document(&mut doc, degrees)?;

    let output = output_path(input, save_dir, "", "pdf");
    doc.save(&output)?;

    info!("Wrote {}", output.display());
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{build_pdf, page_labels, write_pdf};
    use tempfile::TempDir;

    fn rotations(doc: &Document) -> Vec<i64> {
        page_ids(doc)
            .into_iter()
            .map(|id| effective_rotation(doc, id))
            .collect()
    }

    #[test]
    fn test_rotate_document_by_90() {
        let mut doc = build_pdf(&["A1", "A2", "A3"]);
        rotate_document(&mut doc, 90).unwrap();

        assert_eq!(rotations(&doc), vec![90, 90, 90]);
        assert_eq!(page_labels(&doc), vec!["A1", "A2", "A3"]);
    }

    #[test]
    fn test_rotate_document_wraps_around() {
        let mut doc = build_pdf(&["A1", "A2"]);
        let first = page_ids(&doc)[0];
        doc.get_dictionary_mut(first).unwrap().set("Rotate", Object::Integer(270));

        rotate_document(&mut doc, 180).unwrap();
        assert_eq!(rotations(&doc), vec![90, 180]);
    }

    #[test]
    fn test_rotate_document_indirect_rotate() {
        let mut doc = build_pdf(&["A1"]);
        let page_id = page_ids(&doc)[0];
        let rotate_id = doc.add_object(Object::Integer(90));
        doc.get_dictionary_mut(page_id).unwrap().set("Rotate", Object::Reference(rotate_id));

        rotate_document(&mut doc, 90).unwrap();

        let rotate = doc.get_dictionary(page_id).unwrap().get(b"Rotate").unwrap();
        assert_eq!(rotate.as_i64().unwrap(), 180);
    }

    #[test]
    fn test_rotate_document_negative() {
        let mut doc = build_pdf(&["A1"]);
        rotate_document(&mut doc, -90).unwrap();
        assert_eq!(rotations(&doc), vec![270]);
    }

    #[test]
    fn test_rotate_document_rejects_odd_angle() {
        let mut doc = build_pdf(&["A1"]);
        let result = rotate_document(&mut doc, 45);
        assert!(matches!(result.unwrap_err(), Error::InvalidRotation(45)));
    }

    #[test]
    fn test_rotate_pdf_writes_stem_named_output() {
        let input_dir = TempDir::new().expect("Failed to create temp directory");
        let save_dir = TempDir::new().expect("Failed to create temp directory");
        let input = write_pdf(input_dir.path(), "scan.pdf", &["A1", "A2"]);

        let output = rotate_pdf(&input, save_dir.path(), 90).unwrap();
        assert_eq!(output, save_dir.path().join("scan.pdf"));

        let doc = Document::load(&output).unwrap();
        assert_eq!(rotations(&doc), vec![90, 90]);
    }

    #[test]
    fn test_rotate_pdf_missing_input() {
        let save_dir = TempDir::new().expect("Failed to create temp directory");
        let result = rotate_pdf(Path::new("nonexistent.pdf"), save_dir.path(), 90);
        assert!(matches!(result.unwrap_err(), Error::FileNotFound(_)));
    }
}
