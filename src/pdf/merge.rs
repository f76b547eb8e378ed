//! PDF merging functionality using lopdf

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use log::{debug, info};
use lopdf::{Document, Object, ObjectId, Dictionary};
use crate::error::{Error, Result};
use crate::paths::require_dir;
use crate::pdf::pages::{materialize_inherited, page_ids};

/// File name of the combined document, written inside the source folder
pub const COMBINED_FILE_NAME: &str = "output.pdf";

/// Options for merging PDFs
#[derive(Debug, Clone)]
pub struct MergeOptions {
    /// Input PDF file paths in the order they should be merged
    pub input_paths: Vec<PathBuf>,
    /// Output PDF file path
    pub output_path: PathBuf,
}

/// List the PDF files directly inside `folder`
///
/// Entries come back in directory listing order, unsorted. Only regular
/// files whose name ends in `.pdf` are kept.
pub fn list_pdfs(folder: &Path) -> Result<Vec<PathBuf>> {
    let mut pdfs = Vec::new();

    for entry in fs::read_dir(folder)? {
        let entry = entry?;
        let is_pdf = entry.file_name().to_string_lossy().ends_with(".pdf");

        if is_pdf && entry.file_type()?.is_file() {
            pdfs.push(entry.path());
        }
    }

    Ok(pdfs)
}

/// Combine every PDF in `folder` into `<folder>/output.pdf`
///
/// # Example
///
/// ```no_run
/// use pdftools::pdf::combine_folder;
/// use std::path::Path;
///
/// let output = combine_folder(Path::new("handouts")).expect("Failed to combine");
/// println!("{}", output.display());
/// ```
pub fn combine_folder(folder: &Path) -> Result<PathBuf> {
    require_dir(folder)?;

    let input_paths = list_pdfs(folder)?;
    if input_paths.is_empty() {
        return Err(Error::NoPdfFiles(folder.to_path_buf()));
    }

    debug!("Combining {} PDF files from {}", input_paths.len(), folder.display());

    let options = MergeOptions {
        input_paths,
        output_path: folder.join(COMBINED_FILE_NAME),
    };
    merge_pdfs(&options)?;

    Ok(options.output_path)
}

/// Merge multiple PDF files into a single PDF
///
/// Based on the lopdf merge example:
/// https://github.com/J-F-Liu/lopdf/blob/main/examples/merge.rs
pub fn merge_pdfs(options: &MergeOptions) -> Result<()> {
    if options.input_paths.is_empty() {
        return Err(Error::General("No input files provided".to_string()));
    }

    // Validate all input files exist
    for path in &options.input_paths {
        if !path.exists() {
            return Err(Error::FileNotFound(path.clone()));
        }
    }

    // Load all documents
    let mut documents: Vec<Document> = Vec::new();
    for path in &options.input_paths {
        debug!("Loading {}", path.display());
        let doc = Document::load(path)?;

        // Validate document has pages
        if doc.get_pages().is_empty() {
            return Err(Error::EmptyPdf(path.clone()));
        }

        documents.push(doc);
    }

    let mut merged_doc = merge_documents(documents)?;

    merged_doc.compress();
    merged_doc.save(&options.output_path)?;

    info!("Wrote {}", options.output_path.display());
    Ok(())
}

/// Append the pages of each document, in order, into a new document
pub fn merge_documents(documents: Vec<Document>) -> Result<Document> {
    let mut max_id = 1;
    let mut page_ids_in_order: Vec<ObjectId> = Vec::new();
    let mut objects: BTreeMap<ObjectId, Object> = BTreeMap::new();

    for mut doc in documents {
        // Pages are re-parented below, so pull down anything they inherit
        let pages = page_ids(&doc);
        for &page_id in &pages {
            materialize_inherited(&mut doc, page_id)?;
        }

        // Renumber objects in this document to avoid conflicts
        doc.renumber_objects_with(max_id);
        max_id = doc.max_id + 1;

        page_ids_in_order.extend(page_ids(&doc));
        objects.extend(doc.objects);
    }

    let mut merged_doc = Document::with_version("1.5");

    // Add all collected objects FIRST
    merged_doc.objects.extend(objects);

    // new_object_id() must hand out ids above everything just inserted
    merged_doc.max_id = max_id - 1;

    let pages_id = merged_doc.new_object_id();

    let kids: Vec<Object> = page_ids_in_order
        .iter()
        .map(|&id| Object::Reference(id))
        .collect();

    let mut pages_object = Dictionary::new();
    pages_object.set("Type", Object::Name(b"Pages".to_vec()));
    pages_object.set("Count", Object::Integer(page_ids_in_order.len() as i64));
    pages_object.set("Kids", Object::Array(kids));

    let catalog_id = merged_doc.new_object_id();
    let mut catalog = Dictionary::new();
    catalog.set("Type", Object::Name(b"Catalog".to_vec()));
    catalog.set("Pages", Object::Reference(pages_id));

    merged_doc.objects.insert(catalog_id, Object::Dictionary(catalog));
    merged_doc.objects.insert(pages_id, Object::Dictionary(pages_object));
    merged_doc.trailer.set("Root", Object::Reference(catalog_id));

    for &page_id in &page_ids_in_order {
        merged_doc.get_dictionary_mut(page_id)?.set("Parent", Object::Reference(pages_id));
    }

    // Old catalogs and page tree nodes are unreachable now
    merged_doc.prune_objects();

    Ok(merged_doc)
}
