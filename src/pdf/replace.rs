//! Single page replacement

use std::path::{Path, PathBuf};
use log::{debug, info};
use lopdf::{Document, Object, ObjectId};
use crate::error::{Error, Result};
use crate::paths::{output_path, require_dir, require_file};
use crate::pdf::pages::{materialize_inherited, page_count, page_ids};

/// Result of a page replacement request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Replacement {
    /// The new document was written here
    Written(PathBuf),
    /// The page number was outside `1..=page_count`; nothing was written
    OutOfRange { page_number: i64, page_count: usize },
}

/// Replace page `page_number` (1-based) of `doc` with the first page of `replacement`
///
/// The page count and the order of all other pages are unchanged. The new
/// page takes the old page's slot in its parent's `Kids`, so nested page
/// trees keep their shape.
pub fn replace_page(doc: &mut Document, mut replacement: Document, page_number: u32) -> Result<()> {
    let old_page_id = *doc
        .get_pages()
        .get(&page_number)
        .ok_or_else(|| Error::General(format!("Page {} not found", page_number)))?;

    let first_page_id = *page_ids(&replacement)
        .first()
        .ok_or_else(|| Error::General("Replacement PDF has no pages".to_string()))?;

    // Resolve inheritance while the page still sits in its own tree
    materialize_inherited(&mut replacement, first_page_id)?;
    pin_defaults(&mut replacement, first_page_id)?;

    replacement.renumber_objects_with(doc.max_id + 1);
    let new_page_id = page_ids(&replacement)[0];

    doc.max_id = doc.max_id.max(replacement.max_id);
    doc.objects.extend(replacement.objects);

    let parent_id = doc
        .get_dictionary(old_page_id)?
        .get(b"Parent")
        .and_then(Object::as_reference)?;

    let kids = doc
        .get_dictionary_mut(parent_id)?
        .get_mut(b"Kids")
        .and_then(Object::as_array_mut)?;
    for kid in kids.iter_mut() {
        if kid.as_reference().ok() == Some(old_page_id) {
            *kid = Object::Reference(new_page_id);
        }
    }

    doc.get_dictionary_mut(new_page_id)?.set("Parent", Object::Reference(parent_id));

    // Drops the old page and the rest of the replacement document
    let pruned = doc.prune_objects();
    debug!("Pruned {} unreferenced objects", pruned.len());

    Ok(())
}

/// Make absent attributes explicit so the page doesn't inherit from its new parent
fn pin_defaults(doc: &mut Document, page_id: ObjectId) -> Result<()> {
    let page = doc.get_dictionary_mut(page_id)?;

    if !page.has(b"Rotate") {
        page.set("Rotate", Object::Integer(0));
    }
    if !page.has(b"CropBox") {
        if let Ok(media_box) = page.get(b"MediaBox").cloned() {
            page.set("CropBox", media_box);
        }
    }

    Ok(())
}

/// Replace one page of `input` and write `<save_dir>/<input_stem>_new.pdf`
///
/// # Example
///
/// ```no_run
/// use pdftools::pdf::{replace_page_pdf, Replacement};
/// use std::path::Path;
///
/// match replace_page_pdf(Path::new("contract.pdf"), Path::new("signed.pdf"), Path::new("out"), 3) {
///     Ok(Replacement::Written(path)) => println!("{}", path.display()),
///     Ok(Replacement::OutOfRange { page_count, .. }) => println!("only {} pages", page_count),
///     Err(e) => eprintln!("{}", e),
/// }
/// ```
pub fn replace_page_pdf(
    input: &Path,
    replacement: &Path,
    save_dir: &Path,
    page_number: i64,
) -> Result<Replacement> {
    require_file(input)?;
    require_file(replacement)?;
    require_dir(save_dir)?;

    let mut doc = Document::load(input)?;
    let page_count = page_count(&doc);

    let page = match u32::try_from(page_number) {
        Ok(page) if page >= 1 && page as usize <= page_count => page,
        _ => return Ok(Replacement::OutOfRange { page_number, page_count }),
    };

    let replacement_doc = Document::load(replacement)?;
    if replacement_doc.get_pages().is_empty() {
        return Err(Error::EmptyPdf(replacement.to_path_buf()));
    }

    debug!("Replacing page {} of {} with {}", page, input.display(), replacement.display());
    replace_page(&mut doc, replacement_doc, page)?;

    let output = output_path(input, save_dir, "_new", "pdf");
    doc.save(&output)?;

    info!("Wrote {}", output.display());
    Ok(Replacement::Written(output))
}
