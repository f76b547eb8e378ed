//! In-memory PDF fixtures for unit tests

use std::path::{Path, PathBuf};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

/// Build a PDF with one page per label
///
/// Each page draws its label as text and carries it under a `/Label` key so
/// tests can identify pages after they have been moved around. Resources and
/// MediaBox live on the Pages node, so pages depend on inheritance; the
/// integration fixtures in `tests/common` put them on each page instead.
pub fn build_pdf(labels: &[&str]) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for label in labels {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![72.into(), 700.into()]),
                Operation::new("Tj", vec![Object::string_literal(*label)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode page content"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Label" => Object::string_literal(*label),
        });
        kids.push(page_id.into());
    }

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => labels.len() as i64,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    doc
}

/// Build a PDF and save it under `dir`
pub fn write_pdf(dir: &Path, name: &str, labels: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut doc = build_pdf(labels);
    doc.save(&path).expect("save fixture PDF");
    path
}

/// The `/Label` of every page, in document order
pub fn page_labels(doc: &Document) -> Vec<String> {
    doc.get_pages()
        .into_values()
        .map(|page_id| {
            let page = doc.get_dictionary(page_id).expect("page dictionary");
            let label = page.get(b"Label").and_then(Object::as_str).expect("page label");
            String::from_utf8_lossy(label).into_owned()
        })
        .collect()
}
