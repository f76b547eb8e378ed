//! Page tree helpers shared by the page-level operations

use lopdf::{Document, Object, ObjectId};
use crate::error::Result;

/// Page attributes a page may inherit from its ancestors in the page tree
pub const INHERITABLE_KEYS: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Upper bound on page tree depth when walking Parent links (cycles in broken files)
const MAX_TREE_DEPTH: usize = 64;

/// Look up an attribute on a page, walking up through Parent nodes until found
pub fn inherited_attribute(doc: &Document, page_id: ObjectId, key: &[u8]) -> Option<Object> {
    let mut node_id = page_id;

    for _ in 0..MAX_TREE_DEPTH {
        let node = doc.get_dictionary(node_id).ok()?;

        if let Ok(value) = node.get(key) {
            return Some(value.clone());
        }

        node_id = node.get(b"Parent").and_then(Object::as_reference).ok()?;
    }

    None
}

/// Copy inherited attributes onto the page dictionary itself
///
/// Needed before a page is moved under a different parent, otherwise it
/// would silently pick up the new parent's Resources or MediaBox.
pub fn materialize_inherited(doc: &mut Document, page_id: ObjectId) -> Result<()> {
    for key in INHERITABLE_KEYS {
        if doc.get_dictionary(page_id)?.has(key) {
            continue;
        }

        if let Some(value) = inherited_attribute(doc, page_id, key) {
            doc.get_dictionary_mut(page_id)?.set(key.to_vec(), value);
        }
    }

    Ok(())
}

/// The rotation a viewer applies to the page, in degrees (0 when unset)
///
/// `/Rotate` may be an indirect object; it is resolved before reading.
pub fn effective_rotation(doc: &Document, page_id: ObjectId) -> i64 {
    inherited_attribute(doc, page_id, b"Rotate")
        .and_then(|rotate| match rotate {
            Object::Reference(id) => doc.get_object(id).ok().cloned(),
            direct => Some(direct),
        })
        .and_then(|rotate| rotate.as_i64().ok())
        .unwrap_or(0)
}

/// Number of pages reachable through the page tree
pub fn page_count(doc: &Document) -> usize {
    doc.get_pages().len()
}

/// Page object ids in document order
pub fn page_ids(doc: &Document) -> Vec<ObjectId> {
    doc.get_pages().into_values().collect()
}
