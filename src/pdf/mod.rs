//! PDF manipulation module

pub mod merge;
pub mod pages;
pub mod replace;
pub mod rotate;

// Re-export commonly used items
pub use merge::{combine_folder, merge_pdfs, MergeOptions, COMBINED_FILE_NAME};
pub use pages::page_count;
pub use replace::{replace_page_pdf, Replacement};
pub use rotate::rotate_pdf;
