//! Document export: the writer seam and its PDF implementation

mod pdf;
mod traits;

pub use pdf::{PdfWriter, TextOrigin, DEFAULT_FILE_NAME};
pub use traits::DocumentWriter;

#[cfg(test)]
pub use traits::MockDocumentWriter;
