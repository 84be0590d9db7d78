//! Trait abstraction for the document writer to enable mocking in tests

use crate::error::Result;
use crate::profile::ComposedDocument;
use std::path::PathBuf;

/// Serializes a composed declaration into a document artifact
#[cfg_attr(test, mockall::automock)]
pub trait DocumentWriter: Send {
    /// Write the document and return where it was saved
    fn write(&self, document: &ComposedDocument) -> Result<PathBuf>;
}
