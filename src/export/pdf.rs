//! Single-page PDF writer
//!
//! Renders each line of the declaration with the built-in Helvetica font and
//! saves the result under a fixed file name in the output directory.

use super::traits::DocumentWriter;
use crate::error::{ProfileError, Result};
use crate::profile::ComposedDocument;
use printpdf::{BuiltinFont, Mm, PdfDocument};
use std::fs;
use std::path::PathBuf;

/// File name offered to the user
pub const DEFAULT_FILE_NAME: &str = "perfil_dados.pdf";

/// A4 portrait
const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;

const FONT_SIZE_PT: f32 = 12.0;
const LINE_HEIGHT_MM: f32 = 7.0;

/// Where the first line starts, measured from the top-left corner of the page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextOrigin {
    pub x_mm: f32,
    pub y_mm: f32,
}

impl Default for TextOrigin {
    fn default() -> Self {
        Self {
            x_mm: 10.0,
            y_mm: 10.0,
        }
    }
}

/// Writes declarations as PDF files
#[derive(Debug, Clone)]
pub struct PdfWriter {
    output_dir: PathBuf,
    file_name: String,
    origin: TextOrigin,
}

impl PdfWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            file_name: DEFAULT_FILE_NAME.to_string(),
            origin: TextOrigin::default(),
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn with_origin(mut self, origin: TextOrigin) -> Self {
        self.origin = origin;
        self
    }

    /// Full path of the file this writer produces
    pub fn target_path(&self) -> PathBuf {
        self.output_dir.join(&self.file_name)
    }

    /// Render the document into PDF bytes
    pub fn render(&self, document: &ComposedDocument) -> Result<Vec<u8>> {
        let (doc, page, layer) = PdfDocument::new(
            document.title(),
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            "Layer 1",
        );
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ProfileError::Pdf(e.to_string()))?;
        let layer = doc.get_page(page).get_layer(layer);

        // printpdf measures y from the bottom edge
        let mut y = PAGE_HEIGHT_MM - self.origin.y_mm;
        for line in document.lines() {
            layer.use_text(line, FONT_SIZE_PT, Mm(self.origin.x_mm), Mm(y), &font);
            y -= LINE_HEIGHT_MM;
        }

        doc.save_to_bytes()
            .map_err(|e| ProfileError::Pdf(e.to_string()))
    }
}

impl DocumentWriter for PdfWriter {
    fn write(&self, document: &ComposedDocument) -> Result<PathBuf> {
        let bytes = self.render(document)?;
        fs::create_dir_all(&self.output_dir)?;
        let path = self.target_path();
        fs::write(&path, bytes)?;
        tracing::info!("Declaration written to {}", path.display());
        Ok(path)
    }
}
