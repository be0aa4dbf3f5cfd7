use std::io::{Cursor, Read};

use async_trait::async_trait;
use zip::ZipArchive;

use crate::application::ports::{DocumentExtractor, ExtractorError};
use crate::domain::{ExtractedContent, ExtractedImage, ImageFormat, UploadedDocument};

use super::wordml;

const DOCUMENT_PART: &str = "word/document.xml";
const MEDIA_PREFIX: &str = "word/media/";

/// Extracts plain text and embedded raster images from a `.docx` container.
///
/// A docx is a zip archive: the main text lives in `word/document.xml`,
/// embedded media under `word/media/`. Text and images are read
/// independently; images keep the archive's enumeration order.
#[derive(Default)]
pub struct DocxAdapter;

impl DocxAdapter {
    pub fn new() -> Self {
        Self
    }

    fn extract_parts(data: &[u8]) -> Result<ExtractedContent, ExtractorError> {
        let mut archive = ZipArchive::new(Cursor::new(data)).map_err(|e| {
            ExtractorError::MalformedDocument(format!("not a readable archive: {e}"))
        })?;

        let text = {
            let mut part = archive.by_name(DOCUMENT_PART).map_err(|e| {
                ExtractorError::MalformedDocument(format!("missing {DOCUMENT_PART}: {e}"))
            })?;
            let mut xml = String::new();
            part.read_to_string(&mut xml).map_err(|e| {
                ExtractorError::MalformedDocument(format!("unreadable {DOCUMENT_PART}: {e}"))
            })?;
            wordml::collect_text(&xml)
        };

        let mut images = Vec::new();
        for index in 0..archive.len() {
            let mut entry = archive.by_index(index).map_err(|e| {
                ExtractorError::MalformedDocument(format!("unreadable entry #{index}: {e}"))
            })?;
            if !entry.name().starts_with(MEDIA_PREFIX) {
                continue;
            }

            let entry_name = entry.name().to_string();
            let mut bytes = Vec::with_capacity(entry.size() as usize);
            entry.read_to_end(&mut bytes).map_err(|e| {
                ExtractorError::MalformedDocument(format!("unreadable entry {entry_name}: {e}"))
            })?;

            let basename = entry_name
                .rsplit('/')
                .next()
                .unwrap_or(entry_name.as_str())
                .to_string();

            match ImageFormat::from_magic_bytes(&bytes) {
                Some(format) => images.push(ExtractedImage::new(basename, format, bytes)),
                None => {
                    tracing::warn!(
                        entry = %entry_name,
                        "Skipping media entry with unrecognized image format"
                    );
                }
            }
        }

        Ok(ExtractedContent {
            text: text.trim_end().to_string(),
            images,
        })
    }
}

#[async_trait]
impl DocumentExtractor for DocxAdapter {
    #[tracing::instrument(
        skip(self, data),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
        )
    )]
    async fn extract(
        &self,
        data: &[u8],
        document: &UploadedDocument,
    ) -> Result<ExtractedContent, ExtractorError> {
        let content = Self::extract_parts(data)?;

        tracing::debug!(
            chars = content.text.len(),
            images = content.images.len(),
            "Docx extraction finished"
        );

        Ok(content)
    }
}
