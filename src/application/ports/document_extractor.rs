use async_trait::async_trait;

use crate::domain::{ExtractedContent, UploadedDocument};

#[async_trait]
pub trait DocumentExtractor: Send + Sync {
    async fn extract(
        &self,
        data: &[u8],
        document: &UploadedDocument,
    ) -> Result<ExtractedContent, ExtractorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractorError {
    #[error("malformed document: {0}")]
    MalformedDocument(String),
}
