use async_trait::async_trait;

use crate::domain::{ExtractedImage, PublishedImage};

#[async_trait]
pub trait ImagePublisher: Send + Sync {
    async fn publish(&self, image: &ExtractedImage) -> Result<PublishedImage, PublishError>;
}

#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("api returned {status}: {body}")]
    ApiStatus { status: u16, body: String },
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
