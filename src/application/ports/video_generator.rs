use async_trait::async_trait;

use crate::domain::{TalkId, VideoJob};

/// What the remote service needs to render one talking-avatar video.
#[derive(Debug, Clone, PartialEq)]
pub struct TalkRequest {
    pub script: String,
    pub source_url: String,
}

#[async_trait]
pub trait VideoGenerator: Send + Sync {
    async fn submit(&self, talk: &TalkRequest) -> Result<TalkId, VideoGeneratorError>;

    async fn status(&self, id: &TalkId) -> Result<VideoJob, VideoGeneratorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum VideoGeneratorError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("api returned {status}: {body}")]
    ApiStatus { status: u16, body: String },
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
