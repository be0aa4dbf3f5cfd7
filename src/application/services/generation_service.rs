use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{
    DocumentExtractor, ExtractorError, ImagePublisher, TalkRequest, VideoGenerator,
    VideoGeneratorError,
};
use crate::domain::{
    ContentType, ExtractedImage, PublishedImage, TalkId, TalkStatus, UploadedDocument,
};

/// Runs the whole upload-to-video pipeline for one request:
/// extract, publish images, submit the talk, poll to a terminal state.
pub struct GenerationService<E, P, G>
where
    E: DocumentExtractor,
    P: ImagePublisher,
    G: VideoGenerator,
{
    extractor: Arc<E>,
    publisher: Arc<P>,
    generator: Arc<G>,
    poll_interval: Duration,
    max_poll_attempts: u32,
}

#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub talk_id: TalkId,
    pub result_url: String,
    pub images_extracted: usize,
    pub images_published: usize,
}

impl<E, P, G> GenerationService<E, P, G>
where
    E: DocumentExtractor,
    P: ImagePublisher,
    G: VideoGenerator,
{
    pub fn new(
        extractor: Arc<E>,
        publisher: Arc<P>,
        generator: Arc<G>,
        poll_interval: Duration,
        max_poll_attempts: u32,
    ) -> Self {
        Self {
            extractor,
            publisher,
            generator,
            poll_interval,
            max_poll_attempts,
        }
    }

    pub async fn generate(
        &self,
        data: &[u8],
        filename: String,
        content_type: ContentType,
    ) -> Result<GenerationOutcome, GenerationError> {
        let document = UploadedDocument::new(filename, content_type, data.len() as u64);

        let content = self.extractor.extract(data, &document).await?;

        tracing::debug!(
            document_id = %document.id.as_uuid(),
            chars = content.text.len(),
            images = content.images.len(),
            "Document content extracted"
        );

        if content.images.is_empty() {
            return Err(GenerationError::NoImagesFound {
                filename: document.filename,
            });
        }

        let images_extracted = content.images.len();
        let published = self.publish_all(&content.images).await;

        let Some(first) = published.first() else {
            return Err(GenerationError::NoImagesPublished {
                attempted: images_extracted,
            });
        };

        let talk = TalkRequest {
            script: content.text,
            source_url: first.url.clone(),
        };
        let talk_id = self
            .generator
            .submit(&talk)
            .await
            .map_err(GenerationError::Submission)?;

        tracing::info!(
            talk_id = %talk_id,
            source_image = %first.name,
            "Video generation job submitted"
        );

        let result_url = self.poll_until_done(&talk_id).await?;

        Ok(GenerationOutcome {
            talk_id,
            result_url,
            images_extracted,
            images_published: published.len(),
        })
    }

    /// Uploads images one at a time, in extraction order. A failed upload is
    /// logged and dropped; the pipeline only aborts if nothing survives.
    async fn publish_all(&self, images: &[ExtractedImage]) -> Vec<PublishedImage> {
        let mut published = Vec::with_capacity(images.len());
        for image in images {
            match self.publisher.publish(image).await {
                Ok(p) => {
                    tracing::debug!(image = %p.name, url = %p.url, "Image published");
                    published.push(p);
                }
                Err(e) => {
                    tracing::warn!(image = %image.name, error = %e, "Image upload failed, skipping");
                }
            }
        }
        published
    }

    async fn poll_until_done(&self, id: &TalkId) -> Result<String, GenerationError> {
        for attempt in 1..=self.max_poll_attempts {
            let job = self
                .generator
                .status(id)
                .await
                .map_err(GenerationError::Polling)?;

            match job.status {
                TalkStatus::Done => {
                    return job.result_url.ok_or_else(|| {
                        GenerationError::Polling(VideoGeneratorError::InvalidResponse(
                            "job reported done without a result_url".to_string(),
                        ))
                    });
                }
                TalkStatus::Failed => {
                    return Err(GenerationError::JobFailed {
                        id: id.clone(),
                        message: job
                            .error_message
                            .unwrap_or_else(|| "no error detail reported".to_string()),
                    });
                }
                TalkStatus::Pending => {
                    tracing::debug!(talk_id = %id, attempt, "Job still rendering");
                    if attempt < self.max_poll_attempts {
                        tokio::time::sleep(self.poll_interval).await;
                    }
                }
            }
        }

        Err(GenerationError::PollTimedOut {
            attempts: self.max_poll_attempts,
            waited: self.poll_interval * self.max_poll_attempts,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("extraction: {0}")]
    Extraction(#[from] ExtractorError),
    #[error("document {filename} contains no embedded images")]
    NoImagesFound { filename: String },
    #[error("none of the {attempted} extracted images could be published")]
    NoImagesPublished { attempted: usize },
    #[error("job submission: {0}")]
    Submission(#[source] VideoGeneratorError),
    #[error("status poll: {0}")]
    Polling(#[source] VideoGeneratorError),
    #[error("job {id} failed remotely: {message}")]
    JobFailed { id: TalkId, message: String },
    #[error("job still rendering after {attempts} status polls")]
    PollTimedOut { attempts: u32, waited: Duration },
}
