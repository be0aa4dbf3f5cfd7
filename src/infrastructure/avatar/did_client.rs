use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, multipart};
use serde::Deserialize;

use crate::application::ports::{
    ImagePublisher, PublishError, TalkRequest, VideoGenerator, VideoGeneratorError,
};
use crate::domain::{ExtractedImage, PublishedImage, TalkId, TalkStatus, VideoJob};
use crate::presentation::config::AvatarSettings;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the hosted talking-avatar service.
///
/// Covers the two endpoints the pipeline needs: the image store
/// (`POST /images`) and the talk jobs (`POST /talks`, `GET /talks/{id}`).
/// The API credential goes out verbatim in the `Authorization` header.
pub struct DidClient {
    client: Client,
    settings: AvatarSettings,
}

impl DidClient {
    pub fn new(settings: AvatarSettings) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("reqwest client build never fails with valid TLS config");
        Self {
            client,
            settings: AvatarSettings {
                base_url: settings.base_url.trim_end_matches('/').to_string(),
                ..settings
            },
        }
    }
}

#[async_trait]
impl ImagePublisher for DidClient {
    #[tracing::instrument(skip(self, image), fields(image = %image.name))]
    async fn publish(&self, image: &ExtractedImage) -> Result<PublishedImage, PublishError> {
        let url = format!("{}/images", self.settings.base_url);

        let part = multipart::Part::bytes(image.data.clone())
            .file_name(image.name.clone())
            .mime_str(image.format.mime())
            .map_err(|e| PublishError::ApiRequestFailed(format!("mime: {e}")))?;
        let form = multipart::Form::new().part("image", part);

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, &self.settings.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| PublishError::ApiRequestFailed(format!("request: {e}")))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(PublishError::ApiStatus { status, body });
        }

        let uploaded: ImageUploadResponse = response
            .json()
            .await
            .map_err(|e| PublishError::InvalidResponse(format!("body: {e}")))?;

        tracing::debug!(url = %uploaded.url, "Avatar image stored");

        Ok(PublishedImage::new(
            image.name.clone(),
            image.format,
            uploaded.url,
        ))
    }
}

#[async_trait]
impl VideoGenerator for DidClient {
    #[tracing::instrument(skip(self, talk), fields(script_chars = talk.script.len()))]
    async fn submit(&self, talk: &TalkRequest) -> Result<TalkId, VideoGeneratorError> {
        let url = format!("{}/talks", self.settings.base_url);

        let body = serde_json::json!({
            "script": {
                "type": "text",
                "input": talk.script,
                "provider": {
                    "type": self.settings.voice_provider,
                    "voice_id": self.settings.voice_id,
                },
            },
            "source_url": talk.source_url,
            "config": { "stitch": self.settings.stitch },
        });

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, &self.settings.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| VideoGeneratorError::ApiRequestFailed(format!("request: {e}")))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(VideoGeneratorError::ApiStatus { status, body });
        }

        let created: CreateTalkResponse = response
            .json()
            .await
            .map_err(|e| VideoGeneratorError::InvalidResponse(format!("body: {e}")))?;

        Ok(TalkId::new(created.id))
    }

    #[tracing::instrument(skip(self, id), fields(talk_id = %id))]
    async fn status(&self, id: &TalkId) -> Result<VideoJob, VideoGeneratorError> {
        let url = format!("{}/talks/{}", self.settings.base_url, id);

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, &self.settings.api_key)
            .send()
            .await
            .map_err(|e| VideoGeneratorError::ApiRequestFailed(format!("request: {e}")))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(VideoGeneratorError::ApiStatus { status, body });
        }

        let remote: TalkStatusResponse = response
            .json()
            .await
            .map_err(|e| VideoGeneratorError::InvalidResponse(format!("body: {e}")))?;

        Ok(VideoJob {
            id: id.clone(),
            status: TalkStatus::from_remote(&remote.status),
            result_url: remote.result_url,
            error_message: remote.error.map(|e| e.description),
        })
    }
}

#[derive(Deserialize)]
struct ImageUploadResponse {
    url: String,
}

#[derive(Deserialize)]
struct CreateTalkResponse {
    id: String,
}

#[derive(Deserialize)]
struct TalkStatusResponse {
    status: String,
    result_url: Option<String>,
    error: Option<TalkError>,
}

#[derive(Deserialize)]
struct TalkError {
    description: String,
}
