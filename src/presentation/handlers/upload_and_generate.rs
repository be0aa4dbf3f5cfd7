use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::{DocumentExtractor, ImagePublisher, VideoGenerator};
use crate::application::services::GenerationError;
use crate::domain::ContentType;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct GenerateResponse {
    pub result_url: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

#[tracing::instrument(skip(state, multipart))]
pub async fn upload_and_generate_handler<E, P, G>(
    State(state): State<AppState<E, P, G>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    E: DocumentExtractor + 'static,
    P: ImagePublisher + 'static,
    G: VideoGenerator + 'static,
{
    // Single file field named `file`; anything else in the form is ignored.
    let field = loop {
        match multipart.next_field().await {
            Ok(Some(f)) if f.name() == Some("file") => break f,
            Ok(Some(_)) => continue,
            Ok(None) => {
                tracing::warn!("Upload request with no file field");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::new("No file uploaded")),
                )
                    .into_response();
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::new(format!("Failed to read multipart: {}", e))),
                )
                    .into_response();
            }
        }
    };

    let filename = field.file_name().unwrap_or("unknown").to_string();

    let Some(content_type) = ContentType::from_filename(&filename) else {
        tracing::warn!(filename = %filename, "Rejected upload with unsupported extension");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(
                "Unsupported file format. Please upload a .docx file.",
            )),
        )
            .into_response();
    };

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read file bytes");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(format!("Failed to read file: {}", e))),
            )
                .into_response();
        }
    };

    tracing::debug!(filename = %filename, bytes = data.len(), "Processing document upload");

    match state
        .generation_service
        .generate(&data, filename, content_type)
        .await
    {
        Ok(outcome) => {
            tracing::info!(
                talk_id = %outcome.talk_id,
                images_extracted = outcome.images_extracted,
                images_published = outcome.images_published,
                "Video generation completed"
            );
            (
                StatusCode::OK,
                Json(GenerateResponse {
                    result_url: outcome.result_url,
                }),
            )
                .into_response()
        }
        Err(e) => generation_error_response(e),
    }
}

fn generation_error_response(error: GenerationError) -> Response {
    let (status, body) = match &error {
        // The document parsed fine but yields nothing an avatar can be
        // rendered from; report it as an unusable entity, not a server fault.
        GenerationError::NoImagesFound { .. } | GenerationError::NoImagesPublished { .. } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            ErrorResponse::new(error.to_string()),
        ),
        GenerationError::PollTimedOut { .. } => (
            StatusCode::GATEWAY_TIMEOUT,
            ErrorResponse::with_details(
                "Video generation did not finish in time",
                error.to_string(),
            ),
        ),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorResponse::with_details(
                "Error processing file or generating video",
                error.to_string(),
            ),
        ),
    };

    tracing::error!(error = %error, status = %status, "Upload-and-generate request failed");

    (status, Json(body)).into_response()
}
