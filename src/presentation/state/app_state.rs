use std::sync::Arc;

use crate::application::ports::{DocumentExtractor, ImagePublisher, VideoGenerator};
use crate::application::services::GenerationService;
use crate::presentation::config::ServerSettings;

pub struct AppState<E, P, G>
where
    E: DocumentExtractor,
    P: ImagePublisher,
    G: VideoGenerator,
{
    pub generation_service: Arc<GenerationService<E, P, G>>,
    pub server: ServerSettings,
}

impl<E, P, G> Clone for AppState<E, P, G>
where
    E: DocumentExtractor,
    P: ImagePublisher,
    G: VideoGenerator,
{
    fn clone(&self) -> Self {
        Self {
            generation_service: Arc::clone(&self.generation_service),
            server: self.server.clone(),
        }
    }
}
