mod document_extractor;
mod image_publisher;
mod video_generator;

pub use document_extractor::{DocumentExtractor, ExtractorError};
pub use image_publisher::{ImagePublisher, PublishError};
pub use video_generator::{TalkRequest, VideoGenerator, VideoGeneratorError};
