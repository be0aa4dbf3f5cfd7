mod document;
mod extracted;
mod image_format;
mod published_image;
mod video_job;

pub use document::{ContentType, DocumentId, UploadedDocument};
pub use extracted::{ExtractedContent, ExtractedImage};
pub use image_format::ImageFormat;
pub use published_image::PublishedImage;
pub use video_job::{TalkId, TalkStatus, VideoJob};
