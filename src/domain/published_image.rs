use super::ImageFormat;

/// An extracted image that the remote store accepted, with its assigned URL.
///
/// Invariant: one of these exists only for an upload that succeeded.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishedImage {
    pub name: String,
    pub format: ImageFormat,
    pub url: String,
}

impl PublishedImage {
    pub fn new(name: String, format: ImageFormat, url: String) -> Self {
        Self { name, format, url }
    }
}
