use base64::{Engine as _, engine::general_purpose};

use super::ImageFormat;

/// Text and embedded images pulled from one uploaded document.
///
/// The two halves are extracted independently from the same bytes; images
/// keep archive enumeration order.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedContent {
    pub text: String,
    pub images: Vec<ExtractedImage>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedImage {
    pub name: String,
    pub format: ImageFormat,
    pub data: Vec<u8>,
}

impl ExtractedImage {
    pub fn new(name: String, format: ImageFormat, data: Vec<u8>) -> Self {
        Self { name, format, data }
    }

    pub fn to_data_uri(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.format.mime(),
            general_purpose::STANDARD.encode(&self.data)
        )
    }
}
