mod health;
mod upload_and_generate;

pub use health::health_handler;
pub use upload_and_generate::{ErrorResponse, GenerateResponse, upload_and_generate_handler};
