mod generation_service;

pub use generation_service::{GenerationError, GenerationOutcome, GenerationService};
