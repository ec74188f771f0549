//! Generation module - Request validation, the result envelope, and the pipeline

pub mod request;
pub mod response;
pub mod service;

pub use request::{AspectRatio, GenerationRequest, Quality, MAX_PROMPT_LENGTH};
pub use response::GenerationResponse;
pub use service::GenerationService;
