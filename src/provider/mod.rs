//! Provider module - Outbound calls to the image generation model

pub mod chat_completions;
pub mod traits;

pub use chat_completions::ChatCompletionsProvider;
pub use traits::ImageProvider;
