//! Art Generation Gateway
//!
//! Accepts text prompts, enriches them with style and quality clauses,
//! forwards them to a hosted image generation model and normalizes the
//! reply into a uniform result envelope.

pub mod api;
pub mod config;
pub mod error;
pub mod generation;
pub mod prompt;
pub mod provider;
pub mod response;

pub use error::{AppError, Result};

use generation::GenerationService;

/// Application state shared across all handlers
pub struct AppState {
    pub settings: config::Settings,
    pub generation: GenerationService,
}

impl AppState {
    /// Build the state, wiring the provider from `settings`
    pub fn from_settings(settings: config::Settings) -> Result<Self> {
        let generation = GenerationService::from_config(&settings.provider)?;
        Ok(Self {
            settings,
            generation,
        })
    }
}
