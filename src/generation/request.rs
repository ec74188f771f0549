//! Validated generation requests

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Longest accepted prompt, in characters
pub const MAX_PROMPT_LENGTH: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatio {
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "16:9")]
    Widescreen,
    #[serde(rename = "4:3")]
    Landscape,
    #[serde(rename = "3:4")]
    Portrait,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Standard,
    High,
    Ultra,
}

/// A prompt that passed boundary validation.
///
/// Fields are private so every instance has a trimmed prompt of
/// 1..=MAX_PROMPT_LENGTH characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    prompt: String,
    style: Option<String>,
    aspect_ratio: Option<AspectRatio>,
    quality: Option<Quality>,
}

impl GenerationRequest {
    pub fn new(prompt: &str) -> Result<Self> {
        let prompt = prompt.trim();

        if prompt.is_empty() {
            return Err(AppError::InvalidRequest("Prompt is required".to_string()));
        }

        if prompt.chars().count() > MAX_PROMPT_LENGTH {
            return Err(AppError::InvalidRequest(format!(
                "Prompt is too long (max {} characters)",
                MAX_PROMPT_LENGTH
            )));
        }

        Ok(Self {
            prompt: prompt.to_string(),
            style: None,
            aspect_ratio: None,
            quality: None,
        })
    }

    /// Any style id is accepted; unknown ones are ignored during enhancement
    pub fn with_style(mut self, style: Option<String>) -> Self {
        self.style = style;
        self
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: Option<AspectRatio>) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    pub fn with_quality(mut self, quality: Option<Quality>) -> Self {
        self.quality = quality;
        self
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn style(&self) -> Option<&str> {
        self.style.as_deref()
    }

    pub fn aspect_ratio(&self) -> Option<AspectRatio> {
        self.aspect_ratio
    }

    pub fn quality(&self) -> Option<Quality> {
        self.quality
    }
}
