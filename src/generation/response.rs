//! Uniform result envelope

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Result of one generation, successful or not
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Elapsed milliseconds
    pub generation_time: u64,
}

impl GenerationResponse {
    pub fn success(image_url: String, generation_time: u64) -> Self {
        Self {
            success: true,
            image_url: Some(image_url),
            error: None,
            generation_time,
        }
    }

    pub fn failure(error: &AppError, generation_time: u64) -> Self {
        Self {
            success: false,
            image_url: None,
            error: Some(error.envelope_message()),
            generation_time,
        }
    }
}
