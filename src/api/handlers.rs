//! Request handlers for the generation API

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn, Instrument};
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::generation::{AspectRatio, GenerationRequest, Quality, MAX_PROMPT_LENGTH};
use crate::prompt::{StylePreset, STYLE_PRESETS};
use crate::AppState;

/// JSON body accepted by `POST /api/generate`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateBody {
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub aspect_ratio: Option<AspectRatio>,
    #[serde(default)]
    pub quality: Option<Quality>,
}

impl TryFrom<GenerateBody> for GenerationRequest {
    type Error = AppError;

    fn try_from(body: GenerateBody) -> Result<Self> {
        Ok(GenerationRequest::new(&body.prompt)?
            .with_style(body.style)
            .with_aspect_ratio(body.aspect_ratio)
            .with_quality(body.quality))
    }
}

/// Discovery document served by `GET /api/generate`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateInfo {
    pub message: &'static str,
    pub endpoint: &'static str,
    pub method: &'static str,
    pub required_fields: Vec<&'static str>,
    pub optional_fields: Vec<&'static str>,
    pub max_prompt_length: usize,
}

/// POST /api/generate
pub async fn generate(
    State(state): State<Arc<AppState>>,
    body: std::result::Result<Json<GenerateBody>, JsonRejection>,
) -> Result<Response> {
    let Json(body) = body.map_err(|rejection| AppError::InvalidRequest(rejection.body_text()))?;
    let request = GenerationRequest::try_from(body)?;

    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("generate", %request_id);

    async move {
        info!(
            prompt = request.prompt(),
            style = request.style(),
            aspect_ratio = ?request.aspect_ratio(),
            quality = ?request.quality(),
            "Generating artwork"
        );

        let result = state.generation.generate(&request).await;

        if result.success {
            info!(
                image_url = result.image_url.as_deref(),
                generation_time = result.generation_time,
                "Generation successful"
            );
            Ok((StatusCode::OK, Json(result)).into_response())
        } else {
            warn!(error = result.error.as_deref(), "Generation failed");
            Ok((StatusCode::INTERNAL_SERVER_ERROR, Json(result)).into_response())
        }
    }
    .instrument(span)
    .await
}

/// GET /api/generate
pub async fn generate_info() -> Json<GenerateInfo> {
    Json(GenerateInfo {
        message: "AI Art Generation API",
        endpoint: "/api/generate",
        method: "POST",
        required_fields: vec!["prompt"],
        optional_fields: vec!["style", "aspectRatio", "quality"],
        max_prompt_length: MAX_PROMPT_LENGTH,
    })
}

/// GET /api/styles
pub async fn list_styles() -> Json<&'static [StylePreset]> {
    Json(&STYLE_PRESETS[..])
}

/// GET /health
pub async fn health() -> &'static str {
    "OK"
}
