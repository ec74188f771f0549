//! HTTP client for OpenAI-style chat-completions endpoints

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::config::ProviderConfig;
use crate::error::{AppError, Result};
use crate::provider::traits::{ChatCompletionRequest, ImageProvider};

const CUSTOMER_ID_HEADER: HeaderName = HeaderName::from_static("customerid");

/// Provider reached through a single chat-completions endpoint
pub struct ChatCompletionsProvider {
    client: Client,
    endpoint: String,
    model: String,
}

impl ChatCompletionsProvider {
    /// Create a new provider from configuration.
    ///
    /// No request timeout is set; the transport's own limits apply.
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let client = Client::builder()
            .default_headers(default_headers(config)?)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
        })
    }
}

fn default_headers(config: &ProviderConfig) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(
        AUTHORIZATION,
        header_value(&format!("Bearer {}", config.api_key))?,
    );
    if let Some(customer_id) = &config.customer_id {
        headers.insert(CUSTOMER_ID_HEADER, header_value(customer_id)?);
    }
    Ok(headers)
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| AppError::Internal(format!("Invalid provider header value: {}", e)))
}

#[async_trait]
impl ImageProvider for ChatCompletionsProvider {
    fn name(&self) -> &str {
        "chat-completions"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, enhanced_prompt: &str) -> Result<Value> {
        let request = ChatCompletionRequest::single_user_message(&self.model, enhanced_prompt);

        debug!(endpoint = %self.endpoint, model = %self.model, "Sending chat completion request");

        let response = self.client.post(&self.endpoint).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::ProviderStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response.bytes().await?;
        let payload = serde_json::from_slice(&body)?;
        Ok(payload)
    }
}
