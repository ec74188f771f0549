//! The generation pipeline: enhance, call the provider, normalize

use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

use crate::config::ProviderConfig;
use crate::error::Result;
use crate::generation::{GenerationRequest, GenerationResponse};
use crate::prompt;
use crate::provider::{ChatCompletionsProvider, ImageProvider};
use crate::response::ResponseNormalizer;

/// Turns validated requests into result envelopes
pub struct GenerationService {
    provider: Arc<dyn ImageProvider>,
    normalizer: ResponseNormalizer,
}

impl GenerationService {
    /// Create a service talking to the configured chat-completions endpoint
    pub fn from_config(config: &ProviderConfig) -> Result<Self> {
        let provider = ChatCompletionsProvider::new(config)?;
        Ok(Self::new(Arc::new(provider)))
    }

    pub fn new(provider: Arc<dyn ImageProvider>) -> Self {
        Self {
            provider,
            normalizer: ResponseNormalizer::default(),
        }
    }

    pub fn with_normalizer(mut self, normalizer: ResponseNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Run one generation. Failures are returned inside the envelope.
    pub async fn generate(&self, request: &GenerationRequest) -> GenerationResponse {
        let started = Instant::now();

        match self.run(request).await {
            Ok(image_url) => GenerationResponse::success(image_url, elapsed_ms(started)),
            Err(e) => {
                let generation_time = elapsed_ms(started);
                warn!(
                    provider = self.provider.name(),
                    error = %e,
                    generation_time,
                    "Art generation failed"
                );
                GenerationResponse::failure(&e, generation_time)
            }
        }
    }

    async fn run(&self, request: &GenerationRequest) -> Result<String> {
        let enhanced = prompt::enhance(request.prompt(), request.style());
        debug!(
            provider = self.provider.name(),
            model = self.provider.model(),
            enhanced_prompt = %enhanced,
            "Enhanced prompt"
        );

        let payload = self.provider.complete(&enhanced).await?;
        self.normalizer.extract(&payload)
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
