//! Response handling module - Normalizing provider payloads into an image URL

pub mod extractors;

use serde_json::Value;
use tracing::debug;

use crate::error::{AppError, Result};
use extractors::{
    ChatContentExtractor, DataUrlExtractor, ImageUrlFieldExtractor, OutputListExtractor,
    UrlExtractor,
};

/// Runs extraction strategies in order; the first match wins
pub struct ResponseNormalizer {
    extractors: Vec<Box<dyn UrlExtractor>>,
}

impl ResponseNormalizer {
    /// Create a normalizer with no strategies
    pub fn empty() -> Self {
        Self {
            extractors: Vec::new(),
        }
    }

    /// Append a strategy with the lowest priority so far
    pub fn with_extractor<E: UrlExtractor + 'static>(mut self, extractor: E) -> Self {
        self.extractors.push(Box::new(extractor));
        self
    }

    /// Extract an image URL from a provider payload
    pub fn extract(&self, payload: &Value) -> Result<String> {
        for extractor in &self.extractors {
            if let Some(url) = extractor.extract(payload) {
                debug!(strategy = extractor.name(), url = %url, "Extracted image URL");
                return Ok(url);
            }
        }

        Err(AppError::NoImageUrl)
    }

    /// Names of the configured strategies, in priority order
    pub fn strategies(&self) -> Vec<&'static str> {
        self.extractors.iter().map(|e| e.name()).collect()
    }
}

impl Default for ResponseNormalizer {
    fn default() -> Self {
        Self::empty()
            .with_extractor(ChatContentExtractor)
            .with_extractor(DataUrlExtractor)
            .with_extractor(OutputListExtractor)
            .with_extractor(ImageUrlFieldExtractor)
    }
}
