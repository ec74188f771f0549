//! Image URL extraction strategies

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// First http(s) URL in free text that ends in a known image extension
static IMAGE_URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)https?://\S+\.(jpg|jpeg|png|webp|gif)").expect("image URL pattern is valid")
});

/// A single way of locating an image URL inside a provider payload
pub trait UrlExtractor: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    fn extract(&self, payload: &Value) -> Option<String>;
}

/// Scans `choices[0].message.content` for an image link.
///
/// Best effort only: the content is free text written by the model.
pub struct ChatContentExtractor;

impl UrlExtractor for ChatContentExtractor {
    fn name(&self) -> &'static str {
        "chat_content"
    }

    fn extract(&self, payload: &Value) -> Option<String> {
        let content = payload.pointer("/choices/0/message/content")?.as_str()?;
        find_image_url(content).map(str::to_string)
    }
}

/// Reads `data.url`
pub struct DataUrlExtractor;

impl UrlExtractor for DataUrlExtractor {
    fn name(&self) -> &'static str {
        "data_url"
    }

    fn extract(&self, payload: &Value) -> Option<String> {
        non_empty_str(payload.pointer("/data/url")?)
    }
}

/// Reads the first element of `output`
pub struct OutputListExtractor;

impl UrlExtractor for OutputListExtractor {
    fn name(&self) -> &'static str {
        "output"
    }

    fn extract(&self, payload: &Value) -> Option<String> {
        non_empty_str(payload.get("output")?.as_array()?.first()?)
    }
}

/// Reads `image_url`
pub struct ImageUrlFieldExtractor;

impl UrlExtractor for ImageUrlFieldExtractor {
    fn name(&self) -> &'static str {
        "image_url"
    }

    fn extract(&self, payload: &Value) -> Option<String> {
        non_empty_str(payload.get("image_url")?)
    }
}

/// Locate the first image URL in `text`, returned verbatim
pub fn find_image_url(text: &str) -> Option<&str> {
    IMAGE_URL_PATTERN.find(text).map(|m| m.as_str())
}

fn non_empty_str(value: &Value) -> Option<String> {
    value
        .as_str()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
