//! Prompt enhancement

use crate::prompt::styles::ArtStyle;

/// Appended to every prompt sent to the provider
pub const QUALITY_SUFFIX: &str = ", high quality, detailed, professional artwork, 4K resolution";

/// Enrich a user prompt with the clause for `style` and the quality suffix.
///
/// Unknown or absent styles contribute nothing.
pub fn enhance(prompt: &str, style: Option<&str>) -> String {
    let mut enhanced = String::from(prompt);

    if let Some(style) = style.and_then(ArtStyle::from_id) {
        enhanced.push_str(", ");
        enhanced.push_str(style.clause());
    }

    enhanced.push_str(QUALITY_SUFFIX);
    enhanced
}
