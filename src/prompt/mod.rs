//! Prompt module - Style catalog and prompt enhancement

pub mod enhancer;
pub mod styles;

pub use enhancer::{enhance, QUALITY_SUFFIX};
pub use styles::{ArtStyle, StylePreset, STYLE_PRESETS};
