//! Art style catalog

use serde::Serialize;

/// Style keys understood by the prompt enhancer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtStyle {
    Abstract,
    Photorealistic,
    Fantasy,
    Digital,
    Painting,
    Sketch,
}

impl ArtStyle {
    pub const ALL: [ArtStyle; 6] = [
        ArtStyle::Abstract,
        ArtStyle::Photorealistic,
        ArtStyle::Fantasy,
        ArtStyle::Digital,
        ArtStyle::Painting,
        ArtStyle::Sketch,
    ];

    /// Look up a style by its exact key
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|style| style.id() == id)
    }

    pub fn id(&self) -> &'static str {
        match self {
            ArtStyle::Abstract => "abstract",
            ArtStyle::Photorealistic => "photorealistic",
            ArtStyle::Fantasy => "fantasy",
            ArtStyle::Digital => "digital",
            ArtStyle::Painting => "painting",
            ArtStyle::Sketch => "sketch",
        }
    }

    /// Descriptive clause appended to prompts in this style
    pub fn clause(&self) -> &'static str {
        match self {
            ArtStyle::Abstract => {
                "abstract art style, geometric shapes, vibrant colors, modern composition"
            }
            ArtStyle::Photorealistic => {
                "photorealistic, high detail, professional photography, sharp focus"
            }
            ArtStyle::Fantasy => {
                "fantasy art, magical atmosphere, ethereal lighting, mystical elements"
            }
            ArtStyle::Digital => "digital art, clean lines, modern aesthetic, contemporary style",
            ArtStyle::Painting => "oil painting style, textured brushstrokes, artistic composition",
            ArtStyle::Sketch => "pencil sketch style, detailed line work, artistic drawing",
        }
    }

    pub fn preset(&self) -> &'static StylePreset {
        // STYLE_PRESETS is ordered like ALL
        &STYLE_PRESETS[*self as usize]
    }
}

/// Catalog entry shown to clients choosing a style
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StylePreset {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: ArtStyle,
    pub preview_url: &'static str,
}

pub static STYLE_PRESETS: [StylePreset; 6] = [
    StylePreset {
        id: "abstract",
        name: "Abstract",
        description: "Geometric shapes and vibrant colors",
        category: ArtStyle::Abstract,
        preview_url: "https://placehold.co/300x300?text=Abstract+geometric+art+with+vibrant+colors+and+modern+composition",
    },
    StylePreset {
        id: "photorealistic",
        name: "Photorealistic",
        description: "Detailed, lifelike imagery",
        category: ArtStyle::Photorealistic,
        preview_url: "https://placehold.co/300x300?text=Photorealistic+portrait+with+professional+lighting+and+sharp+detail",
    },
    StylePreset {
        id: "fantasy",
        name: "Fantasy",
        description: "Magical and mystical themes",
        category: ArtStyle::Fantasy,
        preview_url: "https://placehold.co/300x300?text=Fantasy+landscape+with+magical+creatures+and+ethereal+lighting",
    },
    StylePreset {
        id: "digital",
        name: "Digital Art",
        description: "Modern digital aesthetics",
        category: ArtStyle::Digital,
        preview_url: "https://placehold.co/300x300?text=Modern+digital+art+with+clean+lines+and+contemporary+style",
    },
    StylePreset {
        id: "painting",
        name: "Oil Painting",
        description: "Traditional painting techniques",
        category: ArtStyle::Painting,
        preview_url: "https://placehold.co/300x300?text=Oil+painting+with+textured+brushstrokes+and+classical+composition",
    },
    StylePreset {
        id: "sketch",
        name: "Sketch",
        description: "Hand-drawn artistic style",
        category: ArtStyle::Sketch,
        preview_url: "https://placehold.co/300x300?text=Detailed+pencil+sketch+with+artistic+line+work+and+shading",
    },
];
