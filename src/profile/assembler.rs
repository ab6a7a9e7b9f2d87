use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::analysis::semantic::{DetectedFont, SemanticAnalysis};
use crate::analysis::style::StyleProfile;
use crate::types::{
    ColorProfile, DesignProfile, Effects, FontEntry, FontFallback, FontSystem, SourceType, Spacing,
    Typography,
};

/// Everything the assembler joins into one profile
#[derive(Debug, Clone)]
pub struct AssemblerInputs {
    pub color_profile: ColorProfile,
    /// Absent for uploaded images, which have no CSS to scrape
    pub style: Option<StyleProfile>,
    pub semantic: SemanticAnalysis,
    pub source_type: SourceType,
    pub source_value: String,
    pub processing_ms: u64,
    pub screenshot_url: Option<String>,
}

/// Joins the color, style and AI results. Total over every input combination.
pub fn assemble(inputs: AssemblerInputs) -> DesignProfile {
    let AssemblerInputs {
        color_profile,
        style,
        semantic,
        source_type,
        source_value,
        processing_ms,
        screenshot_url,
    } = inputs;

    let (font_system, spacing, effects) = match style {
        Some(style) => (style.typography, style.spacing, style.effects),
        None => (FontSystem::system_default(), Spacing::default(), Effects::default()),
    };

    let mut fonts = font_system.fonts;
    if fonts.is_empty() {
        fonts = FontSystem::system_default().fonts;
    }
    if source_type == SourceType::Image {
        if let Some(detected) = semantic.fonts_detected.as_deref().filter(|f| !f.is_empty()) {
            debug!(count = detected.len(), "Using AI-detected fonts for image source");
            fonts = detected.iter().map(detected_font_entry).collect();
        }
    }

    DesignProfile {
        id: Uuid::new_v4(),
        source_type,
        source_value,
        analyzed_at: Utc::now(),
        processing_ms,
        screenshot_url,
        meta: semantic.meta(),
        colors: color_profile,
        typography: Typography::new(fonts, font_system.scale),
        spacing,
        effects,
        components: semantic.components.unwrap_or_default(),
    }
}

fn detected_font_entry(font: &DetectedFont) -> FontEntry {
    FontEntry {
        family: font.name.clone(),
        role: font.role,
        fallback: FontFallback::classify(&font.name),
        weight: font.confidence,
    }
}
