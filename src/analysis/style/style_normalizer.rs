use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::style::effects::normalize_effects;
use crate::analysis::style::fonts::normalize_fonts;
use crate::analysis::style::raw::RawCssData;
use crate::analysis::style::spacing::normalize_spacing;
use crate::config::StyleConfig;
use crate::types::{Effects, FontSystem, Spacing};

/// Typography, spacing and effects derived from one page's CSS aggregate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleProfile {
    pub typography: FontSystem,
    pub spacing: Spacing,
    pub effects: Effects,
}

pub struct StyleNormalizer {
    config: StyleConfig,
}

impl StyleNormalizer {
    pub fn new(config: StyleConfig) -> Self {
        Self { config }
    }

    /// Pure transformation; any field of `raw` may be empty.
    pub fn normalize(&self, raw: &RawCssData) -> StyleProfile {
        let fonts = normalize_fonts(&raw.fonts, self.config.secondary_font_ratio);
        let spacing = normalize_spacing(&raw.spacing, &self.config);
        let effects = normalize_effects(&raw.border_radii, &raw.shadows, self.config.max_shadows);

        debug!(
            fonts = fonts.len(),
            base_unit = spacing.base_unit,
            spacing_steps = spacing.scale.len(),
            shadows = effects.shadows.len(),
            "Normalized CSS aggregate"
        );

        StyleProfile {
            typography: FontSystem {
                fonts,
                scale: FontSystem::default_scale(),
            },
            spacing,
            effects,
        }
    }
}
