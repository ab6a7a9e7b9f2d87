use std::time::Instant;

use tracing::{debug, info, instrument, warn};

use crate::analysis::color::{ColorAnalysisService, PixelSource, SemanticSwatches};
use crate::analysis::semantic::SemanticAnalysis;
use crate::analysis::style::{RawCssData, StyleNormalizer};
use crate::config::Configuration;
use crate::error::PipelineError;
use crate::export::ExportedProfile;
use crate::profile::{assemble, AssemblerInputs};
use crate::types::{DesignProfile, SourceType};

/// Runs the color engine and style normalizer for one request and joins their
/// output with the AI result into a [`DesignProfile`].
pub struct AnalysisPipeline {
    configuration: Configuration,
    pixel_source: PixelSource,
    css_data: Option<RawCssData>,
    swatches: Option<SemanticSwatches>,
    semantic: SemanticAnalysis,
    source_type: SourceType,
    source_value: String,
    screenshot_url: Option<String>,
}

impl AnalysisPipeline {
    pub fn builder(configuration: Configuration) -> AnalysisPipelineBuilder {
        AnalysisPipelineBuilder::new(configuration)
    }

    #[instrument(skip(self), fields(source_type = %self.source_type.as_str(), source = %self.source_value))]
    pub fn run(&self) -> DesignProfile {
        let start = Instant::now();

        let colors = ColorAnalysisService::new(self.configuration.color.clone())
            .analyze_with_swatches(&self.pixel_source, self.swatches.as_ref());
        debug!(palette = colors.palette.len(), wcag_pairs = colors.wcag_pairs.len(), "Color analysis complete");

        let style = self
            .css_data
            .as_ref()
            .map(|raw| StyleNormalizer::new(self.configuration.style.clone()).normalize(raw));

        if self.semantic.partial {
            warn!("AI analysis unavailable, meta fields will be empty");
        }

        let processing_ms = start.elapsed().as_millis() as u64;
        let profile = assemble(AssemblerInputs {
            color_profile: colors,
            style,
            semantic: self.semantic.clone(),
            source_type: self.source_type,
            source_value: self.source_value.clone(),
            processing_ms,
            screenshot_url: self.screenshot_url.clone(),
        });

        info!(profile_id = %profile.id, processing_ms, "Design profile assembled");
        profile
    }

    pub fn run_with_exports(&self) -> Result<ExportedProfile, PipelineError> {
        let profile = self.run();
        ExportedProfile::new(profile, &self.configuration.export)
            .map_err(|e| PipelineError::Export(e.to_string()))
    }
}

pub struct AnalysisPipelineBuilder {
    configuration: Configuration,
    pixel_source: Option<PixelSource>,
    css_data: Option<RawCssData>,
    swatches: Option<SemanticSwatches>,
    semantic: Option<SemanticAnalysis>,
    source_type: SourceType,
    source_value: Option<String>,
    screenshot_url: Option<String>,
}

impl AnalysisPipelineBuilder {
    pub fn new(configuration: Configuration) -> Self {
        Self {
            configuration,
            pixel_source: None,
            css_data: None,
            swatches: None,
            semantic: None,
            source_type: SourceType::Url,
            source_value: None,
            screenshot_url: None,
        }
    }

    pub fn pixel_source(mut self, pixel_source: PixelSource) -> Self {
        self.pixel_source = Some(pixel_source);
        self
    }

    // Only scraped pages carry a CSS aggregate.
    pub fn css_data(mut self, css_data: RawCssData) -> Self {
        self.css_data = Some(css_data);
        self
    }

    // Pre-computed swatches, these override the ones extracted from the image.
    pub fn swatches(mut self, swatches: SemanticSwatches) -> Self {
        self.swatches = Some(swatches);
        self
    }

    pub fn semantic(mut self, semantic: SemanticAnalysis) -> Self {
        self.semantic = Some(semantic);
        self
    }

    pub fn source_type(mut self, source_type: SourceType) -> Self {
        self.source_type = source_type;
        self
    }

    pub fn source_value(mut self, source_value: impl Into<String>) -> Self {
        self.source_value = Some(source_value.into());
        self
    }

    pub fn screenshot_url(mut self, screenshot_url: impl Into<String>) -> Self {
        self.screenshot_url = Some(screenshot_url.into());
        self
    }

    pub fn build(self) -> Result<AnalysisPipeline, PipelineError> {
        self.configuration
            .validate()
            .map_err(PipelineError::InvalidConfiguration)?;

        let pixel_source = self.pixel_source.ok_or(PipelineError::MissingInput("pixel source"))?;
        let semantic = self.semantic.ok_or(PipelineError::MissingInput("semantic analysis"))?;
        let source_value = self
            .source_value
            .filter(|v| !v.trim().is_empty())
            .ok_or(PipelineError::MissingInput("source value"))?;

        Ok(AnalysisPipeline {
            configuration: self.configuration,
            pixel_source,
            css_data: self.css_data,
            swatches: self.swatches,
            semantic,
            source_type: self.source_type,
            source_value,
            screenshot_url: self.screenshot_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::color::SwatchKind;
    use crate::types::{ColorProfile, ColorRole, FontRole};
    use image::{ImageBuffer, Rgb};

    fn two_tone_pixels() -> PixelSource {
        let img = ImageBuffer::from_fn(100, 100, |x, _| {
            if x < 70 {
                Rgb([224u8, 224, 224])
            } else {
                Rgb([32u8, 32, 64])
            }
        });
        PixelSource::Raw {
            data: img.into_raw(),
            channels: 3,
        }
    }

    fn css() -> RawCssData {
        serde_json::from_str(
            r#"{
                "fonts": {"Inter": 500000, "JetBrains Mono": 30000, "Georgia": 5000},
                "spacing": [4, 8, 8, 12, 16, 16, 16, 24, 32, 48, 64],
                "borderRadii": ["4px", "8px", "16px"],
                "shadows": ["0 1px 3px rgba(0,0,0,0.1)"]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_builder_requires_inputs() {
        let missing_pixels = AnalysisPipeline::builder(Configuration::default())
            .semantic(SemanticAnalysis::partial())
            .source_value("https://example.com")
            .build();
        assert_eq!(missing_pixels.err(), Some(PipelineError::MissingInput("pixel source")));

        let missing_semantic = AnalysisPipeline::builder(Configuration::default())
            .pixel_source(two_tone_pixels())
            .source_value("https://example.com")
            .build();
        assert_eq!(missing_semantic.err(), Some(PipelineError::MissingInput("semantic analysis")));

        let blank_source = AnalysisPipeline::builder(Configuration::default())
            .pixel_source(two_tone_pixels())
            .semantic(SemanticAnalysis::partial())
            .source_value("  ")
            .build();
        assert_eq!(blank_source.err(), Some(PipelineError::MissingInput("source value")));
    }

    #[test]
    fn test_builder_rejects_invalid_configuration() {
        let mut configuration = Configuration::default();
        configuration.color.max_colors = 0;

        let result = AnalysisPipeline::builder(configuration)
            .pixel_source(two_tone_pixels())
            .semantic(SemanticAnalysis::partial())
            .source_value("https://example.com")
            .build();
        assert!(matches!(result, Err(PipelineError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_url_request_end_to_end() {
        let semantic = SemanticAnalysis::from_json_str(
            r#"{"design_style": "minimal", "components": ["navbar", "hero"]}"#,
            SourceType::Url,
        );
        let exported = AnalysisPipeline::builder(Configuration::default())
            .pixel_source(two_tone_pixels())
            .css_data(css())
            .semantic(semantic)
            .source_type(SourceType::Url)
            .source_value("https://example.com")
            .screenshot_url("https://cdn.example.com/shot.png")
            .build()
            .unwrap()
            .run_with_exports()
            .unwrap();

        let profile = &exported.profile;
        assert_eq!(profile.colors.palette.len(), 2);
        assert_eq!(profile.colors.palette.iter().map(|p| p.usage_percent).sum::<u32>(), 100);
        assert_eq!(profile.typography.fonts[0].family, "Inter");
        assert_eq!(profile.spacing.base_unit, 4);
        assert_eq!(profile.meta.design_style.as_deref(), Some("minimal"));
        assert_eq!(profile.components.len(), 2);
        assert_eq!(profile.screenshot_url.as_deref(), Some("https://cdn.example.com/shot.png"));

        assert!(exported.exports.css_variables.contains("--font-primary: \"Inter\", sans-serif;"));
        assert!(exported.exports.css_variables.contains("--radius-md: 4px;"));
    }

    #[test]
    fn test_image_request_uses_detected_fonts_and_defaults() {
        let semantic = SemanticAnalysis::from_json_str(
            r#"{"fonts_detected": [{"name": "Futura", "role": "heading", "confidence": 0.7}]}"#,
            SourceType::Image,
        );
        let profile = AnalysisPipeline::builder(Configuration::default())
            .pixel_source(two_tone_pixels())
            .semantic(semantic)
            .source_type(SourceType::Image)
            .source_value("upload.png")
            .build()
            .unwrap()
            .run();

        assert_eq!(profile.typography.fonts.len(), 1);
        assert_eq!(profile.typography.fonts[0].family, "Futura");
        assert_eq!(profile.typography.fonts[0].role, FontRole::Heading);
        assert_eq!(profile.spacing.base_unit, 8);
        assert_eq!(profile.effects.border_radius.sm, "2px");
        assert!(profile.components.is_empty());
    }

    #[test]
    fn test_supplied_swatches_drive_roles() {
        let swatches = SemanticSwatches::new()
            .with_hex(SwatchKind::LightMuted, "#E0E0E0")
            .with_hex(SwatchKind::DarkMuted, "#202040");

        let profile = AnalysisPipeline::builder(Configuration::default())
            .pixel_source(two_tone_pixels())
            .swatches(swatches)
            .semantic(SemanticAnalysis::partial())
            .source_value("https://example.com")
            .build()
            .unwrap()
            .run();

        assert_eq!(profile.colors.palette[0].role, ColorRole::Background);
        assert_eq!(profile.colors.palette[1].role, ColorRole::Text);
    }

    #[test]
    fn test_unusable_pixels_fall_back() {
        let profile = AnalysisPipeline::builder(Configuration::default())
            .pixel_source(PixelSource::Encoded(b"not an image".to_vec()))
            .semantic(SemanticAnalysis::partial())
            .source_value("https://example.com")
            .build()
            .unwrap()
            .run();

        assert_eq!(profile.colors, ColorProfile::fallback());
    }
}
