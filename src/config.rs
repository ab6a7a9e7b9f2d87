use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Environment prefix for configuration overrides, e.g. `DESIGN_DNA__COLOR__SAMPLE_BUDGET=2000`.
pub const ENV_PREFIX: &str = "DESIGN_DNA";

/// Tunable parameters for a design analysis run
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct Configuration {
    pub color: ColorEngineConfig,
    pub style: StyleConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ColorEngineConfig {
    /// Upper bound on the number of pixels sampled from one image
    pub sample_budget: usize,
    /// Channel values are rounded to the nearest multiple of this step
    pub quantization_step: u8,
    /// Samples whose quantized channel sum is below this are dropped as near-black noise
    pub noise_floor: u16,
    /// Samples whose quantized channel sum is above this are dropped as near-white noise
    pub noise_ceiling: u16,
    /// Minimum Euclidean RGB distance between two kept palette colors
    pub min_color_distance: f64,
    pub max_colors: usize,
    /// Derive semantic swatches from the image when none are supplied
    pub use_swatches: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// A second font family is kept only above this fraction of the primary's weight
    pub secondary_font_ratio: f64,
    /// Spacing samples above this are ignored when detecting the base unit
    pub max_base_unit_sample: u32,
    pub max_spacing_value: u32,
    pub max_spacing_steps: usize,
    pub max_shadows: usize,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Selector wrapping the CSS custom properties
    pub root_selector: String,
}

impl Default for ColorEngineConfig {
    fn default() -> Self {
        Self {
            sample_budget: 5000,
            quantization_step: 32,
            noise_floor: 30,
            noise_ceiling: 720,
            min_color_distance: 40.0,
            max_colors: 12,
            use_swatches: false,
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            secondary_font_ratio: 0.05,
            max_base_unit_sample: 64,
            max_spacing_value: 256,
            max_spacing_steps: 10,
            max_shadows: 3,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            root_selector: ":root".to_string(),
        }
    }
}

impl Configuration {
    /// Configuration optimized for speed (fewer samples)
    pub fn fast() -> Self {
        Self {
            color: ColorEngineConfig {
                sample_budget: 1000,
                ..ColorEngineConfig::default()
            },
            ..Self::default()
        }
    }

    /// Configuration optimized for fidelity (finer buckets, swatch-driven roles)
    pub fn high_fidelity() -> Self {
        Self {
            color: ColorEngineConfig {
                sample_budget: 20_000,
                quantization_step: 16,
                use_swatches: true,
                ..ColorEngineConfig::default()
            },
            ..Self::default()
        }
    }

    /// Layers defaults, an optional TOML/JSON/YAML file and `DESIGN_DNA__*` environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }

        let configuration: Configuration = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        configuration.validate().map_err(ConfigError::Invalid)?;
        tracing::debug!(?configuration, "Loaded configuration");
        Ok(configuration)
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), String> {
        let color = &self.color;
        if color.sample_budget == 0 {
            return Err("Sample budget must be greater than 0".to_string());
        }
        if color.quantization_step == 0 {
            return Err("Quantization step must be greater than 0".to_string());
        }
        if color.noise_floor >= color.noise_ceiling {
            return Err("Noise floor must be below the noise ceiling".to_string());
        }
        if color.min_color_distance < 0.0 {
            return Err("Minimum color distance must not be negative".to_string());
        }
        if color.max_colors == 0 {
            return Err("At least one palette color must be allowed".to_string());
        }

        let style = &self.style;
        if !(0.0..=1.0).contains(&style.secondary_font_ratio) {
            return Err("Secondary font ratio must be between 0.0 and 1.0".to_string());
        }
        if style.max_base_unit_sample == 0 || style.max_spacing_value == 0 {
            return Err("Spacing bounds must be greater than 0".to_string());
        }
        if style.max_spacing_steps == 0 {
            return Err("At least one spacing step must be allowed".to_string());
        }

        if self.export.root_selector.trim().is_empty() {
            return Err("Root selector must not be empty".to_string());
        }

        Ok(())
    }
}
