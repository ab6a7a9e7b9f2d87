pub mod ase;
pub mod css;
pub mod scss;
pub mod tailwind;
pub mod tokens;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ExportConfig;
use crate::types::DesignProfile;

/// The five export artifacts of one profile. `adobe_ase` is base64.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportFormats {
    pub css_variables: String,
    pub figma_tokens_json: String,
    pub scss_variables: String,
    pub tailwind_config: String,
    pub adobe_ase: String,
}

/// A profile together with its derived exports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedProfile {
    #[serde(flatten)]
    pub profile: DesignProfile,
    pub exports: ExportFormats,
}

pub fn generate_exports(profile: &DesignProfile) -> Result<ExportFormats, serde_json::Error> {
    generate_exports_with(profile, &ExportConfig::default())
}

pub fn generate_exports_with(
    profile: &DesignProfile,
    config: &ExportConfig,
) -> Result<ExportFormats, serde_json::Error> {
    let exports = ExportFormats {
        css_variables: css::css_variables(profile, &config.root_selector),
        figma_tokens_json: tokens::design_tokens(profile)?,
        scss_variables: scss::scss_variables(profile),
        tailwind_config: tailwind::tailwind_config(profile)?,
        adobe_ase: ase::adobe_ase(profile),
    };
    debug!(profile_id = %profile.id, ase_len = exports.adobe_ase.len(), "Generated exports");
    Ok(exports)
}

impl ExportedProfile {
    pub fn new(profile: DesignProfile, config: &ExportConfig) -> Result<Self, serde_json::Error> {
        let exports = generate_exports_with(&profile, config)?;
        Ok(Self { profile, exports })
    }
}
