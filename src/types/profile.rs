use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{ColorProfile, DesignMeta, Effects, Spacing, Typography};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Url,
    Image,
}

impl SourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Url => "url",
            SourceType::Image => "image",
        }
    }
}

/// Canonical description of a design. Built once by the assembler and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignProfile {
    pub id: Uuid,
    pub source_type: SourceType,
    pub source_value: String,
    pub analyzed_at: DateTime<Utc>,
    pub processing_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screenshot_url: Option<String>,

    pub meta: DesignMeta,
    pub colors: ColorProfile,
    pub typography: Typography,
    pub spacing: Spacing,
    pub effects: Effects,
    pub components: Vec<String>,
}
