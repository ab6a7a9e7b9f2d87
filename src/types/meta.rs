use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualWeight {
    Light,
    Medium,
    Heavy,
}

impl VisualWeight {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(VisualWeight::Light),
            "medium" => Some(VisualWeight::Medium),
            "heavy" => Some(VisualWeight::Heavy),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WhitespaceUsage {
    Generous,
    Moderate,
    Tight,
}

impl WhitespaceUsage {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "generous" => Some(WhitespaceUsage::Generous),
            "moderate" => Some(WhitespaceUsage::Moderate),
            "tight" => Some(WhitespaceUsage::Tight),
            _ => None,
        }
    }
}

/// 1-10 ratings produced by the vision model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityScores {
    pub consistency: u8,
    pub hierarchy: u8,
    pub whitespace: u8,
    pub typography: u8,
    pub color_harmony: u8,
}

/// Qualitative fields from semantic analysis. `None` means the analysis could not determine it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DesignMeta {
    pub design_style: Option<String>,
    pub brand_personality: Option<Vec<String>>,
    pub visual_weight: Option<VisualWeight>,
    pub layout_pattern: Option<String>,
    pub whitespace_usage: Option<WhitespaceUsage>,
    pub quality_scores: Option<QualityScores>,
    pub designer_insight: Option<String>,
}
