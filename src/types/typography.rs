use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontRole {
    Primary,
    Secondary,
    Code,
    Heading,
    Body,
    Accent,
}

impl FontRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontRole::Primary => "primary",
            FontRole::Secondary => "secondary",
            FontRole::Code => "code",
            FontRole::Heading => "heading",
            FontRole::Body => "body",
            FontRole::Accent => "accent",
        }
    }
}

/// Generic CSS family a font falls back to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontFallback {
    SansSerif,
    Serif,
    Monospace,
}

impl FontFallback {
    /// Classifies a family by name: mono/code/courier are monospace, "serif" without "sans" is serif.
    pub fn classify(family: &str) -> Self {
        let lower = family.to_lowercase();
        if lower.contains("mono") || lower.contains("code") || lower.contains("courier") {
            FontFallback::Monospace
        } else if lower.contains("serif") && !lower.contains("sans") {
            FontFallback::Serif
        } else {
            FontFallback::SansSerif
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FontFallback::SansSerif => "sans-serif",
            FontFallback::Serif => "serif",
            FontFallback::Monospace => "monospace",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontEntry {
    pub family: String,
    pub role: FontRole,
    pub fallback: FontFallback,
    /// Prominence score (usage area or detection confidence), not a CSS font-weight
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeScaleStep {
    pub label: String,
    /// CSS length, e.g. `16px`
    pub size: String,
}

impl TypeScaleStep {
    pub fn px(label: &str, size: u32) -> Self {
        Self {
            label: label.to_string(),
            size: format!("{size}px"),
        }
    }
}

/// Fonts and size ladder produced by style normalization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSystem {
    pub fonts: Vec<FontEntry>,
    pub scale: Vec<TypeScaleStep>,
}

const SCALE_LABELS: [&str; 8] = ["xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl"];
const SCALE_SIZES: [u32; 8] = [12, 14, 16, 18, 20, 24, 30, 36];

impl FontSystem {
    pub fn default_scale() -> Vec<TypeScaleStep> {
        SCALE_LABELS
            .iter()
            .zip(SCALE_SIZES)
            .map(|(label, size)| TypeScaleStep::px(label, size))
            .collect()
    }

    /// System UI stack used when no CSS was scraped.
    pub fn system_default() -> Self {
        Self {
            fonts: vec![FontEntry {
                family: "System UI".to_string(),
                role: FontRole::Primary,
                fallback: FontFallback::SansSerif,
                weight: 1.0,
            }],
            scale: Self::default_scale(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Typography {
    pub fonts: Vec<FontEntry>,
    pub scale: Vec<TypeScaleStep>,
    pub line_heights: IndexMap<String, f64>,
    pub letter_spacing: IndexMap<String, String>,
}

impl Typography {
    pub fn new(fonts: Vec<FontEntry>, scale: Vec<TypeScaleStep>) -> Self {
        let line_heights = [("tight", 1.25), ("normal", 1.5), ("relaxed", 1.75)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        let letter_spacing = [("tight", "-0.025em"), ("normal", "0em"), ("wide", "0.05em")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        Self {
            fonts,
            scale,
            line_heights,
            letter_spacing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_classification() {
        assert_eq!(FontFallback::classify("JetBrains Mono"), FontFallback::Monospace);
        assert_eq!(FontFallback::classify("Source Code Pro"), FontFallback::Monospace);
        assert_eq!(FontFallback::classify("Courier New"), FontFallback::Monospace);
        assert_eq!(FontFallback::classify("Noto Serif"), FontFallback::Serif);
        assert_eq!(FontFallback::classify("Open Sans Serif"), FontFallback::SansSerif);
        assert_eq!(FontFallback::classify("Georgia"), FontFallback::SansSerif);
    }

    #[test]
    fn test_default_scale_ladder() {
        let scale = FontSystem::default_scale();
        assert_eq!(scale.len(), 8);
        assert_eq!(scale[0], TypeScaleStep::px("xs", 12));
        assert_eq!(scale[2].label, "base");
        assert_eq!(scale[7].size, "36px");
    }

    #[test]
    fn test_typography_constants() {
        let typography = Typography::new(vec![], vec![]);
        assert_eq!(typography.line_heights["normal"], 1.5);
        assert_eq!(typography.letter_spacing["tight"], "-0.025em");
        let json = serde_json::to_value(&typography).unwrap();
        assert_eq!(json["line_heights"]["relaxed"], 1.75);
    }
}
