use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::types::{DesignMeta, FontRole, QualityScores, SourceType, VisualWeight, WhitespaceUsage};

const SCORE_RANGE: std::ops::RangeInclusive<f64> = 1.0..=10.0;

/// A font the vision model recognised in an uploaded image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedFont {
    pub name: String,
    /// One of `heading`, `body` or `accent`
    pub role: FontRole,
    pub confidence: f64,
}

/// Validated output of the AI collaborator. Every field is optional; `partial`
/// marks a response that could not be parsed at all.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SemanticAnalysis {
    pub design_style: Option<String>,
    pub brand_personality: Option<Vec<String>>,
    pub visual_weight: Option<VisualWeight>,
    pub layout_pattern: Option<String>,
    pub whitespace_usage: Option<WhitespaceUsage>,
    pub quality_scores: Option<QualityScores>,
    pub designer_insight: Option<String>,
    pub components: Option<Vec<String>>,
    pub fonts_detected: Option<Vec<DetectedFont>>,
    #[serde(rename = "_partial", default)]
    pub partial: bool,
}

impl SemanticAnalysis {
    /// Result used when the AI is unavailable or its answer is unreadable.
    pub fn partial() -> Self {
        Self {
            partial: true,
            ..Self::default()
        }
    }

    /// Parses and validates the model's raw JSON answer. Never fails.
    pub fn from_json_str(text: &str, source_type: SourceType) -> Self {
        match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(raw)) => Self::from_object(&raw, source_type),
            Ok(other) => {
                warn!(kind = json_kind(&other), "AI response is not a JSON object");
                Self::partial()
            }
            Err(e) => {
                let preview: String = text.chars().take(200).collect();
                warn!(error = %e, preview = %preview, "Failed to parse AI response");
                Self::partial()
            }
        }
    }

    pub fn from_object(raw: &Map<String, Value>, source_type: SourceType) -> Self {
        let fonts_detected = match source_type {
            SourceType::Image => raw.get("fonts_detected").and_then(detected_fonts),
            SourceType::Url => None,
        };

        Self {
            design_style: string_field(raw, "design_style"),
            brand_personality: string_list(raw, "brand_personality"),
            visual_weight: raw
                .get("visual_weight")
                .and_then(Value::as_str)
                .and_then(VisualWeight::parse),
            layout_pattern: string_field(raw, "layout_pattern"),
            whitespace_usage: raw
                .get("whitespace_usage")
                .and_then(Value::as_str)
                .and_then(WhitespaceUsage::parse),
            quality_scores: raw.get("quality_scores").and_then(quality_scores),
            designer_insight: string_field(raw, "designer_insight"),
            components: string_list(raw, "components"),
            fonts_detected,
            partial: false,
        }
    }

    /// The subset that is copied into a profile's `meta` block.
    pub fn meta(&self) -> DesignMeta {
        DesignMeta {
            design_style: self.design_style.clone(),
            brand_personality: self.brand_personality.clone(),
            visual_weight: self.visual_weight,
            layout_pattern: self.layout_pattern.clone(),
            whitespace_usage: self.whitespace_usage,
            quality_scores: self.quality_scores,
            designer_insight: self.designer_insight.clone(),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn string_field(raw: &Map<String, Value>, key: &str) -> Option<String> {
    raw.get(key).and_then(Value::as_str).map(str::to_string)
}

fn string_list(raw: &Map<String, Value>, key: &str) -> Option<Vec<String>> {
    raw.get(key).and_then(Value::as_array).map(|items| {
        items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect()
    })
}

/// Numbers and numeric strings are accepted; anything else is not a score.
fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

fn quality_scores(value: &Value) -> Option<QualityScores> {
    let scores = value.as_object()?;
    let score = |key: &str| -> Option<u8> {
        let v = scores.get(key).and_then(numeric)?;
        SCORE_RANGE.contains(&v).then(|| v.round() as u8)
    };

    Some(QualityScores {
        consistency: score("consistency")?,
        hierarchy: score("hierarchy")?,
        whitespace: score("whitespace")?,
        typography: score("typography")?,
        color_harmony: score("color_harmony")?,
    })
}

fn detected_fonts(value: &Value) -> Option<Vec<DetectedFont>> {
    let items = value.as_array()?;
    let fonts = items
        .iter()
        .filter_map(|item| {
            let font = item.as_object()?;
            let name = font.get("name")?.as_str()?.to_string();
            let role = match font.get("role")?.as_str()? {
                "heading" => FontRole::Heading,
                "body" => FontRole::Body,
                "accent" => FontRole::Accent,
                _ => return None,
            };
            let confidence = font.get("confidence").and_then(Value::as_f64)?;
            Some(DetectedFont { name, role, confidence })
        })
        .collect();
    Some(fonts)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_RESPONSE: &str = r#"{
        "design_style": "minimalist",
        "brand_personality": ["calm", 42, "precise"],
        "visual_weight": "light",
        "layout_pattern": "single-column",
        "whitespace_usage": "generous",
        "quality_scores": {
            "consistency": 8,
            "hierarchy": "7",
            "whitespace": 9.4,
            "typography": 6.5,
            "color_harmony": 10
        },
        "designer_insight": "Restrained palette with one accent.",
        "components": ["navbar", "hero", null, "footer"],
        "fonts_detected": [
            {"name": "Inter", "role": "heading", "confidence": 0.9},
            {"name": "Lora", "role": "body", "confidence": 0.6},
            {"name": "Mystery", "role": "caption", "confidence": 0.5},
            {"role": "accent", "confidence": 0.4}
        ]
    }"#;

    #[test]
    fn test_full_response_for_url() {
        let analysis = SemanticAnalysis::from_json_str(FULL_RESPONSE, SourceType::Url);

        assert!(!analysis.partial);
        assert_eq!(analysis.design_style.as_deref(), Some("minimalist"));
        assert_eq!(analysis.brand_personality, Some(vec!["calm".to_string(), "precise".to_string()]));
        assert_eq!(analysis.visual_weight, Some(VisualWeight::Light));
        assert_eq!(analysis.whitespace_usage, Some(WhitespaceUsage::Generous));
        assert_eq!(
            analysis.quality_scores,
            Some(QualityScores {
                consistency: 8,
                hierarchy: 7,
                whitespace: 9,
                typography: 7,
                color_harmony: 10,
            })
        );
        assert_eq!(analysis.components.as_ref().map(Vec::len), Some(3));
        assert!(analysis.fonts_detected.is_none());
    }

    #[test]
    fn test_fonts_detected_only_for_images() {
        let analysis = SemanticAnalysis::from_json_str(FULL_RESPONSE, SourceType::Image);
        let fonts = analysis.fonts_detected.unwrap();

        assert_eq!(fonts.len(), 2);
        assert_eq!(fonts[0], DetectedFont {
            name: "Inter".to_string(),
            role: FontRole::Heading,
            confidence: 0.9,
        });
        assert_eq!(fonts[1].role, FontRole::Body);
    }

    #[test]
    fn test_invalid_enums_and_types_are_nulled() {
        let text = r#"{
            "design_style": 12,
            "visual_weight": "enormous",
            "whitespace_usage": "MODERATE",
            "brand_personality": "bold",
            "designer_insight": ["not", "a", "string"]
        }"#;
        let analysis = SemanticAnalysis::from_json_str(text, SourceType::Url);

        assert!(!analysis.partial);
        assert!(analysis.design_style.is_none());
        assert!(analysis.visual_weight.is_none());
        assert!(analysis.whitespace_usage.is_none());
        assert!(analysis.brand_personality.is_none());
        assert!(analysis.designer_insight.is_none());
    }

    #[test]
    fn test_out_of_range_score_nulls_block() {
        let text = r#"{"quality_scores": {
            "consistency": 8, "hierarchy": 7, "whitespace": 11,
            "typography": 6, "color_harmony": 5
        }}"#;
        assert!(SemanticAnalysis::from_json_str(text, SourceType::Url).quality_scores.is_none());

        let text = r#"{"quality_scores": {
            "consistency": 8, "hierarchy": 7, "whitespace": 5, "typography": 6
        }}"#;
        assert!(SemanticAnalysis::from_json_str(text, SourceType::Url).quality_scores.is_none());

        let text = r#"{"quality_scores": {
            "consistency": "high", "hierarchy": 7, "whitespace": 5,
            "typography": 6, "color_harmony": 5
        }}"#;
        assert!(SemanticAnalysis::from_json_str(text, SourceType::Url).quality_scores.is_none());
    }

    #[test]
    fn test_unparseable_response_is_partial() {
        let analysis = SemanticAnalysis::from_json_str("Sorry, I can't help with that.", SourceType::Url);
        assert_eq!(analysis, SemanticAnalysis::partial());
        assert!(analysis.partial);
        assert!(analysis.meta() == DesignMeta::default());

        assert!(SemanticAnalysis::from_json_str("[1, 2]", SourceType::Image).partial);
    }

    #[test]
    fn test_partial_flag_serializes_with_underscore() {
        let json = serde_json::to_value(SemanticAnalysis::partial()).unwrap();
        assert_eq!(json["_partial"], true);
        assert!(json["design_style"].is_null());
    }
}
