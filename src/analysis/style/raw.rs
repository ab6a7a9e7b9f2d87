use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Computed-style aggregate scraped from a rendered page
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawCssData {
    /// Font family -> prominence (e.g. text area rendered in that family)
    pub fonts: IndexMap<String, f64>,
    /// CSS color string -> prominence
    pub colors: IndexMap<String, f64>,
    /// Margin/padding/gap samples in pixels
    pub spacing: Vec<i64>,
    /// Raw `border-radius` declarations, e.g. `8px`
    pub border_radii: Vec<String>,
    /// Raw `box-shadow` declarations
    pub shadows: Vec<String>,
}

impl RawCssData {
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
            && self.colors.is_empty()
            && self.spacing.is_empty()
            && self.border_radii.is_empty()
            && self.shadows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_scraper_payload() {
        let json = r#"{
            "fonts": {"Inter": 500000, "JetBrains Mono": 30000},
            "colors": {"rgb(255, 255, 255)": 800000},
            "spacing": [4, 8, 16],
            "borderRadii": ["4px", "9999px"],
            "shadows": ["0 1px 3px rgba(0,0,0,0.1)"]
        }"#;
        let raw: RawCssData = serde_json::from_str(json).unwrap();
        assert_eq!(raw.fonts.get_index(0).map(|(k, _)| k.as_str()), Some("Inter"));
        assert_eq!(raw.spacing, vec![4, 8, 16]);
        assert_eq!(raw.border_radii.len(), 2);
        assert!(!raw.is_empty());
    }

    #[test]
    fn test_missing_fields_default() {
        let raw: RawCssData = serde_json::from_str(r#"{"spacing": [8]}"#).unwrap();
        assert!(raw.fonts.is_empty());
        assert!(raw.shadows.is_empty());
        assert!(RawCssData::default().is_empty());
    }
}
