use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_UNIT: u32 = 8;
pub const GRID_COLUMNS: u32 = 12;
pub const DEFAULT_GUTTER: u32 = 16;
pub const DEFAULT_MARGIN: u32 = 24;
pub const DEFAULT_TRANSITION: &str = "0.2s ease";
pub const DEFAULT_SHADOW: &str = "0 1px 3px rgba(0,0,0,0.1)";

const SPACING_LABELS: [&str; 10] = ["xs", "sm", "md", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl"];
const SPACING_MULTIPLIERS: [u32; 10] = [1, 2, 3, 4, 6, 8, 12, 16, 24, 32];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpacingStep {
    pub label: String,
    /// Pixels
    pub value: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    pub columns: u32,
    pub gutter: u32,
    pub margin: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: GRID_COLUMNS,
            gutter: DEFAULT_GUTTER,
            margin: DEFAULT_MARGIN,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spacing {
    pub base_unit: u32,
    pub scale: Vec<SpacingStep>,
    pub grid: GridConfig,
}

impl Spacing {
    /// Multiplier ladder `1,2,3,4,6,8,12,16,24,32` over `base_unit`, labeled `xs..6xl`,
    /// keeping steps up to `max_value` pixels and at most `max_steps` entries.
    pub fn ladder(base_unit: u32, max_value: u32, max_steps: usize) -> Vec<SpacingStep> {
        SPACING_LABELS
            .iter()
            .zip(SPACING_MULTIPLIERS)
            .map(|(label, multiplier)| SpacingStep {
                label: label.to_string(),
                value: base_unit * multiplier,
            })
            .filter(|step| step.value <= max_value)
            .take(max_steps)
            .collect()
    }
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            base_unit: DEFAULT_BASE_UNIT,
            scale: Self::ladder(DEFAULT_BASE_UNIT, 256, SPACING_LABELS.len()),
            grid: GridConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderRadiusMap {
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub full: String,
}

impl BorderRadiusMap {
    pub const FULL: &'static str = "9999px";

    pub fn from_px(sm: u32, md: u32, lg: u32) -> Self {
        Self {
            sm: format!("{sm}px"),
            md: format!("{md}px"),
            lg: format!("{lg}px"),
            full: Self::FULL.to_string(),
        }
    }

    /// `(key, value)` pairs in `sm, md, lg, full` order.
    pub fn entries(&self) -> [(&'static str, &str); 4] {
        [
            ("sm", self.sm.as_str()),
            ("md", self.md.as_str()),
            ("lg", self.lg.as_str()),
            ("full", self.full.as_str()),
        ]
    }
}

impl Default for BorderRadiusMap {
    fn default() -> Self {
        Self::from_px(2, 4, 8)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effects {
    pub border_radius: BorderRadiusMap,
    pub shadows: Vec<String>,
    pub transitions: String,
}

impl Default for Effects {
    fn default() -> Self {
        Self {
            border_radius: BorderRadiusMap::default(),
            shadows: vec![DEFAULT_SHADOW.to_string()],
            transitions: DEFAULT_TRANSITION.to_string(),
        }
    }
}
