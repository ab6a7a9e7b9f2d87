use serde::{Deserialize, Serialize};

/// Semantic role a palette color plays in the design
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorRole {
    Background,
    Text,
    Accent,
    Interactive,
}

impl ColorRole {
    pub const ALL: [ColorRole; 4] = [
        ColorRole::Background,
        ColorRole::Text,
        ColorRole::Accent,
        ColorRole::Interactive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorRole::Background => "background",
            ColorRole::Text => "text",
            ColorRole::Accent => "accent",
            ColorRole::Interactive => "interactive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteEntry {
    /// `#RRGGBB`
    pub hex: String,
    pub role: ColorRole,
    pub usage_percent: u32,
}

impl PaletteEntry {
    pub fn new(hex: impl Into<String>, role: ColorRole, usage_percent: u32) -> Self {
        Self {
            hex: hex.into(),
            role,
            usage_percent,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WcagLevel {
    AA,
    AAA,
}

impl WcagLevel {
    pub const AA_MIN_RATIO: f64 = 4.5;
    pub const AAA_MIN_RATIO: f64 = 7.0;

    /// Level reached by a contrast ratio, `None` below AA.
    pub fn for_ratio(ratio: f64) -> Option<Self> {
        if ratio >= Self::AAA_MIN_RATIO {
            Some(WcagLevel::AAA)
        } else if ratio >= Self::AA_MIN_RATIO {
            Some(WcagLevel::AA)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WcagPair {
    pub foreground: String,
    pub background: String,
    pub ratio: f64,
    pub level: WcagLevel,
}

/// Fraction of the palette's usage held by each role
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ColorRatios {
    pub background: f64,
    pub text: f64,
    pub accent: f64,
    pub interactive: f64,
}

impl ColorRatios {
    pub fn from_palette(palette: &[PaletteEntry]) -> Self {
        let mut ratios = Self::default();
        for entry in palette {
            let share = entry.usage_percent as f64 / 100.0;
            match entry.role {
                ColorRole::Background => ratios.background += share,
                ColorRole::Text => ratios.text += share,
                ColorRole::Accent => ratios.accent += share,
                ColorRole::Interactive => ratios.interactive += share,
            }
        }
        ratios
    }

    pub fn total(&self) -> f64 {
        self.background + self.text + self.accent + self.interactive
    }
}

/// Output of the color engine: palette, role ratios and accessible contrast pairs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorProfile {
    pub palette: Vec<PaletteEntry>,
    pub ratios: ColorRatios,
    pub wcag_pairs: Vec<WcagPair>,
}

impl ColorProfile {
    /// Neutral palette used when nothing usable could be sampled.
    pub fn fallback() -> Self {
        let palette = vec![
            PaletteEntry::new("#FFFFFF", ColorRole::Background, 50),
            PaletteEntry::new("#000000", ColorRole::Text, 30),
            PaletteEntry::new("#0066FF", ColorRole::Accent, 15),
            PaletteEntry::new("#3385FF", ColorRole::Interactive, 5),
        ];
        Self {
            ratios: ColorRatios::from_palette(&palette),
            palette,
            wcag_pairs: vec![WcagPair {
                foreground: "#000000".to_string(),
                background: "#FFFFFF".to_string(),
                ratio: 21.0,
                level: WcagLevel::AAA,
            }],
        }
    }
}
