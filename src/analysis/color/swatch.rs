use image::Rgb;

use super::metrics::{distance, parse_hex, saturation_lightness};
use super::sampling::ColorHistogram;
use crate::types::ColorRole;

/// Named representative colors, in the order they are targeted during extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwatchKind {
    Vibrant,
    DarkVibrant,
    LightVibrant,
    Muted,
    DarkMuted,
    LightMuted,
}

impl SwatchKind {
    pub const ALL: [SwatchKind; 6] = [
        SwatchKind::Vibrant,
        SwatchKind::DarkVibrant,
        SwatchKind::LightVibrant,
        SwatchKind::Muted,
        SwatchKind::DarkMuted,
        SwatchKind::LightMuted,
    ];

    /// Canonical palette role a swatch anchors.
    pub fn role(&self) -> ColorRole {
        match self {
            SwatchKind::Vibrant => ColorRole::Accent,
            SwatchKind::DarkMuted => ColorRole::Text,
            SwatchKind::LightMuted | SwatchKind::Muted => ColorRole::Background,
            SwatchKind::DarkVibrant | SwatchKind::LightVibrant => ColorRole::Interactive,
        }
    }

    fn target(&self) -> SwatchTarget {
        let (luma, saturation) = match self {
            SwatchKind::Vibrant => (LumaBand::Normal, SaturationBand::Vibrant),
            SwatchKind::DarkVibrant => (LumaBand::Dark, SaturationBand::Vibrant),
            SwatchKind::LightVibrant => (LumaBand::Light, SaturationBand::Vibrant),
            SwatchKind::Muted => (LumaBand::Normal, SaturationBand::Muted),
            SwatchKind::DarkMuted => (LumaBand::Dark, SaturationBand::Muted),
            SwatchKind::LightMuted => (LumaBand::Light, SaturationBand::Muted),
        };
        let (min_luma, target_luma, max_luma) = match luma {
            LumaBand::Dark => (0.0, 0.26, 0.45),
            LumaBand::Normal => (0.3, 0.5, 0.7),
            LumaBand::Light => (0.55, 0.74, 1.0),
        };
        let (min_saturation, target_saturation, max_saturation) = match saturation {
            SaturationBand::Vibrant => (0.35, 1.0, 1.0),
            SaturationBand::Muted => (0.0, 0.3, 0.4),
        };
        SwatchTarget {
            min_luma,
            target_luma,
            max_luma,
            min_saturation,
            target_saturation,
            max_saturation,
        }
    }
}

enum LumaBand {
    Dark,
    Normal,
    Light,
}

enum SaturationBand {
    Vibrant,
    Muted,
}

struct SwatchTarget {
    min_luma: f64,
    target_luma: f64,
    max_luma: f64,
    min_saturation: f64,
    target_saturation: f64,
    max_saturation: f64,
}

const WEIGHT_SATURATION: f64 = 3.0;
const WEIGHT_LUMA: f64 = 6.5;
const WEIGHT_POPULATION: f64 = 0.5;

impl SwatchTarget {
    fn accepts(&self, saturation: f64, lightness: f64) -> bool {
        (self.min_saturation..=self.max_saturation).contains(&saturation)
            && (self.min_luma..=self.max_luma).contains(&lightness)
    }

    fn score(&self, saturation: f64, lightness: f64, population: f64) -> f64 {
        let saturation_fit = 1.0 - (saturation - self.target_saturation).abs();
        let luma_fit = 1.0 - (lightness - self.target_luma).abs();
        (saturation_fit * WEIGHT_SATURATION + luma_fit * WEIGHT_LUMA + population * WEIGHT_POPULATION)
            / (WEIGHT_SATURATION + WEIGHT_LUMA + WEIGHT_POPULATION)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swatch {
    pub kind: SwatchKind,
    pub color: Rgb<u8>,
}

/// A set of semantic swatches, at most one per kind
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SemanticSwatches {
    swatches: Vec<Swatch>,
}

impl SemanticSwatches {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the swatch for `kind`, replacing any previous one.
    pub fn with(mut self, kind: SwatchKind, color: Rgb<u8>) -> Self {
        self.swatches.retain(|s| s.kind != kind);
        self.swatches.push(Swatch { kind, color });
        self
    }

    /// Like [`SemanticSwatches::with`] for a `#RRGGBB` string; invalid hex is ignored.
    pub fn with_hex(self, kind: SwatchKind, hex: &str) -> Self {
        match parse_hex(hex) {
            Some(color) => self.with(kind, color),
            None => {
                tracing::warn!("Ignoring invalid {:?} swatch color '{}'", kind, hex);
                self
            }
        }
    }

    /// Picks the best-scoring histogram color for each swatch kind by HSL targeting.
    /// A color is used for at most one swatch.
    pub fn extract(histogram: &ColorHistogram) -> Self {
        let ranked = histogram.ranked();
        let max_population = ranked.first().map(|&(_, n)| n).unwrap_or(0).max(1) as f64;
        let candidates: Vec<(Rgb<u8>, f64, f64, f64)> = ranked
            .iter()
            .map(|&(color, count)| {
                let (s, l) = saturation_lightness(color);
                (color, s, l, count as f64 / max_population)
            })
            .collect();

        let mut swatches = Self::new();
        for kind in SwatchKind::ALL {
            let target = kind.target();
            let best = candidates
                .iter()
                .filter(|(color, s, l, _)| target.accepts(*s, *l) && !swatches.contains(*color))
                .map(|&(color, s, l, population)| (color, target.score(s, l, population)))
                .fold(None, |best: Option<(Rgb<u8>, f64)>, candidate| match best {
                    Some(b) if b.1 >= candidate.1 => Some(b),
                    _ => Some(candidate),
                });
            if let Some((color, _)) = best {
                swatches = swatches.with(kind, color);
            }
        }

        tracing::debug!("Extracted {} semantic swatches", swatches.len());
        swatches
    }

    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.swatches.len()
    }

    pub fn get(&self, kind: SwatchKind) -> Option<Rgb<u8>> {
        self.swatches.iter().find(|s| s.kind == kind).map(|s| s.color)
    }

    fn contains(&self, color: Rgb<u8>) -> bool {
        self.swatches.iter().any(|s| s.color == color)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Swatch> {
        self.swatches.iter()
    }

    /// Role of the swatch nearest to `color`; background when there are no swatches.
    pub fn nearest_role(&self, color: Rgb<u8>) -> ColorRole {
        self.swatches
            .iter()
            .map(|s| (s.kind, distance(color, s.color)))
            .fold(None, |nearest: Option<(SwatchKind, f64)>, candidate| match nearest {
                Some(n) if n.1 <= candidate.1 => Some(n),
                _ => Some(candidate),
            })
            .map(|(kind, _)| kind.role())
            .unwrap_or(ColorRole::Background)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearest_role() {
        let swatches = SemanticSwatches::new()
            .with(SwatchKind::Vibrant, Rgb([255, 0, 0]))
            .with(SwatchKind::DarkMuted, Rgb([20, 20, 30]))
            .with(SwatchKind::LightMuted, Rgb([240, 240, 235]))
            .with(SwatchKind::DarkVibrant, Rgb([0, 0, 160]));

        assert_eq!(swatches.nearest_role(Rgb([224, 32, 32])), ColorRole::Accent);
        assert_eq!(swatches.nearest_role(Rgb([32, 32, 32])), ColorRole::Text);
        assert_eq!(swatches.nearest_role(Rgb([255, 255, 255])), ColorRole::Background);
        assert_eq!(swatches.nearest_role(Rgb([0, 32, 192])), ColorRole::Interactive);
        assert_eq!(SemanticSwatches::new().nearest_role(Rgb([1, 2, 3])), ColorRole::Background);
    }

    #[test]
    fn test_with_replaces_same_kind() {
        let swatches = SemanticSwatches::new()
            .with(SwatchKind::Muted, Rgb([1, 1, 1]))
            .with_hex(SwatchKind::Muted, "#808080")
            .with_hex(SwatchKind::Vibrant, "not a color");
        assert_eq!(swatches.len(), 1);
        assert_eq!(swatches.get(SwatchKind::Muted), Some(Rgb([128, 128, 128])));
    }

    #[test]
    fn test_extract_targets_saturation_and_lightness() {
        let mut histogram = ColorHistogram::default();
        for _ in 0..10 {
            histogram.record(Rgb([224, 32, 32])); // saturated mid red
        }
        for _ in 0..8 {
            histogram.record(Rgb([64, 64, 64])); // dark grey
        }
        for _ in 0..6 {
            histogram.record(Rgb([224, 224, 224])); // light grey
        }

        let swatches = SemanticSwatches::extract(&histogram);
        assert_eq!(swatches.get(SwatchKind::Vibrant), Some(Rgb([224, 32, 32])));
        assert_eq!(swatches.get(SwatchKind::DarkMuted), Some(Rgb([64, 64, 64])));
        assert_eq!(swatches.get(SwatchKind::LightMuted), Some(Rgb([224, 224, 224])));
        assert_eq!(swatches.get(SwatchKind::Muted), None);
    }

    #[test]
    fn test_extract_empty_histogram() {
        assert!(SemanticSwatches::extract(&ColorHistogram::default()).is_empty());
    }
}
