use image::Rgb;

use super::metrics::{contrast_ratio, distance, relative_luminance, to_hex};
use super::sampling::{sample, ColorHistogram, PixelSource};
use super::swatch::SemanticSwatches;
use crate::config::ColorEngineConfig;
use crate::types::{ColorProfile, ColorRatios, ColorRole, PaletteEntry, WcagLevel, WcagPair};

/// Extracts a role-annotated palette from pixel data. Never fails: unusable input
/// degrades to [`ColorProfile::fallback`].
pub struct ColorAnalysisService {
    config: ColorEngineConfig,
}

impl ColorAnalysisService {
    pub fn new(config: ColorEngineConfig) -> Self {
        Self { config }
    }

    pub fn analyze(&self, source: &PixelSource) -> ColorProfile {
        self.analyze_with_swatches(source, None)
    }

    /// Externally supplied swatches take precedence over extracted ones.
    pub fn analyze_with_swatches(
        &self,
        source: &PixelSource,
        swatches: Option<&SemanticSwatches>,
    ) -> ColorProfile {
        let histogram = sample(source, &self.config);
        self.analyze_histogram(&histogram, swatches)
    }

    pub fn analyze_histogram(
        &self,
        histogram: &ColorHistogram,
        swatches: Option<&SemanticSwatches>,
    ) -> ColorProfile {
        let kept = self.select_distinct(histogram);
        if kept.is_empty() {
            tracing::warn!("No usable color samples, using fallback palette");
            return ColorProfile::fallback();
        }

        let extracted;
        let swatches = match swatches.filter(|s| !s.is_empty()) {
            Some(supplied) => Some(supplied),
            None if self.config.use_swatches => {
                extracted = SemanticSwatches::extract(histogram);
                Some(&extracted).filter(|s| !s.is_empty())
            }
            None => None,
        };

        let counts: Vec<u32> = kept.iter().map(|&(_, n)| n).collect();
        let percents = usage_percentages(&counts, histogram.total());

        let palette: Vec<PaletteEntry> = kept
            .iter()
            .zip(percents)
            .enumerate()
            .map(|(index, (&(color, _), usage_percent))| {
                let role = match swatches {
                    Some(s) => s.nearest_role(color),
                    None => assign_role(color, index),
                };
                PaletteEntry::new(to_hex(color), role, usage_percent)
            })
            .collect();

        let wcag_pairs = match swatches {
            Some(s) => contrast_pairs(&s.iter().map(|s| s.color).collect::<Vec<_>>()),
            None => contrast_pairs(&kept.iter().map(|&(c, _)| c).collect::<Vec<_>>()),
        };

        tracing::debug!(
            "Palette of {} colors with {} accessible pairs (swatches: {})",
            palette.len(),
            wcag_pairs.len(),
            swatches.is_some()
        );

        ColorProfile {
            ratios: ColorRatios::from_palette(&palette),
            palette,
            wcag_pairs,
        }
    }

    /// Greedy pass over colors by descending frequency, keeping a color only if it is
    /// farther than `min_color_distance` from every color already kept.
    fn select_distinct(&self, histogram: &ColorHistogram) -> Vec<(Rgb<u8>, u32)> {
        let mut kept: Vec<(Rgb<u8>, u32)> = Vec::new();
        for (color, count) in histogram.ranked() {
            if kept.len() >= self.config.max_colors {
                break;
            }
            if kept
                .iter()
                .all(|&(existing, _)| distance(color, existing) > self.config.min_color_distance)
            {
                kept.push((color, count));
            }
        }
        kept
    }
}

/// Role by luminance and frequency rank.
fn assign_role(color: Rgb<u8>, index: usize) -> ColorRole {
    let luminance = relative_luminance(color);
    if luminance > 0.85 {
        ColorRole::Background
    } else if luminance < 0.05 {
        ColorRole::Text
    } else if index == 0 {
        ColorRole::Accent
    } else if index == 1 {
        ColorRole::Interactive
    } else if luminance < 0.2 {
        ColorRole::Text
    } else if luminance > 0.6 {
        ColorRole::Background
    } else if index % 2 == 0 {
        ColorRole::Accent
    } else {
        ColorRole::Interactive
    }
}

/// Whole percentages of `total`, each at least 1, summing to exactly 100.
fn usage_percentages(counts: &[u32], total: u32) -> Vec<u32> {
    let total = total.max(1) as f64;
    let mut percents: Vec<u32> = counts
        .iter()
        .map(|&n| ((n as f64 / total * 100.0).round() as u32).max(1))
        .collect();
    balance_percentages(&mut percents);
    percents
}

/// The dominant (first) entry absorbs the rounding residual. If it cannot give up enough
/// while staying at 1, the rest comes from the largest remaining entries.
fn balance_percentages(percents: &mut [u32]) {
    if percents.is_empty() {
        return;
    }
    let sum: u32 = percents.iter().sum();
    if sum <= 100 {
        percents[0] += 100 - sum;
        return;
    }

    let mut excess = sum - 100;
    let taken = excess.min(percents[0].saturating_sub(1));
    percents[0] -= taken;
    excess -= taken;

    while excess > 0 {
        let Some(largest) = percents.iter_mut().filter(|p| **p > 1).max_by_key(|p| **p) else {
            break;
        };
        *largest -= 1;
        excess -= 1;
    }
}

/// Every unordered pair with a contrast ratio of at least AA. The level is decided on the
/// exact ratio; the stored ratio is truncated to two decimals so it never overstates it.
fn contrast_pairs(colors: &[Rgb<u8>]) -> Vec<WcagPair> {
    let mut pairs = Vec::new();
    for (i, &foreground) in colors.iter().enumerate() {
        for &background in &colors[i + 1..] {
            if foreground == background {
                continue;
            }
            let raw = contrast_ratio(foreground, background);
            if let Some(level) = WcagLevel::for_ratio(raw) {
                pairs.push(WcagPair {
                    foreground: to_hex(foreground),
                    background: to_hex(background),
                    ratio: (raw * 100.0).floor() / 100.0,
                    level,
                });
            }
        }
    }
    pairs
}
