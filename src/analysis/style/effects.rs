use indexmap::IndexMap;

use crate::types::{BorderRadiusMap, Effects, DEFAULT_TRANSITION};

/// Leading integer of a CSS length (`"8px"` -> 8, `"50%"` -> 50, `"0.5rem"` -> 0).
fn leading_int(value: &str) -> Option<i64> {
    let value = value.trim_start();
    let (sign, digits) = match value.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, value.strip_prefix('+').unwrap_or(value)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

/// Positive radii, deduplicated and ascending.
pub fn parse_radii(raw: &[String]) -> Vec<u32> {
    let mut radii: Vec<u32> = raw
        .iter()
        .filter_map(|r| leading_int(r))
        .filter(|&v| v > 0 && v <= u32::MAX as i64)
        .map(|v| v as u32)
        .collect();
    radii.sort_unstable();
    radii.dedup();
    radii
}

/// `sm`, `md` and `lg` sit at the 0th, 33rd and 66th percentile of the distinct radii.
pub fn border_radius_map(radii: &[u32]) -> BorderRadiusMap {
    let defaults = BorderRadiusMap::default();
    let at = |fraction: f64, fallback: &str| -> String {
        let index = (radii.len() as f64 * fraction).floor() as usize;
        radii
            .get(index)
            .map(|v| format!("{v}px"))
            .unwrap_or_else(|| fallback.to_string())
    };

    BorderRadiusMap {
        sm: at(0.0, &defaults.sm),
        md: at(0.33, &defaults.md),
        lg: at(0.66, &defaults.lg),
        full: BorderRadiusMap::FULL.to_string(),
    }
}

/// The `limit` most frequent distinct declarations, most frequent first.
pub fn top_shadows(shadows: &[String], limit: usize) -> Vec<String> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for shadow in shadows.iter().map(|s| s.trim()).filter(|s| !s.is_empty()) {
        *counts.entry(shadow).or_insert(0) += 1;
    }

    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    ranked.sort_by_key(|&(_, n)| std::cmp::Reverse(n));
    ranked
        .into_iter()
        .take(limit)
        .map(|(shadow, _)| shadow.to_string())
        .collect()
}

pub fn normalize_effects(border_radii: &[String], shadows: &[String], max_shadows: usize) -> Effects {
    Effects {
        border_radius: border_radius_map(&parse_radii(border_radii)),
        shadows: top_shadows(shadows, max_shadows),
        transitions: DEFAULT_TRANSITION.to_string(),
    }
}
