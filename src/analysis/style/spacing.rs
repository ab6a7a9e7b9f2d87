use indexmap::IndexMap;

use crate::config::StyleConfig;
use crate::types::{GridConfig, Spacing, DEFAULT_BASE_UNIT, DEFAULT_GUTTER, DEFAULT_MARGIN, GRID_COLUMNS};

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

/// GCD of the samples in `(0, max_sample]`, snapped to 4 (GCD up to 6) or 8 otherwise.
pub fn detect_base_unit(samples: &[i64], max_sample: u32) -> u32 {
    let divisor = samples
        .iter()
        .filter(|&&v| v > 0 && v <= max_sample as i64)
        .map(|&v| v as u64)
        .reduce(gcd);

    match divisor {
        None => DEFAULT_BASE_UNIT,
        Some(0..=6) => 4,
        Some(_) => 8,
    }
}

/// Most frequent value in `range`; ties go to the value seen first.
pub fn most_common(samples: &[i64], range: std::ops::RangeInclusive<i64>) -> Option<i64> {
    let mut counts: IndexMap<i64, usize> = IndexMap::new();
    for &v in samples.iter().filter(|v| range.contains(*v)) {
        *counts.entry(v).or_insert(0) += 1;
    }

    let mut best: Option<(i64, usize)> = None;
    for (value, count) in counts {
        if best.map_or(true, |(_, c)| count > c) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}

pub fn normalize_spacing(samples: &[i64], config: &StyleConfig) -> Spacing {
    let base_unit = detect_base_unit(samples, config.max_base_unit_sample);
    let gutter = most_common(samples, 8..=32).map_or(DEFAULT_GUTTER, |v| v as u32);
    let margin = most_common(samples, 16..=64).map_or(DEFAULT_MARGIN, |v| v as u32);

    Spacing {
        base_unit,
        scale: Spacing::ladder(base_unit, config.max_spacing_value, config.max_spacing_steps),
        grid: GridConfig {
            columns: GRID_COLUMNS,
            gutter,
            margin,
        },
    }
}
