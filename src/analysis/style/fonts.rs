use indexmap::IndexMap;

use crate::types::{FontEntry, FontFallback, FontRole};

/// Primary font is the most prominent family. The runner-up is kept as `secondary`
/// (or `code` when monospace) only if its weight exceeds `secondary_ratio` of the primary's.
pub fn normalize_fonts(fonts: &IndexMap<String, f64>, secondary_ratio: f64) -> Vec<FontEntry> {
    let mut ranked: Vec<(&String, f64)> = fonts.iter().map(|(family, w)| (family, *w)).collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    let mut entries = Vec::with_capacity(2);
    let Some(&(primary, primary_weight)) = ranked.first() else {
        return entries;
    };

    entries.push(FontEntry {
        family: primary.clone(),
        role: FontRole::Primary,
        fallback: FontFallback::classify(primary),
        weight: primary_weight,
    });

    if let Some(&(secondary, secondary_weight)) = ranked.get(1) {
        if secondary_weight > primary_weight * secondary_ratio {
            let fallback = FontFallback::classify(secondary);
            let role = if fallback == FontFallback::Monospace {
                FontRole::Code
            } else {
                FontRole::Secondary
            };
            entries.push(FontEntry {
                family: secondary.clone(),
                role,
                fallback,
                weight: secondary_weight,
            });
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn histogram(pairs: &[(&str, f64)]) -> IndexMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_primary_and_code_font() {
        let fonts = histogram(&[("Georgia", 5000.0), ("Inter", 500000.0), ("JetBrains Mono", 30000.0)]);
        let entries = normalize_fonts(&fonts, 0.05);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].family, "Inter");
        assert_eq!(entries[0].role, FontRole::Primary);
        assert_eq!(entries[0].fallback, FontFallback::SansSerif);
        assert_eq!(entries[1].family, "JetBrains Mono");
        assert_eq!(entries[1].role, FontRole::Code);
        assert_eq!(entries[1].fallback, FontFallback::Monospace);
        assert!(entries.iter().all(|f| f.family != "Georgia"));
    }

    #[test]
    fn test_minor_secondary_is_dropped() {
        let fonts = histogram(&[("Inter", 1000.0), ("Lora", 40.0)]);
        assert_eq!(normalize_fonts(&fonts, 0.05).len(), 1);

        let fonts = histogram(&[("Inter", 1000.0), ("Noto Serif", 400.0)]);
        let entries = normalize_fonts(&fonts, 0.05);
        assert_eq!(entries[1].role, FontRole::Secondary);
        assert_eq!(entries[1].fallback, FontFallback::Serif);
    }

    #[test]
    fn test_empty_histogram() {
        assert!(normalize_fonts(&IndexMap::new(), 0.05).is_empty());
    }
}
