use indexmap::IndexMap;
use serde::Serialize;

use crate::types::DesignProfile;

#[derive(Serialize)]
struct TailwindConfig<'a> {
    theme: Theme<'a>,
}

#[derive(Serialize)]
struct Theme<'a> {
    extend: ThemeExtension<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ThemeExtension<'a> {
    colors: IndexMap<String, &'a str>,
    font_family: IndexMap<&'a str, [&'a str; 2]>,
    spacing: IndexMap<&'a str, String>,
    border_radius: IndexMap<&'static str, &'a str>,
}

pub fn tailwind_config(profile: &DesignProfile) -> Result<String, serde_json::Error> {
    let colors = profile
        .colors
        .palette
        .iter()
        .enumerate()
        .map(|(i, color)| (format!("{}-{i}", color.role.as_str()), color.hex.as_str()))
        .collect();

    let font_family = profile
        .typography
        .fonts
        .iter()
        .map(|font| (font.role.as_str(), [font.family.as_str(), font.fallback.as_str()]))
        .collect();

    let spacing = profile
        .spacing
        .scale
        .iter()
        .map(|step| (step.label.as_str(), format!("{}px", step.value)))
        .collect();

    let config = TailwindConfig {
        theme: Theme {
            extend: ThemeExtension {
                colors,
                font_family,
                spacing,
                border_radius: profile.effects.border_radius.entries().into_iter().collect(),
            },
        },
    };

    Ok(format!("module.exports = {}", serde_json::to_string_pretty(&config)?))
}
