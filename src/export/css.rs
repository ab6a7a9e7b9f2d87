use crate::types::DesignProfile;

/// Escapes a family name for use inside a double-quoted CSS string.
fn quote_escape(family: &str) -> String {
    let mut escaped = String::with_capacity(family.len());
    for c in family.chars() {
        match c {
            '"' | '\\' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '\n' | '\r' => escaped.push(' '),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// `--name: value;` declarations shared by the CSS and SCSS encoders, in
/// palette, font and spacing order.
pub(crate) fn token_declarations(profile: &DesignProfile) -> Vec<(String, String)> {
    let colors = profile
        .colors
        .palette
        .iter()
        .enumerate()
        .map(|(i, color)| (format!("color-{}-{i}", color.role.as_str()), color.hex.clone()));

    let fonts = profile.typography.fonts.iter().map(|font| {
        (
            format!("font-{}", font.role.as_str()),
            format!("\"{}\", {}", quote_escape(&font.family), font.fallback.as_str()),
        )
    });

    let spacing = profile
        .spacing
        .scale
        .iter()
        .map(|step| (format!("spacing-{}", step.label), format!("{}px", step.value)));

    colors.chain(fonts).chain(spacing).collect()
}

pub fn css_variables(profile: &DesignProfile, root_selector: &str) -> String {
    let mut lines = vec![format!("{root_selector} {{")];

    for (name, value) in token_declarations(profile) {
        lines.push(format!("  --{name}: {value};"));
    }
    for (size, value) in profile.effects.border_radius.entries() {
        lines.push(format!("  --radius-{size}: {value};"));
    }

    lines.push("}".to_string());
    lines.join("\n")
}
