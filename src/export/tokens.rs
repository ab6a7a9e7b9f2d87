use indexmap::IndexMap;
use serde::Serialize;

use crate::types::DesignProfile;

/// A Tokens Studio style `{ "$value", "$type" }` leaf
#[derive(Debug, Serialize)]
struct Token {
    #[serde(rename = "$value")]
    value: String,
    #[serde(rename = "$type")]
    kind: &'static str,
}

impl Token {
    fn new(value: impl Into<String>, kind: &'static str) -> Self {
        Self {
            value: value.into(),
            kind,
        }
    }
}

#[derive(Serialize)]
struct TokenDocument {
    global: TokenGroups,
}

#[derive(Serialize)]
struct TokenGroups {
    colors: IndexMap<String, Token>,
    typography: IndexMap<String, Token>,
    spacing: IndexMap<String, Token>,
}

/// `prefix` followed by `label` with its first character upper-cased.
fn prefixed_key(prefix: &str, label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => format!("{prefix}{}{}", first.to_uppercase(), chars.as_str()),
        None => prefix.to_string(),
    }
}

/// Colors are keyed by role, so a later entry replaces an earlier one of the same role.
pub fn design_tokens(profile: &DesignProfile) -> Result<String, serde_json::Error> {
    let mut colors = IndexMap::new();
    for color in &profile.colors.palette {
        colors.insert(color.role.as_str().to_string(), Token::new(&color.hex, "color"));
    }

    let mut typography = IndexMap::new();
    for font in &profile.typography.fonts {
        typography.insert(
            prefixed_key("font", font.role.as_str()),
            Token::new(&font.family, "fontFamilies"),
        );
    }
    for step in &profile.typography.scale {
        typography.insert(prefixed_key("size", &step.label), Token::new(&step.size, "fontSizes"));
    }

    let spacing = profile
        .spacing
        .scale
        .iter()
        .map(|step| (step.label.clone(), Token::new(format!("{}px", step.value), "spacing")))
        .collect();

    let document = TokenDocument {
        global: TokenGroups {
            colors,
            typography,
            spacing,
        },
    };
    serde_json::to_string_pretty(&document)
}
