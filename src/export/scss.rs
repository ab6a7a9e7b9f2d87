use crate::export::css::token_declarations;
use crate::types::DesignProfile;

pub fn scss_variables(profile: &DesignProfile) -> String {
    token_declarations(profile)
        .into_iter()
        .map(|(name, value)| format!("${name}: {value};"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::test_support::sample_profile;

    #[test]
    fn test_scss_variables() {
        let profile = sample_profile();
        let scss = scss_variables(&profile);
        let lines: Vec<&str> = scss.lines().collect();

        assert_eq!(lines[0], "$color-background-0: #FFFFFF;");
        assert!(lines.contains(&"$font-primary: \"Inter\", sans-serif;"));
        assert_eq!(lines.last(), Some(&"$spacing-3xl: 48px;"));
        assert_eq!(
            lines.len(),
            profile.colors.palette.len() + profile.typography.fonts.len() + profile.spacing.scale.len()
        );
        assert!(!scss.contains('{'));
        assert!(!scss.contains("radius"));
    }
}
