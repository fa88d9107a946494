use serde::{Deserialize, Serialize};

/// Color scheme chosen by the visitor.
///
/// `System` defers to the browser's `prefers-color-scheme`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
    System,
}

impl ThemePreference {
    /// Next preference in the toggle cycle: light → dark → system → light.
    pub fn next(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
            Self::System => Self::Light,
        }
    }

    /// Whether the dark variant should be rendered.
    pub fn is_dark(self, system_prefers_dark: bool) -> bool {
        match self {
            Self::Light => false,
            Self::Dark => true,
            Self::System => system_prefers_dark,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☀️",
            Self::Dark => "🌙",
            Self::System => "💻",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light mode",
            Self::Dark => "Dark mode",
            Self::System => "System mode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_cycle() {
        let start = ThemePreference::Light;
        assert_eq!(start.next(), ThemePreference::Dark);
        assert_eq!(start.next().next(), ThemePreference::System);
        assert_eq!(start.next().next().next(), ThemePreference::Light);
    }

    #[test]
    fn test_every_preference_returns_after_three_toggles() {
        for pref in [
            ThemePreference::Light,
            ThemePreference::Dark,
            ThemePreference::System,
        ] {
            assert_eq!(pref.next().next().next(), pref);
            assert_ne!(pref.next(), pref);
        }
    }

    #[test]
    fn test_default_is_light() {
        assert_eq!(ThemePreference::default(), ThemePreference::Light);
    }

    #[test]
    fn test_is_dark() {
        assert!(!ThemePreference::Light.is_dark(true));
        assert!(ThemePreference::Dark.is_dark(false));
        assert!(ThemePreference::System.is_dark(true));
        assert!(!ThemePreference::System.is_dark(false));
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&ThemePreference::System).unwrap();
        assert_eq!(json, "\"system\"");
        let pref: ThemePreference = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(pref, ThemePreference::Dark);
    }
}
