//! Accent palette and the CSS custom properties derived from it.

use platform_host::ColorMode;
use serde::{Deserialize, Serialize};

use crate::catalog::catalog;

/// Foreground drawn on accent surfaces, raw `H S% L%` form.
const ACCENT_FOREGROUND_RAW: &str = "0 0% 100%";
/// Foreground drawn on accent surfaces, `hsl()` form.
const ACCENT_FOREGROUND_HSL: &str = "hsl(0 0% 100%)";

/// Custom properties written by [`accent_style_properties`], in write order.
pub const ACCENT_PROPERTY_NAMES: [&str; 10] = [
    "--primary",
    "--primary-foreground",
    "--accent",
    "--accent-foreground",
    "--ring",
    "--color-primary",
    "--color-primary-foreground",
    "--color-accent",
    "--color-accent-foreground",
    "--color-ring",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Accent color with one `hsl()` value per concrete mode.
pub struct Accent {
    /// Palette-unique id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Value used in light mode.
    pub light: String,
    /// Value used in dark mode.
    pub dark: String,
}

impl Accent {
    /// Returns the `hsl()` value for `mode`.
    pub fn hsl(&self, mode: ColorMode) -> &str {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }
}

/// Returns the accent palette in declaration order.
pub fn accents() -> &'static [Accent] {
    &catalog().accents
}

/// Looks up an accent by id.
pub fn find_accent(accent_id: &str) -> Option<&'static Accent> {
    accents().iter().find(|accent| accent.id == accent_id)
}

/// Strips the `hsl(...)` wrapper, leaving the space-separated channels.
pub fn raw_hsl(value: &str) -> &str {
    let value = value.trim();
    value
        .strip_prefix("hsl(")
        .and_then(|inner| inner.strip_suffix(')'))
        .unwrap_or(value)
}

/// Builds the custom properties that re-tint primary, accent and ring tokens.
pub fn accent_style_properties(accent: &Accent, mode: ColorMode) -> Vec<(&'static str, String)> {
    let hsl = accent.hsl(mode);
    let raw = raw_hsl(hsl);
    let values = [
        raw,
        ACCENT_FOREGROUND_RAW,
        raw,
        ACCENT_FOREGROUND_RAW,
        raw,
        hsl,
        ACCENT_FOREGROUND_HSL,
        hsl,
        ACCENT_FOREGROUND_HSL,
        hsl,
    ];
    ACCENT_PROPERTY_NAMES
        .iter()
        .zip(values)
        .map(|(name, value)| (*name, value.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn palette_has_twelve_accents_led_by_green() {
        let ids = accents()
            .iter()
            .map(|accent| accent.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(ids.len(), 12);
        assert_eq!(ids.first(), Some(&"green"));
        assert_eq!(ids.last(), Some(&"slate"));
        assert!(find_accent("magenta").is_none());
    }

    #[test]
    fn raw_hsl_strips_wrapper() {
        assert_eq!(raw_hsl("hsl(142 70% 43%)"), "142 70% 43%");
        assert_eq!(raw_hsl("142 70% 43%"), "142 70% 43%");
    }

    #[test]
    fn style_properties_follow_mode() {
        let cyan = find_accent("cyan").expect("cyan accent");
        let properties = accent_style_properties(cyan, ColorMode::Dark);
        assert_eq!(
            properties,
            vec![
                ("--primary", "198 93% 60%".to_string()),
                ("--primary-foreground", "0 0% 100%".to_string()),
                ("--accent", "198 93% 60%".to_string()),
                ("--accent-foreground", "0 0% 100%".to_string()),
                ("--ring", "198 93% 60%".to_string()),
                ("--color-primary", "hsl(198 93% 60%)".to_string()),
                ("--color-primary-foreground", "hsl(0 0% 100%)".to_string()),
                ("--color-accent", "hsl(198 93% 60%)".to_string()),
                ("--color-accent-foreground", "hsl(0 0% 100%)".to_string()),
                ("--color-ring", "hsl(198 93% 60%)".to_string()),
            ]
        );
        assert_eq!(cyan.hsl(ColorMode::Light), "hsl(199 89% 48%)");
    }
}
