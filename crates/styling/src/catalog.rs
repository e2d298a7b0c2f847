//! Built-in theme catalog and read-only lookup helpers.

use std::sync::OnceLock;

use platform_host::ColorMode;
use serde::{Deserialize, Serialize};

use crate::accent::Accent;

include!(concat!(env!("OUT_DIR"), "/theme_catalog_generated.rs"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Declared presentation mode of a [`ThemeVariant`].
pub enum ThemeMode {
    /// Always light.
    Light,
    /// Always dark.
    Dark,
    /// Follows the OS light/dark preference.
    System,
}

impl ThemeMode {
    /// Returns the stable token used in variant ids.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Icon used when a variant does not declare one.
    pub const fn default_icon(self) -> &'static str {
        match self {
            Self::Light => "sun",
            Self::Dark => "moon",
            Self::System => "circle",
        }
    }
}

impl From<ColorMode> for ThemeMode {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Light => Self::Light,
            ColorMode::Dark => Self::Dark,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One concrete presentation mode within a [`Theme`].
pub struct ThemeVariant {
    /// Catalog-unique id, `{theme}-{mode}`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Declared mode.
    pub mode: ThemeMode,
    /// Optional icon tag.
    #[serde(default)]
    pub icon: Option<String>,
}

impl ThemeVariant {
    /// Returns the variant id with its mode suffix stripped.
    pub fn theme_base(&self) -> &str {
        self.id
            .strip_suffix(self.mode.as_str())
            .and_then(|base| base.strip_suffix('-'))
            .unwrap_or(&self.id)
    }

    /// Returns the icon tag, falling back to the mode's default icon.
    pub fn icon_or_default(&self) -> &str {
        self.icon
            .as_deref()
            .unwrap_or_else(|| self.mode.default_icon())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Named collection of variants.
pub struct Theme {
    /// Catalog-unique theme id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short description shown in pickers.
    pub description: String,
    /// Variants in declaration order.
    pub variants: Vec<ThemeVariant>,
}

impl Theme {
    /// Returns the first variant declaring `mode`.
    pub fn variant_for_mode(&self, mode: ThemeMode) -> Option<&ThemeVariant> {
        self.variants.iter().find(|variant| variant.mode == mode)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ThemeCatalog {
    pub(crate) themes: Vec<Theme>,
    pub(crate) accents: Vec<Accent>,
}

pub(crate) fn catalog() -> &'static ThemeCatalog {
    static CATALOG: OnceLock<ThemeCatalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        serde_json::from_str(THEME_CATALOG_JSON).expect("generated theme catalog should parse")
    })
}

/// Returns the generated theme catalog JSON payload.
pub fn theme_catalog_json() -> &'static str {
    THEME_CATALOG_JSON
}

/// Returns all themes in catalog order.
pub fn themes() -> &'static [Theme] {
    &catalog().themes
}

/// Flattens every theme's variants, theme order first, then variant order.
pub fn list_variants() -> Vec<&'static ThemeVariant> {
    themes()
        .iter()
        .flat_map(|theme| theme.variants.iter())
        .collect()
}

/// Looks up a theme by id.
pub fn find_theme(theme_id: &str) -> Option<&'static Theme> {
    themes().iter().find(|theme| theme.id == theme_id)
}

/// Looks up a variant by id together with its owning theme.
pub fn find_variant(variant_id: &str) -> Option<(&'static Theme, &'static ThemeVariant)> {
    themes().iter().find_map(|theme| {
        theme
            .variants
            .iter()
            .find(|variant| variant.id == variant_id)
            .map(|variant| (theme, variant))
    })
}

/// Returns the first variant of the first theme, used when nothing has been selected.
pub fn default_variant() -> &'static ThemeVariant {
    themes()
        .first()
        .and_then(|theme| theme.variants.first())
        .expect("theme catalog is validated non-empty at build time")
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn lists_nine_variants_in_catalog_order() {
        let ids = list_variants()
            .into_iter()
            .map(|variant| variant.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            ids,
            vec![
                "default-light",
                "default-dark",
                "default-system",
                "tailwind-light",
                "tailwind-dark",
                "tailwind-system",
                "vite-light",
                "vite-dark",
                "vite-system",
            ]
        );
    }

    #[test]
    fn variant_ids_are_unique() {
        let variants = list_variants();
        let unique = variants
            .iter()
            .map(|variant| variant.id.as_str())
            .collect::<HashSet<_>>();
        assert_eq!(unique.len(), variants.len());
    }

    #[test]
    fn find_variant_returns_matching_id_and_owner() {
        for variant in list_variants() {
            let (theme, found) = find_variant(&variant.id).expect("catalog variant resolves");
            assert_eq!(found.id, variant.id);
            assert_eq!(theme.id, found.theme_base());
        }
        assert!(find_variant("default").is_none());
        assert!(find_variant("solarized-dark").is_none());
        assert!(find_variant("").is_none());
    }

    #[test]
    fn find_theme_and_default_variant() {
        let theme = find_theme("vite").expect("vite theme");
        assert_eq!(theme.name, "Vite");
        assert_eq!(
            theme.variant_for_mode(ThemeMode::Dark).map(|v| v.id.as_str()),
            Some("vite-dark")
        );
        assert!(find_theme("vite-dark").is_none());
        assert_eq!(default_variant().id, "default-light");
    }

    #[test]
    fn theme_base_strips_only_the_mode_suffix() {
        let variant = ThemeVariant {
            id: "dark-system".to_string(),
            name: "Dark System".to_string(),
            mode: ThemeMode::System,
            icon: None,
        };
        assert_eq!(variant.theme_base(), "dark");
        assert_eq!(variant.icon_or_default(), "circle");
    }

    #[test]
    fn catalog_json_is_exposed() {
        assert!(theme_catalog_json().contains("\"tailwind-system\""));
    }
}
