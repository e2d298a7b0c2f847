//! Theme-picker selection state: theme, light/dark toggle and accent.

use platform_host::ColorMode;
use serde::{Deserialize, Serialize};

use crate::{
    accent::find_accent,
    catalog::{find_theme, find_variant, ThemeMode},
    resolver::{ResolvedVariant, ThemeResolver},
    ThemeError,
};

/// Variant applied when the selected theme has no variant for the selected mode.
pub const FALLBACK_VARIANT_ID: &str = "default-light";
/// Theme selected before any user choice.
pub const DEFAULT_THEME_ID: &str = "default";
/// Accent selected before any user choice.
pub const DEFAULT_ACCENT_ID: &str = "green";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Selection held by a theme picker.
pub struct ThemeControls {
    theme_id: String,
    dark: bool,
    accent_id: String,
}

impl Default for ThemeControls {
    fn default() -> Self {
        Self {
            theme_id: DEFAULT_THEME_ID.to_string(),
            dark: false,
            accent_id: DEFAULT_ACCENT_ID.to_string(),
        }
    }
}

impl ThemeControls {
    /// Seeds controls from an external selection such as showcase toolbar globals.
    ///
    /// `variant` is a mode token; only `"dark"` selects dark mode.
    pub fn from_globals(theme_id: impl Into<String>, variant: &str) -> Self {
        Self {
            theme_id: theme_id.into(),
            dark: variant == ColorMode::Dark.as_str(),
            ..Self::default()
        }
    }

    /// Selected theme id.
    pub fn theme_id(&self) -> &str {
        &self.theme_id
    }

    /// Selected accent id.
    pub fn accent_id(&self) -> &str {
        &self.accent_id
    }

    /// Whether dark mode is selected.
    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// Selected concrete mode.
    pub fn mode(&self) -> ColorMode {
        ColorMode::from_prefers_dark(self.dark)
    }

    /// Variant of the selected theme matching the selected mode.
    pub fn current_variant(&self) -> &'static str {
        find_theme(&self.theme_id)
            .and_then(|theme| theme.variant_for_mode(ThemeMode::from(self.mode())))
            .map(|variant| variant.id.as_str())
            .unwrap_or(FALLBACK_VARIANT_ID)
    }

    /// `hsl()` value of the selected accent for the selected mode.
    pub fn accent_hsl(&self) -> Option<&'static str> {
        find_accent(&self.accent_id).map(|accent| accent.hsl(self.mode()))
    }

    /// Selects a theme.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::UnknownTheme`] and keeps the previous selection when `theme_id`
    /// is not in the catalog.
    pub fn set_theme(&mut self, theme_id: &str) -> Result<(), ThemeError> {
        if find_theme(theme_id).is_none() {
            return Err(ThemeError::UnknownTheme(theme_id.to_string()));
        }
        self.theme_id = theme_id.to_string();
        Ok(())
    }

    /// Selects light or dark mode.
    pub fn set_dark(&mut self, dark: bool) {
        self.dark = dark;
    }

    /// Flips between light and dark mode.
    pub fn toggle_dark(&mut self) {
        self.dark = !self.dark;
    }

    /// Selects an accent.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::UnknownAccent`] and keeps the previous selection when `accent_id`
    /// is not in the palette.
    pub fn set_accent(&mut self, accent_id: &str) -> Result<(), ThemeError> {
        if find_accent(accent_id).is_none() {
            return Err(ThemeError::UnknownAccent(accent_id.to_string()));
        }
        self.accent_id = accent_id.to_string();
        Ok(())
    }

    /// Mirrors a variant applied elsewhere, such as a toolbar pick or an OS-driven repaint.
    ///
    /// The theme follows the requested variant's owning theme and the dark flag follows the
    /// applied concrete mode. The accent is kept.
    pub fn follow(&mut self, resolved: &ResolvedVariant) {
        if let Some((theme, _)) = find_variant(&resolved.requested_id) {
            self.theme_id = theme.id.clone();
        }
        self.dark = resolved.mode.is_dark();
    }

    /// Applies only the selected accent, leaving the active variant and any OS-preference
    /// subscription in place.
    ///
    /// # Errors
    ///
    /// Propagates resolver lookup failures.
    pub fn apply_accent(&self, resolver: &ThemeResolver) -> Result<(), ThemeError> {
        resolver.apply_accent(&self.accent_id)
    }

    /// Applies the selected variant, then the selected accent.
    ///
    /// # Errors
    ///
    /// Propagates resolver lookup failures.
    pub fn apply(&self, resolver: &ThemeResolver) -> Result<ResolvedVariant, ThemeError> {
        let resolved = resolver.apply_variant(self.current_variant())?;
        resolver.apply_accent(&self.accent_id)?;
        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use platform_host::{MemoryColorSchemeSource, MemoryThemeDocument, ThemeDocument, ThemeHost};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_to_default_light_with_green() {
        let controls = ThemeControls::default();
        assert_eq!(controls.current_variant(), "default-light");
        assert_eq!(controls.accent_hsl(), Some("hsl(142 70% 43%)"));
    }

    #[test]
    fn globals_seed_theme_and_mode() {
        let controls = ThemeControls::from_globals("tailwind", "dark");
        assert_eq!(controls.current_variant(), "tailwind-dark");
        assert!(controls.is_dark());

        let controls = ThemeControls::from_globals("vite", "system");
        assert_eq!(controls.current_variant(), "vite-light");
    }

    #[test]
    fn unknown_theme_from_globals_falls_back() {
        let controls = ThemeControls::from_globals("solarized", "dark");
        assert_eq!(controls.current_variant(), FALLBACK_VARIANT_ID);
    }

    #[test]
    fn setters_validate_against_catalog() {
        let mut controls = ThemeControls::default();
        assert_eq!(
            controls.set_theme("solarized"),
            Err(ThemeError::UnknownTheme("solarized".to_string()))
        );
        assert_eq!(controls.theme_id(), "default");

        controls.set_theme("vite").expect("vite theme");
        controls.toggle_dark();
        controls.set_accent("indigo").expect("indigo accent");
        assert_eq!(controls.current_variant(), "vite-dark");
        assert_eq!(controls.accent_hsl(), Some("hsl(235 85% 75%)"));
        assert!(controls.set_accent("chartreuse").is_err());
        assert_eq!(controls.accent_id(), "indigo");
    }

    #[test]
    fn follow_adopts_externally_applied_variant() {
        let resolver = ThemeResolver::new(ThemeHost::memory(
            MemoryThemeDocument::default(),
            MemoryColorSchemeSource::new(true),
        ));
        let mut controls = ThemeControls::default();
        controls.set_accent("teal").expect("teal accent");

        let resolved = resolver.apply_variant("vite-system").expect("apply system");
        controls.follow(&resolved);
        assert_eq!(controls.theme_id(), "vite");
        assert!(controls.is_dark());
        assert_eq!(controls.accent_id(), "teal");
        assert_eq!(controls.current_variant(), "vite-dark");
    }

    #[test]
    fn accent_change_keeps_system_variant_following_os() {
        let document = MemoryThemeDocument::default();
        let source = MemoryColorSchemeSource::new(false);
        let resolver = ThemeResolver::new(ThemeHost::memory(document.clone(), source.clone()));
        let mut controls = ThemeControls::default();

        let resolved = resolver.apply_variant("vite-system").expect("apply system");
        controls.follow(&resolved);
        controls.set_accent("pink").expect("pink accent");
        controls.apply_accent(&resolver).expect("apply accent");

        assert_eq!(source.active_subscriptions(), 1);
        assert_eq!(
            resolver.current().map(|resolved| resolved.requested_id),
            Some("vite-system".to_string())
        );
        source.set_prefers_dark(true);
        assert_eq!(document.marker().as_deref(), Some("vite-dark"));
        assert_eq!(resolver.active_accent(), Some("pink"));
    }

    #[test]
    fn apply_writes_variant_and_accent() {
        let document = MemoryThemeDocument::default();
        let resolver = ThemeResolver::new(ThemeHost::memory(
            document.clone(),
            MemoryColorSchemeSource::default(),
        ));
        let mut controls = ThemeControls::default();
        controls.set_dark(true);
        controls.set_accent("red").expect("red accent");

        let resolved = controls.apply(&resolver).expect("apply controls");
        assert_eq!(resolved.concrete_id, "default-dark");
        assert_eq!(
            document.style_property("--color-accent").as_deref(),
            Some("hsl(0 84% 70%)")
        );
    }
}
