//! Variant resolution: turns a selected variant id into document-root presentation state.
//!
//! Every successful apply leaves the root with exactly one `theme-{variant}` marker class, the
//! `data-theme` attribute set to the *concrete* variant id, and exactly one of the `light` /
//! `dark` classes. `system` variants are resolved against the host preference and followed
//! through [`SystemPreferenceWatcher`] until another variant is applied.

use std::{cell::RefCell, rc::Rc};

use leptos::logging;
use platform_host::{ColorMode, ColorSchemeSource, ThemeDocument, ThemeHost};
use serde::{Deserialize, Serialize};

use crate::{
    accent::{accent_style_properties, find_accent, Accent, ACCENT_PROPERTY_NAMES},
    catalog::{find_variant, list_variants, ThemeMode},
    watcher::{SubscriptionSlot, SystemPreferenceWatcher},
    ThemeError,
};

/// Prefix of the per-variant marker class.
pub const THEME_CLASS_PREFIX: &str = "theme-";

/// Returns the marker class for a concrete variant id.
pub fn theme_class(variant_id: &str) -> String {
    format!("{THEME_CLASS_PREFIX}{variant_id}")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Outcome of resolving a variant selection.
pub struct ResolvedVariant {
    /// Variant id the caller selected (may be a `system` variant).
    pub requested_id: String,
    /// Concrete `{theme}-{light|dark}` id written to the marker attribute.
    pub concrete_id: String,
    /// Concrete mode applied to the root.
    pub mode: ColorMode,
    /// Whether the selection follows the OS preference.
    pub follows_system: bool,
}

/// Callback told about every OS-driven repaint.
pub type ResolvedObserver = Rc<dyn Fn(&ResolvedVariant)>;

#[derive(Default)]
pub(crate) struct AppliedState {
    resolved: Option<ResolvedVariant>,
    accent: Option<&'static Accent>,
    observer: Option<ResolvedObserver>,
}

impl AppliedState {
    pub(crate) fn observer(&self) -> Option<ResolvedObserver> {
        self.observer.clone()
    }

    pub(crate) fn set_observer(&mut self, observer: Option<ResolvedObserver>) {
        self.observer = observer;
    }
}

impl std::fmt::Debug for AppliedState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppliedState")
            .field("resolved", &self.resolved)
            .field("accent", &self.accent.map(|accent| accent.id.as_str()))
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

pub(crate) type SharedAppliedState = Rc<RefCell<AppliedState>>;

pub(crate) fn system_resolution(
    theme_base: &str,
    requested_id: &str,
    mode: ColorMode,
) -> ResolvedVariant {
    ResolvedVariant {
        requested_id: requested_id.to_string(),
        concrete_id: format!("{theme_base}-{}", mode.as_str()),
        mode,
        follows_system: true,
    }
}

/// Writes `resolved` to the document and records it. Used by explicit applies and by OS
/// preference notifications.
pub(crate) fn paint(
    document: &dyn ThemeDocument,
    state: &mut AppliedState,
    resolved: ResolvedVariant,
) {
    for variant in list_variants() {
        document.remove_class(&theme_class(&variant.id));
    }
    document.set_marker(&resolved.concrete_id);
    document.add_class(&theme_class(&resolved.concrete_id));
    document.set_mode_class(resolved.mode);

    if let Some(accent) = state.accent {
        write_accent(document, accent, resolved.mode);
    }
    state.resolved = Some(resolved);
}

fn write_accent(document: &dyn ThemeDocument, accent: &Accent, mode: ColorMode) {
    for (name, value) in accent_style_properties(accent, mode) {
        document.set_style_property(name, &value);
    }
}

/// Applies theme variants and accents to a host document.
pub struct ThemeResolver {
    document: Rc<dyn ThemeDocument>,
    color_scheme: Rc<dyn ColorSchemeSource>,
    watcher: SystemPreferenceWatcher,
    state: SharedAppliedState,
}

impl ThemeResolver {
    /// Creates a resolver over a host bundle with its own subscription slot.
    pub fn new(host: ThemeHost) -> Self {
        Self::with_slot(host, Rc::default())
    }

    /// Creates a resolver that stores its OS-preference subscription in `slot`.
    pub fn with_slot(host: ThemeHost, slot: Rc<SubscriptionSlot>) -> Self {
        let state = SharedAppliedState::default();
        let watcher = SystemPreferenceWatcher::new(
            host.document.clone(),
            host.color_scheme.clone(),
            slot,
            state.clone(),
        );
        Self {
            document: host.document,
            color_scheme: host.color_scheme,
            watcher,
            state,
        }
    }

    /// Applies a catalog variant.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::UnknownVariant`] when `variant_id` is not in the catalog. The
    /// document and any active subscription are left untouched in that case.
    pub fn apply_variant(&self, variant_id: &str) -> Result<ResolvedVariant, ThemeError> {
        let Some((_, variant)) = find_variant(variant_id) else {
            logging::warn!("theme variant `{variant_id}` not found");
            return Err(ThemeError::UnknownVariant(variant_id.to_string()));
        };

        self.watcher.remove();

        let resolved = match variant.mode {
            ThemeMode::Light => fixed_resolution(&variant.id, ColorMode::Light),
            ThemeMode::Dark => fixed_resolution(&variant.id, ColorMode::Dark),
            ThemeMode::System => {
                let mode = match self.color_scheme.prefers_dark() {
                    Some(prefers_dark) => ColorMode::from_prefers_dark(prefers_dark),
                    None => self.current_mode().unwrap_or(ColorMode::Light),
                };
                system_resolution(variant.theme_base(), &variant.id, mode)
            }
        };

        paint(
            self.document.as_ref(),
            &mut self.state.borrow_mut(),
            resolved.clone(),
        );

        if resolved.follows_system {
            self.watcher.install(variant.theme_base(), &variant.id);
        }
        Ok(resolved)
    }

    /// Re-tints primary/accent/ring tokens with a palette accent for the current mode.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::UnknownAccent`] when `accent_id` is not in the palette.
    pub fn apply_accent(&self, accent_id: &str) -> Result<(), ThemeError> {
        let Some(accent) = find_accent(accent_id) else {
            logging::warn!("accent `{accent_id}` not found");
            return Err(ThemeError::UnknownAccent(accent_id.to_string()));
        };
        let mode = self.current_mode().unwrap_or(ColorMode::Light);
        write_accent(self.document.as_ref(), accent, mode);
        self.state.borrow_mut().accent = Some(accent);
        Ok(())
    }

    /// Removes accent custom properties, restoring the theme's own tokens.
    pub fn clear_accent(&self) {
        for name in ACCENT_PROPERTY_NAMES {
            self.document.remove_style_property(name);
        }
        self.state.borrow_mut().accent = None;
    }

    /// Registers `observer` to receive the new resolution after each OS-driven repaint.
    ///
    /// Explicit applies return their result directly and do not notify. Replaces any previous
    /// observer.
    pub fn set_observer(&self, observer: impl Fn(&ResolvedVariant) + 'static) {
        self.state
            .borrow_mut()
            .set_observer(Some(Rc::new(observer)));
    }

    /// Drops the registered observer.
    pub fn clear_observer(&self) {
        self.state.borrow_mut().set_observer(None);
    }

    /// Stops following the OS preference without changing the document.
    pub fn detach(&self) {
        self.watcher.remove();
    }

    /// Returns the last resolved selection, including OS-driven updates.
    pub fn current(&self) -> Option<ResolvedVariant> {
        self.state.borrow().resolved.clone()
    }

    /// Returns the concrete mode currently applied.
    pub fn current_mode(&self) -> Option<ColorMode> {
        self.state
            .borrow()
            .resolved
            .as_ref()
            .map(|resolved| resolved.mode)
    }

    /// Returns the active accent id.
    pub fn active_accent(&self) -> Option<&'static str> {
        self.state.borrow().accent.map(|accent| accent.id.as_str())
    }

    /// Returns the OS-preference watcher.
    pub fn watcher(&self) -> &SystemPreferenceWatcher {
        &self.watcher
    }
}

impl Drop for ThemeResolver {
    fn drop(&mut self) {
        self.watcher.remove();
    }
}

impl std::fmt::Debug for ThemeResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeResolver")
            .field("state", &self.state)
            .field("watcher", &self.watcher)
            .finish_non_exhaustive()
    }
}

fn fixed_resolution(variant_id: &str, mode: ColorMode) -> ResolvedVariant {
    ResolvedVariant {
        requested_id: variant_id.to_string(),
        concrete_id: variant_id.to_string(),
        mode,
        follows_system: false,
    }
}

#[cfg(test)]
mod tests {
    use platform_host::{MemoryColorSchemeSource, MemoryThemeDocument};
    use pretty_assertions::assert_eq;

    use super::*;

    struct Harness {
        document: MemoryThemeDocument,
        source: MemoryColorSchemeSource,
        resolver: ThemeResolver,
    }

    fn harness(prefers_dark: bool) -> Harness {
        let document = MemoryThemeDocument::default();
        let source = MemoryColorSchemeSource::new(prefers_dark);
        let resolver = ThemeResolver::new(ThemeHost::memory(document.clone(), source.clone()));
        Harness {
            document,
            source,
            resolver,
        }
    }

    fn assert_single_mode_class(document: &MemoryThemeDocument) {
        assert_ne!(document.has_class("light"), document.has_class("dark"));
    }

    fn theme_classes(document: &MemoryThemeDocument) -> Vec<String> {
        document
            .classes()
            .into_iter()
            .filter(|class| class.starts_with(THEME_CLASS_PREFIX))
            .collect()
    }

    #[test]
    fn applies_fixed_variant() {
        let h = harness(true);
        let resolved = h.resolver.apply_variant("vite-light").expect("known variant");

        assert_eq!(
            resolved,
            ResolvedVariant {
                requested_id: "vite-light".to_string(),
                concrete_id: "vite-light".to_string(),
                mode: ColorMode::Light,
                follows_system: false,
            }
        );
        assert_eq!(h.document.marker().as_deref(), Some("vite-light"));
        assert_eq!(
            h.document.classes(),
            vec!["light".to_string(), "theme-vite-light".to_string()]
        );
        assert_eq!(h.source.active_subscriptions(), 0);
    }

    #[test]
    fn applying_twice_is_idempotent() {
        let h = harness(false);
        h.resolver.apply_variant("default-light").expect("apply");
        let once = (h.document.marker(), h.document.classes());
        h.resolver.apply_variant("default-light").expect("apply again");
        assert_eq!((h.document.marker(), h.document.classes()), once);
    }

    #[test]
    fn unknown_variant_leaves_document_unchanged() {
        let h = harness(false);
        h.resolver.apply_variant("tailwind-dark").expect("apply");
        let before = (h.document.marker(), h.document.classes());

        let err = h.resolver.apply_variant("tailwind-sepia").unwrap_err();
        assert_eq!(err, ThemeError::UnknownVariant("tailwind-sepia".to_string()));
        assert_eq!((h.document.marker(), h.document.classes()), before);
        assert_eq!(
            h.resolver.current().map(|resolved| resolved.concrete_id),
            Some("tailwind-dark".to_string())
        );
    }

    #[test]
    fn unknown_variant_keeps_active_system_subscription() {
        let h = harness(false);
        h.resolver.apply_variant("default-system").expect("apply");
        assert!(h.resolver.apply_variant("nope").is_err());
        assert_eq!(h.source.active_subscriptions(), 1);
    }

    #[test]
    fn exactly_one_mode_class_after_every_apply() {
        let h = harness(true);
        for variant in list_variants() {
            h.resolver.apply_variant(&variant.id).expect("catalog variant");
            assert_single_mode_class(&h.document);
            assert_eq!(theme_classes(&h.document).len(), 1);
        }
    }

    #[test]
    fn system_variant_resolves_against_os_preference() {
        let h = harness(true);
        let resolved = h.resolver.apply_variant("default-system").expect("apply");

        assert_eq!(resolved.concrete_id, "default-dark");
        assert!(resolved.follows_system);
        assert_eq!(h.document.marker().as_deref(), Some("default-dark"));
        assert!(h.document.has_class("dark"));
        assert!(!h.document.has_class("light"));
        assert_eq!(h.source.active_subscriptions(), 1);
    }

    #[test]
    fn os_change_reapplies_without_another_call() {
        let h = harness(false);
        h.resolver.apply_variant("vite-system").expect("apply");
        assert_eq!(h.document.marker().as_deref(), Some("vite-light"));

        h.source.set_prefers_dark(true);
        assert_eq!(h.document.marker().as_deref(), Some("vite-dark"));
        assert_eq!(theme_classes(&h.document), vec!["theme-vite-dark".to_string()]);
        assert_single_mode_class(&h.document);
        assert_eq!(
            h.resolver.current(),
            Some(ResolvedVariant {
                requested_id: "vite-system".to_string(),
                concrete_id: "vite-dark".to_string(),
                mode: ColorMode::Dark,
                follows_system: true,
            })
        );
    }

    #[test]
    fn leaving_system_mode_removes_listener() {
        let h = harness(false);
        h.resolver.apply_variant("default-system").expect("apply system");
        assert_eq!(h.source.active_subscriptions(), 1);

        h.resolver.apply_variant("default-dark").expect("apply dark");
        assert_eq!(h.source.active_subscriptions(), 0);
        assert!(!h.resolver.watcher().is_installed());

        h.source.set_prefers_dark(true);
        h.source.set_prefers_dark(false);
        assert_eq!(h.document.marker().as_deref(), Some("default-dark"));
    }

    #[test]
    fn switching_system_themes_keeps_one_listener() {
        let h = harness(false);
        h.resolver.apply_variant("default-system").expect("apply default");
        h.resolver.apply_variant("tailwind-system").expect("apply tailwind");

        assert_eq!(h.source.active_subscriptions(), 1);
        assert_eq!(h.resolver.watcher().watched_theme().as_deref(), Some("tailwind"));

        h.source.set_prefers_dark(true);
        assert_eq!(h.document.marker().as_deref(), Some("tailwind-dark"));
    }

    #[test]
    fn injected_slot_tracks_subscription() {
        let document = MemoryThemeDocument::default();
        let source = MemoryColorSchemeSource::new(false);
        let slot = Rc::new(SubscriptionSlot::default());
        let resolver = ThemeResolver::with_slot(
            ThemeHost::memory(document, source.clone()),
            slot.clone(),
        );

        resolver.apply_variant("vite-system").expect("apply");
        assert_eq!(slot.theme_base().as_deref(), Some("vite"));

        drop(resolver);
        assert!(!slot.is_occupied());
        assert_eq!(source.active_subscriptions(), 0);
    }

    #[test]
    fn shared_slot_keeps_one_listener_across_resolvers() {
        let slot = Rc::new(SubscriptionSlot::default());
        let first_source = MemoryColorSchemeSource::new(false);
        let second_source = MemoryColorSchemeSource::new(false);
        let first_document = MemoryThemeDocument::default();
        let first = ThemeResolver::with_slot(
            ThemeHost::memory(first_document.clone(), first_source.clone()),
            slot.clone(),
        );
        let second = ThemeResolver::with_slot(
            ThemeHost::memory(MemoryThemeDocument::default(), second_source.clone()),
            slot.clone(),
        );

        first.apply_variant("default-system").expect("apply first");
        second.apply_variant("tailwind-system").expect("apply second");
        assert_eq!(first_source.active_subscriptions(), 0);
        assert_eq!(second_source.active_subscriptions(), 1);
        assert_eq!(slot.theme_base().as_deref(), Some("tailwind"));

        first_source.set_prefers_dark(true);
        assert_eq!(first_document.marker().as_deref(), Some("default-light"));
    }

    #[test]
    fn observer_sees_os_driven_repaints_only() {
        let h = harness(false);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        h.resolver.set_observer(move |resolved| sink.borrow_mut().push(resolved.clone()));

        h.resolver.apply_variant("default-system").expect("apply");
        assert!(seen.borrow().is_empty());

        h.source.set_prefers_dark(true);
        let latest = seen.borrow().last().cloned().expect("repaint reported");
        assert_eq!(latest.concrete_id, "default-dark");
        assert_eq!(Some(latest), h.resolver.current());

        h.resolver.clear_observer();
        h.source.set_prefers_dark(false);
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn system_variant_without_preference_api_keeps_last_mode() {
        let document = MemoryThemeDocument::default();
        let source = MemoryColorSchemeSource::unsupported();
        let resolver = ThemeResolver::new(ThemeHost::memory(document.clone(), source.clone()));

        resolver.apply_variant("default-dark").expect("apply dark");
        let resolved = resolver.apply_variant("tailwind-system").expect("apply system");

        assert_eq!(resolved.concrete_id, "tailwind-dark");
        assert!(document.has_class("dark"));
        assert!(!resolver.watcher().is_installed());
        assert_eq!(source.active_subscriptions(), 0);
    }

    #[test]
    fn system_variant_without_history_falls_back_to_light() {
        let resolver = ThemeResolver::new(ThemeHost::noop());
        let resolved = resolver.apply_variant("vite-system").expect("apply");
        assert_eq!(resolved.concrete_id, "vite-light");
        assert_eq!(resolved.mode, ColorMode::Light);
    }

    #[test]
    fn accent_follows_mode_changes() {
        let h = harness(false);
        h.resolver.apply_variant("default-system").expect("apply");
        h.resolver.apply_accent("blue").expect("known accent");
        assert_eq!(
            h.document.style_property("--color-primary").as_deref(),
            Some("hsl(217 91% 60%)")
        );
        assert_eq!(h.resolver.active_accent(), Some("blue"));

        h.source.set_prefers_dark(true);
        assert_eq!(
            h.document.style_property("--color-primary").as_deref(),
            Some("hsl(217 91% 70%)")
        );
        assert_eq!(h.document.style_property("--ring").as_deref(), Some("217 91% 70%"));
    }

    #[test]
    fn unknown_accent_is_rejected_and_clear_removes_properties() {
        let h = harness(false);
        h.resolver.apply_variant("default-light").expect("apply");
        h.resolver.apply_accent("amber").expect("apply accent");

        assert_eq!(
            h.resolver.apply_accent("chartreuse"),
            Err(ThemeError::UnknownAccent("chartreuse".to_string()))
        );
        assert_eq!(h.resolver.active_accent(), Some("amber"));
        assert_eq!(h.document.style_properties().len(), ACCENT_PROPERTY_NAMES.len());

        h.resolver.clear_accent();
        assert!(h.document.style_properties().is_empty());
        assert_eq!(h.resolver.active_accent(), None);
    }
}
