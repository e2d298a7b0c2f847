//! Theme provider and context wiring for the showcase site.

use leptos::*;
use platform_host::ThemeHost;
use styling::{default_variant, ResolvedVariant, ThemeControls, ThemeResolver};

#[derive(Clone, Copy)]
/// Leptos context for applying theme variants and reading the applied result.
pub struct ThemeContext {
    /// Resolver bound to the page document.
    pub resolver: StoredValue<ThemeResolver>,
    /// Theme picker selection.
    pub controls: RwSignal<ThemeControls>,
    /// Last successfully applied variant.
    pub resolved: RwSignal<Option<ResolvedVariant>>,
}

impl ThemeContext {
    /// Applies a catalog variant by id, logging unknown ids. The picker selection follows it.
    pub fn apply_variant(&self, variant_id: &str) {
        match self
            .resolver
            .with_value(|resolver| resolver.apply_variant(variant_id))
        {
            Ok(resolved) => self.record(resolved),
            Err(err) => logging::warn!("theme switch ignored: {err}"),
        }
    }

    /// Selects and applies an accent without re-applying the active variant.
    pub fn select_accent(&self, accent_id: &str) {
        self.controls.update(|controls| {
            if let Err(err) = controls.set_accent(accent_id) {
                logging::warn!("{err}");
            }
        });
        let controls = self.controls.get_untracked();
        if let Err(err) = self
            .resolver
            .with_value(|resolver| controls.apply_accent(resolver))
        {
            logging::warn!("accent not applied: {err}");
        }
    }

    fn record(&self, resolved: ResolvedVariant) {
        self.controls.update(|controls| controls.follow(&resolved));
        self.resolved.set(Some(resolved));
    }

    /// Applies the current picker selection.
    pub fn apply_controls(&self) {
        let controls = self.controls.get_untracked();
        match self
            .resolver
            .with_value(|resolver| controls.apply(resolver))
        {
            Ok(resolved) => self.record(resolved),
            Err(err) => logging::warn!("theme controls not applied: {err}"),
        }
    }

    /// Updates the picker selection and applies it.
    pub fn update_controls(&self, update: impl FnOnce(&mut ThemeControls)) {
        self.controls.update(update);
        self.apply_controls();
    }
}

#[component]
/// Provides [`ThemeContext`] to descendant components and applies the default variant.
pub fn ThemeProvider(
    /// Injected browser or headless host bundle assembled by the entry layer.
    host: ThemeHost,
    children: Children,
) -> impl IntoView {
    logging::log!(
        "theme host `{}`, color-scheme {}",
        host.host_strategy.as_str(),
        if host.color_scheme_status.is_available() {
            "available"
        } else {
            "unavailable"
        }
    );

    let theme = ThemeContext {
        resolver: store_value(ThemeResolver::new(host)),
        controls: create_rw_signal(ThemeControls::default()),
        resolved: create_rw_signal(None),
    };
    provide_context(theme);

    theme.resolver.with_value(|resolver| {
        resolver.set_observer(move |resolved| theme.record(resolved.clone()));
    });

    theme.apply_variant(&default_variant().id);
    on_cleanup(move || {
        theme.resolver.with_value(|resolver| {
            resolver.clear_observer();
            resolver.detach();
        });
    });

    children().into_view()
}

/// Returns the current [`ThemeContext`].
///
/// # Panics
///
/// Panics if called outside [`ThemeProvider`].
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not provided")
}
