//! Theme catalog, variant resolution, and OS color-scheme tracking for application shells.
//!
//! The catalog is declared in `themes.toml` and compiled in at build time. [`ThemeResolver`]
//! applies a selected variant to a host document through the `platform_host` capability
//! traits, following the OS preference while a `system` variant is selected.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod accent;
pub mod catalog;
pub mod controls;
mod error;
pub mod resolver;
pub mod showcase;
pub mod watcher;

pub use accent::{
    accent_style_properties, accents, find_accent, raw_hsl, Accent, ACCENT_PROPERTY_NAMES,
};
pub use catalog::{
    default_variant, find_theme, find_variant, list_variants, theme_catalog_json, themes, Theme,
    ThemeMode, ThemeVariant,
};
pub use controls::{ThemeControls, DEFAULT_ACCENT_ID, DEFAULT_THEME_ID, FALLBACK_VARIANT_ID};
pub use error::ThemeError;
pub use resolver::{
    theme_class, ResolvedObserver, ResolvedVariant, ThemeResolver, THEME_CLASS_PREFIX,
};
pub use showcase::{showcase_theme_items, ThemeToolbarItem};
pub use watcher::{SubscriptionSlot, SystemPreferenceWatcher};
