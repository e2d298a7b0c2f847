//! Typed host contracts for theme presentation shared by the resolver and browser adapters.
//!
//! This crate is the API-first boundary between theme resolution and the host environment. It
//! exposes the document-root presentation target, the OS color-scheme preference source, and
//! in-memory/no-op implementations of both, while concrete browser adapters live in
//! `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod color_scheme;
pub mod host;
pub mod theme_document;

pub use color_scheme::{
    ColorMode, ColorSchemeListener, ColorSchemeSource, ColorSchemeSubscription,
    MemoryColorSchemeSource, NoopColorSchemeSource, PREFERS_DARK_QUERY,
};
pub use host::{CapabilityStatus, HostStrategy, ThemeHost};
pub use theme_document::{
    MemoryThemeDocument, NoopThemeDocument, ThemeDocument, THEME_MARKER_ATTRIBUTE,
};
