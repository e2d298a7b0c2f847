//! Browser (`wasm32`) implementations of [`platform_host`] theme contracts.
//!
//! This crate wires the document root element and the `prefers-color-scheme` media query into
//! the host-neutral traits consumed by `styling`. Non-wasm builds compile the same types as
//! inert adapters so headless tests and tooling can link against them.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod color_scheme;
pub mod theme_document;

pub use adapters::{
    build_theme_host, color_scheme_source, host_strategy_name, selected_host_strategy,
    theme_document,
};
pub use color_scheme::WebColorSchemeSource;
pub use theme_document::WebThemeDocument;
