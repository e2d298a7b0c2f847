//! Browser entry for the theme and layout showcase.

mod theme_context;
mod web_app;

pub use theme_context::{use_theme, ThemeContext, ThemeProvider};
pub use web_app::{LayoutShowcase, SiteApp, ThemeShowcase};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <SiteApp /> })
}
