use std::rc::Rc;

use platform_host::{ColorSchemeSource, HostStrategy, ThemeDocument, ThemeHost};

use crate::{WebColorSchemeSource, WebThemeDocument};

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(target_arch = "wasm32")]
    {
        HostStrategy::Browser
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        HostStrategy::Headless
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Builds the theme document adapter for the active build.
pub fn theme_document() -> Rc<dyn ThemeDocument> {
    Rc::new(WebThemeDocument)
}

/// Builds the OS color-scheme source adapter for the active build.
pub fn color_scheme_source() -> Rc<dyn ColorSchemeSource> {
    Rc::new(WebColorSchemeSource::default())
}

/// Builds the host bundle consumed by `styling::ThemeResolver`.
pub fn build_theme_host() -> ThemeHost {
    ThemeHost::new(
        theme_document(),
        color_scheme_source(),
        selected_host_strategy(),
    )
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use platform_host::CapabilityStatus;

    use super::*;

    #[test]
    fn native_builds_select_headless_host() {
        assert_eq!(host_strategy_name(), "headless");
        let host = build_theme_host();
        assert_eq!(host.host_strategy, HostStrategy::Headless);
        assert_eq!(host.color_scheme_status, CapabilityStatus::Unavailable);
    }
}
