//! Shared host-bundle and capability models for theme-resolution composition.

use std::rc::Rc;

use crate::{
    ColorSchemeSource, MemoryColorSchemeSource, MemoryThemeDocument, NoopColorSchemeSource,
    NoopThemeDocument, ThemeDocument,
};

/// Stable host strategy selected for the current build/runtime composition path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser document and `matchMedia` backed composition.
    Browser,
    /// In-memory composition used by tests and non-browser builds.
    Headless,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Headless => "headless",
        }
    }
}

/// Host availability state for one optional capability domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityStatus {
    /// Capability is available.
    Available,
    /// Capability is not implemented or not supported on the active host.
    Unavailable,
}

impl CapabilityStatus {
    /// Returns whether the capability can be used immediately.
    pub const fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }
}

/// Runtime-selected host bundle consumed by the theme resolver.
///
/// All environment-specific selection happens before this bundle reaches `styling`.
#[derive(Clone)]
pub struct ThemeHost {
    /// Presentation target receiving marker attribute, classes and custom properties.
    pub document: Rc<dyn ThemeDocument>,
    /// OS light/dark preference source.
    pub color_scheme: Rc<dyn ColorSchemeSource>,
    /// Whether the preference source can report and observe changes.
    pub color_scheme_status: CapabilityStatus,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl ThemeHost {
    /// Builds a host bundle and probes the color-scheme capability once.
    pub fn new(
        document: Rc<dyn ThemeDocument>,
        color_scheme: Rc<dyn ColorSchemeSource>,
        host_strategy: HostStrategy,
    ) -> Self {
        let color_scheme_status = if color_scheme.prefers_dark().is_some() {
            CapabilityStatus::Available
        } else {
            CapabilityStatus::Unavailable
        };
        Self {
            document,
            color_scheme,
            color_scheme_status,
            host_strategy,
        }
    }

    /// Headless bundle that accepts every write and has no preference API.
    pub fn noop() -> Self {
        Self::new(
            Rc::new(NoopThemeDocument),
            Rc::new(NoopColorSchemeSource),
            HostStrategy::Headless,
        )
    }

    /// Headless bundle over shared in-memory doubles.
    pub fn memory(document: MemoryThemeDocument, color_scheme: MemoryColorSchemeSource) -> Self {
        Self::new(
            Rc::new(document),
            Rc::new(color_scheme),
            HostStrategy::Headless,
        )
    }
}

impl std::fmt::Debug for ThemeHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeHost")
            .field("color_scheme_status", &self.color_scheme_status)
            .field("host_strategy", &self.host_strategy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probes_color_scheme_capability() {
        let host = ThemeHost::memory(
            MemoryThemeDocument::default(),
            MemoryColorSchemeSource::new(true),
        );
        assert!(host.color_scheme_status.is_available());
        assert_eq!(host.host_strategy.as_str(), "headless");

        let host = ThemeHost::memory(
            MemoryThemeDocument::default(),
            MemoryColorSchemeSource::unsupported(),
        );
        assert_eq!(host.color_scheme_status, CapabilityStatus::Unavailable);
        assert_eq!(
            ThemeHost::noop().color_scheme_status,
            CapabilityStatus::Unavailable
        );
    }
}
