//! OS color-scheme preference contracts and adapters.

use std::{cell::RefCell, collections::BTreeMap, fmt, rc::Rc};

use serde::{Deserialize, Serialize};

/// Media query used by hosts that expose the OS light/dark preference.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Concrete color mode applied to a document. `system` is a resolution rule, never a mode.
pub enum ColorMode {
    /// Light presentation.
    Light,
    /// Dark presentation.
    Dark,
}

impl ColorMode {
    /// Maps the host "prefers dark" signal to a concrete mode.
    pub const fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// Returns the stable token used in variant ids and root classes.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Returns the document-root class toggled for this mode.
    pub const fn class_name(self) -> &'static str {
        self.as_str()
    }

    /// Returns the other concrete mode.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Returns whether this is the dark mode.
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Callback invoked with the new "prefers dark" value when the OS preference flips.
pub type ColorSchemeListener = Rc<dyn Fn(bool)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Handle for one registered [`ColorSchemeListener`].
pub struct ColorSchemeSubscription(u64);

impl ColorSchemeSubscription {
    /// Wraps a host-assigned subscription id.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the host-assigned subscription id.
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Host capability for querying and observing the OS light/dark preference.
pub trait ColorSchemeSource {
    /// Returns the current "prefers dark" value, or `None` when the host cannot answer.
    fn prefers_dark(&self) -> Option<bool>;

    /// Registers a change listener.
    ///
    /// Returns `None` when the host has no preference-change API; callers treat that as
    /// feature absence rather than failure.
    fn subscribe(&self, listener: ColorSchemeListener) -> Option<ColorSchemeSubscription>;

    /// Removes a listener previously returned by [`ColorSchemeSource::subscribe`].
    ///
    /// Unknown handles are ignored.
    fn unsubscribe(&self, subscription: ColorSchemeSubscription);
}

#[derive(Debug, Clone, Copy, Default)]
/// Color-scheme source for hosts without a preference API.
pub struct NoopColorSchemeSource;

impl ColorSchemeSource for NoopColorSchemeSource {
    fn prefers_dark(&self) -> Option<bool> {
        None
    }

    fn subscribe(&self, _listener: ColorSchemeListener) -> Option<ColorSchemeSubscription> {
        None
    }

    fn unsubscribe(&self, _subscription: ColorSchemeSubscription) {}
}

struct MemoryColorSchemeState {
    supported: bool,
    prefers_dark: bool,
    next_id: u64,
    listeners: BTreeMap<u64, ColorSchemeListener>,
}

#[derive(Clone)]
/// In-memory color-scheme source with a settable preference, for tests and headless hosts.
///
/// Clones share state, so a test can keep one handle while the resolver owns another.
pub struct MemoryColorSchemeSource {
    inner: Rc<RefCell<MemoryColorSchemeState>>,
}

impl MemoryColorSchemeSource {
    /// Creates a supported source with the given initial preference.
    pub fn new(prefers_dark: bool) -> Self {
        Self {
            inner: Rc::new(RefCell::new(MemoryColorSchemeState {
                supported: true,
                prefers_dark,
                next_id: 1,
                listeners: BTreeMap::new(),
            })),
        }
    }

    /// Creates a source that behaves like a host without the preference API.
    pub fn unsupported() -> Self {
        let source = Self::new(false);
        source.inner.borrow_mut().supported = false;
        source
    }

    /// Changes the simulated OS preference and notifies listeners when the value flips.
    pub fn set_prefers_dark(&self, prefers_dark: bool) {
        let listeners = {
            let mut state = self.inner.borrow_mut();
            if state.prefers_dark == prefers_dark {
                return;
            }
            state.prefers_dark = prefers_dark;
            state.listeners.values().cloned().collect::<Vec<_>>()
        };
        for listener in listeners {
            listener(prefers_dark);
        }
    }

    /// Number of listeners currently registered.
    pub fn active_subscriptions(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl Default for MemoryColorSchemeSource {
    fn default() -> Self {
        Self::new(false)
    }
}

impl fmt::Debug for MemoryColorSchemeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.borrow();
        f.debug_struct("MemoryColorSchemeSource")
            .field("supported", &state.supported)
            .field("prefers_dark", &state.prefers_dark)
            .field("listeners", &state.listeners.len())
            .finish()
    }
}

impl ColorSchemeSource for MemoryColorSchemeSource {
    fn prefers_dark(&self) -> Option<bool> {
        let state = self.inner.borrow();
        state.supported.then_some(state.prefers_dark)
    }

    fn subscribe(&self, listener: ColorSchemeListener) -> Option<ColorSchemeSubscription> {
        let mut state = self.inner.borrow_mut();
        if !state.supported {
            return None;
        }
        let id = state.next_id;
        state.next_id += 1;
        state.listeners.insert(id, listener);
        Some(ColorSchemeSubscription::new(id))
    }

    fn unsubscribe(&self, subscription: ColorSchemeSubscription) {
        self.inner.borrow_mut().listeners.remove(&subscription.id());
    }
}
