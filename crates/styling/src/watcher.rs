//! OS preference tracking for `system` theme variants.

use std::{cell::RefCell, rc::Rc};

use leptos::logging;
use platform_host::{
    ColorMode, ColorSchemeListener, ColorSchemeSource, ColorSchemeSubscription, ThemeDocument,
};

use crate::resolver::{paint, system_resolution, SharedAppliedState};

#[derive(Clone)]
struct ActiveWatch {
    theme_base: String,
    subscription: ColorSchemeSubscription,
    source: Rc<dyn ColorSchemeSource>,
}

impl std::fmt::Debug for ActiveWatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActiveWatch")
            .field("theme_base", &self.theme_base)
            .field("subscription", &self.subscription)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Default)]
/// Holder for the single live OS-preference subscription.
///
/// One slot means at most one listener across every watcher sharing it: installing always
/// vacates the slot first, unsubscribing through the source that issued the held subscription.
pub struct SubscriptionSlot {
    current: RefCell<Option<ActiveWatch>>,
}

impl SubscriptionSlot {
    /// Returns whether a subscription is currently held.
    pub fn is_occupied(&self) -> bool {
        self.current.borrow().is_some()
    }

    /// Returns the theme base the held subscription re-resolves, if any.
    pub fn theme_base(&self) -> Option<String> {
        self.current
            .borrow()
            .as_ref()
            .map(|watch| watch.theme_base.clone())
    }

    fn put(&self, watch: ActiveWatch) {
        *self.current.borrow_mut() = Some(watch);
    }

    fn take(&self) -> Option<ActiveWatch> {
        self.current.borrow_mut().take()
    }
}

/// Keeps the applied concrete mode in sync with the OS preference while a `system` variant is
/// active.
pub struct SystemPreferenceWatcher {
    document: Rc<dyn ThemeDocument>,
    source: Rc<dyn ColorSchemeSource>,
    slot: Rc<SubscriptionSlot>,
    state: SharedAppliedState,
}

impl SystemPreferenceWatcher {
    pub(crate) fn new(
        document: Rc<dyn ThemeDocument>,
        source: Rc<dyn ColorSchemeSource>,
        slot: Rc<SubscriptionSlot>,
        state: SharedAppliedState,
    ) -> Self {
        Self {
            document,
            source,
            slot,
            state,
        }
    }

    /// Registers the preference listener for `theme_base`, replacing any previous one.
    ///
    /// `requested_id` is the `system` variant the listener reports as the user's selection.
    /// Returns `false` when the host has no preference-change API; the document then keeps its
    /// last applied mode.
    pub fn install(&self, theme_base: &str, requested_id: &str) -> bool {
        self.remove();

        let document = self.document.clone();
        let state = self.state.clone();
        let base = theme_base.to_string();
        let requested = requested_id.to_string();
        let listener: ColorSchemeListener = Rc::new(move |prefers_dark| {
            let resolved =
                system_resolution(&base, &requested, ColorMode::from_prefers_dark(prefers_dark));
            let observer = {
                let mut state = state.borrow_mut();
                paint(document.as_ref(), &mut state, resolved.clone());
                state.observer()
            };
            if let Some(observer) = observer {
                observer(&resolved);
            }
        });

        let Some(subscription) = self.source.subscribe(listener) else {
            logging::log!(
                "color-scheme change notifications are not supported by this host; \
                 `{theme_base}` will not follow the OS preference"
            );
            return false;
        };

        self.slot.put(ActiveWatch {
            theme_base: theme_base.to_string(),
            subscription,
            source: self.source.clone(),
        });
        true
    }

    /// Removes the listener held in the slot, whichever watcher installed it. No-op when the
    /// slot is empty.
    pub fn remove(&self) {
        if let Some(watch) = self.slot.take() {
            watch.source.unsubscribe(watch.subscription);
        }
    }

    /// Returns whether a listener is installed.
    pub fn is_installed(&self) -> bool {
        self.slot.is_occupied()
    }

    /// Returns the theme base currently followed, if any.
    pub fn watched_theme(&self) -> Option<String> {
        self.slot.theme_base()
    }
}

impl std::fmt::Debug for SystemPreferenceWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemPreferenceWatcher")
            .field("slot", &self.slot)
            .finish_non_exhaustive()
    }
}
