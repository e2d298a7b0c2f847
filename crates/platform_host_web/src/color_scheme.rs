//! OS color-scheme source backed by `window.matchMedia("(prefers-color-scheme: dark)")`.

use std::fmt;

use platform_host::{ColorSchemeListener, ColorSchemeSource, ColorSchemeSubscription};

#[cfg(target_arch = "wasm32")]
use platform_host::PREFERS_DARK_QUERY;
#[cfg(target_arch = "wasm32")]
use std::{
    cell::{Cell, RefCell},
    collections::BTreeMap,
};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

#[cfg(target_arch = "wasm32")]
struct RegisteredListener {
    query: web_sys::MediaQueryList,
    callback: Closure<dyn FnMut(web_sys::MediaQueryListEvent)>,
}

#[derive(Default)]
/// Browser color-scheme source.
///
/// Change callbacks stay alive inside the adapter until unsubscribed. Environments whose
/// `MediaQueryList` lacks `addEventListener` refuse subscriptions instead of failing.
pub struct WebColorSchemeSource {
    #[cfg(target_arch = "wasm32")]
    next_id: Cell<u64>,
    #[cfg(target_arch = "wasm32")]
    registered: RefCell<BTreeMap<u64, RegisteredListener>>,
}

#[cfg(target_arch = "wasm32")]
fn prefers_dark_query() -> Option<web_sys::MediaQueryList> {
    web_sys::window()?
        .match_media(PREFERS_DARK_QUERY)
        .ok()
        .flatten()
}

impl WebColorSchemeSource {
    /// Number of change listeners currently attached.
    pub fn active_subscriptions(&self) -> usize {
        #[cfg(target_arch = "wasm32")]
        {
            self.registered.borrow().len()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            0
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn allocate_id(&self) -> u64 {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        id
    }
}

impl fmt::Debug for WebColorSchemeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebColorSchemeSource")
            .field("active_subscriptions", &self.active_subscriptions())
            .finish()
    }
}

impl ColorSchemeSource for WebColorSchemeSource {
    fn prefers_dark(&self) -> Option<bool> {
        #[cfg(target_arch = "wasm32")]
        {
            prefers_dark_query().map(|query| query.matches())
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }

    fn subscribe(&self, listener: ColorSchemeListener) -> Option<ColorSchemeSubscription> {
        #[cfg(target_arch = "wasm32")]
        {
            let query = prefers_dark_query()?;
            let callback = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::wrap(Box::new(
                move |event: web_sys::MediaQueryListEvent| listener(event.matches()),
            ));
            query
                .add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
                .ok()?;
            let id = self.allocate_id();
            self.registered
                .borrow_mut()
                .insert(id, RegisteredListener { query, callback });
            Some(ColorSchemeSubscription::new(id))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = listener;
            None
        }
    }

    fn unsubscribe(&self, subscription: ColorSchemeSubscription) {
        #[cfg(target_arch = "wasm32")]
        {
            let removed = self.registered.borrow_mut().remove(&subscription.id());
            if let Some(RegisteredListener { query, callback }) = removed {
                let _ = query
                    .remove_event_listener_with_callback("change", callback.as_ref().unchecked_ref());
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = subscription;
        }
    }
}
