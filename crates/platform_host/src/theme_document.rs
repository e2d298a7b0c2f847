//! Document-root presentation contracts used by theme resolution.

use std::{
    cell::RefCell,
    collections::{BTreeMap, BTreeSet},
    rc::Rc,
};

use crate::ColorMode;

/// Root attribute carrying the active concrete theme variant id.
pub const THEME_MARKER_ATTRIBUTE: &str = "data-theme";

/// Host presentation target for theme state (the document root element in browsers).
///
/// Methods take `&self`; implementations own their interior mutability so one target can be
/// shared between the resolver and preference listeners.
pub trait ThemeDocument {
    /// Sets the active theme marker attribute to a concrete variant id.
    fn set_marker(&self, variant_id: &str);

    /// Returns the current marker attribute value, if any.
    fn marker(&self) -> Option<String>;

    /// Adds a class to the root.
    fn add_class(&self, class: &str);

    /// Removes a class from the root. Absent classes are ignored.
    fn remove_class(&self, class: &str);

    /// Returns whether the root currently carries `class`.
    fn has_class(&self, class: &str) -> bool;

    /// Sets an inline style/custom property on the root.
    fn set_style_property(&self, name: &str, value: &str);

    /// Removes an inline style/custom property from the root.
    fn remove_style_property(&self, name: &str);

    /// Makes `mode` the only color-mode class present on the root.
    fn set_mode_class(&self, mode: ColorMode) {
        self.remove_class(mode.opposite().class_name());
        self.add_class(mode.class_name());
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Theme document that discards every write, for hosts without a document.
pub struct NoopThemeDocument;

impl ThemeDocument for NoopThemeDocument {
    fn set_marker(&self, _variant_id: &str) {}

    fn marker(&self) -> Option<String> {
        None
    }

    fn add_class(&self, _class: &str) {}

    fn remove_class(&self, _class: &str) {}

    fn has_class(&self, _class: &str) -> bool {
        false
    }

    fn set_style_property(&self, _name: &str, _value: &str) {}

    fn remove_style_property(&self, _name: &str) {}
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct MemoryDocumentState {
    marker: Option<String>,
    classes: BTreeSet<String>,
    style: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default)]
/// In-memory theme document. Clones share state.
pub struct MemoryThemeDocument {
    inner: Rc<RefCell<MemoryDocumentState>>,
}

impl MemoryThemeDocument {
    /// Returns the root classes in sorted order.
    pub fn classes(&self) -> Vec<String> {
        self.inner.borrow().classes.iter().cloned().collect()
    }

    /// Returns one inline style property.
    pub fn style_property(&self, name: &str) -> Option<String> {
        self.inner.borrow().style.get(name).cloned()
    }

    /// Returns all inline style properties in name order.
    pub fn style_properties(&self) -> Vec<(String, String)> {
        self.inner
            .borrow()
            .style
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }
}

impl ThemeDocument for MemoryThemeDocument {
    fn set_marker(&self, variant_id: &str) {
        self.inner.borrow_mut().marker = Some(variant_id.to_string());
    }

    fn marker(&self) -> Option<String> {
        self.inner.borrow().marker.clone()
    }

    fn add_class(&self, class: &str) {
        self.inner.borrow_mut().classes.insert(class.to_string());
    }

    fn remove_class(&self, class: &str) {
        self.inner.borrow_mut().classes.remove(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.inner.borrow().classes.contains(class)
    }

    fn set_style_property(&self, name: &str, value: &str) {
        self.inner
            .borrow_mut()
            .style
            .insert(name.to_string(), value.to_string());
    }

    fn remove_style_property(&self, name: &str) {
        self.inner.borrow_mut().style.remove(name);
    }
}
