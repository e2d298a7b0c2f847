//! Document-root theme target backed by `document.documentElement`.

use platform_host::ThemeDocument;
#[cfg(target_arch = "wasm32")]
use platform_host::THEME_MARKER_ATTRIBUTE;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Copy, Default)]
/// Browser theme document writing to the root `<html>` element.
///
/// Writes against a missing window/document are dropped; on non-wasm targets every method
/// behaves like [`platform_host::NoopThemeDocument`].
pub struct WebThemeDocument;

#[cfg(target_arch = "wasm32")]
fn root_element() -> Option<web_sys::Element> {
    web_sys::window()?.document()?.document_element()
}

#[cfg(target_arch = "wasm32")]
fn root_style() -> Option<web_sys::CssStyleDeclaration> {
    let root = root_element()?.dyn_into::<web_sys::HtmlElement>().ok()?;
    Some(root.style())
}

impl ThemeDocument for WebThemeDocument {
    fn set_marker(&self, variant_id: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(root) = root_element() {
                let _ = root.set_attribute(THEME_MARKER_ATTRIBUTE, variant_id);
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = variant_id;
        }
    }

    fn marker(&self) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            root_element()?.get_attribute(THEME_MARKER_ATTRIBUTE)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }

    fn add_class(&self, class: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(root) = root_element() {
                let _ = root.class_list().add_1(class);
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = class;
        }
    }

    fn remove_class(&self, class: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(root) = root_element() {
                let _ = root.class_list().remove_1(class);
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = class;
        }
    }

    fn has_class(&self, class: &str) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            root_element()
                .map(|root| root.class_list().contains(class))
                .unwrap_or(false)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = class;
            false
        }
    }

    fn set_style_property(&self, name: &str, value: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(style) = root_style() {
                let _ = style.set_property(name, value);
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (name, value);
        }
    }

    fn remove_style_property(&self, name: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(style) = root_style() {
                let _ = style.remove_property(name);
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = name;
        }
    }
}
