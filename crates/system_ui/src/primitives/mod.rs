//! Resizable panel primitives and the panel-tree renderer.

use leptos::ev::KeyboardEvent;
use leptos::*;

mod resizable;

pub use resizable::{PanelLayoutView, ResizableHandle, ResizablePanel, ResizablePanelGroup};

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
