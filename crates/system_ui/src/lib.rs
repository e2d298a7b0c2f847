//! Resizable workspace layout for the theme showcase.
//!
//! [`panels`] holds the framework-free model: panel sizes, per-group pixel resizing, the
//! sidebar/editor/terminal/auxiliary panel tree and section visibility state. The Leptos
//! primitives render that model with the stable `data-ui-*` DOM contract used by the site CSS.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod panels;
mod primitives;

pub use panels::{
    build_app_layout, AppLayoutSections, LayoutSections, LayoutSlot, MainSectionConfig,
    Orientation, PanelConstraints, PanelGroupLayout, PanelNode, PanelSize, PanelSizeError,
    SectionConfig, SectionState,
};
pub use primitives::{PanelLayoutView, ResizableHandle, ResizablePanel, ResizablePanelGroup};

/// Convenience imports for crates composing the workspace layout.
pub mod prelude {
    pub use crate::{
        build_app_layout, AppLayoutSections, LayoutSections, LayoutSlot, MainSectionConfig,
        Orientation, PanelLayoutView, PanelNode, PanelSize, ResizableHandle, ResizablePanel,
        ResizablePanelGroup, SectionConfig,
    };
}
