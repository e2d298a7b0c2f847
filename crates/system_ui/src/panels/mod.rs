//! Resizable panel model: sizes, per-group pixel layout and the workspace panel tree.

mod app_layout;
mod group;
mod sections;
mod size;

pub use app_layout::{
    build_app_layout, AppLayoutSections, LayoutSlot, MainSectionConfig, PanelNode, SectionConfig,
    AUXILIARY_DEFAULTS, EDITOR_AREA_DEFAULTS, EDITOR_DEFAULTS, LEFT_MAIN_AREA_DEFAULTS,
    SIDEBAR_DEFAULTS, TERMINAL_DEFAULTS,
};
pub use group::{Orientation, PanelConstraints, PanelGroupLayout};
pub use sections::{LayoutSections, SectionState};
pub use size::{PanelSize, PanelSizeError};
