//! The application workspace layout: sidebar, editor, terminal and auxiliary panels.

use serde::{Deserialize, Serialize};

use super::{
    group::{Orientation, PanelConstraints},
    size::PanelSize,
};

/// Sidebar defaults.
pub const SIDEBAR_DEFAULTS: PanelConstraints = PanelConstraints::pixels(250, 150, Some(500), true);
/// Terminal defaults.
pub const TERMINAL_DEFAULTS: PanelConstraints =
    PanelConstraints::pixels(300, 100, Some(600), true);
/// Auxiliary panel defaults.
pub const AUXILIARY_DEFAULTS: PanelConstraints =
    PanelConstraints::pixels(300, 200, Some(600), true);
/// Editor defaults.
pub const EDITOR_DEFAULTS: PanelConstraints = PanelConstraints::pixels(600, 400, None, false);
/// Editor area defaults, applied only while a terminal is shown.
pub const EDITOR_AREA_DEFAULTS: PanelConstraints = PanelConstraints::pixels(500, 300, None, false);
/// Left main area defaults, applied only while an auxiliary panel is shown.
pub const LEFT_MAIN_AREA_DEFAULTS: PanelConstraints =
    PanelConstraints::pixels(800, 400, None, false);

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
/// Optional size overrides for a sidebar, terminal or auxiliary section.
pub struct SectionConfig {
    /// Initial size override.
    pub default_size: Option<PanelSize>,
    /// Minimum size override.
    pub min_size: Option<PanelSize>,
    /// Maximum size override.
    pub max_size: Option<PanelSize>,
    /// Collapsibility override.
    pub collapsible: Option<bool>,
}

impl SectionConfig {
    /// Fills unset fields from `defaults`.
    pub fn merged_over(&self, defaults: PanelConstraints) -> PanelConstraints {
        PanelConstraints {
            default_size: self.default_size.or(defaults.default_size),
            min_size: self.min_size.or(defaults.min_size),
            max_size: self.max_size.or(defaults.max_size),
            collapsible: self.collapsible.unwrap_or(defaults.collapsible),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
/// Size overrides for the always-present editor section.
pub struct MainSectionConfig {
    /// Initial size override.
    pub default_size: Option<PanelSize>,
    /// Minimum size override.
    pub min_size: Option<PanelSize>,
}

impl MainSectionConfig {
    /// Fills unset fields from `defaults`.
    pub fn merged_over(&self, defaults: PanelConstraints) -> PanelConstraints {
        PanelConstraints {
            default_size: self.default_size.or(defaults.default_size),
            min_size: self.min_size.or(defaults.min_size),
            ..defaults
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
/// Which optional sections are shown, with their overrides.
pub struct AppLayoutSections {
    /// Sidebar left of the editor.
    pub left: Option<SectionConfig>,
    /// Editor.
    pub main: MainSectionConfig,
    /// Terminal below the editor area.
    pub bottom: Option<SectionConfig>,
    /// Full-height auxiliary panel on the right.
    pub right: Option<SectionConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Content slot rendered inside a leaf panel.
pub enum LayoutSlot {
    /// Sidebar content.
    Sidebar,
    /// Editor content.
    Editor,
    /// Terminal content.
    Terminal,
    /// Auxiliary content.
    Auxiliary,
}

impl LayoutSlot {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sidebar => "sidebar",
            Self::Editor => "editor",
            Self::Terminal => "terminal",
            Self::Auxiliary => "auxiliary",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Node of a resizable panel tree.
pub enum PanelNode {
    /// Panels laid out along one axis, separated by handles.
    Group {
        /// DOM id.
        id: &'static str,
        /// Layout axis.
        orientation: Orientation,
        /// Panels and handles in order.
        children: Vec<PanelNode>,
    },
    /// A sized panel wrapping one node.
    Panel {
        /// DOM id.
        id: &'static str,
        /// Size limits.
        constraints: PanelConstraints,
        /// Panel body.
        body: Box<PanelNode>,
    },
    /// Drag handle between the surrounding panels.
    Handle,
    /// Caller-provided content.
    Slot(LayoutSlot),
}

impl PanelNode {
    fn group(id: &'static str, orientation: Orientation, children: Vec<PanelNode>) -> Self {
        Self::Group {
            id,
            orientation,
            children,
        }
    }

    fn panel(id: &'static str, constraints: PanelConstraints, body: PanelNode) -> Self {
        Self::Panel {
            id,
            constraints,
            body: Box::new(body),
        }
    }

    /// DOM id of a group or panel.
    pub fn id(&self) -> Option<&'static str> {
        match self {
            Self::Group { id, .. } | Self::Panel { id, .. } => Some(*id),
            Self::Handle | Self::Slot(_) => None,
        }
    }

    /// Group and panel ids in depth-first order.
    pub fn ids(&self) -> Vec<&'static str> {
        let mut ids = Vec::new();
        self.collect_ids(&mut ids);
        ids
    }

    fn collect_ids(&self, ids: &mut Vec<&'static str>) {
        match self {
            Self::Group { id, children, .. } => {
                ids.push(*id);
                for child in children {
                    child.collect_ids(ids);
                }
            }
            Self::Panel { id, body, .. } => {
                ids.push(*id);
                body.collect_ids(ids);
            }
            Self::Handle | Self::Slot(_) => {}
        }
    }

    /// Finds the panel with `panel_id` anywhere in the tree.
    pub fn find_panel(&self, panel_id: &str) -> Option<&PanelConstraints> {
        match self {
            Self::Panel {
                id, constraints, ..
            } if *id == panel_id => Some(constraints),
            Self::Panel { body, .. } => body.find_panel(panel_id),
            Self::Group { children, .. } => {
                children.iter().find_map(|child| child.find_panel(panel_id))
            }
            Self::Handle | Self::Slot(_) => None,
        }
    }

    /// Constraints of a group's direct panels, in order. Empty for non-groups.
    pub fn panel_constraints(&self) -> Vec<PanelConstraints> {
        match self {
            Self::Group { children, .. } => children
                .iter()
                .filter_map(|child| match child {
                    Self::Panel { constraints, .. } => Some(*constraints),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Builds the workspace panel tree for the shown sections.
///
/// The editor area holds the sidebar and editor side by side, or the editor alone. A terminal
/// stacks below the editor area and an auxiliary panel spans the full height on the right.
pub fn build_app_layout(sections: &AppLayoutSections) -> PanelNode {
    let editor_area_body = match sections.left {
        Some(left) => PanelNode::group(
            "editor-horizontal",
            Orientation::Horizontal,
            vec![
                PanelNode::panel(
                    "sidebar-panel",
                    left.merged_over(SIDEBAR_DEFAULTS),
                    PanelNode::Slot(LayoutSlot::Sidebar),
                ),
                PanelNode::Handle,
                PanelNode::panel(
                    "editor-panel",
                    sections.main.merged_over(EDITOR_DEFAULTS),
                    PanelNode::Slot(LayoutSlot::Editor),
                ),
            ],
        ),
        None => PanelNode::Slot(LayoutSlot::Editor),
    };

    let mut vertical = vec![PanelNode::panel(
        "editor-area",
        wrapper_constraints(sections.bottom.is_some(), EDITOR_AREA_DEFAULTS),
        editor_area_body,
    )];
    if let Some(bottom) = sections.bottom {
        vertical.push(PanelNode::Handle);
        vertical.push(PanelNode::panel(
            "terminal-panel",
            bottom.merged_over(TERMINAL_DEFAULTS),
            PanelNode::Slot(LayoutSlot::Terminal),
        ));
    }

    let mut main = vec![PanelNode::panel(
        "left-main-area",
        wrapper_constraints(sections.right.is_some(), LEFT_MAIN_AREA_DEFAULTS),
        PanelNode::group("left-main-vertical", Orientation::Vertical, vertical),
    )];
    if let Some(right) = sections.right {
        main.push(PanelNode::Handle);
        main.push(PanelNode::panel(
            "auxiliary-panel",
            right.merged_over(AUXILIARY_DEFAULTS),
            PanelNode::Slot(LayoutSlot::Auxiliary),
        ));
    }

    PanelNode::group("main-layout", Orientation::Horizontal, main)
}

fn wrapper_constraints(sibling_shown: bool, defaults: PanelConstraints) -> PanelConstraints {
    if sibling_shown {
        defaults
    } else {
        PanelConstraints::default()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn editor_only_layout_has_unsized_wrappers() {
        let layout = build_app_layout(&AppLayoutSections::default());
        assert_eq!(
            layout.ids(),
            vec!["main-layout", "left-main-area", "left-main-vertical", "editor-area"]
        );
        assert_eq!(
            layout.find_panel("editor-area"),
            Some(&PanelConstraints::default())
        );
        assert_eq!(
            layout.find_panel("left-main-area"),
            Some(&PanelConstraints::default())
        );
    }

    #[test]
    fn full_layout_nests_every_section() {
        let layout = build_app_layout(&AppLayoutSections {
            left: Some(SectionConfig::default()),
            bottom: Some(SectionConfig::default()),
            right: Some(SectionConfig::default()),
            ..AppLayoutSections::default()
        });
        assert_eq!(
            layout.ids(),
            vec![
                "main-layout",
                "left-main-area",
                "left-main-vertical",
                "editor-area",
                "editor-horizontal",
                "sidebar-panel",
                "editor-panel",
                "terminal-panel",
                "auxiliary-panel",
            ]
        );
        assert_eq!(layout.find_panel("sidebar-panel"), Some(&SIDEBAR_DEFAULTS));
        assert_eq!(layout.find_panel("terminal-panel"), Some(&TERMINAL_DEFAULTS));
        assert_eq!(layout.find_panel("auxiliary-panel"), Some(&AUXILIARY_DEFAULTS));
        assert_eq!(layout.find_panel("editor-panel"), Some(&EDITOR_DEFAULTS));
        assert_eq!(
            layout.find_panel("editor-area"),
            Some(&EDITOR_AREA_DEFAULTS)
        );
        assert_eq!(
            layout.find_panel("left-main-area"),
            Some(&LEFT_MAIN_AREA_DEFAULTS)
        );
        assert_eq!(layout.panel_constraints().len(), 2);
    }

    #[test]
    fn overrides_win_over_defaults() {
        let layout = build_app_layout(&AppLayoutSections {
            left: Some(SectionConfig {
                default_size: Some(PanelSize::Percent(20.0)),
                collapsible: Some(false),
                ..SectionConfig::default()
            }),
            main: MainSectionConfig {
                min_size: Some(PanelSize::Pixels(320)),
                ..MainSectionConfig::default()
            },
            ..AppLayoutSections::default()
        });
        assert_eq!(
            layout.find_panel("sidebar-panel"),
            Some(&PanelConstraints {
                default_size: Some(PanelSize::Percent(20.0)),
                collapsible: false,
                ..SIDEBAR_DEFAULTS
            })
        );
        assert_eq!(
            layout.find_panel("editor-panel"),
            Some(&PanelConstraints {
                min_size: Some(PanelSize::Pixels(320)),
                ..EDITOR_DEFAULTS
            })
        );
        assert_eq!(layout.find_panel("terminal-panel"), None);
    }
}
