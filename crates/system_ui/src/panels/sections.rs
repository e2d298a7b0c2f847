//! Show/hide state for the optional workspace sections.

use serde::{Deserialize, Serialize};

use super::app_layout::{
    build_app_layout, AppLayoutSections, LayoutSlot, MainSectionConfig, PanelNode, SectionConfig,
};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
/// One optional section and the config it had when last shown.
pub struct SectionState {
    current: Option<SectionConfig>,
    previous: Option<SectionConfig>,
}

impl SectionState {
    /// Starts with `initial` shown, or hidden when `None`.
    pub fn new(initial: Option<SectionConfig>) -> Self {
        Self {
            current: initial,
            previous: initial,
        }
    }

    /// Shown config, if visible.
    pub fn current(&self) -> Option<SectionConfig> {
        self.current
    }

    /// Returns whether the section is shown.
    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    /// Replaces the shown config without touching the remembered one.
    pub fn set(&mut self, section: Option<SectionConfig>) {
        self.current = section;
    }

    /// Hides a shown section, or restores the remembered config of a hidden one.
    pub fn toggle(&mut self) {
        match self.current.take() {
            Some(current) => self.previous = Some(current),
            None => self.current = self.previous,
        }
    }

    /// Shows `section` and remembers it; with `None`, restores the remembered config if any.
    pub fn show(&mut self, section: Option<SectionConfig>) {
        match section {
            Some(section) => {
                self.current = Some(section);
                self.previous = Some(section);
            }
            None => {
                if self.previous.is_some() {
                    self.current = self.previous;
                }
            }
        }
    }

    /// Hides the section, remembering its config.
    pub fn hide(&mut self) {
        if let Some(current) = self.current.take() {
            self.previous = Some(current);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
/// Visibility state for the sidebar, terminal and auxiliary sections around the editor.
pub struct LayoutSections {
    /// Sidebar state.
    pub sidebar: SectionState,
    /// Editor overrides.
    pub editor: MainSectionConfig,
    /// Terminal state.
    pub terminal: SectionState,
    /// Auxiliary panel state.
    pub auxiliary: SectionState,
}

impl LayoutSections {
    /// Seeds state from an initial section selection.
    pub fn new(initial: AppLayoutSections) -> Self {
        Self {
            sidebar: SectionState::new(initial.left),
            editor: initial.main,
            terminal: SectionState::new(initial.bottom),
            auxiliary: SectionState::new(initial.right),
        }
    }

    /// State for an optional slot. `None` for the editor, which is always shown.
    pub fn section_mut(&mut self, slot: LayoutSlot) -> Option<&mut SectionState> {
        match slot {
            LayoutSlot::Sidebar => Some(&mut self.sidebar),
            LayoutSlot::Terminal => Some(&mut self.terminal),
            LayoutSlot::Auxiliary => Some(&mut self.auxiliary),
            LayoutSlot::Editor => None,
        }
    }

    /// Returns whether `slot` is shown.
    pub fn is_visible(&self, slot: LayoutSlot) -> bool {
        match slot {
            LayoutSlot::Sidebar => self.sidebar.is_visible(),
            LayoutSlot::Terminal => self.terminal.is_visible(),
            LayoutSlot::Auxiliary => self.auxiliary.is_visible(),
            LayoutSlot::Editor => true,
        }
    }

    /// Toggles an optional slot. No-op for the editor.
    pub fn toggle(&mut self, slot: LayoutSlot) {
        if let Some(section) = self.section_mut(slot) {
            section.toggle();
        }
    }

    /// Sections currently shown.
    pub fn sections(&self) -> AppLayoutSections {
        AppLayoutSections {
            left: self.sidebar.current(),
            main: self.editor,
            bottom: self.terminal.current(),
            right: self.auxiliary.current(),
        }
    }

    /// Panel tree for the sections currently shown.
    pub fn layout(&self) -> PanelNode {
        build_app_layout(&self.sections())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::panels::PanelSize;

    fn wide() -> SectionConfig {
        SectionConfig {
            default_size: Some(PanelSize::Pixels(400)),
            ..SectionConfig::default()
        }
    }

    #[test]
    fn toggle_restores_previous_config() {
        let mut state = SectionState::new(Some(wide()));
        state.toggle();
        assert!(!state.is_visible());
        state.toggle();
        assert_eq!(state.current(), Some(wide()));
    }

    #[test]
    fn show_without_config_needs_a_remembered_one() {
        let mut state = SectionState::new(None);
        state.show(None);
        assert!(!state.is_visible());

        state.show(Some(wide()));
        state.hide();
        state.show(None);
        assert_eq!(state.current(), Some(wide()));
    }

    #[test]
    fn set_does_not_change_remembered_config() {
        let mut state = SectionState::new(Some(wide()));
        state.set(Some(SectionConfig::default()));
        state.set(None);
        state.toggle();
        assert_eq!(state.current(), Some(wide()));
    }

    #[test]
    fn layout_follows_visibility() {
        let mut sections = LayoutSections::new(AppLayoutSections {
            left: Some(SectionConfig::default()),
            bottom: Some(SectionConfig::default()),
            ..AppLayoutSections::default()
        });
        sections.toggle(LayoutSlot::Terminal);
        sections.toggle(LayoutSlot::Editor);

        assert!(sections.is_visible(LayoutSlot::Editor));
        assert!(!sections.is_visible(LayoutSlot::Terminal));
        let layout = sections.layout();
        assert!(layout.find_panel("sidebar-panel").is_some());
        assert_eq!(layout.find_panel("terminal-panel"), None);
    }
}
