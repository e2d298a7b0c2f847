//! Pixel-space sizing for one group of adjacent resizable panels.

use serde::{Deserialize, Serialize};

use super::size::PanelSize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Axis along which a panel group lays out its panels.
pub enum Orientation {
    /// Panels side by side.
    Horizontal,
    /// Panels stacked top to bottom.
    Vertical,
}

impl Orientation {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }

    /// CSS dimension the orientation sizes panels along.
    pub(crate) fn dimension(self) -> &'static str {
        match self {
            Self::Horizontal => "width",
            Self::Vertical => "height",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
/// Size limits for a single panel.
pub struct PanelConstraints {
    /// Initial size; panels without one share the remaining space.
    pub default_size: Option<PanelSize>,
    /// Smallest expanded size.
    pub min_size: Option<PanelSize>,
    /// Largest size.
    pub max_size: Option<PanelSize>,
    /// Whether the panel may collapse to zero.
    pub collapsible: bool,
}

impl PanelConstraints {
    /// Pixel constraints with a default, a minimum and an optional maximum.
    pub const fn pixels(
        default_px: u32,
        min_px: u32,
        max_px: Option<u32>,
        collapsible: bool,
    ) -> Self {
        Self {
            default_size: Some(PanelSize::Pixels(default_px)),
            min_size: Some(PanelSize::Pixels(min_px)),
            max_size: match max_px {
                Some(max) => Some(PanelSize::Pixels(max)),
                None => None,
            },
            collapsible,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PanelSlot {
    min: u32,
    max: u32,
    collapsible: bool,
    size: u32,
}

impl PanelSlot {
    fn settle(&self, proposed: i64) -> u32 {
        if proposed < i64::from(self.min) {
            if self.collapsible && proposed * 2 < i64::from(self.min) {
                0
            } else {
                self.min
            }
        } else if proposed > i64::from(self.max) {
            self.max
        } else {
            proposed as u32
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Resolved pixel sizes of a panel group along its axis.
pub struct PanelGroupLayout {
    extent: u32,
    panels: Vec<PanelSlot>,
}

impl PanelGroupLayout {
    /// Lays out panels in a container `extent_px` long.
    ///
    /// Panels with a default size take it, clamped to their limits. The rest split what is left
    /// evenly, the last of them absorbing any rounding remainder.
    pub fn new(extent_px: u32, constraints: &[PanelConstraints]) -> Self {
        let mut panels: Vec<PanelSlot> = Vec::with_capacity(constraints.len());
        let mut flexible = Vec::new();
        let mut claimed = 0_u32;

        for (index, constraint) in constraints.iter().enumerate() {
            let min = constraint.min_size.map_or(0, |size| size.to_pixels(extent_px));
            let max = constraint
                .max_size
                .map_or(extent_px, |size| size.to_pixels(extent_px))
                .max(min);
            let size = match constraint.default_size {
                Some(size) => {
                    let size = size.to_pixels(extent_px).clamp(min, max);
                    claimed = claimed.saturating_add(size);
                    size
                }
                None => {
                    flexible.push(index);
                    0
                }
            };
            panels.push(PanelSlot {
                min,
                max,
                collapsible: constraint.collapsible,
                size,
            });
        }

        if !flexible.is_empty() {
            let remaining = extent_px.saturating_sub(claimed);
            let share = remaining / flexible.len() as u32;
            let remainder = remaining % flexible.len() as u32;
            let last = flexible.len() - 1;
            for (position, index) in flexible.into_iter().enumerate() {
                let panel = &mut panels[index];
                let wanted = if position == last { share + remainder } else { share };
                panel.size = wanted.clamp(panel.min, panel.max);
            }
        }

        Self {
            extent: extent_px,
            panels,
        }
    }

    /// Container extent the layout was resolved for.
    pub fn extent(&self) -> u32 {
        self.extent
    }

    /// Current pixel size of every panel, in order.
    pub fn sizes(&self) -> Vec<u32> {
        self.panels.iter().map(|panel| panel.size).collect()
    }

    /// Returns whether panel `index` is collapsed.
    pub fn is_collapsed(&self, index: usize) -> bool {
        self.panels
            .get(index)
            .is_some_and(|panel| panel.collapsible && panel.size == 0)
    }

    /// Moves the boundary behind handle `handle_index` by `delta_px`.
    ///
    /// The handle sits between panels `handle_index` and `handle_index + 1`; a positive delta
    /// grows the first. Both panels stay within their limits and their combined size is kept. A
    /// collapsible panel pushed below half its minimum collapses to zero and snaps back to its
    /// minimum once dragged past that point. Returns the delta actually applied.
    pub fn resize(&mut self, handle_index: usize, delta_px: i32) -> i32 {
        let before = handle_index;
        let Some(after) = handle_index.checked_add(1) else {
            return 0;
        };
        if after >= self.panels.len() || delta_px == 0 {
            return 0;
        }

        let old_before = i64::from(self.panels[before].size);
        let pair = old_before + i64::from(self.panels[after].size);

        let proposed = i64::from(self.panels[before].settle(old_before + i64::from(delta_px)));
        let next_after = i64::from(self.panels[after].settle(pair - proposed));
        let next_before = pair - next_after;
        if next_before < 0 || i64::from(self.panels[before].settle(next_before)) != next_before {
            return 0;
        }

        self.panels[before].size = next_before as u32;
        self.panels[after].size = next_after as u32;
        (next_before - old_before) as i32
    }
}
