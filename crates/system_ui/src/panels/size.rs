//! Panel size values and their parsing.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "unit", content = "value")]
/// A panel extent, either relative to its group or absolute.
pub enum PanelSize {
    /// Percentage of the containing group, `0..=100`.
    Percent(f32),
    /// CSS pixels.
    Pixels(u32),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Rejected panel size strings.
pub enum PanelSizeError {
    /// The input was blank.
    #[error("panel size is empty")]
    Empty,
    /// The input was not a number with an optional `px` or `%` unit.
    #[error("invalid panel size `{0}`")]
    Invalid(String),
    /// A percentage fell outside `0..=100`.
    #[error("panel size `{0}` is outside 0..=100 percent")]
    PercentOutOfRange(String),
}

impl PanelSize {
    /// Parses `"250px"`, `"30%"` or a bare number, which is read as a percentage.
    ///
    /// # Errors
    ///
    /// Returns [`PanelSizeError`] when the input is blank, malformed, or an out-of-range
    /// percentage.
    pub fn parse(raw: &str) -> Result<Self, PanelSizeError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PanelSizeError::Empty);
        }

        if let Some(number) = trimmed.strip_suffix("px") {
            let pixels = number
                .trim()
                .parse::<f32>()
                .map_err(|_| PanelSizeError::Invalid(raw.to_string()))?;
            if !pixels.is_finite() || pixels < 0.0 {
                return Err(PanelSizeError::Invalid(raw.to_string()));
            }
            return Ok(Self::Pixels(pixels.round() as u32));
        }

        let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
        let percent = number
            .parse::<f32>()
            .map_err(|_| PanelSizeError::Invalid(raw.to_string()))?;
        if !percent.is_finite() {
            return Err(PanelSizeError::Invalid(raw.to_string()));
        }
        if !(0.0..=100.0).contains(&percent) {
            return Err(PanelSizeError::PercentOutOfRange(raw.to_string()));
        }
        Ok(Self::Percent(percent))
    }

    /// CSS length for this size.
    pub fn css(self) -> String {
        self.to_string()
    }

    /// Resolves this size against a container extent, never exceeding it.
    pub fn to_pixels(self, container_px: u32) -> u32 {
        match self {
            Self::Pixels(pixels) => pixels.min(container_px),
            Self::Percent(percent) => ((container_px as f32) * percent / 100.0).round() as u32,
        }
    }
}

impl fmt::Display for PanelSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pixels(pixels) => write!(f, "{pixels}px"),
            Self::Percent(percent) => write!(f, "{percent}%"),
        }
    }
}

impl FromStr for PanelSize {
    type Err = PanelSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
