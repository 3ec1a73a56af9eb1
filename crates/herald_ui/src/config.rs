//! Host configuration surface.
//!
//! Supplied once; a reconfiguration takes effect on the next show (the
//! controller recomputes placement at every show, never in between).

use herald_core::{Axis, EdgeInsets, PlacementConfig, Size};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::fade::Fade;
use crate::style::BubbleStyle;
use crate::trigger::{DismissMode, TriggerMode};

/// Errors that can occur while loading or validating a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A scalar field is NaN or infinite.
    #[error("{field} must be finite, got {value}")]
    NonFinite {
        /// The offending field.
        field: &'static str,
        /// The offending value.
        value: f32,
    },

    /// A length field is negative.
    #[error("{field} must be non-negative, got {value}")]
    Negative {
        /// The offending field.
        field: &'static str,
        /// The offending value.
        value: f32,
    },

    /// Invalid TOML.
    #[error(transparent)]
    Parse(#[from] toml::de::Error),
}

/// Everything the host configures on a HERALD overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeraldConfig {
    /// Message text. Absent or empty means `show()` is a no-op by contract.
    pub message: Option<String>,
    /// Preferred placement axis.
    pub axis: Axis,
    /// Margin kept between the bubble and the viewport edges.
    pub outer_padding: EdgeInsets,
    /// Gap between the target and the pointer tip.
    pub target_gap: f32,
    /// Pointer triangle size (base width × depth).
    pub pointer_size: Size,
    /// Bubble visual style (colors, border, text, internal padding).
    pub style: BubbleStyle,
    /// Gesture that toggles the overlay.
    pub trigger: TriggerMode,
    /// Gesture that dismisses a showing overlay.
    pub dismiss: DismissMode,
    /// Fade in/out duration in seconds.
    pub fade_duration: f32,
}

impl Default for HeraldConfig {
    fn default() -> Self {
        Self {
            message: None,
            axis: Axis::Vertical,
            outer_padding: EdgeInsets::uniform(16.0),
            target_gap: 4.0,
            pointer_size: Size::new(10.0, 10.0),
            style: BubbleStyle::default(),
            trigger: TriggerMode::default(),
            dismiss: DismissMode::default(),
            fade_duration: Fade::DEFAULT_DURATION,
        }
    }
}

impl HeraldConfig {
    /// Creates a configuration with a message and defaults for the rest.
    #[must_use]
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// Loads a configuration from TOML, validating it.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks scalar fields for NaN/infinity and negative lengths.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("target_gap", self.target_gap),
            ("fade_duration", self.fade_duration),
            ("pointer_size.width", self.pointer_size.width),
            ("pointer_size.height", self.pointer_size.height),
            ("outer_padding.left", self.outer_padding.left),
            ("outer_padding.right", self.outer_padding.right),
            ("outer_padding.top", self.outer_padding.top),
            ("outer_padding.bottom", self.outer_padding.bottom),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }
        Ok(())
    }

    /// Projects the placement-engine subset of this configuration.
    #[must_use]
    pub fn placement_config(&self) -> PlacementConfig {
        PlacementConfig {
            axis: self.axis,
            outer_padding: self.outer_padding,
            target_gap: self.target_gap,
            pointer_size: self.pointer_size,
            bubble_padding: self.style.padding,
        }
    }
}
