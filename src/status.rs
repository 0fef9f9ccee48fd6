//! Bulb status classification and brightness normalization.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{
    BLINDING_THRESHOLD, BRIGHTNESS_MAX_CURRENT, BRIGHT_THRESHOLD, DIM_THRESHOLD,
    MODERATE_THRESHOLD,
};
use crate::math::{clamp, Scalar};

/// How brightly the bulb glows, as a step function of current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightStatus {
    /// Below 0.1 A.
    Off,
    /// From 0.1 A up to 1 A.
    Dim,
    /// From 1 A up to 4 A.
    Moderate,
    /// From 4 A up to 8 A.
    Bright,
    /// 8 A and above.
    Blinding,
}

impl LightStatus {
    /// Classifies `current` (A). Band lower bounds are inclusive.
    #[must_use]
    pub fn from_current(current: Scalar) -> Self {
        if current < DIM_THRESHOLD {
            Self::Off
        } else if current < MODERATE_THRESHOLD {
            Self::Dim
        } else if current < BRIGHT_THRESHOLD {
            Self::Moderate
        } else if current < BLINDING_THRESHOLD {
            Self::Bright
        } else {
            Self::Blinding
        }
    }

    /// Label shown on the status badge.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Off => "Off",
            Self::Dim => "Dim",
            Self::Moderate => "Moderate",
            Self::Bright => "Bright",
            Self::Blinding => "Maximum",
        }
    }
}

impl fmt::Display for LightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Normalized brightness in `[0, 1]`: `current / 12 A`, clamped.
#[must_use]
pub fn brightness(current: Scalar) -> Scalar {
    brightness_with_max(current, BRIGHTNESS_MAX_CURRENT)
}

/// Normalized brightness against a custom full-scale current.
#[must_use]
pub fn brightness_with_max(current: Scalar, max_current: Scalar) -> Scalar {
    clamp(current / max_current, 0.0, 1.0)
}

/// Rendering parameters for the bulb indicator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BulbAppearance {
    /// Normalized brightness.
    pub brightness: Scalar,
    /// Icon opacity, never below 0.1 so an unlit bulb stays visible.
    pub opacity: Scalar,
    /// Glow radius in pixels.
    pub glow: Scalar,
    /// Scale factor applied to the icon.
    pub scale: Scalar,
    /// Filament core turns white above 80 % brightness.
    pub white_hot: bool,
    /// Bulb shows the "OFF" caption.
    pub off: bool,
    /// Status badge is highlighted above 50 % brightness.
    pub highlight_status: bool,
}

impl BulbAppearance {
    /// Derives the appearance for a normalized brightness.
    #[must_use]
    pub fn from_brightness(brightness: Scalar) -> Self {
        let b = clamp(brightness, 0.0, 1.0);
        Self {
            brightness: b,
            opacity: b.max(0.1),
            glow: b * 60.0,
            scale: 1.0 + b * 0.05,
            white_hot: b > 0.8,
            off: b == 0.0,
            highlight_status: b > 0.5,
        }
    }
}
