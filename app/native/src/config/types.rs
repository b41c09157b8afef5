//! Docking engine configuration types.
//!
//! These are the recognized runtime options. The shell deserializes them
//! from whatever configuration source it owns and hands them to the engine
//! as plain data; the engine never reads configuration files itself.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::docking::constants::thresholds::{EDGE_THRESHOLD_PX, SNAP_THRESHOLD_PX};

/// Easing function for snap transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum EasingType {
    /// Linear interpolation.
    Linear,
    /// Ease in (slow start).
    EaseIn,
    /// Ease out (slow end).
    #[default]
    EaseOut,
    /// Ease in and out (slow start and end).
    EaseInOut,
}

/// Animation settings for applying a snap.
///
/// The engine only carries these; the shell's platform layer performs the
/// actual transition inside
/// [`NativeWindow::set_frame`](crate::docking::native::NativeWindow::set_frame).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct AnimationConfig {
    /// Whether snap transitions are animated.
    /// Default: true
    pub enabled: bool,

    /// Transition duration in milliseconds.
    /// Default: 200
    pub duration: u32,

    /// Easing function for the transition.
    /// Default: "ease-out"
    pub easing: EasingType,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            duration: 200,
            easing: EasingType::EaseOut,
        }
    }
}

/// Runtime configuration for the docking engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct DockingConfig {
    /// Snap threshold for in-workspace docking, in pixels.
    /// Default: 16
    pub snap_threshold: f64,

    /// Snap threshold for native OS windows, in pixels.
    /// Default: 10
    pub edge_threshold: f64,

    /// Animation settings for native snap transitions.
    pub animation: AnimationConfig,
}

impl Default for DockingConfig {
    fn default() -> Self {
        Self {
            snap_threshold: SNAP_THRESHOLD_PX,
            edge_threshold: EDGE_THRESHOLD_PX,
            animation: AnimationConfig::default(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
