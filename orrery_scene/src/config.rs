// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use orrery_gesture::{DragConfig, InertiaConfig};
use orrery_layout::LayoutConfig;
use orrery_minimap::{CameraState, MinimapConfig};

/// Everything needed to build a [`Scene`](crate::Scene).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SceneConfig {
    /// Initial placement of nodes.
    pub layout: LayoutConfig,
    /// Minimap canvas, plane and palette.
    pub minimap: MinimapConfig,
    /// Drag smoothing and pixel-to-world conversion.
    pub drag: DragConfig,
    /// Coasting after a group-locked release.
    pub inertia: InertiaConfig,
    /// Initial and home camera pose.
    pub camera: CameraState,
    /// Whether drags start group-locked.
    pub group_locked: bool,
}
