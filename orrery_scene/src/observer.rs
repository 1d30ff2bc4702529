// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use glam::DVec3;
use orrery_layout::WorldPositions;

/// Receives the effects of scene operations.
///
/// Both methods default to doing nothing, so hosts implement only what they
/// render. `()` is the no-op observer.
pub trait SceneObserver<K> {
    /// Called after node positions changed.
    fn positions_changed(&mut self, positions: &WorldPositions<K>) {
        let _ = positions;
    }

    /// Called when the camera should look at `target`, for example after a
    /// minimap click.
    fn camera_target_requested(&mut self, target: DVec3) {
        let _ = target;
    }
}

impl<K> SceneObserver<K> for () {}

impl<K, O: SceneObserver<K> + ?Sized> SceneObserver<K> for &mut O {
    fn positions_changed(&mut self, positions: &WorldPositions<K>) {
        (**self).positions_changed(positions);
    }

    fn camera_target_requested(&mut self, target: DVec3) {
        (**self).camera_target_requested(target);
    }
}
