//! Camera poses for inspecting an exhibit and for returning to the overview.
//!
//! Exhibits sit on a plane facing +z, but the orbit camera may have swung round
//! to look at them from behind. The focus pose keeps the camera on whichever
//! side it is on, turning the x/z rotation by half a revolution when it is
//! behind. The sign of that half turn follows the current rotation so the
//! camera takes the short way round.
use std::f32::consts::PI;

use glam::Vec3;

/// Current camera transform, rotation as XYZ Euler angles in radians.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl CameraPose {
    pub fn new(position: Vec3, rotation: Vec3) -> Self {
        Self { position, rotation }
    }
}

/// Target camera state for a zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusPose {
    /// Camera position at the end of the zoom.
    pub position: Vec3,
    /// Camera rotation (XYZ Euler, radians) at the end of the zoom.
    pub rotation: Vec3,
    /// Point the orbit controls should pivot around afterwards.
    pub orbit_target: Vec3,
}

impl FocusPose {
    /// Distance from the exhibit plane when inspecting one exhibit.
    pub const DEFAULT_DISTANCE: f32 = 1.0;
    /// Distance from the exhibit plane in the overview.
    pub const OVERVIEW_DISTANCE: f32 = 2.0;

    /// Pose looking at `target` from [`Self::DEFAULT_DISTANCE`].
    pub fn toward(target: Vec3, camera: &CameraPose) -> Self {
        Self::toward_with_distance(target, camera, Self::DEFAULT_DISTANCE)
    }

    pub fn toward_with_distance(target: Vec3, camera: &CameraPose, distance: f32) -> Self {
        let behind = camera.position.z < target.z;
        let (z, rotation) = if behind {
            let half_turn = |angle: f32| if angle < 0.0 { -PI } else { PI };
            (
                target.z - distance,
                Vec3::new(half_turn(camera.rotation.x), 0.0, half_turn(camera.rotation.z)),
            )
        } else {
            (target.z + distance, Vec3::ZERO)
        };

        Self {
            position: Vec3::new(target.x, target.y, z),
            rotation,
            orbit_target: target,
        }
    }

    /// Front view of the whole plane, centred on `center`.
    pub fn overview(center: Vec3, distance: f32) -> Self {
        Self {
            position: center + Vec3::Z * distance,
            rotation: Vec3::ZERO,
            orbit_target: center,
        }
    }
}

impl Default for FocusPose {
    fn default() -> Self {
        Self::overview(Vec3::ZERO, Self::OVERVIEW_DISTANCE)
    }
}
