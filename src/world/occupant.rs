use bevy::prelude::*;

use crate::rotation::CameraRotation;
use crate::world::voxel_world::VoxelWorld;

/// Grid position of the single movable marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OccupantState {
    position: UVec2,
}

impl OccupantState {
    pub fn new(position: UVec2) -> Self {
        Self { position }
    }

    #[inline]
    pub fn position(&self) -> UVec2 {
        self.position
    }

    /// Move by a local delta, rotated into world space by the camera.
    ///
    /// Targets off the grid are ignored and leave everything untouched.
    /// Returns whether the occupant moved.
    pub fn try_move(
        &mut self,
        world: &mut VoxelWorld,
        camera: &CameraRotation,
        delta: IVec2,
    ) -> bool {
        let target = self.position.as_ivec2() + camera.apply(delta);
        let size = world.size() as i32;
        if !(0..size).contains(&target.x) || !(0..size).contains(&target.y) {
            debug!("Rejected move to {target}: off the grid");
            return false;
        }

        world.clear_occupant(self.position);
        self.position = target.as_uvec2();
        world.place_occupant(self.position);

        trace!("Occupant moved to {}", self.position);
        true
    }
}
