use bevy::prelude::*;

use crate::config::{TERRAIN_OCTAVES, WorldConfig};
use crate::rotation::CameraRotation;
use crate::world::noise_source::{FbmNoise, NoiseSource};
use crate::world::occupant::OccupantState;
use crate::world::voxel_world::VoxelWorld;

/// Everything the frame loop mutates: terrain, occupant and camera yaw.
///
/// The occupant code inside the terrain mirrors `occupant`, so both are only
/// ever changed together through [`WorldState::move_occupant`].
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct WorldState {
    world: VoxelWorld,
    occupant: OccupantState,
    camera: CameraRotation,
}

impl WorldState {
    /// Generate the terrain from the configured seed
    pub fn generate(config: &WorldConfig) -> Self {
        let noise = FbmNoise::new(config.seed, TERRAIN_OCTAVES);
        Self::generate_with(config, &noise)
    }

    pub fn generate_with(config: &WorldConfig, noise: &impl NoiseSource) -> Self {
        Self {
            world: VoxelWorld::generate(config, noise),
            occupant: OccupantState::new(config.spawn),
            camera: CameraRotation::default(),
        }
    }

    #[inline]
    pub fn world(&self) -> &VoxelWorld {
        &self.world
    }

    #[inline]
    pub fn occupant(&self) -> &OccupantState {
        &self.occupant
    }

    #[inline]
    pub fn camera(&self) -> &CameraRotation {
        &self.camera
    }

    /// Step the occupant by a local delta. Returns whether it moved.
    pub fn move_occupant(&mut self, delta: IVec2) -> bool {
        self.occupant.try_move(&mut self.world, &self.camera, delta)
    }

    /// Turn the camera by `delta` quarter steps
    pub fn rotate_camera(&mut self, delta: i32) {
        self.camera.rotate(delta);
        debug!("Camera rotation is now {:?}", self.camera.rotation());
    }
}
