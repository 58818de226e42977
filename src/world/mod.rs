/// Terrain generation and the voxel grid the frame loop mutates
///
/// Noise feeds the height field, the height field feeds the columns, and
/// [`WorldState`] owns the result together with the occupant and camera.

pub mod column;
pub mod height_field;
pub mod noise_source;
pub mod occupant;
pub mod state;
pub mod voxel;
pub mod voxel_world;

pub use column::*;
pub use height_field::*;
pub use noise_source::*;
pub use occupant::*;
pub use state::*;
pub use voxel::*;
pub use voxel_world::*;

use bevy::prelude::*;

use crate::config::WorldConfig;

/// Builds the world once, before the first frame
pub struct WorldGenerationPlugin;

impl Plugin for WorldGenerationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, generate_world);
    }
}

fn generate_world(mut commands: Commands, config: Res<WorldConfig>) {
    info!(
        "Generating {}x{} world with seed {}",
        config.map_size, config.map_size, config.seed
    );
    let state = WorldState::generate(&config);
    info!(
        "World ready, occupant at {} on level {}",
        state.occupant().position(),
        state.world().height(state.occupant().position())
    );
    commands.insert_resource(state);
}
