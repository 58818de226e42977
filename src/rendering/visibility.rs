use bevy::prelude::*;

use crate::config::WorldConfig;
use crate::rendering::isometric_projection::to_iso;
use crate::world::{MaterialType, WorldState};

/// Levels the whole scene is lifted by, so the occupant sits near mid-screen
const SCENE_LIFT_LEVELS: f32 = 5.0;

/// One block to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileDraw {
    pub material: MaterialType,
    /// World cell the voxel belongs to
    #[cfg(test)]
    pub cell: UVec2,
    #[cfg(test)]
    pub level: u32,
    /// Unrotated offset from the occupant
    #[cfg(test)]
    pub local: IVec2,
    /// Top face center in viewport pixels, origin top-left, y down
    pub screen: Vec2,
}

/// Draws in painter's order: later entries cover earlier ones
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    pub draws: Vec<TileDraw>,
}

impl DrawList {
    #[inline]
    pub fn len(&self) -> usize {
        self.draws.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.draws.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TileDraw> {
        self.draws.iter()
    }
}

/// Collect every visible voxel around the occupant.
///
/// Local offsets are walked x-major over `[-d, d]²`, each rotated into a world
/// cell. Cells off the grid are culled. Within a cell, levels from
/// `surface - render_depth` up to the ceiling are visited bottom to top and air
/// is skipped. The walk itself is back-to-front, so no sort is needed.
pub fn render(state: &WorldState, config: &WorldConfig) -> DrawList {
    let world = state.world();
    let origin = state.occupant().position();
    let camera = state.camera();

    // Everything is stacked relative to the occupant's own column
    let anchor_height = world.height(origin) as f32 / 4.0;
    let half_tile = Vec2::new(config.tile_width, config.tile_height) / 2.0;
    let center = Vec2::new(config.viewport_width, config.viewport_height) / 2.0;

    let distance = config.render_distance;
    let mut draws = Vec::new();

    for x in -distance..=distance {
        for y in -distance..=distance {
            let local = IVec2::new(x, y);
            let world_cell = origin.as_ivec2() + camera.apply(local);
            if !config.contains(world_cell) {
                continue;
            }
            let cell = world_cell.as_uvec2();

            // The projection uses the local offset: rotation changes which
            // cells are sampled, not where the neighborhood lands on screen
            let flat = to_iso(local).as_vec2() * half_tile + center;

            let column = world.column(cell);
            let lowest = world.height(cell).saturating_sub(config.render_depth);
            for z in lowest..world.height_limit() {
                let Some(voxel) = column.get(z) else {
                    break;
                };
                let material = voxel.material();
                if !material.is_drawable() {
                    continue;
                }

                let lift = config.tile_depth * (z as f32 - anchor_height - SCENE_LIFT_LEVELS);
                draws.push(TileDraw {
                    material,
                    #[cfg(test)]
                    cell,
                    #[cfg(test)]
                    level: z,
                    #[cfg(test)]
                    local,
                    screen: Vec2::new(flat.x, flat.y - lift),
                });
            }
        }
    }

    trace!("Draw list rebuilt with {} blocks", draws.len());
    DrawList { draws }
}
