use bevy::prelude::*;
use std::collections::HashMap;

use crate::config::WorldConfig;
use crate::rendering::visibility::{DrawList, TileDraw, render};
use crate::world::{MaterialType, WorldState};

/// Depth budget shared by all blocks of one frame
const DRAW_DEPTH_RANGE: f32 = 900.0;

/// Brightness of the top, left and right faces of a block
const FACE_SHADES: [f32; 3] = [1.0, 0.8, 0.6];

/// Resource to cache the block mesh and one material per drawable material
#[derive(Resource)]
struct TileAssets {
    block_mesh: Handle<Mesh>,
    materials: HashMap<MaterialType, Handle<ColorMaterial>>,
}

/// Plugin that turns [`WorldState`] into on-screen blocks
pub struct TileRendererPlugin;

impl Plugin for TileRendererPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DrawList>()
            .add_systems(Startup, setup_tile_assets)
            .add_systems(
                Update,
                (
                    rebuild_draw_list.run_if(resource_exists::<WorldState>),
                    present_draw_list.run_if(resource_exists::<TileAssets>),
                )
                    .chain(),
            );
    }
}

/// Marker component for spawned terrain blocks
#[derive(Component)]
pub struct TerrainBlock;

fn setup_tile_assets(
    mut commands: Commands,
    config: Res<WorldConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let block_mesh = meshes.add(create_isometric_block_mesh(
        config.tile_width,
        config.tile_height,
        config.tile_depth,
    ));
    let materials = MaterialType::DRAWABLE
        .iter()
        .map(|&material| {
            let handle = materials.add(ColorMaterial::from(material.default_color()));
            (material, handle)
        })
        .collect();

    commands.insert_resource(TileAssets {
        block_mesh,
        materials,
    });
}

/// Recompute the draw list only when the world, occupant or camera changed
fn rebuild_draw_list(
    state: Res<WorldState>,
    config: Res<WorldConfig>,
    mut draw_list: ResMut<DrawList>,
) {
    if !state.is_changed() {
        return;
    }
    *draw_list = render(&state, &config);
}

/// Replace the previous frame's blocks with the current draw list
fn present_draw_list(
    mut commands: Commands,
    draw_list: Res<DrawList>,
    config: Res<WorldConfig>,
    assets: Res<TileAssets>,
    existing: Query<Entity, With<TerrainBlock>>,
) {
    if !draw_list.is_changed() {
        return;
    }

    for entity in existing.iter() {
        commands.entity(entity).despawn();
    }

    if draw_list.is_empty() {
        return;
    }

    let depth_step = DRAW_DEPTH_RANGE / draw_list.len() as f32;
    for (order, draw) in draw_list.iter().enumerate() {
        let Some(material) = assets.materials.get(&draw.material) else {
            continue;
        };
        let position = viewport_to_world(draw, &config).extend(order as f32 * depth_step);

        commands.spawn((
            Mesh2d(assets.block_mesh.clone()),
            MeshMaterial2d(material.clone()),
            Transform::from_translation(position),
            TerrainBlock,
        ));
    }
}

/// Convert top-left, y-down viewport pixels to Bevy's centered, y-up space
fn viewport_to_world(draw: &TileDraw, config: &WorldConfig) -> Vec2 {
    Vec2::new(
        draw.screen.x - config.viewport_width / 2.0,
        config.viewport_height / 2.0 - draw.screen.y,
    )
}

/// Create a block seen from above: a diamond top and two shaded side faces.
///
/// The origin is the center of the top face.
fn create_isometric_block_mesh(width: f32, height: f32, depth: f32) -> Mesh {
    let half_w = width / 2.0;
    let half_h = height / 2.0;

    let top = [
        [0.0, half_h, 0.0],
        [half_w, 0.0, 0.0],
        [0.0, -half_h, 0.0],
        [-half_w, 0.0, 0.0],
    ];
    let left = [
        [-half_w, 0.0, 0.0],
        [0.0, -half_h, 0.0],
        [0.0, -half_h - depth, 0.0],
        [-half_w, -depth, 0.0],
    ];
    let right = [
        [0.0, -half_h, 0.0],
        [half_w, 0.0, 0.0],
        [half_w, -depth, 0.0],
        [0.0, -half_h - depth, 0.0],
    ];

    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(12);
    let mut colors: Vec<[f32; 4]> = Vec::with_capacity(12);
    let mut indices: Vec<u32> = Vec::with_capacity(18);
    for (face, shade) in [top, left, right].into_iter().zip(FACE_SHADES) {
        let base = positions.len() as u32;
        positions.extend(face);
        colors.extend([[shade, shade, shade, 1.0]; 4]);
        indices.extend([base, base + 2, base + 1, base, base + 3, base + 2]);
    }

    let normals = vec![[0.0, 0.0, 1.0]; positions.len()];

    Mesh::new(
        bevy::render::render_resource::PrimitiveTopology::TriangleList,
        bevy::render::render_asset::RenderAssetUsages::default(),
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
    .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
    .with_inserted_attribute(Mesh::ATTRIBUTE_COLOR, colors)
    .with_inserted_indices(bevy::render::mesh::Indices::U32(indices))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::render::mesh::VertexAttributeValues;

    fn test_app() -> App {
        let config = WorldConfig {
            seed: 3,
            ..default()
        };
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(WorldState::generate(&config))
            .insert_resource(config)
            .init_resource::<DrawList>()
            .add_systems(Update, rebuild_draw_list);
        app
    }

    #[test]
    fn test_draw_list_follows_state() {
        let mut app = test_app();
        app.update();

        let first = app.world().resource::<DrawList>().clone();
        assert!(!first.is_empty());

        app.world_mut()
            .resource_mut::<WorldState>()
            .move_occupant(IVec2::new(1, 1));
        app.update();

        let second = app.world().resource::<DrawList>().clone();
        assert_ne!(first, second);
    }

    #[test]
    fn test_untouched_state_keeps_draw_list() {
        let mut app = test_app();
        app.update();

        // Clearing the list by hand shows whether the next update rebuilds it
        app.world_mut().resource_mut::<DrawList>().draws.clear();
        app.update();

        assert!(app.world().resource::<DrawList>().is_empty());
    }

    fn block_count(app: &mut App) -> usize {
        let mut query = app.world_mut().query_filtered::<(), With<TerrainBlock>>();
        query.iter(app.world()).count()
    }

    #[test]
    fn test_blocks_follow_draw_list() {
        let mut app = test_app();
        app.insert_resource(TileAssets {
            block_mesh: Handle::default(),
            materials: MaterialType::DRAWABLE
                .iter()
                .map(|&material| (material, Handle::default()))
                .collect(),
        })
        .add_systems(Update, present_draw_list.after(rebuild_draw_list));
        app.update();

        let drawn = app.world().resource::<DrawList>().len();
        assert!(drawn > 0);
        assert_eq!(block_count(&mut app), drawn);

        // An empty list clears the screen
        app.world_mut().resource_mut::<DrawList>().draws.clear();
        app.update();
        assert_eq!(block_count(&mut app), 0);
    }

    #[test]
    fn test_viewport_center_maps_to_origin() {
        let config = WorldConfig::default();
        let draw = TileDraw {
            material: MaterialType::Sand,
            cell: UVec2::ZERO,
            level: 0,
            local: IVec2::ZERO,
            screen: Vec2::new(640.0, 360.0),
        };
        assert_eq!(viewport_to_world(&draw, &config), Vec2::ZERO);

        let lower = TileDraw {
            screen: Vec2::new(700.0, 400.0),
            ..draw
        };
        assert_eq!(viewport_to_world(&lower, &config), Vec2::new(60.0, -40.0));
    }

    #[test]
    fn test_block_mesh_has_three_faces() {
        let mesh = create_isometric_block_mesh(30.0, 15.0, 15.0);
        assert_eq!(mesh.count_vertices(), 12);
        assert_eq!(mesh.indices().map(|indices| indices.len()), Some(18));

        let Some(VertexAttributeValues::Float32x4(colors)) = mesh.attribute(Mesh::ATTRIBUTE_COLOR)
        else {
            panic!("block mesh is missing vertex colors");
        };
        assert_eq!(colors[0], [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(colors[11], [0.6, 0.6, 0.6, 1.0]);
    }
}
