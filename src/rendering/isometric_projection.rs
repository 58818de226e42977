use bevy::prelude::*;

/// Horizontal diamond-grid coordinate of a local grid offset
#[inline]
pub fn iso_x(x: i32, y: i32) -> i32 {
    x - y
}

/// Vertical diamond-grid coordinate of a local grid offset
#[inline]
pub fn iso_y(x: i32, y: i32) -> i32 {
    x + y
}

/// Both projections at once.
///
/// Linear and invertible on the integer grid: stepping one cell along x moves
/// half a tile right and down, one cell along y half a tile left and down.
#[inline]
pub fn to_iso(offset: IVec2) -> IVec2 {
    IVec2::new(iso_x(offset.x, offset.y), iso_y(offset.x, offset.y))
}

/// Inverse of [`to_iso`]. Only diamond cells with matching parity map back to a grid offset.
#[cfg(test)]
pub fn from_iso(iso: IVec2) -> Option<IVec2> {
    if (iso.x + iso.y).rem_euclid(2) != 0 {
        return None;
    }
    Some(IVec2::new((iso.x + iso.y) / 2, (iso.y - iso.x) / 2))
}

/// Plugin for the fixed 2D camera looking at the diamond grid
pub struct IsometricProjectionPlugin;

impl Plugin for IsometricProjectionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_isometric_camera);
    }
}

fn setup_isometric_camera(mut commands: Commands) {
    commands.spawn((Camera2d, Transform::from_xyz(0.0, 0.0, 0.0)));

    info!("Isometric camera spawned");
}
