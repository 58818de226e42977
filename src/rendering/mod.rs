/// Rendering of the voxel world around the occupant
///
/// This module handles the isometric projection, visibility and painter's
/// ordering, and the Bevy entities that show the result.

pub mod isometric_projection;
pub mod tile_renderer;
pub mod visibility;

pub use isometric_projection::*;
pub use tile_renderer::*;
pub use visibility::*;
