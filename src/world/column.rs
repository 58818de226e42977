use crate::config::NOISE_SCALE;
use crate::world::height_field::HeightField;
use crate::world::noise_source::NoiseSource;
use crate::world::voxel::VoxelData;

/// Vertical stack of voxels at one cell, level 0 at the bottom.
///
/// Length is fixed at construction to the world's height limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoxelColumn {
    levels: Vec<VoxelData>,
}

impl VoxelColumn {
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Get voxel at level z, or `None` above the ceiling
    #[inline]
    pub fn get(&self, z: u32) -> Option<VoxelData> {
        self.levels.get(z as usize).copied()
    }

    /// Overwrite the voxel at level z.
    ///
    /// Only the occupant bookkeeping in [`crate::world::VoxelWorld`] calls this.
    pub(crate) fn set(&mut self, z: u32, voxel: VoxelData) {
        self.levels[z as usize] = voxel;
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = VoxelData> + '_ {
        self.levels.iter().copied()
    }
}

/// Fill a column from the height field.
///
/// All solid levels share one material: the noise is sampled once per column.
/// Empty levels below `sea_level` hold water, the rest air. When
/// `occupant_level` is given that level is overwritten with the occupant.
pub fn build_column(
    i: u32,
    j: u32,
    height_field: &HeightField,
    noise: &impl NoiseSource,
    height_limit: u32,
    sea_level: u32,
    occupant_level: Option<u32>,
) -> VoxelColumn {
    let height = height_field.get(i, j);
    let n = noise.sample(i as f64 / NOISE_SCALE, j as f64 / NOISE_SCALE);
    let terrain = VoxelData::terrain(material_selector(n));

    let mut levels: Vec<VoxelData> = (0..height_limit)
        .map(|z| {
            if z < height {
                terrain
            } else if z < sea_level {
                VoxelData::WATER
            } else {
                VoxelData::AIR
            }
        })
        .collect();

    if let Some(z) = occupant_level {
        levels[z as usize] = VoxelData::OCCUPANT;
    }

    VoxelColumn { levels }
}

/// `floor(n · 6) + 2`, in 2..=8 for n in [0, 1]
fn material_selector(n: f64) -> i8 {
    ((n * 6.0).floor() as i8 + 2).clamp(2, 8)
}
